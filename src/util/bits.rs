/// Largest number of inputs whose assignments can be enumerated.
pub const MAX_ENUMERATED_INPUTS: usize = 63;

/// Iterator over every assignment of `width` boolean inputs.
///
/// Assignments are produced in binary-counter order: the first input varies
/// slowest and the last input varies fastest, as in a written truth table.
///
/// # Example
/// ```
/// use circuitry::util::bits::Assignments;
///
/// let all: Vec<Vec<bool>> = Assignments::new(2).unwrap().collect();
/// assert_eq!(all,
///            vec![vec![false, false],
///                 vec![false, true],
///                 vec![true, false],
///                 vec![true, true]]);
/// assert_eq!(Assignments::new(0).unwrap().count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Assignments {
    width: usize,
    next:  u64,
    end:   u64,
}

impl Assignments {
    /// Creates the enumeration, or `None` if `width` exceeds
    /// [`MAX_ENUMERATED_INPUTS`].
    #[must_use]
    pub fn new(width: usize) -> Option<Self> {
        if width > MAX_ENUMERATED_INPUTS {
            return None;
        }
        Some(Self { width,
                    next: 0,
                    end: 1u64 << width })
    }
}

impl Iterator for Assignments {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        let counter = self.next;
        self.next += 1;
        Some((0..self.width).rev().map(|bit| (counter >> bit) & 1 == 1).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
