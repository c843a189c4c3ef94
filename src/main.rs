use std::{
    fs::File,
    io::{self, BufReader, IsTerminal},
    path::PathBuf,
};

use circuitry::{config::Config, interpreter::storage::MAX_CIRCUITS, run};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// circuitry is a console simulator of digital integrated circuits. It reads
/// DEFINE, RUN, ALL, FIND, PRINT and EXIT commands, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read commands from this file instead of standard input.
    script: Option<PathBuf>,

    /// Maximum number of circuits that can be defined.
    #[arg(short, long, default_value_t = MAX_CIRCUITS)]
    capacity: usize,

    /// Never print the banner and the command prompt.
    #[arg(long)]
    no_prompt: bool,

    /// Do not echo the truth table read by FIND.
    #[arg(short, long)]
    quiet_table: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level)
                                             .with_writer(io::stderr)
                                             .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install the logger: {e}");
    }

    let stdin = io::stdin();
    let config = Config { capacity:   args.capacity,
                          prompt:     !args.no_prompt
                                      && args.script.is_none()
                                      && stdin.is_terminal(),
                          show_table: !args.quiet_table, };

    let result = match &args.script {
        Some(path) => {
            let file = File::open(path).unwrap_or_else(|_| {
                           eprintln!("Failed to read the script '{}'. Perhaps this file does not exist?",
                                     path.display());
                           std::process::exit(1);
                       });
            run(BufReader::new(file), &mut io::stdout(), &mut io::stderr(), &config)
        },
        None => run(stdin.lock(), &mut io::stdout(), &mut io::stderr(), &config),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
