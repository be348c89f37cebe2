//! Rill CLI.
//!
//! `rill <file.rill>` scans a script and dumps its token stream;
//! bare `rill` starts the interactive prompt.

use rillc::commands::{run_file, run_prompt, EXIT_USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let code = match args.get(1).map(String::as_str) {
        None => run_prompt(),
        Some("help" | "--help" | "-h") => {
            print_usage();
            0
        }
        Some("tokens") => match args.get(2).map(String::as_str) {
            Some(path) => run_file(path),
            None => {
                eprintln!("Usage: rill tokens <file.rill>");
                EXIT_USAGE
            }
        },
        Some(flag) if flag.starts_with('-') => {
            eprintln!("error: unknown option `{flag}`");
            print_usage();
            EXIT_USAGE
        }
        Some(path) => run_file(path),
    };

    std::process::exit(code);
}

fn print_usage() {
    println!("Usage: rill [command] [file]");
    println!();
    println!("Commands:");
    println!("  <file.rill>          Scan a script and print its token stream");
    println!("  tokens <file.rill>   Same, explicit command form");
    println!("  help                 Show this message");
    println!();
    println!("With no arguments, rill starts an interactive prompt.");
    println!("Set RILL_LOG (e.g. RILL_LOG=debug) for driver tracing output.");
}

/// Install the tracing subscriber, filtered by `RILL_LOG`.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env("RILL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
