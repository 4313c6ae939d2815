//! metricdiff CLI
//!
//! Compares two metric catalogs and prints a change report.
//!
//! Usage: metricdiff <OLD> <NEW> [--format markdown|json] [--no-details] [--strict]

use clap::Parser;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "metricdiff", version)]
#[command(about = "Report metric changes between two catalog versions", long_about = None)]
struct Cli {
    #[command(flatten)]
    compare: commands::compare::CompareArgs,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version go to stdout and succeed; usage errors exit 1
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = commands::compare::execute(cli.compare) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
