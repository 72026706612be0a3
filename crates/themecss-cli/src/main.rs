use std::process::ExitCode;

use clap::Parser;
use themecss_cli::{install_tracing, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    install_tracing(cli.verbose);

    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", console::style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
