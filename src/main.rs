use cidr_brewer::logging::init_logging;
use cidr_brewer::{run, Cli};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    if let Err(e) = init_logging(&cli.log_config, cli.verbose) {
        eprintln!("{} {e}", "warning:".yellow());
    }
    log::info!("#Start main() addrs={:?}", cli.addrs);

    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
