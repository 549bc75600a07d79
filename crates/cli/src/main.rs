use std::process::ExitCode;

use clap::Parser;

use stockroom_cli::args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    stockroom_observability::init(cli.log_format);

    tracing::debug!(file = %cli.file.display(), "starting stockroom");

    match stockroom_cli::commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
