use std::process::ExitCode;

use clap::Parser;
use perfdeck::cli::{Cli, Commands, RenderArgs};
use perfdeck::{run_report, run_sample};
use perfdeck_log::{derive_log_level, init_logging};
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(derive_log_level(cli.verbose, cli.quiet)) {
        eprintln!("{err}");
    }

    let result = match cli.command.unwrap_or(Commands::Render(RenderArgs::default())) {
        Commands::Render(args) => run_report(&args.to_run_options()).map(|report| {
            println!("{report}");
        }),
        Commands::Sample(args) => run_sample(&args.output).map(|n_rows| {
            info!(rows = n_rows, path = %args.output.display(), "sample workbook ready");
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
