use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::handlers::convert::ConvertRequest;
use crate::handlers::report::ReportRequest;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    match cli.command {
        Commands::Convert {
            output_dir,
            limit,
            all,
            log_root,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            handlers::convert::handle(
                &config,
                ConvertRequest {
                    output_dir,
                    limit,
                    all,
                    log_root,
                },
            )
        }

        Commands::Report {
            project_root,
            logs_dir,
            output,
        } => handlers::report::handle(ReportRequest {
            project_root,
            logs_dir,
            output,
        }),
    }
}
