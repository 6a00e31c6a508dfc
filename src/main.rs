use anyhow::{Context, Result};
use clap::Parser;
use staffview::cli::{Cli, Commands};
use staffview::commands::{self, ListCommand, ListRequest, MatchCommand, OutputSettings};
use staffview::config::{self, StaffviewConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = load_configuration(cli.config.as_deref())?;

    match cli.command {
        Commands::List {
            list,
            data,
            tenant,
            query,
            search_fields,
            filters,
            date_ranges,
            sort,
            order,
            page,
            output,
        } => {
            let command = ListCommand {
                kind: list,
                data,
                tenant,
                request: ListRequest {
                    query,
                    search_fields,
                    filters,
                    date_ranges,
                    sort,
                    order: order.map(Into::into),
                    page: page.page,
                    page_size: page.page_size.unwrap_or(config.list.page_size),
                },
                output: OutputSettings::resolve(&output, &config),
            };
            commands::handle_list(command, &config)
        }
        Commands::Match {
            data,
            tenant,
            min_rate,
            max_per_case,
            page,
            output,
        } => {
            let command = MatchCommand {
                data,
                tenant,
                min_rate,
                max_per_case,
                page: page.page,
                page_size: page.page_size.unwrap_or(config.list.page_size),
                output: OutputSettings::resolve(&output, &config),
            };
            commands::handle_match(command, &config)
        }
        Commands::Init { force } => commands::init_config(force),
    }
}

// Logs go to stderr so list output on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_env("STAFFVIEW_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_configuration(path: Option<&std::path::Path>) -> Result<StaffviewConfig> {
    match path {
        Some(path) => config::load_config_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display())),
        None => Ok(config::load_config()),
    }
}
