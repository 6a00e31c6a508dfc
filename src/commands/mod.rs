//! CLI command implementations.
//!
//! - **list**: filter, sort and page one list from a dataset file
//! - **match**: run batch matching and page through the results
//! - **init**: write a default configuration file

pub mod init;
pub mod list;
pub mod recommend;

pub use init::init_config;
pub use list::{build_report, handle_list, ListCommand, ListRequest};
pub use recommend::{handle_match, MatchCommand};

use crate::cli::OutputArgs;
use crate::cli::OutputFormat as CliOutputFormat;
use crate::config::StaffviewConfig;
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::{self, create_writer, OutputFormat, PageReport};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

/// Where and how a page report is written.
#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

impl OutputSettings {
    /// Combine command-line flags with configured defaults; flags win.
    pub fn resolve(args: &OutputArgs, config: &StaffviewConfig) -> Self {
        let format = args
            .format
            .or_else(|| {
                let configured = CliOutputFormat::from_name(&config.output.default_format);
                if configured.is_none() {
                    log::warn!(
                        "Unknown output.default_format '{}'. Using terminal.",
                        config.output.default_format
                    );
                }
                configured
            })
            .unwrap_or(CliOutputFormat::Terminal);

        let formatting = if args.plain {
            FormattingConfig::plain()
        } else if args.output.is_some() {
            FormattingConfig::new(ColorMode::Never, true)
        } else {
            FormattingConfig::from_env(config.output.color_mode())
        };

        Self {
            format: format.into(),
            output: args.output.clone(),
            formatting,
        }
    }
}

/// Write `report` to the configured destination.
pub fn write_report(report: &PageReport, settings: &OutputSettings) -> Result<()> {
    match &settings.output {
        Some(path) => {
            let mut buffer = Vec::new();
            create_writer(settings.format, Box::new(&mut buffer), settings.formatting)
                .write_page(report)?;
            let content = String::from_utf8(buffer).context("Rendered output is not UTF-8")?;
            io::write_file(path, &content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote page {} to {}", report.current_page, path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            create_writer(settings.format, Box::new(&mut handle), settings.formatting)
                .write_page(report)?;
            handle.flush()?;
        }
    }
    Ok(())
}
