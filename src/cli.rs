use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "staffview")]
#[command(about = "Filter, sort and page staffing data: engineers, cases and matchings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to .staffview.toml discovery)
    #[arg(long, global = true, env = "STAFFVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of a list
    List {
        /// Which list to show
        #[arg(value_enum)]
        list: ListKind,

        /// Dataset file (.json, .yaml or .yml)
        #[arg(short, long)]
        data: PathBuf,

        /// Only show active records of this tenant
        #[arg(long)]
        tenant: Option<String>,

        /// Free-text search (case-insensitive substring)
        #[arg(short, long)]
        query: Option<String>,

        /// Fields searched by --query (camelCase names, comma-separated)
        #[arg(long = "search-fields", value_delimiter = ',')]
        search_fields: Vec<String>,

        /// Field filter as KEY=VALUE; repeatable
        #[arg(long = "filter")]
        filters: Vec<String>,

        /// Inclusive date filter as KEY=FROM..TO (either side may be empty); repeatable
        #[arg(long = "date-range")]
        date_ranges: Vec<String>,

        /// Sort field (camelCase name)
        #[arg(long)]
        sort: Option<String>,

        /// Sort order (defaults to descending for rates, ascending otherwise)
        #[arg(long, value_enum)]
        order: Option<SortOrder>,

        #[command(flatten)]
        page: PageArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Match engineers to open cases by skill overlap and list the results
    Match {
        /// Dataset file (.json, .yaml or .yml)
        #[arg(short, long)]
        data: PathBuf,

        /// Only match active records of this tenant
        #[arg(long)]
        tenant: Option<String>,

        /// Lowest matching rate (percent) to keep
        #[arg(long = "min-rate")]
        min_rate: Option<u32>,

        /// Keep at most this many engineers per case
        #[arg(long = "max-per-case")]
        max_per_case: Option<usize>,

        #[command(flatten)]
        page: PageArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write a default .staffview.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page to show (1-based; out-of-range pages are clamped)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Items per page (defaults to list.page_size from config)
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format (defaults to output.default_format from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Plain output: ASCII only, no colors
    #[arg(long)]
    pub plain: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Engineers,
    Cases,
    Matchings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

impl From<SortOrder> for crate::view::SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => crate::view::SortDirection::Ascending,
            SortOrder::Desc => crate::view::SortDirection::Descending,
        }
    }
}

impl OutputFormat {
    /// Parse a configured format name.
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_command() {
        let cli = Cli::try_parse_from([
            "staffview",
            "list",
            "engineers",
            "--data",
            "data.json",
            "--filter",
            "skills=Java",
            "--filter",
            "companyType=自社",
            "--sort",
            "name",
            "--order",
            "desc",
            "--page-size",
            "5",
        ])
        .unwrap();
        match cli.command {
            Commands::List {
                list,
                filters,
                order,
                page,
                ..
            } => {
                assert_eq!(list, ListKind::Engineers);
                assert_eq!(filters, vec!["skills=Java", "companyType=自社"]);
                assert_eq!(order, Some(SortOrder::Desc));
                assert_eq!(page.page, 1);
                assert_eq!(page.page_size, Some(5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_format_from_name() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("html"), None);
    }
}
