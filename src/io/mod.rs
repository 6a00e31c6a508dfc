pub mod dataset;
pub mod output;

pub use dataset::{load_dataset, Dataset, DatasetFormat};
pub use output::{
    create_writer, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter, PageReport, TableRow,
    TerminalWriter,
};

use crate::errors::Result;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
