use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::view::{PageToken, PageView};
use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// A record that renders as one table row.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// One page of a list, detached from the records it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub range: Vec<PageToken>,
}

impl PageReport {
    pub fn from_page<T: TableRow>(title: impl Into<String>, page: &PageView<'_, T>) -> Self {
        Self {
            title: title.into(),
            headers: T::headers().iter().map(|h| h.to_string()).collect(),
            rows: page.items.iter().map(|item| item.cells()).collect(),
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            page_size: page.page_size,
            range: page.range.clone(),
        }
    }

    /// 1-based positions of the first and last row shown, if any.
    pub fn item_span(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        Some((first, first + self.rows.len() - 1))
    }
}

pub trait OutputWriter {
    fn write_page(&mut self, report: &PageReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_page(&mut self, report: &PageReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_row(&mut self, cells: &[String]) -> anyhow::Result<()> {
        let escaped: Vec<String> = cells.iter().map(|c| c.replace('|', "\\|")).collect();
        writeln!(self.writer, "| {} |", escaped.join(" | "))?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_page(&mut self, report: &PageReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", report.title)?;
        writeln!(self.writer)?;
        if report.rows.is_empty() {
            writeln!(self.writer, "_No matching items._")?;
        } else {
            self.write_row(&report.headers)?;
            let rule: Vec<String> = report.headers.iter().map(|_| "---".to_string()).collect();
            writeln!(self.writer, "|{}|", rule.join("|"))?;
            for row in &report.rows {
                self.write_row(row)?;
            }
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Page {} of {} ({} items)",
            report.current_page, report.total_pages, report.total_items
        )?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatter_for(config),
        }
    }

    fn table(&self, report: &PageReport) -> Table {
        let mut table = Table::new();
        if self.formatter.unicode() {
            table.load_preset(presets::UTF8_FULL);
        } else {
            table.load_preset(presets::ASCII_FULL);
        }
        table
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(report.headers.clone());
        for row in &report.rows {
            table.add_row(row.clone());
        }
        table
    }

    /// The page strip, current page highlighted.
    fn page_strip(&self, range: &[PageToken], current: usize) -> String {
        range
            .iter()
            .map(|token| match token {
                PageToken::Page(n) if *n == current => self.formatter.current_page(*n),
                PageToken::Page(n) => self.formatter.page(*n),
                PageToken::Ellipsis => self.formatter.ellipsis(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_page(&mut self, report: &PageReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header(&report.title))?;

        if report.rows.is_empty() {
            writeln!(self.writer, "{}", self.formatter.warning("No matching items."))?;
        } else {
            let table = self.table(report);
            writeln!(self.writer, "{table}")?;
        }

        let span = match report.item_span() {
            Some((first, last)) => format!("{}-{} of {}", first, last, report.total_items),
            None => format!("0 of {}", report.total_items),
        };
        let strip = self.page_strip(&report.range, report.current_page);
        writeln!(
            self.writer,
            "{}  {}",
            strip,
            self.formatter.dim(&format!(
                "(page {}/{}, {})",
                report.current_page, report.total_pages, span
            ))
        )?;
        Ok(())
    }
}

/// Writer for `format` over `writer`.
pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    config: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::testing::matching;
    use crate::records::MatchingResult;
    use crate::view::{prepare_page, ListQuery};
    use pretty_assertions::assert_eq;

    fn report(n: usize, page: usize, page_size: usize) -> PageReport {
        let items: Vec<MatchingResult> = (0..n)
            .map(|i| matching(&format!("m{}", i), &format!("{}%", 90 - i)))
            .collect();
        let view = prepare_page(&items, &ListQuery::new(), page, page_size);
        PageReport::from_page("Matchings", &view)
    }

    fn render(writer: impl FnOnce(&mut Vec<u8>) -> Box<dyn OutputWriter + '_>, report: &PageReport) -> String {
        let mut buffer = Vec::new();
        writer(&mut buffer).write_page(report).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_span() {
        let r = report(23, 5, 5);
        assert_eq!(r.rows.len(), 3);
        assert_eq!(r.item_span(), Some((21, 23)));
        assert_eq!(report(0, 1, 5).item_span(), None);
    }

    #[test]
    fn test_json_report_shape() {
        let r = report(90, 5, 10);
        let out = render(|b| Box::new(JsonWriter::new(b)), &r);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["currentPage"], 5);
        assert_eq!(value["totalPages"], 9);
        assert_eq!(
            value["range"],
            serde_json::json!([1, "ellipsis", 4, 5, 6, "ellipsis", 9])
        );
        assert_eq!(value["rows"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn test_terminal_footer_marks_current_page() {
        let r = report(90, 5, 10);
        let out = render(
            |b| Box::new(TerminalWriter::new(b, FormattingConfig::plain())),
            &r,
        );
        assert!(out.contains("1 ... 4 [5] 6 ... 9"));
        assert!(out.contains("(page 5/9, 41-50 of 90)"));
        assert!(out.contains("Rate"));
    }

    #[test]
    fn test_terminal_unicode_ellipsis() {
        let r = report(90, 1, 10);
        let config = FormattingConfig::new(crate::formatting::ColorMode::Never, true);
        let out = render(|b| Box::new(TerminalWriter::new(b, config)), &r);
        assert!(out.contains("[1] 2 3 4 … 8 9"));
    }

    #[test]
    fn test_terminal_empty_page() {
        let r = report(0, 1, 10);
        let out = render(
            |b| Box::new(TerminalWriter::new(b, FormattingConfig::plain())),
            &r,
        );
        assert!(out.contains("No matching items."));
        assert!(out.contains("[1]  (page 1/1, 0 of 0)"));
    }

    #[test]
    fn test_markdown_escapes_pipes() {
        let mut r = report(1, 1, 10);
        r.rows[0][1] = "A|B".to_string();
        let out = render(|b| Box::new(MarkdownWriter::new(b)), &r);
        assert!(out.contains("A\\|B"));
        assert!(out.starts_with("## Matchings"));
    }
}
