use console::{style, StyledObject};
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Writes command results either as styled text or as a single JSON document.
///
/// In JSON mode stdout carries only the `{status, data}` envelope written by
/// [`OutputWriter::result`]; decorative lines are suppressed and warnings go
/// to stderr.
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        let format = if json { OutputFormat::Json } else { OutputFormat::Human };
        Self { format }
    }

    pub fn success(&self, message: impl Display) {
        self.marked(style("✓").green().bold(), message);
    }

    pub fn info(&self, message: impl Display) {
        self.marked(style("ℹ").blue().bold(), message);
    }

    pub fn warning(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", style("⚠").yellow().bold(), message),
            OutputFormat::Json => eprintln!(
                "{}",
                serde_json::json!({ "status": "warning", "message": message.to_string() })
            ),
        }
    }

    pub fn table<T: Tabled>(&self, rows: Vec<T>) {
        if self.is_json() {
            return;
        }
        if rows.is_empty() {
            println!("{}", style("(no data)").dim());
            return;
        }
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
    }

    pub fn result<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        let envelope = serde_json::json!({ "status": "success", "data": data });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        Ok(())
    }

    pub fn kv(&self, key: impl Display, value: impl Display) {
        if !self.is_json() {
            println!("{}: {}", style(key).bold(), value);
        }
    }

    pub fn section(&self, title: impl Display) {
        if !self.is_json() {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    fn marked(&self, mark: StyledObject<&str>, message: impl Display) {
        if !self.is_json() {
            println!("{mark} {message}");
        }
    }
}
