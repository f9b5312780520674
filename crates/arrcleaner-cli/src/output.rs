use clap::ValueEnum;
use comfy_table::{Attribute, Cell, Table};
use owo_colors::OwoColorize;
use serde_json::json;
use watch_report_models::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{} {}", "✓".green(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "success", "message": msg.as_ref() }));
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{}", msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "info", "message": msg.as_ref() }));
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{} {}", "⚠".yellow(), msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "warning", "message": msg.as_ref() }));
            }
        }
    }

    /// Bucket counts after collection: a table for humans, one JSON object otherwise
    pub fn report_summary(&self, report: &Report) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => println!("{}", summary_table(report)),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "summary",
                    "summary": report.summary(),
                    "warnings": report.warnings,
                }));
            }
        }
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            _ => println!("{}", serde_json::to_string(data).unwrap_or_default()),
        }
    }
}

fn summary_rows(report: &Report) -> Vec<(&'static str, usize)> {
    let s = report.summary();
    vec![
        ("Users", s.users),
        ("Movies watched by everyone", s.movies_watched_by_all),
        ("Movies watched by some", s.movies_watched_by_some),
        ("Series fully watched by everyone", s.series_fully_watched_by_all),
        ("Series fully watched by some", s.series_fully_watched_by_some),
        ("Series partially watched by everyone", s.series_partially_watched_by_all),
        ("Series partially watched by some", s.series_partially_watched_by_some),
    ]
}

pub fn summary_table(report: &Report) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Watch Report").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
    ]);
    for (label, count) in summary_rows(report) {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}
