use crate::report::counter::Counter;
use crate::report::tally::{LevelCounts, LineTally};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

/// Machine-readable snapshot of a `clean` run, written as `summary.json`.
///
/// Field order here is the key order in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_lines: u64,
    pub valid_lines: u64,
    pub invalid_lines: u64,
    pub levels: LevelCounts,
    pub top_services: Vec<ServiceCount>,
    pub top_errors: Vec<ErrorCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceCount {
    pub service: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorCount {
    pub message: String,
    pub count: u64,
}

impl Summary {
    pub fn new(tally: &LineTally, services: &Counter, errors: &Counter, top_n: usize) -> Self {
        Self {
            total_lines: tally.total_lines,
            valid_lines: tally.valid_lines(),
            invalid_lines: tally.invalid_lines(),
            levels: tally.levels,
            top_services: services
                .top(top_n)
                .into_iter()
                .map(|(service, count)| ServiceCount {
                    service: service.to_string(),
                    count,
                })
                .collect(),
            top_errors: errors
                .top(top_n)
                .into_iter()
                .map(|(message, count)| ErrorCount {
                    message: message.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

/// Writes the summary as JSON indented by four spaces, with a trailing newline.
pub fn write_summary_json<W: Write>(mut writer: W, summary: &Summary) -> serde_json::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    summary.serialize(&mut ser)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)
}
