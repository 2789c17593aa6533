use crate::error::Result;
use crate::interfaces::command::{Command, Operation, Outcome};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Csv,
    /// One JSON object per line.
    Json,
}

/// One line of output: the command that ran and what it produced.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ReportRow {
    pub op: Operation,
    pub id: String,
    pub result: String,
}

impl ReportRow {
    /// Failures render as `error:<code>`.
    pub fn new(command: &Command, outcome: &Result<Outcome>) -> Self {
        let result = match outcome {
            Ok(outcome) => outcome.to_string(),
            Err(e) => format!("error:{}", e.code()),
        };
        Self {
            op: command.op,
            id: command.id.clone().unwrap_or_default(),
            result,
        }
    }
}

/// Writes command results as CSV (`op,id,result`) or JSON lines.
pub enum ReportWriter<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W, format: ReportFormat) -> Self {
        match format {
            ReportFormat::Csv => ReportWriter::Csv(csv::Writer::from_writer(sink)),
            ReportFormat::Json => ReportWriter::Json(sink),
        }
    }

    pub fn write(&mut self, row: &ReportRow) -> Result<()> {
        match self {
            ReportWriter::Csv(writer) => writer.serialize(row)?,
            ReportWriter::Json(writer) => {
                serde_json::to_writer(&mut *writer, row).map_err(std::io::Error::from)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match self {
            ReportWriter::Csv(writer) => writer.flush()?,
            ReportWriter::Json(writer) => writer.flush()?,
        }
        Ok(())
    }
}
