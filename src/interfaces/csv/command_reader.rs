use crate::error::{LedgerError, Result};
use crate::interfaces::command::Command;
use std::io::Read;

/// Reads commands from a CSV source with the header
/// `op,id,to,amount,time,ttl`.
///
/// Wraps `csv::Reader` and yields `Result<Command>` per row. Whitespace is
/// trimmed and short rows are accepted; absent columns read as empty.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and deserializes commands, one row at a time.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LedgerError::from))
    }
}
