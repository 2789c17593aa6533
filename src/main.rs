use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use timebank::SharedBank;
use timebank::interfaces::csv::command_reader::CommandReader;
use timebank::interfaces::csv::report_writer::{ReportFormat, ReportRow, ReportWriter};
use timebank::logging::{LogConfig, init_logging};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input commands CSV file (header: op,id,to,amount,time,ttl)
    input: PathBuf,

    /// Write results here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Result format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    format: ReportFormat,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig {
        level: cli.log_level.clone(),
        json: cli.log_json,
    });

    let sink: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path).into_diagnostic()?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = ReportWriter::new(sink, cli.format);

    let bank = SharedBank::new();
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command_result in reader.commands() {
        match command_result {
            Ok(command) => {
                let outcome = bank.with(|bank| command.apply(bank)).await;
                if let Err(e) = &outcome {
                    tracing::debug!(op = ?command.op, error = %e, "command rejected");
                }
                writer
                    .write(&ReportRow::new(&command, &outcome))
                    .into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
