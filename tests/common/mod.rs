use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use timebank::Bank;

pub const HEADER: &str = "op,id,to,amount,time,ttl";

/// Two accounts, `alice` funded with 1000 at t=1000.
pub fn funded_bank() -> Bank {
    let mut bank = Bank::new();
    bank.create_account("alice").unwrap();
    bank.create_account("bob").unwrap();
    bank.deposit("alice", 1000, 1000).unwrap();
    bank
}

/// Writes a command file with the standard header followed by `rows`.
pub fn command_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// Generates `accounts` accounts and `rows` deposits spread across them.
pub fn generate_csv(path: &Path, accounts: usize, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["op", "id", "to", "amount", "time", "ttl"])?;
    for i in 0..accounts {
        wtr.write_record(["create_account", &format!("acct{i}"), "", "", "", ""])?;
    }
    for i in 0..rows {
        let account = format!("acct{}", i % accounts);
        let time = (1000 + i).to_string();
        wtr.write_record(["deposit", &account, "", "1", &time, ""])?;
    }

    wtr.flush()?;
    Ok(())
}
