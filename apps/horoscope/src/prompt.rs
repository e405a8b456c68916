use crate::cli::Args;
use anyhow::Context;
use std::io::{self, BufRead, Write};

fn ask(label: &str) -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}: ", label)?;
    stdout.flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        anyhow::bail!("No input for {}", label);
    }
    Ok(line.trim().to_string())
}

/// Ask for whatever the command line left out
pub fn fill_missing(args: &mut Args, needs_time: bool) -> anyhow::Result<()> {
    if needs_time {
        if args.date.is_none() {
            args.date = Some(ask("Enter date (YYYY-MM-DD)")?);
        }
        if args.time.is_none() {
            args.time = Some(ask("Enter time (HH:MM, 24h)")?);
        }
    }
    if args.location.is_none() && args.lat.is_none() {
        args.location = Some(ask("Enter location (e.g. São Paulo, Brazil)")?);
    }
    Ok(())
}
