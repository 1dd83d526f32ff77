//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use eyre::Result;

fn main() -> Result<()> {
    tunefeed_cli::run()?;
    Ok(())
}
