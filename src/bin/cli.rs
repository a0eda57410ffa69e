// src/bin/cli.rs
use spec_table::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(std::env::args().skip(1))?;
    Ok(())
}
