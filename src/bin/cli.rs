// src/bin/cli.rs
use phone_advisor::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
