use clap::Parser;
use seqdiff::seqdiff::{run_seqdiff, Args};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run_seqdiff(args)?;
    Ok(())
}
