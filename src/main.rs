use anyhow::Result;
use belle::cli::{run, Args};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let report = run(&args)?;
    println!(
        "{} (bitmap offset {}, {})",
        report.output.display(),
        report.bitmap_offset.left,
        report.bitmap_offset.top
    );
    Ok(())
}
