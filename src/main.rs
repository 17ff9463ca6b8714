//! CLI entry point for batch greedy autoplay

use clap::Parser;
use tilemerge::io::cli::{BatchRunner, Cli};

fn main() -> tilemerge::Result<()> {
    let cli = Cli::parse();
    let runner = BatchRunner::new(cli)?;
    let statistics = runner.run()?;
    runner.write_summary(&statistics, &mut std::io::stdout().lock())
}
