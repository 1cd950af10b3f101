//! DMR CLI - Command line tool for inspecting Des Moines River station data.

use clap::Parser;

mod cmd;

#[derive(Parser)]
#[command(
    name = "dmr-cli",
    version,
    about = "Des Moines River nitrate station toolkit"
)]
struct Cli {
    /// Station CSV to use instead of the embedded dataset
    #[arg(long, global = true)]
    csv: Option<String>,

    #[command(subcommand)]
    command: cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cmd::run(cli.command, cli.csv.as_deref())
}
