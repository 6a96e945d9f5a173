//! smartgrid: inspect, filter, sort, page and export tabular JSON data
//! from the terminal.

mod commands;
mod table;

use clap::Parser;
use clap::Subcommand;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;

use commands::ExportArgs;
use commands::SampleArgs;
use commands::ShowArgs;

#[derive(Parser)]
#[command(name = "smartgrid", about = "Tabular data grid for the terminal", version)]
struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the visible slice of a JSON record file as a table.
    Show(ShowArgs),
    /// Export a JSON record file to CSV or JSON.
    Export(ExportArgs),
    /// Generate sample user records as JSON.
    Sample(SampleArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let result = match cli.command {
        Command::Show(args) => commands::show(args),
        Command::Export(args) => commands::export(args),
        Command::Sample(args) => commands::sample(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
