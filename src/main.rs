//! stylekit - Render JSON style rules to CSS

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use stylekit::Stylesheet;

#[derive(Parser)]
#[command(name = "stylekit")]
#[command(version, about = "Render JSON style rules to compact CSS", long_about = None)]
#[command(after_help = "EXAMPLES:
    stylekit badges.json                 Print CSS to stdout
    stylekit badges.json -o badges.css   Write CSS to a file
    stylekit -n badges.json              One rule per line")]
struct Cli {
    /// Input file (JSON array of rules)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Put each rule on its own line
    #[arg(short, long)]
    newline: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> stylekit::Result<()> {
    log::debug!("reading {}", cli.input.display());
    let sheet = Stylesheet::from_json_reader(File::open(&cli.input)?)?;
    let separator = if cli.newline { "\n" } else { "" };

    match &cli.output {
        Some(path) => {
            let mut file = File::create(path)?;
            sheet.write_css(&mut file, separator)?;
            if cli.newline {
                file.write_all(b"\n")?;
            }
            if !cli.quiet {
                eprintln!(
                    "Rendered {} rules: {} -> {}",
                    sheet.len(),
                    cli.input.display(),
                    path.display()
                );
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            sheet.write_css(&mut stdout, separator)?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
