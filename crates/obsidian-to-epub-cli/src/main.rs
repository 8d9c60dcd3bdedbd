//! obsidian-to-epub - bundle a folder of Obsidian notes into one EPUB

use anyhow::{Context, Result, bail};
use clap::Parser;
use obsidian_to_epub_config::Config;
use obsidian_to_epub_engine::{Pandoc, convert_notes, io};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "obsidian-to-epub")]
#[command(version, about = "Convert Obsidian Markdown files into an EPUB", long_about = None)]
#[command(after_help = "EXAMPLES:
    obsidian-to-epub ~/vault/book book.epub
    obsidian-to-epub notes out/notes.epub --config pandoc.toml")]
struct Cli {
    /// Path to the directory containing Markdown files
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// Path to the output EPUB file
    #[arg(value_name = "OUTPUT_FILE")]
    output_file: PathBuf,

    /// Config file [default: ~/.config/obsidian-to-epub/config.toml]
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if io::validate_source_dir(&cli.input_dir).is_err() {
        bail!(
            "Input directory '{}' does not exist.",
            cli.input_dir.display()
        );
    }

    let config =
        Config::load_or_default(cli.config.as_deref()).context("Failed to load config file")?;
    let pandoc = Pandoc::new(config.pandoc_path).with_extra_args(config.extra_args);
    log::info!("Using pandoc at {}", pandoc.program().display());

    println!("Generating EPUB: {}", cli.output_file.display());
    convert_notes(&cli.input_dir, &cli.output_file, &pandoc, |source| {
        println!("Processing: {}", source.display())
    })
    .context("EPUB generation failed")?;

    println!("EPUB generation complete!");
    Ok(())
}
