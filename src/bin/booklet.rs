//! Text Booklet CLI tool
//!
//! A command-line tool for turning plain text into a paginated booklet.

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use text_booklet::input::{read_text, read_text_file, STDIN_LABEL};
use text_booklet::layout::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use text_booklet::{generate_booklet, GenerateOptions, PageLayout};

/// Text Booklet - Generate a formatted booklet from text content
#[derive(Parser)]
#[command(name = "booklet")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Paginate a file with the default 80x50 layout
    booklet notes.txt

    # Add a title page and write to a custom path
    booklet notes.txt -o notes-booklet.txt --title \"Field Notes\" --author \"Ada\"

    # Read from standard input with a narrow layout
    cat notes.txt | booklet --width 60 --height 40")]
struct Cli {
    /// Input text file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "booklet.txt")]
    output: PathBuf,

    /// Title for the booklet
    #[arg(short, long)]
    title: Option<String>,

    /// Author name for the title page (used only with --title)
    #[arg(short, long)]
    author: Option<String>,

    /// Page width in characters
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = parse_dimension)]
    width: usize,

    /// Page height in lines
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = parse_dimension)]
    height: usize,
}

fn parse_dimension(s: &str) -> Result<usize, String> {
    let value = s.parse::<usize>().map_err(|_| "Not a positive whole number.")?;
    if value == 0 {
        return Err("Must be greater than zero.".to_string());
    }
    Ok(value)
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("text_booklet=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let content = match &cli.input {
        Some(path) => read_text_file(path)?,
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                eprintln!("Reading from stdin... (Press Ctrl+D when finished)");
            }
            read_text(stdin.lock(), STDIN_LABEL)?
        }
    };

    let options = GenerateOptions {
        layout: PageLayout::new(cli.width, cli.height)?,
        title: cli.title,
        author: cli.author,
    };

    let booklet = generate_booklet(&content, &options)?;
    let saved = booklet.save(&cli.output)?;

    println!("Booklet saved to: {}", saved.display());
    println!("Generated booklet with {} pages.", booklet.page_count());

    Ok(())
}
