//! abntfmt CLI - ABNT formatter for academic DOCX manuscripts

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use abntfmt::{Document, Formatter};

#[derive(Parser)]
#[command(name = "abntfmt")]
#[command(version)]
#[command(about = "Format academic DOCX manuscripts to the ABNT standard", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory (next to the input if not specified)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a manuscript and write the result next to it
    #[command(alias = "fmt")]
    Format {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory (next to the input if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show document metadata and structure
    Info {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Format { input, output }) => cmd_format(&input, output.as_deref()),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        None => {
            // Default behavior: format if an input is provided
            if let Some(input) = cli.input {
                cmd_format(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: abntfmt <FILE>".yellow());
                println!("       abntfmt --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_format(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let mut formatter = Formatter::new();
    if let Some(dir) = output {
        std::fs::create_dir_all(dir)?;
        formatter = formatter.with_output_dir(dir);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Formatting {}...", input.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = formatter.format(input);
    pb.finish_and_clear();

    let path = result?;
    println!("{} {}", "Saved to".green(), path.display());
    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Document::open(input)?;

    if json {
        let info = serde_json::json!({
            "title": doc.metadata.title,
            "author": doc.metadata.author,
            "subject": doc.metadata.subject,
            "created": doc.metadata.created,
            "modified": doc.metadata.modified,
            "paragraphs": doc.paragraph_count(),
            "styles": doc.styles.len(),
            "sections": doc.sections.len(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Document".green().bold());
    if let Some(title) = &doc.metadata.title {
        println!("  Title:      {title}");
    }
    if let Some(author) = &doc.metadata.author {
        println!("  Author:     {author}");
    }
    if let Some(created) = &doc.metadata.created {
        println!("  Created:    {created}");
    }
    if let Some(modified) = &doc.metadata.modified {
        println!("  Modified:   {modified}");
    }
    println!("  Paragraphs: {}", doc.paragraph_count());
    println!("  Styles:     {}", doc.styles.len());
    println!("  Sections:   {}", doc.sections.len());

    if let Some(section) = doc.sections.first() {
        let margins = &section.margins;
        println!(
            "  Margins:    {:.1}/{:.1}/{:.1}/{:.1} pt (top/bottom/left/right)",
            margins.top, margins.bottom, margins.left, margins.right
        );
    }

    Ok(())
}
