use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use proofline::cli::output::{self, OutputFormat};
use proofline::{line, merge, report, Config};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "proofline")]
#[command(version, about = "Correction-surface toolkit for text-editing assistants", long_about = None)]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Show the editable line at a cursor position
    Line {
        /// File holding the text buffer
        file: PathBuf,

        /// Cursor offset in UTF-16 code units (out-of-range values are clamped)
        #[arg(short, long, allow_hyphen_values = true)]
        cursor: isize,
    },
    /// Merge issue reports from two checker backends
    Merge {
        /// Report from the authoritative backend (JSON)
        #[arg(long)]
        primary: PathBuf,

        /// Report from the secondary backend (JSON)
        #[arg(long)]
        secondary: PathBuf,

        /// Maximum suggestions shown per issue
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "proofline", &mut io::stdout());
        return Ok(());
    }

    let colored = !cli.no_color;

    match cli.command {
        Some(Commands::Line { file, cursor }) => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read file: {}", file.display()))?;

            let located = line::at_cursor(&text, cursor);
            output::print_line(located.as_ref(), colored, &cli.format);
        }
        Some(Commands::Merge {
            primary,
            secondary,
            limit,
        }) => {
            let config = Config::load(limit)?;

            let primary_issues = report::load(&primary)
                .with_context(|| format!("Failed to load primary report: {}", primary.display()))?;
            let secondary_issues = report::load(&secondary).with_context(|| {
                format!("Failed to load secondary report: {}", secondary.display())
            })?;

            let merged = merge::merge_issues(&primary_issues, &secondary_issues);
            output::print_issues(&merged, &config, colored, &cli.format);

            if matches!(cli.format, OutputFormat::Text) {
                output::print_merge_summary(
                    primary_issues.len(),
                    secondary_issues.len(),
                    merged.len(),
                    colored,
                );
            }
        }
        None => {
            anyhow::bail!("No command specified. Use --help for usage information.");
        }
    }

    Ok(())
}
