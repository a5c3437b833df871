use crate::{preview, Config, CurrentLine, Issue, IssueKind};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    total_issues: usize,
    issues: &'a [Issue],
}

pub fn print_line(line: Option<&CurrentLine>, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_line(line, colored_output),
        OutputFormat::Json => print_json_line(line),
    }
}

fn print_text_line(line: Option<&CurrentLine>, colored_output: bool) {
    match line {
        Some(line) => {
            let range_info = format!("{}..{}", line.range.start, line.range.end);
            if colored_output {
                println!("{}  {}", range_info.blue().bold(), line.text);
            } else {
                println!("{}  {}", range_info, line.text);
            }
        }
        None => {
            let notice = "No actionable line at cursor";
            if colored_output {
                println!("{}", notice.dimmed());
            } else {
                println!("{}", notice);
            }
        }
    }
}

fn print_json_line(line: Option<&CurrentLine>) {
    let json_line = line.map(|l| JsonLine {
        text: &l.text,
        start: l.range.start,
        end: l.range.end,
    });
    println!("{}", serde_json::to_string_pretty(&json_line).unwrap());
}

pub fn print_issues(issues: &[Issue], config: &Config, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_issues(issues, config, colored_output),
        OutputFormat::Json => print_json_issues(issues),
    }
}

fn print_text_issues(issues: &[Issue], config: &Config, colored_output: bool) {
    for issue in issues {
        let range_info = format!("{}..{}", issue.span.start, issue.span.end);
        let message = preview::truncate(&issue.message, config.tooltip_max_chars);

        if colored_output {
            println!(
                "  {} {} {}",
                range_info.blue().bold(),
                colorize_word(&issue.word, issue.kind),
                message
            );
        } else {
            println!(
                "  {} [{}] {} {}",
                range_info,
                issue.kind.label().to_lowercase(),
                issue.word,
                message
            );
        }

        let visible = preview::capped(&issue.suggestions, config.max_visible_suggestions);
        if !visible.is_empty() {
            if colored_output {
                let suggestions = visible
                    .iter()
                    .map(|s| s.green().to_string())
                    .collect::<Vec<_>>()
                    .join(&", ".dimmed().to_string());
                println!("    {} {}", "→".dimmed(), suggestions);
            } else {
                println!("    → {}", visible.join(", "));
            }
        }
    }
}

fn print_json_issues(issues: &[Issue]) {
    let output = JsonOutput {
        total_issues: issues.len(),
        issues,
    };
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn colorize_word(word: &str, kind: IssueKind) -> ColoredString {
    // Squiggly color convention: spelling red, grammar yellow, style blue.
    match kind {
        IssueKind::Spelling => word.red().bold(),
        IssueKind::Grammar => word.yellow().bold(),
        IssueKind::Style => word.blue().bold(),
    }
}

pub fn print_merge_summary(
    primary_count: usize,
    secondary_count: usize,
    merged_count: usize,
    colored_output: bool,
) {
    println!();
    if merged_count == 0 {
        if colored_output {
            println!("{}", "✓ No issues to show!".green().bold());
        } else {
            println!("✓ No issues to show!");
        }
        return;
    }

    let dropped = primary_count + secondary_count - merged_count;
    let issue_word = if merged_count == 1 { "issue" } else { "issues" };
    if colored_output {
        println!(
            "{} {} {} ({} overlapping dropped)",
            "✗".red().bold(),
            merged_count.to_string().red().bold(),
            issue_word,
            dropped
        );
    } else {
        println!("✗ {} {} ({} overlapping dropped)", merged_count, issue_word, dropped);
    }
}
