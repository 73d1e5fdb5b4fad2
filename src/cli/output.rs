//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{ChunklexArgs, OutputFormat};
use crate::config::TokenizerConfig;
use crate::error::Result;
use crate::rule::RuleSpec;
use crate::token::{Segment, Token, TokenizeStats};

/// Result structure for the tokenize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub tokens: Vec<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<TokenizeStats>,
    pub duration_ms: u64,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct RuleListing {
    pub path: String,
    pub config: TokenizerConfig,
    pub rules: Vec<RuleSpec>,
}

/// Print a tokenize result in the selected format.
pub fn output_tokens(result: &TokenizeResult, args: &ChunklexArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            match &result.segments {
                Some(segments) => {
                    for segment in segments {
                        let name = segment.name.as_deref().unwrap_or("-");
                        println!("{:<8} {:<16} {:?}", kind_label(segment), name, segment.text);
                    }
                }
                None => {
                    for token in &result.tokens {
                        println!("{token}");
                    }
                }
            }
            if let Some(stats) = &result.stats {
                print_stats_human(stats, result.duration_ms);
            }
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => {
            match &result.segments {
                Some(segments) => {
                    println!("kind,name,text");
                    for segment in segments {
                        println!(
                            "{},{},{}",
                            kind_label(segment),
                            format_csv_field(segment.name.as_deref().unwrap_or("")),
                            format_csv_field(&segment.text)
                        );
                    }
                }
                None => {
                    println!("name,text");
                    for token in &result.tokens {
                        println!(
                            "{},{}",
                            format_csv_field(&token.name),
                            format_csv_field(&token.text)
                        );
                    }
                }
            }
            Ok(())
        }
    }
}

/// Print a rule listing in the selected format.
pub fn output_rules(listing: &RuleListing, args: &ChunklexArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Rules from {}", listing.path);
                println!(
                    "chunk size: {}, step size: {}, flush: {:?}, trim: {}",
                    listing.config.chunk_size,
                    listing.config.step_size,
                    listing.config.flush_policy,
                    listing.config.trim_input
                );
                println!();
            }
            for (priority, rule) in listing.rules.iter().enumerate() {
                let ignored = if rule.ignored { " [ignored]" } else { "" };
                println!("{priority:>3}  {:<16} {}{ignored}", rule.name, rule.pattern);
            }
            Ok(())
        }
        OutputFormat::Json => output_json(listing, args),
        OutputFormat::Csv => {
            println!("priority,name,pattern,ignored");
            for (priority, rule) in listing.rules.iter().enumerate() {
                println!(
                    "{priority},{},{},{}",
                    format_csv_field(&rule.name),
                    format_csv_field(&rule.pattern),
                    rule.ignored
                );
            }
            Ok(())
        }
    }
}

fn print_stats_human(stats: &TokenizeStats, duration_ms: u64) {
    println!();
    println!("Statistics:");
    println!("  Tokens:   {}", stats.emitted);
    println!("  Unknown:  {}", stats.unknown);
    println!("  Ignored:  {}", stats.ignored);
    println!("  Dropped:  {}", stats.dropped);
    println!("  Chunks:   {}", stats.chunks);
    println!("  Time:     {duration_ms} ms");
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ChunklexArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn kind_label(segment: &Segment) -> &'static str {
    use crate::token::SegmentKind;

    match segment.kind {
        SegmentKind::Emitted => "token",
        SegmentKind::Ignored => "ignored",
        SegmentKind::Unknown => "unknown",
        SegmentKind::Dropped => "dropped",
    }
}

/// Quote a CSV field when it contains separators, quotes or line breaks.
fn format_csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
