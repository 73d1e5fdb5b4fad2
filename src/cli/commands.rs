//! Command implementations for the chunklex CLI.

use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::rule::{RuleFile, RuleSpec};
use crate::token::Token;
use crate::tokenizer::Tokenizer;

/// Execute a CLI command.
pub fn execute_command(args: ChunklexArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize_text(tokenize_args, &args),
        Command::Check(check_args) => check_rules(check_args, &args),
    }
}

/// Tokenize text from the command line, a file, or stdin.
fn tokenize_text(args: &TokenizeArgs, cli_args: &ChunklexArgs) -> Result<()> {
    let mut rule_file = RuleFile::from_path(&args.rules_file)?;
    apply_overrides(&mut rule_file, args);

    let tokenizer = Tokenizer::from_rule_file(&rule_file)?;
    info!(
        "Loaded {} rules from {}",
        tokenizer.rules().len(),
        args.rules_file.display()
    );

    let text = read_input(args)?;
    let start_time = Instant::now();

    let result = if args.trace {
        let (segments, stats) = tokenizer.trace(&text);
        let tokens = segments
            .iter()
            .filter(|segment| segment.is_delivered())
            .map(|segment| Token::new(segment.text.as_str(), segment.name.as_deref().unwrap_or("")))
            .collect();
        TokenizeResult {
            tokens,
            segments: Some(segments),
            stats: args.stats.then_some(stats),
            duration_ms: start_time.elapsed().as_millis() as u64,
        }
    } else {
        let mut tokens = Vec::new();
        let stats = tokenizer.tokenize(&text, |text, name| tokens.push(Token::new(text, name)));
        TokenizeResult {
            tokens,
            segments: None,
            stats: args.stats.then_some(stats),
            duration_ms: start_time.elapsed().as_millis() as u64,
        }
    };

    output_tokens(&result, cli_args)
}

/// Load a rule file and list its rules.
fn check_rules(args: &CheckArgs, cli_args: &ChunklexArgs) -> Result<()> {
    let rule_file = RuleFile::from_path(&args.rules_file)?;
    let tokenizer = Tokenizer::from_rule_file(&rule_file)?;

    let listing = RuleListing {
        path: args.rules_file.to_string_lossy().to_string(),
        config: tokenizer.config().clone(),
        rules: tokenizer.rules().iter().map(RuleSpec::from).collect(),
    };

    output_rules(&listing, cli_args)
}

/// Apply command line overrides on top of the rule file configuration.
fn apply_overrides(rule_file: &mut RuleFile, args: &TokenizeArgs) {
    let config = &mut rule_file.config;
    if let Some(chunk_size) = args.chunk_size {
        config.chunk_size = chunk_size;
    }
    if let Some(step_size) = args.step_size {
        config.step_size = step_size;
    }
    if let Some(flush) = args.flush {
        config.flush_policy = flush.into();
    }
    if args.no_trim {
        config.trim_input = false;
    }
}

fn read_input(args: &TokenizeArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.input {
        return Ok(fs::read_to_string(path)?);
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
