//! Integration tests for loading tokenizers from JSON rule files.

use std::fs;

use chunklex::prelude::*;
use tempfile::TempDir;

const SENTENCE_RULES: &str = r#"{
    "config": {"chunk_size": 64, "step_size": 8},
    "rules": [
        {"pattern": "^,$", "name": "comma"},
        {"pattern": "^[a-z]+$", "name": "word"},
        {"pattern": "^\\s+$", "name": "whitespace"}
    ],
    "ignore": ["whitespace"]
}"#;

#[test]
fn test_load_rule_file_from_disk() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.json");
    fs::write(&path, SENTENCE_RULES)?;

    let tokenizer = Tokenizer::from_path(&path)?;
    assert_eq!(tokenizer.config().chunk_size, 64);
    assert_eq!(tokenizer.config().step_size, 8);
    assert_eq!(tokenizer.rules().len(), 3);

    let tokens = tokenizer.tokenize_to_vec("cat, dog");
    assert_eq!(
        tokens,
        vec![
            Token::new("cat", "word"),
            Token::new(",", "comma"),
            Token::new("dog", "word"),
        ]
    );
    Ok(())
}

#[test]
fn test_missing_rule_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Tokenizer::from_path(temp_dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ChunklexError::Io(_)));
}

#[test]
fn test_malformed_rule_file() {
    let err = Tokenizer::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ChunklexError::Json(_)));
}

#[test]
fn test_invalid_config_in_rule_file() {
    let json = r#"{"config": {"chunk_size": 4, "step_size": 8}, "rules": []}"#;
    let err = Tokenizer::from_json(json).unwrap_err();
    assert!(matches!(err, ChunklexError::InvalidConfig(_)));
}

#[test]
fn test_invalid_pattern_in_rule_file() {
    let json = r#"{"rules": [{"pattern": "(", "name": "open"}]}"#;
    let err = Tokenizer::from_json(json).unwrap_err();
    assert!(matches!(err, ChunklexError::InvalidPattern { .. }));
}

#[test]
fn test_rule_file_round_trip_preserves_priority() -> Result<()> {
    let file = RuleFile::from_json(SENTENCE_RULES)?;
    let tokenizer = Tokenizer::from_rule_file(&file)?;

    let exported = RuleFile {
        config: tokenizer.config().clone(),
        rules: tokenizer.rules().iter().map(RuleSpec::from).collect(),
        ignore: Vec::new(),
    };
    let reloaded = Tokenizer::from_json(&exported.to_json()?)?;

    let names: Vec<&str> = reloaded.rules().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["comma", "word", "whitespace"]);
    assert!(reloaded.rules().get(2).unwrap().is_ignored());
    assert_eq!(
        reloaded.tokenize_to_vec("a, b"),
        tokenizer.tokenize_to_vec("a, b")
    );
    Ok(())
}
