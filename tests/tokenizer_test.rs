//! Integration tests for streaming maximal-munch tokenization.

use chunklex::prelude::*;

fn sentence_tokenizer(config: TokenizerConfig) -> Result<Tokenizer> {
    let mut tokenizer = Tokenizer::with_config(config)?;
    tokenizer.add_rule("^,$", "comma")?;
    tokenizer.add_rule(r"^\.$", "full stop")?;
    tokenizer.add_rule("^[a-z]+$", "word")?;
    tokenizer.add_rule(r"^\d+(\.\d+)?$", "number")?;
    tokenizer.add_rule(r"^\s+$", "whitespace")?;
    tokenizer.set_ignored("whitespace");
    Ok(tokenizer)
}

fn pairs(tokens: &[Token]) -> Vec<(&str, &str)> {
    tokens
        .iter()
        .map(|t| (t.text.as_str(), t.name.as_str()))
        .collect()
}

/// Deterministic pseudo-random text over a small alphabet.
fn generate_text(seed: u64, len: usize) -> String {
    const ALPHABET: &[char] = &['a', 'b', 'z', '1', '7', '.', ',', ' ', ' ', '#', 'é', '\n'];
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ALPHABET[((state >> 33) as usize) % ALPHABET.len()]
        })
        .collect()
}

#[test]
fn test_cat_dog_example() -> Result<()> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_rule("^,$", "comma")?;
    tokenizer.add_rule("^[a-z]+$", "word")?;
    tokenizer.add_rule(r"^\s+$", "whitespace")?;
    tokenizer.set_ignored("whitespace");

    let mut tokens = Vec::new();
    tokenizer.tokenize("cat, dog", |text, name| {
        tokens.push((text.to_string(), name.to_string()));
    });

    assert_eq!(
        tokens,
        vec![
            ("cat".to_string(), "word".to_string()),
            (",".to_string(), "comma".to_string()),
            ("dog".to_string(), "word".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn test_ukrainian_sentence() -> Result<()> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_rule("^,$", "comma")?;
    tokenizer.add_rule(r"^\.$", "full stop")?;
    tokenizer.add_rule(r#"^\"$"#, "quote")?;
    tokenizer.add_rule(r"^[-‐‑\u{00AD}]$", "hyphen")?;
    tokenizer.add_rule(r"^\s?[‒–—]\s?$", "dash")?;
    tokenizer.add_rule(r"^[\s\u{00A0}\u{2009}\u{202F}]+$", "whitespace")?;
    tokenizer.add_rule("^[а-яА-ЯіїґєІЇҐЄ]+$", "word")?;
    tokenizer.add_rule("^([а-яА-ЯіїґєІЇҐЄ0-9]+[-]+[а-яА-ЯіїґєІЇҐЄ0-9]+)+$", "complex word")?;
    tokenizer.add_rule(r"^\d+(\.\d+)?$", "number")?;
    tokenizer.add_rule("^([0-9]*[+][0-9]*)+$", "special name")?;
    tokenizer.set_ignored("whitespace");

    let tokens =
        tokenizer.tokenize_to_vec("Українка Бережна стала віце-чемпіонкою світу з боротьби");

    // "віце-" matches no rule, so the scan stops before the complex word can form.
    assert_eq!(
        pairs(&tokens),
        vec![
            ("Українка", "word"),
            ("Бережна", "word"),
            ("стала", "word"),
            ("віце", "word"),
            ("-", "hyphen"),
            ("чемпіонкою", "word"),
            ("світу", "word"),
            ("з", "word"),
            ("боротьби", "word"),
        ]
    );
    Ok(())
}

#[test]
fn test_token_spanning_steps_is_kept_whole() -> Result<()> {
    let tokenizer = sentence_tokenizer(
        TokenizerConfig::new()
            .with_chunk_size(256)
            .with_step_size(3),
    )?;
    let tokens = tokenizer.tokenize_to_vec("tokenization works, 3.14 times.");
    assert_eq!(
        pairs(&tokens),
        vec![
            ("tokenization", "word"),
            ("works", "word"),
            (",", "comma"),
            // "3." matches no rule, so the scan commits "3" before the decimal forms.
            ("3", "number"),
            (".", "full stop"),
            ("14", "number"),
            ("times", "word"),
            (".", "full stop"),
        ]
    );
    Ok(())
}

#[test]
fn test_chunk_boundary_splits_pending_token() -> Result<()> {
    let small = sentence_tokenizer(TokenizerConfig::new().with_chunk_size(4).with_step_size(2))?;
    assert_eq!(
        pairs(&small.tokenize_to_vec("abcdefgh")),
        vec![("abcd", "word"), ("efgh", "word")]
    );

    let large = sentence_tokenizer(TokenizerConfig::default())?;
    assert_eq!(
        pairs(&large.tokenize_to_vec("abcdefgh")),
        vec![("abcdefgh", "word")]
    );
    Ok(())
}

#[test]
fn test_end_of_stream_flush_keeps_extending() -> Result<()> {
    let tokenizer = sentence_tokenizer(
        TokenizerConfig::new()
            .with_chunk_size(4)
            .with_step_size(2)
            .with_flush_policy(FlushPolicy::EndOfStream),
    )?;
    let (segments, stats) = tokenizer.trace("abcdefgh ij");
    let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["abcdefgh", " ", "ij"]);
    assert_eq!(stats.chunks, 3);
    Ok(())
}

#[test]
fn test_long_word_under_end_of_stream_is_one_token() -> Result<()> {
    let tokenizer = sentence_tokenizer(
        TokenizerConfig::new().with_flush_policy(FlushPolicy::EndOfStream),
    )?;
    let text = "a".repeat(20_000);
    let tokens = tokenizer.tokenize_to_vec(&text);
    assert_eq!(tokens, vec![Token::new(text.as_str(), "word")]);
    Ok(())
}

#[test]
fn test_trim_keeps_control_characters() -> Result<()> {
    let tokenizer = sentence_tokenizer(TokenizerConfig::default())?;
    let tokens = tokenizer.tokenize_to_vec("\u{00A0}cat\u{00A0}");
    assert_eq!(pairs(&tokens), vec![("cat", "word")]);

    let tokens = tokenizer.tokenize_to_vec("\u{0001}cat");
    assert_eq!(pairs(&tokens), vec![("\u{0001}", UNKNOWN_TOKEN), ("cat", "word")]);
    Ok(())
}

#[test]
fn test_boundary_changes_token_kind() -> Result<()> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_rule("^[a-z]+$", "word")?;
    tokenizer.add_rule("^[a-z]+[0-9]+$", "identifier")?;

    let whole = tokenizer.clone();
    assert_eq!(
        pairs(&whole.tokenize_to_vec("abc12")),
        vec![("abc12", "identifier")]
    );

    // The chunk edge after "abc" commits it as a word before the digits arrive.
    tokenizer.set_config(TokenizerConfig::new().with_chunk_size(3).with_step_size(1))?;
    let (segments, stats) = tokenizer.trace("abc12");
    let kinds: Vec<(&str, Option<&str>, SegmentKind)> = segments
        .iter()
        .map(|s| (s.text.as_str(), s.name.as_deref(), s.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("abc", Some("word"), SegmentKind::Emitted),
            ("1", Some(UNKNOWN_TOKEN), SegmentKind::Unknown),
            ("2", Some(UNKNOWN_TOKEN), SegmentKind::Unknown),
        ]
    );
    assert_eq!(stats.chunks, 2);
    Ok(())
}

#[test]
fn test_unknown_fallback() -> Result<()> {
    let tokenizer = sentence_tokenizer(TokenizerConfig::default())?;
    let tokens = tokenizer.tokenize_to_vec("a#€b");
    assert_eq!(
        pairs(&tokens),
        vec![
            ("a", "word"),
            ("#", UNKNOWN_TOKEN),
            ("€", UNKNOWN_TOKEN),
            ("b", "word"),
        ]
    );
    assert!(
        tokens
            .iter()
            .filter(|t| t.is_unknown())
            .all(|t| t.text.chars().count() == 1)
    );
    Ok(())
}

#[test]
fn test_priority_follows_declaration_order() -> Result<()> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_rule("^[0-9]+$", "number")?;
    tokenizer.add_rule("^([0-9]*[+][0-9]*)+$", "special")?;

    // Every prefix matches one of the two rules, so the whole input is one
    // token; only "special" matches it in full.
    assert_eq!(
        pairs(&tokenizer.tokenize_to_vec("12+34")),
        vec![("12+34", "special")]
    );
    assert_eq!(pairs(&tokenizer.tokenize_to_vec("1234")), vec![("1234", "number")]);

    let mut first = Tokenizer::new();
    first.add_rule(r"^\d+(\.\d+)?$", "decimal")?;
    first.add_rule("^[0-9]+$", "integer")?;
    assert_eq!(pairs(&first.tokenize_to_vec("42")), vec![("42", "decimal")]);

    let mut second = Tokenizer::new();
    second.add_rule("^[0-9]+$", "integer")?;
    second.add_rule(r"^\d+(\.\d+)?$", "decimal")?;
    assert_eq!(pairs(&second.tokenize_to_vec("42")), vec![("42", "integer")]);
    Ok(())
}

#[test]
fn test_duplicate_rejection() -> Result<()> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_rule("^a$", "x")?;
    let err = tokenizer.add_rule("^a$", "x").unwrap_err();
    assert!(matches!(err, ChunklexError::DuplicateRule { .. }));
    assert_eq!(tokenizer.rules().len(), 1);

    // Differing ignored status makes the rules distinct.
    tokenizer.add_ignored_rule("^a$", "x")?;
    assert_eq!(tokenizer.rules().len(), 2);

    // Once the first rule is ignored, a plain rule with its pattern is new.
    let mut other = Tokenizer::new();
    other.add_rule("^a$", "x")?;
    assert!(other.set_ignored("X"));
    other.add_rule("^a$", "x")?;
    assert_eq!(other.rules().len(), 2);
    Ok(())
}

#[test]
fn test_invalid_pattern_rejected_at_add() {
    let mut tokenizer = Tokenizer::new();
    let err = tokenizer.add_rule("^[a-z$", "broken").unwrap_err();
    assert!(matches!(err, ChunklexError::InvalidPattern { .. }));
    assert!(tokenizer.rules().is_empty());
}

#[test]
fn test_set_ignored_unknown_name_is_not_fatal() -> Result<()> {
    let mut tokenizer = sentence_tokenizer(TokenizerConfig::default())?;
    assert!(!tokenizer.set_ignored("whitspace"));
    assert_eq!(tokenizer.tokenize_to_vec("a b").len(), 2);
    Ok(())
}

#[test]
fn test_ignored_rules_keep_boundaries() -> Result<()> {
    let text = "one, two.  3.5 and 42";
    let mut visible = sentence_tokenizer(TokenizerConfig::default())?;
    let (ignored_segments, _) = visible.trace(text);

    // Same rules with nothing ignored.
    let mut plain = Tokenizer::new();
    for rule in visible.rules() {
        plain.add_rule(rule.pattern(), rule.name())?;
    }
    let (plain_segments, _) = plain.trace(text);

    let boundaries = |segments: &[Segment]| -> Vec<String> {
        segments.iter().map(|s| s.text.clone()).collect()
    };
    assert_eq!(boundaries(&ignored_segments), boundaries(&plain_segments));

    let delivered = visible.tokenize_to_vec(text);
    assert!(delivered.iter().all(|t| t.name != "whitespace"));
    assert_eq!(
        delivered.len(),
        plain_segments
            .iter()
            .filter(|s| s.name.as_deref() != Some("whitespace"))
            .count()
    );

    // Un-ignoring is not possible; marking a second name only hides more.
    visible.set_ignored("comma");
    assert!(visible.tokenize_to_vec(text).iter().all(|t| t.name != "comma"));
    Ok(())
}

#[test]
fn test_coverage_reconstructs_trimmed_input() -> Result<()> {
    let configs = [
        TokenizerConfig::default(),
        TokenizerConfig::new().with_chunk_size(7).with_step_size(3),
        TokenizerConfig::new().with_chunk_size(1).with_step_size(1),
        TokenizerConfig::new()
            .with_chunk_size(5)
            .with_step_size(5)
            .with_flush_policy(FlushPolicy::EndOfStream),
    ];

    for (seed, config) in configs.iter().enumerate() {
        let tokenizer = sentence_tokenizer(config.clone())?;
        for round in 0..20u64 {
            let text = generate_text(seed as u64 * 100 + round, 300);
            let (segments, stats) = tokenizer.trace(&text);

            let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
            assert_eq!(rebuilt, text.trim(), "config {config:?}, round {round}");
            assert!(segments.iter().all(|s| !s.text.is_empty()));
            assert_eq!(
                stats.delivered(),
                segments.iter().filter(|s| s.is_delivered()).count()
            );
        }
    }
    Ok(())
}

#[test]
fn test_maximal_munch_without_chunk_truncation() -> Result<()> {
    let tokenizer = sentence_tokenizer(TokenizerConfig::new().with_chunk_size(4096))?;
    let rules = tokenizer.rules();

    for round in 0..20u64 {
        let text = generate_text(round + 7, 500);
        let (segments, _) = tokenizer.trace(&text);

        for pair in segments.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            let next_char = next.text.chars().next().unwrap();
            let extended = format!("{}{}", current.text, next_char);

            match current.kind {
                SegmentKind::Unknown => {
                    assert_eq!(current.text.chars().count(), 1);
                    assert!(!rules.any_match(&current.text));
                }
                _ => {
                    let rule = rules.match_rule(&current.text).unwrap();
                    assert_eq!(Some(rule.name()), current.name.as_deref());
                    assert!(
                        !rules.any_match(&extended),
                        "{:?} could extend to {:?}",
                        current.text,
                        extended
                    );
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_tokenizer_is_reusable() -> Result<()> {
    let tokenizer = sentence_tokenizer(TokenizerConfig::new().with_chunk_size(4).with_step_size(2))?;
    let first = tokenizer.tokenize_to_vec("abcdefgh, 12");
    let second = tokenizer.tokenize_to_vec("abcdefgh, 12");
    assert_eq!(first, second);
    Ok(())
}
