//! Integration tests for the command line tokenizer.

use launchargs::args::tokenize;

fn toks(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// PLAIN SPLITTING
// =============================================================================

#[test]
fn empty_input_yields_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t ").is_empty());
}

#[test]
fn unquoted_input_splits_on_whitespace_runs() {
    let raw = "  -multiInst\t-ro   a.txt \t b.txt  ";
    let expected: Vec<String> = raw.split([' ', '\t']).filter(|s| !s.is_empty()).map(String::from).collect();
    assert_eq!(tokenize(raw), expected);
    assert_eq!(tokenize(raw), toks(&["-multiInst", "-ro", "a.txt", "b.txt"]));
}

#[test]
fn quote_free_input_always_matches_whitespace_split() {
    const WORDS: [&str; 5] = ["-z", "a.txt", "-ro", "x=y", "C:\\dir\\f"];
    const SEPARATORS: [&str; 5] = [" ", "\t", "   ", " \t ", "\t\t"];

    let mut checked = 0;
    for len in 1..=4u32 {
        for combo in 0..WORDS.len().pow(len) {
            let words: Vec<&str> = (0..len)
                .map(|pos| WORDS[combo / WORDS.len().pow(pos) % WORDS.len()])
                .collect();

            for (variant, sep) in SEPARATORS.iter().enumerate() {
                let mut raw = String::new();
                if variant % 2 == 1 {
                    raw.push_str(sep);
                }
                for (i, word) in words.iter().enumerate() {
                    if i > 0 {
                        raw.push_str(SEPARATORS[(variant + i) % SEPARATORS.len()]);
                    }
                    raw.push_str(word);
                }
                if variant % 3 == 0 {
                    raw.push_str(sep);
                }

                let expected: Vec<String> = raw
                    .split([' ', '\t'])
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                assert_eq!(tokenize(&raw), expected, "input {raw:?}");
                checked += 1;
            }
        }
    }
    assert!(checked > 3000);
}

#[test]
fn marker_position_does_not_affect_quote_free_split() {
    for raw in [
        "-z a.txt b.txt c.txt",
        "a.txt -z b.txt c.txt d.txt",
        "a.txt b.txt -z",
        "-z\t\ta.txt\t b.txt   c.txt",
        "-z -z a b c",
    ] {
        let expected: Vec<String> = raw
            .split([' ', '\t'])
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        assert_eq!(tokenize(raw), expected, "input {raw:?}");
    }
}

// =============================================================================
// QUOTING
// =============================================================================

#[test]
fn filename_quotes_keep_whitespace_and_are_elided() {
    assert_eq!(
        tokenize(r#"-ro "C:\my folder\a file.txt" b.txt"#),
        toks(&["-ro", r"C:\my folder\a file.txt", "b.txt"])
    );
}

#[test]
fn equals_quote_keeps_whitespace_in_value() {
    assert_eq!(
        tokenize(r#"-titleAdd="my  title"   x"#),
        toks(&["-titleAdd=my  title", "x"])
    );
}

#[test]
fn equals_quote_with_trailing_backslash() {
    assert_eq!(
        tokenize(r#"-multiInst -settingsDir="C:\my settings\" C:\file.txt"#),
        toks(&["-multiInst", r"-settingsDir=C:\my settings\", r"C:\file.txt"])
    );
}

#[test]
fn quote_glued_to_word_starts_new_token() {
    assert_eq!(tokenize(r#"abc"d e""#), toks(&["abc", "d e"]));
}

#[test]
fn text_after_closing_filename_quote_is_dropped() {
    assert_eq!(tokenize(r#""a b"cd next"#), toks(&["a b", "next"]));
}

#[test]
fn empty_quotes_yield_empty_token() {
    assert_eq!(tokenize(r#"a "" b"#), toks(&["a", "", "b"]));
}

#[test]
fn unterminated_quotes_run_to_end_of_input() {
    assert_eq!(tokenize(r#"-ro "open  file"#), toks(&["-ro", "open  file"]));
    assert_eq!(tokenize(r#"-udl="My Lang"#), toks(&["-udl=My Lang"]));
}

#[test]
fn tokens_never_contain_structural_quotes() {
    for raw in [
        r#""a" "b c" -x="d e" f"#,
        r#"-qt="hello world" "x""#,
        r#""""#,
    ] {
        for token in tokenize(raw) {
            assert!(!token.contains('"'), "{raw:?} produced {token:?}");
        }
    }
}

// =============================================================================
// IGNORE MARKER / VERBATIM CAPTURE
// =============================================================================

#[test]
fn marker_with_quoted_argument_captures_rest_verbatim() {
    let raw = r#"-notepadStyleCmdline -z "C:\WINDOWS\system32\NOTEPAD.EXE" C:\my folder\my file.txt"#;
    assert_eq!(
        tokenize(raw),
        toks(&[
            "-notepadStyleCmdline",
            "-z",
            r"C:\WINDOWS\system32\NOTEPAD.EXE",
            r"C:\my folder\my file.txt",
        ])
    );
}

#[test]
fn marker_with_unquoted_argument_splits_normally() {
    assert_eq!(
        tokenize("-z notepad.exe a.txt b.txt"),
        toks(&["-z", "notepad.exe", "a.txt", "b.txt"])
    );
    assert_eq!(
        tokenize("-z notepad.exe  some \"quoted\"\tfile.txt "),
        toks(&["-z", "notepad.exe", "some", "quoted", "file.txt"])
    );
}

#[test]
fn quote_not_right_after_marker_does_not_capture() {
    assert_eq!(
        tokenize(r#"-z a "b c" d  e"#),
        toks(&["-z", "a", "b c", "d", "e"])
    );
}

#[test]
fn verbatim_token_is_raw_suffix() {
    let raw = r#"-ro -z "x" Y  Z "q r""#;
    let tokens = tokenize(raw);
    let start = raw.find("Y").unwrap();
    assert_eq!(tokens.last().unwrap(), &raw[start..]);
    assert_eq!(tokens.len(), 4);
}

#[test]
fn marker_at_end_is_a_plain_token() {
    assert_eq!(tokenize("a.txt -z"), toks(&["a.txt", "-z"]));
    assert_eq!(tokenize("a.txt -z  x"), toks(&["a.txt", "-z", "x"]));
}

#[test]
fn quoted_marker_with_unquoted_argument_splits_normally() {
    assert_eq!(tokenize(r#""-z" a b c"#), toks(&["-z", "a", "b", "c"]));
}

#[test]
fn quoted_marker_with_quoted_argument_captures_rest() {
    assert_eq!(tokenize(r#""-z" "a" b  c"#), toks(&["-z", "a", "b  c"]));
}

#[test]
fn glued_marker_does_not_arm() {
    assert_eq!(tokenize("-zz a b c"), toks(&["-zz", "a", "b", "c"]));
}
