//! Tokenizer — raw command line → ordered tokens.
//!
//! Whitespace (space or tab) separates tokens, except inside one of two
//! quoting contexts:
//!
//! - a *filename quote*, opened by a bare `"`: the quotes are structural and the
//!   enclosed text becomes one token (`"C:\my folder\a.txt"`);
//! - an *equals quote*, opened by a `"` right after `=`: the value keeps its
//!   whitespace and the token continues (`-settingsDir="C:\my settings\"`).
//!
//! The ignore marker `-z` arms a verbatim escape: when the argument right after
//! it is quoted, the next unquoted token swallows the rest of the input
//! untouched. An unquoted argument after `-z` leaves splitting unchanged.
//!
//! ```text
//! -notepadStyleCmdline -z "C:\WINDOWS\system32\NOTEPAD.EXE" C:\my folder\my file.txt
//! → ["-notepadStyleCmdline", "-z", "C:\WINDOWS\system32\NOTEPAD.EXE", "C:\my folder\my file.txt"]
//! ```

use crate::args::flags::IGNORE_MARKER;

/// Scanner state at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsingState {
    /// Inside an unquoted token.
    Default,
    /// Between tokens (also the state at start of input).
    InWhitespace,
    /// Inside a `"..."` region opened by a bare quote.
    InQuotedFilename,
    /// Inside a `="..."` region.
    InEqualsQuotedString,
    /// Terminal: the rest of the input has been taken as one token.
    CaptureRestVerbatim,
}

impl ParsingState {
    fn is_quoted(self) -> bool {
        matches!(
            self,
            ParsingState::InQuotedFilename | ParsingState::InEqualsQuotedString
        )
    }
}

/// Progress through the `-z <ignored> <rest...>` escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZCounter {
    /// No ignore marker seen.
    Idle,
    /// `-z` was terminated by whitespace.
    Armed,
    /// A quoted argument opened right after `-z`; the next unquoted token
    /// captures the rest.
    Triggered,
}

/// Split a raw command line into tokens.
///
/// Total over all inputs: unterminated quotes simply run to the end of input.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut scanner = Scanner::new(raw);
    scanner.run();
    scanner.tokens
}

struct Scanner<'a> {
    raw: &'a str,
    state: ParsingState,
    z: ZCounter,
    tokens: Vec<String>,
    /// Whether the last token still accepts characters. A token closed by a
    /// filename quote drops whatever follows it up to the next whitespace.
    open: bool,
}

impl<'a> Scanner<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            state: ParsingState::InWhitespace,
            z: ZCounter::Idle,
            tokens: Vec::new(),
            open: false,
        }
    }

    fn run(&mut self) {
        let raw = self.raw;
        let mut prev: Option<char> = None;

        for (idx, ch) in raw.char_indices() {
            match ch {
                '"' => self.on_quote(prev),
                ' ' | '\t' => self.on_whitespace(ch),
                _ => {
                    if self.state == ParsingState::InWhitespace {
                        if self.z == ZCounter::Triggered {
                            self.capture_rest(idx);
                            return;
                        }
                        self.start_token();
                        self.state = ParsingState::Default;
                    }
                    self.push_char(ch);
                }
            }
            prev = Some(ch);
        }
    }

    fn on_quote(&mut self, prev: Option<char>) {
        match self.state {
            ParsingState::InEqualsQuotedString => {
                self.state = ParsingState::Default;
            }
            ParsingState::InQuotedFilename => {
                self.open = false;
                self.state = ParsingState::Default;
            }
            _ if prev == Some('=') => {
                self.state = ParsingState::InEqualsQuotedString;
            }
            _ => {
                let after_marker = self.tokens.last().map(String::as_str) == Some(IGNORE_MARKER);
                if self.z == ZCounter::Armed && after_marker {
                    self.z = ZCounter::Triggered;
                }
                // A bare quote always starts a parameter, even glued to a word.
                self.start_token();
                self.state = ParsingState::InQuotedFilename;
            }
        }
    }

    fn on_whitespace(&mut self, ch: char) {
        if self.state.is_quoted() {
            self.push_char(ch);
            return;
        }

        self.open = false;
        self.state = ParsingState::InWhitespace;

        if self.z == ZCounter::Idle
            && self.tokens.last().map(String::as_str) == Some(IGNORE_MARKER)
        {
            self.z = ZCounter::Armed;
        }
    }

    fn start_token(&mut self) {
        self.tokens.push(String::new());
        self.open = true;
    }

    fn push_char(&mut self, ch: char) {
        if !self.open {
            return;
        }
        if let Some(token) = self.tokens.last_mut() {
            token.push(ch);
        }
    }

    fn capture_rest(&mut self, idx: usize) {
        tracing::trace!(offset = idx, "capturing rest of command line verbatim");
        self.tokens.push(self.raw[idx..].to_string());
        self.open = false;
        self.state = ParsingState::CaptureRestVerbatim;
    }
}
