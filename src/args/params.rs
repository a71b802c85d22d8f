//! Parameter list — destructive, first-match extraction over tokens.
//!
//! Every `take_*` call removes the token it matched, so call order matters:
//! later calls only see what earlier calls left behind.

use serde::Serialize;

/// Ordered, owned token sequence produced by the tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParamList {
    tokens: Vec<String>,
}

impl ParamList {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }

    /// Remove the first token exactly equal to `literal`.
    pub fn take_if_present(&mut self, literal: &str) -> bool {
        match self.tokens.iter().position(|t| t == literal) {
            Some(idx) => {
                self.tokens.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Take the value of the first `-<letter><value>` token.
    ///
    /// `-lcpp` with letter `l` yields `cpp`; a bare `-l` yields an empty value.
    pub fn take_flag_value(&mut self, letter: char) -> Option<String> {
        let (idx, value) = self
            .tokens
            .iter()
            .enumerate()
            .find_map(|(idx, t)| letter_value(t, letter).map(|v| (idx, v.to_string())))?;
        self.tokens.remove(idx);
        Some(value)
    }

    /// Take the remainder of the first token starting with `prefix`.
    pub fn take_keyed_value(&mut self, prefix: &str) -> Option<String> {
        let (idx, value) = self
            .tokens
            .iter()
            .enumerate()
            .find_map(|(idx, t)| t.strip_prefix(prefix).map(|v| (idx, v.to_string())))?;
        self.tokens.remove(idx);
        Some(value)
    }

    /// Like [`take_flag_value`](Self::take_flag_value), parsed as an integer.
    ///
    /// Only the leading integer is read, so a present but non-numeric value
    /// yields `Some(0)`. `None` always means the flag was absent.
    pub fn take_number(&mut self, letter: char) -> Option<i64> {
        self.take_flag_value(letter)
            .map(|value| parse_leading_int(&value).unwrap_or(0))
    }

    /// Apply `f` to every token in place.
    pub(crate) fn rewrite(&mut self, mut f: impl FnMut(&mut String)) {
        self.tokens.iter_mut().for_each(|t| f(t));
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut Vec<String> {
        &mut self.tokens
    }
}

impl From<Vec<String>> for ParamList {
    fn from(tokens: Vec<String>) -> Self {
        Self::new(tokens)
    }
}

fn letter_value(token: &str, letter: char) -> Option<&str> {
    let rest = token.strip_prefix('-')?;
    rest.strip_prefix(letter)
}

/// Parse an optional sign and the digits that follow it, ignoring leading
/// whitespace and anything after the digits. `None` when there are no digits.
pub(crate) fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -magnitude } else { magnitude })
}
