//! Quote-style and typing-speed extraction.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::args::flags::{FLAG_QUOTE_FILE, FLAG_QUOTE_INTERNAL, FLAG_QUOTE_LITERAL, FLAG_TYPING_SPEED};
use crate::args::params::{parse_leading_int, ParamList};

/// Where the quote text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteSource {
    /// `-qn=<name>`: one of the built-in quotes.
    Internal,
    /// `-qt=<text>`: the text itself.
    Literal,
    /// `-qf=<path>`: the content of a file.
    File,
}

/// A quote request from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteStyle {
    pub source: QuoteSource,
    pub value: String,
}

impl QuoteStyle {
    /// For [`QuoteSource::File`], the quote path resolved against `base`.
    ///
    /// Absolute paths are returned unchanged. `None` for the other sources.
    pub fn resolve_file(&self, base: &Path) -> Option<PathBuf> {
        if self.source != QuoteSource::File {
            return None;
        }
        let path = Path::new(&self.value);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(base.join(path))
        }
    }
}

/// Ghost typing speed, restricted to 1 (slow), 2 (fast) or 3 (speed of light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypingSpeed(u8);

impl TypingSpeed {
    pub fn new(speed: i64) -> Option<Self> {
        match speed {
            1..=3 => Some(Self(speed as u8)),
            _ => None,
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Take the first quote flag present, in priority order `-qn=`, `-qt=`, `-qf=`.
///
/// Only the winning flag is removed; lower-priority quote flags stay in the list.
pub fn take_quote_style(params: &mut ParamList) -> Option<QuoteStyle> {
    const PRIORITY: [(&str, QuoteSource); 3] = [
        (FLAG_QUOTE_INTERNAL, QuoteSource::Internal),
        (FLAG_QUOTE_LITERAL, QuoteSource::Literal),
        (FLAG_QUOTE_FILE, QuoteSource::File),
    ];

    PRIORITY.iter().find_map(|(prefix, source)| {
        params.take_keyed_value(prefix).map(|value| QuoteStyle {
            source: *source,
            value: strip_delimiting_quotes(&value).to_string(),
        })
    })
}

/// Take `-qSpeed<n>`. Out-of-range or unparseable values count as absent.
pub fn take_typing_speed(params: &mut ParamList) -> Option<TypingSpeed> {
    let value = params.take_keyed_value(FLAG_TYPING_SPEED)?;
    let speed = parse_leading_int(&value).and_then(TypingSpeed::new);
    if speed.is_none() {
        tracing::debug!(%value, "ignoring invalid typing speed");
    }
    speed
}

/// Drop a `"` at both ends. A lone `"` is its own first and last character,
/// so it strips to an empty value.
fn strip_delimiting_quotes(value: &str) -> &str {
    if value == "\"" {
        return "";
    }
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
