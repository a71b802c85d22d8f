//! Command line handling for the editor launcher.
//!
//! One raw string goes through a fixed sequence of stages:
//!
//! ```text
//! Raw → Tokenize → Normalize → Strip ignored → Extract → CmdLineOptions
//! ```
//!
//! Each stage is a plain function over owned data and can be unit-tested
//! independently.

pub mod flags;
mod normalize;
mod params;
mod pipeline;
mod quote;
mod tokenizer;

pub use flags::{flag_registry, FlagDef, FlagKind};
pub use normalize::{convert_notepad_style, strip_ignored};
pub use params::ParamList;
pub use pipeline::{parse_command_line, prepare_params, CmdLineOptions, LangSelection, Localization};
pub use quote::{take_quote_style, take_typing_speed, QuoteSource, QuoteStyle, TypingSpeed};
pub use tokenizer::{tokenize, ParsingState, ZCounter};
