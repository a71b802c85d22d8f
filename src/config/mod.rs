//! Configuration: the language and localization tables behind [`Catalog`].

mod catalog;
mod loader;
mod types;

pub use catalog::{normalize_locale, Catalog, LangId};
pub use loader::ConfigError;
pub use types::Config;
