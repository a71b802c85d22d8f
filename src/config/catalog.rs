//! Lookup collaborator for `-l` and `-L` values.

use std::path::PathBuf;

use serde::Serialize;

/// Numeric language identifier understood by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LangId(pub u16);

/// Resolves command line names to editor resources.
///
/// Passed into the parser explicitly; implementations decide where the tables
/// come from (see [`Config`](crate::config::Config)).
pub trait Catalog {
    /// Language id for a `-l` name, `None` when unknown.
    fn language_id(&self, name: &str) -> Option<LangId>;

    /// Localization file for a normalised `-L` code, `None` when unknown.
    fn localization_path(&self, code: &str) -> Option<PathBuf>;
}

/// Normalise a localization code: lowercase, `_` becomes `-`.
///
/// `zh_CN` → `zh-cn`
pub fn normalize_locale(code: &str) -> String {
    code.replace('_', "-").to_lowercase()
}
