use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::catalog::{normalize_locale, Catalog, LangId};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Language name → language id (e.g. `cpp = 3`).
    #[serde(default = "default_languages")]
    pub languages: BTreeMap<String, u16>,
    /// Localization code → localization file (e.g. `fr-fr = "localization/french.xml"`).
    #[serde(default = "default_localizations")]
    pub localizations: BTreeMap<String, PathBuf>,
}

fn default_languages() -> BTreeMap<String, u16> {
    [
        ("normal", 0),
        ("php", 1),
        ("c", 2),
        ("cpp", 3),
        ("cs", 4),
        ("objc", 5),
        ("java", 6),
        ("rc", 7),
        ("html", 8),
        ("xml", 9),
        ("makefile", 10),
        ("pascal", 11),
        ("batch", 12),
        ("ini", 13),
        ("asp", 16),
        ("sql", 17),
        ("vb", 18),
        ("javascript", 19),
        ("css", 20),
        ("perl", 21),
        ("python", 22),
        ("lua", 23),
    ]
    .into_iter()
    .map(|(name, id)| (name.to_string(), id))
    .collect()
}

fn default_localizations() -> BTreeMap<String, PathBuf> {
    [
        ("en-us", "localization/english.xml"),
        ("fr-fr", "localization/french.xml"),
        ("de-de", "localization/german.xml"),
        ("es-es", "localization/spanish.xml"),
        ("zh-cn", "localization/chineseSimplified.xml"),
        ("ja-jp", "localization/japanese.xml"),
    ]
    .into_iter()
    .map(|(code, path)| (code.to_string(), PathBuf::from(path)))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            localizations: default_localizations(),
        }
    }
}

impl Catalog for Config {
    fn language_id(&self, name: &str) -> Option<LangId> {
        let name = name.to_lowercase();
        self.languages
            .iter()
            .find(|(key, _)| key.to_lowercase() == name)
            .map(|(_, id)| LangId(*id))
    }

    fn localization_path(&self, code: &str) -> Option<PathBuf> {
        let code = normalize_locale(code);
        self.localizations
            .iter()
            .find(|(key, _)| normalize_locale(key) == code)
            .map(|(_, path)| path.clone())
    }
}
