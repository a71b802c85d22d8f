//! Pipeline — ties all argument processing stages together.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::args::flags::{self, flag_registry, FlagKind};
use crate::args::normalize::{convert_notepad_style, strip_ignored};
use crate::args::params::ParamList;
use crate::args::quote::{take_quote_style, take_typing_speed, QuoteStyle, TypingSpeed};
use crate::args::tokenizer::tokenize;
use crate::config::{normalize_locale, Catalog, LangId};

/// The `-l` selection: the name as typed and the id it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LangSelection {
    pub name: String,
    /// `None` when the catalog does not know `name`.
    pub id: Option<LangId>,
}

/// The `-L` selection after normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Localization {
    /// Lowercase, dash-separated code (`zh_CN` → `zh-cn`).
    pub code: String,
    /// `None` when the catalog has no file for `code`.
    pub path: Option<PathBuf>,
}

/// Everything extracted from one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CmdLineOptions {
    pub show_help: bool,
    pub multi_instance: bool,
    pub no_plugin: bool,
    pub read_only: bool,
    pub no_session: bool,
    pub no_tab_bar: bool,
    pub system_tray: bool,
    pub show_loading_time: bool,
    pub always_on_top: bool,
    pub session_file: bool,
    pub recursive: bool,
    pub export_function_list: bool,
    pub quick_print: bool,
    pub notepad_style: bool,
    pub open_folders_as_workspace: bool,
    pub monitor_files: bool,

    pub settings_dir: Option<String>,
    pub title_bar_add: Option<String>,
    pub udl_name: Option<String>,
    pub plugin_message: Option<String>,
    pub quote: Option<QuoteStyle>,
    /// For a `-qf=` quote, its file resolved against the base directory.
    pub quote_file: Option<PathBuf>,
    pub typing_speed: Option<TypingSpeed>,

    pub lang: Option<LangSelection>,
    pub localization: Option<Localization>,
    pub line: Option<i64>,
    pub column: Option<i64>,
    pub position: Option<i64>,
    pub point_x: Option<i64>,
    pub point_y: Option<i64>,

    /// Whatever no extraction claimed, in order: the files to open.
    pub files: Vec<String>,
    /// Repeated switches, plus leftover tokens that look like flags (those
    /// stay in `files`).
    pub warnings: Vec<String>,
}

/// Tokenize `raw` and run the pre-extraction passes.
///
/// Returns the token list ready for extraction plus whether Notepad-style
/// compatibility was requested (that flag is consumed here).
pub fn prepare_params(raw: &str) -> (ParamList, bool) {
    let mut params = ParamList::new(tokenize(raw));
    tracing::debug!(tokens = params.len(), "tokenized command line");

    let notepad_style = params.take_if_present(flags::FLAG_NOTEPAD_COMPATIBILITY);
    if notepad_style {
        convert_notepad_style(&mut params);
    }
    strip_ignored(&mut params);

    (params, notepad_style)
}

/// Parse a raw command line into [`CmdLineOptions`].
///
/// This is the main entry point for the argument pipeline.
///
/// Extraction order matters: every switch is taken by exact match before any
/// `-<letter>` extraction runs, since `-loadingTime` would otherwise be read as
/// `-l` with value `oadingTime`. Keyed values go before `-p` for the same
/// reason (`-pluginMessage=`).
///
/// `base_dir` is the directory relative `-qf=` paths are resolved against,
/// normally the process working directory.
pub fn parse_command_line(raw: &str, catalog: &dyn Catalog, base_dir: &Path) -> CmdLineOptions {
    let (mut params, notepad_style) = prepare_params(raw);

    // Stage 1: Switches
    let mut opts = CmdLineOptions {
        notepad_style,
        show_help: params.take_if_present(flags::FLAG_HELP),
        multi_instance: params.take_if_present(flags::FLAG_MULTI_INSTANCE),
        export_function_list: params.take_if_present(flags::FLAG_FUNCTION_LIST_EXPORT),
        quick_print: params.take_if_present(flags::FLAG_QUICK_PRINT),
        no_plugin: params.take_if_present(flags::FLAG_NO_PLUGIN),
        read_only: params.take_if_present(flags::FLAG_READONLY),
        no_session: params.take_if_present(flags::FLAG_NO_SESSION),
        no_tab_bar: params.take_if_present(flags::FLAG_NO_TAB_BAR),
        system_tray: params.take_if_present(flags::FLAG_SYSTEM_TRAY),
        show_loading_time: params.take_if_present(flags::FLAG_LOADING_TIME),
        always_on_top: params.take_if_present(flags::FLAG_ALWAYS_ON_TOP),
        open_folders_as_workspace: params.take_if_present(flags::FLAG_OPEN_FOLDERS_AS_WORKSPACE),
        monitor_files: params.take_if_present(flags::FLAG_MONITOR_FILES),
        session_file: params.take_if_present(flags::FLAG_OPEN_SESSION_FILE),
        recursive: params.take_if_present(flags::FLAG_RECURSIVE),
        ..CmdLineOptions::default()
    };

    // Stage 2: Keyed values
    opts.settings_dir = params.take_keyed_value(flags::FLAG_SETTINGS_DIR);
    opts.title_bar_add = params.take_keyed_value(flags::FLAG_TITLE_BAR_ADD);
    opts.udl_name = params.take_keyed_value(flags::FLAG_APPLY_UDL);
    opts.plugin_message = params.take_keyed_value(flags::FLAG_PLUGIN_MESSAGE);
    opts.quote = take_quote_style(&mut params);
    opts.quote_file = opts.quote.as_ref().and_then(|q| q.resolve_file(base_dir));
    opts.typing_speed = take_typing_speed(&mut params);

    // Repeats are checked now: letter extraction below can swallow a second
    // `-nosession` as `-n`.
    let mut warnings = repeated_switch_warnings(params.as_slice());

    // Stage 3: Letter values
    opts.localization = params
        .take_flag_value(flags::LETTER_LOCALIZATION)
        .map(|value| {
            let code = normalize_locale(&value);
            let path = catalog.localization_path(&code);
            Localization { code, path }
        });
    opts.lang = params.take_flag_value(flags::LETTER_LANGUAGE).map(|name| {
        let id = catalog.language_id(&name);
        LangSelection { name, id }
    });
    opts.line = params.take_number(flags::LETTER_LINE);
    opts.column = params.take_number(flags::LETTER_COLUMN);
    opts.position = params.take_number(flags::LETTER_POSITION);
    opts.point_x = params.take_number(flags::LETTER_POINT_X);
    opts.point_y = params.take_number(flags::LETTER_POINT_Y);

    // Stage 4: Leftovers are files
    warnings.extend(unclaimed_flag_warnings(params.as_slice()));
    opts.warnings = warnings;
    for warning in &opts.warnings {
        tracing::warn!("{}", warning);
    }
    opts.files = params.into_vec();

    tracing::debug!(files = opts.files.len(), "parsed command line");
    opts
}

/// Warn about switches still present after the switch stage.
///
/// Only the first occurrence of a switch is consumed. A repeat whose second
/// character is a letter flag (`-nosession`, `-loadingTime`) is then read as
/// that letter's value; any other repeat ends up in `files`.
fn repeated_switch_warnings(remaining: &[String]) -> Vec<String> {
    let registry = flag_registry();

    remaining
        .iter()
        .filter(|token| {
            registry
                .iter()
                .any(|def| def.kind == FlagKind::Switch && def.matches(token))
        })
        .map(|token| format!("{}: repeated flag, only the first one applies", token))
        .collect()
}

/// Warn about leftover tokens that look like flags, other than switches
/// (already reported by [`repeated_switch_warnings`]).
///
/// A value-flag match means the flag was given twice; no match means it is
/// unknown.
fn unclaimed_flag_warnings(leftover: &[String]) -> Vec<String> {
    let registry = flag_registry();

    leftover
        .iter()
        .filter(|token| token.starts_with('-') && token.len() > 1)
        .filter_map(|token| match registry.iter().find(|def| def.matches(token)) {
            Some(def) if def.kind == FlagKind::Switch => None,
            Some(_) => Some(format!("{}: repeated value flag, treating as a file name", token)),
            None => Some(format!("{}: unknown flag, treating as a file name", token)),
        })
        .collect()
}
