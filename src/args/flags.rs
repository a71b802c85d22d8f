//! Flag vocabulary — single source of truth for every recognized option.

/// Ignore marker: `-z <ignored>` drops the next argument.
pub const IGNORE_MARKER: &str = "-z";

pub const FLAG_MULTI_INSTANCE: &str = "-multiInst";
pub const FLAG_NO_PLUGIN: &str = "-noPlugin";
pub const FLAG_READONLY: &str = "-ro";
pub const FLAG_NO_SESSION: &str = "-nosession";
pub const FLAG_NO_TAB_BAR: &str = "-notabbar";
pub const FLAG_SYSTEM_TRAY: &str = "-systemtray";
pub const FLAG_LOADING_TIME: &str = "-loadingTime";
pub const FLAG_HELP: &str = "--help";
pub const FLAG_ALWAYS_ON_TOP: &str = "-alwaysOnTop";
pub const FLAG_OPEN_SESSION_FILE: &str = "-openSession";
pub const FLAG_RECURSIVE: &str = "-r";
pub const FLAG_FUNCTION_LIST_EXPORT: &str = "-export=functionList";
pub const FLAG_QUICK_PRINT: &str = "-quickPrint";
pub const FLAG_NOTEPAD_COMPATIBILITY: &str = "-notepadStyleCmdline";
pub const FLAG_OPEN_FOLDERS_AS_WORKSPACE: &str = "-openFoldersAsWorkspace";
pub const FLAG_MONITOR_FILES: &str = "-monitor";

pub const FLAG_SETTINGS_DIR: &str = "-settingsDir=";
pub const FLAG_TITLE_BAR_ADD: &str = "-titleAdd=";
pub const FLAG_APPLY_UDL: &str = "-udl=";
pub const FLAG_PLUGIN_MESSAGE: &str = "-pluginMessage=";

pub const FLAG_QUOTE_INTERNAL: &str = "-qn=";
pub const FLAG_QUOTE_LITERAL: &str = "-qt=";
pub const FLAG_QUOTE_FILE: &str = "-qf=";
pub const FLAG_TYPING_SPEED: &str = "-qSpeed";

pub const LETTER_LANGUAGE: char = 'l';
pub const LETTER_LOCALIZATION: char = 'L';
pub const LETTER_LINE: char = 'n';
pub const LETTER_COLUMN: char = 'c';
pub const LETTER_POSITION: char = 'p';
pub const LETTER_POINT_X: char = 'x';
pub const LETTER_POINT_Y: char = 'y';

/// Legacy Notepad spellings rewritten to [`FLAG_QUICK_PRINT`].
pub const LEGACY_QUICK_PRINT: [&str; 2] = ["/p", "/P"];

/// How a flag is matched against tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Exact token match, no value (e.g. `-multiInst`).
    Switch,
    /// Prefix match, value is the remainder (e.g. `-settingsDir=<dir>`).
    Keyed,
    /// `-<letter><value>` (e.g. `-lcpp`, `-n42`).
    Letter,
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Literal token, prefix, or `-<letter>` form.
    pub name: &'static str,
    pub kind: FlagKind,
    /// Human-readable description (for `--list-flags`).
    pub description: &'static str,
}

impl FlagDef {
    const fn new(name: &'static str, kind: FlagKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
        }
    }

    /// Check if this definition matches the given token.
    pub fn matches(&self, token: &str) -> bool {
        match self.kind {
            FlagKind::Switch => token == self.name,
            FlagKind::Keyed => token.starts_with(self.name),
            FlagKind::Letter => {
                let mut chars = token.chars();
                chars.next() == Some('-') && chars.next() == self.name.chars().nth(1)
            }
        }
    }
}

/// Build the complete flag registry.
pub fn flag_registry() -> Vec<FlagDef> {
    use FlagKind::{Keyed, Letter, Switch};

    vec![
        // === Switches ===
        FlagDef::new(FLAG_HELP, Switch, "Show command line help"),
        FlagDef::new(FLAG_MULTI_INSTANCE, Switch, "Launch another instance"),
        FlagDef::new(FLAG_NO_PLUGIN, Switch, "Launch without loading plugins"),
        FlagDef::new(FLAG_READONLY, Switch, "Open files read-only"),
        FlagDef::new(FLAG_NO_SESSION, Switch, "Do not load the previous session"),
        FlagDef::new(FLAG_NO_TAB_BAR, Switch, "Hide the tab bar"),
        FlagDef::new(FLAG_SYSTEM_TRAY, Switch, "Start minimized to the system tray"),
        FlagDef::new(FLAG_LOADING_TIME, Switch, "Report startup loading time"),
        FlagDef::new(FLAG_ALWAYS_ON_TOP, Switch, "Keep the window above others"),
        FlagDef::new(FLAG_OPEN_SESSION_FILE, Switch, "Treat the file argument as a session file"),
        FlagDef::new(FLAG_RECURSIVE, Switch, "Open files matching a wildcard recursively"),
        FlagDef::new(FLAG_FUNCTION_LIST_EXPORT, Switch, "Export the function list and quit"),
        FlagDef::new(FLAG_QUICK_PRINT, Switch, "Print the file and quit"),
        FlagDef::new(FLAG_NOTEPAD_COMPATIBILITY, Switch, "Accept Notepad-style arguments"),
        FlagDef::new(FLAG_OPEN_FOLDERS_AS_WORKSPACE, Switch, "Open folder arguments as a workspace"),
        FlagDef::new(FLAG_MONITOR_FILES, Switch, "Monitor opened files for changes"),
        FlagDef::new(IGNORE_MARKER, Switch, "Ignore the next argument"),
        // === Keyed values ===
        FlagDef::new(FLAG_SETTINGS_DIR, Keyed, "Override the settings directory"),
        FlagDef::new(FLAG_TITLE_BAR_ADD, Keyed, "Append text to the title bar"),
        FlagDef::new(FLAG_APPLY_UDL, Keyed, "Apply a user defined language"),
        FlagDef::new(FLAG_PLUGIN_MESSAGE, Keyed, "Message forwarded to plugins"),
        FlagDef::new(FLAG_QUOTE_INTERNAL, Keyed, "Show a built-in quote by name"),
        FlagDef::new(FLAG_QUOTE_LITERAL, Keyed, "Show the given quote text"),
        FlagDef::new(FLAG_QUOTE_FILE, Keyed, "Show a quote read from a file"),
        FlagDef::new(FLAG_TYPING_SPEED, Keyed, "Quote typing speed (1, 2 or 3)"),
        // === Letter values ===
        FlagDef::new("-l", Letter, "Language of the opened files"),
        FlagDef::new("-L", Letter, "Localization code"),
        FlagDef::new("-n", Letter, "Line to go to"),
        FlagDef::new("-c", Letter, "Column to go to"),
        FlagDef::new("-p", Letter, "Position to go to"),
        FlagDef::new("-x", Letter, "Window left edge"),
        FlagDef::new("-y", Letter, "Window top edge"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_def_matches_attached_value() {
        let def = FlagDef::new("-n", FlagKind::Letter, "");
        assert!(def.matches("-n42"));
        assert!(def.matches("-n"));
        assert!(!def.matches("n42"));
        assert!(!def.matches("-c42"));
    }

    #[test]
    fn switch_def_is_exact() {
        let def = FlagDef::new(FLAG_READONLY, FlagKind::Switch, "");
        assert!(def.matches("-ro"));
        assert!(!def.matches("-rox"));
    }
}
