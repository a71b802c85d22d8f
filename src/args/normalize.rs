//! Pre-extraction passes: legacy flag rewrite and ignore-marker stripping.

use crate::args::flags::{FLAG_QUICK_PRINT, IGNORE_MARKER, LEGACY_QUICK_PRINT};
use crate::args::params::ParamList;

/// Rewrite Notepad's `/p` and `/P` into [`FLAG_QUICK_PRINT`].
///
/// One token in, one token out: count and positions never change.
pub fn convert_notepad_style(params: &mut ParamList) {
    params.rewrite(|token| {
        if LEGACY_QUICK_PRINT.contains(&token.as_str()) {
            *token = FLAG_QUICK_PRINT.to_string();
        }
    });
}

/// Remove every `-z` together with the single token right after it.
///
/// Scanning resumes at the token that followed the removed pair, so `-z -z a`
/// drops the first marker and the second one, leaving `a`.
pub fn strip_ignored(params: &mut ParamList) {
    let tokens = params.tokens_mut();
    let mut idx = 0;

    while idx < tokens.len() {
        if tokens[idx] != IGNORE_MARKER {
            idx += 1;
            continue;
        }

        if idx + 1 < tokens.len() {
            let ignored = tokens.remove(idx + 1);
            tracing::trace!(%ignored, "dropping argument after ignore marker");
        }
        tokens.remove(idx);
    }
}
