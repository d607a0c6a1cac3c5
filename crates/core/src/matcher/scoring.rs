//! Token scoring for folder candidates. Pure functions, no filesystem access.

/// A qualifying folder and the number of its tokens found in the torrent name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderMatch {
    /// Folder name as it appears on disk.
    pub folder: String,
    /// Number of required tokens matched.
    pub score: usize,
}

/// Split a folder name into lowercase tokens on `.` and space.
///
/// Runs of delimiters collapse, so no empty tokens are produced.
pub fn tokenize_folder_name(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split(['.', ' '])
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a token is an annotation that never has to match.
///
/// Only the first character is inspected: `(2019)` is skipped, but for
/// `(director's cut)` split on spaces only `(director's` is.
fn is_bracketed(token: &str) -> bool {
    token.starts_with('(')
}

/// Score a folder name against a torrent name, case-insensitively.
///
/// Returns `None` when the folder does not qualify: a required token is
/// missing from the torrent name, or there is no required token at all.
/// Otherwise returns the number of required tokens, all of which matched.
pub fn score_folder(folder_name: &str, torrent_name: &str) -> Option<usize> {
    let torrent_name = torrent_name.to_lowercase();
    let mut count = 0;

    for token in tokenize_folder_name(folder_name) {
        if is_bracketed(&token) {
            continue;
        }
        if !torrent_name.contains(token.as_str()) {
            return None;
        }
        count += 1;
    }

    (count > 0).then_some(count)
}

/// Pick the best candidate: highest score, then smallest folder name.
pub fn select_best_match<I>(candidates: I) -> Option<FolderMatch>
where
    I: IntoIterator<Item = FolderMatch>,
{
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(best)
            if best.score > candidate.score
                || (best.score == candidate.score && best.folder <= candidate.folder) =>
        {
            Some(best)
        }
        _ => Some(candidate),
    })
}
