//! Extension allow-list.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Set of lowercase file extensions (without leading dot) that get moved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionAllowList {
    extensions: BTreeSet<String>,
}

impl ExtensionAllowList {
    /// Parses a comma-separated list such as `mp4,mkv,.SRT`.
    ///
    /// Entries are trimmed, lowercased and stripped of a leading dot; empty
    /// entries are dropped.
    pub fn parse(list: &str) -> Self {
        list.split(',').collect()
    }

    /// Whether an extension (without dot) is allowed. Case-insensitive.
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_lowercase())
    }

    /// Whether the file at `path` has an allowed extension.
    pub fn allows(&self, path: &Path) -> bool {
        file_extension(path).is_some_and(|ext| self.extensions.contains(&ext))
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

fn normalize(entry: &str) -> Option<String> {
    let ext = entry.trim().trim_start_matches('.').to_lowercase();
    (!ext.is_empty()).then_some(ext)
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionAllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            extensions: iter
                .into_iter()
                .filter_map(|e| normalize(e.as_ref()))
                .collect(),
        }
    }
}

impl fmt::Display for ExtensionAllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        write!(f, "{}", joined.join(","))
    }
}

/// Lowercased extension of a path's base name: whatever follows the last dot.
///
/// Returns `None` when the name has no dot or ends with one. A dot-file such
/// as `.mkv` has extension `mkv`.
pub fn file_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let (_, ext) = name.rsplit_once('.')?;
    (!ext.is_empty()).then(|| ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_list() {
        let list = ExtensionAllowList::parse("mp4,mkv,avi,srt,mp3,ogg");
        assert_eq!(list.len(), 6);
        assert!(list.contains("mkv"));
        assert!(list.contains("ogg"));
        assert!(!list.contains("nfo"));
    }

    #[test]
    fn test_parse_normalizes_entries() {
        let list = ExtensionAllowList::parse(" MKV, .srt,,mp4 ,");
        assert_eq!(list, ExtensionAllowList::parse("mkv,srt,mp4"));
        assert_eq!(list.to_string(), "mkv,mp4,srt");
    }

    #[test]
    fn test_parse_empty() {
        assert!(ExtensionAllowList::parse("").is_empty());
        assert!(ExtensionAllowList::parse(" , ,.").is_empty());
    }

    #[test]
    fn test_from_config_list() {
        let list: ExtensionAllowList = vec!["mkv".to_string(), "MP4".to_string()]
            .into_iter()
            .collect();
        assert!(list.contains("mp4"));
        assert!(list.contains("MKV"));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("/dl/ep1.MKV")), Some("mkv".to_string()));
        assert_eq!(
            file_extension(Path::new("/dl/show.s01e01.720p.mp4")),
            Some("mp4".to_string())
        );
        assert_eq!(file_extension(Path::new("/dl/.mkv")), Some("mkv".to_string()));
        assert_eq!(file_extension(Path::new("/dl/README")), None);
        assert_eq!(file_extension(Path::new("/dl/trailing.")), None);
        // The dot in the directory name does not count
        assert_eq!(file_extension(Path::new("/dl/show.s01/README")), None);
    }

    #[test]
    fn test_allows() {
        let list = ExtensionAllowList::parse("mkv,mp4");
        assert!(list.allows(Path::new("/dl/ep1.mkv")));
        assert!(!list.allows(Path::new("/dl/ep1.nfo")));
        assert!(!list.allows(Path::new("/dl/mkv")));
    }
}
