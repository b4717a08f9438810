//! ## parser
//!
//! smbclient and smbtree output parsers

/// Messages smbclient reports when the object does not exist.
///
/// - `NT_STATUS_NO_SUCH_FILE`: the parent directory exists, the file doesn't
/// - `NT_STATUS_OBJECT_NAME_NOT_FOUND`: the parent directory doesn't exist
const MISSING_OBJECT_SENTINELS: [&str; 2] =
    ["NT_STATUS_OBJECT_NAME_NOT_FOUND", "NT_STATUS_NO_SUCH_FILE"];

/// Returns whether the output reports a missing file or directory (case insensitive)
pub fn is_missing_object<S: AsRef<str>>(output: S) -> bool {
    let output = output.as_ref().to_ascii_uppercase();
    MISSING_OBJECT_SENTINELS
        .iter()
        .any(|sentinel| output.contains(sentinel))
}

/// Parse the output of `dir <prefix>*<suffix>`.
///
/// Keeps the trimmed lines starting with `prefix` and cuts each of them right after the first
/// occurrence of `suffix`, which drops the attributes, size and date columns.
/// Lines which don't contain `suffix` are skipped.
/// With an empty suffix the name is the first whitespace-delimited token.
pub fn parse_listing(output: &str, prefix: &str, suffix: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(prefix))
        .filter_map(|line| {
            if suffix.is_empty() {
                return line.split_whitespace().next().map(str::to_string);
            }
            line.find(suffix)
                .map(|pos| line[..pos + suffix.len()].to_string())
        })
        .collect()
}

/// Parse the output of `smbtree`.
///
/// Share lines are indented by two tabs, so the share name is the third tab-separated field.
pub fn parse_shares(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let words: Vec<&str> = line.split('\t').collect();
            match words.get(2).map(|x| x.trim()) {
                Some(share) if !share.is_empty() => Some(share.to_string()),
                _ => None,
            }
        })
        .collect()
}
