//! ## path
//!
//! path utilities

use std::path::{Path, PathBuf};

/// Convert a path destined to the remote share to the windows separator, which is the one smbclient expects
pub fn to_remote<S: AsRef<str>>(p: S) -> String {
    p.as_ref().replace('/', "\\")
}

/// Name of the last component of a remote path, separated either by `/` or `\`
pub fn remote_file_name(p: &str) -> &str {
    p.rsplit(['/', '\\']).next().unwrap_or(p)
}

/// Split a local path into the directory to run the command from and the file name to pass to smbclient.
///
/// When `p` has no parent, the directory is `.`; when it has no file name (e.g. `/` or `..`), `None`
pub fn split_local(p: &Path) -> Option<(PathBuf, String)> {
    let name = p.file_name()?.to_string_lossy().to_string();
    let dir = match p.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Some((dir, name))
}
