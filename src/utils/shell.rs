//! ## shell
//!
//! shell quoting utilities

/// Protect the string with single quotes, so that the shell passes it as one word.
///
/// A single quote inside `s` is emitted as `'\''`.
///
/// ```text
/// the value => 'the value'
/// ```
pub fn wrap<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut wrapped = String::with_capacity(s.len() + 2);
    wrapped.push('\'');
    for c in s.chars() {
        if c == '\'' {
            wrapped.push_str("'\\''");
        } else {
            wrapped.push(c);
        }
    }
    wrapped.push('\'');
    wrapped
}

/// Protect the string with double quotes; used for file names inside a smbclient command.
///
/// smbclient has no escape for `"` inside a quoted name, so such names give `None`
pub fn dquote<S: AsRef<str>>(s: S) -> Option<String> {
    let s = s.as_ref();
    if s.contains('"') {
        return None;
    }
    Some(format!("\"{}\"", s))
}
