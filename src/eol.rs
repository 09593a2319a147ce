//! Line-ending canonicalization applied on both the read and write paths.
//!
//! Values and comments are stored internally with bare `\n` line endings, so
//! entries survive editing on Windows- or Unix-style systems without spurious
//! diffs. On write, canonical line endings are expanded to the platform
//! convention before the container serializer sees them.

/// The line-ending sequence the writing platform prefers.
pub const PLATFORM_LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Reduces every line-ending variant to canonical bare `\n`.
///
/// Every carriage return is stripped unconditionally, collapsing `\r\n` into
/// `\n` and deleting lone `\r` characters. Leading and trailing whitespace is
/// preserved exactly.
pub fn canonicalize(text: &str) -> String {
    text.replace('\r', "")
}

/// Expands canonical `\n` line endings to [`PLATFORM_LINE_ENDING`].
///
/// The input must already be canonical (see [`canonicalize`]); a stray `\r`
/// would otherwise be doubled on Windows.
pub fn to_platform(text: &str) -> String {
    if PLATFORM_LINE_ENDING == "\n" {
        text.to_string()
    } else {
        text.replace('\n', PLATFORM_LINE_ENDING)
    }
}
