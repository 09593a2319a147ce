//! Reading and writing resource entries through a container file.
//!
//! This is the round-trip surface of the crate: [`read`] and [`write`] move
//! [`ResxEntry`] values through the ResX container format, canonicalizing
//! line endings in both directions and honoring the comment-inclusion
//! options. Reads are all-or-nothing; a parse failure mid-enumeration
//! propagates without returning a partial entry list.

use std::path::Path;

use crate::{
    eol,
    error::Error,
    formats::{DataElement, ResxFormat},
    options::{ReadOptions, WriteOptions},
    traits::Parser,
    types::ResxEntry,
};

/// Reads all entries from a container with default options (comments
/// included).
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<ResxEntry>, Error> {
    read_with_options(path, ReadOptions::default())
}

/// Reads all entries from a container, in container order.
///
/// Values and comments are canonicalized to bare `\n` line endings. When
/// `options` skips comments, every entry carries an empty comment regardless
/// of what the container holds.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the container path does not exist, and
/// propagates parse or I/O failures without returning a partial list. The
/// file handle is released on every exit path.
pub fn read_with_options<P: AsRef<Path>>(
    path: P,
    options: ReadOptions,
) -> Result<Vec<ResxEntry>, Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::not_found(path));
    }

    let format = ResxFormat::read_from(path)?;
    let entries = format
        .entries
        .into_iter()
        .map(|data| ResxEntry {
            id: data.name,
            value: eol::canonicalize(&data.value),
            comment: if options.include_comments {
                eol::canonicalize(data.comment.as_deref().unwrap_or_default())
            } else {
                String::new()
            },
        })
        .collect();
    Ok(entries)
}

/// Writes entries to a container with default options (comments skipped).
pub fn write<P: AsRef<Path>>(path: P, entries: &[ResxEntry]) -> Result<(), Error> {
    write_with_options(path, entries, WriteOptions::default())
}

/// Writes entries to a container, creating or truncating it.
///
/// Records are written in input order. Values are canonicalized and then
/// expanded to the platform line-ending convention, so the on-disk container
/// uses the writing platform's style. A comment is persisted only when
/// `options` opts in **and** the comment is not whitespace-only.
///
/// # Errors
///
/// Returns [`Error::Validation`] when any entry id is empty. Validation runs
/// before any I/O, so no partial container is produced.
pub fn write_with_options<P: AsRef<Path>>(
    path: P,
    entries: &[ResxEntry],
    options: WriteOptions,
) -> Result<(), Error> {
    if entries.iter().any(|entry| entry.id.is_empty()) {
        return Err(Error::validation_error(
            "resource entry id must not be empty",
        ));
    }

    let format = ResxFormat {
        entries: entries
            .iter()
            .map(|entry| DataElement {
                name: entry.id.clone(),
                value: eol::to_platform(&eol::canonicalize(&entry.value)),
                comment: if options.include_comments && !entry.comment.trim().is_empty() {
                    Some(eol::to_platform(&eol::canonicalize(&entry.comment)))
                } else {
                    None
                },
            })
            .collect(),
    };
    format.write_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_rejects_empty_id() {
        let entries = vec![
            ResxEntry::new("Greeting", "Hello"),
            ResxEntry::new("", "orphaned value"),
        ];
        let dir = tempfile::tempdir().unwrap();
        let container = dir.path().join("Strings.resx");

        let result = write(&container, &entries);
        assert!(matches!(result, Err(Error::Validation(_))));
        // Fail-fast: no partial container may exist.
        assert!(!container.exists());
    }

    #[test]
    fn test_read_missing_container() {
        let result = read("ThisResXFileDoesNotExist.resx");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_whitespace_only_comment_is_skipped() {
        let entries = vec![ResxEntry::new("Greeting", "Hello").with_comment("  \n  ")];
        let dir = tempfile::tempdir().unwrap();
        let container = dir.path().join("Strings.resx");

        write_with_options(&container, &entries, WriteOptions::new().with_comments(true)).unwrap();
        let content = std::fs::read_to_string(&container).unwrap();
        assert!(!content.contains("<comment>"));
    }
}
