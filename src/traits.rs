//! Traits for container parsing/serialization and accessor-source emission.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::{designer::DesignerClass, error::Error};

/// A trait for parsing and writing a resource container from/to one file.
///
/// # Example
///
/// ```rust,no_run
/// use resxcodec::traits::Parser;
/// let format = resxcodec::formats::resx::Format::read_from("Strings.resx")?;
/// format.write_to("Strings_copy.resx")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.to_writer(writer)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}

/// A backend that turns an accessor-class description into source text in one
/// target language.
///
/// The backend owns the identifier-validity rules of its target language: ids
/// it cannot map to a valid accessor member are returned as failures rather
/// than emitted. The description side of the seam is owned by
/// [`crate::designer`].
pub trait EmissionBackend {
    /// File extension of the emitted source, without the leading dot.
    fn file_extension(&self) -> &'static str;

    /// Emits source text for the description.
    ///
    /// Returns the full source text plus the ids of every member that could
    /// not be mapped to a valid identifier. Failed members are absent from
    /// the text; the text is still complete for all members that succeeded.
    fn generate_accessor_source(&self, class: &DesignerClass) -> (String, Vec<String>);
}
