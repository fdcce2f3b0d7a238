//! Traits for reading and writing translation data in langcat.

use std::{
    borrow::Cow,
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use encoding_rs::{Encoding, UTF_8};

use crate::error::Error;

/// A trait for parsing and writing one language's translation data.
///
/// # Example
///
/// ```rust,no_run
/// use langcat::{Catalog, traits::Parser};
/// let catalog = Catalog::read_from("translations/fr_FR.json")?;
/// catalog.write_to("fr_FR.sorted.json")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from an already decoded string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized;

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Parse from raw bytes, honoring a leading byte-order mark.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let text = decode_text(bytes)?;
        Self::from_str(&text)
    }

    /// Parse from any reader.
    fn from_reader<R: Read>(mut reader: R) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.to_writer(writer)
    }
}

/// Decodes translation bytes to UTF-8 text.
///
/// A UTF-8 or UTF-16 byte-order mark selects the encoding and is stripped;
/// without one the input must already be valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Result<Cow<'_, str>, Error> {
    let (encoding, bom_len): (&'static Encoding, usize) =
        Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .ok_or_else(|| Error::Encoding(format!("input is not valid {}", encoding.name())))
}
