use std::io::{self, ErrorKind, Read, Write};

use common::constants::MEM_SIZE;
use common::mem::{ReadBeU16, WriteBeU16};

use thiserror::Error;

/// A program image: an origin address and the payload words placed there.
///
/// On the wire the image is a big-endian origin word followed by big-endian
/// payload words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub origin: u16,
    pub words: Vec<u16>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing origin word")]
    MissingOrigin,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Image {
    pub fn new(origin: u16, words: Vec<u16>) -> Image {
        assert!(words.len() <= MEM_SIZE - origin as usize);
        Image { origin, words }
    }

    /// Read an image from a byte stream. A short origin read is an error; a
    /// truncated payload just loads fewer words.
    pub fn read_from(reader: &mut impl Read) -> Result<Image, LoadError> {
        let origin = match reader.read_be_u16() {
            Ok(origin) => origin,
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
                return Err(LoadError::MissingOrigin);
            }
            Err(err) => return Err(err.into()),
        };

        let max_words = MEM_SIZE - origin as usize;
        let mut words = vec![];
        loop {
            match reader.read_be_u16() {
                Ok(word) => {
                    // Words past the top of the address space are discarded.
                    if words.len() < max_words {
                        words.push(word);
                    }
                }
                Err(err) if err.kind() == ErrorKind::UnexpectedEof => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(Image { origin, words })
    }

    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writer.write_be_u16(self.origin)?;
        for word in &self.words {
            writer.write_be_u16(*word)?;
        }
        Ok(())
    }
}
