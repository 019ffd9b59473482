use byteorder::{ByteOrder, WriteBytesExt};
use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::Path;
use util::Endian;

/// A carved stone: a flat sequence of 32-bit words.
///
/// On disk the words are stored back to back in big-endian byte order,
/// with no header, footer or padding. A file whose length is not a
/// multiple of four bytes is corrupt and rejected by [`read`].
///
/// [`read`]: ./fn.read.html
#[derive(Debug, PartialEq)]
pub struct Stone {
    words: Vec<u32>,
}

impl Stone {
    pub fn from(words: Vec<u32>) -> Stone {
        Stone { words }
    }

    pub fn copy_from(words: &[u32]) -> Stone {
        Stone {
            words: Vec::from(words),
        }
    }

    pub fn words(&self) -> &[u32] {
        &self.words[..]
    }

    pub fn into_words(self) -> Vec<u32> {
        self.words
    }
}

const WORD_BYTES: usize = 4;

pub fn read<R: Read>(reader: &mut R) -> io::Result<Stone> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if bytes.len() % WORD_BYTES != 0 {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            "Stone length is not a multiple of 4 bytes.",
        ));
    }

    let mut words = vec![0u32; bytes.len() / WORD_BYTES];
    Endian::read_u32_into(&bytes, &mut words);

    Ok(Stone::from(words))
}

pub fn write<W: Write>(writer: &mut W, stone: &Stone) -> io::Result<()> {
    for &word in stone.words() {
        writer.write_u32::<Endian>(word)?;
    }
    Ok(())
}

pub trait ReadStoneExt: Read + Sized {
    fn read_stone(&mut self) -> io::Result<Stone> {
        read(self)
    }
}

impl<R: Read + Sized> ReadStoneExt for R {}

pub trait WriteStoneExt: Write + Sized {
    fn write_stone(&mut self, stone: &Stone) -> io::Result<()> {
        write(self, stone)
    }
}

impl<W: Write + Sized> WriteStoneExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<Stone> {
    BufReader::new(File::open(path)?).read_stone()
}

pub fn write_file<P: AsRef<Path>>(path: P, stone: &Stone) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_stone(stone)?;
    writer.flush()
}
