use std::fmt::Display;
use std::io::{self, Read, Seek, SeekFrom};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{BZIP2_MAGIC, GZIP_MAGIC, MAGIC_LEN};

/// Compression codec wrapping an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    /// No compression
    Plain,
    /// gzip, possibly multi-member
    Gzip,
    /// bzip2
    Bzip2,
}

impl CodecKind {
    ///
    /// Classify a codec from the leading bytes of a stream.
    ///
    /// Only the first two bytes are looked at; anything after them never changes the result.
    /// Fewer than two bytes always classify as [`CodecKind::Plain`].
    ///
    /// # Arguments
    /// - magic: the leading bytes of the stream (any length)
    pub fn sniff(magic: &[u8]) -> CodecKind {
        match magic {
            [a, b, ..] if [*a, *b] == GZIP_MAGIC => CodecKind::Gzip,
            [a, b, ..] if [*a, *b] == BZIP2_MAGIC => CodecKind::Bzip2,
            _ => CodecKind::Plain,
        }
    }

    ///
    /// Read the magic bytes of a seekable stream, classify them, and rewind the stream to its
    /// absolute start so no bytes are lost to whatever decodes it next.
    pub fn sniff_reader<R: Read + Seek>(reader: &mut R) -> io::Result<CodecKind> {
        let mut magic = [0u8; MAGIC_LEN];
        let mut filled = 0;

        while filled < MAGIC_LEN {
            match reader.read(&mut magic[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        reader.seek(SeekFrom::Start(0))?;

        Ok(CodecKind::sniff(&magic[..filled]))
    }

    /// Whether decoding this codec requires a decompressor.
    pub fn is_compressed(&self) -> bool {
        !matches!(self, CodecKind::Plain)
    }
}

impl Display for CodecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecKind::Plain => write!(f, "plain"),
            CodecKind::Gzip => write!(f, "gzip"),
            CodecKind::Bzip2 => write!(f, "bzip2"),
        }
    }
}

impl FromStr for CodecKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "none" => Ok(CodecKind::Plain),
            "gzip" | "gz" => Ok(CodecKind::Gzip),
            "bzip2" | "bz2" => Ok(CodecKind::Bzip2),
            _ => Err(format!("Unknown codec: {}", s)),
        }
    }
}

/// The set of codecs that can be decoded at runtime.
///
/// Plain input is always supported. Gzip and bzip2 are available when the matching cargo
/// feature was compiled in. A set can be narrowed with [`Capabilities::without`] or
/// [`Capabilities::restrict_to`], but never widened beyond what the build provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    gzip: bool,
    bzip2: bool,
}

impl Capabilities {
    /// Everything this build can decode.
    pub fn compiled() -> Self {
        Capabilities {
            gzip: cfg!(feature = "gzip"),
            bzip2: cfg!(feature = "bzip2"),
        }
    }

    /// Only uncompressed input.
    pub fn plain_only() -> Self {
        Capabilities {
            gzip: false,
            bzip2: false,
        }
    }

    pub fn supports(&self, codec: CodecKind) -> bool {
        match codec {
            CodecKind::Plain => true,
            CodecKind::Gzip => self.gzip,
            CodecKind::Bzip2 => self.bzip2,
        }
    }

    /// Drop a codec from the set. Removing [`CodecKind::Plain`] has no effect.
    pub fn without(mut self, codec: CodecKind) -> Self {
        match codec {
            CodecKind::Plain => {}
            CodecKind::Gzip => self.gzip = false,
            CodecKind::Bzip2 => self.bzip2 = false,
        }
        self
    }

    /// Keep only the codecs listed in `allowed` (plain always survives).
    pub fn restrict_to(self, allowed: &[CodecKind]) -> Self {
        Capabilities {
            gzip: self.gzip && allowed.contains(&CodecKind::Gzip),
            bzip2: self.bzip2 && allowed.contains(&CodecKind::Bzip2),
        }
    }

    pub fn available(&self) -> Vec<CodecKind> {
        [CodecKind::Plain, CodecKind::Gzip, CodecKind::Bzip2]
            .into_iter()
            .filter(|codec| self.supports(*codec))
            .collect()
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::compiled()
    }
}
