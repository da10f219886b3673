//! One decode path per codec.
//!
//! Each codec gets its own [`Decoder`] implementation with the same three steps: `open` on a
//! file that has already been sniffed (and rewound), `read` decoded bytes, and `close`.
//! Adding a codec means adding one implementation here and one arm in [`open_decoder`].
//!
//! The gzip and bzip2 paths deliberately differ in how they get hold of the file. The gzip
//! decoder opens the path a second time, while the bzip2 decoder keeps the sniffing handle
//! and lets the decoder consume the magic bytes again from offset zero. Both end up decoding
//! the whole stream from its first byte.
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

#[cfg(any(feature = "gzip", feature = "bzip2"))]
use std::io::{BufRead, BufReader};

#[cfg(feature = "bzip2")]
use bzip2::read::MultiBzDecoder;
#[cfg(feature = "gzip")]
use flate2::read::MultiGzDecoder;

use crate::codec::{Capabilities, CodecKind};
use crate::error::{InputError, Result};

/// Decode path for a single codec. Owns the underlying file for its whole lifetime.
pub trait Decoder: Send {
    ///
    /// Open the decode path.
    ///
    /// # Arguments
    /// - path: the path of the input file
    /// - sniffed: the handle used to read the magic bytes, positioned at offset 0
    fn open(path: &Path, sniffed: File) -> Result<Self>
    where
        Self: Sized;

    /// Read decoded bytes into `buf`. `Ok(0)` means the decoded stream is exhausted.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Release the decoder and the file it owns.
    fn close(self: Box<Self>);

    fn codec(&self) -> CodecKind;
}

/// Uncompressed input: the sniffing handle doubles as the data handle.
pub struct PlainDecoder {
    file: File,
}

impl Decoder for PlainDecoder {
    fn open(_path: &Path, sniffed: File) -> Result<Self> {
        Ok(PlainDecoder { file: sniffed })
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }

    fn close(self: Box<Self>) {
        drop(self.file);
    }

    fn codec(&self) -> CodecKind {
        CodecKind::Plain
    }
}

/// gzip input, decoded member after member.
#[cfg(feature = "gzip")]
pub struct GzipDecoder {
    inner: BufReader<MultiGzDecoder<File>>,
}

#[cfg(feature = "gzip")]
impl Decoder for GzipDecoder {
    fn open(path: &Path, sniffed: File) -> Result<Self> {
        // close the plain handle and open the same path again for the decompressor
        drop(sniffed);
        let file = File::open(path).map_err(|e| InputError::unreadable(path, e))?;

        let mut inner = BufReader::new(MultiGzDecoder::new(file));
        prime(&mut inner).map_err(|e| InputError::codec_init(path, CodecKind::Gzip, e))?;

        Ok(GzipDecoder { inner })
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }

    fn close(self: Box<Self>) {
        drop(self.inner);
    }

    fn codec(&self) -> CodecKind {
        CodecKind::Gzip
    }
}

/// bzip2 input, possibly several concatenated streams, decoded through the handle that sniffed it.
#[cfg(feature = "bzip2")]
pub struct Bzip2Decoder {
    inner: BufReader<MultiBzDecoder<File>>,
}

#[cfg(feature = "bzip2")]
impl Decoder for Bzip2Decoder {
    fn open(path: &Path, sniffed: File) -> Result<Self> {
        let mut inner = BufReader::new(MultiBzDecoder::new(sniffed));
        prime(&mut inner).map_err(|e| InputError::codec_init(path, CodecKind::Bzip2, e))?;

        Ok(Bzip2Decoder { inner })
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }

    fn close(self: Box<Self>) {
        // the decoder hands back the sniffing handle, which goes out of scope with it
        drop(self.inner.into_inner().into_inner());
    }

    fn codec(&self) -> CodecKind {
        CodecKind::Bzip2
    }
}

/// Force the decoder to parse its stream header so a corrupt header surfaces at open time.
#[cfg(any(feature = "gzip", feature = "bzip2"))]
fn prime<R: Read>(reader: &mut BufReader<R>) -> io::Result<()> {
    loop {
        match reader.fill_buf() {
            Ok(_) => return Ok(()),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

///
/// Open the decode path for `codec`, checking it against the runtime capability set first.
///
/// # Arguments
/// - path: the path of the input file
/// - codec: the codec sniffed from the file
/// - sniffed: the sniffing handle, rewound to offset 0
/// - capabilities: the codecs this run may decode
pub fn open_decoder(
    path: &Path,
    codec: CodecKind,
    sniffed: File,
    capabilities: &Capabilities,
) -> Result<Box<dyn Decoder>> {
    if !capabilities.supports(codec) {
        return Err(InputError::UnsupportedCodec {
            path: path.to_path_buf(),
            codec,
        });
    }

    match codec {
        CodecKind::Plain => Ok(Box::new(PlainDecoder::open(path, sniffed)?)),
        #[cfg(feature = "gzip")]
        CodecKind::Gzip => Ok(Box::new(GzipDecoder::open(path, sniffed)?)),
        #[cfg(feature = "bzip2")]
        CodecKind::Bzip2 => Ok(Box::new(Bzip2Decoder::open(path, sniffed)?)),
        #[allow(unreachable_patterns)]
        _ => Err(InputError::UnsupportedCodec {
            path: path.to_path_buf(),
            codec,
        }),
    }
}
