use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::debug;

use crate::codec::{Capabilities, CodecKind};
use crate::decoder::{Decoder, open_decoder};
use crate::error::{InputError, Result};

/// An open input file, decoded transparently according to its codec.
///
/// The handle exclusively owns one decode path for its whole lifetime. Its codec is fixed
/// when it is opened. Resources are released by [`InputHandle::close`], or by dropping the
/// handle on any other exit path.
pub struct InputHandle {
    path: PathBuf,
    codec: CodecKind,
    decoder: Box<dyn Decoder>,
}

impl InputHandle {
    ///
    /// Open a file with every codec this build supports.
    ///
    /// # Arguments
    /// - path: path to the (possibly compressed) sequence file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        InputHandle::open_with(path, &Capabilities::compiled())
    }

    ///
    /// Open a file, restricted to the codecs in `capabilities`.
    ///
    /// The first two bytes are read to pick a codec and the file is rewound before the
    /// decoder sees it.
    ///
    /// # Arguments
    /// - path: path to the (possibly compressed) sequence file
    /// - capabilities: the codecs that may be decoded
    pub fn open_with<P: AsRef<Path>>(path: P, capabilities: &Capabilities) -> Result<Self> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| InputError::unreadable(path, e))?;
        let codec = CodecKind::sniff_reader(&mut file).map_err(|e| InputError::unreadable(path, e))?;

        debug!("Detected {} codec for {}", codec, path.display());

        let decoder = open_decoder(path, codec, file, capabilities)?;

        Ok(InputHandle {
            path: path.to_path_buf(),
            codec,
            decoder,
        })
    }

    pub fn codec(&self) -> CodecKind {
        self.codec
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    ///
    /// Read decoded bytes into `buf`, returning how many were written. `Ok(0)` means the end of
    /// the decoded stream.
    ///
    /// A failure in the underlying codec is reported as [`InputError::Decode`] naming the file.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            match self.decoder.read(buf) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(InputError::Decode {
                        path: self.path.clone(),
                        codec: self.codec,
                        source,
                    });
                }
            }
        }
    }

    /// Release exactly the resources opened for this handle's codec.
    pub fn close(self) {
        debug!("Closing {} ({})", self.path.display(), self.codec);
        self.decoder.close();
    }
}

impl Read for InputHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        InputHandle::read(self, buf).map_err(io::Error::other)
    }
}

impl std::fmt::Debug for InputHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputHandle")
            .field("path", &self.path)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents).expect("Failed to write");
        file
    }

    #[rstest]
    fn test_plain_read_returns_leading_bytes() {
        let contents = b">seq1\nACGTACGT\n>seq2\nTTGG\n";
        let file = write_temp(contents);

        for n in [1usize, 2, 5, contents.len()] {
            let mut handle = InputHandle::open(file.path()).unwrap();
            assert_eq!(handle.codec(), CodecKind::Plain);

            let mut buffer = vec![0u8; n];
            let mut filled = 0;
            while filled < n {
                let read = handle.read(&mut buffer[filled..]).unwrap();
                assert!(read > 0);
                filled += read;
            }
            assert_eq!(&buffer[..], &contents[..n]);
            handle.close();
        }
    }

    #[rstest]
    fn test_plain_read_to_end_through_read_trait() {
        let contents = b"@r1\nACGT\n+\nIIII\n";
        let file = write_temp(contents);

        let mut handle = InputHandle::open(file.path()).unwrap();
        let mut decoded = Vec::new();
        handle.read_to_end(&mut decoded).unwrap();

        assert_eq!(decoded, contents);
    }

    #[rstest]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does_not_exist.fa");

        let err = InputHandle::open(&missing).unwrap_err();
        assert!(matches!(err, InputError::UnreadableFile { .. }));
        assert_eq!(err.path(), missing.as_path());
    }

    #[rstest]
    fn test_open_reports_path_and_codec() {
        let file = write_temp(b">a\nA\n");
        let handle = InputHandle::open(file.path()).unwrap();

        assert_eq!(handle.path(), file.path());
        assert!(format!("{:?}", handle).contains("Plain"));
    }
}
