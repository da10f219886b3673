use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codec::CodecKind;

/// Error type for opening, decoding and classifying input files.
///
/// Every variant names the file it concerns. None of them are recoverable: the caller is
/// expected to report the message and stop rather than continue with a partially decoded input.
#[derive(Error, Debug)]
pub enum InputError {
    /// The file could not be opened (missing, unreadable, or the header could not be read).
    #[error("Unable to open file for reading ({})", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file uses a codec this build (or this capability set) cannot decode.
    #[error("Files compressed with {codec} are not supported ({})", .path.display())]
    UnsupportedCodec { path: PathBuf, codec: CodecKind },

    /// The decoder for an openable file could not be initialised.
    #[error("Unable to open {codec} compressed file ({}): {source}", .path.display())]
    CodecInit {
        path: PathBuf,
        codec: CodecKind,
        #[source]
        source: io::Error,
    },

    /// An open decoder failed part way through the stream.
    #[error("Error reading {codec} compressed file ({}): {source}", .path.display())]
    Decode {
        path: PathBuf,
        codec: CodecKind,
        #[source]
        source: io::Error,
    },

    /// Not even one content byte could be read.
    #[error("Error reading file ({}): file is empty or truncated", .path.display())]
    TruncatedInput { path: PathBuf },

    /// The first content byte is neither '>' nor '@'.
    #[error(
        "File is not in FASTA or FASTQ format ({}): unexpected leading byte {:?}",
        .path.display(),
        leading_char(.byte)
    )]
    UnrecognizedRecordType { path: PathBuf, byte: u8 },
}

fn leading_char(byte: &u8) -> char {
    char::from(*byte)
}

impl InputError {
    #[cold]
    pub fn unreadable<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        InputError::UnreadableFile {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    #[cold]
    pub fn codec_init<P: AsRef<Path>>(path: P, codec: CodecKind, source: io::Error) -> Self {
        InputError::CodecInit {
            path: path.as_ref().to_path_buf(),
            codec,
            source,
        }
    }

    /// The file this error is about.
    pub fn path(&self) -> &Path {
        match self {
            InputError::UnreadableFile { path, .. }
            | InputError::UnsupportedCodec { path, .. }
            | InputError::CodecInit { path, .. }
            | InputError::Decode { path, .. }
            | InputError::TruncatedInput { path }
            | InputError::UnrecognizedRecordType { path, .. } => path,
        }
    }
}

/// Result type alias for seqgate-io operations.
pub type Result<T> = std::result::Result<T, InputError>;
