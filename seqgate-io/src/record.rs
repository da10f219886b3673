use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::codec::{Capabilities, CodecKind};
use crate::consts::{FASTA_MARKER, FASTQ_MARKER};
use crate::error::{InputError, Result};
use crate::handle::InputHandle;

/// Record syntax family of a sequence file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordTypeKind {
    Fasta,
    Fastq,
}

impl RecordTypeKind {
    /// Map a leading content byte to its record type.
    pub fn from_marker(byte: u8) -> Option<RecordTypeKind> {
        match byte {
            FASTA_MARKER => Some(RecordTypeKind::Fasta),
            FASTQ_MARKER => Some(RecordTypeKind::Fastq),
            _ => None,
        }
    }

    /// The byte every record of this type starts with.
    pub fn marker(&self) -> u8 {
        match self {
            RecordTypeKind::Fasta => FASTA_MARKER,
            RecordTypeKind::Fastq => FASTQ_MARKER,
        }
    }

    ///
    /// Classify the record type of an open handle from its first decoded byte.
    ///
    /// Exactly one byte is consumed. This is a peek, not a rewind: anyone who wants to parse
    /// the records afterwards opens a fresh handle.
    ///
    /// # Arguments
    /// - handle: a freshly opened handle, nothing read from it yet
    pub fn classify(handle: &mut InputHandle) -> Result<RecordTypeKind> {
        let mut buffer = [0u8; 1];

        if handle.read(&mut buffer)? < buffer.len() {
            return Err(InputError::TruncatedInput {
                path: handle.path().to_path_buf(),
            });
        }

        RecordTypeKind::from_marker(buffer[0]).ok_or_else(|| {
            InputError::UnrecognizedRecordType {
                path: handle.path().to_path_buf(),
                byte: buffer[0],
            }
        })
    }
}

impl Display for RecordTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordTypeKind::Fasta => write!(f, "fasta"),
            RecordTypeKind::Fastq => write!(f, "fastq"),
        }
    }
}

impl FromStr for RecordTypeKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fasta" | "fa" => Ok(RecordTypeKind::Fasta),
            "fastq" | "fq" => Ok(RecordTypeKind::Fastq),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}

/// What `detect` found out about an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedInput {
    pub path: PathBuf,
    pub codec: CodecKind,
    pub record_type: RecordTypeKind,
}

///
/// Sniff the codec and record type of a file in one go, then release it.
///
/// # Arguments
/// - path: path to the (possibly compressed) sequence file
pub fn detect<P: AsRef<Path>>(path: P) -> Result<DetectedInput> {
    detect_with(path, &Capabilities::compiled())
}

///
/// Like [`detect`], restricted to the codecs in `capabilities`.
pub fn detect_with<P: AsRef<Path>>(path: P, capabilities: &Capabilities) -> Result<DetectedInput> {
    let mut handle = InputHandle::open_with(path, capabilities)?;
    let record_type = RecordTypeKind::classify(&mut handle)?;

    let detected = DetectedInput {
        path: handle.path().to_path_buf(),
        codec: handle.codec(),
        record_type,
    };
    handle.close();

    debug!(
        "{} is {} ({})",
        detected.path.display(),
        detected.record_type,
        detected.codec
    );

    Ok(detected)
}
