//! # Input identity for sequence files.
//!
//! This crate answers two questions about an input file before any record parser touches it:
//! which compression codec wraps it (plain, gzip or bzip2), and which record syntax it holds
//! (FASTA or FASTQ). It also hands out an [`InputHandle`] that decodes the file transparently,
//! so the parser downstream only ever sees plain bytes.
//!
//! Codec support for gzip and bzip2 is controlled by the `gzip` and `bzip2` cargo features
//! (both on by default). The set of codecs a build can decode is exposed at runtime as
//! [`Capabilities`]; asking for a codec outside that set yields
//! [`InputError::UnsupportedCodec`] rather than an attempt to decode.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seqgate_io::{detect, CodecKind, RecordTypeKind};
//!
//! let detected = detect("reads.fq.gz").unwrap();
//! assert_eq!(detected.codec, CodecKind::Gzip);
//! assert_eq!(detected.record_type, RecordTypeKind::Fastq);
//! ```
//!
pub mod codec;
pub mod consts;
pub mod decoder;
pub mod error;
pub mod handle;
pub mod record;

// re-expose core types
pub use codec::*;
pub use consts::*;
pub use error::*;
pub use handle::*;
pub use record::*;
