//! Umbrella crate re-exporting the seqgate components behind cargo features.
//!
//! The `gzip` and `bzip2` features decide which codecs [`io::Capabilities::compiled`] reports.

#[cfg(feature = "io")]
#[doc(inline)]
pub use seqgate_io as io;

#[cfg(feature = "digest")]
#[doc(inline)]
pub use seqgate_digest as digest;

#[cfg(feature = "random")]
#[doc(inline)]
pub use seqgate_random as random;
