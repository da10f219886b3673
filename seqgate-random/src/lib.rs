//! # Reproducible, unbiased random draws
//!
//! A [`RandomStream`] is seeded once, either explicitly or from OS entropy, and then hands out
//! integers uniformly distributed below any bound. Draws use rejection sampling rather than a
//! plain modulo, so no residue is favoured.
//!
//! ```rust
//! use seqgate_random::RandomStream;
//!
//! let mut stream = RandomStream::from_seed(1);
//! let pick = stream.draw_below(6).unwrap();
//! assert!(pick < 6);
//! ```
//!
//! Threads either share one stream through [`SharedRandomStream`] or take their own
//! with [`RandomStream::split`].

pub mod consts;
pub mod error;
pub mod shared;
pub mod stream;

pub use consts::*;
pub use error::*;
pub use shared::*;
pub use stream::*;
