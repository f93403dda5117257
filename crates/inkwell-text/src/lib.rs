//! Pattern search, spelling correction and typing assistance for inkwell.
//!
//! # Features
//!
//! - `search` -- KMP substring search and match navigation
//! - `correct` -- the corrector, its candidate generators and the
//!   common-word list
//! - `editing` -- autocorrect-on-boundary and completion helpers
//! - `handle` -- [`handle::InkwellHandle`], everything behind one type

#[cfg(feature = "correct")]
pub mod corrector;
#[cfg(feature = "editing")]
pub mod editing;
#[cfg(feature = "handle")]
pub mod handle;
#[cfg(feature = "search")]
pub mod search;
#[cfg(feature = "correct")]
pub mod speller;
#[cfg(feature = "correct")]
pub mod suggestion;

#[cfg(feature = "correct")]
pub use corrector::{Corrector, CorrectorOptions};
#[cfg(feature = "handle")]
pub use handle::{HandleOptions, InkwellError, InkwellHandle};
