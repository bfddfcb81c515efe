//! # Uniquify - Unique, Short and Easy-to-Read Names and Paths
//!
//! Given a batch of names or filesystem paths, this crate finds the parts
//! shared across all of them and either strips the shared parts down to the
//! shortest still-distinguishing prefix/suffix, or replaces shared runs with
//! a placeholder marker while keeping the distinguishing parts in place.
//!
//! ## Example
//!
//! ```
//! use uniquify_rs::{shortname, skipcommonname, ShortenOptions, SkipOptions};
//!
//! // Shorten to the minimal distinguishing suffix:
//! let short = shortname(
//!     &[
//!         "__common_part___abc___common_part__",
//!         "__common_part___ijk___common_part__",
//!         "__common_part___xyz___common_part__",
//!     ],
//!     &ShortenOptions::default(),
//! );
//! assert_eq!(short, vec!["c", "k", "z"]);
//!
//! // Or collapse the common parts into skip marks:
//! let skipped = skipcommonname(
//!     &["ab__common_part___c", "ij__common_part___k", "xy__common_part___z"],
//!     &SkipOptions::default(),
//! );
//! assert_eq!(skipped, vec!["ab...c", "ij...k", "xy...z"]);
//! ```
//!
//! ## How it works
//!
//! Inputs are split into token sequences (characters, or components split on
//! a separator), compared column by column into a common/different diff
//! mask, and run-length encoded into chunks. Shortening scans a widening
//! window of columns anchored at the first difference; marker mode renders
//! every chunk in place, collapsing common runs that are at least as wide as
//! the marker, and recurses into nested separator levels.
//!
//! All operations are pure batch functions: no I/O, no shared state, and the
//! count of distinct outputs always matches the count of distinct inputs.

mod chunk;
mod error;
mod mask;
mod op;
mod sep;
mod shorten;
mod skip;

#[cfg(test)]
mod tests;

pub use error::UniquifyError;
pub use op::Operation;
pub use sep::SepSpec;
pub use shorten::{shortname, shortpath, Direction, ShortenOptions};
pub use skip::{skipcommonname, skipcommonpath, SkipOptions};
