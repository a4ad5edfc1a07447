//! # Front-coded string dictionary
//!
//! A compact, immutable dictionary over a batch of byte strings. The strings
//! are sorted, and each id is a string's rank in byte-wise order.
//!
//! Storage uses front coding: consecutive strings are grouped into blocks,
//! the first string of each block is stored whole, and every other member
//! keeps only the bytes after the prefix it shares with that first string.
//! Block boundaries come from a dynamic program that minimizes the total
//! stored bytes.
//!
//! Two queries run directly on the compressed layout:
//! - [`FrontCodedDict::lookup`]: string to id, by binary search
//! - [`FrontCodedDict::access`]: id to string
//!
//! ## Example
//!
//! ```
//! use frontcoding_rs::FrontCodedDict;
//!
//! let dict = FrontCodedDict::build(["bandage", "ban", "band"]).unwrap();
//!
//! assert_eq!(dict.lookup("band"), Some(1));
//! assert_eq!(dict.access(2).unwrap(), b"bandage");
//! assert_eq!(dict.lookup("bank"), None);
//!
//! // "ban" is stored whole; "band" and "bandage" keep only "d" and "dage".
//! assert_eq!(dict.arena(), b"banddage");
//! ```
//!
//! ## Limits
//!
//! Each [`StringEntry`] takes 8 bytes, with an 8-bit shared prefix length, an
//! 8-bit stored suffix length, and a 16-bit distance to the block base.
//! Construction never truncates: a string that cannot be encoded within those
//! widths (or tighter caps from [`BuildConfig`]) fails the build with
//! [`DictError::FieldOverflow`].
//!
//! ## Performance
//!
//! - Construction: the sort plus O(n * w), where `w` is how many earlier
//!   strings share a prefix with each string (capped by `max_block_span`).
//!   O(n^2) in the worst case. Extra memory is O(n + w).
//! - `lookup`: O(log n) comparisons, each reading at most two arena slices
//! - `access`: O(length of the result)

mod compare;
mod config;
mod cost_table;
mod dictionary;
mod encoder;
mod entry;
mod error;
mod iter;
mod persist;
mod segment;
mod sort;


pub use config::{BuildConfig, OverflowPolicy};
pub use dictionary::{DictStats, FrontCodedDict};
pub use entry::StringEntry;
pub use error::{DictError, Field};
pub use iter::DictIter;
pub use persist::{FORMAT_VERSION, MAGIC};
