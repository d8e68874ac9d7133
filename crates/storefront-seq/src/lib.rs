//! Free-standing versions of the three standard higher-order sequence
//! operations.
//!
//! Each operation takes the sequence as an explicit parameter and a callback
//! receiving the current element, its index and the whole source. Inputs are
//! never mutated.
//!
//! ```
//! use storefront_seq::{accumulate, select, transform};
//!
//! let numbers = [2, 4, 6, 7, 8];
//! assert_eq!(transform(&numbers, |n, _, _| n * 2), vec![4, 8, 12, 14, 16]);
//! assert_eq!(select(&numbers, |n, _, _| *n > 5), vec![6, 7, 8]);
//! assert_eq!(accumulate(&numbers, |acc, n, _, _| acc + n, 0), 27);
//! ```

mod ops;
pub mod samples;
mod truthy;

pub use ops::{accumulate, accumulate_falsy_reset, select, transform};
pub use truthy::Truthy;
