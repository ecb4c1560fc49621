//! A small implementation of UUID version 7
//!
//! ```rust
//! let uuid = uuidv7::uuid7()?;
//! println!("{}", uuid); // e.g. "01890a5d-ac96-774b-bcce-b302099a8057"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! # Ok::<(), uuidv7::GenerateError>(())
//! ```
//!
//! See [draft-peabody-dispatch-new-uuid-format-03](https://www.ietf.org/archive/id/draft-peabody-dispatch-new-uuid-format-03.html).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                         rand_b                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in
//!   milliseconds, so identifiers created at increasing timestamps sort in
//!   creation order when compared as bytes or as strings ("k-sortable").
//! - The 4-bit `ver` field is set at `0111`.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 74 `rand_a` and `rand_b` bits are filled with a
//!   cryptographically strong random number.
//!
//! Generation fails if the random source cannot supply bytes; the error is
//! returned to the caller as is, without any internal retry. [`Uuid::NIL`] is
//! available as the all-zero sentinel for callers that need an "invalid"
//! placeholder value.

mod id;
pub use id::{ParseError, Uuid};

pub mod v7;
#[doc(inline)]
pub use v7::{uuid7, GenerateError};
