//! Strict base64 encoding and decoding over the standard RFC 4648 alphabet.
//!
//! Two entry points form the entire surface: [`encode`], which always
//! succeeds, and [`decode`], which validates length, padding, and symbols
//! before reconstructing the original bytes. Both are stateless single-pass
//! transforms over in-memory buffers; the `_into` variants append to
//! caller-owned buffers instead of allocating.
//!
//! # Example
//!
//! ```
//! let encoded = quad64::encode(b"Hello, World!");
//! assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");
//!
//! let decoded = quad64::decode(&encoded).unwrap();
//! assert_eq!(decoded, b"Hello, World!");
//! ```

mod alphabet;
mod codec;
mod errors;

pub use codec::{decode, decode_into, encode, encode_into};
pub use errors::DecodeError;
