//! rm4scc - Royal Mail 4-State Customer Barcode codec
//!
//! Encodes a postcode and delivery point into an RM4SCC bar-state string and
//! decodes such strings back, with 2-of-4 validation, single-symbol error
//! localization and modulo-6 check group verification.
//!
//! A bar-state string uses one symbol per bar: `A` (ascender), `D`
//! (descender), `F` (full) and `T` (tracker, `S` also accepted). Every
//! barcode opens with `A`; a complete one closes with `F`.
//!
//! # Example
//! ```
//! use rm4scc::{Status, decode, encode};
//!
//! let encoded = encode("AB12C", "3D");
//! assert_eq!(encoded.barcode, "ADADADFTATDAFTDFATAFDDTAFTFADDTFAF");
//!
//! let decoded = decode(&encoded.barcode);
//! assert_eq!(decoded.status, Some(Status::ValidBarcode));
//! assert_eq!((decoded.postcode.as_str(), decoded.delivery_pt.as_str()), ("AB12C", "3D"));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod config;
mod debug;

/// Bar-state string decoding (validity table, check group, decode pipeline)
pub mod decoder;
/// Postcode encoding (quad synthesis, encode pipeline)
pub mod encoder;
/// Crate error type
pub mod error;
/// Core data structures (Bar, Status, results)
pub mod models;
/// Text and image rendering of bar-state strings
pub mod render;
/// Input normalization and file helpers
pub mod tools;

pub use decoder::decode;
pub use encoder::encode;
pub use error::Rm4Error;
pub use models::{Bar, DecodeResult, EncodeResult, Status};
