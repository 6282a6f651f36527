//! Error types for wrapper encode and decode operations.
//!
//! This module contains the [`Error`] type returned by every fallible wrapper
//! operation. It splits into the two kinds a caller can meet: [`EncodeError`]
//! when the held value cannot be represented in the wrapper's format, and
//! [`DecodeError`] when input bytes cannot be turned back into the payload
//! type. Both kinds carry the underlying codec error unchanged.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use packio::{pack, Error, Format, Packed};
//!
//! let mut counts = pack(BTreeMap::<String, u32>::new(), Format::Json);
//! match counts.from_slice(br#"{"apples": "three"}"#) {
//!     Err(Error::Decode(_)) => {}
//!     other => panic!("expected a decode error, got {other:?}"),
//! }
//! ```

use std::fmt::{self, Display};
use std::str;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The value could not be encoded into the wrapper's format.
///
/// Each variant wraps the native error of one codec. Typical causes are value
/// shapes the format cannot represent, such as non-string map keys in JSON or
/// a non-table value at the top level of a TOML document.
#[derive(Debug)]
pub enum EncodeError {
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
    Toml(toml::ser::Error),
}

/// The input bytes could not be decoded into the payload type.
///
/// Each variant wraps the native error of one codec: malformed syntax,
/// unterminated structures, and fields whose value has the wrong type all
/// surface here exactly as the codec reports them.
#[derive(Debug)]
pub enum DecodeError {
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
    Toml(toml::de::Error),

    /// TOML input that is not valid UTF-8.
    ///
    /// The TOML codec only accepts strings, so the bytes are validated first
    /// and a failure is reported as a decode error of the TOML path.
    Utf8(str::Utf8Error),
}

/// This type represents all possible errors that can occur when serializing
/// or deserializing a wrapped value.
#[derive(Debug)]
pub enum Error {
    Encode(EncodeError),
    Decode(DecodeError),
}

impl Error {
    /// Returns `true` if the error came from encoding the held value.
    pub const fn is_encode(&self) -> bool {
        matches!(self, Error::Encode(_))
    }

    /// Returns `true` if the error came from decoding input bytes.
    pub const fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}

impl From<EncodeError> for Error {
    fn from(error: EncodeError) -> Self {
        Error::Encode(error)
    }
}

impl From<DecodeError> for Error {
    fn from(error: DecodeError) -> Self {
        Error::Decode(error)
    }
}

impl Display for EncodeError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncodeError::Json(error) => write!(formatter, "JSON encode: {error}"),
            EncodeError::Yaml(error) => write!(formatter, "YAML encode: {error}"),
            EncodeError::Toml(error) => write!(formatter, "TOML encode: {error}"),
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::Json(error) => write!(formatter, "JSON decode: {error}"),
            DecodeError::Yaml(error) => write!(formatter, "YAML decode: {error}"),
            DecodeError::Toml(error) => write!(formatter, "TOML decode: {error}"),
            DecodeError::Utf8(error) => write!(formatter, "TOML decode: input is not UTF-8: {error}"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Encode(error) => Display::fmt(error, formatter),
            Error::Decode(error) => Display::fmt(error, formatter),
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::Json(error) => Some(error),
            EncodeError::Yaml(error) => Some(error),
            EncodeError::Toml(error) => Some(error),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Json(error) => Some(error),
            DecodeError::Yaml(error) => Some(error),
            DecodeError::Toml(error) => Some(error),
            DecodeError::Utf8(error) => Some(error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Encode(error) => Some(error),
            Error::Decode(error) => Some(error),
        }
    }
}
