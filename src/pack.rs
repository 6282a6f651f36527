//! The serialization contract implemented by every format wrapper.

use crate::{Format, Result};

/// A unified interface for (de)serializing wrapped data.
///
/// It abstracts over the underlying format (JSON, YAML, TOML). Each wrapper
/// is bound to one format at construction and never changes it; the format
/// alone determines how [`to_vec`](Packed::to_vec) and
/// [`from_slice`](Packed::from_slice) encode and decode bytes.
///
/// The trait is object safe, so callers can hold any format uniformly as a
/// `Box<dyn Packed<T>>` — this is what [`pack`](crate::pack()) returns.
///
/// No operation here blocks, performs I/O, or synchronizes: everything is an
/// in-memory codec call bounded by the cost of the underlying library.
pub trait Packed<T> {
    /// Encodes the held value into bytes using the wrapper's format.
    ///
    /// Never mutates the held value. Codec failures surface as
    /// [`Error::Encode`](crate::Error::Encode).
    fn to_vec(&self) -> Result<Vec<u8>>;

    /// Decodes `bytes` using the wrapper's format and replaces the held value
    /// with the result.
    ///
    /// On failure returns [`Error::Decode`](crate::Error::Decode) and leaves
    /// the previously held value in place.
    fn from_slice(&mut self, bytes: &[u8]) -> Result<()>;

    /// Returns a reference to the held value. Performs no encoding.
    fn get(&self) -> &T;

    /// Returns a mutable reference to the held value. Performs no encoding.
    fn get_mut(&mut self) -> &mut T;

    /// Replaces the held value unconditionally. No validation is performed.
    fn set(&mut self, data: T);

    /// Returns a new wrapper of the same format.
    ///
    /// If `empty` is true, the new wrapper holds `T::default()`. Otherwise it
    /// holds a deep copy of the current value, produced by round-tripping it
    /// through the wrapper's own encode and decode; after this returns, the
    /// original and the copy share no mutable state.
    ///
    /// # Degradation
    ///
    /// If either half of the round trip fails, `duplicate` does not error:
    /// it returns a wrapper holding `T::default()` instead. Callers that need
    /// to distinguish a failed copy from a legitimately default value should
    /// call [`to_vec`](Packed::to_vec) themselves first.
    fn duplicate(&self, empty: bool) -> Box<dyn Packed<T>>;

    /// Reports the format fixed at construction.
    fn format(&self) -> Format;
}
