//! TOML format wrapper.

use std::str;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{DecodeError, EncodeError, Format, Packed, Result};

/// Adds TOML marshaling capabilities to any serde-compatible type.
///
/// It mirrors the API of [`WithJson`](crate::WithJson) but delegates to the
/// TOML codec. TOML requires the top-level value to be a table, so `T` should
/// be a struct or map; the codec rejects other shapes with an encode error.
#[derive(Debug, Default, Clone)]
pub struct WithToml<T> {
    data: T,
}

impl<T> WithToml<T> {
    /// Creates a new TOML wrapper holding `data`.
    pub fn new(data: T) -> Self {
        WithToml { data }
    }

    /// Consumes the wrapper and returns the held value.
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> Packed<T> for WithToml<T>
where
    T: Serialize + DeserializeOwned + Default + 'static,
{
    fn to_vec(&self) -> Result<Vec<u8>> {
        let text = toml::to_string(&self.data).map_err(EncodeError::Toml)?;
        Ok(text.into_bytes())
    }

    fn from_slice(&mut self, bytes: &[u8]) -> Result<()> {
        // The TOML codec only decodes from strings.
        let text = str::from_utf8(bytes).map_err(DecodeError::Utf8)?;
        self.data = toml::from_str(text).map_err(DecodeError::Toml)?;
        Ok(())
    }

    fn get(&self) -> &T {
        &self.data
    }

    fn get_mut(&mut self) -> &mut T {
        &mut self.data
    }

    fn set(&mut self, data: T) {
        self.data = data;
    }

    fn duplicate(&self, empty: bool) -> Box<dyn Packed<T>> {
        if empty {
            return Box::new(WithToml::new(T::default()));
        }

        // Deep copy through the codec; fall back to the default value if the
        // round trip fails.
        let copy = toml::to_string(&self.data)
            .ok()
            .and_then(|text| toml::from_str(&text).ok())
            .unwrap_or_default();

        Box::new(WithToml::new(copy))
    }

    fn format(&self) -> Format {
        Format::Toml
    }
}
