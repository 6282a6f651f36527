//! JSON format wrapper.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{DecodeError, EncodeError, Format, Packed, Result};

/// Adds JSON marshaling capabilities to any serde-compatible type.
///
/// This is the wrapper [`pack`](crate::pack()) builds for [`Format::Json`],
/// and the one [`pack_default`](crate::pack_default) always builds.
#[derive(Debug, Default, Clone)]
pub struct WithJson<T> {
    data: T,
}

impl<T> WithJson<T> {
    /// Creates a new JSON wrapper holding `data`.
    pub fn new(data: T) -> Self {
        WithJson { data }
    }

    /// Consumes the wrapper and returns the held value.
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> Packed<T> for WithJson<T>
where
    T: Serialize + DeserializeOwned + Default + 'static,
{
    fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.data).map_err(EncodeError::Json)?)
    }

    fn from_slice(&mut self, bytes: &[u8]) -> Result<()> {
        self.data = serde_json::from_slice(bytes).map_err(DecodeError::Json)?;
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
            return Box::new(WithJson::new(T::default()));
        }

        // Deep copy through the codec; fall back to the default value if the
        // round trip fails.
        let copy = serde_json::to_vec(&self.data)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default();

        Box::new(WithJson::new(copy))
    }

    fn format(&self) -> Format {
        Format::Json
    }
}
