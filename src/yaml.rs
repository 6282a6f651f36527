//! YAML format wrapper.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{DecodeError, EncodeError, Format, Packed, Result};

/// Adds YAML marshaling capabilities to any serde-compatible type.
///
/// It mirrors the API of [`WithJson`](crate::WithJson) but delegates to the
/// YAML codec.
#[derive(Debug, Default, Clone)]
pub struct WithYaml<T> {
    data: T,
}

impl<T> WithYaml<T> {
    /// Creates a new YAML wrapper holding `data`.
    pub fn new(data: T) -> Self {
        WithYaml { data }
    }

    /// Consumes the wrapper and returns the held value.
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> Packed<T> for WithYaml<T>
where
    T: Serialize + DeserializeOwned + Default + 'static,
{
    fn to_vec(&self) -> Result<Vec<u8>> {
        let text = serde_yaml::to_string(&self.data).map_err(EncodeError::Yaml)?;
        Ok(text.into_bytes())
    }

    fn from_slice(&mut self, bytes: &[u8]) -> Result<()> {
        self.data = serde_yaml::from_slice(bytes).map_err(DecodeError::Yaml)?;
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
            return Box::new(WithYaml::new(T::default()));
        }

        // Deep copy through the codec; fall back to the default value if the
        // round trip fails.
        let copy = serde_yaml::to_string(&self.data)
            .ok()
            .and_then(|text| serde_yaml::from_str(&text).ok())
            .unwrap_or_default();

        Box::new(WithYaml::new(copy))
    }

    fn format(&self) -> Format {
        Format::Yaml
    }
}
