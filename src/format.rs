//! Format tags and the wrapper factory.

use std::fmt::{self, Display};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Packed, WithJson, WithToml, WithYaml};

/// The wire format a wrapper encodes to and decodes from.
///
/// Chosen once at construction and fixed for the life of the wrapper.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Format {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// The lower-case name of the format, as used in file extensions.
    pub const fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }
}

impl Display for Format {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Creates a new wrapper bound to the given format.
///
/// This is pure dispatch to the matching wrapper constructor and cannot fail.
/// The return type is the unified [`Packed<T>`] trait object for flexible
/// usage; use [`WithJson::new`], [`WithYaml::new`] or [`WithToml::new`]
/// directly when the concrete type is wanted.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use packio::{pack, Format, Packed};
///
/// let prices = BTreeMap::from([("apple".to_string(), 3u32)]);
/// let wrapper = pack(prices, Format::Toml);
///
/// let bytes = wrapper.to_vec().unwrap();
/// assert_eq!(String::from_utf8(bytes).unwrap(), "apple = 3\n");
/// ```
pub fn pack<T>(data: T, format: Format) -> Box<dyn Packed<T>>
where
    T: Serialize + DeserializeOwned + Default + 'static,
{
    match format {
        Format::Json => Box::new(WithJson::new(data)),
        Format::Yaml => Box::new(WithYaml::new(data)),
        Format::Toml => Box::new(WithToml::new(data)),
    }
}

/// Creates a new wrapper bound to the default format, JSON.
///
/// Shorthand for `pack(data, Format::default())`.
pub fn pack_default<T>(data: T) -> Box<dyn Packed<T>>
where
    T: Serialize + DeserializeOwned + Default + 'static,
{
    pack(data, Format::default())
}
