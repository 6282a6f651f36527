//! Generic serialization wrappers for your types.
//!
//! The crate exposes a single object-safe trait, [`Packed<T>`], which defines
//! [`to_vec`](Packed::to_vec) and [`from_slice`](Packed::from_slice) to
//! convert the wrapped value to and from bytes, plus get/set accessors and
//! [`duplicate`](Packed::duplicate) for deep-copy semantics.
//!
//! You typically construct a wrapper with [`pack`], selecting one of the
//! supported formats ([`Format::Json`] is the default):
//!
//! ```
//! use packio::{pack, pack_default, Format, Packed};
//!
//! let json = pack_default(vec!["a".to_string()]);       // JSON by default
//! let yaml = pack(vec!["a".to_string()], Format::Yaml); // YAML
//!
//! assert_eq!(json.to_vec().unwrap(), br#"["a"]"#.to_vec());
//! assert_eq!(yaml.to_vec().unwrap(), b"- a\n".to_vec());
//! ```
//!
//! Note: this crate does not provide concurrency control; protect shared
//! access with synchronization if you mutate wrappers from multiple threads.

mod error;
mod format;
mod json;
mod pack;
mod toml;
mod yaml;

pub use error::*;
pub use format::*;
pub use json::*;
pub use pack::*;
pub use crate::toml::*;
pub use yaml::*;
