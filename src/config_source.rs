//! # Configuration source seam
//!
//! The registry reads its tables from a host-provided key-value configuration.
//! [`ConfigSource`] is the minimal contract it needs: list-of-strings and
//! list-of-floats reads, where any failure (absent key, malformed value) surfaces
//! as `None` and is treated as "no data available" by the caller.
//!
//! [`MemoryConfig`] is the in-memory implementation used by embedding hosts and
//! tests. It deserializes from any serde format, e.g. a JSON document:
//!
//! ```json
//! {
//!     "strings": { "ttt.idcinfra.tables": ["regional"] },
//!     "doubles": {
//!         "ttt.idcinfra.regional.distances": [0.0, 5.0],
//!         "ttt.idcinfra.regional.celerities": [0.32, 0.3]
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Key-value configuration reads, with absence instead of errors.
pub trait ConfigSource {
    /// Read a list of strings, `None` if the key is absent or malformed.
    fn get_strings(&self, key: &str) -> Option<Vec<String>>;

    /// Read a list of floating-point numbers, `None` if the key is absent or malformed.
    fn get_doubles(&self, key: &str) -> Option<Vec<f64>>;
}

/// In-memory [`ConfigSource`] backed by two key → list maps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryConfig {
    #[serde(default)]
    strings: HashMap<String, Vec<String>>,
    #[serde(default)]
    doubles: HashMap<String, Vec<f64>>,
}

impl MemoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_strings(&mut self, key: &str, values: Vec<String>) {
        self.strings.insert(key.to_string(), values);
    }

    pub fn set_doubles(&mut self, key: &str, values: Vec<f64>) {
        self.doubles.insert(key.to_string(), values);
    }
}

impl ConfigSource for MemoryConfig {
    fn get_strings(&self, key: &str) -> Option<Vec<String>> {
        self.strings.get(key).cloned()
    }

    fn get_doubles(&self, key: &str) -> Option<Vec<f64>> {
        self.doubles.get(key).cloned()
    }
}
