//! # Named celerity-model registry
//!
//! The registry owns every configured celerity table and hands out shared handles
//! to them. The built-in [`DEFAULT_MODEL`] is always available and never touches
//! the configuration. All other models are read from a [`ConfigSource`] exactly
//! once per registry: the name list under `<prefix>.tables`, then for each name
//! the two parallel sample lists `<prefix>.<name>.distances` and
//! `<prefix>.<name>.celerities`.
//!
//! Loading is forgiving: a malformed table is logged and skipped, a missing name
//! list means no extra models, and neither affects the built-in default.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::celerity_table::CelerityTable;
use crate::config_source::ConfigSource;
use crate::constants::{ModelName, CONFIG_PREFIX, DEFAULT_MODEL};
use crate::infratt_errors::InfrattError;

/// Registry of named travel-time models, populated lazily from configuration.
#[derive(Debug)]
pub struct ModelRegistry {
    tables: HashMap<ModelName, Arc<CelerityTable>>,
    prefix: String,
    loaded: bool,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelRegistry {
    /// Create an empty registry reading from the default key namespace.
    pub fn new() -> Self {
        Self::with_prefix(CONFIG_PREFIX)
    }

    /// Create an empty registry reading from a custom key namespace.
    pub fn with_prefix(prefix: &str) -> Self {
        ModelRegistry {
            tables: HashMap::new(),
            prefix: prefix.to_string(),
            loaded: false,
        }
    }

    /// The shared table of the built-in default model.
    pub fn default_table(&self) -> &Arc<CelerityTable> {
        CelerityTable::idc_2010()
    }

    /// Populate the registry from configuration, at most once per registry.
    ///
    /// Reads the model name list and the per-model sample lists. Each malformed
    /// table is logged and skipped without affecting the others; an absent name
    /// list leaves the registry with the built-in default only.
    pub fn ensure_loaded(&mut self, config: &dyn ConfigSource) {
        if self.loaded {
            return;
        }

        self.loaded = true;

        let Some(names) = config.get_strings(&format!("{}.tables", self.prefix)) else {
            return;
        };

        for name in names {
            if name == DEFAULT_MODEL {
                // hard-coded built-in
                continue;
            }

            let distances = config.get_doubles(&format!("{}.{}.distances", self.prefix, name));
            let celerities = config.get_doubles(&format!("{}.{}.celerities", self.prefix, name));
            let (Some(distances), Some(celerities)) = (distances, celerities) else {
                error!("{}: incomplete table configuration", name);
                continue;
            };

            match CelerityTable::from_samples(&distances, &celerities) {
                Ok(table) => {
                    info!(
                        "{}: loaded {} distances / {} celerities",
                        name,
                        distances.len(),
                        celerities.len()
                    );
                    for node in table.nodes() {
                        debug!("{}: {} {}", name, node.distance, node.celerity);
                    }
                    self.tables.insert(name, Arc::new(table));
                }
                Err(InfrattError::UnsortedDistances) => {
                    warn!("{}: distances not sorted", name);
                }
                Err(err) => {
                    error!("{}: invalid configuration: {}", name, err);
                }
            }
        }
    }

    /// Resolve a model name to its table.
    ///
    /// The built-in default resolves directly. Any other name triggers
    /// [`ensure_loaded`](ModelRegistry::ensure_loaded) and is then matched
    /// exactly; an unknown name is a normal `None`, not an error.
    pub fn lookup(&mut self, name: &str, config: &dyn ConfigSource) -> Option<Arc<CelerityTable>> {
        if name == DEFAULT_MODEL {
            return Some(Arc::clone(CelerityTable::idc_2010()));
        }

        self.ensure_loaded(config);
        self.tables.get(name).cloned()
    }

    /// Names of the models loaded from configuration (the built-in default is
    /// not listed).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod model_registry_test {
    use super::*;
    use crate::config_source::MemoryConfig;
    use approx::assert_relative_eq;

    fn regional_config() -> MemoryConfig {
        let mut config = MemoryConfig::new();
        config.set_strings("ttt.idcinfra.tables", vec!["regional".into()]);
        config.set_doubles("ttt.idcinfra.regional.distances", vec![0.0, 5.0, 15.0]);
        config.set_doubles("ttt.idcinfra.regional.celerities", vec![0.32, 0.30, 0.31]);
        config
    }

    #[test]
    fn test_default_model_needs_no_configuration() {
        let mut registry = ModelRegistry::new();
        let table = registry.lookup(DEFAULT_MODEL, &MemoryConfig::new()).unwrap();
        assert_eq!(table.len(), 3);
        assert_relative_eq!(table.celerity_at(0.0), 0.33);
        // nothing was read from configuration
        assert_eq!(registry.names().count(), 0);
        assert!(!registry.loaded);
    }

    #[test]
    fn test_loads_configured_table() {
        let mut registry = ModelRegistry::new();
        let table = registry.lookup("regional", &regional_config()).unwrap();
        assert_relative_eq!(table.celerity_at(4.0), 0.30);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["regional"]);
    }

    #[test]
    fn test_missing_name_list_is_not_fatal() {
        let mut registry = ModelRegistry::new();
        registry.ensure_loaded(&MemoryConfig::new());
        assert_eq!(registry.names().count(), 0);
        assert_eq!(registry.default_table().len(), 3);
    }

    #[test]
    fn test_load_happens_at_most_once() {
        let mut registry = ModelRegistry::new();
        registry.ensure_loaded(&MemoryConfig::new());
        // a later, fully populated configuration is not consulted anymore
        assert_eq!(registry.lookup("regional", &regional_config()), None);
    }

    #[test]
    fn test_malformed_table_is_skipped_without_affecting_others() {
        let mut config = regional_config();
        config.set_strings(
            "ttt.idcinfra.tables",
            vec!["broken".into(), "regional".into()],
        );
        config.set_doubles("ttt.idcinfra.broken.distances", vec![0.0, 1.0, 2.0]);
        config.set_doubles("ttt.idcinfra.broken.celerities", vec![0.3]);

        let mut registry = ModelRegistry::new();
        registry.ensure_loaded(&config);

        assert_eq!(registry.lookup("broken", &config), None);
        assert!(registry.lookup("regional", &config).is_some());
    }

    #[test]
    fn test_unsorted_table_is_skipped() {
        let mut config = MemoryConfig::new();
        config.set_strings("ttt.idcinfra.tables", vec!["shuffled".into()]);
        config.set_doubles("ttt.idcinfra.shuffled.distances", vec![0.0, 3.0, 1.0]);
        config.set_doubles("ttt.idcinfra.shuffled.celerities", vec![0.3, 0.3, 0.3]);

        let mut registry = ModelRegistry::new();
        registry.ensure_loaded(&config);
        assert_eq!(registry.lookup("shuffled", &config), None);
    }

    #[test]
    fn test_reserved_name_in_list_is_ignored() {
        let mut config = MemoryConfig::new();
        config.set_strings("ttt.idcinfra.tables", vec![DEFAULT_MODEL.into()]);
        // no sample lists for it either; the built-in stays untouched
        let mut registry = ModelRegistry::new();
        registry.ensure_loaded(&config);
        assert_eq!(registry.names().count(), 0);

        let table = registry.lookup(DEFAULT_MODEL, &config).unwrap();
        assert_relative_eq!(table.celerity_at(50.0), 0.303);
    }

    #[test]
    fn test_incomplete_table_configuration_is_skipped() {
        let mut config = MemoryConfig::new();
        config.set_strings("ttt.idcinfra.tables", vec!["halfway".into()]);
        config.set_doubles("ttt.idcinfra.halfway.distances", vec![0.0, 1.0]);
        // celerities key absent

        let mut registry = ModelRegistry::new();
        assert_eq!(registry.lookup("halfway", &config), None);
    }

    #[test]
    fn test_custom_prefix() {
        let mut config = MemoryConfig::new();
        config.set_strings("ttt.custom.tables", vec!["fast".into()]);
        config.set_doubles("ttt.custom.fast.distances", vec![0.0]);
        config.set_doubles("ttt.custom.fast.celerities", vec![0.35]);

        let mut registry = ModelRegistry::with_prefix("ttt.custom");
        let table = registry.lookup("fast", &config).unwrap();
        assert_relative_eq!(table.celerity_at(10.0), 0.35);
    }
}
