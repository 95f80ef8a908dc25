//! # Travel-time estimation façade
//!
//! This module defines [`TravelTimeEstimator`], the entry point that wires together:
//!
//! 1. **Model selection** — the built-in default model plus any models the
//!    [`ModelRegistry`](crate::model_registry::ModelRegistry) loads from configuration.
//! 2. **Geodesy** — great-circle distance between source and receiver
//!    ([`delazi`](crate::geodesy::delazi)) and the fixed-radius degree → kilometer
//!    conversion ([`deg2km`](crate::geodesy::deg2km)).
//! 3. **Celerity lookup** — the step-function table evaluation of
//!    [`CelerityTable::celerity_at`](crate::celerity_table::CelerityTable::celerity_at).
//!
//! The design follows the registry's *lazy initialization*: constructing an
//! estimator reads nothing; the configuration is consulted the first time a
//! non-default model is selected, and never again afterwards.
//!
//! ## Typical usage
//!
//! ```rust
//! use infratt::config_source::MemoryConfig;
//! use infratt::estimator::TravelTimeEstimator;
//!
//! // The default model is active without any configuration
//! let estimator = TravelTimeEstimator::new(MemoryConfig::new());
//! assert_eq!(estimator.model(), "IDC_2010");
//!
//! // One infrasound arrival for a source/receiver pair
//! let list = estimator.compute(0.0, 0.0, 0.0, 0.0, 4.5, 0.0);
//! assert_eq!(list.arrivals.len(), 1);
//! assert_eq!(list.arrivals[0].phase, "Is");
//! ```
//!
//! ## Notes
//!
//! - Travel time is `distance_km / celerity`; distances beyond the table clamp to
//!   the last node's celerity, so no query is out of range.
//! - The estimator holds a shared handle on the active table, never a copy; the
//!   tables themselves are owned by the registry (or the process-wide default).

use std::sync::Arc;

use log::debug;

use crate::celerity_table::CelerityTable;
use crate::config_source::ConfigSource;
use crate::constants::{Degree, Kilometer, Meter, ModelName, DEFAULT_MODEL, PHASE_INFRASOUND};
use crate::geodesy::{deg2km, delazi};
use crate::infratt_errors::InfrattError;
use crate::model_registry::ModelRegistry;
use crate::travel_time::{TravelTime, TravelTimeList};

/// Travel-time estimator over a selectable celerity model.
#[derive(Debug)]
pub struct TravelTimeEstimator<C: ConfigSource> {
    registry: ModelRegistry,
    config: C,
    model: ModelName,
    table: Arc<CelerityTable>,
    altitude_correction: bool,
}

impl<C: ConfigSource> TravelTimeEstimator<C> {
    /// Create an estimator with the built-in default model active.
    ///
    /// Arguments
    /// ---------
    /// * `config`: the configuration source consulted when a non-default model is
    ///   selected for the first time
    pub fn new(config: C) -> Self {
        Self::with_registry(config, ModelRegistry::new())
    }

    /// Create an estimator whose registry reads from a custom key namespace.
    pub fn with_prefix(config: C, prefix: &str) -> Self {
        Self::with_registry(config, ModelRegistry::with_prefix(prefix))
    }

    fn with_registry(config: C, registry: ModelRegistry) -> Self {
        TravelTimeEstimator {
            registry,
            config,
            model: DEFAULT_MODEL.to_string(),
            table: Arc::clone(CelerityTable::idc_2010()),
            altitude_correction: false,
        }
    }

    /// Enable or disable the receiver-altitude correction (off by default).
    ///
    /// When enabled, `|altitude| / 1000 / celerity` seconds are added to account
    /// for the vertical leg of the path, with the altitude in meters.
    pub fn with_altitude_correction(mut self, enabled: bool) -> Self {
        self.altitude_correction = enabled;
        self
    }

    /// Select the active model.
    ///
    /// The built-in default always succeeds. Any other name is resolved through
    /// the registry (loading the configuration on first use); an unknown name
    /// returns `false` and leaves the current selection untouched.
    pub fn set_model(&mut self, name: &str) -> bool {
        if name == DEFAULT_MODEL {
            self.model = DEFAULT_MODEL.to_string();
            self.table = Arc::clone(CelerityTable::idc_2010());
            return true;
        }

        match self.registry.lookup(name, &self.config) {
            Some(table) => {
                self.model = name.to_string();
                self.table = table;
                true
            }
            None => false,
        }
    }

    /// Name of the presently active model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Compute all arrivals between a source and a receiver.
    ///
    /// Arguments
    /// ---------
    /// * `lat1`, `lon1`: source coordinates in degrees
    /// * `depth1`: source depth in kilometers
    /// * `lat2`, `lon2`: receiver coordinates in degrees
    /// * `alt2`: receiver altitude in meters
    ///
    /// Return
    /// ------
    /// * A [`TravelTimeList`] carrying the source/receiver distance, the source
    ///   depth, and the single infrasound arrival
    pub fn compute(
        &self,
        lat1: Degree,
        lon1: Degree,
        depth1: Kilometer,
        lat2: Degree,
        lon2: Degree,
        alt2: Meter,
    ) -> TravelTimeList {
        let (dist_deg, _, _) = delazi(lat1, lon1, lat2, lon2);

        TravelTimeList {
            delta: dist_deg,
            depth: depth1,
            arrivals: vec![self.arrival(dist_deg, alt2)],
        }
    }

    /// Compute the arrival of a named phase.
    ///
    /// Return
    /// ------
    /// * The arrival, or [`InfrattError::NoPhase`] if `phase` is not the single
    ///   phase this model supports
    pub fn compute_phase(
        &self,
        phase: &str,
        lat1: Degree,
        lon1: Degree,
        _depth1: Kilometer,
        lat2: Degree,
        lon2: Degree,
        alt2: Meter,
    ) -> Result<TravelTime, InfrattError> {
        if phase != PHASE_INFRASOUND {
            return Err(InfrattError::NoPhase(phase.to_string()));
        }

        let (dist_deg, _, _) = delazi(lat1, lon1, lat2, lon2);
        Ok(self.arrival(dist_deg, alt2))
    }

    /// Compute the first (and only) arrival, always using the supported phase.
    pub fn compute_first(
        &self,
        lat1: Degree,
        lon1: Degree,
        _depth1: Kilometer,
        lat2: Degree,
        lon2: Degree,
        alt2: Meter,
    ) -> TravelTime {
        let (dist_deg, _, _) = delazi(lat1, lon1, lat2, lon2);
        self.arrival(dist_deg, alt2)
    }

    fn arrival(&self, dist_deg: Degree, alt2: Meter) -> TravelTime {
        let celerity = self.table.celerity_at(dist_deg);
        let dist_km = deg2km(dist_deg);

        // main horizontal travel time
        let mut time = dist_km / celerity;

        if self.altitude_correction {
            time += alt2.abs() / 1000.0 / celerity;
        }

        debug!(
            "{}: dist={:.3} deg ({:.1} km) c={:.3} km/s -> t={:.1} s",
            self.model, dist_deg, dist_km, celerity, time
        );

        TravelTime::single_phase(PHASE_INFRASOUND, time)
    }
}
