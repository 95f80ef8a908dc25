//! Result records returned by the travel-time estimator.

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Kilometer, Second};

/// A single predicted arrival.
///
/// A celerity model carries no uncertainty or ray-geometry information, so the
/// auxiliary fields stay at [`TravelTime::UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelTime {
    /// Phase label
    pub phase: String,
    /// Travel time in seconds
    pub time: Second,
    /// Upper time bound in seconds, [`TravelTime::UNKNOWN`] when not modeled
    pub time_upper: Second,
    /// Lower time bound in seconds, [`TravelTime::UNKNOWN`] when not modeled
    pub time_lower: Second,
    /// Takeoff angle in degrees, [`TravelTime::UNKNOWN`] when not modeled
    pub takeoff: Degree,
    /// Azimuth in degrees, [`TravelTime::UNKNOWN`] when not modeled
    pub azimuth: Degree,
}

impl TravelTime {
    /// Sentinel marking an auxiliary field the model does not provide.
    pub const UNKNOWN: f64 = -1.0;

    /// An arrival with only the phase label and time known.
    pub fn single_phase(phase: &str, time: Second) -> Self {
        TravelTime {
            phase: phase.to_string(),
            time,
            time_upper: TravelTime::UNKNOWN,
            time_lower: TravelTime::UNKNOWN,
            takeoff: TravelTime::UNKNOWN,
            azimuth: TravelTime::UNKNOWN,
        }
    }
}

/// All predicted arrivals for one source/receiver pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeList {
    /// Geocentric source/receiver distance in degrees
    pub delta: Degree,
    /// Source depth in kilometers
    pub depth: Kilometer,
    /// Predicted arrivals, a single entry for a one-phase model
    pub arrivals: Vec<TravelTime>,
}

#[cfg(test)]
mod travel_time_test {
    use super::*;

    #[test]
    fn test_single_phase_uses_unknown_sentinels() {
        let tt = TravelTime::single_phase("Is", 340.5);
        assert_eq!(tt.phase, "Is");
        assert_eq!(tt.time, 340.5);
        assert_eq!(tt.time_upper, -1.0);
        assert_eq!(tt.time_lower, -1.0);
        assert_eq!(tt.takeoff, -1.0);
        assert_eq!(tt.azimuth, -1.0);
    }
}
