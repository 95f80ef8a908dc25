//! # Constants and type definitions for infratt
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `infratt` library.
//!
//! ## Overview
//!
//! - Geophysical constants (reference Earth radius, degree ↔ kilometer factor)
//! - Unit conversions (degrees ↔ radians)
//! - Core type aliases used across the crate
//! - The reserved built-in model name and the supported phase label
//!
//! These definitions are used by all main modules, including the geodesy routines, the
//! celerity tables, and the travel-time estimator.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Mean Earth radius in kilometers (spherical Earth convention, shared with the
/// degree-to-kilometer conversion used across the host ecosystem)
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Length of one degree of arc on the reference sphere, in kilometers
pub const KM_PER_DEGREE: f64 = EARTH_MEAN_RADIUS_KM * RADEG;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in meters
pub type Meter = f64;
/// Propagation speed in kilometers per second
pub type KmPerSec = f64;
/// Elapsed time in seconds
pub type Second = f64;
/// Name identifying a travel-time model
pub type ModelName = String;

// -------------------------------------------------------------------------------------------------
// Reserved identifiers
// -------------------------------------------------------------------------------------------------

/// Name of the built-in, hard-coded celerity model. Always selectable without
/// any configuration being present.
pub const DEFAULT_MODEL: &str = "IDC_2010";

/// The single phase label produced by the infrasound celerity model.
pub const PHASE_INFRASOUND: &str = "Is";

/// Default namespace for configuration keys (`<prefix>.tables`,
/// `<prefix>.<model>.distances`, `<prefix>.<model>.celerities`).
pub const CONFIG_PREFIX: &str = "ttt.idcinfra";
