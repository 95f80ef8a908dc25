pub mod celerity_table;
pub mod config_source;
pub mod constants;
pub mod estimator;
pub mod geodesy;
pub mod infratt_errors;
pub mod model_registry;
pub mod travel_time;
