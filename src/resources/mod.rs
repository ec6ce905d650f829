pub mod haptics;
pub mod vjoy_config;
pub mod vjoy_output;
