pub mod vjoy_base;
pub mod vjoy_knob;
