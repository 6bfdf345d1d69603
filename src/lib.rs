pub mod aero;
pub mod aircraft;
pub mod mass;
pub mod math;
pub mod parameters;
pub mod units;
