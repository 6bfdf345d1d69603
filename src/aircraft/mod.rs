#[allow(clippy::module_inception)]
pub mod aircraft;
pub mod document;
pub mod report;
pub mod spec;

pub use aircraft::{Aircraft, ComponentEstimate, MassAccumulator, MassProperties};
pub use spec::{AircraftSpecification, Category};
