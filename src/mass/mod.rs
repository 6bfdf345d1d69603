//! Catalogue of mass components and their empirical group-weight estimates.

mod all_else;
mod engine;
pub mod estimate;
mod fuselage;
mod gear;
mod rotor;
mod tail;
mod wing;

use strum::{AsRefStr, EnumIter, EnumString};

use crate::{
    aircraft::spec::AircraftSpecification,
    math::{CentroidalInertia, Dimensions, Vector3, cuboid_inertia},
    units::{Mass, kilograms},
};

pub use estimate::{Estimate, StatisticalTable};

/// The fixed set of component kinds. The tag strings are stable and used in
/// aircraft documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ComponentKind {
    Fuselage,
    Wing,
    HorizontalTail,
    VerticalTail,
    MainGear,
    NoseGear,
    Engine,
    RotorDrive,
    RotorHub,
    RotorMain,
    RotorTail,
    AllElse,
}

impl ComponentKind {
    pub fn default_name(&self) -> &'static str {
        match self {
            ComponentKind::Fuselage => "Fuselage",
            ComponentKind::Wing => "Wing",
            ComponentKind::HorizontalTail => "Horizontal tail",
            ComponentKind::VerticalTail => "Vertical tail",
            ComponentKind::MainGear => "Main landing gear",
            ComponentKind::NoseGear => "Nose landing gear",
            ComponentKind::Engine => "Engine",
            ComponentKind::RotorDrive => "Drive system",
            ComponentKind::RotorHub => "Rotor hub",
            ComponentKind::RotorMain => "Main rotor blades",
            ComponentKind::RotorTail => "Tail rotor",
            ComponentKind::AllElse => "All else",
        }
    }

    pub fn estimate(&self, spec: &AircraftSpecification) -> Estimate {
        match self {
            ComponentKind::Fuselage => fuselage::estimate(spec),
            ComponentKind::Wing => wing::estimate(spec),
            ComponentKind::HorizontalTail => tail::horizontal_estimate(spec),
            ComponentKind::VerticalTail => tail::vertical_estimate(spec),
            ComponentKind::MainGear => gear::main_estimate(spec),
            ComponentKind::NoseGear => gear::nose_estimate(spec),
            ComponentKind::Engine => engine::estimate(spec),
            ComponentKind::RotorDrive => rotor::drive_estimate(spec),
            ComponentKind::RotorHub => rotor::hub_estimate(spec),
            ComponentKind::RotorMain => rotor::blades_estimate(spec),
            ComponentKind::RotorTail => rotor::tail_estimate(spec),
            ComponentKind::AllElse => all_else::estimate(spec),
        }
    }

    /// Rotor disks have no modelled self-inertia.
    pub fn is_point_mass(&self) -> bool {
        matches!(self, ComponentKind::RotorMain | ComponentKind::RotorTail)
    }
}

/// One entry of an aircraft's mass breakdown.
///
/// The mass used for aggregation is the one assigned here; the estimate is
/// only guidance until it is explicitly adopted.
#[derive(Debug, Clone, PartialEq)]
pub struct MassComponent {
    kind: ComponentKind,
    name: String,
    position: Vector3,
    dimensions: Dimensions,
    mass: Mass,
}

impl MassComponent {
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            name: kind.default_name().to_string(),
            position: Vector3::zero(),
            dimensions: Dimensions::default(),
            mass: kilograms(0.0),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_mass(mut self, mass: Mass) -> Self {
        self.mass = mass;
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    pub fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
    }

    pub fn set_mass(&mut self, mass: Mass) {
        self.mass = mass;
    }

    pub fn estimate(&self, spec: &AircraftSpecification) -> Estimate {
        self.kind.estimate(spec)
    }

    pub fn estimated_mass(&self, spec: &AircraftSpecification) -> Mass {
        self.estimate(spec).mass()
    }

    pub fn centroidal_inertia(&self) -> CentroidalInertia {
        if self.kind.is_point_mass() {
            CentroidalInertia::point_mass()
        } else {
            cuboid_inertia(self.mass, &self.dimensions)
        }
    }
}
