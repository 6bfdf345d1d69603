use std::ops::{Add, AddAssign};

use log::{debug, warn};
use thiserror::Error;
use uom::si::mass::kilogram;

use super::spec::AircraftSpecification;
use crate::{
    mass::{ComponentKind, Estimate, MassComponent},
    math::{FirstMomentOfMass, InertiaTensor, Vector3, shift_to_reference},
    units::{Mass, kilograms},
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("No component at index {index} (aircraft has {len})")]
    NoSuchComponent { index: usize, len: usize },

    #[error("Cannot estimate component {index} ({name}), specification is incomplete")]
    IncompleteEstimate { index: usize, name: String },
}

/// Whole-aircraft mass, center of mass and inertia about the reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassProperties {
    pub mass: Mass,
    pub center_of_mass: Vector3,
    pub inertia: InertiaTensor,
}

impl Default for MassProperties {
    fn default() -> Self {
        Self {
            mass: kilograms(0.0),
            center_of_mass: Vector3::zero(),
            inertia: InertiaTensor::zero(),
        }
    }
}

/// Running sums over a set of components. Accumulators of disjoint sets can
/// be merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassAccumulator {
    pub mass: Mass,
    pub first_moment: FirstMomentOfMass,
    pub inertia: InertiaTensor,
}

impl Default for MassAccumulator {
    fn default() -> Self {
        Self {
            mass: kilograms(0.0),
            first_moment: FirstMomentOfMass::zero(),
            inertia: InertiaTensor::zero(),
        }
    }
}

impl MassAccumulator {
    pub fn add_component(&mut self, component: &MassComponent) {
        let m = component.mass();
        let r = *component.position();

        self.mass += m;
        self.first_moment += r * m;
        self.inertia += shift_to_reference(m, component.centroidal_inertia(), &r);
    }

    pub fn properties(&self) -> MassProperties {
        MassProperties {
            mass: self.mass,
            center_of_mass: self.first_moment.center_of_mass(self.mass),
            inertia: self.inertia,
        }
    }
}

impl<'a> FromIterator<&'a MassComponent> for MassAccumulator {
    fn from_iter<I: IntoIterator<Item = &'a MassComponent>>(iter: I) -> Self {
        let mut acc = MassAccumulator::default();
        for c in iter {
            acc.add_component(c);
        }
        acc
    }
}

impl Add for MassAccumulator {
    type Output = MassAccumulator;

    fn add(mut self, rhs: MassAccumulator) -> MassAccumulator {
        self += rhs;
        self
    }
}

impl AddAssign for MassAccumulator {
    fn add_assign(&mut self, rhs: MassAccumulator) {
        self.mass += rhs.mass;
        self.first_moment += rhs.first_moment;
        self.inertia += rhs.inertia;
    }
}

/// Estimated and assigned mass of one component, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentEstimate {
    pub kind: ComponentKind,
    pub name: String,
    pub estimate: Estimate,
    pub actual: Mass,
}

/// An aircraft: its specification and its ordered component list.
///
/// Mass properties are recomputed after every mutating call, so reading them
/// never sees a stale state.
#[derive(Debug, Clone)]
pub struct Aircraft {
    spec: AircraftSpecification,
    components: Vec<MassComponent>,
    properties: MassProperties,
}

impl Default for Aircraft {
    fn default() -> Self {
        Self::new(AircraftSpecification::default())
    }
}

impl Aircraft {
    pub fn new(spec: AircraftSpecification) -> Self {
        Self::from_parts(spec, Vec::new())
    }

    pub fn from_parts(spec: AircraftSpecification, components: Vec<MassComponent>) -> Self {
        let mut aircraft = Self {
            spec,
            components,
            properties: MassProperties::default(),
        };
        aircraft.recompute();
        aircraft
    }

    pub fn spec(&self) -> &AircraftSpecification {
        &self.spec
    }

    pub fn set_spec(&mut self, spec: AircraftSpecification) {
        self.spec = spec;
        self.recompute();
    }

    pub fn update_spec(&mut self, f: impl FnOnce(&mut AircraftSpecification)) {
        f(&mut self.spec);
        self.recompute();
    }

    pub fn components(&self) -> &[MassComponent] {
        &self.components
    }

    pub fn component(&self, index: usize) -> Option<&MassComponent> {
        self.components.get(index)
    }

    /// Appends a component and returns its index.
    pub fn add_component(&mut self, component: MassComponent) -> usize {
        self.components.push(component);
        self.recompute();
        self.components.len() - 1
    }

    pub fn remove_component(&mut self, index: usize) -> Result<MassComponent, Error> {
        self.check_index(index)?;

        let removed = self.components.remove(index);
        self.recompute();
        Ok(removed)
    }

    pub fn update_component(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut MassComponent),
    ) -> Result<(), Error> {
        self.check_index(index)?;

        f(&mut self.components[index]);
        self.recompute();
        Ok(())
    }

    pub fn set_component_mass(&mut self, index: usize, mass: Mass) -> Result<(), Error> {
        self.update_component(index, |c| c.set_mass(mass))
    }

    pub fn set_component_position(
        &mut self,
        index: usize,
        position: Vector3,
    ) -> Result<(), Error> {
        self.update_component(index, |c| c.set_position(position))
    }

    pub fn clear_components(&mut self) {
        self.components.clear();
        self.recompute();
    }

    pub fn properties(&self) -> &MassProperties {
        &self.properties
    }

    pub fn mass(&self) -> Mass {
        self.properties.mass
    }

    pub fn center_of_mass(&self) -> Vector3 {
        self.properties.center_of_mass
    }

    pub fn inertia(&self) -> &InertiaTensor {
        &self.properties.inertia
    }

    pub fn accumulate(&self) -> MassAccumulator {
        self.components.iter().collect()
    }

    pub fn recompute(&mut self) {
        self.properties = self.accumulate().properties();

        debug!(
            "Recomputed {} components: mass {:.1} kg, CoM {:?} m",
            self.components.len(),
            self.properties.mass.get::<kilogram>(),
            self.properties.center_of_mass.as_meters()
        );
    }

    pub fn estimates(&self) -> Vec<ComponentEstimate> {
        self.components
            .iter()
            .map(|c| ComponentEstimate {
                kind: c.kind(),
                name: c.name().to_string(),
                estimate: c.estimate(&self.spec),
                actual: c.mass(),
            })
            .collect()
    }

    /// Sum of the estimates of the components in the list.
    pub fn estimated_empty_mass(&self) -> Mass {
        self.components
            .iter()
            .fold(kilograms(0.0), |acc, c| acc + c.estimated_mass(&self.spec))
    }

    /// Copies the estimate of one component into its assigned mass. The
    /// assigned mass is left alone when the estimate is not finite.
    pub fn adopt_estimate(&mut self, index: usize) -> Result<Mass, Error> {
        self.check_index(index)?;

        let component = &mut self.components[index];
        let estimate = component.estimate(&self.spec);
        if !estimate.is_finite() {
            return Err(Error::IncompleteEstimate {
                index,
                name: component.name().to_string(),
            });
        }

        component.set_mass(estimate.mass());
        self.recompute();
        Ok(estimate.mass())
    }

    /// Adopts every finite estimate and returns how many were adopted.
    pub fn adopt_all_estimates(&mut self) -> usize {
        let mut adopted = 0;

        for c in self.components.iter_mut() {
            let estimate = c.estimate(&self.spec);
            if estimate.is_finite() {
                c.set_mass(estimate.mass());
                adopted += 1;
            } else {
                warn!("Keeping assigned mass of '{}', specification is incomplete", c.name());
            }
        }

        self.recompute();
        adopted
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.components.len() {
            Ok(())
        } else {
            Err(Error::NoSuchComponent {
                index,
                len: self.components.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        aircraft::spec::Category,
        math::{Dimensions, cuboid_inertia},
        units::{Length, kilograms, knots, meters, square_meters},
    };
    use approx::assert_relative_eq;
    use uom::si::{length::foot, moment_of_inertia::kilogram_square_meter};

    fn assert_tensor_eq(a: &InertiaTensor, b: &InertiaTensor) {
        for r in 0..3 {
            for c in 0..3 {
                assert_relative_eq!(
                    a.get(r, c).get::<kilogram_square_meter>(),
                    b.get(r, c).get::<kilogram_square_meter>(),
                    epsilon = 1e-9,
                    max_relative = 1e-12
                );
            }
        }
    }

    fn component(kind: ComponentKind, m: f64, pos: [f64; 3], dims: [f64; 3]) -> MassComponent {
        MassComponent::new(kind)
            .with_mass(kilograms(m))
            .with_position(Vector3::from_meters(pos[0], pos[1], pos[2]))
            .with_dimensions(Dimensions::from_meters(dims[0], dims[1], dims[2]))
    }

    fn set_a() -> Vec<MassComponent> {
        vec![
            component(ComponentKind::Fuselage, 120.0, [3.0, 0.0, 0.1], [7.0, 1.1, 1.4]),
            component(ComponentKind::Engine, 130.0, [0.5, 0.0, 0.0], [0.8, 0.8, 0.6]),
        ]
    }

    fn set_b() -> Vec<MassComponent> {
        vec![
            component(ComponentKind::Wing, 110.0, [2.4, 0.0, -0.9], [1.5, 11.0, 0.2]),
            component(ComponentKind::RotorMain, 40.0, [2.0, 0.3, -2.0], [0.0, 0.0, 0.0]),
            component(ComponentKind::MainGear, 35.0, [2.6, 1.2, 1.0], [0.4, 2.4, 0.8]),
        ]
    }

    #[test]
    fn test_aggregation_linearity() {
        let a: MassAccumulator = set_a().iter().collect();
        let b: MassAccumulator = set_b().iter().collect();

        let union = Aircraft::from_parts(
            AircraftSpecification::default(),
            set_a().into_iter().chain(set_b()).collect(),
        );
        let merged = a + b;
        let whole = union.accumulate();

        assert_relative_eq!(whole.mass.get::<kilogram>(), merged.mass.get::<kilogram>());
        let (w, m) = (whole.first_moment, merged.first_moment);
        for (lhs, rhs) in [(w.x, m.x), (w.y, m.y), (w.z, m.z)] {
            assert_relative_eq!(lhs.value, rhs.value, epsilon = 1e-9);
        }
        assert_tensor_eq(&whole.inertia, &merged.inertia);
        assert!(whole.inertia.is_symmetric());

        assert_relative_eq!(union.mass().get::<kilogram>(), 435.0, epsilon = 1e-9);
    }

    #[test]
    fn test_center_of_mass() {
        let aircraft = Aircraft::from_parts(
            AircraftSpecification::default(),
            vec![
                component(ComponentKind::Fuselage, 100.0, [1.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
                component(ComponentKind::Engine, 300.0, [5.0, 2.0, -1.0], [1.0, 1.0, 1.0]),
            ],
        );

        let c = aircraft.center_of_mass().as_meters();
        assert_relative_eq!(c[0], 4.0, epsilon = 1e-12);
        assert_relative_eq!(c[1], 1.5, epsilon = 1e-12);
        assert_relative_eq!(c[2], -0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_mass_guard() {
        let mut aircraft = Aircraft::default();
        assert_eq!(aircraft.mass(), kilograms(0.0));
        assert_eq!(aircraft.center_of_mass(), Vector3::zero());

        for (kind, pos) in [
            (ComponentKind::Wing, [3.0, 1.0, 2.0]),
            (ComponentKind::Engine, [-1.0, 0.0, 0.0]),
        ] {
            aircraft.add_component(component(kind, 0.0, pos, [1.0, 9.0, 0.2]));
        }
        assert_eq!(aircraft.mass(), kilograms(0.0));
        assert_eq!(aircraft.center_of_mass(), Vector3::zero());
        assert_tensor_eq(aircraft.inertia(), &InertiaTensor::zero());
    }

    #[test]
    fn test_mutations_recompute() {
        let mut aircraft = Aircraft::default();
        let engine = component(ComponentKind::Engine, 100.0, [2.0, 0.0, 0.0], [0.0; 3]);
        let i = aircraft.add_component(engine);
        assert_relative_eq!(aircraft.center_of_mass().as_meters()[0], 2.0);

        aircraft.set_component_position(i, Vector3::from_meters(4.0, 0.0, 0.0)).unwrap();
        assert_relative_eq!(aircraft.center_of_mass().as_meters()[0], 4.0);

        aircraft.set_component_mass(i, kilograms(50.0)).unwrap();
        assert_relative_eq!(aircraft.mass().get::<kilogram>(), 50.0);

        let removed = aircraft.remove_component(i).unwrap();
        assert_eq!(removed.kind(), ComponentKind::Engine);
        assert_eq!(aircraft.mass(), kilograms(0.0));

        assert_eq!(
            aircraft.remove_component(0),
            Err(Error::NoSuchComponent { index: 0, len: 0 })
        );
    }

    fn general_aviation() -> AircraftSpecification {
        let mut spec = AircraftSpecification::new(Category::GeneralAviation);
        spec.general.empty_mass = kilograms(754.0);
        spec.general.max_takeoff_mass = kilograms(1157.0);
        spec.general.ultimate_load_factor = 5.7;
        spec.general.cruise_speed = knots(124.0);
        spec.general.cruise_altitude = Length::new::<foot>(3000.0);
        spec.fuselage.length = meters(7.22);
        spec.fuselage.height = meters(1.4);
        spec.fuselage.width = meters(1.1);
        spec.fuselage.wetted_area = square_meters(26.43);
        spec.fuselage.wetted_area_override = true;
        spec.horizontal_tail.geometry.arm = meters(4.6);
        spec
    }

    #[test]
    fn test_general_aviation_fuselage_scenario() {
        let mut aircraft = Aircraft::new(general_aviation());
        let dims = Dimensions::from_meters(7.22, 1.1, 1.4);
        let fuselage = MassComponent::new(ComponentKind::Fuselage).with_dimensions(dims);
        let i = aircraft.add_component(fuselage);

        // Nothing is aggregated until the estimate is adopted
        assert_eq!(aircraft.mass(), kilograms(0.0));

        let estimated = aircraft.adopt_estimate(i).unwrap();
        assert!(estimated > kilograms(0.0));
        assert_eq!(aircraft.mass(), estimated);
        assert_eq!(aircraft.center_of_mass(), Vector3::zero());

        let expected = *cuboid_inertia(estimated, &dims).tensor();
        assert_tensor_eq(aircraft.inertia(), &expected);
    }

    #[test]
    fn test_spec_change_keeps_components() {
        let mut aircraft = Aircraft::new(general_aviation());
        let fuselage = component(ComponentKind::Fuselage, 120.0, [3.0, 0.0, 0.0], [7.22, 1.1, 1.4]);
        aircraft.add_component(fuselage);
        let before = *aircraft.properties();
        let estimate_before = aircraft.estimated_empty_mass();

        aircraft.update_spec(|s| s.general.max_takeoff_mass = kilograms(1300.0));

        assert_eq!(*aircraft.properties(), before);
        assert!(aircraft.estimated_empty_mass() > estimate_before);
    }

    #[test]
    fn test_adopt_skips_incomplete_estimates() {
        let mut aircraft = Aircraft::default();
        let engine = component(ComponentKind::Engine, 100.0, [1.0, 0.0, 0.0], [0.5, 0.5, 0.5]);
        aircraft.add_component(engine);
        let wing = aircraft.add_component(
            MassComponent::new(ComponentKind::Wing).with_mass(kilograms(20.0)),
        );

        // Zero wing geometry has no finite estimate
        assert!(!aircraft.components()[wing].estimate(aircraft.spec()).is_finite());

        assert_eq!(aircraft.adopt_all_estimates(), 1);
        assert_eq!(aircraft.components()[wing].mass(), kilograms(20.0));
        assert!(aircraft.mass().value.is_finite());
        assert!(aircraft.inertia().ixx().value.is_finite());
        assert!(aircraft.center_of_mass().x.value.is_finite());

        let before = *aircraft.properties();
        assert_eq!(
            aircraft.adopt_estimate(wing),
            Err(Error::IncompleteEstimate {
                index: wing,
                name: "Wing".to_string()
            })
        );
        assert_eq!(*aircraft.properties(), before);
    }

    #[test]
    fn test_estimates_table() {
        let mut aircraft = Aircraft::new(general_aviation());
        aircraft.add_component(MassComponent::new(ComponentKind::Fuselage));
        let rotor = MassComponent::new(ComponentKind::RotorMain).with_mass(kilograms(5.0));
        aircraft.add_component(rotor);

        let rows = aircraft.estimates();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Fuselage");
        assert!(rows[0].estimate.mass() > kilograms(0.0));
        assert!(rows[1].estimate.is_zero());
        assert_eq!(rows[1].actual, kilograms(5.0));

        aircraft.adopt_all_estimates();
        assert_eq!(aircraft.components()[1].mass(), kilograms(0.0));
        assert_eq!(aircraft.mass(), aircraft.estimated_empty_mass());
    }
}
