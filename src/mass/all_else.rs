use log::{debug, warn};
use strum::IntoEnumIterator;
use uom::si::mass::kilogram;

use super::{ComponentKind, estimate::Estimate};
use crate::{
    aircraft::spec::AircraftSpecification,
    units::{Mass, imperial::lb, kilograms},
};

/// Everything not covered by another group: systems, furnishings, avionics.
///
/// The analytical half is whatever is left of the empty mass once every other
/// group has been estimated.
pub fn estimate(spec: &AircraftSpecification) -> Estimate {
    let residual = residual(spec);

    super::estimate::with_statistical(
        spec,
        |t| t.all_else * lb(spec.design_gross_mass()),
        lb(residual),
    )
}

fn residual(spec: &AircraftSpecification) -> Mass {
    let others = ComponentKind::iter()
        .filter(|kind| *kind != ComponentKind::AllElse)
        .filter_map(|kind| {
            let estimate = kind.estimate(spec);
            if estimate.is_finite() {
                Some(estimate.mass())
            } else {
                debug!("No {} estimate, inputs incomplete", kind.as_ref());
                None
            }
        })
        .fold(kilograms(0.0), |acc, mass| acc + mass);

    let residual = spec.general.empty_mass - others;
    if residual < kilograms(0.0) {
        warn!(
            "Component estimates exceed the empty mass by {:.1} kg, all-else residual set to zero",
            -residual.get::<kilogram>()
        );
        kilograms(0.0)
    } else {
        residual
    }
}
