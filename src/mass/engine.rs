use super::estimate::{Estimate, factor, with_statistical};
use crate::{
    aircraft::spec::{AircraftSpecification, Category},
    units::imperial::lb,
};

/// Installed engine weight, including mounts, cowling and accessories.
pub fn estimate(spec: &AircraftSpecification) -> Estimate {
    let e = &spec.engine;
    let n = f64::from(e.effective_count());
    let dry_each = lb(e.mass) / n;

    let analytical = match spec.category {
        Category::FighterAttack | Category::CargoTransport => {
            n * 2.331
                * dry_each.powf(0.901)
                * factor(e.propeller, 1.4)
                * factor(e.thrust_reverser, 1.18)
        }
        Category::GeneralAviation => 2.575 * dry_each.powf(0.922) * n,
        Category::Helicopter => lb(e.mass),
    };

    with_statistical(spec, |t| t.engine * lb(e.mass), analytical)
}
