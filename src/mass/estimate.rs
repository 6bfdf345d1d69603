use uom::si::mass::kilogram;

use crate::{
    aircraft::spec::{AircraftSpecification, Category},
    units::{Mass, imperial::pounds, kilograms},
};

/// A component mass estimate, kept as its two independent halves.
///
/// Fixed-wing estimates blend a statistical weight fraction with an analytical
/// regression. Rotorcraft regressions only provide one value, which then fills
/// both halves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub statistical: Mass,
    pub analytical: Mass,
}

impl Estimate {
    pub fn blended(statistical: Mass, analytical: Mass) -> Self {
        Self {
            statistical,
            analytical,
        }
    }

    pub fn single(mass: Mass) -> Self {
        Self::blended(mass, mass)
    }

    /// Component does not exist for this aircraft category.
    pub fn not_applicable() -> Self {
        Self::single(kilograms(0.0))
    }

    pub fn from_pounds(statistical_lb: f64, analytical_lb: f64) -> Self {
        Self::blended(pounds(statistical_lb), pounds(analytical_lb))
    }

    pub fn mass(&self) -> Mass {
        (self.statistical + self.analytical) / 2.0
    }

    /// False when the inputs are incomplete, e.g. a zero thickness ratio
    /// raised to a negative power.
    pub fn is_finite(&self) -> bool {
        self.statistical.value.is_finite() && self.analytical.value.is_finite()
    }

    pub fn is_zero(&self) -> bool {
        self.statistical.get::<kilogram>() == 0.0 && self.analytical.get::<kilogram>() == 0.0
    }
}

/// Statistical group-weight coefficients for one aircraft category.
///
/// Surface and fuselage coefficients are lb/ft² of exposed (or wetted) area,
/// the rest are fractions of a reference weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticalTable {
    pub wing: f64,
    pub horizontal_tail: f64,
    pub vertical_tail: f64,
    pub fuselage: f64,
    /// Landing gear, fraction of design gross weight.
    pub gear_fraction: f64,
    pub carrier_gear_fraction: f64,
    /// Installed engine, multiple of the dry engine weight.
    pub engine: f64,
    /// All-else-empty, fraction of design gross weight.
    pub all_else: f64,
}

/// Share of the landing gear weight carried by the main gear.
pub const MAIN_GEAR_SHARE: f64 = 0.85;
pub const NOSE_GEAR_SHARE: f64 = 0.15;

const FIGHTER_ATTACK: StatisticalTable = StatisticalTable {
    wing: 9.0,
    horizontal_tail: 4.0,
    vertical_tail: 5.3,
    fuselage: 4.8,
    gear_fraction: 0.033,
    carrier_gear_fraction: 0.045,
    engine: 1.3,
    all_else: 0.17,
};

const CARGO_TRANSPORT: StatisticalTable = StatisticalTable {
    wing: 10.0,
    horizontal_tail: 5.5,
    vertical_tail: 5.5,
    fuselage: 5.0,
    gear_fraction: 0.043,
    carrier_gear_fraction: 0.043,
    engine: 1.3,
    all_else: 0.17,
};

const GENERAL_AVIATION: StatisticalTable = StatisticalTable {
    wing: 2.5,
    horizontal_tail: 2.0,
    vertical_tail: 2.0,
    fuselage: 1.4,
    gear_fraction: 0.057,
    carrier_gear_fraction: 0.057,
    engine: 1.4,
    all_else: 0.10,
};

impl StatisticalTable {
    /// Rotorcraft have no statistical table.
    pub fn of(category: Category) -> Option<&'static StatisticalTable> {
        match category {
            Category::FighterAttack => Some(&FIGHTER_ATTACK),
            Category::CargoTransport => Some(&CARGO_TRANSPORT),
            Category::GeneralAviation => Some(&GENERAL_AVIATION),
            Category::Helicopter => None,
        }
    }

    pub fn gear_fraction_for(&self, carrier_based: bool) -> f64 {
        if carrier_based {
            self.carrier_gear_fraction
        } else {
            self.gear_fraction
        }
    }
}

/// Builds an estimate from an analytical value in pounds, pairing it with the
/// statistical half from the category table when the category has one.
pub(crate) fn with_statistical(
    spec: &AircraftSpecification,
    statistical_lb: impl FnOnce(&StatisticalTable) -> f64,
    analytical_lb: f64,
) -> Estimate {
    match StatisticalTable::of(spec.category) {
        Some(table) => Estimate::from_pounds(statistical_lb(table), analytical_lb),
        None => Estimate::single(pounds(analytical_lb)),
    }
}

/// Multiplicative correction applied when a configuration flag is set.
pub(crate) fn factor(flag: bool, value: f64) -> f64 {
    if flag { value } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_blend() {
        let e = Estimate::blended(kilograms(100.0), kilograms(140.0));
        assert_relative_eq!(e.mass().get::<kilogram>(), 120.0);

        let e = Estimate::single(kilograms(75.0));
        assert_eq!(e.statistical, e.analytical);
        assert_relative_eq!(e.mass().get::<kilogram>(), 75.0);

        assert!(Estimate::not_applicable().is_zero());
        assert_eq!(Estimate::not_applicable().mass(), kilograms(0.0));
    }

    #[test]
    fn test_tables() {
        for category in Category::iter() {
            assert_eq!(
                StatisticalTable::of(category).is_none(),
                category == Category::Helicopter
            );
        }

        let fighter = StatisticalTable::of(Category::FighterAttack).unwrap();
        assert_eq!(fighter.gear_fraction_for(false), 0.033);
        assert_eq!(fighter.gear_fraction_for(true), 0.045);
        assert_relative_eq!(MAIN_GEAR_SHARE + NOSE_GEAR_SHARE, 1.0);
    }

    #[test]
    fn test_rotorcraft_single_estimate() {
        let spec = AircraftSpecification::new(Category::Helicopter);
        let e = with_statistical(&spec, |t| t.wing * 1000.0, 220.0);

        assert_eq!(e.statistical, e.analytical);
        assert_relative_eq!(e.mass().get::<kilogram>(), pounds(220.0).get::<kilogram>());

        let spec = AircraftSpecification::new(Category::GeneralAviation);
        let e = with_statistical(&spec, |t| t.wing * 100.0, 150.0);
        assert_relative_eq!(
            e.mass().get::<kilogram>(),
            pounds(200.0).get::<kilogram>(),
            epsilon = 1e-9
        );
    }
}
