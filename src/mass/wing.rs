use super::estimate::{Estimate, factor, with_statistical};
use crate::{
    aircraft::spec::{AircraftSpecification, Category},
    units::{
        cos,
        imperial::{ft2, lb, psf},
    },
};

pub fn estimate(spec: &AircraftSpecification) -> Estimate {
    let analytical = match spec.category {
        Category::FighterAttack => fighter_attack(spec),
        Category::CargoTransport => cargo_transport(spec),
        Category::GeneralAviation => general_aviation(spec),
        Category::Helicopter => return Estimate::not_applicable(),
    };

    with_statistical(spec, |t| t.wing * ft2(spec.wing.exposed_area), analytical)
}

fn fighter_attack(spec: &AircraftSpecification) -> f64 {
    let w = &spec.wing;
    let wdg = lb(spec.design_gross_mass());
    let nz = spec.general.ultimate_load_factor;

    0.0103
        * factor(w.delta, 0.768)
        * factor(w.variable_sweep, 1.19)
        * (wdg * nz).powf(0.5)
        * ft2(w.area).powf(0.622)
        * w.aspect_ratio.powf(0.785)
        * w.thickness_ratio.powf(-0.4)
        * (1.0 + w.taper_ratio).powf(0.05)
        * cos(w.sweep).powf(-1.0)
        * ft2(w.control_surface_area).powf(0.04)
}

fn cargo_transport(spec: &AircraftSpecification) -> f64 {
    let w = &spec.wing;
    let wdg = lb(spec.design_gross_mass());
    let nz = spec.general.ultimate_load_factor;

    0.0051
        * (wdg * nz).powf(0.557)
        * ft2(w.area).powf(0.649)
        * w.aspect_ratio.powf(0.5)
        * w.thickness_ratio.powf(-0.4)
        * (1.0 + w.taper_ratio).powf(0.1)
        * cos(w.sweep).powf(-1.0)
        * ft2(w.control_surface_area).powf(0.1)
}

fn general_aviation(spec: &AircraftSpecification) -> f64 {
    let w = &spec.wing;
    let wdg = lb(spec.design_gross_mass());
    let nz = spec.general.ultimate_load_factor;
    let q = psf(spec.cruise_dynamic_pressure());
    let cos_sweep = cos(w.sweep);

    0.036
        * ft2(w.area).powf(0.758)
        * lb(w.fuel_capacity).powf(0.0035)
        * (w.aspect_ratio / (cos_sweep * cos_sweep)).powf(0.6)
        * q.powf(0.006)
        * w.taper_ratio.powf(0.04)
        * (100.0 * w.thickness_ratio / cos_sweep).powf(-0.3)
        * (nz * wdg).powf(0.49)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{degrees, imperial::pounds, kilograms, knots, meters, square_meters};
    use approx::assert_relative_eq;
    use uom::si::mass::pound;

    fn cessna() -> AircraftSpecification {
        let mut spec = AircraftSpecification::new(Category::GeneralAviation);
        spec.general.max_takeoff_mass = kilograms(1157.0);
        spec.general.ultimate_load_factor = 5.7;
        spec.general.cruise_speed = knots(124.0);
        spec.general.cruise_altitude = meters(914.4);
        spec.wing.area = square_meters(16.2);
        spec.wing.exposed_area = square_meters(14.9);
        spec.wing.aspect_ratio = 7.32;
        spec.wing.taper_ratio = 0.69;
        spec.wing.thickness_ratio = 0.12;
        spec.wing.sweep = degrees(0.0);
        spec.wing.fuel_capacity = kilograms(145.0);
        spec
    }

    #[test]
    fn test_general_aviation_wing() {
        let spec = cessna();
        let e = estimate(&spec);

        assert_relative_eq!(e.statistical.get::<pound>(), 2.5 * ft2(spec.wing.exposed_area));
        assert_relative_eq!(e.analytical.get::<pound>(), general_aviation(&spec));

        // Group weight of a four-seat single is a couple of hundred pounds
        let analytical = e.analytical.get::<pound>();
        assert!(analytical > 150.0 && analytical < 400.0, "{analytical}");
    }

    #[test]
    fn test_sweep_increases_mass() {
        let mut spec = cessna();
        let straight = estimate(&spec).analytical;
        spec.wing.sweep = degrees(30.0);
        assert!(estimate(&spec).analytical > straight);
    }

    #[test]
    fn test_fighter_uses_design_gross_mass() {
        let mut spec = cessna();
        spec.category = Category::FighterAttack;
        spec.general.max_takeoff_mass = kilograms(10000.0);
        spec.wing.fuel_capacity = kilograms(2000.0);
        spec.wing.control_surface_area = square_meters(4.0);

        let mut reference = spec.clone();
        reference.category = Category::CargoTransport;
        reference.general.max_takeoff_mass = kilograms(9000.0);
        reference.wing.fuel_capacity = kilograms(0.0);

        assert_relative_eq!(
            fighter_attack(&spec),
            fighter_attack(&reference),
            max_relative = 1e-12
        );

        let delta = {
            let mut s = spec.clone();
            s.wing.delta = true;
            fighter_attack(&s)
        };
        assert_relative_eq!(delta / fighter_attack(&spec), 0.768, max_relative = 1e-12);

        let mut swing_wing = spec.clone();
        swing_wing.wing.variable_sweep = true;
        assert_relative_eq!(
            fighter_attack(&swing_wing) / fighter_attack(&spec),
            1.19,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_helicopter_has_no_wing() {
        let mut spec = cessna();
        spec.category = Category::Helicopter;
        assert!(estimate(&spec).is_zero());
        assert_eq!(estimate(&spec).mass(), pounds(0.0));
    }
}
