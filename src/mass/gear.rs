use super::estimate::{
    Estimate, MAIN_GEAR_SHARE, NOSE_GEAR_SHARE, StatisticalTable, factor, with_statistical,
};
use crate::{
    aircraft::spec::{AircraftSpecification, Category},
    units::imperial::{ft_s, inches, lb},
};

/// Weight saved by fixed gear, fraction of design gross weight.
const FIXED_GEAR_CREDIT: f64 = 0.014;

pub fn main_estimate(spec: &AircraftSpecification) -> Estimate {
    let analytical = match spec.category {
        Category::FighterAttack => main_fighter_attack(spec),
        Category::CargoTransport => main_cargo_transport(spec),
        Category::GeneralAviation => main_general_aviation(spec),
        Category::Helicopter => {
            helicopter(spec) * strut_share(spec, spec.landing_gear.main_struts)
        }
    };
    let analytical = analytical - fixed_gear_credit(spec) * MAIN_GEAR_SHARE;

    with_statistical(spec, |t| statistical(spec, t) * MAIN_GEAR_SHARE, analytical)
}

pub fn nose_estimate(spec: &AircraftSpecification) -> Estimate {
    let analytical = match spec.category {
        Category::FighterAttack => nose_fighter_attack(spec),
        Category::CargoTransport => nose_cargo_transport(spec),
        Category::GeneralAviation => nose_general_aviation(spec),
        Category::Helicopter => {
            helicopter(spec) * strut_share(spec, spec.landing_gear.nose_struts)
        }
    };
    let analytical = analytical - fixed_gear_credit(spec) * NOSE_GEAR_SHARE;

    with_statistical(spec, |t| statistical(spec, t) * NOSE_GEAR_SHARE, analytical)
}

/// Whole landing gear as a fraction of design gross weight.
fn statistical(spec: &AircraftSpecification, table: &StatisticalTable) -> f64 {
    table.gear_fraction_for(spec.general.carrier_based) * lb(spec.design_gross_mass())
}

fn fixed_gear_credit(spec: &AircraftSpecification) -> f64 {
    if spec.landing_gear.fixed && !spec.category.is_rotorcraft() {
        FIXED_GEAR_CREDIT * lb(spec.design_gross_mass())
    } else {
        0.0
    }
}

/// Landing weight and ultimate landing load factor.
fn landing(spec: &AircraftSpecification) -> (f64, f64) {
    (lb(spec.general.max_landing_mass), spec.landing_load_factor())
}

fn main_fighter_attack(spec: &AircraftSpecification) -> f64 {
    let lg = &spec.landing_gear;
    let (wl, nl) = landing(spec);

    factor(lg.cross_beam, 2.25)
        * factor(lg.tripod, 0.826)
        * (wl * nl).powf(0.25)
        * inches(lg.main_strut_length).powf(0.973)
}

fn main_cargo_transport(spec: &AircraftSpecification) -> f64 {
    let lg = &spec.landing_gear;
    let (wl, nl) = landing(spec);

    0.0106
        * factor(lg.kneeling, 1.126)
        * wl.powf(0.888)
        * nl.powf(0.25)
        * inches(lg.main_strut_length).powf(0.4)
        * f64::from(lg.main_wheels).powf(0.321)
        * f64::from(lg.main_struts).powf(-0.5)
        * ft_s(spec.general.stall_speed).powf(0.1)
}

fn main_general_aviation(spec: &AircraftSpecification) -> f64 {
    let (wl, nl) = landing(spec);

    0.095
        * (nl * wl).powf(0.768)
        * (inches(spec.landing_gear.main_strut_length) / 12.0).powf(0.409)
}

fn nose_fighter_attack(spec: &AircraftSpecification) -> f64 {
    let lg = &spec.landing_gear;
    let (wl, nl) = landing(spec);

    (wl * nl).powf(0.29)
        * inches(lg.nose_strut_length).powf(0.5)
        * f64::from(lg.nose_wheels).powf(0.525)
}

fn nose_cargo_transport(spec: &AircraftSpecification) -> f64 {
    let lg = &spec.landing_gear;
    let (wl, nl) = landing(spec);

    0.032
        * factor(lg.kneeling, 1.15)
        * wl.powf(0.646)
        * nl.powf(0.2)
        * inches(lg.nose_strut_length).powf(0.5)
        * f64::from(lg.nose_wheels).powf(0.45)
}

fn nose_general_aviation(spec: &AircraftSpecification) -> f64 {
    let (wl, nl) = landing(spec);

    0.125
        * (nl * wl).powf(0.566)
        * (inches(spec.landing_gear.nose_strut_length) / 12.0).powf(0.845)
}

/// Whole rotorcraft undercarriage, all legs together.
fn helicopter(spec: &AircraftSpecification) -> f64 {
    let gw = lb(spec.design_gross_mass());
    let legs = leg_count(spec);

    40.0 * (gw / 1000.0).powf(0.67) * legs.powf(0.54)
}

fn leg_count(spec: &AircraftSpecification) -> f64 {
    f64::from(spec.landing_gear.main_struts) + f64::from(spec.landing_gear.nose_struts)
}

fn strut_share(spec: &AircraftSpecification, struts: u32) -> f64 {
    let legs = leg_count(spec);
    if legs == 0.0 {
        0.0
    } else {
        f64::from(struts) / legs
    }
}
