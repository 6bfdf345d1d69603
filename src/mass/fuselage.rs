use super::estimate::{Estimate, factor, with_statistical};
use crate::{
    aircraft::spec::{AircraftSpecification, Category},
    units::{
        imperial::{ft, ft2, lb, psf},
        tan,
    },
};

pub fn estimate(spec: &AircraftSpecification) -> Estimate {
    let analytical = match spec.category {
        Category::FighterAttack => fighter_attack(spec),
        Category::CargoTransport => cargo_transport(spec),
        Category::GeneralAviation => general_aviation(spec),
        Category::Helicopter => helicopter(spec),
    };

    let wetted = ft2(spec.fuselage_wetted_area());
    with_statistical(spec, |t| t.fuselage * wetted, analytical)
}

fn fighter_attack(spec: &AircraftSpecification) -> f64 {
    let f = &spec.fuselage;
    let wdg = lb(spec.design_gross_mass());
    let nz = spec.general.ultimate_load_factor;

    0.499
        * factor(spec.wing.delta, 0.774)
        * wdg.powf(0.35)
        * nz.powf(0.25)
        * ft(f.length).powf(0.5)
        * ft(f.height).powf(0.849)
        * ft(f.width).powf(0.685)
}

fn cargo_transport(spec: &AircraftSpecification) -> f64 {
    let f = &spec.fuselage;
    let w = &spec.wing;
    let wdg = lb(spec.design_gross_mass());
    let nz = spec.general.ultimate_load_factor;
    let l = ft(f.length);
    let d = ft(f.height);

    // Wing sweep and taper carry-through
    let kws = 0.75 * ((1.0 + 2.0 * w.taper_ratio) / (1.0 + w.taper_ratio)) * ft(w.span)
        * tan(w.sweep)
        / l;

    0.328
        * f.door_factor()
        * factor(f.fuselage_mounted_gear, 1.12)
        * (wdg * nz).powf(0.5)
        * l.powf(0.25)
        * ft2(spec.fuselage_wetted_area()).powf(0.302)
        * (1.0 + kws).powf(0.04)
        * (l / d).powf(0.1)
}

fn general_aviation(spec: &AircraftSpecification) -> f64 {
    let f = &spec.fuselage;
    let wdg = lb(spec.design_gross_mass());
    let nz = spec.general.ultimate_load_factor;
    let q = psf(spec.cruise_dynamic_pressure());

    // Unpressurised
    0.052
        * ft2(spec.fuselage_wetted_area()).powf(1.086)
        * (nz * wdg).powf(0.177)
        * ft(spec.horizontal_tail.geometry.arm).powf(-0.051)
        * (ft(f.length) / ft(f.height)).powf(-0.072)
        * q.powf(0.241)
}

fn helicopter(spec: &AircraftSpecification) -> f64 {
    let gw = lb(spec.design_gross_mass());

    6.9
        * (gw / 1000.0).powf(0.49)
        * ft(spec.fuselage.length).powf(0.61)
        * ft2(spec.fuselage_wetted_area()).powf(0.25)
}
