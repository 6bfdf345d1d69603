//! Rotor system group weights. Only rotorcraft have them; every other
//! category gets a zero estimate.

use super::estimate::Estimate;
use crate::{
    aircraft::spec::AircraftSpecification,
    units::imperial::{ft, ft_s, hp, pounds, rpm},
};

/// ft/s²
const G_FT_S2: f64 = 32.2;

fn rotorcraft_only(spec: &AircraftSpecification, estimate: impl FnOnce() -> f64) -> Estimate {
    if spec.category.is_rotorcraft() {
        Estimate::single(pounds(estimate()))
    } else {
        Estimate::not_applicable()
    }
}

/// Main rotor blades, all of them.
pub fn blades_estimate(spec: &AircraftSpecification) -> Estimate {
    rotorcraft_only(spec, || blades_lb(spec))
}

pub fn hub_estimate(spec: &AircraftSpecification) -> Estimate {
    rotorcraft_only(spec, || {
        let r = &spec.rotors;
        let radius = ft(r.radius);
        let blades = blades_lb(spec);
        // Blade polar moment over R², slug
        let j_r2 = blades / (3.0 * G_FT_S2);

        0.0037
            * f64::from(r.blade_count).powf(0.28)
            * radius.powf(1.5)
            * ft_s(r.effective_tip_velocity()).powf(0.43)
            * (0.67 * blades + G_FT_S2 * j_r2).powf(0.55)
    })
}

pub fn tail_estimate(spec: &AircraftSpecification) -> Estimate {
    rotorcraft_only(spec, || {
        let r = &spec.rotors;

        1.4 * ft(r.tail_radius).powf(0.09) * (hp(r.power_limit) / rpm(r.rpm)).powf(0.9)
    })
}

/// Transmission, shafting and gearboxes.
pub fn drive_estimate(spec: &AircraftSpecification) -> Estimate {
    rotorcraft_only(spec, || {
        let r = &spec.rotors;

        250.0 * (hp(r.power_limit) / rpm(r.rpm)).powf(0.67)
    })
}

fn blades_lb(spec: &AircraftSpecification) -> f64 {
    let r = &spec.rotors;

    0.026
        * f64::from(r.blade_count).powf(0.66)
        * ft(r.chord)
        * ft(r.radius).powf(1.3)
        * ft_s(r.effective_tip_velocity()).powf(0.67)
}
