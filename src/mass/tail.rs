use super::estimate::{Estimate, factor, with_statistical};
use crate::{
    aircraft::spec::{AircraftSpecification, Category},
    units::{
        cos,
        imperial::{ft, ft2, lb, psf},
    },
};

pub fn horizontal_estimate(spec: &AircraftSpecification) -> Estimate {
    let analytical = match spec.category {
        Category::FighterAttack => horizontal_fighter_attack(spec),
        Category::CargoTransport => horizontal_cargo_transport(spec),
        Category::GeneralAviation => horizontal_general_aviation(spec),
        Category::Helicopter => horizontal_helicopter(spec),
    };

    let exposed = ft2(spec.horizontal_tail.geometry.exposed_area);
    with_statistical(spec, |t| t.horizontal_tail * exposed, analytical)
}

pub fn vertical_estimate(spec: &AircraftSpecification) -> Estimate {
    let analytical = match spec.category {
        Category::FighterAttack => vertical_fighter_attack(spec),
        Category::CargoTransport => vertical_cargo_transport(spec),
        Category::GeneralAviation => vertical_general_aviation(spec),
        Category::Helicopter => vertical_helicopter(spec),
    };

    let exposed = ft2(spec.vertical_tail.geometry.exposed_area);
    with_statistical(spec, |t| t.vertical_tail * exposed, analytical)
}

fn horizontal_fighter_attack(spec: &AircraftSpecification) -> f64 {
    let ht = &spec.horizontal_tail;
    let wdg = lb(spec.design_gross_mass());
    let nz = spec.general.ultimate_load_factor;

    3.316
        * (1.0 + ft(ht.fuselage_width) / ft(ht.geometry.span)).powf(-2.0)
        * (wdg * nz / 1000.0).powf(0.26)
        * ft2(ht.geometry.area).powf(0.806)
}

fn horizontal_cargo_transport(spec: &AircraftSpecification) -> f64 {
    let ht = &spec.horizontal_tail;
    let g = &ht.geometry;
    let wdg = lb(spec.design_gross_mass());
    let nz = spec.general.ultimate_load_factor;
    let lt = ft(g.arm);
    // Pitching radius of gyration
    let ky = 0.3 * lt;
    let sht = ft2(g.area);

    0.0379
        * factor(ht.moving, 1.143)
        * (1.0 + ft(ht.fuselage_width) / ft(g.span)).powf(-0.25)
        * wdg.powf(0.639)
        * nz.powf(0.1)
        * sht.powf(0.75)
        * lt.powf(-1.0)
        * ky.powf(0.704)
        * cos(g.sweep).powf(-1.0)
        * g.aspect_ratio.powf(0.166)
        * (1.0 + ft2(g.control_surface_area) / sht).powf(0.1)
}

fn horizontal_general_aviation(spec: &AircraftSpecification) -> f64 {
    let g = &spec.horizontal_tail.geometry;
    let wdg = lb(spec.design_gross_mass());
    let nz = spec.general.ultimate_load_factor;
    let q = psf(spec.cruise_dynamic_pressure());
    let cos_sweep = cos(g.sweep);

    0.016
        * (nz * wdg).powf(0.414)
        * q.powf(0.168)
        * ft2(g.area).powf(0.896)
        * (100.0 * g.thickness_ratio / cos_sweep).powf(-0.12)
        * (g.aspect_ratio / (cos_sweep * cos_sweep)).powf(0.043)
        * g.taper_ratio.powf(-0.02)
}

fn horizontal_helicopter(spec: &AircraftSpecification) -> f64 {
    let g = &spec.horizontal_tail.geometry;

    0.72 * ft2(g.area).powf(1.2) * g.aspect_ratio.powf(0.32)
}

/// Height of the horizontal tail over the vertical tail height.
fn tail_height_ratio(spec: &AircraftSpecification) -> f64 {
    if spec.vertical_tail.t_tail { 1.0 } else { 0.0 }
}

fn vertical_fighter_attack(spec: &AircraftSpecification) -> f64 {
    let g = &spec.vertical_tail.geometry;
    let wdg = lb(spec.design_gross_mass());
    let nz = spec.general.ultimate_load_factor;
    let svt = ft2(g.area);

    0.452
        * factor(spec.horizontal_tail.rolling, 1.047)
        * (1.0 + tail_height_ratio(spec)).powf(0.5)
        * (wdg * nz).powf(0.488)
        * svt.powf(0.718)
        * spec.general.max_mach.powf(0.341)
        * ft(g.arm).powf(-1.0)
        * (1.0 + ft2(g.control_surface_area) / svt).powf(0.348)
        * g.aspect_ratio.powf(0.223)
        * (1.0 + g.taper_ratio).powf(0.25)
        * cos(g.sweep).powf(-0.323)
}

fn vertical_cargo_transport(spec: &AircraftSpecification) -> f64 {
    let g = &spec.vertical_tail.geometry;
    let wdg = lb(spec.design_gross_mass());
    let nz = spec.general.ultimate_load_factor;
    let lt = ft(g.arm);
    // Yawing radius of gyration
    let kz = lt;

    0.0026
        * (1.0 + tail_height_ratio(spec)).powf(0.225)
        * wdg.powf(0.556)
        * nz.powf(0.536)
        * lt.powf(-0.5)
        * ft2(g.area).powf(0.5)
        * kz.powf(0.875)
        * cos(g.sweep).powf(-1.0)
        * g.aspect_ratio.powf(0.35)
        * g.thickness_ratio.powf(-0.5)
}

fn vertical_general_aviation(spec: &AircraftSpecification) -> f64 {
    let g = &spec.vertical_tail.geometry;
    let wdg = lb(spec.design_gross_mass());
    let nz = spec.general.ultimate_load_factor;
    let q = psf(spec.cruise_dynamic_pressure());
    let cos_sweep = cos(g.sweep);

    0.073
        * (1.0 + 0.2 * tail_height_ratio(spec))
        * (nz * wdg).powf(0.376)
        * q.powf(0.122)
        * ft2(g.area).powf(0.873)
        * (100.0 * g.thickness_ratio / cos_sweep).powf(-0.49)
        * (g.aspect_ratio / (cos_sweep * cos_sweep)).powf(0.357)
        * g.taper_ratio.powf(0.039)
}

fn vertical_helicopter(spec: &AircraftSpecification) -> f64 {
    let vt = &spec.vertical_tail;
    let rotor_mounted: f64 = if vt.tail_rotor_mounted { 1.0 } else { 0.0 };

    1.05
        * ft2(vt.geometry.area).powf(0.94)
        * vt.geometry.aspect_ratio.powf(0.53)
        * (1.0 + rotor_mounted).powf(0.71)
}
