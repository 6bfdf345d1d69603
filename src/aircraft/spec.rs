use std::{f64::consts::PI, str::FromStr};

use anyhow::{Result, anyhow};
use strum::{AsRefStr, EnumIter, EnumString};
use uom::si::{
    angle::degree, angular_velocity::revolution_per_minute, area::square_meter, length::meter,
    mass::kilogram, power::watt, thermodynamic_temperature::kelvin, velocity::meter_per_second,
};

use crate::{
    aero::atmosphere::{Atmosphere, StandardAtmosphere},
    math::Vector3,
    parameters::{self, ParameterMap, ParameterValue},
    units::{
        Angle, AngularVelocity, Area, Length, Mass, Power, Pressure, ThermodynamicTemperature,
        Velocity, degrees, kilograms, meters, meters_per_second, revolutions_per_minute,
        square_meters, watts,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    #[default]
    FighterAttack,
    CargoTransport,
    GeneralAviation,
    Helicopter,
}

impl Category {
    pub fn is_rotorcraft(&self) -> bool {
        matches!(self, Category::Helicopter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CargoDoor {
    #[default]
    None,
    OneSide,
    TwoSide,
}

#[derive(Debug, Clone, PartialEq)]
pub struct General {
    pub empty_mass: Mass,
    pub max_takeoff_mass: Mass,
    pub max_landing_mass: Mass,
    /// Ultimate load factor (1.5 x limit).
    pub ultimate_load_factor: f64,
    /// Landing gear load factor; the ultimate landing load factor is 1.5x.
    pub gear_load_factor: f64,
    pub stall_speed: Velocity,
    pub cruise_speed: Velocity,
    pub cruise_altitude: Length,
    pub max_mach: f64,
    pub carrier_based: bool,
    /// Sea-level temperature of the design day. Zero means standard day.
    pub sea_level_temperature: ThermodynamicTemperature,
}

impl Default for General {
    fn default() -> Self {
        Self {
            empty_mass: kilograms(0.0),
            max_takeoff_mass: kilograms(0.0),
            max_landing_mass: kilograms(0.0),
            ultimate_load_factor: 0.0,
            gear_load_factor: 0.0,
            stall_speed: meters_per_second(0.0),
            cruise_speed: meters_per_second(0.0),
            cruise_altitude: meters(0.0),
            max_mach: 0.0,
            carrier_based: false,
            sea_level_temperature: ThermodynamicTemperature::new::<kelvin>(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fuselage {
    pub length: Length,
    pub width: Length,
    pub height: Length,
    pub wetted_area: Area,
    /// Use `wetted_area` as given instead of estimating it from the dimensions.
    pub wetted_area_override: bool,
    pub cargo_door: CargoDoor,
    pub cargo_ramp: bool,
    pub fuselage_mounted_gear: bool,
}

impl Default for Fuselage {
    fn default() -> Self {
        Self {
            length: meters(0.0),
            width: meters(0.0),
            height: meters(0.0),
            wetted_area: square_meters(0.0),
            wetted_area_override: false,
            cargo_door: CargoDoor::None,
            cargo_ramp: false,
            fuselage_mounted_gear: false,
        }
    }
}

impl Fuselage {
    /// Fuselage weight factor for cargo doors and rear loading ramps.
    pub fn door_factor(&self) -> f64 {
        match (self.cargo_door, self.cargo_ramp) {
            (CargoDoor::None, false) => 1.0,
            (CargoDoor::OneSide, false) => 1.06,
            (CargoDoor::TwoSide, false) => 1.12,
            (CargoDoor::None | CargoDoor::OneSide, true) => 1.12,
            (CargoDoor::TwoSide, true) => 1.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wing {
    pub area: Area,
    pub exposed_area: Area,
    pub span: Length,
    pub sweep: Angle,
    pub root_chord: Length,
    pub tip_chord: Length,
    pub aspect_ratio: f64,
    pub taper_ratio: f64,
    pub thickness_ratio: f64,
    pub fuel_capacity: Mass,
    pub control_surface_area: Area,
    pub delta: bool,
    pub variable_sweep: bool,
}

impl Default for Wing {
    fn default() -> Self {
        Self {
            area: square_meters(0.0),
            exposed_area: square_meters(0.0),
            span: meters(0.0),
            sweep: degrees(0.0),
            root_chord: meters(0.0),
            tip_chord: meters(0.0),
            aspect_ratio: 0.0,
            taper_ratio: 0.0,
            thickness_ratio: 0.0,
            fuel_capacity: kilograms(0.0),
            control_surface_area: square_meters(0.0),
            delta: false,
            variable_sweep: false,
        }
    }
}

/// Planform parameters shared by both tail surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct TailGeometry {
    pub area: Area,
    pub exposed_area: Area,
    pub span: Length,
    pub sweep: Angle,
    pub root_chord: Length,
    pub tip_chord: Length,
    pub aspect_ratio: f64,
    pub taper_ratio: f64,
    pub thickness_ratio: f64,
    /// Elevator or rudder area.
    pub control_surface_area: Area,
    /// Distance from the wing to the tail quarter chord.
    pub arm: Length,
}

impl Default for TailGeometry {
    fn default() -> Self {
        Self {
            area: square_meters(0.0),
            exposed_area: square_meters(0.0),
            span: meters(0.0),
            sweep: degrees(0.0),
            root_chord: meters(0.0),
            tip_chord: meters(0.0),
            aspect_ratio: 0.0,
            taper_ratio: 0.0,
            thickness_ratio: 0.0,
            control_surface_area: square_meters(0.0),
            arm: meters(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalTail {
    pub geometry: TailGeometry,
    /// Fuselage width where the horizontal tail meets it.
    pub fuselage_width: Length,
    /// All-moving tail.
    pub moving: bool,
    /// Rolling (differential) tail.
    pub rolling: bool,
}

impl Default for HorizontalTail {
    fn default() -> Self {
        Self {
            geometry: TailGeometry::default(),
            fuselage_width: meters(0.0),
            moving: false,
            rolling: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VerticalTail {
    pub geometry: TailGeometry,
    pub t_tail: bool,
    pub tail_rotor_mounted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LandingGear {
    pub main_strut_length: Length,
    pub nose_strut_length: Length,
    pub main_wheels: u32,
    pub main_struts: u32,
    pub nose_wheels: u32,
    pub nose_struts: u32,
    pub fixed: bool,
    pub cross_beam: bool,
    pub tripod: bool,
    pub kneeling: bool,
}

impl Default for LandingGear {
    fn default() -> Self {
        Self {
            main_strut_length: meters(0.0),
            nose_strut_length: meters(0.0),
            main_wheels: 0,
            main_struts: 0,
            nose_wheels: 0,
            nose_struts: 0,
            fixed: false,
            cross_beam: false,
            tripod: false,
            kneeling: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    /// Dry mass of all engines together.
    pub mass: Mass,
    pub count: u32,
    pub propeller: bool,
    pub thrust_reverser: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            mass: kilograms(0.0),
            count: 0,
            propeller: false,
            thrust_reverser: false,
        }
    }
}

impl Engine {
    /// Engine count used by the regressions; an unset count means one engine.
    pub fn effective_count(&self) -> u32 {
        self.count.max(1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rotors {
    pub radius: Length,
    pub chord: Length,
    pub rpm: AngularVelocity,
    pub gear_ratio: f64,
    pub tip_velocity: Velocity,
    pub blade_count: u32,
    pub tail_radius: Length,
    /// Transmission power limit.
    pub power_limit: Power,
}

impl Default for Rotors {
    fn default() -> Self {
        Self {
            radius: meters(0.0),
            chord: meters(0.0),
            rpm: revolutions_per_minute(0.0),
            gear_ratio: 0.0,
            tip_velocity: meters_per_second(0.0),
            blade_count: 0,
            tail_radius: meters(0.0),
            power_limit: watts(0.0),
        }
    }
}

impl Rotors {
    /// Main rotor tip speed; derived from rpm and radius when not given.
    pub fn effective_tip_velocity(&self) -> Velocity {
        if self.tip_velocity > meters_per_second(0.0) {
            self.tip_velocity
        } else {
            let omega_rad_s = self.rpm.get::<revolution_per_minute>() * 2.0 * PI / 60.0;
            meters_per_second(omega_rad_s * self.radius.get::<meter>())
        }
    }
}

/// Placement of the visual reference model. Has no effect on mass properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceModel {
    pub offset: Vector3,
    /// Roll, pitch, yaw.
    pub rotation: [Angle; 3],
    pub scale: f64,
}

impl Default for ReferenceModel {
    fn default() -> Self {
        Self {
            offset: Vector3::zero(),
            rotation: [degrees(0.0); 3],
            scale: 1.0,
        }
    }
}

/// All the engineering inputs of an aircraft.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AircraftSpecification {
    pub category: Category,
    pub general: General,
    pub fuselage: Fuselage,
    pub wing: Wing,
    pub horizontal_tail: HorizontalTail,
    pub vertical_tail: VerticalTail,
    pub landing_gear: LandingGear,
    pub engine: Engine,
    pub rotors: Rotors,
    pub reference_model: ReferenceModel,
}

impl AircraftSpecification {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }

    /// Reference weight of the regressions. Fighter/attack aircraft are sized
    /// at take-off mass minus half of the maximum fuel.
    pub fn design_gross_mass(&self) -> Mass {
        match self.category {
            Category::FighterAttack => {
                self.general.max_takeoff_mass - self.wing.fuel_capacity * 0.5
            }
            _ => self.general.max_takeoff_mass,
        }
    }

    /// Ultimate landing load factor.
    pub fn landing_load_factor(&self) -> f64 {
        1.5 * self.general.gear_load_factor
    }

    pub fn fuselage_wetted_area(&self) -> Area {
        let f = &self.fuselage;
        if f.wetted_area_override {
            f.wetted_area
        } else {
            // Elliptical top and side projections
            let top: Area = f.length * f.width * (PI / 4.0);
            let side: Area = f.length * f.height * (PI / 4.0);
            (top + side) * (3.4 / 2.0)
        }
    }

    pub fn atmosphere(&self) -> StandardAtmosphere {
        if self.general.sea_level_temperature.get::<kelvin>() > 0.0 {
            StandardAtmosphere::with_sea_level_temperature(self.general.sea_level_temperature)
        } else {
            StandardAtmosphere::default()
        }
    }

    pub fn cruise_dynamic_pressure(&self) -> Pressure {
        let rho = self.atmosphere().density(self.general.cruise_altitude);
        let v = self.general.cruise_speed;

        let q: Pressure = rho * v * v * 0.5;
        q
    }
}

impl AircraftSpecification {
    pub fn from_params(params: &ParameterMap) -> Result<Self> {
        let category = params.get_string_or("category", Category::default().as_ref())?;
        let category = Category::from_str(&category)
            .map_err(|_| anyhow!("Unknown aircraft category: {category}"))?;

        let cargo_door = params.get_string_or("fuselage.cargo_door", CargoDoor::None.as_ref())?;
        let cargo_door = CargoDoor::from_str(&cargo_door)
            .map_err(|_| anyhow!("Unknown cargo door variant: {cargo_door}"))?;

        let p = params.get_map_or_empty("general")?;
        let general = General {
            empty_mass: kilograms(p.get_float_or("empty_mass_kg", 0.0)?),
            max_takeoff_mass: kilograms(p.get_float_or("max_takeoff_mass_kg", 0.0)?),
            max_landing_mass: kilograms(p.get_float_or("max_landing_mass_kg", 0.0)?),
            ultimate_load_factor: p.get_float_or("ultimate_load_factor", 0.0)?,
            gear_load_factor: p.get_float_or("gear_load_factor", 0.0)?,
            stall_speed: meters_per_second(p.get_float_or("stall_speed_m_s", 0.0)?),
            cruise_speed: meters_per_second(p.get_float_or("cruise_speed_m_s", 0.0)?),
            cruise_altitude: meters(p.get_float_or("cruise_altitude_m", 0.0)?),
            max_mach: p.get_float_or("max_mach", 0.0)?,
            carrier_based: p.get_bool_or("carrier_based", false)?,
            sea_level_temperature: ThermodynamicTemperature::new::<kelvin>(
                p.get_float_or("sea_level_temperature_k", 0.0)?,
            ),
        };

        let p = params.get_map_or_empty("fuselage")?;
        let fuselage = Fuselage {
            length: meters(p.get_float_or("length_m", 0.0)?),
            width: meters(p.get_float_or("width_m", 0.0)?),
            height: meters(p.get_float_or("height_m", 0.0)?),
            wetted_area: square_meters(p.get_float_or("wetted_area_m2", 0.0)?),
            wetted_area_override: p.get_bool_or("wetted_area_override", false)?,
            cargo_door,
            cargo_ramp: p.get_bool_or("cargo_ramp", false)?,
            fuselage_mounted_gear: p.get_bool_or("fuselage_mounted_gear", false)?,
        };

        let p = params.get_map_or_empty("wing")?;
        let wing = Wing {
            area: square_meters(p.get_float_or("area_m2", 0.0)?),
            exposed_area: square_meters(p.get_float_or("exposed_area_m2", 0.0)?),
            span: meters(p.get_float_or("span_m", 0.0)?),
            sweep: degrees(p.get_float_or("sweep_deg", 0.0)?),
            root_chord: meters(p.get_float_or("root_chord_m", 0.0)?),
            tip_chord: meters(p.get_float_or("tip_chord_m", 0.0)?),
            aspect_ratio: p.get_float_or("aspect_ratio", 0.0)?,
            taper_ratio: p.get_float_or("taper_ratio", 0.0)?,
            thickness_ratio: p.get_float_or("thickness_ratio", 0.0)?,
            fuel_capacity: kilograms(p.get_float_or("fuel_capacity_kg", 0.0)?),
            control_surface_area: square_meters(p.get_float_or("control_surface_area_m2", 0.0)?),
            delta: p.get_bool_or("delta", false)?,
            variable_sweep: p.get_bool_or("variable_sweep", false)?,
        };

        let p = params.get_map_or_empty("horizontal_tail")?;
        let horizontal_tail = HorizontalTail {
            geometry: TailGeometry::from_params(p)?,
            fuselage_width: meters(p.get_float_or("fuselage_width_m", 0.0)?),
            moving: p.get_bool_or("moving", false)?,
            rolling: p.get_bool_or("rolling", false)?,
        };

        let p = params.get_map_or_empty("vertical_tail")?;
        let vertical_tail = VerticalTail {
            geometry: TailGeometry::from_params(p)?,
            t_tail: p.get_bool_or("t_tail", false)?,
            tail_rotor_mounted: p.get_bool_or("tail_rotor_mounted", false)?,
        };

        let p = params.get_map_or_empty("landing_gear")?;
        let landing_gear = LandingGear {
            main_strut_length: meters(p.get_float_or("main_strut_length_m", 0.0)?),
            nose_strut_length: meters(p.get_float_or("nose_strut_length_m", 0.0)?),
            main_wheels: count(p, "main_wheels")?,
            main_struts: count(p, "main_struts")?,
            nose_wheels: count(p, "nose_wheels")?,
            nose_struts: count(p, "nose_struts")?,
            fixed: p.get_bool_or("fixed", false)?,
            cross_beam: p.get_bool_or("cross_beam", false)?,
            tripod: p.get_bool_or("tripod", false)?,
            kneeling: p.get_bool_or("kneeling", false)?,
        };

        let p = params.get_map_or_empty("engine")?;
        let engine = Engine {
            mass: kilograms(p.get_float_or("mass_kg", 0.0)?),
            count: count(p, "count")?,
            propeller: p.get_bool_or("propeller", false)?,
            thrust_reverser: p.get_bool_or("thrust_reverser", false)?,
        };

        let p = params.get_map_or_empty("rotors")?;
        let rotors = Rotors {
            radius: meters(p.get_float_or("radius_m", 0.0)?),
            chord: meters(p.get_float_or("chord_m", 0.0)?),
            rpm: revolutions_per_minute(p.get_float_or("rpm", 0.0)?),
            gear_ratio: p.get_float_or("gear_ratio", 0.0)?,
            tip_velocity: meters_per_second(p.get_float_or("tip_velocity_m_s", 0.0)?),
            blade_count: count(p, "blade_count")?,
            tail_radius: meters(p.get_float_or("tail_radius_m", 0.0)?),
            power_limit: watts(p.get_float_or("power_limit_w", 0.0)?),
        };

        let p = params.get_map_or_empty("reference_model")?;
        let [x, y, z] = triple(p, "offset_m")?;
        let reference_model = ReferenceModel {
            offset: Vector3::from_meters(x, y, z),
            rotation: triple(p, "rotation_deg")?.map(degrees),
            scale: p.get_float_or("scale", 1.0)?,
        };

        Ok(Self {
            category,
            general,
            fuselage,
            wing,
            horizontal_tail,
            vertical_tail,
            landing_gear,
            engine,
            rotors,
            reference_model,
        })
    }

    pub fn write_params(&self, params: &mut ParameterMap) -> Result<(), parameters::Error> {
        use ParameterValue as V;

        params.insert("category", V::string(self.category.as_ref()))?;

        let g = &self.general;
        for (key, value) in [
            ("empty_mass_kg", V::float(g.empty_mass.get::<kilogram>())),
            ("max_takeoff_mass_kg", V::float(g.max_takeoff_mass.get::<kilogram>())),
            ("max_landing_mass_kg", V::float(g.max_landing_mass.get::<kilogram>())),
            ("ultimate_load_factor", V::float(g.ultimate_load_factor)),
            ("gear_load_factor", V::float(g.gear_load_factor)),
            ("stall_speed_m_s", V::float(g.stall_speed.get::<meter_per_second>())),
            ("cruise_speed_m_s", V::float(g.cruise_speed.get::<meter_per_second>())),
            ("cruise_altitude_m", V::float(g.cruise_altitude.get::<meter>())),
            ("max_mach", V::float(g.max_mach)),
            ("carrier_based", V::bool(g.carrier_based)),
            (
                "sea_level_temperature_k",
                V::float(g.sea_level_temperature.get::<kelvin>()),
            ),
        ] {
            params.insert(&format!("general.{key}"), value)?;
        }

        let f = &self.fuselage;
        for (key, value) in [
            ("length_m", V::float(f.length.get::<meter>())),
            ("width_m", V::float(f.width.get::<meter>())),
            ("height_m", V::float(f.height.get::<meter>())),
            ("wetted_area_m2", V::float(f.wetted_area.get::<square_meter>())),
            ("wetted_area_override", V::bool(f.wetted_area_override)),
            ("cargo_door", V::string(f.cargo_door.as_ref())),
            ("cargo_ramp", V::bool(f.cargo_ramp)),
            ("fuselage_mounted_gear", V::bool(f.fuselage_mounted_gear)),
        ] {
            params.insert(&format!("fuselage.{key}"), value)?;
        }

        let w = &self.wing;
        for (key, value) in [
            ("area_m2", V::float(w.area.get::<square_meter>())),
            ("exposed_area_m2", V::float(w.exposed_area.get::<square_meter>())),
            ("span_m", V::float(w.span.get::<meter>())),
            ("sweep_deg", V::float(w.sweep.get::<degree>())),
            ("root_chord_m", V::float(w.root_chord.get::<meter>())),
            ("tip_chord_m", V::float(w.tip_chord.get::<meter>())),
            ("aspect_ratio", V::float(w.aspect_ratio)),
            ("taper_ratio", V::float(w.taper_ratio)),
            ("thickness_ratio", V::float(w.thickness_ratio)),
            ("fuel_capacity_kg", V::float(w.fuel_capacity.get::<kilogram>())),
            (
                "control_surface_area_m2",
                V::float(w.control_surface_area.get::<square_meter>()),
            ),
            ("delta", V::bool(w.delta)),
            ("variable_sweep", V::bool(w.variable_sweep)),
        ] {
            params.insert(&format!("wing.{key}"), value)?;
        }

        let ht = &self.horizontal_tail;
        ht.geometry.write_params(params, "horizontal_tail")?;
        for (key, value) in [
            ("fuselage_width_m", V::float(ht.fuselage_width.get::<meter>())),
            ("moving", V::bool(ht.moving)),
            ("rolling", V::bool(ht.rolling)),
        ] {
            params.insert(&format!("horizontal_tail.{key}"), value)?;
        }

        let vt = &self.vertical_tail;
        vt.geometry.write_params(params, "vertical_tail")?;
        params.insert("vertical_tail.t_tail", V::bool(vt.t_tail))?;
        params.insert(
            "vertical_tail.tail_rotor_mounted",
            V::bool(vt.tail_rotor_mounted),
        )?;

        let lg = &self.landing_gear;
        for (key, value) in [
            ("main_strut_length_m", V::float(lg.main_strut_length.get::<meter>())),
            ("nose_strut_length_m", V::float(lg.nose_strut_length.get::<meter>())),
            ("main_wheels", V::int(lg.main_wheels.into())),
            ("main_struts", V::int(lg.main_struts.into())),
            ("nose_wheels", V::int(lg.nose_wheels.into())),
            ("nose_struts", V::int(lg.nose_struts.into())),
            ("fixed", V::bool(lg.fixed)),
            ("cross_beam", V::bool(lg.cross_beam)),
            ("tripod", V::bool(lg.tripod)),
            ("kneeling", V::bool(lg.kneeling)),
        ] {
            params.insert(&format!("landing_gear.{key}"), value)?;
        }

        let e = &self.engine;
        for (key, value) in [
            ("mass_kg", V::float(e.mass.get::<kilogram>())),
            ("count", V::int(e.count.into())),
            ("propeller", V::bool(e.propeller)),
            ("thrust_reverser", V::bool(e.thrust_reverser)),
        ] {
            params.insert(&format!("engine.{key}"), value)?;
        }

        let r = &self.rotors;
        for (key, value) in [
            ("radius_m", V::float(r.radius.get::<meter>())),
            ("chord_m", V::float(r.chord.get::<meter>())),
            ("rpm", V::float(r.rpm.get::<revolution_per_minute>())),
            ("gear_ratio", V::float(r.gear_ratio)),
            ("tip_velocity_m_s", V::float(r.tip_velocity.get::<meter_per_second>())),
            ("blade_count", V::int(r.blade_count.into())),
            ("tail_radius_m", V::float(r.tail_radius.get::<meter>())),
            ("power_limit_w", V::float(r.power_limit.get::<watt>())),
        ] {
            params.insert(&format!("rotors.{key}"), value)?;
        }

        let m = &self.reference_model;
        params.insert(
            "reference_model.offset_m",
            V::float_arr(&m.offset.as_meters()),
        )?;
        params.insert(
            "reference_model.rotation_deg",
            V::float_arr(&m.rotation.map(|a| a.get::<degree>())),
        )?;
        params.insert("reference_model.scale", V::float(m.scale))?;

        Ok(())
    }
}

impl TailGeometry {
    fn from_params(p: &ParameterMap) -> Result<Self, parameters::Error> {
        Ok(Self {
            area: square_meters(p.get_float_or("area_m2", 0.0)?),
            exposed_area: square_meters(p.get_float_or("exposed_area_m2", 0.0)?),
            span: meters(p.get_float_or("span_m", 0.0)?),
            sweep: degrees(p.get_float_or("sweep_deg", 0.0)?),
            root_chord: meters(p.get_float_or("root_chord_m", 0.0)?),
            tip_chord: meters(p.get_float_or("tip_chord_m", 0.0)?),
            aspect_ratio: p.get_float_or("aspect_ratio", 0.0)?,
            taper_ratio: p.get_float_or("taper_ratio", 0.0)?,
            thickness_ratio: p.get_float_or("thickness_ratio", 0.0)?,
            control_surface_area: square_meters(p.get_float_or("control_surface_area_m2", 0.0)?),
            arm: meters(p.get_float_or("arm_m", 0.0)?),
        })
    }

    fn write_params(
        &self,
        params: &mut ParameterMap,
        prefix: &str,
    ) -> Result<(), parameters::Error> {
        use ParameterValue as V;

        for (key, value) in [
            ("area_m2", V::float(self.area.get::<square_meter>())),
            ("exposed_area_m2", V::float(self.exposed_area.get::<square_meter>())),
            ("span_m", V::float(self.span.get::<meter>())),
            ("sweep_deg", V::float(self.sweep.get::<degree>())),
            ("root_chord_m", V::float(self.root_chord.get::<meter>())),
            ("tip_chord_m", V::float(self.tip_chord.get::<meter>())),
            ("aspect_ratio", V::float(self.aspect_ratio)),
            ("taper_ratio", V::float(self.taper_ratio)),
            ("thickness_ratio", V::float(self.thickness_ratio)),
            (
                "control_surface_area_m2",
                V::float(self.control_surface_area.get::<square_meter>()),
            ),
            ("arm_m", V::float(self.arm.get::<meter>())),
        ] {
            params.insert(&format!("{prefix}.{key}"), value)?;
        }

        Ok(())
    }
}

fn count(p: &ParameterMap, key: &str) -> Result<u32> {
    let v = p.get_int_or(key, 0)?;

    u32::try_from(v).map_err(|_| anyhow!("'{}.{key}' is not a valid count: {v}", p.path()))
}

/// Three-element float array, zero when missing.
pub(super) fn triple(p: &ParameterMap, key: &str) -> Result<[f64; 3]> {
    let v = p.get_float_arr_or(key, &[0.0; 3])?;

    <[f64; 3]>::try_from(v.as_slice())
        .map_err(|_| anyhow!("'{}.{key}' must have 3 elements, found {}", p.path(), v.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::parse_string;
    use crate::units::{imperial, knots};
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use uom::si::{area::square_foot, length::foot};

    #[test]
    fn test_design_gross_mass() {
        let mut spec = AircraftSpecification::new(Category::FighterAttack);
        spec.general.max_takeoff_mass = kilograms(10000.0);
        spec.wing.fuel_capacity = kilograms(2000.0);

        assert_relative_eq!(spec.design_gross_mass().get::<kilogram>(), 9000.0);

        for category in [
            Category::CargoTransport,
            Category::GeneralAviation,
            Category::Helicopter,
        ] {
            spec.category = category;
            assert_relative_eq!(spec.design_gross_mass().get::<kilogram>(), 10000.0);
        }
    }

    #[test]
    fn test_door_factor() {
        let mut f = Fuselage::default();
        assert_eq!(f.door_factor(), 1.0);

        f.cargo_door = CargoDoor::OneSide;
        assert_eq!(f.door_factor(), 1.06);
        f.cargo_ramp = true;
        assert_eq!(f.door_factor(), 1.12);

        f.cargo_door = CargoDoor::TwoSide;
        assert_eq!(f.door_factor(), 1.25);
        f.cargo_ramp = false;
        assert_eq!(f.door_factor(), 1.12);
    }

    #[test]
    fn test_wetted_area() {
        let mut spec = AircraftSpecification::default();
        spec.fuselage.length = meters(7.22);
        spec.fuselage.width = meters(1.1);
        spec.fuselage.height = meters(1.4);
        spec.fuselage.wetted_area = square_meters(26.43);

        let estimated = 3.4 * PI / 4.0 * (7.22 * 1.1 + 7.22 * 1.4) / 2.0;
        assert_relative_eq!(
            spec.fuselage_wetted_area().get::<square_meter>(),
            estimated,
            epsilon = 1e-9
        );

        spec.fuselage.wetted_area_override = true;
        assert_relative_eq!(spec.fuselage_wetted_area().get::<square_meter>(), 26.43);
        assert_relative_eq!(
            spec.fuselage_wetted_area().get::<square_foot>(),
            284.49,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_cruise_dynamic_pressure() {
        let mut spec = AircraftSpecification::new(Category::GeneralAviation);
        spec.general.cruise_speed = knots(124.0);
        spec.general.cruise_altitude = Length::new::<foot>(3000.0);

        // rho(914.4 m) = 1.1217 kg/m3
        let v = 124.0 * 1852.0 / 3600.0;
        let expected = 0.5 * 1.1217 * v * v;
        assert_relative_eq!(
            spec.cruise_dynamic_pressure().get::<uom::si::pressure::pascal>(),
            expected,
            max_relative = 1e-3
        );
        assert_relative_eq!(imperial::psf(spec.cruise_dynamic_pressure()), 47.7, epsilon = 0.1);
    }

    #[test]
    fn test_tip_velocity() {
        let mut rotors = Rotors::default();
        rotors.radius = meters(5.0);
        rotors.rpm = revolutions_per_minute(60.0);
        assert_relative_eq!(
            rotors.effective_tip_velocity().get::<meter_per_second>(),
            10.0 * PI
        );

        rotors.tip_velocity = meters_per_second(200.0);
        assert_relative_eq!(rotors.effective_tip_velocity().get::<meter_per_second>(), 200.0);
    }

    #[test]
    fn test_missing_fields_are_zero() {
        let str = "category = { val = \"general_aviation\", type = \"str\" }
        [wing]
        area_m2 = { val = 16.2, type = \"float\" }
        ";
        let params = parse_string(str.to_string()).unwrap();
        let spec = AircraftSpecification::from_params(&params).unwrap();

        let mut expected = AircraftSpecification::new(Category::GeneralAviation);
        expected.wing.area = square_meters(16.2);

        assert_eq!(spec, expected);
    }

    #[test]
    fn test_bad_category() {
        let str = "category = { val = \"airship\", type = \"str\" }";
        let params = parse_string(str.to_string()).unwrap();
        assert!(AircraftSpecification::from_params(&params).is_err());

        let str = "category = { val = 1.0, type = \"float\" }";
        let params = parse_string(str.to_string()).unwrap();
        assert!(AircraftSpecification::from_params(&params).is_err());
    }

    #[test]
    fn test_bad_counts() {
        let str = "landing_gear = { main_wheels = { val = -2, type = \"int\" } }";
        let params = parse_string(str.to_string()).unwrap();
        let err = AircraftSpecification::from_params(&params).unwrap_err();
        assert!(err.to_string().contains("main_wheels"), "{err}");

        let str = "rotors = { blade_count = { val = 8589934592, type = \"int\" } }";
        let params = parse_string(str.to_string()).unwrap();
        assert!(AircraftSpecification::from_params(&params).is_err());
    }

    #[test]
    fn test_reference_model_arrays() {
        let str = "reference_model = { offset_m = { val = [1.0, 2.0], type = \"float[]\" } }";
        let params = parse_string(str.to_string()).unwrap();
        let err = AircraftSpecification::from_params(&params).unwrap_err();
        assert!(err.to_string().contains("offset_m"), "{err}");

        let str = "
        [reference_model]
        rotation_deg = { val = [0.0, 90.0, 0.0], type = \"float[]\" }
        ";
        let params = parse_string(str.to_string()).unwrap();
        let spec = AircraftSpecification::from_params(&params).unwrap();
        let pitch = spec.reference_model.rotation[1].get::<degree>();
        assert_relative_eq!(pitch, 90.0, epsilon = 1e-12);
        assert_eq!(spec.reference_model.offset, Vector3::zero());
    }

    #[test]
    fn test_params_round_trip() {
        let mut spec = AircraftSpecification::new(Category::CargoTransport);
        spec.general.max_takeoff_mass = kilograms(70000.0);
        spec.general.cruise_speed = knots(310.0);
        spec.fuselage.cargo_door = CargoDoor::TwoSide;
        spec.fuselage.cargo_ramp = true;
        spec.wing.sweep = degrees(25.0);
        spec.horizontal_tail.geometry.arm = meters(14.5);
        spec.horizontal_tail.moving = true;
        spec.vertical_tail.t_tail = true;
        spec.landing_gear.main_wheels = 8;
        spec.landing_gear.kneeling = true;
        spec.engine.count = 4;
        spec.rotors.power_limit = watts(1.5e6);
        spec.reference_model.offset = Vector3::from_meters(1.0, 0.0, -0.5);
        spec.reference_model.rotation = [degrees(0.0), degrees(2.0), degrees(180.0)];

        let mut params = ParameterMap::default();
        spec.write_params(&mut params).unwrap();

        let text = params.to_toml_string().unwrap();
        let loaded = AircraftSpecification::from_params(&parse_string(text).unwrap()).unwrap();

        assert_eq!(loaded.category, spec.category);
        assert_eq!(loaded.fuselage, spec.fuselage);
        assert_eq!(loaded.landing_gear, spec.landing_gear);
        assert_eq!(loaded.engine, spec.engine);
        assert_eq!(loaded.vertical_tail.t_tail, true);
        assert_relative_eq!(
            loaded.wing.sweep.get::<degree>(),
            spec.wing.sweep.get::<degree>(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            loaded.general.cruise_speed.get::<meter_per_second>(),
            spec.general.cruise_speed.get::<meter_per_second>(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            loaded.reference_model.rotation[2].get::<degree>(),
            180.0,
            epsilon = 1e-9
        );
    }
}
