use itertools::Itertools;
use uom::si::{
    length::meter, mass_density::kilogram_per_cubic_meter, pressure::pascal,
    thermodynamic_temperature::kelvin, velocity::meter_per_second,
};

use crate::units::{Length, MassDensity, Pressure, ThermodynamicTemperature, Velocity};

pub trait Atmosphere {
    fn pressure(&self, altitude: Length) -> Pressure;
    fn density(&self, altitude: Length) -> MassDensity;
    fn temperature(&self, altitude: Length) -> ThermodynamicTemperature;
    fn speed_of_sound(&self, altitude: Length) -> Velocity;

    fn properties(&self, altitude: Length) -> AtmosphereProperties {
        AtmosphereProperties {
            pressure: self.pressure(altitude),
            density: self.density(altitude),
            temperature: self.temperature(altitude),
            speed_of_sound: self.speed_of_sound(altitude),
        }
    }
}

pub fn mach_number(speed: Velocity, speed_of_sound: Velocity) -> f64 {
    speed.get::<meter_per_second>() / speed_of_sound.get::<meter_per_second>()
}

#[derive(Debug, Clone)]
pub struct AtmosphereProperties {
    pub pressure: Pressure,
    pub density: MassDensity,
    pub temperature: ThermodynamicTemperature,
    pub speed_of_sound: Velocity,
}

const G_0: f64 = 9.80665;
const UNIVERSAL_GAS_CONSTANT: f64 = 8.31432;
const HEAT_CAPACITY_RATIO: f64 = 1.4;
const LAPSE_EPSILON: f64 = 1e-10;

/// Dry air composition: (molar fraction, molar mass in g/mol).
const AIR_COMPOSITION: [(f64, f64); 10] = [
    (0.78084, 28.0134),      // N2
    (0.209476, 31.9988),     // O2
    (0.00934, 39.948),       // Ar
    (0.000314, 44.00995),    // CO2
    (0.00001818, 20.183),    // Ne
    (0.00000524, 4.0026),    // He
    (0.00000114, 83.80),     // Kr
    (0.000000087, 131.30),   // Xe
    (0.000002, 16.04303),    // CH4
    (0.0000005, 2.01594),    // H2
];

/// Mean molar mass of dry air, kg/mol.
pub fn air_molar_mass() -> f64 {
    AIR_COMPOSITION
        .iter()
        .map(|(fraction, molar_mass)| fraction * molar_mass)
        .sum::<f64>()
        / 1000.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Band {
    altitude_m: f64,
    pressure_pa: f64,
    temperature_k: f64,
    lapse_k_m: f64,
}

const fn band(altitude_m: f64, pressure_pa: f64, temperature_k: f64, lapse_k_m: f64) -> Band {
    Band {
        altitude_m,
        pressure_pa,
        temperature_k,
        lapse_k_m,
    }
}

const STANDARD_BANDS: [Band; 7] = [
    band(0.0, 101325.0, 288.15, -0.0065),
    band(11000.0, 22632.06, 216.65, 0.0),
    band(20000.0, 5474.889, 216.65, 0.001),
    band(32000.0, 868.0187, 228.65, 0.0028),
    band(47000.0, 110.9063, 270.65, 0.0),
    band(51000.0, 66.93887, 270.65, -0.0028),
    band(71000.0, 3.956420, 214.65, -0.002),
];

impl Band {
    fn temperature_k(&self, alt_m: f64) -> f64 {
        self.temperature_k + self.lapse_k_m * (alt_m - self.altitude_m)
    }

    fn pressure_pa(&self, alt_m: f64, molar_mass: f64) -> f64 {
        let gm_r = G_0 * molar_mass / UNIVERSAL_GAS_CONSTANT;

        if self.lapse_k_m.abs() < LAPSE_EPSILON {
            self.pressure_pa * (-gm_r * (alt_m - self.altitude_m) / self.temperature_k).exp()
        } else {
            let t = self.temperature_k(alt_m);
            self.pressure_pa * (self.temperature_k / t).powf(gm_r / self.lapse_k_m)
        }
    }
}

/// Layered standard atmosphere, sea level to the base of the mesopause.
///
/// The sea-level temperature can be changed for non-standard days; it only
/// affects the lowest band.
#[derive(Debug, Clone)]
pub struct StandardAtmosphere {
    bands: [Band; 7],
    molar_mass: f64,
}

impl Default for StandardAtmosphere {
    fn default() -> Self {
        StandardAtmosphere {
            bands: STANDARD_BANDS,
            molar_mass: air_molar_mass(),
        }
    }
}

impl StandardAtmosphere {
    pub fn with_sea_level_temperature(temperature: ThermodynamicTemperature) -> Self {
        let mut atmosphere = Self::default();
        atmosphere.bands[0].temperature_k = temperature.get::<kelvin>();
        atmosphere
    }

    fn band(&self, alt_m: f64) -> &Band {
        self.bands
            .iter()
            .tuple_windows()
            .find(|(_, next)| alt_m < next.altitude_m)
            .map_or(&self.bands[self.bands.len() - 1], |(current, _)| current)
    }

    fn temperature_k(&self, alt_m: f64) -> f64 {
        self.band(alt_m).temperature_k(alt_m)
    }

    fn pressure_pa(&self, alt_m: f64) -> f64 {
        self.band(alt_m).pressure_pa(alt_m, self.molar_mass)
    }

    fn density_kg_m3(&self, alt_m: f64) -> f64 {
        self.pressure_pa(alt_m) * self.molar_mass
            / (UNIVERSAL_GAS_CONSTANT * self.temperature_k(alt_m))
    }
}

impl Atmosphere for StandardAtmosphere {
    fn pressure(&self, altitude: Length) -> Pressure {
        Pressure::new::<pascal>(self.pressure_pa(altitude.get::<meter>()))
    }

    fn density(&self, altitude: Length) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(self.density_kg_m3(altitude.get::<meter>()))
    }

    fn temperature(&self, altitude: Length) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.temperature_k(altitude.get::<meter>()))
    }

    fn speed_of_sound(&self, altitude: Length) -> Velocity {
        let specific_gas_constant = UNIVERSAL_GAS_CONSTANT / self.molar_mass;
        let t = self.temperature_k(altitude.get::<meter>());

        Velocity::new::<meter_per_second>(
            (HEAT_CAPACITY_RATIO * specific_gas_constant * t).sqrt(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::meters;
    use approx::assert_relative_eq;

    fn isa() -> StandardAtmosphere {
        StandardAtmosphere::default()
    }

    #[test]
    fn test_molar_mass() {
        assert_relative_eq!(air_molar_mass(), 0.0289644, epsilon = 1e-6);
    }

    #[test]
    fn test_isa_temperature() {
        let isa = isa();

        let t = |alt| isa.temperature(meters(alt)).get::<kelvin>();
        assert_relative_eq!(t(0.0), 288.15, epsilon = 0.01);
        assert_relative_eq!(t(304.8), 286.17, epsilon = 0.01);
        assert_relative_eq!(t(1219.2), 280.23, epsilon = 0.01);
        assert_relative_eq!(t(4572.0), 258.43, epsilon = 0.01);
        assert_relative_eq!(t(10668.0), 218.81, epsilon = 0.01);
        assert_relative_eq!(t(15000.0), 216.65, epsilon = 0.01);
        assert_relative_eq!(t(25000.0), 221.65, epsilon = 0.01);
    }

    #[test]
    fn test_isa_pressure() {
        let isa = isa();

        let p = |alt| isa.pressure(meters(alt)).get::<pascal>();
        assert_relative_eq!(p(0.0), 101325.0, epsilon = 1.0);
        assert_relative_eq!(p(304.8), 97717.0, epsilon = 1.0);
        assert_relative_eq!(p(1219.2), 87511.0, epsilon = 1.0);
        assert_relative_eq!(p(4572.0), 57182.0, epsilon = 1.0);
        assert_relative_eq!(p(10668.0), 23842.0, epsilon = 1.0);
    }

    #[test]
    fn test_isa_density() {
        let isa = isa();

        let rho = |alt| isa.density(meters(alt)).get::<kilogram_per_cubic_meter>();
        assert_relative_eq!(rho(0.0), 1.2250, epsilon = 0.0001);
        assert_relative_eq!(rho(304.8), 1.1896, epsilon = 0.0001);
        assert_relative_eq!(rho(1219.2), 1.0879, epsilon = 0.0001);
        assert_relative_eq!(rho(4572.0), 0.7708, epsilon = 0.0001);
        assert_relative_eq!(rho(10668.0), 0.3796, epsilon = 0.0001);
    }

    #[test]
    fn test_band_boundaries_are_continuous() {
        let isa = isa();

        for boundary in [11000.0, 20000.0, 32000.0, 47000.0, 51000.0, 71000.0] {
            let below = isa.pressure_pa(boundary - 1e-6);
            let above = isa.pressure_pa(boundary);
            assert_relative_eq!(below, above, max_relative = 1e-3);
        }
    }

    #[test]
    fn test_isothermal_band() {
        let isa = isa();

        // 11 km to 20 km: constant temperature, exponential pressure decay
        let p1 = isa.pressure_pa(12000.0);
        let p2 = isa.pressure_pa(13000.0);
        let p3 = isa.pressure_pa(14000.0);
        assert_relative_eq!(p2 / p1, p3 / p2, max_relative = 1e-12);
    }

    #[test]
    fn test_outside_bands() {
        let isa = isa();

        assert!(isa.density_kg_m3(-500.0) > isa.density_kg_m3(0.0));
        assert!(isa.density_kg_m3(90000.0) > 0.0);
        assert!(isa.density_kg_m3(90000.0) < isa.density_kg_m3(80000.0));
    }

    #[test]
    fn test_hot_day() {
        let t_sl = ThermodynamicTemperature::new::<kelvin>(303.15);
        let hot = StandardAtmosphere::with_sea_level_temperature(t_sl);
        let isa = isa();

        assert!(hot.density(meters(0.0)) < isa.density(meters(0.0)));
        assert_relative_eq!(
            hot.pressure(meters(0.0)).get::<pascal>(),
            101325.0,
            epsilon = 1e-6
        );
        // Only the first band is affected
        assert_eq!(hot.pressure_pa(15000.0), isa.pressure_pa(15000.0));
    }

    #[test]
    fn test_speed_of_sound() {
        let isa = isa();

        let a = isa.speed_of_sound(meters(0.0));
        assert_relative_eq!(a.get::<meter_per_second>(), 340.29, epsilon = 0.05);
        assert_relative_eq!(mach_number(a, a), 1.0);

        let props = isa.properties(meters(3000.0));
        assert_eq!(props.density, isa.density(meters(3000.0)));
    }
}
