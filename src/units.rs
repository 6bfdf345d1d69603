//! Physical quantity types used across the crate.
//!
//! Every stored scalar with a physical dimension is a `uom` quantity. Raw
//! `f64` values in foreign units only exist inside [`imperial`], which is the
//! boundary used by the empirical regressions.

use uom::si::{
    ISQ, Quantity, SI,
    angle::{degree, radian},
    angular_velocity::revolution_per_minute,
    area::square_meter,
    length::{foot, inch, meter},
    mass::{kilogram, pound, slug},
    moment_of_inertia::kilogram_square_meter,
    power::watt,
    velocity::{knot, meter_per_second},
};
use uom::typenum::{P1, Z0};

pub use uom::si::f64::{
    Angle, AngularVelocity, Area, Length, Mass, MassDensity, MomentOfInertia, Power, Pressure,
    ThermodynamicTemperature, Velocity,
};

/// Mass times length (kg·m), the dimension of a first moment of mass.
pub type FirstMoment = Quantity<ISQ<P1, P1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

pub fn kilograms(v: f64) -> Mass {
    Mass::new::<kilogram>(v)
}

pub fn meters(v: f64) -> Length {
    Length::new::<meter>(v)
}

pub fn square_meters(v: f64) -> Area {
    Area::new::<square_meter>(v)
}

pub fn degrees(v: f64) -> Angle {
    Angle::new::<degree>(v)
}

pub fn meters_per_second(v: f64) -> Velocity {
    Velocity::new::<meter_per_second>(v)
}

pub fn knots(v: f64) -> Velocity {
    Velocity::new::<knot>(v)
}

pub fn revolutions_per_minute(v: f64) -> AngularVelocity {
    AngularVelocity::new::<revolution_per_minute>(v)
}

pub fn watts(v: f64) -> Power {
    Power::new::<watt>(v)
}

pub fn kilogram_square_meters(v: f64) -> MomentOfInertia {
    MomentOfInertia::new::<kilogram_square_meter>(v)
}

pub fn zero_first_moment() -> FirstMoment {
    kilograms(0.0) * meters(0.0)
}

pub fn cos(angle: Angle) -> f64 {
    angle.get::<radian>().cos()
}

pub fn tan(angle: Angle) -> f64 {
    angle.get::<radian>().tan()
}

/// Unit system used when presenting results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn mass(&self, m: Mass) -> f64 {
        match self {
            UnitSystem::Metric => m.get::<kilogram>(),
            UnitSystem::Imperial => m.get::<pound>(),
        }
    }

    /// Positions: meters in metric, inches in imperial.
    pub fn length(&self, l: Length) -> f64 {
        match self {
            UnitSystem::Metric => l.get::<meter>(),
            UnitSystem::Imperial => l.get::<inch>(),
        }
    }

    pub fn inertia(&self, i: MomentOfInertia) -> f64 {
        match self {
            UnitSystem::Metric => i.get::<kilogram_square_meter>(),
            UnitSystem::Imperial => imperial::slug_ft2(i),
        }
    }

    pub fn mass_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }

    pub fn length_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::Imperial => "in",
        }
    }

    pub fn inertia_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg*m^2",
            UnitSystem::Imperial => "slug*ft^2",
        }
    }
}

/// Conversions into the units the statistical regressions are published in.
pub mod imperial {
    use super::*;
    use uom::si::{
        area::square_foot, power::horsepower, pressure::pound_force_per_square_foot,
        velocity::foot_per_second,
    };

    pub fn lb(m: Mass) -> f64 {
        m.get::<pound>()
    }

    pub fn pounds(v: f64) -> Mass {
        Mass::new::<pound>(v)
    }

    pub fn ft(l: Length) -> f64 {
        l.get::<foot>()
    }

    pub fn inches(l: Length) -> f64 {
        l.get::<inch>()
    }

    pub fn ft2(a: Area) -> f64 {
        a.get::<square_foot>()
    }

    pub fn psf(p: Pressure) -> f64 {
        p.get::<pound_force_per_square_foot>()
    }

    pub fn ft_s(v: Velocity) -> f64 {
        v.get::<foot_per_second>()
    }

    pub fn hp(p: Power) -> f64 {
        p.get::<horsepower>()
    }

    pub fn rpm(w: AngularVelocity) -> f64 {
        w.get::<revolution_per_minute>()
    }

    pub fn slug_ft2(i: MomentOfInertia) -> f64 {
        let slug_kg = Mass::new::<slug>(1.0).get::<kilogram>();
        let ft_m = Length::new::<foot>(1.0).get::<meter>();

        i.get::<kilogram_square_meter>() / (slug_kg * ft_m * ft_m)
    }
}
