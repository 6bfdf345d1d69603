use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use uom::si::length::meter;

use crate::units::{Area, FirstMoment, Length, Mass, kilograms, meters, zero_first_moment};

/// Body-axes position: x forward, y right, z down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: Length,
    pub y: Length,
    pub z: Length,
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::zero()
    }
}

impl Vector3 {
    pub fn new(x: Length, y: Length, z: Length) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::from_meters(0.0, 0.0, 0.0)
    }

    pub fn from_meters(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: meters(x),
            y: meters(y),
            z: meters(z),
        }
    }

    pub fn as_meters(&self) -> [f64; 3] {
        [
            self.x.get::<meter>(),
            self.y.get::<meter>(),
            self.z.get::<meter>(),
        ]
    }

    pub fn components(&self) -> [Length; 3] {
        [self.x, self.y, self.z]
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    pub fn dot(&self, other: &Vector3) -> Area {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector3) -> [Area; 3] {
        [
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        ]
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Mass> for Vector3 {
    type Output = FirstMomentOfMass;

    fn mul(self, mass: Mass) -> FirstMomentOfMass {
        FirstMomentOfMass {
            x: self.x * mass,
            y: self.y * mass,
            z: self.z * mass,
        }
    }
}

/// Bounding box of a component, used for its own inertia approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub length: Length,
    pub width: Length,
    pub height: Length,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::from_meters(0.0, 0.0, 0.0)
    }
}

impl Dimensions {
    pub fn new(length: Length, width: Length, height: Length) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    pub fn from_meters(length: f64, width: f64, height: f64) -> Self {
        Self::new(meters(length), meters(width), meters(height))
    }

    pub fn as_meters(&self) -> [f64; 3] {
        [
            self.length.get::<meter>(),
            self.width.get::<meter>(),
            self.height.get::<meter>(),
        ]
    }
}

/// Mass-weighted position accumulator (kg·m per axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstMomentOfMass {
    pub x: FirstMoment,
    pub y: FirstMoment,
    pub z: FirstMoment,
}

impl Default for FirstMomentOfMass {
    fn default() -> Self {
        Self::zero()
    }
}

impl FirstMomentOfMass {
    pub fn zero() -> Self {
        Self {
            x: zero_first_moment(),
            y: zero_first_moment(),
            z: zero_first_moment(),
        }
    }

    /// Center of mass for the given accumulated mass. Zero mass yields the
    /// origin.
    pub fn center_of_mass(&self, total_mass: Mass) -> Vector3 {
        if total_mass > kilograms(0.0) {
            Vector3::new(self.x / total_mass, self.y / total_mass, self.z / total_mass)
        } else {
            Vector3::zero()
        }
    }
}

impl Add for FirstMomentOfMass {
    type Output = FirstMomentOfMass;

    fn add(self, rhs: FirstMomentOfMass) -> FirstMomentOfMass {
        FirstMomentOfMass {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign for FirstMomentOfMass {
    fn add_assign(&mut self, rhs: FirstMomentOfMass) {
        *self = *self + rhs;
    }
}
