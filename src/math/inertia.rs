use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use nalgebra::{Matrix3, SymmetricEigen};

use super::geometry::{Dimensions, Vector3};
use crate::units::{Area, Mass, MomentOfInertia, UnitSystem, kilogram_square_meters};

/// Inertia tensor about the aggregation reference point.
///
/// Off-diagonal entries follow the matrix sign convention: they already hold
/// the negated products of inertia. All nine entries are stored and kept
/// symmetric by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaTensor {
    m: [[MomentOfInertia; 3]; 3],
}

impl Default for InertiaTensor {
    fn default() -> Self {
        Self::zero()
    }
}

impl InertiaTensor {
    pub fn zero() -> Self {
        Self {
            m: [[kilogram_square_meters(0.0); 3]; 3],
        }
    }

    pub fn from_components(
        ixx: MomentOfInertia,
        iyy: MomentOfInertia,
        izz: MomentOfInertia,
        ixy: MomentOfInertia,
        ixz: MomentOfInertia,
        iyz: MomentOfInertia,
    ) -> Self {
        Self {
            m: [[ixx, ixy, ixz], [ixy, iyy, iyz], [ixz, iyz, izz]],
        }
    }

    pub fn ixx(&self) -> MomentOfInertia {
        self.m[0][0]
    }

    pub fn iyy(&self) -> MomentOfInertia {
        self.m[1][1]
    }

    pub fn izz(&self) -> MomentOfInertia {
        self.m[2][2]
    }

    pub fn ixy(&self) -> MomentOfInertia {
        self.m[0][1]
    }

    pub fn ixz(&self) -> MomentOfInertia {
        self.m[0][2]
    }

    pub fn iyz(&self) -> MomentOfInertia {
        self.m[1][2]
    }

    pub fn get(&self, row: usize, col: usize) -> MomentOfInertia {
        self.m[row][col]
    }

    pub fn trace(&self) -> MomentOfInertia {
        self.m[0][0] + self.m[1][1] + self.m[2][2]
    }

    pub fn is_symmetric(&self) -> bool {
        self.m[0][1] == self.m[1][0] && self.m[0][2] == self.m[2][0] && self.m[1][2] == self.m[2][1]
    }

    /// Tensor as a plain matrix in the requested unit system.
    pub fn to_matrix(&self, units: UnitSystem) -> Matrix3<f64> {
        Matrix3::from_fn(|r, c| units.inertia(self.m[r][c]))
    }

    /// Principal moments, ascending.
    pub fn principal_moments(&self) -> [MomentOfInertia; 3] {
        let eigen = SymmetricEigen::new(self.to_matrix(UnitSystem::Metric));

        let mut values = [
            eigen.eigenvalues[0],
            eigen.eigenvalues[1],
            eigen.eigenvalues[2],
        ];
        values.sort_by(f64::total_cmp);

        values.map(kilogram_square_meters)
    }
}

impl Add for InertiaTensor {
    type Output = InertiaTensor;

    fn add(mut self, rhs: InertiaTensor) -> InertiaTensor {
        self += rhs;
        self
    }
}

impl AddAssign for InertiaTensor {
    fn add_assign(&mut self, rhs: InertiaTensor) {
        for r in 0..3 {
            for c in 0..3 {
                self.m[r][c] += rhs.m[r][c];
            }
        }
    }
}

impl Sum for InertiaTensor {
    fn sum<I: Iterator<Item = InertiaTensor>>(iter: I) -> Self {
        iter.fold(InertiaTensor::zero(), |acc, t| acc + t)
    }
}

/// Inertia of a single body about its own centroid.
///
/// It can only be turned into an [`InertiaTensor`] through
/// [`shift_to_reference`], so a tensor is never shifted twice.
#[derive(Debug, Clone, PartialEq)]
pub struct CentroidalInertia(InertiaTensor);

impl CentroidalInertia {
    /// No self-inertia: the body only contributes through its offset.
    pub fn point_mass() -> Self {
        Self(InertiaTensor::zero())
    }

    pub fn tensor(&self) -> &InertiaTensor {
        &self.0
    }
}

/// Uniform-density box aligned with the body axes.
pub fn cuboid_inertia(mass: Mass, dimensions: &Dimensions) -> CentroidalInertia {
    let l = dimensions.length;
    let w = dimensions.width;
    let h = dimensions.height;

    let ixx: Area = w * w + h * h;
    let iyy: Area = l * l + h * h;
    let izz: Area = l * l + w * w;

    let zero = kilogram_square_meters(0.0);

    CentroidalInertia(InertiaTensor::from_components(
        mass * ixx / 12.0,
        mass * iyy / 12.0,
        mass * izz / 12.0,
        zero,
        zero,
        zero,
    ))
}

/// Position-coupling matrix `A(r)` of the parallel-axis theorem.
pub fn position_coupling(r: &Vector3) -> [[Area; 3]; 3] {
    let (x, y, z) = (r.x, r.y, r.z);

    [
        [y * y + z * z, -(x * y), -(x * z)],
        [-(x * y), x * x + z * z, -(y * z)],
        [-(x * z), -(y * z), x * x + y * y],
    ]
}

/// Parallel-axis theorem: `local + m·A(r)`.
pub fn shift_to_reference(
    mass: Mass,
    local: CentroidalInertia,
    position: &Vector3,
) -> InertiaTensor {
    let a = position_coupling(position);
    let mut tensor = local.0;

    for r in 0..3 {
        for c in 0..3 {
            let delta: MomentOfInertia = mass * a[r][c];
            tensor.m[r][c] += delta;
        }
    }

    tensor
}
