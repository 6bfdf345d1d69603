pub mod geometry;
pub mod inertia;

pub use geometry::{Dimensions, FirstMomentOfMass, Vector3};
pub use inertia::{CentroidalInertia, InertiaTensor, cuboid_inertia, shift_to_reference};
