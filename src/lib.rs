//! Projective geometric algebra for 3D Euclidean space.

#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(clippy::cast_lossless)]

#[macro_use]
mod macros;

pub mod angle;
pub mod ease;
pub mod flat;
#[cfg(feature = "fuzzing")]
pub mod fuzzing;
pub mod motor;
pub mod multivector;
pub mod num;
pub mod rotor;
pub mod tolerance;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use ease::{Curve, Direction, Easing};
pub use flat::{Line3, Plane3, Point3};
pub use motor::{Motor3, ScrewCoordinates, Transformable};
pub use multivector::{Basis, Mvec3};
pub use num::Float;
pub use rotor::Rotor3;
pub use vector::{Vec2, Vec3, Vec4};
