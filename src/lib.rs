//! Offline bakers for the lookup textures of an anisotropic Ashikhmin-Shirley
//! shader.
//!
//! The pipeline runs one way, file to file:
//! - [`half_vector`] tabulates lobe-distributed half-vectors for a pair of
//!   exponents `(nU, nV)`;
//! - [`brdf_lut`] integrates the split-sum scale and bias against that table;
//! - [`frame`] bakes the tangent-plane map and normal-map rotation quaternions,
//!   independent of the other two.
//!
//! Tables are written as 8-bit PNGs named after their parameters and are
//! never overwritten.

#[cfg(test)]
pub(crate) mod test_utils;

pub mod brdf_lut;
pub mod codec;
pub mod config;
pub mod error;
pub mod frame;
pub mod half_vector;
pub mod hammersley;
pub mod logging;
pub mod naming;
pub mod prompt;
pub mod sampling;
pub mod texture;
pub mod vec3;

pub use brdf_lut::{BrdfLookupEntry, BrdfLookupTable, ViewSampling};
pub use config::{BakeConfig, Shininess};
pub use error::{BakeError, Result};
pub use half_vector::HalfVectorTable;
pub use naming::ArtifactName;
pub use vec3::Vec3;
