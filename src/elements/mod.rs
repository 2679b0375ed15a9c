//! Structural elements module

mod material;
mod triangle;

pub use material::Material;
pub use triangle::{dof_indices, Triangle};
