//! CST Solver - A native Rust plane-stress Finite Element Analysis library
//!
//! This library performs linear static analysis of 2D plane-stress bodies
//! discretized into three-node constant strain triangles (CST), supporting:
//! - Per-element stiffness formulation (geometry -> B matrix -> local stiffness)
//! - Global assembly over two in-plane DOFs per node
//! - Direct solve with fixed-DOF boundary conditions
//! - Strain/stress recovery, von Mises stress, and a safety factor against yield
//!
//! ## Example
//! ```rust
//! use cst_solver::prelude::*;
//!
//! // Unit square split into 4 triangles sharing a center node
//! let mut model = PlaneStressModel::new(Material::steel(0.01));
//! model.add_element([[0.0, 0.0], [1.0, 0.0], [0.5, 0.5]], [0, 1, 4]).unwrap();
//! model.add_element([[1.0, 1.0], [1.0, 0.0], [0.5, 0.5]], [2, 1, 4]).unwrap();
//! model.add_element([[1.0, 1.0], [0.0, 1.0], [0.5, 0.5]], [2, 3, 4]).unwrap();
//! model.add_element([[0.0, 0.0], [0.0, 1.0], [0.5, 0.5]], [0, 3, 4]).unwrap();
//!
//! // Loads and boundary conditions: 5 nodes, 10 DOFs
//! let mut forces = vec![0.0; 10];
//! forces[1] = 0.5;
//! forces[2] = 0.5;
//! let fixed_dofs = [0, 1, 6];
//!
//! // Analyze
//! let results = model.analyze(&forces, &fixed_dofs, 5).unwrap();
//!
//! assert!(results.check.is_safe());
//! println!("factor of safety: {:.2}", results.safety_factor);
//! ```

pub mod analysis;
pub mod assembly;
pub mod elements;
pub mod error;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{
        element_strain, element_stress, solve_displacements, von_mises,
    };
    pub use crate::assembly::Assembler;
    pub use crate::elements::{dof_indices, Material, Triangle};
    pub use crate::error::{CstError, CstResult};
    pub use crate::model::{PlaneStressModel, DEFAULT_YIELD_STRESS};
    pub use crate::results::{AnalysisResults, ElementStress, StructuralCheck};
}

pub use elements::{Material, Triangle};
pub use error::{CstError, CstResult};
pub use model::PlaneStressModel;
pub use results::{AnalysisResults, ElementStress, StructuralCheck};
