//! Plane-stress model - the main analysis container
//!
//! Holds the element geometry and connectivity for one structure and
//! orchestrates assembly, the constrained solve, and stress recovery. The
//! global matrix and result vectors are created fresh per `analyze` call;
//! nothing is persisted between analyses.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis;
use crate::assembly::Assembler;
use crate::elements::{Material, Triangle};
use crate::error::{CstError, CstResult};
use crate::results::{AnalysisResults, ElementStress, StructuralCheck};

/// Yield stress used when the material does not carry one (Pa)
pub const DEFAULT_YIELD_STRESS: f64 = 250e6;

/// A 2D plane-stress finite element model built from CST elements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneStressModel {
    /// Material shared by all elements
    pub material: Material,
    /// Element vertex coordinates in registration order
    geometry: Vec<[[f64; 2]; 3]>,
    /// Global node indices per element, matching the vertex order
    connectivity: Vec<[usize; 3]>,
}

impl PlaneStressModel {
    /// Create an empty model for the given material
    pub fn new(material: Material) -> Self {
        Self {
            material,
            geometry: Vec::new(),
            connectivity: Vec::new(),
        }
    }

    /// Register an element by its vertex coordinates and global node indices
    ///
    /// The node indices must list the same vertices, in the same order, as
    /// the coordinates. Registering geometry and connectivity together keeps
    /// the two lists in lockstep by construction.
    ///
    /// # Errors
    /// Returns `InvalidGeometry` for a degenerate (collinear) triangle;
    /// nothing is registered in that case.
    pub fn add_element(&mut self, coordinates: [[f64; 2]; 3], nodes: [usize; 3]) -> CstResult<()> {
        // Validate the geometry up front so a bad element is reported at the
        // call that introduced it, not at analysis time.
        Triangle::new(coordinates)?;
        self.geometry.push(coordinates);
        self.connectivity.push(nodes);
        Ok(())
    }

    /// Number of registered elements
    pub fn element_count(&self) -> usize {
        self.geometry.len()
    }

    /// Element connectivity in registration order
    pub fn connectivity(&self) -> &[[usize; 3]] {
        &self.connectivity
    }

    /// Run a linear static analysis
    ///
    /// `forces` is the dense global load vector of length `2 * node_count`;
    /// `fixed_dofs` lists the global DOF indices held at zero. The yield
    /// check uses the material's yield strength, falling back to
    /// [`DEFAULT_YIELD_STRESS`].
    pub fn analyze(
        &self,
        forces: &[f64],
        fixed_dofs: &[usize],
        node_count: usize,
    ) -> CstResult<AnalysisResults> {
        let yield_stress = self.material.fy.unwrap_or(DEFAULT_YIELD_STRESS);
        self.analyze_with_yield(forces, fixed_dofs, node_count, yield_stress)
    }

    /// Run a linear static analysis with an explicit yield stress
    ///
    /// Exceeding yield is reported through [`StructuralCheck::YieldExceeded`]
    /// on the returned results, never as an `Err`; the displacement, strain
    /// and stress fields are complete either way.
    pub fn analyze_with_yield(
        &self,
        forces: &[f64],
        fixed_dofs: &[usize],
        node_count: usize,
        yield_stress: f64,
    ) -> CstResult<AnalysisResults> {
        if self.geometry.is_empty() {
            return Err(CstError::Configuration(
                "model has no elements".to_string(),
            ));
        }
        if !(yield_stress > 0.0) {
            return Err(CstError::Configuration(format!(
                "yield stress must be positive, got {yield_stress}"
            )));
        }

        let mut assembler = Assembler::new(self.material);
        for coords in &self.geometry {
            assembler.add_element(*coords)?;
        }

        let k_global = assembler.assemble_global(node_count, &self.connectivity)?;
        let displacements = analysis::solve_displacements(&k_global, forces, fixed_dofs)?;

        let mut strains = Vec::with_capacity(self.geometry.len());
        let mut stresses = Vec::with_capacity(self.geometry.len());
        let mut max_von_mises = 0.0_f64;

        for (element, nodes) in assembler.elements().iter().zip(&self.connectivity) {
            let eps = analysis::element_strain(element, *nodes, &displacements);
            let sigma = analysis::element_stress(&self.material, &eps);

            let stress = ElementStress::from_components(sigma[0], sigma[1], sigma[2]);
            max_von_mises = max_von_mises.max(stress.von_mises);

            strains.push(eps);
            stresses.push(stress);
        }

        let check = StructuralCheck::evaluate(max_von_mises, yield_stress);
        match check {
            StructuralCheck::Safe { factor } => {
                debug!("structure is safe, factor of safety {factor:.2}");
            }
            StructuralCheck::YieldExceeded { max_von_mises, .. } => {
                warn!(
                    "structure will fail: maximum von Mises stress {:.2} MPa exceeds yield strength {:.2} MPa",
                    max_von_mises / 1e6,
                    yield_stress / 1e6
                );
            }
        }

        Ok(AnalysisResults {
            displacements,
            strains,
            stresses,
            max_von_mises,
            yield_stress,
            safety_factor: check.safety_factor(),
            check,
        })
    }

    /// Serialize the model definition to JSON
    pub fn to_json(&self) -> CstResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a model definition from JSON
    pub fn from_json(json: &str) -> CstResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
