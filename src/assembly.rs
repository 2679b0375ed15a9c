//! Global stiffness assembly
//!
//! Scatter-adds each element's 6x6 local stiffness into the 2N x 2N global
//! matrix, where N is the node count and each node owns two in-plane DOFs.

use log::debug;

use crate::elements::{dof_indices, Material, Triangle};
use crate::error::{CstError, CstResult};
use crate::math::{Mat, Mat6};

/// Builds the global stiffness matrix from a set of CST elements sharing one
/// material definition
#[derive(Debug, Clone)]
pub struct Assembler {
    material: Material,
    elements: Vec<Triangle>,
    local_stiffnesses: Vec<Mat6>,
}

impl Assembler {
    /// Create an empty assembler for the given material
    pub fn new(material: Material) -> Self {
        Self {
            material,
            elements: Vec::new(),
            local_stiffnesses: Vec::new(),
        }
    }

    /// Register an element and precompute its local stiffness
    ///
    /// # Errors
    /// Returns `InvalidGeometry` for a degenerate triangle; nothing is
    /// registered in that case.
    pub fn add_element(&mut self, coordinates: [[f64; 2]; 3]) -> CstResult<()> {
        let element = Triangle::new(coordinates)?;
        self.local_stiffnesses
            .push(element.local_stiffness(&self.material));
        self.elements.push(element);
        Ok(())
    }

    /// The shared material definition
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Registered elements in insertion order
    pub fn elements(&self) -> &[Triangle] {
        &self.elements
    }

    /// Number of registered elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no elements have been registered
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Assemble the global stiffness matrix
    ///
    /// `connectivity` maps each element's three local vertices to global node
    /// indices, in the same order the element's coordinates were given.
    /// Contributions from elements sharing a DOF accumulate additively.
    ///
    /// # Errors
    /// Returns `Configuration` when the connectivity count does not match the
    /// element count, or when a node index is out of range. No partial matrix
    /// is returned.
    pub fn assemble_global(
        &self,
        node_count: usize,
        connectivity: &[[usize; 3]],
    ) -> CstResult<Mat> {
        if connectivity.len() != self.elements.len() {
            return Err(CstError::Configuration(format!(
                "connectivity entries ({}) do not match registered elements ({})",
                connectivity.len(),
                self.elements.len()
            )));
        }

        for (index, nodes) in connectivity.iter().enumerate() {
            if let Some(&node) = nodes.iter().find(|&&n| n >= node_count) {
                return Err(CstError::Configuration(format!(
                    "element {index} references node {node}, but only {node_count} nodes exist"
                )));
            }
        }

        let n_dofs = 2 * node_count;
        let mut k_global = Mat::zeros(n_dofs, n_dofs);

        for (k_local, nodes) in self.local_stiffnesses.iter().zip(connectivity) {
            let dofs = dof_indices(*nodes);

            for i in 0..6 {
                for j in 0..6 {
                    k_global[(dofs[i], dofs[j])] += k_local[(i, j)];
                }
            }
        }

        // The local matrices are symmetric, so the accumulated matrix is too
        // up to floating-point roundoff in the dense products. Average with
        // the transpose to make the symmetry exact.
        let k_global = (&k_global + k_global.transpose()) * 0.5;

        debug!(
            "assembled global stiffness: {} elements, {} nodes, {} DOFs",
            self.elements.len(),
            node_count,
            n_dofs
        );

        Ok(k_global)
    }
}
