//! Result types for plane-stress analysis

use serde::{Deserialize, Serialize};

use crate::math::{Vec as FEVec, Vec3};

/// Stress state in a single element
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ElementStress {
    /// Normal stress in X direction
    pub sx: f64,
    /// Normal stress in Y direction
    pub sy: f64,
    /// Shear stress XY
    pub txy: f64,
    /// Von Mises equivalent stress
    pub von_mises: f64,
    /// Maximum principal stress
    pub s1: f64,
    /// Minimum principal stress
    pub s2: f64,
}

impl ElementStress {
    /// Create from stress components
    pub fn from_components(sx: f64, sy: f64, txy: f64) -> Self {
        let von_mises = (sx * sx - sx * sy + sy * sy + 3.0 * txy * txy).sqrt();

        // Principal stresses
        let s_avg = (sx + sy) / 2.0;
        let r = ((sx - sy).powi(2) / 4.0 + txy * txy).sqrt();
        let s1 = s_avg + r;
        let s2 = s_avg - r;

        Self {
            sx,
            sy,
            txy,
            von_mises,
            s1,
            s2,
        }
    }
}

/// Outcome of the yield check
///
/// Exceeding yield is an analysis result, not an error; the solver still
/// returns the full displacement and stress fields either way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StructuralCheck {
    /// Maximum von Mises stress is at or below the yield stress
    Safe {
        /// Safety factor, >= 1
        factor: f64,
    },
    /// Maximum von Mises stress exceeds the yield stress
    YieldExceeded {
        /// Safety factor, < 1
        factor: f64,
        /// The governing von Mises stress
        max_von_mises: f64,
    },
}

impl StructuralCheck {
    /// Classify a computed maximum stress against a yield stress
    pub fn evaluate(max_von_mises: f64, yield_stress: f64) -> Self {
        let factor = yield_stress / max_von_mises;
        if max_von_mises > yield_stress {
            Self::YieldExceeded {
                factor,
                max_von_mises,
            }
        } else {
            Self::Safe { factor }
        }
    }

    /// The safety factor regardless of outcome
    pub fn safety_factor(&self) -> f64 {
        match *self {
            Self::Safe { factor } => factor,
            Self::YieldExceeded { factor, .. } => factor,
        }
    }

    /// Whether the structure stays below yield
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe { .. })
    }
}

/// Complete results of one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Nodal displacement vector, length 2 * node count; fixed DOFs are zero
    pub displacements: FEVec,
    /// Per-element strain [eps_xx, eps_yy, gamma_xy] in element order
    pub strains: Vec<Vec3>,
    /// Per-element stress state in element order
    pub stresses: Vec<ElementStress>,
    /// Largest von Mises stress across all elements
    pub max_von_mises: f64,
    /// Yield stress used for the check
    pub yield_stress: f64,
    /// Safety factor = yield stress / max von Mises stress
    pub safety_factor: f64,
    /// Yield check outcome
    pub check: StructuralCheck,
}

impl AnalysisResults {
    /// Per-element von Mises stresses in element order
    pub fn von_mises(&self) -> Vec<f64> {
        self.stresses.iter().map(|s| s.von_mises).collect()
    }
}
