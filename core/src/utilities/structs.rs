use serde::{Deserialize, Serialize};

pub type Point = Vec<f64>;

/// Per-component closeness test used for convergence:
/// `|new - old| <= atol + rtol * |old|`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub rtol: f64,
    pub atol: f64,
}
impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rtol: 1e-5,
            atol: 1e-8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterOptions {
    pub k: usize,
    pub seed_indices: Option<Vec<usize>>,
    pub max_steps: usize,
    pub tolerance: Tolerance,
}
impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            k: 2,
            seed_indices: None,
            max_steps: 300,
            tolerance: Tolerance::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterReport {
    pub centroid: Point,
    pub members: Vec<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub steps: usize,
    pub converged: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KMeansResult {
    pub clusters: Vec<ClusterReport>,
    pub labels: Vec<usize>,
    pub steps: usize,
    pub converged: bool,
}
