//! Request and response envelopes.

use serde::{Deserialize, Serialize};

use crate::models::Assignment;
use crate::sampler::SampleMetadata;

/// Method label reported in every response.
pub const METHOD: &str = "hybrid_quantum_classical";

/// An optimize request: drivers, routes, and the driver × route cost matrix.
///
/// # Examples
///
/// ```
/// use u_assign::service::OptimizeRequest;
///
/// let req = OptimizeRequest::new(
///     vec!["D1".into(), "D2".into()],
///     vec!["R1".into(), "R2".into()],
///     vec![vec![1.0, 2.0], vec![2.0, 1.0]],
/// );
/// assert_eq!(req.drivers.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Driver identifiers; position is the row index.
    pub drivers: Vec<String>,
    /// Route identifiers; position is the column index.
    pub routes: Vec<String>,
    /// `cost_matrix[i][j]` is the cost of route `j` for driver `i`.
    pub cost_matrix: Vec<Vec<f64>>,
}

impl OptimizeRequest {
    /// Creates a new request.
    pub fn new(drivers: Vec<String>, routes: Vec<String>, cost_matrix: Vec<Vec<f64>>) -> Self {
        Self {
            drivers,
            routes,
            cost_matrix,
        }
    }
}

/// The response envelope for a successful optimize request.
///
/// `assignments` and `total_cost` come from the solver; the `quantum_*` and
/// `qaoa_iterations` fields come from the auxiliary sampler and carry no
/// information about the assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeResponse {
    /// Always `true`; failures are reported as errors instead.
    pub success: bool,
    /// See [`METHOD`].
    pub method: String,
    /// One assignment per driver, in driver input order.
    pub assignments: Vec<Assignment>,
    /// Sum of the assignment costs.
    pub total_cost: f64,
    /// Wall-clock time spent handling the request.
    pub execution_time_ms: u64,
    /// Auxiliary sample summary.
    pub quantum_sample: String,
    /// Auxiliary sample shot count.
    pub quantum_shots: u32,
    /// Auxiliary variational iteration count.
    pub qaoa_iterations: u32,
    /// Raw auxiliary entries.
    #[serde(default)]
    pub quantum_metadata: SampleMetadata,
}
