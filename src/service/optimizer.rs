//! Request handling around the solver.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use super::envelope::{OptimizeRequest, OptimizeResponse, METHOD};
use crate::error::AssignError;
use crate::sampler::{AuxSample, AuxiliarySampler, TeleportSampler};
use crate::solver::Solver;

/// Runs the solver, then the auxiliary sampler, and builds the response.
///
/// The sampler runs only after a successful solve. If it fails, the failure
/// is logged and [`AuxSample::placeholder`] is reported instead; the
/// assignment result is never affected.
///
/// # Examples
///
/// ```
/// use u_assign::service::{OptimizeRequest, Optimizer};
///
/// let optimizer = Optimizer::default();
/// let req = OptimizeRequest::new(
///     vec!["D1".into(), "D2".into(), "D3".into()],
///     vec!["R1".into(), "R2".into(), "R3".into()],
///     vec![vec![4.0, 1.0, 3.0], vec![2.0, 0.0, 5.0], vec![3.0, 2.0, 2.0]],
/// );
/// let res = optimizer.optimize(&req).unwrap();
/// assert!(res.success);
/// assert_eq!(res.total_cost, 5.0);
/// assert_eq!(res.quantum_sample, "teleported=1");
/// ```
#[derive(Clone)]
pub struct Optimizer {
    solver: Solver,
    sampler: Arc<dyn AuxiliarySampler>,
}

impl Optimizer {
    /// Creates an optimizer with the default [`TeleportSampler`].
    pub fn new(solver: Solver) -> Self {
        Self {
            solver,
            sampler: Arc::new(TeleportSampler::default()),
        }
    }

    /// Replaces the auxiliary sampler.
    pub fn with_sampler<S>(mut self, sampler: S) -> Self
    where
        S: AuxiliarySampler + 'static,
    {
        self.sampler = Arc::new(sampler);
        self
    }

    /// Returns the solver.
    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    /// Handles one optimize request.
    ///
    /// # Errors
    ///
    /// Returns the solver's [`AssignError`] unchanged.
    pub fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, AssignError> {
        let start = Instant::now();
        let solution = self
            .solver
            .solve(&request.drivers, &request.routes, &request.cost_matrix)?;
        let total_cost = solution.total_cost();

        let aux = match self.sampler.sample() {
            Ok(aux) => aux,
            Err(err) => {
                warn!(error = %err, "auxiliary sampler failed, reporting placeholder");
                AuxSample::placeholder()
            }
        };

        let execution_time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(
            drivers = request.drivers.len(),
            total_cost,
            execution_time_ms,
            "optimize request solved"
        );

        Ok(OptimizeResponse {
            success: true,
            method: METHOD.to_string(),
            assignments: solution.into_assignments(),
            total_cost,
            execution_time_ms,
            quantum_sample: aux.sample,
            quantum_shots: aux.shots,
            qaoa_iterations: aux.iterations,
            quantum_metadata: aux.metadata,
        })
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(Solver::default())
    }
}

impl std::fmt::Debug for Optimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Optimizer")
            .field("solver", &self.solver)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;
    use crate::sampler::{NeutralSampler, SamplerError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingSampler;

    impl AuxiliarySampler for FailingSampler {
        fn sample(&self) -> Result<AuxSample, SamplerError> {
            Err(SamplerError::Unavailable("emulator offline".to_string()))
        }
    }

    #[derive(Default)]
    struct CountingSampler {
        calls: Arc<AtomicUsize>,
    }

    impl AuxiliarySampler for CountingSampler {
        fn sample(&self) -> Result<AuxSample, SamplerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AuxSample::placeholder())
        }
    }

    fn request() -> OptimizeRequest {
        OptimizeRequest::new(
            vec!["D1".into(), "D2".into(), "D3".into()],
            vec!["R1".into(), "R2".into(), "R3".into()],
            vec![
                vec![4.0, 1.0, 3.0],
                vec![2.0, 0.0, 5.0],
                vec![3.0, 2.0, 2.0],
            ],
        )
    }

    #[test]
    fn test_optimize_envelope() {
        let res = Optimizer::default().optimize(&request()).expect("valid");
        assert!(res.success);
        assert_eq!(res.method, "hybrid_quantum_classical");
        assert_eq!(
            res.assignments,
            vec![
                Assignment::new("D1", "R2", 1.0),
                Assignment::new("D2", "R1", 2.0),
                Assignment::new("D3", "R3", 2.0),
            ]
        );
        assert_eq!(res.total_cost, 5.0);
        assert_eq!(res.quantum_sample, "teleported=1");
        assert_eq!(res.quantum_shots, 1);
        assert_eq!(res.qaoa_iterations, 0);
        assert_eq!(
            res.quantum_metadata.entries,
            vec![("teleported".to_string(), 1)]
        );
    }

    #[test]
    fn test_failing_sampler_uses_placeholder() {
        let optimizer = Optimizer::default().with_sampler(FailingSampler);
        let res = optimizer.optimize(&request()).expect("valid");
        assert_eq!(res.total_cost, 5.0);
        assert_eq!(res.quantum_sample, "unavailable");
        assert_eq!(res.quantum_shots, 0);
    }

    #[test]
    fn test_neutral_sampler() {
        let optimizer = Optimizer::default().with_sampler(NeutralSampler);
        let res = optimizer.optimize(&request()).expect("valid");
        assert_eq!(res.quantum_sample, "unavailable");
    }

    #[test]
    fn test_error_passes_through_without_sampling() {
        let sampler = CountingSampler::default();
        let calls = Arc::clone(&sampler.calls);
        let optimizer = Optimizer::default().with_sampler(sampler);

        let mut req = request();
        req.routes.pop();
        let err = optimizer.optimize(&req).unwrap_err();
        assert_eq!(
            err,
            AssignError::DimensionMismatch {
                drivers: 3,
                routes: 2
            }
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
