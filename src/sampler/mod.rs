//! Auxiliary samplers attached to optimize responses.
//!
//! A sampler produces a short descriptive sample that the hosting layer
//! reports next to the assignment result. It never influences the solve.
//!
//! - [`TeleportSampler`] — Seeded three-qubit emulation of a teleportation circuit
//! - [`NeutralSampler`] — Always returns the placeholder sample

mod teleport;

pub use teleport::TeleportSampler;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of an auxiliary sampler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplerError {
    /// The backing collaborator could not be reached or is disabled.
    #[error("sampler unavailable: {0}")]
    Unavailable(String),
    /// The emulated state lost normalisation.
    #[error("degenerate state while measuring qubit {qubit}")]
    DegenerateState {
        /// Qubit being measured.
        qubit: usize,
    },
}

/// Raw measurement entries of one shot, reported for transparency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleMetadata {
    /// `(label, value)` pairs in the order they were recorded.
    pub entries: Vec<(String, i64)>,
}

/// Output of an auxiliary sampler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxSample {
    /// Human-readable summary, `label=value` of the first entry.
    pub sample: String,
    /// Number of shots executed.
    pub shots: u32,
    /// Variational iterations run (always zero for fixed circuits).
    pub iterations: u32,
    /// Entries of the first shot.
    pub metadata: SampleMetadata,
}

impl AuxSample {
    /// Sample substituted when no sampler result is available.
    pub fn placeholder() -> Self {
        Self {
            sample: "unavailable".to_string(),
            shots: 0,
            iterations: 0,
            metadata: SampleMetadata::default(),
        }
    }
}

/// An opaque collaborator producing an [`AuxSample`].
pub trait AuxiliarySampler: Send + Sync {
    /// Runs the sampler once.
    fn sample(&self) -> Result<AuxSample, SamplerError>;
}

/// Sampler that always reports [`AuxSample::placeholder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralSampler;

impl AuxiliarySampler for NeutralSampler {
    fn sample(&self) -> Result<AuxSample, SamplerError> {
        Ok(AuxSample::placeholder())
    }
}
