//! Teleportation circuit emulation.
//!
//! # Circuit
//!
//! ```text
//! src: X ──────────●── H ── M ═══╗
//! tmp: H ──●───────X─────── M ═╗ ║
//! tgt: ────X──────────────── X ─ Z ── M → "teleported"
//! ```
//!
//! The source qubit is prepared in |1⟩ and teleported to the target through
//! a Bell pair; classically controlled X/Z corrections make the final
//! measurement of the target read 1 on every shot, whatever the two
//! intermediate outcomes were.
//!
//! The gates used (X, Z, H, CX) keep amplitudes real, so the emulation
//! tracks a real state vector of 2³ amplitudes.
//!
//! # Reference
//!
//! Bennett, C.H. et al. (1993). "Teleporting an unknown quantum state via
//! dual classical and Einstein-Podolsky-Rosen channels",
//! *Physical Review Letters* 70(13), 1895-1899.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{AuxSample, AuxiliarySampler, SampleMetadata, SamplerError};

const QUBITS: usize = 3;
const SRC: usize = 0;
const TGT: usize = 1;
const TMP: usize = 2;
const RESULT_LABEL: &str = "teleported";

/// Real state vector over [`QUBITS`] qubits; bit `q` of an index is qubit `q`.
#[derive(Debug, Clone)]
struct StateVector {
    amplitudes: [f64; 1 << QUBITS],
}

impl StateVector {
    fn zero() -> Self {
        let mut amplitudes = [0.0; 1 << QUBITS];
        amplitudes[0] = 1.0;
        Self { amplitudes }
    }

    fn x(&mut self, q: usize) {
        let mask = 1 << q;
        for idx in (0..self.amplitudes.len()).filter(|i| i & mask == 0) {
            self.amplitudes.swap(idx, idx | mask);
        }
    }

    fn z(&mut self, q: usize) {
        let mask = 1 << q;
        for (idx, amp) in self.amplitudes.iter_mut().enumerate() {
            if idx & mask != 0 {
                *amp = -*amp;
            }
        }
    }

    fn h(&mut self, q: usize) {
        let mask = 1 << q;
        for idx in (0..self.amplitudes.len()).filter(|i| i & mask == 0) {
            let a = self.amplitudes[idx];
            let b = self.amplitudes[idx | mask];
            self.amplitudes[idx] = (a + b) * std::f64::consts::FRAC_1_SQRT_2;
            self.amplitudes[idx | mask] = (a - b) * std::f64::consts::FRAC_1_SQRT_2;
        }
    }

    fn cx(&mut self, control: usize, target: usize) {
        let (c, t) = (1 << control, 1 << target);
        for idx in (0..self.amplitudes.len()).filter(|i| i & c != 0 && i & t == 0) {
            self.amplitudes.swap(idx, idx | t);
        }
    }

    /// Measures qubit `q` in the computational basis and collapses the state.
    fn measure<R: Rng>(&mut self, q: usize, rng: &mut R) -> Result<bool, SamplerError> {
        let mask = 1 << q;
        let p_one: f64 = self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(idx, _)| idx & mask != 0)
            .map(|(_, a)| a * a)
            .sum();

        let outcome = rng.random::<f64>() < p_one;
        let p_outcome = if outcome { p_one } else { 1.0 - p_one };
        if p_outcome.is_nan() || p_outcome <= 0.0 {
            return Err(SamplerError::DegenerateState { qubit: q });
        }

        let norm = p_outcome.sqrt();
        for (idx, amp) in self.amplitudes.iter_mut().enumerate() {
            if (idx & mask != 0) == outcome {
                *amp /= norm;
            } else {
                *amp = 0.0;
            }
        }
        Ok(outcome)
    }
}

/// Runs one shot of the circuit and returns its recorded entries.
fn run_shot<R: Rng>(rng: &mut R) -> Result<Vec<(String, i64)>, SamplerError> {
    let mut state = StateVector::zero();
    state.x(SRC);

    state.h(TMP);
    state.cx(TMP, TGT);
    state.cx(SRC, TMP);
    state.h(SRC);
    if state.measure(SRC, rng)? {
        state.z(TGT);
    }
    if state.measure(TMP, rng)? {
        state.x(TGT);
    }

    let teleported = state.measure(TGT, rng)?;
    Ok(vec![(RESULT_LABEL.to_string(), i64::from(teleported))])
}

/// Emulates the teleportation circuit on a seeded RNG.
///
/// Shots share one RNG stream seeded with `seed`, so a sampler with a given
/// configuration always reports the same result.
///
/// # Examples
///
/// ```
/// use u_assign::sampler::{AuxiliarySampler, TeleportSampler};
///
/// let sample = TeleportSampler::default().sample().unwrap();
/// assert_eq!(sample.sample, "teleported=1");
/// assert_eq!(sample.shots, 1);
/// assert_eq!(sample.iterations, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeleportSampler {
    seed: u64,
    shots: u32,
}

impl TeleportSampler {
    /// Creates a sampler running `shots` shots from the given seed.
    pub fn new(seed: u64, shots: u32) -> Self {
        Self { seed, shots }
    }
}

impl Default for TeleportSampler {
    fn default() -> Self {
        Self::new(2, 1)
    }
}

impl AuxiliarySampler for TeleportSampler {
    fn sample(&self) -> Result<AuxSample, SamplerError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let shots = (0..self.shots)
            .map(|_| run_shot(&mut rng))
            .collect::<Result<Vec<_>, _>>()?;

        let Some(first) = shots.into_iter().next() else {
            return Ok(AuxSample {
                sample: "no_result".to_string(),
                shots: 0,
                iterations: 0,
                metadata: SampleMetadata::default(),
            });
        };

        let sample = match first.first() {
            Some((label, value)) => format!("{label}={value}"),
            None => "unknown".to_string(),
        };

        Ok(AuxSample {
            sample,
            shots: self.shots,
            iterations: 0,
            metadata: SampleMetadata { entries: first },
        })
    }
}
