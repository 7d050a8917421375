//! Hosting layer: optimize requests in, response envelopes out.
//!
//! Wraps a [`Solver`](crate::solver::Solver) with execution timing and an
//! [`AuxiliarySampler`](crate::sampler::AuxiliarySampler). Transport
//! adapters (HTTP server, FFI, WASM) all go through [`Optimizer`].

mod envelope;
mod optimizer;

pub use envelope::{OptimizeRequest, OptimizeResponse, METHOD};
pub use optimizer::Optimizer;
