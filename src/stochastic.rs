//! # Stochastic
//!
//! $$
//! dS_t=\mu S_t\,dt+\sigma S_t\,dW_t
//! $$
//!
pub mod gbm;

/// Default number of time steps for path simulation
pub const N: usize = 100;
/// Default number of displayed sample trajectories
pub const M: usize = 5;
