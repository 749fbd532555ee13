//! # Quant
//!
//! $$
//! V_0=\mathbb E^{\mathbb Q}\!\left[e^{-rT}\,\Pi(S_T)\right]
//! $$
//!
use crate::error::check_finite;
use crate::error::check_positive;
use crate::error::ParamError;

pub mod pricing;

/// Default spot price
pub const S0: f64 = 100.0;
/// Default strike price
pub const K: f64 = 100.0;
/// Default time to maturity in years
pub const TAU: f64 = 1.0;
/// Default risk-free rate
pub const R: f64 = 0.05;
/// Default volatility
pub const SIGMA: f64 = 0.2;
/// Default number of simulated paths
pub const N_PATHS: usize = 10_000;

/// Option type.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum OptionType {
  #[default]
  Call,
  Put,
}

/// Pricing parameters for a European option.
///
/// A transient value type: build it, validate it, price with it, discard it.
/// The engine never mutates or caches it and each pricing call is an
/// independent statistical experiment.
///
/// The reference front-end clamps inputs to S, K in [50, 150], tau in
/// [0.1, 5], r in [0, 0.2], sigma in [0.1, 1] and n_paths in [1000, 50000];
/// the engine itself only enforces the positivity invariants via
/// [`validate`](Self::validate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingParams {
  /// Underlying price
  pub s: f64,
  /// Strike price
  pub k: f64,
  /// Time to maturity in years
  pub tau: f64,
  /// Risk-free rate
  pub r: f64,
  /// Volatility
  pub v: f64,
  /// Option type
  pub option_type: OptionType,
  /// Number of simulated paths
  pub n_paths: usize,
}

impl Default for PricingParams {
  fn default() -> Self {
    Self {
      s: S0,
      k: K,
      tau: TAU,
      r: R,
      v: SIGMA,
      option_type: OptionType::Call,
      n_paths: N_PATHS,
    }
  }
}

impl PricingParams {
  /// Reject parameters that would otherwise propagate NaNs through the
  /// sampling kernels.
  pub fn validate(&self) -> Result<(), ParamError> {
    check_positive("s", self.s)?;
    check_positive("k", self.k)?;
    check_positive("tau", self.tau)?;
    check_positive("v", self.v)?;
    check_finite("r", self.r)?;
    if self.n_paths == 0 {
      return Err(ParamError::NoPaths);
    }
    Ok(())
  }
}
