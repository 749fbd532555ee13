//! # Traits
//!
//! $$
//! \text{Trait contracts: }\mathcal{A}:\text{parameters}\to\text{samples/prices}
//! $$
//!
use ndarray::parallel::prelude::*;

use crate::error::ParamError;

/// Process sampling interface.
pub trait ProcessExt: Send + Sync {
  type Output: Send;

  /// Draw one trajectory.
  fn sample(&self) -> Self::Output;

  /// Draw `m` trajectories in parallel, one per rayon task.
  fn sample_par(&self, m: usize) -> Vec<Self::Output> {
    (0..m).into_par_iter().map(|_| self.sample()).collect()
  }
}

/// Pricer trait.
pub trait PricerExt: TimeExt {
  /// Calculate the call and put price.
  fn calculate_call_put(&self) -> Result<(f64, f64), ParamError>;

  /// Calculate the price of the configured option type.
  fn calculate_price(&self) -> Result<f64, ParamError>;
}

pub trait TimeExt {
  fn tau(&self) -> Option<f64>;

  fn eval(&self) -> Option<chrono::NaiveDate> {
    None
  }

  fn expiration(&self) -> Option<chrono::NaiveDate> {
    None
  }

  /// Return tau directly, or compute it from eval/expiration dates.
  fn tau_or_from_dates(&self) -> f64 {
    if let Some(tau) = self.tau() {
      return tau;
    }
    match (self.eval(), self.expiration()) {
      (Some(e), Some(x)) => x.signed_duration_since(e).num_days() as f64 / 365.0,
      _ => panic!("either tau or both eval and expiration must be set"),
    }
  }

  /// Calculate tau in days.
  fn calculate_tau_in_days(&self) -> f64 {
    self.tau_or_from_dates() * 365.0
  }

  /// Calculate tau in years.
  fn calculate_tau_in_years(&self) -> f64 {
    self.tau_or_from_dates()
  }
}
