use statrs::distribution::ContinuousCDF;
use statrs::distribution::Normal;

use crate::error::check_finite;
use crate::error::check_positive;
use crate::error::ParamError;
use crate::quant::OptionType;
use crate::traits::PricerExt;
use crate::traits::TimeExt;

/// Black-Scholes-Merton closed-form pricer.
///
/// The analytic benchmark the Monte Carlo estimate converges to as the path
/// count grows.
pub struct BSMPricer {
  /// Underlying price
  pub s: f64,
  /// Volatility
  pub v: f64,
  /// Strike price
  pub k: f64,
  /// Risk-free rate
  pub r: f64,
  /// Time to maturity in years
  pub tau: Option<f64>,
  /// Evaluation date
  pub eval: Option<chrono::NaiveDate>,
  /// Expiration date
  pub expiration: Option<chrono::NaiveDate>,
  /// Option type
  pub option_type: OptionType,
}

impl BSMPricer {
  pub fn new(
    s: f64,
    v: f64,
    k: f64,
    r: f64,
    tau: Option<f64>,
    eval: Option<chrono::NaiveDate>,
    expiration: Option<chrono::NaiveDate>,
    option_type: OptionType,
  ) -> Self {
    Self {
      s,
      v,
      k,
      r,
      tau,
      eval,
      expiration,
      option_type,
    }
  }

  /// Calculate d1 and d2
  fn d1_d2(&self) -> (f64, f64) {
    let tau = self.calculate_tau_in_years();
    let d1 =
      (1.0 / (self.v * tau.sqrt())) * ((self.s / self.k).ln() + (self.r + 0.5 * self.v.powi(2)) * tau);
    let d2 = d1 - self.v * tau.sqrt();

    (d1, d2)
  }

  fn validate(&self) -> Result<(), ParamError> {
    check_positive("s", self.s)?;
    check_positive("k", self.k)?;
    check_positive("tau", self.tau_or_from_dates())?;
    check_positive("v", self.v)?;
    check_finite("r", self.r)
  }
}

impl PricerExt for BSMPricer {
  fn calculate_call_put(&self) -> Result<(f64, f64), ParamError> {
    self.validate()?;
    let (d1, d2) = self.d1_d2();
    let n = Normal::default();
    let tau = self.calculate_tau_in_years();
    let df = (-self.r * tau).exp();

    let call = self.s * n.cdf(d1) - self.k * df * n.cdf(d2);
    let put = -self.s * n.cdf(-d1) + self.k * df * n.cdf(-d2);

    Ok((call, put))
  }

  fn calculate_price(&self) -> Result<f64, ParamError> {
    let (call, put) = self.calculate_call_put()?;
    Ok(match self.option_type {
      OptionType::Call => call,
      OptionType::Put => put,
    })
  }
}

impl TimeExt for BSMPricer {
  fn tau(&self) -> Option<f64> {
    self.tau
  }

  fn eval(&self) -> Option<chrono::NaiveDate> {
    self.eval
  }

  fn expiration(&self) -> Option<chrono::NaiveDate> {
    self.expiration
  }
}
