use ndarray::Array1;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::StandardNormal;
use statrs::distribution::LogNormal;

use crate::error::ParamError;
use crate::quant::OptionType;
use crate::quant::PricingParams;
use crate::traits::PricerExt;
use crate::traits::TimeExt;

/// Monte Carlo estimate of a European option price.
#[derive(Debug, Clone)]
pub struct McEstimate {
  /// Discounted price estimate
  pub price: f64,
  /// Standard error of the estimate
  pub std_error: f64,
  /// Simulated terminal prices, one per path
  pub terminal: Array1<f64>,
}

/// Monte Carlo pricer for European options.
///
/// Terminal prices are drawn from the exact law of geometric Brownian motion
/// at the horizon, `S_T = S exp((r - sigma^2/2) tau + sigma sqrt(tau) Z)`,
/// so the estimate carries no discretization error; its accuracy is purely
/// the `O(1/sqrt(N))` sampling error.
///
/// Inputs are validated on every pricing call. Past validation the kernel is
/// unguarded: extreme `sigma^2 * tau` overflows `exp` to infinity and the
/// estimate degrades to `inf`/NaN instead of failing.
pub struct MonteCarloPricer {
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
  /// Number of simulated paths
  pub n_paths: usize,
  /// Seed for the random source; `None` draws fresh entropy on every call
  pub seed: Option<u64>,
}

impl MonteCarloPricer {
  pub fn new(
    s: f64,
    v: f64,
    k: f64,
    r: f64,
    tau: Option<f64>,
    eval: Option<chrono::NaiveDate>,
    expiration: Option<chrono::NaiveDate>,
    option_type: OptionType,
    n_paths: usize,
    seed: Option<u64>,
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
      n_paths,
      seed,
    }
  }

  pub fn builder(s: f64, v: f64, k: f64, r: f64) -> MonteCarloPricerBuilder {
    MonteCarloPricerBuilder {
      s,
      v,
      k,
      r,
      tau: None,
      eval: None,
      expiration: None,
      option_type: OptionType::Call,
      n_paths: crate::quant::N_PATHS,
      seed: None,
    }
  }

  pub fn from_params(params: &PricingParams) -> Self {
    Self::new(
      params.s,
      params.v,
      params.k,
      params.r,
      Some(params.tau),
      None,
      None,
      params.option_type,
      params.n_paths,
      None,
    )
  }

  /// Draw the terminal price `S_T` for every path.
  pub fn sample_terminal(&self) -> Result<Array1<f64>, ParamError> {
    self.validate()?;
    Ok(self.draw_terminal(&mut self.rng()))
  }

  /// Price the configured option type, keeping the terminal sample.
  pub fn estimate(&self) -> Result<McEstimate, ParamError> {
    self.validate()?;
    let terminal = self.draw_terminal(&mut self.rng());
    let (price, std_error) = self.discounted_mean(&terminal, self.option_type);
    tracing::debug!(price, std_error, n_paths = self.n_paths, "monte carlo estimate");
    Ok(McEstimate {
      price,
      std_error,
      terminal,
    })
  }

  /// Price estimate together with the raw terminal sample, so the caller can
  /// build a histogram without re-simulating.
  pub fn price_with_samples(&self) -> Result<(f64, Array1<f64>), ParamError> {
    let estimate = self.estimate()?;
    Ok((estimate.price, estimate.terminal))
  }

  /// Exact distribution of the terminal price.
  ///
  /// `ln S_T` is normal with location `ln S + (r - sigma^2/2) tau` and scale
  /// `sigma sqrt(tau)`.
  pub fn terminal_distribution(&self) -> Result<LogNormal, ParamError> {
    self.validate()?;
    let tau = self.calculate_tau_in_years();
    let location = self.s.ln() + (self.r - 0.5 * self.v.powi(2)) * tau;
    let scale = self.v * tau.sqrt();
    Ok(LogNormal::new(location, scale).unwrap())
  }

  fn validate(&self) -> Result<(), ParamError> {
    PricingParams {
      s: self.s,
      k: self.k,
      tau: self.tau_or_from_dates(),
      r: self.r,
      v: self.v,
      option_type: self.option_type,
      n_paths: self.n_paths,
    }
    .validate()
  }

  fn rng(&self) -> StdRng {
    match self.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    }
  }

  fn draw_terminal(&self, rng: &mut StdRng) -> Array1<f64> {
    let tau = self.calculate_tau_in_years();
    let drift = (self.r - 0.5 * self.v.powi(2)) * tau;
    let vol = self.v * tau.sqrt();
    let z = Array1::<f64>::random_using(self.n_paths, StandardNormal, rng);
    z.mapv(|z| self.s * (drift + vol * z).exp())
  }

  fn discounted_mean(&self, terminal: &Array1<f64>, option_type: OptionType) -> (f64, f64) {
    let tau = self.calculate_tau_in_years();
    let df = (-self.r * tau).exp();
    let payoffs = terminal.mapv(|s_t| match option_type {
      OptionType::Call => (s_t - self.k).max(0.0),
      OptionType::Put => (self.k - s_t).max(0.0),
    });
    let n = payoffs.len() as f64;
    let mean = payoffs.mean().unwrap();
    let variance = if payoffs.len() > 1 {
      payoffs.mapv(|p| (p - mean).powi(2)).sum() / (n - 1.0)
    } else {
      0.0
    };
    (df * mean, df * (variance / n).sqrt())
  }
}

impl PricerExt for MonteCarloPricer {
  /// Call and put estimated from one shared terminal sample.
  fn calculate_call_put(&self) -> Result<(f64, f64), ParamError> {
    self.validate()?;
    let terminal = self.draw_terminal(&mut self.rng());
    let (call, _) = self.discounted_mean(&terminal, OptionType::Call);
    let (put, _) = self.discounted_mean(&terminal, OptionType::Put);
    Ok((call, put))
  }

  fn calculate_price(&self) -> Result<f64, ParamError> {
    Ok(self.estimate()?.price)
  }
}

impl TimeExt for MonteCarloPricer {
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

pub struct MonteCarloPricerBuilder {
  s: f64,
  v: f64,
  k: f64,
  r: f64,
  tau: Option<f64>,
  eval: Option<chrono::NaiveDate>,
  expiration: Option<chrono::NaiveDate>,
  option_type: OptionType,
  n_paths: usize,
  seed: Option<u64>,
}

impl MonteCarloPricerBuilder {
  pub fn tau(mut self, tau: f64) -> Self {
    self.tau = Some(tau);
    self
  }
  pub fn eval(mut self, eval: chrono::NaiveDate) -> Self {
    self.eval = Some(eval);
    self
  }
  pub fn expiration(mut self, expiration: chrono::NaiveDate) -> Self {
    self.expiration = Some(expiration);
    self
  }
  pub fn option_type(mut self, option_type: OptionType) -> Self {
    self.option_type = option_type;
    self
  }
  pub fn n_paths(mut self, n_paths: usize) -> Self {
    self.n_paths = n_paths;
    self
  }
  pub fn seed(mut self, seed: u64) -> Self {
    self.seed = Some(seed);
    self
  }
  pub fn build(self) -> MonteCarloPricer {
    MonteCarloPricer {
      s: self.s,
      v: self.v,
      k: self.k,
      r: self.r,
      tau: self.tau,
      eval: self.eval,
      expiration: self.expiration,
      option_type: self.option_type,
      n_paths: self.n_paths,
      seed: self.seed,
    }
  }
}
