use ndarray::Array1;
use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Normal;
use rand_distr::StandardNormal;

use crate::error::check_finite;
use crate::error::check_positive;
use crate::error::ParamError;
use crate::traits::ProcessExt;

/// Geometric Brownian motion path simulator.
///
/// One-step updates use the exact log-space solution
/// `S_i = S_{i-1} exp((mu - sigma^2/2) dt + sigma sqrt(dt) Z)`, so the step
/// scheme introduces no discretization bias. Trajectories are meant for
/// visual inspection, not pricing.
pub struct Gbm {
  /// Drift
  pub mu: f64,
  /// Volatility
  pub sigma: f64,
  /// Number of time steps; a trajectory has `n + 1` points
  pub n: usize,
  /// Initial value
  pub x0: f64,
  /// Time horizon in years
  pub t: Option<f64>,
  /// Seed for the random source; a fixed seed makes every draw deterministic
  pub seed: Option<u64>,
}

impl Gbm {
  pub fn new(
    mu: f64,
    sigma: f64,
    n: usize,
    x0: f64,
    t: Option<f64>,
    seed: Option<u64>,
  ) -> Result<Self, ParamError> {
    check_finite("mu", mu)?;
    check_positive("sigma", sigma)?;
    check_positive("x0", x0)?;
    if let Some(t) = t {
      check_positive("t", t)?;
    }
    Ok(Self {
      mu,
      sigma,
      n,
      x0,
      t,
      seed,
    })
  }

  /// Simulate `m` trajectories on a shared time grid.
  ///
  /// Returns a `(n + 1) x m` grid: row 0 is the initial value for every
  /// column, each later row one time step forward for every column. Columns
  /// are independent; all draws come from a single random stream, so a fixed
  /// seed reproduces the whole grid. `n = 0` or `m = 0` yield the degenerate
  /// single-row or zero-width grid.
  pub fn sample_grid(&self, m: usize) -> Array2<f64> {
    let mut grid = Array2::zeros((self.n + 1, m));
    grid.row_mut(0).fill(self.x0);
    if self.n == 0 || m == 0 {
      return grid;
    }

    let dt = self.dt();
    let drift = (self.mu - 0.5 * self.sigma.powi(2)) * dt;
    let vol = self.sigma * dt.sqrt();
    let mut rng = self.rng();
    for i in 1..=self.n {
      let z = Array1::<f64>::random_using(m, StandardNormal, &mut rng);
      for j in 0..m {
        grid[[i, j]] = grid[[i - 1, j]] * (drift + vol * z[j]).exp();
      }
    }
    tracing::debug!(steps = self.n, trajectories = m, "sampled path grid");
    grid
  }

  /// Time grid matching the rows of [`sample_grid`](Self::sample_grid).
  pub fn time_grid(&self) -> Array1<f64> {
    Array1::linspace(0.0, self.t.unwrap_or(1.0), self.n + 1)
  }

  pub fn dt(&self) -> f64 {
    self.t.unwrap_or(1.0) / self.n as f64
  }

  fn rng(&self) -> StdRng {
    match self.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    }
  }
}

impl ProcessExt for Gbm {
  type Output = Array1<f64>;

  /// Sample one trajectory of `n + 1` points starting at `x0`.
  fn sample(&self) -> Self::Output {
    let mut path = Array1::zeros(self.n + 1);
    path[0] = self.x0;
    if self.n == 0 {
      return path;
    }

    let dt = self.dt();
    let drift = (self.mu - 0.5 * self.sigma.powi(2)) * dt;
    let mut rng = self.rng();
    let gn = Array1::<f64>::random_using(self.n, Normal::new(0.0, dt.sqrt()).unwrap(), &mut rng);
    for i in 1..=self.n {
      path[i] = path[i - 1] * (drift + self.sigma * gn[i - 1]).exp();
    }
    path
  }
}

#[cfg(test)]
mod tests {
  use ndarray_stats::QuantileExt;

  use super::*;
  use crate::stochastic::M;
  use crate::stochastic::N;

  fn gbm(seed: Option<u64>) -> Gbm {
    Gbm::new(0.05, 0.2, N, 100.0, Some(1.0), seed).unwrap()
  }

  #[test]
  fn path_length_equals_n_plus_one() {
    assert_eq!(gbm(None).sample().len(), N + 1);
  }

  #[test]
  fn path_starts_with_x0() {
    assert_eq!(gbm(None).sample()[0], 100.0);
  }

  #[test]
  fn grid_shape_and_first_row() {
    let grid = gbm(Some(42)).sample_grid(M);
    assert_eq!(grid.shape(), &[N + 1, M]);
    for j in 0..M {
      assert_eq!(grid[[0, j]], 100.0);
    }
  }

  #[test]
  fn grid_entries_are_finite_and_positive() {
    let grid = gbm(Some(42)).sample_grid(M);
    assert!(grid.iter().all(|x| x.is_finite()));
    assert!(*grid.min().unwrap() > 0.0);
  }

  #[test]
  fn grid_columns_are_distinct_trajectories() {
    let grid = gbm(Some(42)).sample_grid(2);
    assert_ne!(grid[[1, 0]], grid[[1, 1]]);
  }

  #[test]
  fn fixed_seed_reproduces_the_grid() {
    let a = gbm(Some(7)).sample_grid(M);
    let b = gbm(Some(7)).sample_grid(M);
    assert_eq!(a, b);
  }

  #[test]
  fn degenerate_grids_are_allowed() {
    let flat = Gbm::new(0.05, 0.2, 0, 100.0, Some(1.0), None).unwrap();
    let grid = flat.sample_grid(3);
    assert_eq!(grid.shape(), &[1, 3]);
    assert!(grid.iter().all(|x| *x == 100.0));

    assert_eq!(gbm(None).sample_grid(0).shape(), &[N + 1, 0]);
  }

  #[test]
  fn time_grid_spans_the_horizon() {
    let t = gbm(None).time_grid();
    assert_eq!(t.len(), N + 1);
    assert_eq!(t[0], 0.0);
    assert_eq!(t[N], 1.0);
  }

  #[test]
  fn sample_par_draws_independent_paths() {
    let paths = gbm(None).sample_par(3);
    assert_eq!(paths.len(), 3);
    for path in &paths {
      assert_eq!(path.len(), N + 1);
      assert_eq!(path[0], 100.0);
    }
  }

  #[test]
  fn rejects_non_positive_parameters() {
    assert!(matches!(
      Gbm::new(0.05, 0.0, N, 100.0, Some(1.0), None),
      Err(ParamError::NonPositive { name: "sigma", .. })
    ));
    assert!(matches!(
      Gbm::new(0.05, 0.2, N, -1.0, Some(1.0), None),
      Err(ParamError::NonPositive { name: "x0", .. })
    ));
    assert!(matches!(
      Gbm::new(0.05, 0.2, N, 100.0, Some(0.0), None),
      Err(ParamError::NonPositive { name: "t", .. })
    ));
  }
}
