//! # Visualization
//!
//! $$
//! \{S_t^{(k)}\}\mapsto\text{line chart},\qquad \{S_T^{(i)}\}\mapsto\text{histogram}
//! $$
//!
use ndarray::Array1;
use ndarray::Array2;
use plotly::common::Mode;
use plotly::layout::Axis;
use plotly::Histogram;
use plotly::Layout;
use plotly::Plot;
use plotly::Scatter;

/// Line chart of simulated trajectories, one trace per grid column.
///
/// `t` is the time grid matching the rows of `grid`. The returned [`Plot`]
/// can be rendered with `show()` or `write_html()`; nothing is written here.
pub fn path_plot(grid: &Array2<f64>, t: &Array1<f64>) -> Plot {
  let mut plot = Plot::new();
  plot.set_layout(
    Layout::new()
      .title("Sample Geometric Brownian Motion Paths")
      .x_axis(Axis::new().title("Time (years)"))
      .y_axis(Axis::new().title("Asset price")),
  );

  let time = t.to_vec();
  for (j, column) in grid.columns().into_iter().enumerate() {
    let label = format!("path {}", j + 1);
    let trace = Scatter::new(time.clone(), column.to_vec())
      .mode(Mode::Lines)
      .name(label.as_str());
    plot.add_trace(trace);
  }

  plot
}

/// Histogram of simulated terminal prices.
pub fn terminal_histogram(terminal: &Array1<f64>) -> Plot {
  let mut plot = Plot::new();
  plot.set_layout(
    Layout::new()
      .title("Histogram of Terminal Asset Prices")
      .x_axis(Axis::new().title("Terminal price"))
      .y_axis(Axis::new().title("Frequency")),
  );
  plot.add_trace(
    Histogram::new(terminal.to_vec())
      .n_bins_x(50)
      .name("terminal prices"),
  );

  plot
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::quant::pricing::montecarlo::MonteCarloPricer;
  use crate::quant::PricingParams;
  use crate::stochastic::gbm::Gbm;

  #[test]
  fn path_plot_writes_html() {
    let gbm = Gbm::new(0.05, 0.2, 100, 100.0, Some(1.0), Some(42)).unwrap();
    let plot = path_plot(&gbm.sample_grid(5), &gbm.time_grid());

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample_paths.html");
    plot.write_html(&file);
    assert!(std::fs::metadata(&file).unwrap().len() > 0);
  }

  #[test]
  fn histogram_writes_html() {
    let pricer = MonteCarloPricer::from_params(&PricingParams::default());
    let (_, terminal) = pricer.price_with_samples().unwrap();
    let plot = terminal_histogram(&terminal);

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("terminal_prices.html");
    plot.write_html(&file);
    assert!(std::fs::metadata(&file).unwrap().len() > 0);
  }
}
