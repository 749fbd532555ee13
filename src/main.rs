use anyhow::Result;
use mcpricer_rs::quant::pricing::bsm::BSMPricer;
use mcpricer_rs::quant::pricing::montecarlo::MonteCarloPricer;
use mcpricer_rs::quant::PricingParams;
use mcpricer_rs::stochastic;
use mcpricer_rs::stochastic::gbm::Gbm;
use mcpricer_rs::traits::PricerExt;
use mcpricer_rs::visualization::path_plot;
use mcpricer_rs::visualization::terminal_histogram;

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .init();

  let params = PricingParams::default();
  let pricer = MonteCarloPricer::from_params(&params);

  let estimate = pricer.estimate()?;
  println!(
    "Estimated option price: €{:.2} (std error {:.4}, {} paths)",
    estimate.price, estimate.std_error, params.n_paths
  );

  let (mc_call, mc_put) = pricer.calculate_call_put()?;
  let bsm = BSMPricer::new(
    params.s,
    params.v,
    params.k,
    params.r,
    Some(params.tau),
    None,
    None,
    params.option_type,
  );
  let (bs_call, bs_put) = bsm.calculate_call_put()?;
  println!("Monte Carlo:   call €{mc_call:.2}, put €{mc_put:.2}");
  println!("Black-Scholes: call €{bs_call:.2}, put €{bs_put:.2}");

  let gbm = Gbm::new(params.r, params.v, stochastic::N, params.s, Some(params.tau), None)?;
  let grid = gbm.sample_grid(stochastic::M);

  terminal_histogram(&estimate.terminal).write_html("terminal_prices.html");
  path_plot(&grid, &gbm.time_grid()).write_html("sample_paths.html");
  println!("Wrote terminal_prices.html and sample_paths.html");

  Ok(())
}
