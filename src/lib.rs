//! # Monte Carlo European Option Pricing
//!
//! `mcpricer_rs` estimates the fair value of a European option by sampling
//! terminal asset prices under geometric Brownian motion, and simulates full
//! sample price trajectories for visualization.
//!
//! ## Modules
//!
//! | Module            | Description                                                              |
//! |-------------------|--------------------------------------------------------------------------|
//! | [`quant`]         | Option types, pricing parameters, Monte Carlo and closed-form pricers.   |
//! | [`stochastic`]    | Geometric Brownian motion path simulation.                               |
//! | [`traits`]        | Shared sampling and pricing contracts.                                   |
//! | [`visualization`] | Plotly helpers for sample paths and terminal-price histograms.           |
//! | [`error`]         | Parameter validation failures.                                           |
//!
//! ## Example Usage
//!
//! ```rust
//! use mcpricer_rs::quant::pricing::montecarlo::MonteCarloPricer;
//! use mcpricer_rs::quant::PricingParams;
//!
//! let pricer = MonteCarloPricer::from_params(&PricingParams::default());
//! let estimate = pricer.estimate().unwrap();
//! println!("price: {:.2} +/- {:.4}", estimate.price, estimate.std_error);
//! ```
//!
//! Every pricing call draws a fresh sample; identical parameters are
//! independent statistical experiments unless a seed is fixed.

pub mod error;
pub mod quant;
pub mod stochastic;
pub mod traits;
pub mod visualization;
