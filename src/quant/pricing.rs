//! # Pricing
//!
//! $$
//! V_0=e^{-rT}\,\mathbb E^{\mathbb Q}\!\left[\max(\pm(S_T-K),0)\right]
//! $$
//!
pub mod bsm;
pub mod montecarlo;
