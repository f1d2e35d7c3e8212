//! Domain layer containing the formula models and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (fractions, curves, errors)
//! - `strategy` - Pure formula models (scale-power, network effect, branding)
//!   and the abbreviated number formatter

pub mod foundation;
pub mod strategy;
