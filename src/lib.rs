//! Strategy Dials - Business-strategy formula calculator
//!
//! This crate evaluates a small set of closed-form strategy formulas (market
//! value accretion, network-effect surplus margin, branding price multiplier)
//! and prepares their results for display: abbreviated metrics and plottable
//! curves.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
