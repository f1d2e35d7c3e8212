//! Strategy Module - Pure formula models for the strategy dials.
//!
//! # Components
//!
//! - `format_abbreviated` - k/m/bn/tn magnitude formatting for metric display
//! - `ScalePowerModel` - Terminal value from market scale and extractive power
//! - `NetworkEffectModel` - Surplus leader margin over user differentials
//! - `BrandingModel` - Logistic branding multiplier and its margin curve
//!
//! # Design Philosophy
//!
//! Every model is a set of stateless functions. Inputs come in as plain
//! structs, outputs are returned fresh, and precondition failures surface as
//! `DomainError` rather than as NaN or infinity.

mod branding;
mod network_effect;
mod number_formatter;
mod scale_power;

pub use branding::{
    BrandInputs, BrandingCurves, BrandingModel, BRANDING_SAMPLES, BRANDING_TIME_STEP,
    MIN_MAX_MULTIPLE,
};
pub use network_effect::{
    NetworkEffectModel, NetworkInputs, DEFAULT_RESOLUTION, MAX_RESOLUTION, MAX_UNDERDOG_SHARE,
};
pub use number_formatter::{format_abbreviated, format_percent, MAGNITUDE_SUFFIXES};
pub use scale_power::{ScaleInputs, ScalePowerModel, ScaleValue, BILLION};
