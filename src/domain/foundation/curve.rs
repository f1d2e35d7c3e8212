//! Curve - ordered (x, y) series handed to chart renderers.

use serde::{Deserialize, Serialize};

use super::{DomainError, ErrorCode};

/// A single plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of points.
///
/// Curves are recomputed from scratch on every model call; nothing is cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    /// Creates a curve from points in the given order.
    pub fn new(points: Vec<CurvePoint>) -> Self {
        Self { points }
    }

    /// Creates a curve by zipping parallel x and y sequences.
    pub fn from_xy(xs: impl IntoIterator<Item = f64>, ys: impl IntoIterator<Item = f64>) -> Self {
        Self {
            points: xs
                .into_iter()
                .zip(ys)
                .map(|(x, y)| CurvePoint::new(x, y))
                .collect(),
        }
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&CurvePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Returns true if x never decreases along the curve.
    pub fn is_sorted_by_x(&self) -> bool {
        self.points.windows(2).all(|w| w[0].x <= w[1].x)
    }

    /// Reorders points by ascending x. Equal x values keep their order.
    pub fn sort_by_x(&mut self) {
        self.points.sort_by(|a, b| a.x.total_cmp(&b.x));
    }

    /// Returns the same data with x mapped to log10(x), for log-scaled display.
    ///
    /// # Errors
    /// Fails with `NonPositiveLogAxis` if any x is zero or negative.
    pub fn to_log_x(&self) -> Result<Curve, DomainError> {
        if let Some(bad) = self.points.iter().find(|p| p.x <= 0.0 || p.x.is_nan()) {
            return Err(DomainError::new(
                ErrorCode::NonPositiveLogAxis,
                "Log-scaled x axis requires strictly positive x values",
            )
            .with_detail("x", bad.x.to_string()));
        }

        Ok(Curve {
            points: self
                .points
                .iter()
                .map(|p| CurvePoint::new(p.x.log10(), p.y))
                .collect(),
        })
    }
}

impl FromIterator<CurvePoint> for Curve {
    fn from_iter<I: IntoIterator<Item = CurvePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_xy_zips_parallel_sequences() {
        let curve = Curve::from_xy(vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]);
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.points()[1], CurvePoint::new(2.0, 20.0));
    }

    #[test]
    fn sort_by_x_orders_ascending() {
        let mut curve = Curve::from_xy(vec![3.0, 1.0, 2.0], vec![0.3, 0.1, 0.2]);
        assert!(!curve.is_sorted_by_x());

        curve.sort_by_x();

        assert!(curve.is_sorted_by_x());
        assert_eq!(curve.ys().collect::<Vec<_>>(), vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn to_log_x_keeps_y_values() {
        let curve = Curve::from_xy(vec![1.0, 10.0, 100.0], vec![0.1, 0.2, 0.3]);
        let log = curve.to_log_x().unwrap();

        assert_eq!(log.xs().collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
        assert_eq!(log.ys().collect::<Vec<_>>(), vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn to_log_x_rejects_zero() {
        let curve = Curve::from_xy(vec![0.0, 1.0], vec![0.0, 0.5]);
        let err = curve.to_log_x().unwrap_err();
        assert_eq!(err.code, ErrorCode::NonPositiveLogAxis);
    }

    #[test]
    fn empty_curve_is_sorted() {
        let curve = Curve::default();
        assert!(curve.is_empty());
        assert!(curve.is_sorted_by_x());
        assert!(curve.first().is_none());
    }

    #[test]
    fn curve_serializes_as_point_array() {
        let curve = Curve::from_xy(vec![1.0], vec![0.5]);
        let json = serde_json::to_string(&curve).unwrap();
        assert_eq!(json, r#"[{"x":1.0,"y":0.5}]"#);
    }
}
