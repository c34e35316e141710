//! Curve computation: sampling a function over a domain and mapping the
//! samples onto pixel coordinates.
//!
//! The pipeline is [`sample`] → [`rescale`] → pairing with columns, wrapped up
//! by [`to_curve`]. Nothing here knows about terminals; the UI hands in a
//! [`Viewport`] and draws the returned [`PlotCurve`].

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use ndarray::{Array1, ArrayView1};

use crate::catalog::Function;
use crate::error::{PlotError, Result};

/// Pixels between the canvas edge and the first/last sampled column.
pub const BORDER_INSET: u32 = 1;

/// Rows lost to the border on the vertical axis.
pub const VERTICAL_INSET: u32 = 3;

/// Largest width or height accepted from text.
pub const MAX_VIEWPORT_SIDE: u32 = 1 << 16;

/// Real interval the function is sampled over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// First sampled x.
    pub start: f64,
    /// Last sampled x.
    pub end: f64,
}

impl Domain {
    /// Create a new domain.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// True when the interval is empty or inverted.
    pub fn is_degenerate(&self) -> bool {
        !(self.start < self.end)
    }

    /// Report a degenerate range as an error the caller can show.
    pub fn check(&self) -> Result<()> {
        if self.is_degenerate() {
            return Err(PlotError::DegenerateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::new(-10.0, 10.0)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Drawable area in pixels, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a new viewport.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of samples that fit between the left and right border.
    pub fn sample_count(&self) -> usize {
        self.width.saturating_sub(2 * BORDER_INSET) as usize
    }

    /// Vertical extent the rescaled rows may occupy.
    pub fn usable_height(&self) -> f64 {
        f64::from(self.height.saturating_sub(VERTICAL_INSET))
    }

    /// True when there is room for the border and at least one sample.
    pub fn is_drawable(&self) -> bool {
        self.width > 2 && self.height > 2
    }

    /// Report an undrawable viewport as an error the caller can log.
    pub fn check(&self) -> Result<()> {
        if !self.is_drawable() {
            return Err(PlotError::DegenerateViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Viewport {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| PlotError::invalid_viewport(s))?;
        let width: u32 = w.trim().parse().map_err(|_| PlotError::invalid_viewport(s))?;
        let height: u32 = h.trim().parse().map_err(|_| PlotError::invalid_viewport(s))?;
        if width > MAX_VIEWPORT_SIDE || height > MAX_VIEWPORT_SIDE {
            return Err(PlotError::invalid_viewport(s));
        }
        Ok(Self::new(width, height))
    }
}

/// One vertex of the polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    /// Pixel column.
    pub column: u32,
    /// Pixel row, 0 at the top.
    pub row: f64,
}

/// Ordered vertices of the plotted polyline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotCurve {
    points: Vec<PlotPoint>,
}

impl PlotCurve {
    /// Vertices in drawing order.
    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when nothing should be drawn.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive vertex pairs; segment `i` joins point `i` to point `i + 1`.
    pub fn segments(&self) -> impl Iterator<Item = (PlotPoint, PlotPoint)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Write one `column row` line per vertex.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for p in &self.points {
            writeln!(out, "{} {:.3}", p.column, p.row)?;
        }
        Ok(())
    }
}

/// Evaluate `function` at `count` evenly spaced points from `domain.start`
/// to `domain.end` inclusive.
///
/// A count of zero yields an empty array; a count of one samples `start` only.
pub fn sample(function: Function, domain: Domain, count: usize) -> Array1<f64> {
    let last = count.saturating_sub(1);
    // Halved so the span cannot overflow for bounds near f64::MAX.
    let half_span = domain.end * 0.5 - domain.start * 0.5;

    Array1::from_shape_fn(count, |i| {
        let x = if i == 0 {
            domain.start
        } else if i == last {
            domain.end
        } else {
            let offset = half_span * (i as f64 / last as f64);
            domain.start + offset + offset
        };
        function.eval(x)
    })
}

/// Map values linearly onto pixel rows in `[0, height]`, largest value on
/// row 0.
///
/// Infinite values are pinned to the matching edge and left out of the
/// min/max. Finite values that are all equal sit on a flat line at
/// `height / 2`, as does NaN.
pub fn rescale(values: ArrayView1<'_, f64>, height: f64) -> Array1<f64> {
    let mid = height / 2.0;
    let (min, max) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    // Halved so the span cannot overflow for values near f64::MAX.
    let span = max * 0.5 - min * 0.5;
    let flat = !(min < max);

    values.mapv(|v| {
        if v == f64::INFINITY {
            0.0
        } else if v == f64::NEG_INFINITY {
            height
        } else if v.is_nan() || flat {
            mid
        } else {
            let normalized = (v * 0.5 - min * 0.5) / span;
            height - normalized * height
        }
    })
}

/// Compute the polyline for `function` over `domain` inside `viewport`.
pub fn to_curve(function: Function, domain: Domain, viewport: Viewport) -> PlotCurve {
    let count = viewport.sample_count();
    let height = viewport.usable_height();

    let rows = if domain.is_degenerate() {
        Array1::from_elem(count, height / 2.0)
    } else {
        rescale(sample(function, domain, count).view(), height)
    };

    let points = rows
        .iter()
        .zip(BORDER_INSET..)
        .map(|(&row, column)| PlotPoint { column, row })
        .collect();

    PlotCurve { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn sample_spans_domain_inclusive() {
        for &(a, b, n) in &[(-10.0, 10.0, 5), (0.0, 1.0, 2), (-3.5, 7.25, 997)] {
            let xs = sample(Function::Sin, Domain::new(a, b), n);
            assert_eq!(xs.len(), n);
            assert!(close(xs[0], a.sin()));
            assert!(close(xs[n - 1], b.sin()));
        }
    }

    #[test]
    fn sample_square_scenario() {
        let ys = sample(Function::Square, Domain::new(-10.0, 10.0), 5);
        assert_eq!(ys, array![100.0, 25.0, 0.0, 25.0, 100.0]);
    }

    #[test]
    fn sample_degenerate_counts() {
        assert!(sample(Function::Square, Domain::default(), 0).is_empty());

        let one = sample(Function::Cube, Domain::new(2.0, 9.0), 1);
        assert_eq!(one.len(), 1);
        assert!(close(one[0], 8.0));
    }

    #[test]
    fn rescale_square_scenario() {
        let values = array![100.0, 25.0, 0.0, 25.0, 100.0];
        let rows = rescale(values.view(), 100.0);
        // normalized [1, 0.25, 0, 0.25, 1]
        let expected = [0.0, 75.0, 100.0, 75.0, 0.0];
        for (r, e) in rows.iter().zip(expected) {
            assert!(close(*r, e), "{r} != {e}");
        }
    }

    #[test]
    fn rescale_puts_max_on_top_and_min_on_bottom() {
        let values = array![3.0, -7.5, 12.0, 0.0, 1e-3];
        let rows = rescale(values.view(), 41.0);
        assert!(close(rows[2], 0.0));
        assert!(close(rows[1], 41.0));
        assert!(rows.iter().all(|&r| (0.0..=41.0).contains(&r)));
    }

    #[test]
    fn rescale_constant_is_flat_midline() {
        let rows = rescale(array![2.5, 2.5, 2.5].view(), 20.0);
        assert_eq!(rows, array![10.0, 10.0, 10.0]);

        let empty = rescale(Array1::<f64>::zeros(0).view(), 20.0);
        assert!(empty.is_empty());
    }

    #[test]
    fn rescale_pins_infinities() {
        let values = array![f64::NEG_INFINITY, 0.0, 1.0, f64::INFINITY, f64::NAN];
        let rows = rescale(values.view(), 10.0);
        assert_eq!(rows.to_vec(), vec![10.0, 10.0, 0.0, 0.0, 5.0]);

        let no_finite_span = rescale(array![f64::INFINITY, 3.0, f64::NEG_INFINITY].view(), 10.0);
        assert_eq!(no_finite_span.to_vec(), vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn rescale_handles_huge_span() {
        let rows = rescale(array![-f64::MAX, f64::MAX].view(), 8.0);
        assert!(close(rows[0], 8.0));
        assert!(close(rows[1], 0.0));
    }

    #[test]
    fn sample_handles_domain_wider_than_f64_max() {
        let domain = Domain::new(-1e308, 1e308);
        let ys = sample(Function::Sin, domain, 5);
        assert!(ys.iter().all(|y| y.is_finite()));
        assert_eq!(ys[0], (-1e308f64).sin());
        assert_eq!(ys[4], 1e308f64.sin());

        let curve = to_curve(Function::Cube, domain, Viewport::new(7, 13));
        let rows: Vec<f64> = curve.points().iter().map(|p| p.row).collect();
        assert_eq!(rows, [10.0, 10.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn sample_endpoints_are_exact() {
        let ys = sample(Function::Square, Domain::new(0.1, 0.7), 7);
        assert_eq!(ys[0], 0.1 * 0.1);
        assert_eq!(ys[6], 0.7 * 0.7);
    }

    #[test]
    fn curve_columns_step_by_one() {
        let viewport = Viewport::new(83, 40);
        let curve = to_curve(Function::Cos, Domain::default(), viewport);
        assert_eq!(curve.len(), viewport.sample_count());
        assert_eq!(curve.points()[0].column, BORDER_INSET);
        for (a, b) in curve.segments() {
            assert_eq!(b.column, a.column + 1);
        }
        assert_eq!(curve.segments().count(), curve.len() - 1);
    }

    #[test]
    fn curve_empty_for_narrow_viewport() {
        for width in 0..=2 {
            let curve = to_curve(Function::Square, Domain::default(), Viewport::new(width, 50));
            assert!(curve.is_empty());
            assert_eq!(curve.segments().count(), 0);
        }
    }

    #[test]
    fn curve_for_zero_width_domain_is_flat() {
        let viewport = Viewport::new(12, 23);
        let curve = to_curve(Function::Sin, Domain::new(0.0, 0.0), viewport);
        assert_eq!(curve.len(), 10);
        assert!(curve.points().iter().all(|p| p.row == 10.0));
    }

    #[test]
    fn curve_for_inverted_domain_is_flat() {
        let curve = to_curve(Function::Exp, Domain::new(5.0, -5.0), Viewport::new(6, 13));
        assert_eq!(curve.len(), 4);
        assert!(curve.points().iter().all(|p| p.row == 5.0));
    }

    #[test]
    fn single_column_curve() {
        let curve = to_curve(Function::Square, Domain::default(), Viewport::new(3, 10));
        assert_eq!(curve.points(), &[PlotPoint { column: 1, row: 3.5 }]);
    }

    #[test]
    fn viewport_parsing() {
        assert_eq!("80x24".parse::<Viewport>().unwrap(), Viewport::new(80, 24));
        assert_eq!(" 7X103 ".parse::<Viewport>().unwrap(), Viewport::new(7, 103));
        assert!("80".parse::<Viewport>().is_err());
        assert!("ax24".parse::<Viewport>().is_err());
        assert!("-1x24".parse::<Viewport>().is_err());
        assert_eq!(
            "65536x65536".parse::<Viewport>().unwrap(),
            Viewport::new(MAX_VIEWPORT_SIDE, MAX_VIEWPORT_SIDE)
        );
        assert!(matches!(
            "4294967295x10".parse::<Viewport>(),
            Err(PlotError::InvalidViewport(_))
        ));
        assert!("10x65537".parse::<Viewport>().is_err());
    }

    #[test]
    fn degenerate_checks() {
        assert!(Domain::default().check().is_ok());
        assert!(matches!(
            Domain::new(1.0, 1.0).check(),
            Err(PlotError::DegenerateRange { .. })
        ));
        assert!(Viewport::new(3, 3).check().is_ok());
        assert!(matches!(
            Viewport::new(80, 2).check(),
            Err(PlotError::DegenerateViewport { width: 80, height: 2 })
        ));
    }

    #[test]
    fn writes_points_as_lines() {
        let curve = to_curve(Function::Square, Domain::default(), Viewport::new(7, 103));
        let mut out = Vec::new();
        curve.write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 0.000\n2 75.000\n3 100.000\n4 75.000\n5 0.000\n"
        );
    }
}
