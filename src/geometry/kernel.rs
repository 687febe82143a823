//! Analytic point generators for regular polygons and stars, plus the
//! `"x,y x,y …"` point-list format consumed by polyline-style renderers.

use std::f64::consts::{PI, TAU};

use crate::foundation::{
    core::Point,
    error::{FramewrightError, FramewrightResult},
};

/// Vertices of a regular polygon with `points` corners.
///
/// Vertex `i` sits at angle `rotation + i * 2π / points` (rotation given in
/// degrees) on the circle of radius `r` around `(cx, cy)`. Coordinates are
/// rounded to 3 decimals.
pub fn regular_polygon(
    points: u32,
    cx: f64,
    cy: f64,
    r: f64,
    rotation: f64,
) -> FramewrightResult<Vec<Point>> {
    if points < 3 {
        return Err(FramewrightError::invalid_argument(format!(
            "regular polygon needs at least 3 points, got {points}"
        )));
    }
    let step = TAU / f64::from(points);
    let start = rotation.to_radians();
    Ok((0..points)
        .map(|i| polar(cx, cy, r, start + f64::from(i) * step))
        .collect())
}

/// Vertices of a star with `points` tips: `2 * points` vertices alternating
/// between `r_outer` (even indices) and `r_inner` (odd indices).
pub fn star(
    points: u32,
    cx: f64,
    cy: f64,
    r_outer: f64,
    r_inner: f64,
    rotation: f64,
) -> FramewrightResult<Vec<Point>> {
    if points < 2 {
        return Err(FramewrightError::invalid_argument(format!(
            "star needs at least 2 points, got {points}"
        )));
    }
    if !(r_outer > 0.0 && r_inner > 0.0) {
        return Err(FramewrightError::invalid_argument(format!(
            "star radii must be > 0, got outer={r_outer} inner={r_inner}"
        )));
    }
    let step = PI / f64::from(points);
    let start = rotation.to_radians();
    Ok((0..points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { r_outer } else { r_inner };
            polar(cx, cy, r, start + f64::from(i) * step)
        })
        .collect())
}

/// Serialize points as `"x,y x,y …"` with at most 3 decimals and no
/// trailing zeros.
pub fn points_to_polygon_attribute(points: &[Point]) -> String {
    let mut out = String::with_capacity(points.len() * 16);
    for (idx, p) in points.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(&format_coord(p.x));
        out.push(',');
        out.push_str(&format_coord(p.y));
    }
    out
}

/// Inverse of [`points_to_polygon_attribute`].
pub fn parse_polygon_attribute(attr: &str) -> FramewrightResult<Vec<Point>> {
    attr.split_whitespace()
        .map(|pair| {
            let (x, y) = pair.split_once(',').ok_or_else(|| {
                FramewrightError::invalid_argument(format!("malformed point '{pair}'"))
            })?;
            let parse = |v: &str| {
                v.parse::<f64>().map_err(|_| {
                    FramewrightError::invalid_argument(format!("malformed coordinate in '{pair}'"))
                })
            };
            Ok(Point::new(parse(x)?, parse(y)?))
        })
        .collect()
}

/// Format one coordinate: 3 decimals, trailing zeros and dot stripped.
pub fn format_coord(v: f64) -> String {
    // f64 Display already prints the shortest round-tripping form.
    format!("{}", round3(v))
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> Point {
    Point::new(round3(cx + r * angle.cos()), round3(cy + r * angle.sin()))
}

fn round3(v: f64) -> f64 {
    // `+ 0.0` folds -0 into 0 so it never prints as "-0".
    (v * 1000.0).round() / 1000.0 + 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/kernel.rs"]
mod tests;
