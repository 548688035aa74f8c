//! Pure geometry for the SVG charts
//!
//! Everything here is plain math over f64 so it can be unit tested on
//! the host; the components in the parent module only do rendering.

/// A point on a circle. Angles are degrees, 0 at 12 o'clock, clockwise.
pub fn polar_point(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = (angle_deg - 90.0).to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Start/end angles (degrees) for each value, proportional to its share
/// of the total. Zero or negative totals yield an empty layout.
pub fn pie_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = 0.0;
    values
        .iter()
        .map(|v| {
            let share = if *v > 0.0 { v / total } else { 0.0 };
            let start = angle;
            angle += share * 360.0;
            (start, angle)
        })
        .collect()
}

/// SVG path for one pie slice (a filled wedge from the center).
pub fn pie_slice_path(cx: f64, cy: f64, r: f64, start_deg: f64, end_deg: f64) -> String {
    // A 360-degree arc collapses to nothing in SVG; nudge it under a full turn
    let sweep = (end_deg - start_deg).min(359.99);
    let end_deg = start_deg + sweep;

    let (x1, y1) = polar_point(cx, cy, r, start_deg);
    let (x2, y2) = polar_point(cx, cy, r, end_deg);
    let large_arc = if sweep > 180.0 { 1 } else { 0 };

    format!(
        "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
    )
}

/// Rounds a data maximum up to a "nice" axis bound (1/2/5 times a power
/// of ten). Returns 1.0 for non-positive input so scales stay finite.
pub fn nice_max(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Maps `value` in [0, domain_max] onto [0, range]. Values are clamped.
pub fn scale_linear(value: f64, domain_max: f64, range: f64) -> f64 {
    if domain_max <= 0.0 {
        return 0.0;
    }
    (value / domain_max).clamp(0.0, 1.0) * range
}

/// SVG points attribute for a line series plotted left to right inside
/// a w*h box (y axis grows downward).
pub fn polyline_points(values: &[f64], w: f64, h: f64, domain_max: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let step = if values.len() > 1 {
        w / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = step * i as f64;
            let y = h - scale_linear(*v, domain_max, h);
            format!("{:.2},{:.2}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Vertices of a radar polygon: one spoke per value, evenly spaced,
/// radius proportional to value / full_mark.
pub fn radar_polygon(values: &[f64], full_mark: f64, cx: f64, cy: f64, r: f64) -> String {
    if values.is_empty() || full_mark <= 0.0 {
        return String::new();
    }
    let step = 360.0 / values.len() as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let radius = r * (v / full_mark).clamp(0.0, 1.0);
            let (x, y) = polar_point(cx, cy, radius, step * i as f64);
            format!("{:.2},{:.2}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_polar_point_cardinal_directions() {
        let (x, y) = polar_point(50.0, 50.0, 40.0, 0.0);
        assert!(close(x, 50.0) && close(y, 10.0));
        let (x, y) = polar_point(50.0, 50.0, 40.0, 90.0);
        assert!(close(x, 90.0) && close(y, 50.0));
        let (x, y) = polar_point(50.0, 50.0, 40.0, 180.0);
        assert!(close(x, 50.0) && close(y, 90.0));
    }

    #[test]
    fn test_pie_angles_are_proportional_and_contiguous() {
        let angles = pie_angles(&[1.0, 1.0, 2.0]);
        assert_eq!(angles.len(), 3);
        assert!(close(angles[0].0, 0.0) && close(angles[0].1, 90.0));
        assert!(close(angles[1].0, 90.0) && close(angles[1].1, 180.0));
        assert!(close(angles[2].0, 180.0) && close(angles[2].1, 360.0));
    }

    #[test]
    fn test_pie_angles_degenerate_input() {
        assert!(pie_angles(&[]).is_empty());
        assert!(pie_angles(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_pie_slice_path_large_arc_flag() {
        let minor = pie_slice_path(50.0, 50.0, 40.0, 0.0, 90.0);
        assert!(minor.contains(" 0 1 "));
        let major = pie_slice_path(50.0, 50.0, 40.0, 0.0, 270.0);
        assert!(major.contains(" 1 1 "));
    }

    #[test]
    fn test_nice_max() {
        assert!(close(nice_max(7.3), 10.0));
        assert!(close(nice_max(42.0), 50.0));
        assert!(close(nice_max(100.0), 100.0));
        assert!(close(nice_max(1350.0), 2000.0));
        assert!(close(nice_max(0.0), 1.0));
    }

    #[test]
    fn test_scale_linear_clamps() {
        assert!(close(scale_linear(50.0, 100.0, 200.0), 100.0));
        assert!(close(scale_linear(150.0, 100.0, 200.0), 200.0));
        assert!(close(scale_linear(-5.0, 100.0, 200.0), 0.0));
        assert!(close(scale_linear(5.0, 0.0, 200.0), 0.0));
    }

    #[test]
    fn test_polyline_points_spacing() {
        let points = polyline_points(&[0.0, 50.0, 100.0], 200.0, 100.0, 100.0);
        assert_eq!(points, "0.00,100.00 100.00,50.00 200.00,0.00");
    }

    #[test]
    fn test_radar_polygon_vertex_count() {
        let points = radar_polygon(&[80.0, 90.0, 70.0, 85.0, 75.0], 100.0, 50.0, 50.0, 40.0);
        assert_eq!(points.split(' ').count(), 5);
        assert!(radar_polygon(&[], 100.0, 50.0, 50.0, 40.0).is_empty());
    }
}
