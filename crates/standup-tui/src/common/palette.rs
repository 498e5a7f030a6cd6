//! Chart colors.

use ratatui::style::Color;
use standup_core::aggregate::OccupancyBand;

/// Viridis anchor points, dark purple to yellow.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Red, yellow, green.
const RED_YELLOW_GREEN: [(u8, u8, u8); 3] = [(215, 48, 39), (254, 224, 139), (26, 152, 80)];

/// Viridis color for `t` in `0.0..=1.0`.
pub fn viridis(t: f64) -> Color {
    interpolate(&VIRIDIS, t)
}

/// Red at 0, yellow in the middle, green at 1.
pub fn red_yellow_green(t: f64) -> Color {
    interpolate(&RED_YELLOW_GREEN, t)
}

/// Position of `value` between `min` and `max`; 0.5 when the range is empty.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max - min <= f64::EPSILON {
        0.5
    } else {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    }
}

pub fn band_color(band: OccupancyBand) -> Color {
    match band {
        OccupancyBand::Low => Color::Red,
        OccupancyBand::Medium => Color::Yellow,
        OccupancyBand::High => Color::Green,
    }
}

fn interpolate(stops: &[(u8, u8, u8)], t: f64) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let last = stops.len() - 1;
    let scaled = t * last as f64;
    let i = (scaled.floor() as usize).min(last.saturating_sub(1));
    let frac = scaled - i as f64;
    let (a, b) = (stops[i], stops[(i + 1).min(last)]);
    let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * frac).round() as u8;
    Color::Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(viridis(0.0), Color::Rgb(68, 1, 84));
        assert_eq!(viridis(1.0), Color::Rgb(253, 231, 37));
        assert_eq!(red_yellow_green(0.0), Color::Rgb(215, 48, 39));
        assert_eq!(red_yellow_green(0.5), Color::Rgb(254, 224, 139));
        assert_eq!(red_yellow_green(1.0), Color::Rgb(26, 152, 80));
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(viridis(-3.0), viridis(0.0));
        assert_eq!(viridis(f64::NAN), viridis(0.0));
        assert_eq!(red_yellow_green(7.0), red_yellow_green(1.0));
    }

    #[test]
    fn test_normalize() {
        assert!((normalize(1_500.0, 1_000.0, 2_000.0) - 0.5).abs() < f64::EPSILON);
        assert!((normalize(5.0, 5.0, 5.0) - 0.5).abs() < f64::EPSILON);
    }
}
