//! Shared helpers for feature slices and overlays.

pub mod fields;
pub mod palette;
pub mod text;

pub use fields::{
    Choice, DateField, FocusRing, FormField, FormKey, MultiChoice, Slider, Stepper, TextField,
    TimeField, Unit,
};
pub use text::{join_names, truncate_with_ellipsis};

/// Moves a list selection by `delta`, clamped to `0..len`.
pub fn step_selection(selected: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    selected
        .min(len - 1)
        .saturating_add_signed(delta)
        .min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_selection() {
        assert_eq!(step_selection(0, 3, -1), 0);
        assert_eq!(step_selection(2, 3, 1), 2);
        assert_eq!(step_selection(9, 3, 0), 2);
        assert_eq!(step_selection(1, 0, 1), 0);
    }
}
