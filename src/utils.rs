/// How far the backdrop drifts by the time the page bottom is reached.
pub const PARALLAX_MAX_PERCENT: f64 = 20.0;

/// Backdrop offset in percent for the current scroll position.
///
/// Progress is `scroll_y / (scroll_height - viewport_height)`, clamped to
/// `0..=1`, so pages shorter than the viewport never move.
pub fn parallax_offset(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0) * PARALLAX_MAX_PERCENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_and_bottom_of_page() {
        assert_eq!(parallax_offset(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(parallax_offset(2000.0, 3000.0, 1000.0), 20.0);
        assert_eq!(parallax_offset(1000.0, 3000.0, 1000.0), 10.0);
    }

    #[test]
    fn short_page_does_not_move() {
        assert_eq!(parallax_offset(50.0, 800.0, 1000.0), 0.0);
        assert_eq!(parallax_offset(50.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(parallax_offset(-80.0, 3000.0, 1000.0), 0.0);
        assert_eq!(parallax_offset(2500.0, 3000.0, 1000.0), 20.0);
    }

    #[test]
    fn nan_input_is_ignored() {
        assert_eq!(parallax_offset(f64::NAN, 3000.0, 1000.0), 0.0);
        assert_eq!(parallax_offset(10.0, f64::NAN, 1000.0), 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_offset_within_bounds(
            scroll_y in -1e6f64..1e6,
            scroll_height in 0.0f64..1e6,
            viewport_height in 0.0f64..1e5,
        ) {
            let offset = parallax_offset(scroll_y, scroll_height, viewport_height);
            prop_assert!((0.0..=PARALLAX_MAX_PERCENT).contains(&offset), "got: {}", offset);
        }
    }
}
