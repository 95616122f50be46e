/// Vertical offset in css pixels past which the navbar gets its opaque backdrop.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > NAV_SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(1000.0));
    }

    #[test]
    fn fractional_offsets() {
        assert!(!is_scrolled(50.0 - f64::EPSILON));
        assert!(is_scrolled(50.5));
        assert!(!is_scrolled(-12.0));
    }

    #[test]
    fn reversible() {
        let offsets = [0.0, 200.0, 0.0];
        let states: Vec<bool> = offsets.iter().map(|&y| is_scrolled(y)).collect();
        assert_eq!(states, [false, true, false]);
    }
}
