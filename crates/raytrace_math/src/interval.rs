/// Window of accepted ray parameters `[min, max]`, both ends included.
///
/// Hittables only report roots that fall inside the window, so the caller
/// controls self-intersection (`min`) and nearest-hit culling (`max`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// The unit range, used to clamp color channels.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Open-ended window `[min, +inf]` for a fresh ray.
    pub fn beyond(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// NaN is never contained.
    pub fn contains(&self, t: f64) -> bool {
        self.min <= t && t <= self.max
    }

    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_closed() {
        let window = Interval::new(0.5, 2.0);

        assert!(window.contains(0.5));
        assert!(window.contains(2.0));
        assert!(window.contains(1.25));
        assert!(!window.contains(0.499));
        assert!(!window.contains(2.001));
    }

    #[test]
    fn test_beyond() {
        let window = Interval::beyond(0.001);

        assert_eq!(window.min, 0.001);
        assert!(window.contains(1e300));
        assert!(window.contains(f64::INFINITY));
        assert!(!window.contains(0.0));
        assert!(!window.contains(f64::NAN));
    }

    #[test]
    fn test_unit_clamp() {
        assert_eq!(Interval::UNIT.clamp(-5.0), 0.0);
        assert_eq!(Interval::UNIT.clamp(0.5), 0.5);
        assert_eq!(Interval::UNIT.clamp(15.0), 1.0);
    }
}
