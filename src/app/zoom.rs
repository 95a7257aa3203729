pub const MIN_ZOOM: i32 = 50;
pub const MAX_ZOOM: i32 = 200;
pub const ZOOM_STEP: i32 = 10;
pub const DEFAULT_ZOOM: i32 = 100;

/// Zoom percentage for the paper surface. Always within [MIN_ZOOM, MAX_ZOOM];
/// construction clamps, so a `ZoomLevel` can never hold an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomLevel(i32);

impl Default for ZoomLevel {
    fn default() -> Self {
        ZoomLevel(DEFAULT_ZOOM)
    }
}

impl ZoomLevel {
    pub fn new(requested: i32) -> Self {
        ZoomLevel(requested.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    pub fn percent(&self) -> i32 {
        self.0
    }

    /// Scale factor applied to the paper, exactly percent / 100.
    pub fn scale(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn zoom_in(&self) -> Self {
        Self::new(self.0 + ZOOM_STEP)
    }

    pub fn zoom_out(&self) -> Self {
        Self::new(self.0 - ZOOM_STEP)
    }

    /// The "Fit" control resets to the default level.
    pub fn fit() -> Self {
        Self::default()
    }

    /// Readout text, e.g. "100%".
    pub fn label(&self) -> String {
        format!("{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_to_bounds() {
        assert_eq!(ZoomLevel::new(30).percent(), 50);
        assert_eq!(ZoomLevel::new(50).percent(), 50);
        assert_eq!(ZoomLevel::new(135).percent(), 135);
        assert_eq!(ZoomLevel::new(200).percent(), 200);
        assert_eq!(ZoomLevel::new(205).percent(), 200);
        assert_eq!(ZoomLevel::new(9999).percent(), 200);
    }

    #[test]
    fn test_scale_is_percent_over_100() {
        assert_eq!(ZoomLevel::new(50).scale(), 0.5);
        assert_eq!(ZoomLevel::new(100).scale(), 1.0);
        assert_eq!(ZoomLevel::new(175).scale(), 1.75);
    }

    #[test]
    fn test_stepping_never_overshoots() {
        let mut zoom = ZoomLevel::default();
        for _ in 0..20 {
            zoom = zoom.zoom_in();
            assert!(zoom.percent() <= MAX_ZOOM);
        }
        assert_eq!(zoom.percent(), MAX_ZOOM);

        for _ in 0..40 {
            zoom = zoom.zoom_out();
            assert!(zoom.percent() >= MIN_ZOOM);
        }
        assert_eq!(zoom.percent(), MIN_ZOOM);
    }

    #[test]
    fn test_step_from_odd_value_clamps_at_boundary() {
        // 195 + 10 clamps to 200 rather than overshooting.
        assert_eq!(ZoomLevel::new(195).zoom_in().percent(), 200);
        assert_eq!(ZoomLevel::new(55).zoom_out().percent(), 50);
    }

    #[test]
    fn test_fit_resets_to_default() {
        assert_eq!(ZoomLevel::fit().percent(), DEFAULT_ZOOM);
    }

    #[test]
    fn test_label() {
        assert_eq!(ZoomLevel::new(80).label(), "80%");
    }
}
