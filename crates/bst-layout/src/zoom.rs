// ABOUTME: Zoom factor applied when drawing a layout.
// ABOUTME: Stored as an integer step count so in/out steps cancel exactly.

use bst_core::ZoomSettings;

/// Scale factor of the drawing surface: `step ^ level`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    level: i32,
    settings: ZoomSettings,
}

impl Zoom {
    pub fn new(settings: ZoomSettings) -> Self {
        let settings = if settings.step > 1.0 && settings.min <= settings.max {
            settings
        } else {
            tracing::warn!("Invalid zoom settings {:?}, using defaults", settings);
            ZoomSettings::default()
        };
        Self { level: 0, settings }
    }

    pub fn scale(&self) -> f64 {
        self.scale_at(self.level)
    }

    fn scale_at(&self, level: i32) -> f64 {
        self.settings.step.powi(level)
    }

    /// Multiply the scale by one step. Returns `false` at the upper bound.
    pub fn zoom_in(&mut self) -> bool {
        if self.scale_at(self.level + 1) > self.settings.max * (1.0 + f64::EPSILON) {
            return false;
        }
        self.level += 1;
        true
    }

    /// Divide the scale by one step. Returns `false` at the lower bound.
    pub fn zoom_out(&mut self) -> bool {
        if self.scale_at(self.level - 1) < self.settings.min * (1.0 - f64::EPSILON) {
            return false;
        }
        self.level -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.level = 0;
    }

    /// Scale an unscaled surface size
    pub fn scaled(&self, (width, height): (f32, f32)) -> (f32, f32) {
        let scale = self.scale() as f32;
        (width * scale, height * scale)
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::new(ZoomSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_unit_scale() {
        assert_eq!(Zoom::default().scale(), 1.0);
    }

    #[test]
    fn in_then_out_restores_scale_exactly() {
        let mut zoom = Zoom::default();
        for steps in 1..=5 {
            let before = zoom.scale();
            for _ in 0..steps {
                assert!(zoom.zoom_in());
            }
            for _ in 0..steps {
                assert!(zoom.zoom_out());
            }
            assert_eq!(zoom.scale(), before);
        }
        for _ in 0..3 {
            assert!(zoom.zoom_out());
        }
        for _ in 0..3 {
            assert!(zoom.zoom_in());
        }
        assert_eq!(zoom.scale(), 1.0);
    }

    #[test]
    fn clamps_at_bounds() {
        let mut zoom = Zoom::new(ZoomSettings {
            step: 2.0,
            min: 0.25,
            max: 4.0,
        });
        assert!(zoom.zoom_in());
        assert!(zoom.zoom_in());
        assert_eq!(zoom.scale(), 4.0);
        assert!(!zoom.zoom_in());
        assert_eq!(zoom.scale(), 4.0);

        zoom.reset();
        assert!(zoom.zoom_out());
        assert!(zoom.zoom_out());
        assert!(!zoom.zoom_out());
        assert_eq!(zoom.scale(), 0.25);
    }

    #[test]
    fn invalid_step_falls_back_to_defaults() {
        let mut zoom = Zoom::new(ZoomSettings {
            step: 0.5,
            min: 0.1,
            max: 10.0,
        });
        assert!(zoom.zoom_in());
        assert_eq!(zoom.scale(), ZoomSettings::default().step);
    }

    #[test]
    fn scales_surface_size() {
        let mut zoom = Zoom::new(ZoomSettings {
            step: 2.0,
            min: 0.5,
            max: 2.0,
        });
        zoom.zoom_in();
        assert_eq!(zoom.scaled((100.0, 40.0)), (200.0, 80.0));
    }
}
