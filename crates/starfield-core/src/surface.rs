//! Resize adapter: viewport in CSS pixels -> drawing surface in device pixels.

use glam::Vec2;

/// Host viewport as reported by the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f32,
    pub css_height: f32,
    pub device_pixel_ratio: Option<f32>,
}

impl Viewport {
    pub fn new(css_width: f32, css_height: f32, device_pixel_ratio: Option<f32>) -> Self {
        Self {
            css_width,
            css_height,
            device_pixel_ratio,
        }
    }
}

/// Surface dimensions in device pixels plus the scale they were derived with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            scale: 1.0,
        }
    }
}

/// Device pixel ratio, falling back to 1 when missing or unusable.
#[inline]
pub fn effective_scale(device_pixel_ratio: Option<f32>) -> f32 {
    match device_pixel_ratio {
        Some(r) if r.is_finite() && r > 0.0 => r,
        _ => 1.0,
    }
}

impl Surface {
    pub fn from_viewport(viewport: Viewport) -> Self {
        let scale = effective_scale(viewport.device_pixel_ratio);
        Self {
            width: viewport.css_width.max(0.0) * scale,
            height: viewport.css_height.max(0.0) * scale,
            scale,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Backing store size for the canvas.
    #[inline]
    pub fn backing_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    /// True once `p` is more than `margin` pixels past any edge.
    #[inline]
    pub fn is_outside(&self, p: Vec2, margin: f32) -> bool {
        p.x < -margin || p.x > self.width + margin || p.y < -margin || p.y > self.height + margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_defaults_to_one() {
        assert_eq!(effective_scale(None), 1.0);
        assert_eq!(effective_scale(Some(0.0)), 1.0);
        assert_eq!(effective_scale(Some(f32::NAN)), 1.0);
        assert_eq!(effective_scale(Some(2.0)), 2.0);
    }

    #[test]
    fn surface_multiplies_by_scale() {
        let s = Surface::from_viewport(Viewport::new(800.0, 600.0, Some(2.0)));
        assert_eq!((s.width, s.height, s.scale), (1600.0, 1200.0, 2.0));
        assert_eq!(s.backing_size(), (1600, 1200));
        assert_eq!(s.center(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn outside_only_past_margin() {
        let s = Surface::from_viewport(Viewport::new(100.0, 100.0, None));
        assert!(!s.is_outside(Vec2::new(-50.0, 150.0), 50.0));
        assert!(s.is_outside(Vec2::new(-50.5, 50.0), 50.0));
        assert!(s.is_outside(Vec2::new(50.0, 150.5), 50.0));
    }
}
