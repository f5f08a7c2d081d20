//! Streak renderer over an abstract 2D drawing surface.

use crate::config::StarfieldConfig;
use crate::constants::{ALPHA_MIN, TAIL_FALLBACK, TAIL_LENGTH, TAIL_MIN_ABS};
use crate::star::Star;
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// The slice of a canvas 2D context the renderer needs.
pub trait StrokeSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn set_line_cap_round(&mut self);
    fn set_line_width(&mut self, width: f32);
    fn set_global_alpha(&mut self, alpha: f32);
    fn set_stroke_color(&mut self, color: &str);
    /// Stroke a single segment as its own path.
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
}

#[inline]
fn tail_component(v: f32) -> f32 {
    let t = v * TAIL_LENGTH;
    if t.abs() < TAIL_MIN_ABS {
        TAIL_FALLBACK.copysign(t)
    } else {
        t
    }
}

/// Streak offset for the current camera velocity. Never shorter than the
/// fallback on either axis, so a still camera still shows a dot.
#[inline]
pub fn streak_tail(velocity: Vec2) -> Vec2 {
    Vec2::new(tail_component(velocity.x), tail_component(velocity.y))
}

/// Twinkle alpha, redrawn for every star on every frame.
#[inline]
pub fn twinkle_alpha<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    ALPHA_MIN + (1.0 - ALPHA_MIN) * rng.gen::<f32>()
}

/// Clear `target` and draw one streak per star.
pub fn render_stars<S, R>(
    target: &mut S,
    stars: &[Star],
    velocity: Vec2,
    surface: &Surface,
    config: &StarfieldConfig,
    rng: &mut R,
) where
    S: StrokeSurface + ?Sized,
    R: Rng + ?Sized,
{
    target.clear_rect(0.0, 0.0, surface.width, surface.height);
    target.set_line_cap_round();
    target.set_stroke_color(&config.star_color);
    let tail = streak_tail(velocity);
    for star in stars {
        target.set_line_width(config.star_size * star.z * surface.scale);
        target.set_global_alpha(twinkle_alpha(rng));
        target.stroke_line(star.pos, star.pos + tail);
    }
}
