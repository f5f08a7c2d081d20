//! Where an out-of-bounds star comes back.

use crate::config::StarfieldConfig;
use crate::star::{random_depth, Star};
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// Re-entry mode picked for a recycled star.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reentry {
    /// Camera nearly still: reappear small at a random point inside the surface.
    Depth,
    Left,
    Right,
    Top,
    Bottom,
}

/// Pick the re-entry mode for the current camera velocity.
///
/// Below `min_speed` on both axes stars re-enter by depth. Otherwise the axis
/// is picked with odds proportional to its speed and the star streams in from
/// the edge the camera is moving away from.
pub fn choose_reentry<R: Rng + ?Sized>(velocity: Vec2, min_speed: f32, rng: &mut R) -> Reentry {
    let vx = velocity.x.abs();
    let vy = velocity.y.abs();
    if vx <= min_speed && vy <= min_speed {
        return Reentry::Depth;
    }
    let horizontal = if vx > vy {
        rng.gen::<f32>() < vx / (vx + vy)
    } else {
        rng.gen::<f32>() >= vy / (vx + vy)
    };
    if horizontal {
        if velocity.x > 0.0 {
            Reentry::Left
        } else {
            Reentry::Right
        }
    } else if velocity.y > 0.0 {
        Reentry::Top
    } else {
        Reentry::Bottom
    }
}

/// Recycle `star` in place and report the mode used.
pub fn recycle_star<R: Rng + ?Sized>(
    star: &mut Star,
    velocity: Vec2,
    surface: &Surface,
    config: &StarfieldConfig,
    rng: &mut R,
) -> Reentry {
    let reentry = choose_reentry(velocity, config.edge_recycle_min_speed, rng);
    let m = config.overflow;
    star.z = random_depth(config.min_scale, rng);
    match reentry {
        Reentry::Depth => {
            star.z = config.depth_reset_z;
            star.pos = Vec2::new(
                rng.gen::<f32>() * surface.width,
                rng.gen::<f32>() * surface.height,
            );
        }
        Reentry::Left => star.pos = Vec2::new(-m, surface.height * rng.gen::<f32>()),
        Reentry::Right => star.pos = Vec2::new(surface.width + m, surface.height * rng.gen::<f32>()),
        Reentry::Top => star.pos = Vec2::new(surface.width * rng.gen::<f32>(), -m),
        Reentry::Bottom => star.pos = Vec2::new(surface.width * rng.gen::<f32>(), surface.height + m),
    }
    reentry
}
