//! The star pool: a fixed-size set of particles and their depth distribution.

use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// A single particle. `z` doubles as apparent nearness and size/speed multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub z: f32,
}

/// Depth drawn uniformly from `[min_scale, 1)`.
#[inline]
pub fn random_depth<R: Rng + ?Sized>(min_scale: f32, rng: &mut R) -> f32 {
    min_scale + rng.gen::<f32>() * (1.0 - min_scale)
}

/// Move `star` to a uniformly random point inside `surface`.
#[inline]
pub fn place_star<R: Rng + ?Sized>(star: &mut Star, surface: &Surface, rng: &mut R) {
    star.pos = Vec2::new(
        rng.gen::<f32>() * surface.width,
        rng.gen::<f32>() * surface.height,
    );
}

#[derive(Clone, Debug, Default)]
pub struct StarPool {
    stars: Vec<Star>,
}

impl StarPool {
    /// `count` stars at the origin; positions are assigned by the first resize.
    pub fn new<R: Rng + ?Sized>(count: usize, min_scale: f32, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                pos: Vec2::ZERO,
                z: random_depth(min_scale, rng),
            })
            .collect();
        Self { stars }
    }

    pub fn place_all<R: Rng + ?Sized>(&mut self, surface: &Surface, rng: &mut R) {
        for star in &mut self.stars {
            place_star(star, surface, rng);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Star] {
        &self.stars
    }

    /// Mutable view that cannot change the pool size.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Star> {
        self.stars.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Star> {
        self.stars.iter_mut()
    }
}
