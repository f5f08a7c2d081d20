// Test doubles for the core's host seams.
#![allow(dead_code)]

use glam::Vec2;
use starfield_core::{FrameScheduler, StrokeSurface};

#[derive(Clone, Debug, PartialEq)]
pub enum Cmd {
    Clear(f32, f32, f32, f32),
    Cap,
    Width(f32),
    Alpha(f32),
    Color(String),
    Line(Vec2, Vec2),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub cmds: Vec<Cmd>,
}

impl RecordingSurface {
    pub fn lines(&self) -> Vec<(Vec2, Vec2)> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::Line(a, b) => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }

    pub fn widths(&self) -> Vec<f32> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::Width(w) => Some(*w),
                _ => None,
            })
            .collect()
    }

    pub fn alphas(&self) -> Vec<f32> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::Alpha(a) => Some(*a),
                _ => None,
            })
            .collect()
    }
}

impl StrokeSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.cmds.push(Cmd::Clear(x, y, width, height));
    }
    fn set_line_cap_round(&mut self) {
        self.cmds.push(Cmd::Cap);
    }
    fn set_line_width(&mut self, width: f32) {
        self.cmds.push(Cmd::Width(width));
    }
    fn set_global_alpha(&mut self, alpha: f32) {
        self.cmds.push(Cmd::Alpha(alpha));
    }
    fn set_stroke_color(&mut self, color: &str) {
        self.cmds.push(Cmd::Color(color.to_string()));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.cmds.push(Cmd::Line(from, to));
    }
}

/// Hands out increasing handles and remembers what was requested and cancelled.
#[derive(Default)]
pub struct ManualScheduler {
    pub next: i32,
    pub requested: Vec<i32>,
    pub cancelled: Vec<i32>,
    pub unavailable: bool,
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<i32> {
        if self.unavailable {
            return None;
        }
        self.next += 1;
        self.requested.push(self.next);
        Some(self.next)
    }

    fn cancel_frame(&mut self, handle: i32) {
        self.cancelled.push(handle);
    }
}
