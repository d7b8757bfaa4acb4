// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cell canvas with a translation stack, used by per-type entry renderers.

use std::ops::{Deref, DerefMut};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use smallvec::{smallvec, SmallVec};

type Poses = SmallVec<[(i32, i32); 4]>;

/// Drawing surface handed to renderers.
///
/// Coordinates passed to [`Canvas::set_string`] are relative to the current pose; cells that land
/// outside the underlying buffer are clipped.
pub struct Canvas<'a> {
    buffer: &'a mut Buffer,
    poses: Poses,
}

impl<'a> Canvas<'a> {
    pub fn new(buffer: &'a mut Buffer) -> Self {
        Self { buffer, poses: smallvec![(0, 0)] }
    }

    pub fn area(&self) -> Rect {
        self.buffer.area
    }

    /// Current translation in absolute buffer cells.
    pub fn offset(&self) -> (i32, i32) {
        self.poses.last().copied().unwrap_or((0, 0))
    }

    pub fn depth(&self) -> usize {
        self.poses.len()
    }

    pub fn push_pose(&mut self) {
        let top = self.offset();
        self.poses.push(top);
    }

    /// Pops the current pose. The base pose is never popped.
    pub fn pop_pose(&mut self) {
        if self.poses.len() > 1 {
            self.poses.pop();
        }
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        if let Some(top) = self.poses.last_mut() {
            top.0 += dx;
            top.1 += dy;
        }
    }

    /// Pushes a pose that is restored when the guard drops, whatever the scope did in between.
    pub fn scoped(&mut self) -> PoseGuard<'_, 'a> {
        let saved = self.poses.clone();
        self.push_pose();
        PoseGuard { canvas: self, saved }
    }

    pub fn set_string(&mut self, x: i32, y: i32, text: &str, style: Style) {
        let (ox, oy) = self.offset();
        let (x, y) = (ox + x, oy + y);
        let area = self.area();
        let inside_x = x >= i32::from(area.left()) && x < i32::from(area.right());
        let inside_y = y >= i32::from(area.top()) && y < i32::from(area.bottom());
        if !inside_x || !inside_y {
            return;
        }
        let (x, y) = (x as u16, y as u16);
        let width = usize::from(area.right() - x);
        self.buffer.set_stringn(x, y, text, width, style);
    }
}

/// Restores the canvas pose stack captured by [`Canvas::scoped`] on drop.
pub struct PoseGuard<'c, 'a> {
    canvas: &'c mut Canvas<'a>,
    saved: Poses,
}

impl<'a> Deref for PoseGuard<'_, 'a> {
    type Target = Canvas<'a>;

    fn deref(&self) -> &Self::Target {
        self.canvas
    }
}

impl DerefMut for PoseGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.canvas
    }
}

impl Drop for PoseGuard<'_, '_> {
    fn drop(&mut self) {
        if self.canvas.poses != self.saved {
            self.canvas.poses.clone_from(&self.saved);
        }
    }
}
