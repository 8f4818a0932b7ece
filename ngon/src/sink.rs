// Copyright 2026 the Ngon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The path-building seam between polygon emission and the drawing surface.

use kurbo::BezPath;

/// A mutable 2D path under construction.
///
/// This is the minimal surface the polygon emitters need: start a subpath at
/// a point, and append straight segments. The sink is borrowed exclusively
/// for the duration of one emission call and is never created, configured,
/// or finalized by this crate.
pub trait PathSink {
    /// Starts a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);
    /// Appends a straight segment from the current point to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);
}

impl PathSink for BezPath {
    fn move_to(&mut self, x: f64, y: f64) {
        BezPath::move_to(self, (x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        BezPath::line_to(self, (x, y));
    }
}
