// Copyright 2026 the Ngon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `ngon_demo`.

use std::fmt::Write as _;

use kurbo::{BezPath, Circle};

/// Accumulates stroked shapes into an SVG document.
#[derive(Debug)]
pub(crate) struct SvgScene {
    width: f64,
    height: f64,
    body: String,
}

impl SvgScene {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Adds a stroked, unfilled path.
    pub(crate) fn path(&mut self, path: &BezPath, stroke: &str) {
        let d = path.to_svg();
        let _ = writeln!(
            self.body,
            r#"  <path d="{d}" stroke="{stroke}" fill="none" stroke-width="1.5" />"#
        );
    }

    /// Adds a stroked guide circle.
    pub(crate) fn circle(&mut self, circle: Circle, stroke: &str) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{}" cy="{}" r="{}" stroke="{stroke}" fill="none" stroke-dasharray="3 3" />"#,
            circle.center.x, circle.center.y, circle.radius
        );
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.width,
            h = self.height
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}
