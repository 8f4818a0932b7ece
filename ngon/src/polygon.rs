// Copyright 2026 the Ngon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regular polygon vertex computation and emission.

extern crate alloc;

use core::f64::consts::PI;

use kurbo::BezPath;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::sink::PathSink;

/// Errors returned when emitting a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonError {
    /// The requested side count cannot form a polygon.
    TooFewSides {
        /// The rejected side count.
        sides: u32,
    },
}

impl core::fmt::Display for PolygonError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooFewSides { sides } => {
                write!(f, "a polygon needs at least 3 sides, got {sides}")
            }
        }
    }
}

impl core::error::Error for PolygonError {}

/// A regular polygon to be emitted as a closed path of straight segments.
///
/// Angles increase counter-clockwise in the usual math convention, realized
/// on a y-down surface: vertex `i` of an inscribed polygon lies at
/// `(cx + radius·cos(aᵢ), cy − radius·sin(aᵢ))` with `aᵢ = i·(2π/sides) + offset`.
///
/// The same parameters serve both emission modes; only the meaning of
/// `radius` differs (circumcircle for [`inscribe`], incircle for
/// [`circumscribe`]).
///
/// [`inscribe`]: Self::inscribe
/// [`circumscribe`]: Self::circumscribe
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonSpec {
    /// Number of sides. Must be at least 3; checked at emission time.
    pub sides: u32,
    /// Radius in surface coordinates. Any sign is accepted; a negative value
    /// reflects the polygon through the center.
    pub radius: f64,
    /// Center x-coordinate.
    pub cx: f64,
    /// Center y-coordinate.
    pub cy: f64,
    /// Rotation offset in radians, counter-clockwise.
    pub offset: f64,
}

impl PolygonSpec {
    /// Creates a polygon spec with radius 1, centered at the origin, unrotated.
    pub fn new(sides: u32) -> Self {
        Self {
            sides,
            radius: 1.0,
            cx: 0.0,
            cy: 0.0,
            offset: 0.0,
        }
    }

    /// Sets the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the center.
    pub fn with_center(mut self, cx: f64, cy: f64) -> Self {
        self.cx = cx;
        self.cy = cy;
        self
    }

    /// Sets the rotation offset, in radians counter-clockwise.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Appends this polygon to `sink`, inscribed in the circle of `radius`
    /// around `(cx, cy)`: every vertex lies on that circle.
    ///
    /// Emits one `move_to` (the vertex at angle `offset`) followed by
    /// `sides` `line_to` calls. The last segment lands exactly on the first
    /// vertex, so the shape closes by coordinates without a close-path
    /// element.
    ///
    /// Fails without touching `sink` when `sides < 3`.
    pub fn inscribe<S: PathSink>(&self, sink: &mut S) -> Result<(), PolygonError> {
        if self.sides < 3 {
            return Err(PolygonError::TooFewSides { sides: self.sides });
        }

        let theta = 2.0 * PI / f64::from(self.sides);
        let (x, y) = self.vertex_at(self.offset);
        sink.move_to(x, y);
        for i in 1..=self.sides {
            let (x, y) = self.vertex_at(f64::from(i) * theta + self.offset);
            sink.line_to(x, y);
        }
        Ok(())
    }

    /// Appends this polygon to `sink`, circumscribed about the circle of
    /// `radius` around `(cx, cy)`: every edge is tangent to that circle.
    ///
    /// `radius` is the incircle (apothem) radius; it is converted to the
    /// equivalent circumcircle radius (`radius / cos(π/sides)`) and the rest
    /// is delegated to [`inscribe`](Self::inscribe), including the side-count
    /// check.
    pub fn circumscribe<S: PathSink>(&self, sink: &mut S) -> Result<(), PolygonError> {
        let theta = PI / f64::from(self.sides);
        self.with_radius(self.radius / theta.cos()).inscribe(sink)
    }

    /// Returns a fresh [`BezPath`] containing the inscribed polygon.
    pub fn inscribed_path(&self) -> Result<BezPath, PolygonError> {
        let mut p = BezPath::new();
        self.inscribe(&mut p)?;
        Ok(p)
    }

    /// Returns a fresh [`BezPath`] containing the circumscribed polygon.
    pub fn circumscribed_path(&self) -> Result<BezPath, PolygonError> {
        let mut p = BezPath::new();
        self.circumscribe(&mut p)?;
        Ok(p)
    }

    /// Vertex on the circumcircle at the given angle, in y-down coordinates.
    fn vertex_at(&self, angle: f64) -> (f64, f64) {
        (
            self.cx + angle.cos() * self.radius,
            self.cy - angle.sin() * self.radius,
        )
    }
}
