// Copyright 2026 the Ngon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regular polygon path emission.
//!
//! This crate computes the vertices of regular polygons and appends them as
//! straight segments to a caller-owned path:
//! - [`PolygonSpec`] holds the geometric parameters (side count, radius,
//!   center, rotation offset) with documented defaults.
//! - [`PathSink`] is the seam to the drawing surface: anything with `move_to`
//!   and `line_to`. An implementation for [`kurbo::BezPath`] is provided.
//!
//! Styling, stroking, filling, and rasterization are out of scope; the crate
//! only defines path geometry for the caller to later render.

#![no_std]

extern crate alloc;

#[cfg(not(feature = "std"))]
mod float;
mod polygon;
mod sink;

pub use polygon::{PolygonError, PolygonSpec};
pub use sink::PathSink;
