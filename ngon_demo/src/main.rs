// Copyright 2026 the Ngon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon path demos for `ngon`.
//!
//! Emits an SVG showing inscribed vs. circumscribed polygons around the same
//! guide circle, plus a hex-flower arrangement built caller-side.

mod svg;

use core::f64::consts::{FRAC_PI_3, FRAC_PI_6};

use kurbo::Circle;
use ngon::PolygonSpec;

use crate::svg::SvgScene;

fn main() {
    let mut scene = SvgScene::new(720.0, 360.0);

    // One cell per side count: guide circle, inscribed, circumscribed.
    for (i, sides) in [3_u32, 4, 5, 6, 8, 12].into_iter().enumerate() {
        let cx = 60.0 + 120.0 * (i % 3) as f64;
        let cy = 60.0 + 120.0 * (i / 3) as f64;
        // The circumscribed triangle doubles the radius, so keep headroom.
        let r = 28.0;

        scene.circle(Circle::new((cx, cy), r), "#ccc");

        let spec = PolygonSpec::new(sides).with_radius(r).with_center(cx, cy);
        let inscribed = spec.inscribed_path().expect("sides >= 3");
        let circumscribed = spec.circumscribed_path().expect("sides >= 3");
        scene.path(&inscribed, "#1a6fb4");
        scene.path(&circumscribed, "#d1495b");
    }

    // Hex flower: a center hexagon plus six neighbors. Pointy-top hexagons
    // need a 30-degree rotation offset; neighbor centers sit two apothems
    // away along the edge normals (at multiples of 60 degrees). All of this
    // is caller-side layout; the library only emits single polygons.
    let r = 40.0;
    let apothem = r * FRAC_PI_6.cos();
    let hex = PolygonSpec::new(6).with_radius(r).with_offset(FRAC_PI_6);
    let (cx, cy) = (540.0, 180.0);
    let mut centers = vec![(cx, cy)];
    for k in 0..6 {
        let angle = f64::from(k) * FRAC_PI_3;
        let d = 2.0 * apothem;
        centers.push((cx + d * angle.cos(), cy - d * angle.sin()));
    }
    for (x, y) in centers {
        let path = hex.with_center(x, y).inscribed_path().expect("sides >= 3");
        scene.path(&path, "#2e7d32");
    }

    let out = scene.to_svg_string();
    std::fs::write("ngon_demo.svg", out).expect("write ngon_demo.svg");
    println!("wrote ngon_demo.svg");
}
