//! Print the convex outline of a sampled point cloud.
//!
//! Usage:
//!   cargo run -p giftwrap --example collider_outline -- [points]

use giftwrap::prelude::*;

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(48);
    let cloud = draw_point_cloud(
        ScatterCfg {
            point_count: PointCount::Fixed(n),
            radius: 1.0,
        },
        ReplayToken {
            seed: 2025,
            index: 0,
        },
    );
    match compute_hull_with_defaults(&cloud) {
        Ok(Some(mut hull)) => {
            ensure_ccw(&mut hull);
            println!(
                "cloud: {} points, hull: {} vertices, area {:.4}",
                cloud.len(),
                hull.len(),
                signed_area(&hull)
            );
            for (i, v) in hull.iter().enumerate() {
                println!("  v{i}: ({:.4}, {:.4})", v.x, v.y);
            }
        }
        Ok(None) => println!("fewer than 3 points, no outline"),
        Err(err) => eprintln!("hull walk failed: {err}"),
    }
}
