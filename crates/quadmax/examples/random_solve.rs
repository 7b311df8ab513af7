//! Solve a few random grid point sets and print the winners.
//!
//! Usage:
//!   cargo run -p quadmax --example random_solve -- 20
//!
//! Prints, per seed, the winning vertices and how many points they enclose.

use quadmax::prelude::{random_points, GeometryCore, RandomCfg, ReplayToken, Tag};

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(16);
    for seed in 0..3 {
        let pts = match random_points(RandomCfg::default(), count, ReplayToken::new(seed)) {
            Ok(p) => p,
            Err(err) => {
                eprintln!("seed {seed}: {err}");
                continue;
            }
        };
        let mut core = GeometryCore::new();
        core.extend(pts);
        let res = core.solve().clone();
        match res.vertices {
            Some(v) => {
                let corners: Vec<_> = core
                    .points()
                    .iter()
                    .filter(|p| core.tag(p.id) == Tag::Vertex)
                    .map(|p| (p.pos.x, p.pos.y))
                    .collect();
                println!(
                    "seed {seed}: ids {:?} at {corners:?} enclose {} of {count}",
                    v.map(|id| id.0),
                    res.enclosed_count()
                );
            }
            None => println!("seed {seed}: no simple quadrilateral"),
        }
    }
}
