//! campus — smallest end-to-end demo of the rust_dtn trajectory subsystem.
//!
//! Simulates a handful of hosts on a synthetic 1 km × 1 km campus: a few
//! students with community movement (dorm room as home), a shuttle on
//! confined random waypoint inside the central quad, and a drifter on the
//! epoch-based random direction model.  Finishes by replaying a short
//! recorded trace the way a trace-driven run would.

use std::io::Cursor;

use anyhow::Result;

use dtn_core::{HostId, HostRng, Rect};
use dtn_movement::{
    CommunityMovement, ConfinedRandomWaypoint, ModelConfig, MovementModel, RandomDirectionEpoch,
    SpeedRange, WorldBounds,
};
use dtn_trace::TraceReader;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 42;
const HOST_COUNT:  u32 = 4;
const PATHS_PER_HOST: usize = 5;

const WORLD_X: f64 = 1000.0; // metres
const WORLD_Y: f64 = 1000.0;
const WALK_SPEED: (f64, f64) = (0.5, 1.5); // m/s, pedestrian range

const DORM_SIZE: f64 = 150.0;

// ── Recorded trace ────────────────────────────────────────────────────────────

// One-minute sampling, two tracked hosts crossing the quad.
const TRACE: &str = "\
0 180 0 1000 0 1000 0 0
0 t1 100 100
0 t2 900 900
60 t1 200 220
60 t2 780 800
120 t1 310 330
180 t1 400 450
";

fn main() -> Result<()> {
    let config = ModelConfig::new(
        WorldBounds::new(WORLD_X, WORLD_Y),
        SpeedRange::new(WALK_SPEED.0, WALK_SPEED.1),
    );

    // ── Phase 1: community movement, one replica per student ──────────────

    let mut student_prototype = CommunityMovement::new(
        config,
        DORM_SIZE,
        (0.1, 0.4), // p(dorm -> campus), drawn per student
        (0.3, 0.8), // p(campus -> dorm), drawn per student
        HostRng::new(SEED, HostId(0)),
    )?;

    println!("students (community movement, dorm {DORM_SIZE} m):");
    for host in 0..HOST_COUNT {
        let mut student = student_prototype.replicate();
        let start = student.initial_location();
        println!(
            "  host {host}: start {start}, p_out={:.2}, p_home={:.2}",
            student.p_home_to_out(),
            student.p_out_to_home()
        );
        for _ in 0..PATHS_PER_HOST {
            let path = student.next_path();
            let dest = path.last_waypoint().expect("path has waypoints");
            let state = if student.inside_local() { "dorm" } else { "campus" };
            println!("    -> {dest} at {:.2} m/s ({state})", path.speed);
        }
    }

    // ── Phase 2: confined waypoint shuttle in the quad ────────────────────

    let quad = Rect::new(400.0, 600.0, 400.0, 600.0);
    let mut shuttle =
        ConfinedRandomWaypoint::new(config, quad, HostRng::new(SEED, HostId(100)))?;
    println!("\nshuttle (confined waypoint, quad {quad}):");
    println!("  start {}", shuttle.initial_location());
    for _ in 0..PATHS_PER_HOST {
        let path = shuttle.next_path();
        println!("  -> {} ({:.0} m leg)", path.last_waypoint().unwrap(), path.length());
    }

    // ── Phase 3: epoch-based random direction drifter ─────────────────────

    let mut drifter =
        RandomDirectionEpoch::with_default_epoch(config, HostRng::new(SEED, HostId(200)))?;
    println!("\ndrifter (random direction, rate {:.4}):", drifter.rate());
    println!("  start {}", drifter.initial_location());
    for _ in 0..PATHS_PER_HOST {
        let path = drifter.next_path();
        println!("  -> {} ({:.0} m epoch)", path.last_waypoint().unwrap(), path.length());
    }

    // ── Phase 4: trace replay ─────────────────────────────────────────────

    let mut replay = TraceReader::from_reader(Cursor::new(TRACE))?;
    println!(
        "\nreplaying trace ({}..{} s, {} x {} m):",
        replay.min_time(),
        replay.max_time(),
        replay.max_x(),
        replay.max_y()
    );
    loop {
        let batch = replay.next_batch()?;
        if batch.is_empty() {
            break;
        }
        print!("  t={:>5}:", batch.time);
        for (host, pos) in &batch.moves {
            print!("  {host} @ {pos}");
        }
        println!();
    }

    Ok(())
}
