//! compare — walkers versus drones on one randomly littered field.
//!
//! Scatters litter over a rectangular field, dispatches a crew of ground
//! collectors and a squad of single-item drones against it, prints the
//! comparison (table plus JSON), then replays the fastest fleet's planned
//! routes frame by frame.
//!
//! Pass a path to a scenario JSON file to compare your own fleets instead:
//!
//! ```text
//! RUST_LOG=info cargo run -p compare -- my_scenario.json
//! ```

use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use fc_core::{AgentId, Capacity, Point, TaskId};
use fc_kinematics::{MotionParams, TripStats};
use fc_sim::{Animation, FleetSpec, PlaybackObserver, Scenario, ScenarioBuilder, compare};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64   = 42;
const FIELD_LENGTH:    f64   = 100.0; // metres
const FIELD_WIDTH:     f64   = 60.0;
const TASK_COUNT:      usize = 60;
const WALKERS:         usize = 5;
const WALKER_CAPACITY: u32   = 20;
const WALKER_SPEED:    f64   = 1.4;   // m/s
const DRONES:          usize = 3;
const DRONE_SPEED:     f64   = 16.0;  // m/s, top speed
const FRAME_SECS:      f64   = 0.1;
const MAX_PLAY_SECS:   f64   = 4.0 * 3_600.0;
const REPORT_EVERY:    f64   = 60.0;  // print a progress line every simulated minute

// ── Scenario ──────────────────────────────────────────────────────────────────

fn default_scenario() -> Result<Scenario> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let litter: Vec<Point> = (0..TASK_COUNT)
        .map(|_| Point::new(rng.gen_range(0.0..FIELD_LENGTH), rng.gen_range(0.0..FIELD_WIDTH)))
        .collect();

    let scenario = ScenarioBuilder::new(Point::ORIGIN)
        .tasks(litter)
        .fleet(FleetSpec::new(
            "walkers",
            WALKERS,
            Capacity::limited(WALKER_CAPACITY)?,
            MotionParams::ground(WALKER_SPEED),
        ))
        .fleet(FleetSpec::new(
            "drones",
            DRONES,
            Capacity::limited(1)?,
            MotionParams::aerial(DRONE_SPEED),
        ))
        .build()?;
    Ok(scenario)
}

fn load_scenario(path: &str) -> Result<Scenario> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let scenario: Scenario =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    scenario.validate()?;
    Ok(scenario)
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter {
    next_report: f64,
    pickups:     usize,
    total:       usize,
}

impl PlaybackObserver for ProgressPrinter {
    fn on_frame(&mut self, time: f64, positions: &[Point]) {
        if time >= self.next_report {
            self.next_report += REPORT_EVERY;
            let lead = positions.first().copied().unwrap_or(Point::ORIGIN);
            println!(
                "  t = {:>7.1} s  collected {:>3}/{}  agent 0 at {lead}",
                time, self.pickups, self.total
            );
        }
    }

    fn on_pickup(&mut self, _time: f64, _agent: AgentId, _task: TaskId) {
        self.pickups += 1;
    }

    fn on_finish(&mut self, time: f64, stats: &TripStats) {
        println!(
            "  finished at {:.1} s: {} items, {:.1} m travelled",
            time, stats.items_collected, stats.distance
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init(); // RUST_LOG=debug for per-decision traces

    let scenario = match std::env::args().nth(1) {
        Some(path) => load_scenario(&path)?,
        None => default_scenario()?,
    };

    println!("=== compare — fleet task assignment ===");
    println!(
        "Depot: {}  |  Tasks: {}  |  Fleets: {}",
        scenario.depot,
        scenario.tasks.len(),
        scenario.fleets.len()
    );
    println!();

    // 1. Event-driven dispatch for every fleet.
    let t0 = Instant::now();
    let comparison = compare(&scenario)?;
    info!("compared {} fleets in {:?}", comparison.reports.len(), t0.elapsed());

    println!(
        "{:<12} {:>7} {:>10} {:>14} {:>14}",
        "Fleet", "Agents", "Capacity", "Completion s", "Distance m"
    );
    println!("{}", "-".repeat(61));
    for (spec, report) in scenario.fleets.iter().zip(&comparison.reports) {
        println!(
            "{:<12} {:>7} {:>10} {:>14.1} {:>14.1}",
            report.name,
            report.agent_count,
            spec.capacity.to_string(),
            report.completion_time,
            report.total_distance,
        );
    }
    println!();

    let Some(fastest) = comparison.fastest() else {
        return Ok(());
    };
    println!("Fastest: {} ({:.1} s)", fastest.name, fastest.completion_time);

    let summary: Vec<_> = comparison
        .reports
        .iter()
        .map(|r| {
            serde_json::json!({
                "fleet":           r.name,
                "agents":          r.agent_count,
                "agents_used":     r.agents_used,
                "completion_time": r.completion_time,
                "total_distance":  r.total_distance,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    println!();

    // 2. Kinematic replay of the fastest fleet's planned routes.
    let index = scenario
        .fleet_index(&fastest.name)
        .context("fastest fleet missing from scenario")?;
    let mut animation = Animation::for_fleet(&scenario, index)?;
    println!("Replaying {} ({} agents):", animation.fleet_name(), animation.playback().len());

    let mut progress = ProgressPrinter {
        next_report: REPORT_EVERY,
        pickups:     0,
        total:       scenario.tasks.len(),
    };
    let t0 = Instant::now();
    let played = animation.run(FRAME_SECS, MAX_PLAY_SECS, &mut progress)?;
    if !played.finished {
        println!("  stopped after {MAX_PLAY_SECS} s of simulated time");
    }
    info!("replay took {:?}", t0.elapsed());

    Ok(())
}
