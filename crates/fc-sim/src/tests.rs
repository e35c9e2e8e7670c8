//! Integration tests for fc-sim.

use fc_core::{AgentId, Capacity, FleetError, Point, TaskId};
use fc_kinematics::{Category, MotionParams, TripStats};

use crate::{
    Animation, FleetSpec, NoopObserver, PlaybackObserver, Scenario, ScenarioBuilder, SimError,
    compare,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const EPS: f64 = 1e-9;

fn square_tasks() -> Vec<Point> {
    vec![Point::new(3.0, 0.0), Point::new(3.0, 4.0), Point::new(0.0, 4.0)]
}

/// Unit-speed walker without fatigue.
fn walker() -> MotionParams {
    MotionParams {
        category: Category::Ground {
            cruise_speed: 1.0,
            fatigue_rate: 0.0,
            recovery:     0.0,
            min_speed:    0.1,
        },
        pickup_duration:   0.0,
        arrival_tolerance: 0.01,
    }
}

/// "solo": one walker; "pair": two walkers.  Both unlimited capacity.
fn square_scenario() -> Scenario {
    ScenarioBuilder::new(Point::ORIGIN)
        .tasks(square_tasks())
        .fleet(FleetSpec::new("solo", 1, Capacity::Unlimited, walker()))
        .fleet(FleetSpec::new("pair", 2, Capacity::Unlimited, walker()))
        .build()
        .unwrap()
}

#[derive(Default)]
struct Recorder {
    frames:   usize,
    widths:   Vec<usize>,
    pickups:  Vec<(AgentId, TaskId)>,
    finished: Vec<(f64, TripStats)>,
}

impl PlaybackObserver for Recorder {
    fn on_frame(&mut self, _time: f64, positions: &[Point]) {
        self.frames += 1;
        self.widths.push(positions.len());
    }

    fn on_pickup(&mut self, _time: f64, agent: AgentId, task: TaskId) {
        self.pickups.push((agent, task));
    }

    fn on_finish(&mut self, time: f64, stats: &TripStats) {
        self.finished.push((time, *stats));
    }
}

// ── Scenario validation ───────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn builds_with_tasks_and_fleets() {
        let s = square_scenario();
        assert_eq!(s.tasks.len(), 3);
        assert_eq!(s.fleets.len(), 2);
        assert_eq!(s.fleet_index("pair"), Some(1));
        assert_eq!(s.fleet_index("drones"), None);
    }

    #[test]
    fn no_fleets_errors() {
        let err = ScenarioBuilder::new(Point::ORIGIN).task(Point::new(1.0, 1.0)).build().unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn duplicate_fleet_name_errors() {
        let err = ScenarioBuilder::new(Point::ORIGIN)
            .fleet(FleetSpec::new("a", 1, Capacity::Unlimited, walker()))
            .fleet(FleetSpec::new("a", 2, Capacity::Unlimited, walker()))
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn blank_fleet_name_errors() {
        let err = ScenarioBuilder::new(Point::ORIGIN)
            .fleet(FleetSpec::new("  ", 1, Capacity::Unlimited, walker()))
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn non_finite_task_errors() {
        let err = ScenarioBuilder::new(Point::ORIGIN)
            .task(Point::new(f64::NAN, 0.0))
            .fleet(FleetSpec::new("a", 1, Capacity::Unlimited, walker()))
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::Fleet(FleetError::InvalidParameter(_))));
    }

    #[test]
    fn invalid_motion_errors() {
        let err = ScenarioBuilder::new(Point::ORIGIN)
            .fleet(FleetSpec::new("a", 1, Capacity::Unlimited, MotionParams::aerial(-1.0)))
            .build()
            .unwrap_err();
        assert!(matches!(err, SimError::Fleet(FleetError::InvalidParameter(_))));
    }

    #[test]
    fn dispatch_speed_follows_category() {
        let ground = FleetSpec::new("g", 1, Capacity::Unlimited, MotionParams::ground(1.4));
        let aerial = FleetSpec::new("d", 1, Capacity::Unlimited, MotionParams::aerial(16.0));
        assert_eq!(ground.dispatch_speed(), 1.4);
        assert_eq!(aerial.dispatch_speed(), 16.0);
        assert_eq!(aerial.dispatch_params(Point::ORIGIN).speed, 16.0);
    }
}

// ── Fleet comparison ──────────────────────────────────────────────────────────

#[cfg(test)]
mod compare_tests {
    use super::*;

    #[test]
    fn reports_follow_scenario_order() {
        let c = compare(&square_scenario()).unwrap();
        let names: Vec<_> = c.reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["solo", "pair"]);
    }

    #[test]
    fn single_walker_values() {
        let c = compare(&square_scenario()).unwrap();
        let solo = c.report("solo").unwrap();
        assert!((solo.completion_time - 10.0).abs() < EPS);
        assert!((solo.total_distance - 10.0).abs() < EPS);
        assert_eq!(solo.agents_used, 1);
        assert_eq!(solo.trajectories.len(), 1);
    }

    #[test]
    fn two_walkers_finish_first() {
        // t=0: agent 0 → (3,0), agent 1 → (0,4); t=3: agent 0 → (3,4).
        let c = compare(&square_scenario()).unwrap();
        let pair = c.report("pair").unwrap();
        assert!((pair.completion_time - 7.0).abs() < EPS);
        assert!((pair.total_distance - 11.0).abs() < EPS);
        assert_eq!(pair.agents_used, 2);
        assert_eq!(c.fastest().map(|r| r.name.as_str()), Some("pair"));
    }

    #[test]
    fn tie_goes_to_the_earlier_fleet() {
        let s = ScenarioBuilder::new(Point::ORIGIN)
            .tasks(square_tasks())
            .fleet(FleetSpec::new("first", 1, Capacity::Unlimited, walker()))
            .fleet(FleetSpec::new("second", 1, Capacity::Unlimited, walker()))
            .build()
            .unwrap();
        assert_eq!(compare(&s).unwrap().fastest().map(|r| r.name.as_str()), Some("first"));
    }

    #[test]
    fn capacity_forces_returns() {
        let s = ScenarioBuilder::new(Point::ORIGIN)
            .tasks(square_tasks())
            .fleet(FleetSpec::new("single-item", 1, Capacity::limited(1).unwrap(), walker()))
            .build()
            .unwrap();
        let report = &compare(&s).unwrap().reports[0];
        assert!((report.total_distance - 24.0).abs() < EPS);
        assert!((report.completion_time - 24.0).abs() < EPS);
    }

    #[test]
    fn empty_day_costs_nothing() {
        let s = ScenarioBuilder::new(Point::ORIGIN)
            .fleet(FleetSpec::new("idle", 3, Capacity::Unlimited, walker()))
            .fleet(FleetSpec::new("nobody", 0, Capacity::Unlimited, walker()))
            .build()
            .unwrap();
        let c = compare(&s).unwrap();
        for r in &c.reports {
            assert_eq!(r.completion_time, 0.0);
            assert_eq!(r.total_distance, 0.0);
            assert_eq!(r.agents_used, 0);
        }
    }

    #[test]
    fn zero_agent_fleet_with_tasks_is_a_no_op() {
        let s = ScenarioBuilder::new(Point::ORIGIN)
            .tasks(square_tasks())
            .fleet(FleetSpec::new("nobody", 0, Capacity::Unlimited, walker()))
            .build()
            .unwrap();
        let r = &compare(&s).unwrap().reports[0];
        assert_eq!(r.completion_time, 0.0);
        assert_eq!(r.total_distance, 0.0);
        assert!(r.trajectories.is_empty());
    }

    #[test]
    fn hand_built_scenario_is_validated() {
        let mut s = square_scenario();
        s.fleets[1].name = "solo".into();
        assert!(matches!(compare(&s), Err(SimError::Config(_))));
    }
}

// ── Animation ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod animation_tests {
    use super::*;

    #[test]
    fn unknown_fleet_errors() {
        let err = Animation::for_fleet(&square_scenario(), 5).err();
        assert_eq!(err, Some(SimError::UnknownFleet { index: 5, count: 2 }));
    }

    #[test]
    fn plays_to_completion() {
        let s = square_scenario();
        let mut anim = Animation::for_fleet(&s, 0).unwrap();
        assert_eq!(anim.fleet_name(), "solo");

        let mut rec = Recorder::default();
        let summary = anim.run(0.25, 1_000.0, &mut rec).unwrap();

        assert!(summary.finished);
        assert!(anim.is_finished());
        assert_eq!(summary.stats.items_collected, 3);
        // Depot → (3,0) → (3,4) → (0,4) → depot.
        assert!((summary.stats.distance - 14.0).abs() < 1e-6);
        assert!(summary.elapsed >= 14.0 - 0.25 && summary.elapsed <= 14.25);

        let tasks: Vec<_> = rec.pickups.iter().map(|&(_, t)| t).collect();
        assert_eq!(tasks, [TaskId(0), TaskId(1), TaskId(2)]);
        assert!(rec.pickups.iter().all(|&(a, _)| a == AgentId(0)));
        assert!(rec.frames > 0);
        assert!(rec.widths.iter().all(|&w| w == 1));
        assert_eq!(rec.finished.len(), 1);
    }

    #[test]
    fn every_agent_gets_a_route() {
        let s = square_scenario();
        let mut anim = Animation::for_fleet(&s, 1).unwrap();
        let mut rec = Recorder::default();
        let summary = anim.run(0.5, 1_000.0, &mut rec).unwrap();
        assert!(summary.finished);
        assert_eq!(anim.playback().len(), 2);
        assert!(rec.widths.iter().all(|&w| w == 2));
        assert_eq!(rec.pickups.len(), 3);
    }

    #[test]
    fn max_time_cuts_the_run_short() {
        let mut anim = Animation::for_fleet(&square_scenario(), 0).unwrap();
        let summary = anim.run(0.5, 2.0, &mut NoopObserver).unwrap();
        assert!(!summary.finished);
        assert!((summary.elapsed - 2.0).abs() < EPS);
        assert!((summary.stats.distance - 2.0).abs() < 1e-6);

        // A later call resumes where the first stopped.
        let summary = anim.run(0.5, 1_000.0, &mut NoopObserver).unwrap();
        assert!(summary.finished);
    }

    #[test]
    fn partial_last_frame_lands_on_max_time() {
        let mut anim = Animation::for_fleet(&square_scenario(), 0).unwrap();
        let summary = anim.run(0.75, 2.0, &mut NoopObserver).unwrap();
        assert!((summary.elapsed - 2.0).abs() < EPS);
    }

    #[test]
    fn bad_frame_time_errors() {
        let mut anim = Animation::for_fleet(&square_scenario(), 0).unwrap();
        assert!(matches!(anim.run(0.0, 10.0, &mut NoopObserver), Err(SimError::Config(_))));
        assert!(matches!(anim.run(f64::NAN, 10.0, &mut NoopObserver), Err(SimError::Config(_))));
        assert!(matches!(anim.run(0.1, -1.0, &mut NoopObserver), Err(SimError::Config(_))));
    }

    #[test]
    fn manual_steps_with_irregular_timing() {
        let mut anim = Animation::for_fleet(&square_scenario(), 0).unwrap();
        for dt in [0.4, 1.1, -3.0, f64::NAN, 1.5] {
            anim.step(dt);
        }
        assert!((anim.time() - 3.0).abs() < EPS);
        let reached: Vec<_> = anim.step(0.5).into_iter().map(|(_, a)| a.index).collect();
        // Three metres to the first task: reached within the 3.5 s mark.
        assert!(reached.is_empty() || reached == [1]);
        assert!(anim.playback().states()[0].route_index >= 1);
    }

    #[test]
    fn fleet_without_agents_is_immediately_done() {
        let s = ScenarioBuilder::new(Point::ORIGIN)
            .tasks(square_tasks())
            .fleet(FleetSpec::new("nobody", 0, Capacity::Unlimited, walker()))
            .build()
            .unwrap();
        let mut anim = Animation::for_fleet(&s, 0).unwrap();
        let summary = anim.run(1.0, 100.0, &mut NoopObserver).unwrap();
        assert!(summary.finished);
        assert_eq!(summary.elapsed, 0.0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_roundtrip {
    use super::*;

    #[test]
    fn scenario_json() {
        let s = square_scenario();
        let json = serde_json::to_string(&s).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
        assert!(back.validate().is_ok());
    }
}
