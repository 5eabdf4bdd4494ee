use stepdag::dag::{AlphabetOffsetCost, Scheduler, ordinal_value, timed_run};
use stepdag::errors::StepdagError;
use stepdag_test_utils::builders::{GraphBuilder, sample_graph};
use stepdag_test_utils::init_tracing;

fn unit(_: &str) -> i64 {
    1
}

#[test]
fn sample_graph_two_workers_alphabet_cost_finishes_at_15() {
    init_tracing();
    let graph = sample_graph();

    let finish = timed_run(&graph, 2, &AlphabetOffsetCost::new(0)).unwrap();

    assert_eq!(finish, 15);
}

#[test]
fn sample_graph_timeline_matches_policy() {
    let graph = sample_graph();
    let cost = AlphabetOffsetCost::new(0);

    let run = Scheduler::new(&graph).timed(2, &cost).unwrap();

    let rows: Vec<(&str, usize, u64, u64)> = run
        .timeline
        .iter()
        .map(|a| (a.task.as_str(), a.worker, a.start, a.finish))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("C", 0, 0, 3),
            ("A", 0, 3, 4),
            ("F", 1, 3, 9),
            ("B", 0, 4, 6),
            ("D", 0, 6, 10),
            ("E", 0, 10, 15),
        ]
    );
    assert_eq!(run.finish_time, 15);
    assert_eq!(run.worker_count, 2);
}

#[test]
fn default_offset_and_five_workers() {
    let graph = sample_graph();

    let run = Scheduler::new(&graph)
        .timed(5, &AlphabetOffsetCost::new(60))
        .unwrap();

    assert_eq!(run.finish_time, 253);
    // F still holds slot 1 when B and D become ready.
    assert_eq!(run.assignment_for("D").map(|a| a.worker), Some(2));
}

#[test]
fn one_worker_unit_cost_takes_one_tick_per_task() {
    let graph = sample_graph();
    assert_eq!(timed_run(&graph, 1, &unit).unwrap(), graph.len() as u64);
}

#[test]
fn one_worker_sums_all_costs() {
    let graph = sample_graph();
    // 1 + 2 + 3 + 4 + 5 + 6
    assert_eq!(timed_run(&graph, 1, &ordinal_value).unwrap(), 21);
}

#[test]
fn single_worker_runs_in_serial_order() {
    let graph = sample_graph();
    let scheduler = Scheduler::new(&graph);

    let run = scheduler.timed(1, &ordinal_value).unwrap();
    let timed_order: Vec<String> = run.timeline.iter().map(|a| a.task.clone()).collect();

    assert_eq!(timed_order, scheduler.sequential_order().unwrap());
}

#[test]
fn more_workers_never_hurt_on_sample_graph() {
    let graph = sample_graph();

    let times: Vec<u64> = (1..=6)
        .map(|w| timed_run(&graph, w, &ordinal_value).unwrap())
        .collect();

    assert_eq!(times, vec![21, 15, 15, 15, 15, 15]);
    assert!(times.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn more_workers_never_hurt_on_wide_graph() {
    let graph = GraphBuilder::new()
        .fan_out("A", &["B", "C", "D", "E", "F", "G"])
        .build();

    let times: Vec<u64> = [1, 2, 3, 6, 10]
        .into_iter()
        .map(|w| timed_run(&graph, w, &unit).unwrap())
        .collect();

    assert_eq!(times, vec![7, 4, 3, 2, 2]);
}

#[test]
fn clock_jumps_between_events() {
    let graph = GraphBuilder::new().chain(&["A", "B"]).build();
    let cost = |_: &str| 1_000_000_i64;
    let scheduler = Scheduler::new(&graph);
    let mut sim = scheduler.simulation(1, &cost).unwrap();

    let first = sim.step().unwrap();
    assert_eq!(first.clock, 0);
    assert_eq!(sim.clock(), 1_000_000);
    assert_eq!(sim.in_flight().len(), 1);

    let second = sim.step().unwrap();
    assert_eq!(second.drained, vec!["A".to_string()]);
    assert_eq!(sim.clock(), 2_000_000);

    let last = sim.step().unwrap();
    assert!(last.finished);
    assert!(sim.is_finished());
}

#[test]
fn zero_workers_is_an_error() {
    let graph = sample_graph();
    assert!(matches!(
        timed_run(&graph, 0, &unit),
        Err(StepdagError::InvalidWorkerCount(0))
    ));
}

#[test]
fn negative_cost_is_an_error() {
    let graph = sample_graph();
    let cost = |t: &str| if t == "F" { -3_i64 } else { 1 };

    match timed_run(&graph, 2, &cost) {
        Err(StepdagError::InvalidCost { task, cost }) => {
            assert_eq!(task, "F");
            assert_eq!(cost, -3);
        }
        other => panic!("expected InvalidCost, got {other:?}"),
    }
}

#[test]
fn multi_letter_names_need_an_offset() {
    let graph = GraphBuilder::new().edge("build", "test").build();

    let err = timed_run(&graph, 1, &AlphabetOffsetCost::new(0)).unwrap_err();
    assert!(matches!(err, StepdagError::InvalidCost { .. }));

    assert_eq!(
        timed_run(&graph, 1, &AlphabetOffsetCost::new(5)).unwrap(),
        10
    );
}

#[test]
fn cost_past_the_clock_range_is_an_error() {
    let graph = GraphBuilder::new().chain(&["A", "B", "C"]).build();
    let cost = |_: &str| i64::MAX;

    // A and B fit (2 * i64::MAX < u64::MAX); C cannot start without wrapping.
    match timed_run(&graph, 1, &cost) {
        Err(StepdagError::ClockOverflow { task, start, cost }) => {
            assert_eq!(task, "C");
            assert_eq!(start, 2 * i64::MAX as u64);
            assert_eq!(cost, i64::MAX);
        }
        other => panic!("expected ClockOverflow, got {other:?}"),
    }
}

#[test]
fn huge_base_offset_saturates_instead_of_wrapping() {
    let pair = GraphBuilder::new().chain(&["A", "B"]).build();
    let cost = AlphabetOffsetCost::new(i64::MAX);

    assert_eq!(timed_run(&pair, 1, &cost).unwrap(), 2 * i64::MAX as u64);

    let err = timed_run(&sample_graph(), 5, &cost).unwrap_err();
    assert!(matches!(err, StepdagError::ClockOverflow { .. }));
}

#[test]
fn two_cycle_is_malformed_not_a_hang() {
    let graph = GraphBuilder::new().edge("A", "B").edge("B", "A").build();

    match timed_run(&graph, 3, &unit) {
        Err(StepdagError::MalformedGraph { remaining, .. }) => {
            assert_eq!(remaining, vec!["A".to_string(), "B".to_string()]);
        }
        other => panic!("expected MalformedGraph, got {other:?}"),
    }
}

#[test]
fn cycle_after_progress_is_detected_once_pool_drains() {
    let graph = GraphBuilder::new()
        .edge("X", "A")
        .edge("A", "B")
        .edge("B", "A")
        .build();

    match timed_run(&graph, 2, &unit) {
        Err(StepdagError::MalformedGraph {
            remaining,
            cycle_hint,
        }) => {
            assert_eq!(remaining, vec!["A".to_string(), "B".to_string()]);
            assert!(matches!(cycle_hint.as_deref(), Some("A") | Some("B")));
        }
        other => panic!("expected MalformedGraph, got {other:?}"),
    }
}
