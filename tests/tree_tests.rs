use chrono::{TimeZone, Utc};
use langfuse_trace::observations::Observation;
use langfuse_trace::traces::{
    build_observation_tree, count_nodes, flatten_forest, ObservationNode, Trace, TraceHeader,
};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn obs(id: &str, parent: Option<&str>, secs: i64) -> Observation {
    Observation {
        id: id.to_string(),
        parent_observation_id: parent.map(str::to_string),
        observation_type: "SPAN".to_string(),
        start_time: Utc.timestamp_opt(1_714_557_600 + secs, 0).unwrap(),
        ..Default::default()
    }
}

fn ids(nodes: &[ObservationNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.observation.id.as_str()).collect()
}

/// Small deterministic generator so the property checks are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

/// Acyclic observation set mixing nesting, empty parents and dangling parents
fn random_observations(seed: u64, count: usize) -> Vec<Observation> {
    let mut rng = Lcg(seed);
    let mut out: Vec<Observation> = Vec::with_capacity(count);

    for i in 0..count {
        let parent = match rng.next(10) {
            0 => None,
            1 => Some(String::new()),
            2 => Some(format!("missing-{}", i)),
            _ if i > 0 => Some(format!("o{}", rng.next(i as u64))),
            _ => None,
        };
        let start = rng.next(40) as i64;
        out.push(obs(&format!("o{}", i), parent.as_deref(), start));
    }

    // Shuffle so input order says nothing about nesting
    for i in (1..out.len()).rev() {
        let j = rng.next(i as u64 + 1) as usize;
        out.swap(i, j);
    }

    out
}

fn assert_sorted(nodes: &[ObservationNode]) {
    for pair in nodes.windows(2) {
        assert!(pair[0].observation.start_time <= pair[1].observation.start_time);
    }
    for node in nodes {
        assert_sorted(&node.children);
    }
}

#[test]
fn test_parent_with_two_children() {
    let forest = build_observation_tree(vec![
        obs("A", Some(""), 0),
        obs("B", Some("A"), 1),
        obs("C", Some("A"), 2),
    ]);

    assert_eq!(ids(&forest), vec!["A"]);
    assert_eq!(ids(&forest[0].children), vec!["B", "C"]);
    assert!(forest[0].children.iter().all(|c| c.children.is_empty()));
}

#[test]
fn test_dangling_parent_is_root() {
    let forest = build_observation_tree(vec![obs("A", Some("X"), 0)]);

    assert_eq!(ids(&forest), vec!["A"]);
    assert!(forest[0].children.is_empty());
}

#[test]
fn test_roots_ordered_by_start_time() {
    let forest = build_observation_tree(vec![obs("A", Some(""), 5), obs("B", Some(""), 1)]);

    assert_eq!(ids(&forest), vec!["B", "A"]);
}

#[test]
fn test_empty_input() {
    assert!(build_observation_tree(Vec::new()).is_empty());
}

#[test]
fn test_three_level_chain() {
    let forest = build_observation_tree(vec![
        obs("C", Some("B"), 2),
        obs("A", None, 0),
        obs("B", Some("A"), 1),
    ]);

    assert_eq!(ids(&forest), vec!["A"]);
    assert_eq!(ids(&forest[0].children), vec!["B"]);
    assert_eq!(ids(&forest[0].children[0].children), vec!["C"]);
    assert!(forest[0].children[0].children[0].children.is_empty());
}

#[test]
fn test_ties_keep_input_order() {
    let forest = build_observation_tree(vec![
        obs("root", None, 0),
        obs("second", Some("root"), 3),
        obs("first", Some("root"), 3),
        obs("late", None, 0),
    ]);

    assert_eq!(ids(&forest), vec!["root", "late"]);
    assert_eq!(ids(&forest[0].children), vec!["second", "first"]);
}

#[test]
fn test_child_of_dangling_root_stays_nested() {
    let forest = build_observation_tree(vec![
        obs("child", Some("orphan"), 2),
        obs("orphan", Some("filtered-out"), 1),
        obs("main", None, 0),
    ]);

    assert_eq!(ids(&forest), vec!["main", "orphan"]);
    assert_eq!(ids(&forest[1].children), vec!["child"]);
}

#[test]
fn test_payload_carried_through() {
    let mut generation = obs("gen", Some("span"), 1);
    generation.name = Some("chat".to_string());
    generation.model = Some("gpt-4o".to_string());
    generation.calculated_total_cost = Some(0.002);
    generation.input = serde_json::json!({ "messages": [] });

    let forest = build_observation_tree(vec![obs("span", None, 0), generation.clone()]);

    assert_eq!(forest[0].children[0].observation, generation);
}

#[test]
fn test_completeness_and_root_correctness() {
    for seed in 1..=20 {
        let input = random_observations(seed, 150);
        let known: HashSet<String> = input.iter().map(|o| o.id.clone()).collect();

        let forest = build_observation_tree(input.clone());
        assert_eq!(count_nodes(&forest), input.len());

        let flat_ids: HashSet<String> = flatten_forest(&forest).into_iter().map(|o| o.id).collect();
        assert_eq!(flat_ids, known);

        let expected_roots: HashSet<&str> = input
            .iter()
            .filter(|o| o.parent_id().map_or(true, |p| !known.contains(p)))
            .map(|o| o.id.as_str())
            .collect();
        let actual_roots: HashSet<&str> = ids(&forest).into_iter().collect();
        assert_eq!(actual_roots, expected_roots);
    }
}

#[test]
fn test_children_match_parent_references() {
    fn check(nodes: &[ObservationNode]) {
        for node in nodes {
            for child in &node.children {
                assert_eq!(child.observation.parent_id(), Some(node.observation.id.as_str()));
            }
            check(&node.children);
        }
    }

    for seed in 1..=10 {
        check(&build_observation_tree(random_observations(seed, 120)));
    }
}

#[test]
fn test_ordering_at_every_level() {
    for seed in 1..=20 {
        assert_sorted(&build_observation_tree(random_observations(seed, 150)));
    }
}

#[test]
fn test_determinism() {
    for seed in 1..=10 {
        let input = random_observations(seed, 100);
        assert_eq!(
            build_observation_tree(input.clone()),
            build_observation_tree(input)
        );
    }
}

#[test]
fn test_flatten_then_rebuild_is_stable() {
    for seed in 1..=20 {
        let forest = build_observation_tree(random_observations(seed, 150));
        let rebuilt = build_observation_tree(flatten_forest(&forest));
        assert_eq!(rebuilt, forest);
    }
}

#[test]
fn test_trace_into_tree_keeps_header() {
    let header = TraceHeader {
        id: "trace-1".to_string(),
        name: Some("rag-pipeline".to_string()),
        project_id: "proj".to_string(),
        tags: vec!["prod".to_string()],
        total_cost: Some(0.25),
        ..Default::default()
    };
    let trace = Trace {
        header: header.clone(),
        observations: vec![obs("b", Some("a"), 1), obs("a", None, 0)],
    };

    let tree = trace.to_trace_tree();
    assert_eq!(tree.header, header);
    assert_eq!(ids(&tree.root_node), vec!["a"]);
    assert_eq!(ids(&tree.root_node[0].children), vec!["b"]);
}
