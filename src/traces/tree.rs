//! Rebuild the observation hierarchy of a trace.
//!
//! The API returns a trace's observations as a flat, unordered list where each
//! entry may name its parent observation. This module turns that list back
//! into a forest:
//!
//! ```text
//! root-span
//!   retrieve
//!   generate
//!     tool-call
//! ```
//!
//! An observation is a root when its parent is empty or names an observation
//! that is not part of the set (for example a parent excluded by a filter).
//! Siblings and roots are ordered by ascending start time; ties keep input
//! order.

use crate::observations::Observation;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One observation and its ordered children
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationNode {
    #[serde(flatten)]
    pub observation: Observation,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ObservationNode>,
}

impl ObservationNode {
    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + count_nodes(&self.children)
    }

    /// Number of levels in this subtree (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        1 + forest_depth(&self.children)
    }
}

/// Build an ordered forest from a trace's flat observation list
///
/// **Public** - main entry point for tree building
///
/// # Arguments
/// * `observations` - All observations of one trace, in any order
///
/// # Returns
/// Root nodes ordered by start time, each holding its ordered children
///
/// # Algorithm
/// 1. Collect the ids present in the input
/// 2. Bucket every observation under its parent id, or under the roots when
///    the parent is empty or not present
/// 3. Starting at the roots, sort each level by start time and attach the
///    bucket of each node as its children
///
/// Buckets are consumed as they are attached, so a parent cycle can never be
/// walked twice. Observations stranded by a cycle are promoted to roots,
/// earliest first, until every observation is placed.
pub fn build_observation_tree(observations: Vec<Observation>) -> Vec<ObservationNode> {
    let total = observations.len();

    let valid_ids: HashSet<String> = observations.iter().map(|o| o.id.clone()).collect();

    let mut roots: Vec<Observation> = Vec::new();
    let mut children_of: HashMap<String, Vec<Observation>> = HashMap::new();

    for observation in observations {
        match observation
            .parent_id()
            .filter(|parent| valid_ids.contains(*parent))
        {
            Some(parent) => {
                let parent = parent.to_string();
                children_of.entry(parent).or_default().push(observation);
            }
            None => roots.push(observation),
        }
    }

    let mut forest = attach_level(roots, &mut children_of);

    if !children_of.is_empty() {
        while let Some(stranded) = take_earliest_stranded(&mut children_of) {
            warn!(
                "Observation {} is part of a parent cycle, promoting it to a root",
                stranded.id
            );
            forest.extend(attach_level(vec![stranded], &mut children_of));
        }
        forest.sort_by_key(|node| node.observation.start_time);
    }

    debug!(
        "Built observation tree: {} observations, {} roots",
        total,
        forest.len()
    );

    forest
}

/// Sort one level by start time and attach each node's bucket recursively
fn attach_level(
    mut level: Vec<Observation>,
    children_of: &mut HashMap<String, Vec<Observation>>,
) -> Vec<ObservationNode> {
    level.sort_by_key(|observation| observation.start_time);

    level
        .into_iter()
        .map(|observation| {
            let children = children_of
                .remove(&observation.id)
                .map(|bucket| attach_level(bucket, children_of))
                .unwrap_or_default();

            ObservationNode {
                observation,
                children,
            }
        })
        .collect()
}

/// Detach the earliest observation still waiting in a bucket
///
/// Ties on start time fall back to the id so the choice does not depend on
/// hash map iteration order.
///
/// Each call scans every stranded observation, so a trace with many separate
/// cycles costs quadratic time here. Acyclic input never reaches this path.
fn take_earliest_stranded(
    children_of: &mut HashMap<String, Vec<Observation>>,
) -> Option<Observation> {
    let (parent, index) = children_of
        .iter()
        .flat_map(|(parent, bucket)| {
            bucket
                .iter()
                .enumerate()
                .map(move |(index, observation)| (parent, index, observation))
        })
        .min_by(|a, b| {
            a.2.start_time
                .cmp(&b.2.start_time)
                .then_with(|| a.2.id.cmp(&b.2.id))
        })
        .map(|(parent, index, _)| (parent.clone(), index))?;

    let bucket = children_of.get_mut(&parent)?;
    let stranded = bucket.remove(index);
    if bucket.is_empty() {
        children_of.remove(&parent);
    }

    Some(stranded)
}

/// Flatten a forest back into observations, parents before children
pub fn flatten_forest(forest: &[ObservationNode]) -> Vec<Observation> {
    let mut out = Vec::with_capacity(count_nodes(forest));
    collect_preorder(forest, &mut out);
    out
}

fn collect_preorder(nodes: &[ObservationNode], out: &mut Vec<Observation>) {
    for node in nodes {
        out.push(node.observation.clone());
        collect_preorder(&node.children, out);
    }
}

/// Total number of nodes in a forest, counting every descendant
pub fn count_nodes(forest: &[ObservationNode]) -> usize {
    forest.iter().map(ObservationNode::node_count).sum()
}

/// Deepest level in a forest (0 for an empty forest)
pub fn forest_depth(forest: &[ObservationNode]) -> usize {
    forest.iter().map(ObservationNode::depth).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn obs(id: &str, parent: &str, secs: i64) -> Observation {
        Observation {
            id: id.to_string(),
            parent_observation_id: Some(parent.to_string()),
            start_time: Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap(),
            ..Default::default()
        }
    }

    fn ids(nodes: &[ObservationNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.observation.id.as_str()).collect()
    }

    #[test]
    fn test_self_parent_becomes_root() {
        let forest = build_observation_tree(vec![obs("a", "a", 0)]);
        assert_eq!(ids(&forest), vec!["a"]);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn test_two_cycle_keeps_every_observation() {
        let forest = build_observation_tree(vec![
            obs("a", "b", 1),
            obs("b", "a", 0),
            obs("c", "", 5),
            obs("d", "a", 2),
        ]);

        assert_eq!(count_nodes(&forest), 4);
        // b starts first, so it is promoted and a hangs below it
        assert_eq!(ids(&forest), vec!["b", "c"]);
        assert_eq!(ids(&forest[0].children), vec!["a"]);
        assert_eq!(ids(&forest[0].children[0].children), vec!["d"]);
    }

    #[test]
    fn test_depth_and_count() {
        let forest = build_observation_tree(vec![
            obs("a", "", 0),
            obs("b", "a", 1),
            obs("c", "b", 2),
            obs("d", "", 3),
        ]);

        assert_eq!(count_nodes(&forest), 4);
        assert_eq!(forest_depth(&forest), 3);
        assert_eq!(forest[0].node_count(), 3);
        assert_eq!(forest[1].depth(), 1);
        assert_eq!(forest_depth(&[]), 0);
    }

    #[test]
    fn test_flatten_is_preorder() {
        let forest = build_observation_tree(vec![
            obs("c", "a", 2),
            obs("b", "a", 1),
            obs("a", "", 0),
            obs("d", "", 3),
        ]);

        let flat: Vec<String> = flatten_forest(&forest).into_iter().map(|o| o.id).collect();
        assert_eq!(flat, vec!["a", "b", "c", "d"]);
    }
}
