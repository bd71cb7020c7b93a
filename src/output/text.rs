//! Text rendering of an observation forest.

use crate::traces::ObservationNode;
use std::fmt::Write;

/// Render a forest as an indented list, two spaces per level
///
/// Each line reads `- <name> (<type>) [<id>]`; unnamed observations show
/// their id in place of the name.
pub fn render_tree(forest: &[ObservationNode]) -> String {
    let mut out = String::new();
    render_level(forest, 0, &mut out);
    out
}

fn render_level(nodes: &[ObservationNode], depth: usize, out: &mut String) {
    for node in nodes {
        let obs = &node.observation;
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{}- {} ({}) [{}]",
            "  ".repeat(depth),
            obs.display_name(),
            obs.observation_type,
            obs.id
        );
        render_level(&node.children, depth + 1, out);
    }
}
