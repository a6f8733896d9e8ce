//! Painter's-algorithm ordering of figure members.
//!
//! Only members whose screen rectangles overlap constrain each other. Each
//! such pair is oriented with [`occlusion::compare`] into a "draw before"
//! edge, and the members are then topologically sorted (Kahn's algorithm,
//! lowest index first among the ready ones).
//!
//! Pairwise comparisons need not be consistent: three bones can each cover
//! the next. When no member is ready, the one reaching farthest back (the
//! largest projected depth among its balls) is drawn next regardless of its
//! remaining constraints, and sorting carries on.
//!
//! Time complexity: O(n²) comparisons for n members.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::error::Result;
use crate::occlusion;
use crate::projection::WorldView;
use crate::scene::{Node, Scene};

/// Returns member indices in back-to-front draw order.
///
/// Every index in `0..nodes.len()` appears exactly once.
pub fn draw_order(scene: &Scene, view: &WorldView, nodes: &[Node]) -> Result<Vec<usize>> {
    let n = nodes.len();
    let boundings = nodes
        .iter()
        .map(|node| scene.node_bounding(node))
        .collect::<Result<Vec<_>>>()?;

    // pending[i]: members that still have to be drawn before i.
    // after[i]: members waiting for i.
    let mut pending = vec![0usize; n];
    let mut after: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        for j in i + 1..n {
            let (Some(a), Some(b)) = (boundings[i], boundings[j]) else {
                continue;
            };
            if !a.intersects(&b) {
                continue;
            }
            match occlusion::compare(scene, view, &nodes[i], &nodes[j])? {
                // i is in front: j goes first.
                Ordering::Less => {
                    after[j].push(i);
                    pending[i] += 1;
                }
                Ordering::Greater => {
                    after[i].push(j);
                    pending[j] += 1;
                }
                Ordering::Equal => {}
            }
        }
    }

    let mut ready: BTreeSet<usize> = (0..n).filter(|&i| pending[i] == 0).collect();
    let mut drawn = vec![false; n];
    let mut order = Vec::with_capacity(n);

    while order.len() < n {
        let next = match ready.pop_first() {
            Some(i) => i,
            None => {
                let forced = farthest_back(scene, nodes, &drawn)?;
                log::trace!("draw order cycle: forcing member {forced}");
                forced
            }
        };
        drawn[next] = true;
        order.push(next);
        for &waiting in &after[next] {
            if drawn[waiting] {
                continue;
            }
            pending[waiting] -= 1;
            if pending[waiting] == 0 {
                ready.insert(waiting);
            }
        }
    }

    Ok(order)
}

/// Undrawn member whose deepest ball is farthest back; lowest index on ties.
fn farthest_back(scene: &Scene, nodes: &[Node], drawn: &[bool]) -> Result<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, node) in nodes.iter().enumerate() {
        if drawn[i] {
            continue;
        }
        let depth = farthest_depth(scene, node)?;
        if best.map_or(true, |(_, d)| depth > d) {
            best = Some((i, depth));
        }
    }
    // Only called while some member is undrawn.
    Ok(best.map_or(0, |(i, _)| i))
}

/// Largest projected depth among a member's balls; an empty figure counts as
/// infinitely near.
fn farthest_depth(scene: &Scene, node: &Node) -> Result<f64> {
    let mut depth = f64::NEG_INFINITY;
    for id in scene.node_balls(node) {
        depth = depth.max(scene.projection(id)?.z);
    }
    Ok(depth)
}
