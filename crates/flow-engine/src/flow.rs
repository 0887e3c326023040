use std::collections::{HashMap, VecDeque};

use crate::error::AnalyzerError;
use crate::store::{Component, INTERNET_ID};

/// Finds the minimum-hop flow from the internet (id 0) to `destination`.
///
/// The returned path lists component ids in order, root excluded,
/// ending with the destination. Querying the root itself yields an
/// empty flow. Every call walks the snapshot it is given; results are
/// never cached across topology mutations.
pub fn find_shortest_path_from_internet(
    topology: &HashMap<u32, Component>,
    destination: u32,
) -> Result<Vec<u32>, AnalyzerError> {
    if !topology.contains_key(&destination) {
        return Err(AnalyzerError::ComponentNotFound(destination));
    }
    if destination == INTERNET_ID {
        return Ok(Vec::new());
    }

    // Edges are unweighted, so breadth-first order finalizes every node
    // at its minimum hop count. A node that already has a predecessor
    // is never re-expanded, which keeps cycles from looping forever.
    let mut prev: HashMap<u32, u32> = HashMap::new();
    let mut queue = VecDeque::from([INTERNET_ID]);

    while let Some(cid) = queue.pop_front() {
        if cid == destination {
            break;
        }
        let Some(component) = topology.get(&cid) else {
            continue;
        };
        for &next in &component.connections {
            if next != INTERNET_ID && !prev.contains_key(&next) {
                prev.insert(next, cid);
                queue.push_back(next);
            }
        }
    }

    if !prev.contains_key(&destination) {
        tracing::debug!(destination, "destination is unreachable from the internet");
        return Err(AnalyzerError::NoPathToComponent(destination));
    }

    let mut flow = vec![destination];
    let mut cid = destination;
    while let Some(&parent) = prev.get(&cid) {
        if parent == INTERNET_ID {
            break;
        }
        flow.push(parent);
        cid = parent;
    }
    flow.reverse();

    tracing::debug!(
        destination,
        hops = flow.len(),
        "found flow from the internet"
    );
    Ok(flow)
}
