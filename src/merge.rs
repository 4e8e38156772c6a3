//! Order-preserving merge of several ordered lists.

use std::collections::VecDeque;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Merges ordered lists into one list that preserves the relative order of
/// every input pair, or fails with [`Error::UnsatisfiableOrder`] when the
/// pair constraints contradict each other.
///
/// Consecutive items of each list contribute a before/after edge, counted
/// with multiplicity when the same pair occurs in several lists. Items are
/// then emitted in topological order (Kahn's algorithm). Ties break by the
/// order in which items were first seen across the input lists, so the
/// result is deterministic and a single list merges to itself.
pub fn merge<T>(lists: &[Vec<T>]) -> Result<Vec<T>>
where
    T: Clone + Eq + Hash,
{
    // In-degree per item, in first-seen order. List heads enter with zero.
    let mut pending: IndexMap<T, usize> = IndexMap::new();
    let mut successors: IndexMap<T, IndexMap<T, usize>> = IndexMap::new();

    for list in lists {
        let mut parent: Option<&T> = None;
        for item in list {
            match parent {
                Some(parent) => {
                    *pending.entry(item.clone()).or_insert(0) += 1;
                    *successors
                        .entry(parent.clone())
                        .or_default()
                        .entry(item.clone())
                        .or_insert(0) += 1;
                }
                None => {
                    pending.entry(item.clone()).or_insert(0);
                }
            }
            parent = Some(item);
        }
    }

    let total = pending.len();
    let mut queue: VecDeque<T> = pending
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(item, _)| item.clone())
        .collect();

    let mut merged = Vec::with_capacity(total);
    while let Some(item) = queue.pop_front() {
        if let Some(children) = successors.get(&item) {
            for (child, count) in children {
                if let Some(degree) = pending.get_mut(child) {
                    *degree -= *count;
                    if *degree == 0 {
                        queue.push_back(child.clone());
                    }
                }
            }
        }
        merged.push(item);
    }

    if merged.len() != total {
        return Err(Error::UnsatisfiableOrder);
    }

    log::trace!("merged {} lists into {} items", lists.len(), merged.len());
    Ok(merged)
}
