use std::{collections::VecDeque, hash::Hash};

use crate::HashSet;

/// Iterate all nodes reachable from the start nodes according to a
/// neighbors function, in breadth-first order.
///
/// Every node is yielded exactly once.
pub fn flood_fill<'a, T, I>(
    mut neighbors: impl FnMut(&T) -> I + 'a,
    starts: impl IntoIterator<Item = T>,
) -> impl Iterator<Item = T> + 'a
where
    T: Clone + Eq + Hash + 'a,
    I: IntoIterator<Item = T>,
{
    let mut edge: VecDeque<T> = starts.into_iter().collect();
    let mut seen = HashSet::default();

    std::iter::from_fn(move || {
        while let Some(node) = edge.pop_front() {
            if seen.insert(node.clone()) {
                edge.extend(neighbors(&node));
                return Some(node);
            }
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_component() {
        // Two components, 0-1-2 and 3-4.
        let edges = [(0, 1), (1, 2), (3, 4)];
        let neighbors = |&n: &i32| {
            edges
                .iter()
                .filter_map(move |&(a, b)| {
                    if a == n {
                        Some(b)
                    } else if b == n {
                        Some(a)
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>()
        };

        let mut reached: Vec<i32> = flood_fill(neighbors, [0]).collect();
        reached.sort();
        assert_eq!(reached, vec![0, 1, 2]);

        let mut reached: Vec<i32> = flood_fill(neighbors, [4]).collect();
        reached.sort();
        assert_eq!(reached, vec![3, 4]);
    }

    #[test]
    fn no_starts() {
        assert_eq!(flood_fill(|_: &i32| vec![1], []).count(), 0);
    }
}
