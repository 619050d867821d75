use crate::dishes::DishId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No dishes to navigate")]
    EmptyList,

    #[error("Dish {0} is not in the dish list")]
    DishNotFound(DishId),
}

/// Ids of the dishes before and after the current one, wrapping at both ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacent {
    pub prev: DishId,
    pub next: DishId,
}

/// Computes cyclic prev/next ids for `current` within `ids`.
///
/// A single-element list yields the same id for both sides.
pub fn compute_adjacent(ids: &[DishId], current: &str) -> Result<Adjacent, NavigationError> {
    let count = ids.len();
    if count == 0 {
        return Err(NavigationError::EmptyList);
    }
    let index = ids
        .iter()
        .position(|id| id == current)
        .ok_or_else(|| NavigationError::DishNotFound(current.to_string()))?;

    let prev = ids.get((count + index - 1) % count);
    let next = ids.get((index + 1) % count);
    prev.zip(next)
        .map(|(prev, next)| Adjacent {
            prev: prev.clone(),
            next: next.clone(),
        })
        .ok_or(NavigationError::EmptyList)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(values: &[&str]) -> Vec<DishId> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn adjacent(prev: &str, next: &str) -> Adjacent {
        Adjacent {
            prev: prev.to_string(),
            next: next.to_string(),
        }
    }

    #[test]
    fn test_wraps_at_start() {
        assert_eq!(
            compute_adjacent(&ids(&["a", "b", "c"]), "a"),
            Ok(adjacent("c", "b"))
        );
    }

    #[test]
    fn test_wraps_at_end() {
        assert_eq!(
            compute_adjacent(&ids(&["a", "b", "c"]), "c"),
            Ok(adjacent("b", "a"))
        );
    }

    #[test]
    fn test_interior() {
        assert_eq!(
            compute_adjacent(&ids(&["a", "b", "c", "d"]), "b"),
            Ok(adjacent("a", "c"))
        );
    }

    #[test]
    fn test_singleton() {
        assert_eq!(compute_adjacent(&ids(&["a"]), "a"), Ok(adjacent("a", "a")));
    }

    #[test]
    fn test_missing_current_is_an_error() {
        assert_eq!(
            compute_adjacent(&ids(&["a", "b", "c"]), "z"),
            Err(NavigationError::DishNotFound("z".to_string()))
        );
    }

    #[test]
    fn test_empty_list_is_an_error() {
        assert_eq!(compute_adjacent(&[], "a"), Err(NavigationError::EmptyList));
    }

    fn unique_ids() -> impl Strategy<Value = Vec<DishId>> {
        prop::collection::btree_set("[a-z0-9]{1,6}", 1..20)
            .prop_map(|set| set.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_adjacent_ids_are_members(list in unique_ids(), pick in any::<prop::sample::Index>()) {
            let current = pick.get(&list).clone();
            let result = compute_adjacent(&list, &current).unwrap();
            prop_assert!(list.contains(&result.prev));
            prop_assert!(list.contains(&result.next));
        }

        #[test]
        fn prop_next_cycles_back_to_start(list in unique_ids(), pick in any::<prop::sample::Index>()) {
            let start = pick.get(&list).clone();
            let mut current = start.clone();
            for _ in 0..list.len() {
                current = compute_adjacent(&list, &current).unwrap().next;
            }
            prop_assert_eq!(current, start);
        }

        #[test]
        fn prop_prev_cycles_back_to_start(list in unique_ids(), pick in any::<prop::sample::Index>()) {
            let start = pick.get(&list).clone();
            let mut current = start.clone();
            for _ in 0..list.len() {
                current = compute_adjacent(&list, &current).unwrap().prev;
            }
            prop_assert_eq!(current, start);
        }

        #[test]
        fn prop_prev_undoes_next(list in unique_ids(), pick in any::<prop::sample::Index>()) {
            let start = pick.get(&list).clone();
            let next = compute_adjacent(&list, &start).unwrap().next;
            prop_assert_eq!(compute_adjacent(&list, &next).unwrap().prev, start);
        }
    }
}
