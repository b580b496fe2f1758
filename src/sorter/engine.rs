// Selection sort engine with snapshot capture

use crate::snapshot::{Element, ElementState, RunStats, SortRun, Step, StepHistory};

/// Working state of one selection sort pass
struct Sorter {
    /// Array being sorted in place
    working: Vec<i64>,

    /// Steps recorded so far
    history: StepHistory,

    /// Running totals
    stats: RunStats,
}

/// Algorithm metadata attached to a snapshot
struct Marker {
    current_index: usize,
    min_index: Option<usize>,
    comparing: Vec<usize>,
    swapping: Vec<usize>,
    sorted_boundary: usize,
}

impl Sorter {
    fn new(input: &[i64]) -> Self {
        Sorter {
            working: input.to_vec(),
            history: StepHistory::new(),
            stats: RunStats::default(),
        }
    }

    /// Record the working array, tagging each position with `state_of(index)`
    fn snapshot<F>(&mut self, marker: Marker, description: String, state_of: F)
    where
        F: Fn(usize) -> ElementState,
    {
        let array = self
            .working
            .iter()
            .enumerate()
            .map(|(index, &value)| Element {
                value,
                index,
                state: state_of(index),
            })
            .collect();

        self.history.push(Step {
            array,
            current_index: marker.current_index,
            min_index: marker.min_index,
            comparing: marker.comparing,
            swapping: marker.swapping,
            description,
            sorted_boundary: marker.sorted_boundary,
        });
    }

    fn run(&mut self) {
        let n = self.working.len();

        self.snapshot(
            Marker {
                current_index: 0,
                min_index: Some(0),
                comparing: vec![],
                swapping: vec![],
                sorted_boundary: 0,
            },
            "Initial array - all elements are unsorted".to_string(),
            |_| ElementState::Unsorted,
        );

        for i in 0..n.saturating_sub(1) {
            self.select_minimum_into(i);
        }

        self.snapshot(
            Marker {
                current_index: n.saturating_sub(1),
                min_index: None,
                comparing: vec![],
                swapping: vec![],
                sorted_boundary: n,
            },
            "Sorting complete! All elements are now in ascending order.".to_string(),
            |_| ElementState::Sorted,
        );
    }

    /// One outer iteration: find the minimum of `[i, n)` and move it to `i`
    fn select_minimum_into(&mut self, i: usize) {
        let n = self.working.len();
        let mut min_index = i;

        self.snapshot(
            Marker {
                current_index: i,
                min_index: Some(min_index),
                comparing: vec![i],
                swapping: vec![],
                sorted_boundary: i,
            },
            format!(
                "Starting iteration {}: Looking for minimum in unsorted section",
                i + 1
            ),
            |index| {
                if index < i {
                    ElementState::Sorted
                } else if index == i {
                    ElementState::Comparing
                } else {
                    ElementState::Unsorted
                }
            },
        );

        for j in (i + 1)..n {
            self.stats.total_comparisons += 1;

            let description = format!(
                "Comparing {} (index {}) with current minimum {} (index {})",
                self.working[j], j, self.working[min_index], min_index
            );
            self.snapshot(
                Marker {
                    current_index: i,
                    min_index: Some(min_index),
                    comparing: vec![min_index, j],
                    swapping: vec![],
                    sorted_boundary: i,
                },
                description,
                |index| {
                    if index < i {
                        ElementState::Sorted
                    } else if index == min_index {
                        ElementState::Minimum
                    } else if index == j {
                        ElementState::Comparing
                    } else {
                        ElementState::Unsorted
                    }
                },
            );

            // Strict less-than: equal values keep the earlier minimum
            if self.working[j] < self.working[min_index] {
                min_index = j;

                let description = format!(
                    "New minimum found: {} at index {}",
                    self.working[min_index], min_index
                );
                self.snapshot(
                    Marker {
                        current_index: i,
                        min_index: Some(min_index),
                        comparing: vec![],
                        swapping: vec![],
                        sorted_boundary: i,
                    },
                    description,
                    |index| {
                        if index < i {
                            ElementState::Sorted
                        } else if index == min_index {
                            ElementState::Minimum
                        } else {
                            ElementState::Unsorted
                        }
                    },
                );
            }
        }

        if min_index != i {
            self.stats.total_swaps += 1;

            let description = format!(
                "Swapping {} (index {}) with {} (index {})",
                self.working[i], i, self.working[min_index], min_index
            );
            self.snapshot(
                Marker {
                    current_index: i,
                    min_index: Some(min_index),
                    comparing: vec![],
                    swapping: vec![i, min_index],
                    sorted_boundary: i,
                },
                description,
                |index| {
                    if index < i {
                        ElementState::Sorted
                    } else if index == i || index == min_index {
                        ElementState::Swapping
                    } else {
                        ElementState::Unsorted
                    }
                },
            );

            self.working.swap(i, min_index);
        }

        let description = format!(
            "Element {} is now in its correct position. Sorted boundary moves to index {}",
            self.working[i],
            i + 1
        );
        self.snapshot(
            Marker {
                current_index: i,
                min_index: None,
                comparing: vec![],
                swapping: vec![],
                sorted_boundary: i + 1,
            },
            description,
            |index| {
                if index <= i {
                    ElementState::Sorted
                } else {
                    ElementState::Unsorted
                }
            },
        );
    }
}

/// Generate every step of an ascending selection sort over `input`.
///
/// Pure and total: the caller is responsible for bounding the input length.
pub fn generate(input: &[i64]) -> SortRun {
    let mut sorter = Sorter::new(input);
    sorter.run();

    tracing::debug!(
        elements = input.len(),
        steps = sorter.history.len(),
        comparisons = sorter.stats.total_comparisons,
        swaps = sorter.stats.total_swaps,
        "generated selection sort run"
    );

    SortRun {
        input: input.to_vec(),
        history: sorter.history,
        stats: sorter.stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn states(step: &Step) -> Vec<ElementState> {
        step.array.iter().map(|e| e.state).collect()
    }

    #[test]
    fn test_default_input_stats() {
        let run = generate(&[7, 8, 5, 10, 6, 3, 2, 4, 1, 9]);
        assert_eq!(run.stats.total_comparisons, 45);
        assert_eq!(run.stats.total_swaps, 8);
        assert_eq!(
            run.history.last().unwrap().values(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
        );
    }

    #[test]
    fn test_single_element_has_two_steps() {
        let run = generate(&[42]);
        assert_eq!(run.history.len(), 2);
        assert_eq!(run.stats, RunStats::default());

        let first = run.history.get(0).unwrap();
        let last = run.history.get(1).unwrap();
        assert_eq!(states(first), vec![ElementState::Unsorted]);
        assert_eq!(states(last), vec![ElementState::Sorted]);
        assert_eq!(last.sorted_boundary, 1);
        assert_eq!(last.current_index, 0);
    }

    #[test]
    fn test_two_elements_full_trace() {
        use ElementState::*;

        let run = generate(&[3, 2]);
        let descriptions: Vec<&str> = run.history.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Initial array - all elements are unsorted",
                "Starting iteration 1: Looking for minimum in unsorted section",
                "Comparing 2 (index 1) with current minimum 3 (index 0)",
                "New minimum found: 2 at index 1",
                "Swapping 3 (index 0) with 2 (index 1)",
                "Element 2 is now in its correct position. Sorted boundary moves to index 1",
                "Sorting complete! All elements are now in ascending order.",
            ]
        );

        let tags: Vec<Vec<ElementState>> = run.history.iter().map(states).collect();
        assert_eq!(
            tags,
            vec![
                vec![Unsorted, Unsorted],
                vec![Comparing, Unsorted],
                vec![Minimum, Comparing],
                vec![Unsorted, Minimum],
                vec![Swapping, Swapping],
                vec![Sorted, Unsorted],
                vec![Sorted, Sorted],
            ]
        );

        // The swap step still shows the pre-swap array
        assert_eq!(run.history.get(4).unwrap().values(), vec![3, 2]);
        assert_eq!(run.history.get(4).unwrap().swapping, vec![0, 1]);
        assert_eq!(run.history.get(5).unwrap().values(), vec![2, 3]);
        assert_eq!(run.history.get(5).unwrap().min_index, None);
    }

    #[test]
    fn test_equal_values_do_not_update_minimum() {
        let run = generate(&[5, 5, 5]);
        assert_eq!(run.stats.total_comparisons, 3);
        assert_eq!(run.stats.total_swaps, 0);
        assert!(
            !run.history
                .iter()
                .any(|s| s.description.starts_with("New minimum found"))
        );
    }

    #[test]
    fn test_already_sorted_input_never_swaps() {
        let run = generate(&[1, 2, 3, 4]);
        assert_eq!(run.stats.total_swaps, 0);
        assert!(run.history.iter().all(|s| s.swapping.is_empty()));
    }

    #[test]
    fn test_negative_values_sort_ascending() {
        let run = generate(&[0, -3, 7, -10]);
        assert_eq!(run.history.last().unwrap().values(), vec![-10, -3, 0, 7]);
    }

    #[test]
    fn test_empty_input_is_total() {
        let run = generate(&[]);
        assert_eq!(run.history.len(), 2);
        assert_eq!(run.history.last().unwrap().sorted_boundary, 0);
    }
}
