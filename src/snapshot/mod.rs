// Step snapshots recorded while sorting

use serde::Serialize;
use std::fmt;

/// Visual/semantic tag of one array position within one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementState {
    Sorted,
    Unsorted,
    Comparing,
    Swapping,
    Minimum,
}

impl ElementState {
    /// Every state, in legend order
    pub const ALL: [ElementState; 5] = [
        ElementState::Sorted,
        ElementState::Unsorted,
        ElementState::Comparing,
        ElementState::Swapping,
        ElementState::Minimum,
    ];

    /// Single-character marker used in plain-text traces
    pub fn marker(self) -> char {
        match self {
            ElementState::Sorted => '.',
            ElementState::Unsorted => ' ',
            ElementState::Comparing => '?',
            ElementState::Swapping => '~',
            ElementState::Minimum => '*',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ElementState::Sorted => "Sorted",
            ElementState::Unsorted => "Unsorted",
            ElementState::Comparing => "Comparing",
            ElementState::Swapping => "Swapping",
            ElementState::Minimum => "Minimum",
        }
    }
}

/// One value at one array position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Element {
    pub value: i64,
    pub index: usize,
    pub state: ElementState,
}

/// Snapshot of the sort at one semantically distinct moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub array: Vec<Element>,
    pub current_index: usize, // Outer loop index
    pub min_index: Option<usize>,
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    pub description: String,
    pub sorted_boundary: usize,
}

impl Step {
    /// Values in index order
    pub fn values(&self) -> Vec<i64> {
        self.array.iter().map(|e| e.value).collect()
    }

    /// Short heading: the description up to its first colon
    pub fn title(&self) -> &str {
        self.description
            .split(':')
            .next()
            .unwrap_or(&self.description)
    }
}

/// Plain-text rendering: each value followed by its state marker, with `|`
/// at the sorted boundary
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for element in &self.array {
            if element.index == self.sorted_boundary && element.index > 0 {
                write!(f, " |")?;
            }
            write!(f, " {}{}", element.value, element.state.marker())?;
        }
        write!(f, " ]")
    }
}

/// Totals accumulated over one generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub total_comparisons: usize,
    pub total_swaps: usize,
}

/// Ordered steps produced by one generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StepHistory {
    steps: Vec<Step>,
}

impl StepHistory {
    pub fn new() -> Self {
        StepHistory { steps: Vec::new() }
    }

    /// Add a step to history
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a StepHistory {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Complete result of sorting one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortRun {
    pub input: Vec<i64>,
    pub history: StepHistory,
    pub stats: RunStats,
}
