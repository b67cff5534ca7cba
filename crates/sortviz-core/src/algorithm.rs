//! Closed set of supported algorithms and selector parsing.

use crate::error::SortError;
use crate::sorts::{
    bubble::BubbleSort, insertion::InsertionSort, merge::MergeSort, quick::QuickSort,
    radix::RadixSort, selection::SelectionSort, TraceSort,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Radix,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Radix,
    ];

    /// Canonical selector.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Radix => "radix",
        }
    }

    /// Display label for menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Radix => "Radix Sort",
        }
    }

    /// Whether equal values keep their relative order.
    pub fn is_stable(self) -> bool {
        match self {
            Self::Bubble | Self::Insertion | Self::Merge | Self::Radix => true,
            Self::Selection | Self::Quick => false,
        }
    }

    pub fn requires_non_negative(self) -> bool {
        matches!(self, Self::Radix)
    }

    pub(crate) fn sorter(self) -> &'static dyn TraceSort {
        match self {
            Self::Bubble => &BubbleSort,
            Self::Selection => &SelectionSort,
            Self::Insertion => &InsertionSort,
            Self::Merge => &MergeSort,
            Self::Quick => &QuickSort,
            Self::Radix => &RadixSort,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts canonical names and the `<name>Sort` route aliases, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let key = lowered
            .strip_suffix("sort")
            .map(|k| k.trim_end_matches(|c: char| c == '_' || c == '-' || c == ' '))
            .unwrap_or(&lowered);
        match key {
            "bubble" => Ok(Self::Bubble),
            "selection" => Ok(Self::Selection),
            "insertion" => Ok(Self::Insertion),
            "merge" => Ok(Self::Merge),
            "quick" => Ok(Self::Quick),
            "radix" => Ok(Self::Radix),
            _ => Err(SortError::InvalidAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}
