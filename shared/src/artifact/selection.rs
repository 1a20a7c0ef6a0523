//! Choosing the image variable inside an artifact container.
//!
//! Containers are expected to hold a single image, but the time-reversal driver
//! may save auxiliary arrays (sensor data, time axis) next to its result. The
//! policy is evaluated over the variables in file order.

use super::NamedArray;

/// Rule for picking the image array out of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionPolicy {
    /// First variable in the file, whatever its rank.
    FirstArray,
    /// Variable with the given name when present, otherwise the first variable
    /// of rank 2.
    PreferNamedElseFirst2d(&'static str),
}

impl SelectionPolicy {
    /// Pick the image variable, or `None` when the policy matches nothing.
    pub fn select<'a>(&self, arrays: &'a [NamedArray]) -> Option<&'a NamedArray> {
        match self {
            SelectionPolicy::FirstArray => arrays.first(),
            SelectionPolicy::PreferNamedElseFirst2d(name) => arrays
                .iter()
                .find(|array| array.name == *name)
                .or_else(|| arrays.iter().find(|array| array.rank() == 2)),
        }
    }
}
