//! Slot vocabulary and the detected-slot mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Fixed vocabulary of extractable parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotName {
    Budget,
    Rooms,
    Metro,
    Time,
    District,
    Goal,
}

impl SlotName {
    /// Returns the whole vocabulary.
    pub fn all() -> &'static [SlotName] {
        &[
            SlotName::Budget,
            SlotName::Rooms,
            SlotName::Metro,
            SlotName::Time,
            SlotName::District,
            SlotName::Goal,
        ]
    }

    /// Placeholder name used in frame templates (`{budget}`).
    pub fn placeholder(&self) -> &'static str {
        match self {
            SlotName::Budget => "budget",
            SlotName::Rooms => "rooms",
            SlotName::Metro => "metro",
            SlotName::Time => "time",
            SlotName::District => "district",
            SlotName::Goal => "goal",
        }
    }

    /// Looks a placeholder name up in the vocabulary.
    pub fn from_placeholder(name: &str) -> Option<SlotName> {
        Self::all().iter().find(|s| s.placeholder() == name).copied()
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.placeholder())
    }
}

/// Detected slots. Keys exist only for slots that were actually found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotSet(BTreeMap<SlotName, String>);

impl SlotSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a slot value, replacing an earlier one for the same slot.
    pub fn insert(&mut self, name: SlotName, value: impl Into<String>) {
        self.0.insert(name, value.into());
    }

    pub fn get(&self, name: SlotName) -> Option<&str> {
        self.0.get(&name).map(String::as_str)
    }

    pub fn contains(&self, name: SlotName) -> bool {
        self.0.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates slots in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotName, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(SlotName, String)> for SlotSet {
    fn from_iter<I: IntoIterator<Item = (SlotName, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
