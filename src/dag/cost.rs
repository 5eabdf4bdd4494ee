// src/dag/cost.rs

//! Task duration models for the timed simulation.

/// Duration of a task, in simulated time units.
///
/// Anything callable as `Fn(&str) -> i64` is a cost model, so tests can pass
/// closures directly. The simulation rejects non-positive results with
/// [`StepdagError::InvalidCost`](crate::errors::StepdagError::InvalidCost).
pub trait CostModel {
    fn cost(&self, task: &str) -> i64;
}

impl<F> CostModel for F
where
    F: Fn(&str) -> i64,
{
    fn cost(&self, task: &str) -> i64 {
        self(task)
    }
}

/// `base_offset + ordinal_value(task)`, with A=1, B=2, ...
///
/// The sum saturates at `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabetOffsetCost {
    pub base_offset: i64,
}

impl AlphabetOffsetCost {
    pub fn new(base_offset: i64) -> Self {
        Self { base_offset }
    }
}

impl CostModel for AlphabetOffsetCost {
    fn cost(&self, task: &str) -> i64 {
        self.base_offset.saturating_add(ordinal_value(task))
    }
}

/// 1-based alphabet position of a single-letter identifier, ignoring case.
///
/// Anything else (multi-character names, digits, non-ASCII) is 0.
pub fn ordinal_value(task: &str) -> i64 {
    let mut chars = task.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            i64::from(c.to_ascii_uppercase() as u8 - b'A') + 1
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_is_one_based() {
        assert_eq!(ordinal_value("A"), 1);
        assert_eq!(ordinal_value("b"), 2);
        assert_eq!(ordinal_value("Z"), 26);
    }

    #[test]
    fn ordinal_of_non_letters_is_zero() {
        assert_eq!(ordinal_value(""), 0);
        assert_eq!(ordinal_value("AB"), 0);
        assert_eq!(ordinal_value("7"), 0);
    }

    #[test]
    fn offset_is_added() {
        let cost = AlphabetOffsetCost::new(60);
        assert_eq!(cost.cost("A"), 61);
        assert_eq!(cost.cost("Z"), 86);
    }

    #[test]
    fn offset_saturates_at_i64_max() {
        let cost = AlphabetOffsetCost::new(i64::MAX);
        assert_eq!(cost.cost("A"), i64::MAX);
        assert_eq!(cost.cost("build"), i64::MAX);
    }

    #[test]
    fn closures_are_cost_models() {
        let unit = |_: &str| 1_i64;
        assert_eq!(unit.cost("anything"), 1);
    }
}
