use serde::Serialize;

pub const VALUE_FLOOR: i32 = -100;
pub const VALUE_CEILING: i32 = 1000;
/// Inputs above this (and up to `VALUE_CEILING`) are halved.
pub const HALVING_THRESHOLD: i32 = 100;

/// The branch an input takes through [`validate_and_process_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueRange {
    BelowFloor,
    Negative,
    Zero,
    AboveCeiling,
    Halved,
    Unchanged,
}

impl ValueRange {
    /// Branches in evaluation order.
    pub const ALL: [ValueRange; 6] = [
        ValueRange::BelowFloor,
        ValueRange::Negative,
        ValueRange::Zero,
        ValueRange::AboveCeiling,
        ValueRange::Halved,
        ValueRange::Unchanged,
    ];

    pub fn of(value: i32) -> Self {
        if value < VALUE_FLOOR {
            ValueRange::BelowFloor
        } else if value < 0 {
            ValueRange::Negative
        } else if value == 0 {
            ValueRange::Zero
        } else if value > VALUE_CEILING {
            ValueRange::AboveCeiling
        } else if value > HALVING_THRESHOLD {
            ValueRange::Halved
        } else {
            ValueRange::Unchanged
        }
    }

    /// Output of this branch for `value`. Only meaningful when `Self::of(value) == self`.
    pub fn apply(self, value: i32) -> i32 {
        match self {
            ValueRange::BelowFloor => VALUE_FLOOR,
            // value is in -100..0 here, so the negation cannot overflow
            ValueRange::Negative => -value,
            ValueRange::Zero => 0,
            ValueRange::AboveCeiling => VALUE_CEILING,
            ValueRange::Halved => value / 2,
            ValueRange::Unchanged => value,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ValueRange::BelowFloor => "below-floor",
            ValueRange::Negative => "negative",
            ValueRange::Zero => "zero",
            ValueRange::AboveCeiling => "above-ceiling",
            ValueRange::Halved => "halved",
            ValueRange::Unchanged => "unchanged",
        }
    }
}

/// Clamps `value` to `-100..=1000`, flipping the sign of small negatives and
/// halving values in `101..=1000` (truncating division).
///
/// `i32::MIN` falls in the below-floor range and returns -100; the sign flip
/// is never applied outside `-100..0`.
pub fn validate_and_process_value(value: i32) -> i32 {
    ValueRange::of(value).apply(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_floor_clamps_to_minus_hundred() {
        for value in [i32::MIN, -10_000, -150, -101] {
            assert_eq!(validate_and_process_value(value), -100, "input {value}");
        }
    }

    #[test]
    fn test_small_negatives_flip_sign() {
        for value in -100..0 {
            assert_eq!(validate_and_process_value(value), -value);
        }
        assert_eq!(validate_and_process_value(-50), 50);
        assert_eq!(ValueRange::of(-100), ValueRange::Negative);
    }

    #[test]
    fn test_zero() {
        assert_eq!(validate_and_process_value(0), 0);
    }

    #[test]
    fn test_above_ceiling_clamps_to_thousand() {
        for value in [1001, 2000, i32::MAX] {
            assert_eq!(validate_and_process_value(value), 1000, "input {value}");
        }
    }

    #[test]
    fn test_mid_range_is_halved() {
        assert_eq!(validate_and_process_value(101), 50);
        assert_eq!(validate_and_process_value(500), 250);
        assert_eq!(validate_and_process_value(999), 499);
        assert_eq!(validate_and_process_value(1000), 500);
        for value in 101..=1000 {
            assert_eq!(validate_and_process_value(value), value / 2);
        }
    }

    #[test]
    fn test_small_positives_pass_through() {
        for value in 1..=100 {
            assert_eq!(validate_and_process_value(value), value);
        }
    }

    #[test]
    fn test_min_value_does_not_overflow() {
        assert_eq!(ValueRange::of(i32::MIN), ValueRange::BelowFloor);
        assert_eq!(validate_and_process_value(i32::MIN), -100);
    }

    #[test]
    fn test_every_branch_is_reachable() {
        let seen: Vec<ValueRange> = [-150, -50, 0, 2000, 500, 50]
            .into_iter()
            .map(ValueRange::of)
            .collect();
        assert_eq!(seen, ValueRange::ALL.to_vec());
    }
}
