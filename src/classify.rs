use serde::Serialize;

/// Upper bound `classify_number` saturates to.
pub const CLASSIFY_CEILING: i32 = 100;

/// The branch an input takes through [`classify_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberClass {
    Negative,
    Zero,
    Capped,
    Unchanged,
}

impl NumberClass {
    /// Branches in evaluation order.
    pub const ALL: [NumberClass; 4] = [
        NumberClass::Negative,
        NumberClass::Zero,
        NumberClass::Capped,
        NumberClass::Unchanged,
    ];

    pub fn of(num: i32) -> Self {
        if num < 0 {
            NumberClass::Negative
        } else if num == 0 {
            NumberClass::Zero
        } else if num > CLASSIFY_CEILING {
            NumberClass::Capped
        } else {
            NumberClass::Unchanged
        }
    }

    /// Output of this branch for `num`. Only meaningful when `Self::of(num) == self`.
    pub fn apply(self, num: i32) -> i32 {
        match self {
            NumberClass::Negative => -1,
            NumberClass::Zero => 0,
            NumberClass::Capped => CLASSIFY_CEILING,
            NumberClass::Unchanged => num,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NumberClass::Negative => "negative",
            NumberClass::Zero => "zero",
            NumberClass::Capped => "capped",
            NumberClass::Unchanged => "unchanged",
        }
    }
}

/// Clamps `num` into `{-1, 0, 100}` or passes it through when it is in `1..=100`.
pub fn classify_number(num: i32) -> i32 {
    NumberClass::of(num).apply(num)
}
