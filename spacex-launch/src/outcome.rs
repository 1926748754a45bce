use serde::{Deserialize, Serialize};

/// Launch outcome derived from the binary `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// 1 maps to `Success`, everything else to `Failure`. Records are
    /// validated to carry only 0 or 1 before they reach this point.
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(1), Outcome::Success);
        assert_eq!(Outcome::from_class(0), Outcome::Failure);
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.label(), "Failure");
    }
}
