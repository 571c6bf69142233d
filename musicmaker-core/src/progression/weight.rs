use std::fmt;

/// Rarity class of a transition; lower is more idiomatic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weight {
    Primary,
    Resolve,
    Common,
    Uncommon,
    Sparse,
    Rare,
}

impl Weight {
    pub const ALL: [Weight; 6] = [
        Weight::Primary,
        Weight::Resolve,
        Weight::Common,
        Weight::Uncommon,
        Weight::Sparse,
        Weight::Rare,
    ];

    /// Stored edge weight
    pub fn value(self) -> u32 {
        match self {
            Weight::Primary => 0,
            Weight::Resolve => 1,
            Weight::Common => 2,
            Weight::Uncommon => 4,
            Weight::Sparse => 8,
            Weight::Rare => 16,
        }
    }

    pub fn from_value(value: u32) -> Option<Weight> {
        Self::ALL.into_iter().find(|w| w.value() == value)
    }

    /// Relative chance of taking an edge of this class under weighted sampling
    pub fn selection_weight(value: u32) -> f64 {
        1.0 / (value as f64 + 1.0)
    }

    pub fn name(self) -> &'static str {
        match self {
            Weight::Primary => "primary",
            Weight::Resolve => "resolve",
            Weight::Common => "common",
            Weight::Uncommon => "uncommon",
            Weight::Sparse => "sparse",
            Weight::Rare => "rare",
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
