use std::fmt;

/// Identifier of the character owning a life record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reference to an item definition stored outside the core (lookup via [`crate::ItemOracle`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item:{}", self.0)
    }
}

/// Per-character disease identifier, allocated from [`crate::LifeRecord::next_disease_id`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiseaseId(pub u32);

/// Point in game time, in whole seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Time elapsed from `earlier` to `self`. Never negative.
    pub fn since(self, earlier: Timestamp) -> Elapsed {
        Elapsed::from_secs(self.0.saturating_sub(earlier.0))
    }
}

impl std::ops::Add<Elapsed> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Elapsed) -> Timestamp {
        Timestamp(self.0.saturating_add(rhs.secs()))
    }
}

/// Non-negative span of game time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elapsed(i64);

impl Elapsed {
    pub const ZERO: Self = Self(0);
    pub const SECS_PER_HOUR: i64 = 3_600;

    /// Negative spans (clock skew) collapse to zero.
    pub const fn from_secs(secs: i64) -> Self {
        if secs < 0 { Self(0) } else { Self(secs) }
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self(hours as i64 * Self::SECS_PER_HOUR)
    }

    pub const fn secs(self) -> i64 {
        self.0
    }

    pub fn hours(self) -> f64 {
        self.0 as f64 / Self::SECS_PER_HOUR as f64
    }
}

impl std::ops::Add for Elapsed {
    type Output = Elapsed;

    fn add(self, rhs: Elapsed) -> Elapsed {
        Elapsed(self.0.saturating_add(rhs.0))
    }
}
