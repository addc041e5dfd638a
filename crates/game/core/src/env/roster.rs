//! Leader and civilization catalog entries.

use crate::setup::{CivilizationId, LeaderId, TextKey};

/// Selectable leader.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeaderInfo {
    pub id: LeaderId,
    pub name: TextKey,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<TextKey>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ability: Option<TextKey>,
}

impl LeaderInfo {
    pub fn new(id: impl Into<LeaderId>, name: impl Into<TextKey>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: String::new(),
            tags: Vec::new(),
            ability: None,
        }
    }
}

/// A unique bonus listed in a civilization's tooltip.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilizationBonus {
    pub title: TextKey,
    pub description: TextKey,
}

/// Selectable civilization.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilizationInfo {
    pub id: CivilizationId,
    pub name: TextKey,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    /// Value of the `Age` parameter this civilization belongs to; `None` for every age.
    #[cfg_attr(feature = "serde", serde(default))]
    pub age: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<TextKey>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ability: Option<TextKey>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: Vec<CivilizationBonus>,
}

impl CivilizationInfo {
    pub fn new(id: impl Into<CivilizationId>, name: impl Into<TextKey>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: String::new(),
            age: None,
            tags: Vec::new(),
            ability: None,
            bonuses: Vec::new(),
        }
    }

    #[must_use]
    pub fn in_age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }

    /// Returns true if the civilization can be picked while `age` is selected.
    pub fn available_in(&self, age: Option<&str>) -> bool {
        match (&self.age, age) {
            (None, _) => true,
            (Some(_), None) => true,
            (Some(own), Some(selected)) => own == selected,
        }
    }
}

/// Full leader and civilization catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    #[cfg_attr(feature = "serde", serde(default))]
    pub leaders: Vec<LeaderInfo>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub civilizations: Vec<CivilizationInfo>,
}

impl Roster {
    pub fn leader(&self, id: &LeaderId) -> Option<&LeaderInfo> {
        self.leaders.iter().find(|leader| &leader.id == id)
    }

    pub fn civilization(&self, id: &CivilizationId) -> Option<&CivilizationInfo> {
        self.civilizations.iter().find(|civ| &civ.id == id)
    }
}
