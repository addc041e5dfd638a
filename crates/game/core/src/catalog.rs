//! Static description of a configurable game: parameters, defaults and slots.
//!
//! A [`SetupCatalog`] is content, not state. Stores build their live
//! configuration from it and return to it on reset.

use std::collections::{BTreeMap, HashSet};

use crate::setup::{
    CivilizationId, Domain, DomainKind, LeaderId, Parameter, ParameterId, ParameterValue,
    PlayerId, PlayerSlot, PossibleValue, SetupValue, SlotStatus, TextKey,
};

/// Errors found while validating a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("parameter `{0}` is declared more than once")]
    DuplicateParameter(ParameterId),

    #[error("default value `{value}` is outside the domain of `{parameter}`")]
    DefaultOutOfDomain {
        parameter: ParameterId,
        value: String,
    },

    #[error("visibility rule of `{parameter}` refers to unknown parameter `{target}`")]
    UnknownVisibilityTarget {
        parameter: ParameterId,
        target: ParameterId,
    },

    #[error("local player {0} has no slot")]
    MissingLocalSlot(PlayerId),

    #[error("catalog declares no player slots")]
    NoSlots,
}

/// Shows a parameter only while another parameter holds a given value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityRule {
    pub parameter: ParameterId,
    pub equals: SetupValue,
}

/// Declaration of one game parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSpec {
    pub id: ParameterId,
    pub name: TextKey,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<TextKey>,
    pub domain: DomainKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub values: Vec<PossibleValue>,
    pub default: SetupValue,
    #[cfg_attr(feature = "serde", serde(default))]
    pub read_only: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hidden: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub visible_when: Option<VisibilityRule>,
}

impl ParameterSpec {
    pub fn domain(&self) -> Domain {
        Domain {
            kind: self.domain,
            possible_values: self.values.clone(),
        }
    }

    /// Builds the parameter snapshot holding `value`.
    ///
    /// Select values take the display name of their matching possible value.
    pub fn instantiate(&self, value: SetupValue) -> Parameter {
        let domain = self.domain();
        let name = domain
            .index_of(&value)
            .map(|index| domain.possible_values[index].name.clone());

        Parameter {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            domain,
            value: ParameterValue { value, name },
            read_only: self.read_only,
            hidden: self.hidden,
            invalid_reason: Default::default(),
        }
    }
}

/// Default occupancy of one player slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotSpec {
    pub status: SlotStatus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub leader: Option<LeaderId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub civilization: Option<CivilizationId>,
}

impl SlotSpec {
    pub fn instantiate(&self, id: PlayerId) -> PlayerSlot {
        PlayerSlot {
            id,
            status: self.status,
            leader: self.leader.clone(),
            civilization: self.civilization.clone(),
        }
    }
}

/// Everything needed to (re)build a game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetupCatalog {
    pub parameters: Vec<ParameterSpec>,
    /// Default slot layout; index is the player id.
    pub slots: Vec<SlotSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub local_player: PlayerId,
    /// Player slots supported per `MapSize` value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub map_players: BTreeMap<String, u32>,
}

impl SetupCatalog {
    pub fn parameter(&self, id: &ParameterId) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|spec| &spec.id == id)
    }

    /// Checks internal consistency of the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.slots.is_empty() {
            return Err(CatalogError::NoSlots);
        }
        if self.local_player.0 as usize >= self.slots.len() {
            return Err(CatalogError::MissingLocalSlot(self.local_player));
        }

        let mut seen = HashSet::new();
        for spec in &self.parameters {
            if !seen.insert(spec.id.clone()) {
                return Err(CatalogError::DuplicateParameter(spec.id.clone()));
            }
            if !spec.domain().accepts(&spec.default) {
                return Err(CatalogError::DefaultOutOfDomain {
                    parameter: spec.id.clone(),
                    value: spec.default.to_string(),
                });
            }
        }

        for spec in &self.parameters {
            if let Some(rule) = &spec.visible_when
                && self.parameter(&rule.parameter).is_none()
            {
                return Err(CatalogError::UnknownVisibilityTarget {
                    parameter: spec.id.clone(),
                    target: rule.parameter.clone(),
                });
            }
        }

        Ok(())
    }
}
