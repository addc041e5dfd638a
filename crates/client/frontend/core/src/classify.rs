//! Assignment of game parameters to display sections.

use std::collections::HashSet;

use game_core::{Parameter, ParameterId};

pub const STANDARD_PARAMETERS: &[&str] = &["Age", "Difficulty", "GameSpeeds", "Map", "MapSize"];
pub const VICTORY_PARAMETERS: &[&str] = &[
    "MilitaryVictoryEnabled",
    "ScienceVictoryEnabled",
    "EconomicVictoryEnabled",
    "CultureVictoryEnabled",
];
pub const PROGRESSION_PARAMETERS: &[&str] = &["AgeProgressionFromPlayerEliminatedEnabled"];
pub const ADVANCED_PARAMETERS: &[&str] = &[
    "AgeLength",
    "DisasterIntensity",
    "CrisesEnabled",
    "GameRandomSeed",
    "MapRandomSeed",
    "StartPosition",
];

/// Display section of a parameter. Variants are declared in display order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Bucket {
    Standard,
    Victory,
    Progression,
    Advanced,
}

impl Bucket {
    /// Localization key of the section header.
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Standard => "LOC_GROUPID_GAMEOPTIONS",
            Self::Victory => "LOC_GROUPID_VICTORYOPTIONS",
            Self::Progression => "LOC_GROUPID_PROGRESSIONOPTIONS",
            Self::Advanced => "LOC_GROUPID_ADVANCEDOPTIONS",
        }
    }

    /// Fallback header text when the key does not resolve.
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::Standard => "Game Options",
            Self::Victory => "Victory Conditions",
            Self::Progression => "Age Progression",
            Self::Advanced => "Advanced Options",
        }
    }

    /// Victory and progression sections belong to the advanced group.
    pub const fn is_advanced_or_victory(self) -> bool {
        !matches!(self, Self::Standard)
    }
}

/// Static membership sets deciding each parameter's [`Bucket`].
#[derive(Clone, Debug)]
pub struct Classifier {
    standard: HashSet<String>,
    victory: HashSet<String>,
    progression: HashSet<String>,
    advanced: HashSet<String>,
}

impl Classifier {
    pub fn new<'a>(
        standard: impl IntoIterator<Item = &'a str>,
        victory: impl IntoIterator<Item = &'a str>,
        progression: impl IntoIterator<Item = &'a str>,
        advanced: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        fn set<'a>(ids: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
            ids.into_iter().map(str::to_owned).collect()
        }

        Self {
            standard: set(standard),
            victory: set(victory),
            progression: set(progression),
            advanced: set(advanced),
        }
    }

    /// Bucket of `id`, `None` when the parameter is not shown.
    ///
    /// Overlapping sets resolve as standard > victory > progression > advanced.
    pub fn bucket_of(&self, id: &ParameterId) -> Option<Bucket> {
        let id = id.as_str();
        if self.standard.contains(id) {
            Some(Bucket::Standard)
        } else if self.victory.contains(id) {
            Some(Bucket::Victory)
        } else if self.progression.contains(id) {
            Some(Bucket::Progression)
        } else if self.advanced.contains(id) {
            Some(Bucket::Advanced)
        } else {
            None
        }
    }

    /// Displayable parameters paired with their bucket, in enumeration order.
    ///
    /// Hidden and invalid parameters are skipped, as are parameters in no set.
    pub fn classify<'p>(&self, parameters: &'p [Parameter]) -> Vec<(Bucket, &'p Parameter)> {
        parameters
            .iter()
            .filter(|parameter| parameter.is_displayable())
            .filter_map(|parameter| Some((self.bucket_of(&parameter.id)?, parameter)))
            .collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(
            STANDARD_PARAMETERS.iter().copied(),
            VICTORY_PARAMETERS.iter().copied(),
            PROGRESSION_PARAMETERS.iter().copied(),
            ADVANCED_PARAMETERS.iter().copied(),
        )
    }
}

#[cfg(test)]
mod tests {
    use game_core::{Domain, DomainKind, InvalidReason};
    use strum::IntoEnumIterator;

    use super::*;

    fn flag(id: &str) -> Parameter {
        Parameter::new(id, format!("LOC_{id}"), Domain::new(DomainKind::Boolean), true)
    }

    #[test]
    fn every_displayable_parameter_lands_once_or_not_at_all() {
        let classifier = Classifier::default();
        let mut parameters: Vec<Parameter> = STANDARD_PARAMETERS
            .iter()
            .chain(VICTORY_PARAMETERS)
            .chain(PROGRESSION_PARAMETERS)
            .chain(ADVANCED_PARAMETERS)
            .map(|id| flag(id))
            .collect();
        parameters.push(flag("Ruleset"));
        parameters.push(flag("GameSpeeds").hidden());
        parameters.push(flag("Map").with_invalid_reason(InvalidReason::InvalidValue));

        let classified = classifier.classify(&parameters);

        let mut seen = HashSet::new();
        for (bucket, parameter) in &classified {
            assert!(parameter.is_displayable());
            assert!(seen.insert(parameter.id.clone()), "{} listed twice", parameter.id);
            assert_eq!(classifier.bucket_of(&parameter.id), Some(*bucket));
        }
        assert_eq!(classified.len(), 16);
        assert!(!seen.contains(&ParameterId::from("Ruleset")));
    }

    #[test]
    fn age_is_standard_wherever_it_is_enumerated() {
        let classifier = Classifier::default();
        let parameters = vec![flag("CrisesEnabled"), flag("MapRandomSeed"), flag("Age")];

        let classified = classifier.classify(&parameters);

        let age = classified
            .iter()
            .find(|(_, parameter)| parameter.id == "Age")
            .map(|(bucket, _)| *bucket);
        assert_eq!(age, Some(Bucket::Standard));
        let order: Vec<_> = classified.iter().map(|(_, p)| p.id.as_str()).collect();
        assert_eq!(order, ["CrisesEnabled", "MapRandomSeed", "Age"]);
    }

    #[test]
    fn overlapping_sets_prefer_earlier_buckets() {
        let classifier = Classifier::new(["A"], ["A", "B"], ["B", "C"], ["C", "D"]);
        let bucket = |id: &str| classifier.bucket_of(&ParameterId::from(id));

        assert_eq!(bucket("A"), Some(Bucket::Standard));
        assert_eq!(bucket("B"), Some(Bucket::Victory));
        assert_eq!(bucket("C"), Some(Bucket::Progression));
        assert_eq!(bucket("D"), Some(Bucket::Advanced));
        assert_eq!(bucket("E"), None);
    }

    #[test]
    fn only_standard_is_outside_advanced_group() {
        let advanced: Vec<_> = Bucket::iter()
            .filter(|bucket| bucket.is_advanced_or_victory())
            .collect();
        assert_eq!(
            advanced,
            [Bucket::Victory, Bucket::Progression, Bucket::Advanced]
        );
    }
}
