use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id! {
    /// Stable identifier of a game parameter (e.g. `"Difficulty"`).
    ParameterId
}

string_id! {
    /// Localization key resolved through [`crate::SetupStore::resolve_string`].
    TextKey
}

string_id! {
    /// Roster identifier of a leader (e.g. `"LEADER_AUGUSTUS"`).
    LeaderId
}

string_id! {
    /// Roster identifier of a civilization (e.g. `"CIVILIZATION_ROME"`).
    CivilizationId
}

/// Index of a major player slot, `0..max_major_players`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Conventional slot of the local human player.
    pub const LOCAL: Self = Self(0);

    /// One-based number shown next to the slot.
    #[inline]
    pub const fn display_number(self) -> u32 {
        self.0 + 1
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_compare_against_plain_strings() {
        let id = ParameterId::from("AgeLength");
        assert_eq!(id, "AgeLength");
        assert_eq!(id.to_string(), "AgeLength");
        assert!(!id.is_empty());
    }

    #[test]
    fn player_numbers_are_one_based() {
        assert_eq!(PlayerId(0).display_number(), 1);
        assert_eq!(PlayerId(7).display_number(), 8);
    }
}
