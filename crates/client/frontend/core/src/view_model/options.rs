use game_core::ParameterId;

use super::ElementId;
use crate::classify::Bucket;

/// One entry of a selector control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorItem {
    pub label: String,
    /// Index into the parameter's possible values.
    pub value_index: usize,
}

/// Control rendered for a parameter, chosen from its read-only flag and domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Control {
    ReadOnly {
        value: String,
    },
    Selector {
        items: Vec<SelectorItem>,
        /// Position within `items` of the current value.
        selected: Option<usize>,
    },
    Toggle {
        checked: bool,
    },
    Numeric {
        text: String,
    },
    Fallback {
        value: String,
    },
}

impl Control {
    /// Text shown for the current value.
    pub fn display_value(&self) -> String {
        match self {
            Self::ReadOnly { value } | Self::Fallback { value } => value.clone(),
            Self::Selector { items, selected } => selected
                .and_then(|index| items.get(index))
                .map(|item| item.label.clone())
                .unwrap_or_default(),
            Self::Toggle { checked } => (if *checked { "On" } else { "Off" }).to_owned(),
            Self::Numeric { text } => text.clone(),
        }
    }

    pub fn is_editable(&self) -> bool {
        !matches!(self, Self::ReadOnly { .. } | Self::Fallback { .. })
    }
}

/// Display row of one game parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub element: ElementId,
    /// Lookup key used to re-fetch the parameter when the row is edited.
    pub parameter: ParameterId,
    pub bucket: Bucket,
    pub label: String,
    /// Resolved description, shown as help text.
    pub help: Option<String>,
    pub control: Control,
}
