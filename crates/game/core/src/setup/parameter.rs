use super::{Domain, DomainKind, ParameterId, ParameterValue, SetupValue, TextKey};

/// Why a parameter is currently unusable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidReason {
    #[default]
    Valid,
    /// The stored value is no longer part of the domain.
    InvalidValue,
    /// The parameter depends on content that is not available.
    MissingDependency,
}

/// Snapshot of one game parameter as reported by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub id: ParameterId,
    pub name: TextKey,
    pub description: Option<TextKey>,
    pub domain: Domain,
    pub value: ParameterValue,
    pub read_only: bool,
    pub hidden: bool,
    pub invalid_reason: InvalidReason,
}

impl Parameter {
    /// Creates a visible, valid, writable parameter.
    pub fn new(
        id: impl Into<ParameterId>,
        name: impl Into<TextKey>,
        domain: Domain,
        value: impl Into<SetupValue>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            domain,
            value: ParameterValue::new(value),
            read_only: false,
            hidden: false,
            invalid_reason: InvalidReason::Valid,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<TextKey>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_value_name(mut self, name: impl Into<TextKey>) -> Self {
        self.value.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    #[must_use]
    pub fn with_invalid_reason(mut self, reason: InvalidReason) -> Self {
        self.invalid_reason = reason;
        self
    }

    /// Returns true if the parameter should be considered for display.
    pub fn is_displayable(&self) -> bool {
        !self.hidden && self.invalid_reason == InvalidReason::Valid
    }

    pub fn kind(&self) -> DomainKind {
        self.domain.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_or_invalid_parameters_are_not_displayable() {
        let base = Parameter::new(
            "CrisesEnabled",
            "LOC_CRISES_NAME",
            Domain::new(DomainKind::Boolean),
            true,
        );
        assert!(base.is_displayable());
        assert!(!base.clone().hidden().is_displayable());
        assert!(
            !base
                .with_invalid_reason(InvalidReason::InvalidValue)
                .is_displayable()
        );
    }
}
