//! Game option rows: rebuild, control selection and edit routing.

use game_core::{DomainKind, Parameter, ParameterId, SetupStore, SetupValue};

use super::OptionsController;
use crate::classify::Bucket;
use crate::view_model::{Control, Focus, OptionRow, SelectorItem};

impl<S: SetupStore + ?Sized> OptionsController<S> {
    /// Discards every game option row and rebuilds them from the store.
    ///
    /// If the focused element did not survive the rebuild, focus moves to the
    /// row of the last edited parameter when there is one.
    pub fn refresh_game_options(&mut self) {
        let parameters = self.store.game_parameters();
        let classified = self.classifier.classify(&parameters);

        let mut rows: Vec<OptionRow> = Vec::with_capacity(classified.len());
        for (bucket, parameter) in classified {
            let row = self.build_row(bucket, parameter);
            rows.push(row);
        }
        // Stable: enumeration order is kept within a bucket.
        rows.sort_by_key(|row| row.bucket);
        self.game_rows = rows;

        let restore = self
            .last_changed
            .as_ref()
            .and_then(|marker| self.row_for(marker))
            .map(|row| row.element);
        if !self.is_focus_attached()
            && let Some(element) = restore
        {
            tracing::debug!("Restoring focus to last edited option {}", element);
            self.focus = Focus::Element(element);
        }
    }

    /// Writes the `index`-th possible value of a select parameter.
    pub fn select_parameter_value(&mut self, id: &ParameterId, index: usize) {
        let Some(parameter) = self.store.find_game_parameter(id) else {
            return;
        };
        let Some(possible) = parameter.domain.possible_values.get(index) else {
            return;
        };

        self.last_changed = Some(id.clone());
        match self
            .store
            .set_game_parameter_value(id, possible.value.clone())
        {
            Ok(()) => self.refresh_player_options(),
            Err(error) => self.report(id.as_str(), &error),
        }
    }

    /// Writes a boolean parameter.
    pub fn toggle_parameter(&mut self, id: &ParameterId, checked: bool) {
        if self.store.find_game_parameter(id).is_none() {
            return;
        }

        self.last_changed = Some(id.clone());
        match self
            .store
            .set_game_parameter_value(id, SetupValue::Bool(checked))
        {
            Ok(()) => self.refresh_player_options(),
            Err(error) => self.report(id.as_str(), &error),
        }
    }

    /// Writes text typed into a numeric control.
    ///
    /// Non-text domains take the leading integer of `input`; input that does
    /// not parse, or parses to zero, is ignored.
    pub fn edit_numeric(&mut self, id: &ParameterId, input: &str) {
        let Some(parameter) = self.store.find_game_parameter(id) else {
            return;
        };

        let value = match parameter.kind() {
            DomainKind::Text => SetupValue::text(input),
            kind => match leading_integer(input) {
                Some(0) | None => return,
                Some(number) if kind == DomainKind::UnsignedInteger => match u64::try_from(number) {
                    Ok(number) => SetupValue::UInt(number),
                    Err(_) => return,
                },
                Some(number) => SetupValue::Int(number),
            },
        };

        self.last_changed = Some(id.clone());
        if let Err(error) = self.store.set_game_parameter_value(id, value) {
            self.report(id.as_str(), &error);
        }
    }

    fn build_row(&mut self, bucket: Bucket, parameter: &Parameter) -> OptionRow {
        let control = self.build_control(parameter);
        let label = self.label(parameter);
        let help = parameter
            .description
            .as_ref()
            .and_then(|key| self.store.resolve_string(key));

        OptionRow {
            element: self.ids.allocate(),
            parameter: parameter.id.clone(),
            bucket,
            label,
            help,
            control,
        }
    }

    /// Resolved parameter name, or its key.
    pub(super) fn label(&self, parameter: &Parameter) -> String {
        self.store
            .resolve_string(&parameter.name)
            .unwrap_or_else(|| parameter.name.to_string())
    }

    pub(super) fn build_control(&self, parameter: &Parameter) -> Control {
        if parameter.read_only {
            return Control::ReadOnly {
                value: self.value_name(parameter),
            };
        }

        match parameter.kind() {
            DomainKind::Select => self.selector(parameter),
            DomainKind::Boolean => Control::Toggle {
                checked: parameter.value.value.as_bool().unwrap_or(false),
            },
            DomainKind::Integer | DomainKind::UnsignedInteger => Control::Numeric {
                text: self.value_name(parameter),
            },
            DomainKind::Text => Control::Fallback {
                value: self.value_name(parameter),
            },
        }
    }

    fn selector(&self, parameter: &Parameter) -> Control {
        let mut items = Vec::with_capacity(parameter.domain.possible_values.len());
        let mut selected = None;

        for (value_index, possible) in parameter.domain.possible_values.iter().enumerate() {
            let Some(label) = self.store.resolve_string(&possible.name) else {
                tracing::error!(
                    "Failed to resolve string for game option {}: {}",
                    parameter.id,
                    possible.name
                );
                continue;
            };
            if possible.value == parameter.value.value {
                selected = Some(items.len());
            }
            items.push(SelectorItem { label, value_index });
        }

        Control::Selector { items, selected }
    }

    /// Resolved name of the current value, or its raw text.
    fn value_name(&self, parameter: &Parameter) -> String {
        parameter
            .value
            .name
            .as_ref()
            .and_then(|key| self.store.resolve_string(key))
            .unwrap_or_else(|| parameter.value.value.to_string())
    }
}

/// Parses the leading integer of `input` the way `parseInt(input, 10)` does.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. `None` when no digit follows. Values beyond `i64` saturate.
pub(crate) fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude = match rest[..digits].parse::<i64>() {
        Ok(magnitude) => magnitude,
        Err(_) => {
            tracing::debug!("Numeric input {} overflows, saturating", input);
            i64::MAX
        }
    };
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::leading_integer;

    #[test]
    fn leading_integer_matches_parse_int() {
        assert_eq!(leading_integer("7"), Some(7));
        assert_eq!(leading_integer("  42abc"), Some(42));
        assert_eq!(leading_integer("-15"), Some(-15));
        assert_eq!(leading_integer("+3"), Some(3));
        assert_eq!(leading_integer("0"), Some(0));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn leading_integer_saturates_on_overflow() {
        assert_eq!(leading_integer("99999999999999999999"), Some(i64::MAX));
        assert_eq!(leading_integer("-99999999999999999999x"), Some(-i64::MAX));
    }
}
