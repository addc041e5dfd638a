//! Leader and civilization dropdown entries.

use game_core::{CivilizationInfo, LeaderInfo, SetupStore, TextKey};

/// Entry of a leader or civilization selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterOption {
    pub id: String,
    pub label: String,
    pub icon: String,
    /// Multi-line description: name, tags, ability and bonuses.
    pub tooltip: String,
}

pub fn leader_option<S: SetupStore + ?Sized>(store: &S, leader: &LeaderInfo) -> RosterOption {
    let label = text(store, &leader.name);
    let mut tooltip = vec![label.clone()];
    if !leader.tags.is_empty() {
        tooltip.push(join(store, &leader.tags));
    }
    if let Some(ability) = &leader.ability {
        tooltip.push(text(store, ability));
    }

    RosterOption {
        id: leader.id.to_string(),
        label,
        icon: leader.icon.clone(),
        tooltip: tooltip.join("\n"),
    }
}

pub fn civilization_option<S: SetupStore + ?Sized>(
    store: &S,
    civilization: &CivilizationInfo,
) -> RosterOption {
    let label = text(store, &civilization.name);
    let mut tooltip = vec![label.clone()];
    if !civilization.tags.is_empty() {
        tooltip.push(join(store, &civilization.tags));
    }
    if let Some(ability) = &civilization.ability {
        tooltip.push(text(store, ability));
    }
    if !civilization.bonuses.is_empty() {
        tooltip.push(
            store
                .resolve_string(&TextKey::from("LOC_CREATE_CIV_UNIQUE_BONUSES_SUBTITLE"))
                .unwrap_or_else(|| "Unique Bonuses".to_owned()),
        );
        for bonus in &civilization.bonuses {
            tooltip.push(format!(
                "{}: {}",
                text(store, &bonus.title),
                text(store, &bonus.description)
            ));
        }
    }

    RosterOption {
        id: civilization.id.to_string(),
        label,
        icon: civilization.icon.clone(),
        tooltip: tooltip.join("\n"),
    }
}

/// Resolved text, or the key itself when it does not resolve.
fn text<S: SetupStore + ?Sized>(store: &S, key: &TextKey) -> String {
    store
        .resolve_string(key)
        .unwrap_or_else(|| key.to_string())
}

fn join<S: SetupStore + ?Sized>(store: &S, keys: &[TextKey]) -> String {
    keys.iter()
        .map(|key| text(store, key))
        .collect::<Vec<_>>()
        .join(", ")
}
