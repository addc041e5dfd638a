use std::path::PathBuf;

use game_content::ContentFactory;
use game_core::{
    GameConfig, GameMode, LeaderInfo, ParameterId, PlayerId, PlayerParameter, Roster,
    RosterOracle, SetupCatalog, SetupError, SetupStore, SetupValue, SlotStatus, StringTable,
    TextKey,
};
use runtime::MemorySetupStore;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn bundled_store() -> MemorySetupStore {
    let bundle = ContentFactory::new(data_dir())
        .load_all()
        .expect("bundled content should load");
    MemorySetupStore::from_bundle(bundle)
}

fn id(raw: &str) -> ParameterId {
    ParameterId::from(raw)
}

#[test]
fn starts_at_revision_one_with_catalog_defaults() {
    let store = bundled_store();
    assert_eq!(store.revision(), 1);

    let age = store.find_game_parameter(&id("Age")).expect("Age exists");
    assert_eq!(age.value.value, SetupValue::text("AGE_ANTIQUITY"));
    assert_eq!(
        age.value.name,
        Some(TextKey::from("LOC_AGE_ANTIQUITY_NAME"))
    );
    assert_eq!(store.local_player_id(), PlayerId(0));
    assert_eq!(store.max_major_players(), 8);
}

#[test]
fn successful_writes_bump_revision_and_noops_do_not() {
    let store = bundled_store();

    store
        .set_game_parameter_value(&id("Difficulty"), SetupValue::text("DIFFICULTY_DEITY"))
        .unwrap();
    assert_eq!(store.revision(), 2);

    store
        .set_game_parameter_value(&id("Difficulty"), SetupValue::text("DIFFICULTY_DEITY"))
        .unwrap();
    assert_eq!(store.revision(), 2);
}

#[test]
fn rejected_writes_leave_revision_untouched() {
    let store = bundled_store();

    assert_eq!(
        store.set_game_parameter_value(&id("Nope"), SetupValue::Bool(true)),
        Err(SetupError::ParameterNotFound(id("Nope")))
    );
    assert_eq!(
        store.set_game_parameter_value(&id("Ruleset"), SetupValue::text("RULESET_OTHER")),
        Err(SetupError::ReadOnly(id("Ruleset")))
    );
    assert!(matches!(
        store.set_game_parameter_value(&id("Map"), SetupValue::text("MAP_MOON")),
        Err(SetupError::ValueOutOfDomain { .. })
    ));
    assert!(matches!(
        store.set_game_parameter_value(&id("TurnTimer"), SetupValue::Int(-5)),
        Err(SetupError::ValueOutOfDomain { .. })
    ));
    assert_eq!(store.revision(), 1);
}

#[test]
fn visibility_rule_follows_target_value() {
    let store = bundled_store();
    let elimination = id("AgeProgressionFromPlayerEliminatedEnabled");
    assert!(!store.find_game_parameter(&elimination).unwrap().hidden);

    store
        .set_game_parameter_value(&id("MilitaryVictoryEnabled"), SetupValue::Bool(false))
        .unwrap();
    assert!(store.find_game_parameter(&elimination).unwrap().hidden);
}

#[test]
fn map_size_drives_slot_count_and_closes_extra_slots() {
    let store = bundled_store();
    store.set_slot_status(PlayerId(5), SlotStatus::Computer).unwrap();
    assert!(store.player(PlayerId(5)).unwrap().is_active());

    store
        .set_game_parameter_value(&id("MapSize"), SetupValue::text("MAPSIZE_TINY"))
        .unwrap();
    assert_eq!(store.max_major_players(), 4);
    assert_eq!(store.player(PlayerId(5)), None);
    assert_eq!(store.players().len(), 4);

    store
        .set_game_parameter_value(&id("MapSize"), SetupValue::text("MAPSIZE_HUGE"))
        .unwrap();
    assert_eq!(store.player(PlayerId(5)).unwrap().status, SlotStatus::Closed);
}

#[test]
fn shrinking_the_map_keeps_the_minimum_player_count() {
    let store = bundled_store();
    store.set_slot_status(PlayerId(7), SlotStatus::Computer).unwrap();
    for slot in 1..=3 {
        store.set_slot_status(PlayerId(slot), SlotStatus::Closed).unwrap();
    }

    store
        .set_game_parameter_value(&id("MapSize"), SetupValue::text("MAPSIZE_TINY"))
        .unwrap();

    let active: Vec<_> = store
        .players()
        .into_iter()
        .filter(|slot| slot.is_active())
        .collect();
    assert_eq!(active.len(), GameConfig::MIN_ACTIVE_PLAYERS);
    assert_eq!(active[0].status, SlotStatus::Human);
    assert_eq!(active[1].id, PlayerId(1));
    assert_eq!(active[1].status, SlotStatus::Computer);
}

#[test]
fn civilizations_follow_selected_age() {
    let store = bundled_store();
    assert!(
        store
            .civilizations()
            .iter()
            .all(|civ| civ.age.as_deref() == Some("AGE_ANTIQUITY"))
    );

    store
        .set_game_parameter_value(&id("Age"), SetupValue::text("AGE_MODERN"))
        .unwrap();
    let modern: Vec<_> = store
        .civilizations()
        .into_iter()
        .map(|civ| civ.id.to_string())
        .collect();
    assert_eq!(modern, ["CIVILIZATION_AMERICA", "CIVILIZATION_QING"]);

    // Antiquity assignments no longer apply.
    assert_eq!(store.player(PlayerId(0)).unwrap().civilization, None);
}

#[test]
fn player_writes_are_validated_against_roster_and_slot() {
    let store = bundled_store();

    store
        .set_player_parameter_value(
            PlayerId(0),
            PlayerParameter::Leader,
            SetupValue::text("LEADER_TECUMSEH"),
        )
        .unwrap();
    assert_eq!(
        store.player(PlayerId(0)).unwrap().leader.unwrap(),
        "LEADER_TECUMSEH"
    );

    assert_eq!(
        store.set_player_parameter_value(
            PlayerId(0),
            PlayerParameter::Leader,
            SetupValue::text("LEADER_NOBODY"),
        ),
        Err(SetupError::UnknownRosterEntry("LEADER_NOBODY".into()))
    );
    assert_eq!(
        store.set_player_parameter_value(
            PlayerId(0),
            PlayerParameter::Civilization,
            SetupValue::text("CIVILIZATION_SPAIN"),
        ),
        Err(SetupError::UnknownRosterEntry("CIVILIZATION_SPAIN".into()))
    );
    assert_eq!(
        store.set_player_parameter_value(
            PlayerId(6),
            PlayerParameter::Leader,
            SetupValue::text("LEADER_ASHOKA"),
        ),
        Err(SetupError::SlotClosed(PlayerId(6)))
    );
    assert_eq!(
        store.set_player_parameter_value(
            PlayerId(9),
            PlayerParameter::Leader,
            SetupValue::text("LEADER_ASHOKA"),
        ),
        Err(SetupError::PlayerNotFound(PlayerId(9)))
    );
}

#[test]
fn reset_restores_defaults_and_records_mode() {
    let store = bundled_store();
    store
        .set_game_parameter_value(&id("Map"), SetupValue::text("MAP_PANGAEA"))
        .unwrap();
    store.set_slot_status(PlayerId(3), SlotStatus::Closed).unwrap();
    let before = store.revision();

    store.reset(GameMode::Multiplayer).unwrap();

    assert!(store.revision() > before);
    assert_eq!(store.game_mode(), GameMode::Multiplayer);
    assert_eq!(
        store.find_game_parameter(&id("Map")).unwrap().value.value,
        SetupValue::text("MAP_CONTINENTS")
    );
    assert_eq!(store.player(PlayerId(3)).unwrap().status, SlotStatus::Computer);
}

#[test]
fn locked_store_reports_not_ready() {
    let store = bundled_store();
    store.set_editable(false);

    assert!(!store.is_game_editable());
    assert_eq!(
        store.set_game_parameter_value(&id("Map"), SetupValue::text("MAP_PANGAEA")),
        Err(SetupError::GameNotReady)
    );
    assert_eq!(store.reset(GameMode::SinglePlayer), Err(SetupError::GameNotReady));
}

#[test]
fn clones_share_state() {
    let store = MemorySetupStore::new(
        GameConfig::default(),
        SetupCatalog {
            slots: vec![Default::default(); 3],
            ..Default::default()
        },
        Roster {
            leaders: vec![LeaderInfo::new("LEADER_ASHOKA", "LOC_ASHOKA")],
            civilizations: Vec::new(),
        },
        StringTable::new().with("LOC_ASHOKA", "Ashoka"),
    );
    let handle = store.clone();

    handle.set_slot_status(PlayerId(2), SlotStatus::Computer).unwrap();

    assert_eq!(store.revision(), 2);
    assert_eq!(store.leaders().len(), 1);
    assert_eq!(
        store.resolve_string(&TextKey::from("LOC_ASHOKA")).as_deref(),
        Some("Ashoka")
    );
    assert_eq!(store.players().len(), 3);
}
