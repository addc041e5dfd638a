use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use client_frontend_core::{FrontendConfig, OptionsController};
use game_content::ContentFactory;
use game_core::{ParameterId, SetupStore};
use lobby_client::{Client, Frontend, PanelRequest, format_summary};
use runtime::MemorySetupStore;

/// Frontend that flips one option and starts the game.
struct Scripted;

#[async_trait]
impl Frontend for Scripted {
    async fn run(&mut self, store: Arc<dyn SetupStore>) -> Result<PanelRequest> {
        let mut controller = OptionsController::new(store, FrontendConfig::default());
        controller.attach();
        controller.toggle_parameter(&ParameterId::from("CrisesEnabled"), true);
        controller.tick();
        Ok(controller.start_game())
    }
}

fn store() -> Arc<dyn SetupStore> {
    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    let bundle = ContentFactory::new(data).load_all().unwrap();
    Arc::new(MemorySetupStore::from_bundle(bundle))
}

#[tokio::test]
async fn client_returns_frontend_request() {
    let client = Client::builder()
        .store(store())
        .frontend(Scripted)
        .build()
        .unwrap();

    let PanelRequest::StartGame(summary) = client.run().await.unwrap() else {
        panic!("expected start request");
    };
    let crises = summary
        .options
        .iter()
        .find(|line| line.label == "Crises")
        .unwrap();
    assert_eq!(crises.value, "On");

    let printed = format_summary(&summary);
    assert!(printed.contains("Player 1 (human): LEADER_AUGUSTUS / CIVILIZATION_ROME"));
}

#[test]
fn builder_requires_store_and_frontend() {
    assert!(Client::builder().frontend(Scripted).build().is_err());
    assert!(Client::builder().store(store()).build().is_err());
}
