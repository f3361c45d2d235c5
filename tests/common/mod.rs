#![allow(dead_code)]

pub mod mock_blockfrost;

use blockfrost_sdk::{BlockfrostProject, Config, types::Network};
use std::sync::LazyLock;

static INIT_LOGGING: LazyLock<()> = LazyLock::new(|| {
    tracing_subscriber::fmt::init();
});

pub fn initialize_logging() {
    let _ = INIT_LOGGING;
}

pub const TEST_PROJECT_ID: &str = "previewy2pbyga8FifUwJSverBCwhESegV6I7gT";

pub fn test_config(base_url: &str) -> Config {
    let project = BlockfrostProject::new("preview", TEST_PROJECT_ID, Network::Preview);

    Config::new(project).with_base_url(base_url)
}
