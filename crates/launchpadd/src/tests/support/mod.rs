//! Shared doubles and harnesses for the daemon test suites.

mod companion;
mod config_loader;
mod providers;
mod reporter;
mod world;

pub use companion::CompanionClient;
pub use config_loader::{FailingConfigLoader, TestConfigLoader};
pub use providers::{MockAuth, MockLaunch, MockUpdate, StubServices, WRONG_PASSWORD};
pub use reporter::{HealthEvent, RecordingHealthReporter};
pub use world::{TestWorld, world};
