//! API Routes

pub mod health;
pub mod instructions;
pub mod runtime_config;
pub mod vaults;

pub use health::health_router;
pub use instructions::instructions_router;
pub use runtime_config::runtime_config_router;
pub use vaults::vaults_router;

use std::sync::Arc;

use crate::{services::AccountSource, types::Config};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub accounts: Arc<dyn AccountSource>,
}
