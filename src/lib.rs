pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::storage::JsonFileStore;
pub use config::{default_config_path, SetupArgs};
pub use core::{setup::SetupEngine, wizard::SetupWizard};
pub use domain::{model::ExperienceConfig, ports::ConfigStore};
pub use utils::error::{Result, SetupError};
