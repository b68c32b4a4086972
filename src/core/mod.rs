pub mod setup;
pub mod wizard;

pub use crate::domain::model::ExperienceConfig;
pub use crate::domain::ports::ConfigStore;
pub use crate::utils::error::Result;
