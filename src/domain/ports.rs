use crate::domain::model::ExperienceConfig;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// 設定的持久化介面，方便測試把目的地換成暫存目錄
pub trait ConfigStore {
    /// 目的地路徑
    fn location(&self) -> &Path;

    /// 完整覆寫既有設定，回傳寫入的路徑
    fn save(&self, config: &ExperienceConfig) -> Result<PathBuf>;

    fn load(&self) -> Result<ExperienceConfig>;
}
