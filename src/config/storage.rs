use crate::domain::model::ExperienceConfig;
use crate::domain::ports::ConfigStore;
use crate::utils::error::{Result, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

/// 將設定寫成縮排 JSON 的本機檔案儲存
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SetupError::CreateDirError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    /// 先寫暫存檔再 rename，失敗時原檔不變
    fn write_atomic(&self, contents: &str) -> Result<()> {
        let tmp_path = self.path.with_extension("json.tmp");

        let written =
            fs::write(&tmp_path, contents).and_then(|_| fs::rename(&tmp_path, &self.path));

        if let Err(source) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(SetupError::WriteError {
                path: self.path.clone(),
                source,
            });
        }

        Ok(())
    }
}

impl ConfigStore for JsonFileStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn save(&self, config: &ExperienceConfig) -> Result<PathBuf> {
        tracing::debug!(
            "Saving {} experience(s) to {}",
            config.len(),
            self.path.display()
        );

        self.ensure_parent_dir()?;

        let mut payload = serde_json::to_string_pretty(config)?;
        payload.push('\n');
        self.write_atomic(&payload)?;

        tracing::info!("Experience config written to {}", self.path.display());
        Ok(self.path.clone())
    }

    fn load(&self) -> Result<ExperienceConfig> {
        ExperienceConfig::load(&self.path)
    }
}
