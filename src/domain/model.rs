use crate::config::{MAX_EXPERIENCES, MIN_EXPERIENCES};
use crate::utils::error::{Result, SetupError};
use crate::utils::validation::{validate_experience_id, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 下游應用程式讀取的設定內容，欄位名稱必須是 `allowedExperiences`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceConfig {
    #[serde(rename = "allowedExperiences")]
    pub allowed_experiences: Vec<String>,
}

impl ExperienceConfig {
    pub fn new(allowed_experiences: Vec<String>) -> Self {
        Self {
            allowed_experiences,
        }
    }

    /// 讀取既有設定檔；檔案不存在時回傳空設定
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No experience config at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| SetupError::LoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| SetupError::LoadError {
            path: path.to_path_buf(),
            message: format!("invalid JSON: {}", e),
        })
    }

    pub fn allowed_experiences(&self) -> &[String] {
        &self.allowed_experiences
    }

    pub fn is_experience_allowed(&self, experience_id: &str) -> bool {
        self.allowed_experiences.iter().any(|id| id == experience_id)
    }

    pub fn is_configured(&self) -> bool {
        !self.allowed_experiences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.allowed_experiences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed_experiences.is_empty()
    }
}

impl Validate for ExperienceConfig {
    fn validate(&self) -> Result<()> {
        validate_range(
            "allowedExperiences",
            self.allowed_experiences.len(),
            MIN_EXPERIENCES,
            MAX_EXPERIENCES,
        )?;

        for experience_id in &self.allowed_experiences {
            validate_experience_id(experience_id)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExperienceConfig {
        ExperienceConfig::new(vec![
            "exp_a1111".to_string(),
            "exp_b2222".to_string(),
            "exp_c3333".to_string(),
        ])
    }

    #[test]
    fn test_serializes_with_camel_case_field() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"allowedExperiences":["exp_a1111","exp_b2222","exp_c3333"]}"#
        );
    }

    #[test]
    fn test_membership() {
        let config = sample();
        assert!(config.is_configured());
        assert!(config.is_experience_allowed("exp_b2222"));
        assert!(!config.is_experience_allowed("exp_b"));
        assert!(!ExperienceConfig::default().is_configured());
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());
        assert!(ExperienceConfig::default().validate().is_err());

        let too_many = ExperienceConfig::new((0..11).map(|i| format!("exp_{:04}", i)).collect());
        assert!(too_many.validate().is_err());

        let short_id = ExperienceConfig::new(vec!["abcd".to_string()]);
        assert!(short_id.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_is_unconfigured() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = ExperienceConfig::load(dir.path().join("experiences.json")).unwrap();
        assert!(!config.is_configured());
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("experiences.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ExperienceConfig::load(&path).unwrap_err();
        assert!(matches!(err, SetupError::LoadError { .. }));
    }
}
