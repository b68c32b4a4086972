pub mod storage;

use clap::Parser;
use std::path::{Path, PathBuf};

/// 相對於程式所在目錄的設定檔位置，下游應用程式啟動時讀取此檔
pub const CONFIG_RELATIVE_PATH: &str = "src/config/experiences.json";

pub const MIN_EXPERIENCES: usize = 1;
pub const MAX_EXPERIENCES: usize = 10;
pub const MIN_EXPERIENCE_ID_LENGTH: usize = 5;

/// The wizard takes no arguments; clap only provides `--help` and `--version`.
#[derive(Debug, Clone, Parser)]
#[command(name = "experience-setup")]
#[command(version)]
#[command(
    about = "Configure which chat experiences the bot is allowed to process",
    long_about = "Interactive setup that asks for the allowed chat experience IDs and \
                  writes them to src/config/experiences.json next to this program. \
                  Each run overwrites the previous configuration."
)]
pub struct SetupArgs {}

/// 設定檔完整路徑：執行檔所在目錄 + [`CONFIG_RELATIVE_PATH`]
///
/// 取不到執行檔路徑時退回目前工作目錄。
pub fn default_config_path() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| {
            tracing::warn!("Could not resolve executable directory, using current directory");
            PathBuf::from(".")
        });
    config_path_in(&base)
}

pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(CONFIG_RELATIVE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_in() {
        let path = config_path_in(Path::new("/opt/bot"));
        assert_eq!(path, PathBuf::from("/opt/bot/src/config/experiences.json"));
    }

    #[test]
    fn test_default_config_path_ends_with_relative_path() {
        assert!(default_config_path().ends_with(CONFIG_RELATIVE_PATH));
    }

    #[test]
    fn test_args_parse_without_arguments() {
        assert!(SetupArgs::try_parse_from(["experience-setup"]).is_ok());
        assert!(SetupArgs::try_parse_from(["experience-setup", "--force"]).is_err());
    }
}
