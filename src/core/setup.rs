use crate::core::wizard::{SetupWizard, BANNER_RULE_WIDTH};
use crate::core::{ConfigStore, ExperienceConfig};
use crate::utils::error::Result;
use crate::utils::terminal;
use crate::utils::validation::Validate;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// 串接互動提示、驗證與寫檔的單次設定流程
pub struct SetupEngine<S: ConfigStore> {
    store: S,
    clear_screen: bool,
}

impl<S: ConfigStore> SetupEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            clear_screen: false,
        }
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 執行一次完整設定，成功時回傳寫入的路徑
    ///
    /// 取消 (`SetupError::Cancelled`) 時不寫任何檔案。
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<PathBuf> {
        let mut wizard = SetupWizard::new(input, output);

        if self.clear_screen {
            terminal::clear_screen(wizard.output_mut())?;
        }

        let config = wizard.collect()?;
        config.validate()?;
        tracing::info!("Collected {} experience ID(s)", config.len());

        match self.store.save(&config) {
            Ok(path) => {
                report_success(wizard.output_mut(), &config, &path)?;
                Ok(path)
            }
            Err(e) => {
                tracing::error!("❌ Failed to save experience config: {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                report_failure(
                    wizard.output_mut(),
                    &e.user_friendly_message(),
                    self.store.location(),
                )?;
                Err(e)
            }
        }
    }
}

fn report_success<W: Write>(out: &mut W, config: &ExperienceConfig, path: &Path) -> Result<()> {
    let rule = "=".repeat(BANNER_RULE_WIDTH);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "✅ CONFIGURATION SAVED SUCCESSFULLY!")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Valid experiences configured:")?;
    for (i, experience_id) in config.allowed_experiences().iter().enumerate() {
        writeln!(out, "   {}. {}", i + 1, experience_id)?;
    }
    writeln!(out, "\nConfiguration saved to: {}", path.display())?;
    writeln!(out, "The application will now start...")?;
    writeln!(out, "{}\n", rule)?;
    out.flush()?;
    Ok(())
}

fn report_failure<W: Write>(out: &mut W, message: &str, path: &Path) -> Result<()> {
    writeln!(out, "\n❌ {}", message)?;
    writeln!(out, "Config file path: {}", path.display())?;
    out.flush()?;
    Ok(())
}
