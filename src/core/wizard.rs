//! Interactive prompts that collect the allowed experience IDs.
//!
//! Both prompt loops retry until the operator enters something valid; the
//! only way out besides valid input is cancellation (interrupt or closed
//! input), which surfaces as [`SetupError::Cancelled`].

use crate::config::{MAX_EXPERIENCES, MIN_EXPERIENCES};
use crate::core::ExperienceConfig;
use crate::utils::error::{Result, SetupError};
use crate::utils::validation::{parse_experience_count, validate_experience_id};
use std::io::{BufRead, Write};

pub const BANNER_RULE_WIDTH: usize = 60;

pub struct SetupWizard<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> SetupWizard<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// 顯示提示後讀取一行，去掉前後空白；輸入結束 (EOF) 視為取消
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("Input closed while waiting for: {}", prompt.trim_end());
            return Err(SetupError::Cancelled);
        }

        Ok(line.trim().to_string())
    }

    pub fn show_banner(&mut self) -> Result<()> {
        let rule = "=".repeat(BANNER_RULE_WIDTH);
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "🔧 EXPERIENCE CONFIGURATION SETUP")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(
            self.output,
            "This bot will only process image messages from the channels you configure here."
        )?;
        writeln!(
            self.output,
            "You can find experience IDs in your Whop dashboard under Chat experiences."
        )?;
        writeln!(
            self.output,
            "The application will NOT start until you complete this setup.\n"
        )?;
        Ok(())
    }

    /// 詢問要允許幾個 experience，直到輸入 1..=10 的整數為止
    pub fn prompt_count(&mut self) -> Result<usize> {
        let prompt = format!(
            "How many chat experiences do you want to allow? ({}-{}): ",
            MIN_EXPERIENCES, MAX_EXPERIENCES
        );

        loop {
            let answer = self.read_line(&prompt)?;
            match parse_experience_count(&answer) {
                Ok(count) => return Ok(count),
                Err(SetupError::InvalidValueError { reason, .. }) => {
                    tracing::debug!("Rejected experience count {:?}", answer);
                    writeln!(self.output, "❌ {}", reason)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// 依序詢問每個 experience ID，無效輸入會重問同一格
    pub fn prompt_experience_ids(&mut self, count: usize) -> Result<Vec<String>> {
        let mut allowed_experiences = Vec::with_capacity(count);

        for slot in 1..=count {
            let prompt = format!("Enter experience ID {}/{}: ", slot, count);
            loop {
                let experience_id = self.read_line(&prompt)?;
                if validate_experience_id(&experience_id).is_ok() {
                    writeln!(self.output, "✅ Added: {}", experience_id)?;
                    allowed_experiences.push(experience_id);
                    break;
                }
                tracing::debug!("Rejected experience ID {:?} for slot {}", experience_id, slot);
                writeln!(
                    self.output,
                    "❌ Invalid experience ID format. Please try again."
                )?;
            }
        }

        Ok(allowed_experiences)
    }

    /// 完整的互動流程：標題、數量、各個 ID
    pub fn collect(&mut self) -> Result<ExperienceConfig> {
        self.show_banner()?;

        let count = self.prompt_count()?;
        writeln!(
            self.output,
            "\nYou will now enter {} experience ID(s).",
            count
        )?;
        writeln!(self.output, "Example: exp_abc123def456\n")?;

        let allowed_experiences = self.prompt_experience_ids(count)?;
        Ok(ExperienceConfig::new(allowed_experiences))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn wizard(input: &str) -> SetupWizard<Cursor<Vec<u8>>, Vec<u8>> {
        SetupWizard::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(wizard: SetupWizard<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(wizard.into_inner().1).unwrap()
    }

    #[test]
    fn test_prompt_count_accepts_first_valid_entry() {
        let mut w = wizard("7\n3\n");
        assert_eq!(w.prompt_count().unwrap(), 7);

        let out = output_of(w);
        assert_eq!(out.matches("How many chat experiences").count(), 1);
        assert!(!out.contains("❌"));
    }

    #[test]
    fn test_prompt_count_reprompts_until_in_range() {
        let mut w = wizard("0\n11\nabc\n5\n");
        assert_eq!(w.prompt_count().unwrap(), 5);

        let out = output_of(w);
        assert_eq!(out.matches("How many chat experiences").count(), 4);
        assert_eq!(
            out.matches("❌ Please enter a number between 1 and 10.").count(),
            2
        );
        assert_eq!(out.matches("❌ Please enter a valid number.").count(), 1);
    }

    #[test]
    fn test_prompt_count_trims_whitespace() {
        let mut w = wizard("  4  \r\n");
        assert_eq!(w.prompt_count().unwrap(), 4);
    }

    #[test]
    fn test_prompt_experience_ids_reprompts_same_slot() {
        let mut w = wizard("\nabcd\nabcde\nexp_b2222\n");
        let ids = w.prompt_experience_ids(2).unwrap();
        assert_eq!(ids, vec!["abcde".to_string(), "exp_b2222".to_string()]);

        let out = output_of(w);
        assert_eq!(out.matches("Enter experience ID 1/2: ").count(), 3);
        assert_eq!(out.matches("Enter experience ID 2/2: ").count(), 1);
        assert_eq!(
            out.matches("❌ Invalid experience ID format. Please try again.")
                .count(),
            2
        );
        assert!(out.contains("✅ Added: abcde"));
    }

    #[test]
    fn test_closed_input_cancels() {
        let mut w = wizard("");
        assert!(matches!(w.prompt_count(), Err(SetupError::Cancelled)));

        let mut w = wizard("exp_a1111\n");
        assert!(matches!(
            w.prompt_experience_ids(3),
            Err(SetupError::Cancelled)
        ));
    }

    #[test]
    fn test_collect_preserves_entry_order() {
        let mut w = wizard("3\nexp_c3333\nexp_a1111\nexp_b2222\n");
        let config = w.collect().unwrap();
        assert_eq!(
            config.allowed_experiences(),
            &["exp_c3333", "exp_a1111", "exp_b2222"]
        );

        let out = output_of(w);
        assert!(out.starts_with(&"=".repeat(BANNER_RULE_WIDTH)));
        assert!(out.contains("You will now enter 3 experience ID(s)."));
    }
}
