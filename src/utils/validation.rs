use crate::config::{MAX_EXPERIENCES, MIN_EXPERIENCES, MIN_EXPERIENCE_ID_LENGTH};
use crate::utils::error::{Result, SetupError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SetupError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// 以字元數計算長度，非位元組數
pub fn validate_min_length(field_name: &str, value: &str, min_length: usize) -> Result<()> {
    if value.chars().count() < min_length {
        return Err(SetupError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {} characters", min_length),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SetupError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Please enter a number between {} and {}.", min, max),
        });
    }
    Ok(())
}

/// 解析要設定的 experience 數量，必須是 1..=10 的整數
pub fn parse_experience_count(input: &str) -> Result<usize> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| SetupError::InvalidValueError {
            field: "experience count".to_string(),
            value: input.to_string(),
            reason: "Please enter a valid number.".to_string(),
        })?;

    validate_range(
        "experience count",
        value,
        MIN_EXPERIENCES as i64,
        MAX_EXPERIENCES as i64,
    )?;

    Ok(value as usize)
}

/// Experience ID 的基本檢查：非空且至少 5 個字元。
///
/// 刻意不檢查 `exp_` 前綴或字元集，這只是輸入時的粗略檢查。
pub fn validate_experience_id(experience_id: &str) -> Result<()> {
    validate_non_empty_string("experience ID", experience_id)?;
    validate_min_length("experience ID", experience_id, MIN_EXPERIENCE_ID_LENGTH)
}
