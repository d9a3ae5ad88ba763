use crate::error::AppError;

/// Ages outside this window are rejected by the fixture loader. The filter
/// itself never range-checks; this only guards data we ship or ingest.
const MIN_PLAUSIBLE_AGE: i32 = 1;
const MAX_PLAUSIBLE_AGE: i32 = 120;

pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

pub fn require_plausible_age(field: &str, age: i32) -> Result<(), AppError> {
    if !(MIN_PLAUSIBLE_AGE..=MAX_PLAUSIBLE_AGE).contains(&age) {
        return Err(AppError::Validation(format!(
            "{field} must be between {MIN_PLAUSIBLE_AGE} and {MAX_PLAUSIBLE_AGE}, got {age}"
        )));
    }
    Ok(())
}
