//! Cross-cutting field checks shared by the subsystem decision functions.
//!
//! The scheduling, wards and inventory engines all repeat the same handful of
//! input checks (blank names, reversed date pairs, non-positive quantities);
//! they live here so the error messages stay uniform.

use chrono::NaiveDate;

use crate::error::{DomainError, DomainResult};

/// Reject blank or whitespace-only required text fields.
pub fn non_empty(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Reject dates that lie after the caller-supplied `today`.
pub fn not_in_future(field: &str, value: NaiveDate, today: NaiveDate) -> DomainResult<()> {
    if value > today {
        return Err(DomainError::validation(format!(
            "{field} cannot be in the future"
        )));
    }
    Ok(())
}

/// Require `value` to be strictly after `earlier`.
pub fn strictly_after(
    field: &str,
    value: NaiveDate,
    earlier_field: &str,
    earlier: NaiveDate,
) -> DomainResult<()> {
    if value <= earlier {
        return Err(DomainError::validation(format!(
            "{field} must be after {earlier_field}"
        )));
    }
    Ok(())
}

/// Require `value` to be on or after `earlier`.
pub fn not_before(
    field: &str,
    value: NaiveDate,
    earlier_field: &str,
    earlier: NaiveDate,
) -> DomainResult<()> {
    if value < earlier {
        return Err(DomainError::validation(format!(
            "{field} cannot precede {earlier_field}"
        )));
    }
    Ok(())
}

/// Require a strictly positive quantity.
pub fn positive(field: &str, value: i64) -> DomainResult<()> {
    if value <= 0 {
        return Err(DomainError::validation(format!("{field} must be positive")));
    }
    Ok(())
}

/// Require a non-negative quantity.
pub fn non_negative(field: &str, value: i64) -> DomainResult<()> {
    if value < 0 {
        return Err(DomainError::validation(format!(
            "{field} cannot be negative"
        )));
    }
    Ok(())
}
