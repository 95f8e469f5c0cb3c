//! Length-of-stay statistics.

use chrono::NaiveDate;

use careforge_core::{DomainError, DomainResult};

use crate::admission::Admission;

/// Whole days between admission and discharge, or between admission and
/// `as_of` for an ongoing stay.
///
/// The caller must supply `as_of` rather than the engine reading a wall
/// clock; for ongoing stays it may not precede the admission date.
pub fn length_of_stay(admission: &Admission, as_of: NaiveDate) -> DomainResult<i64> {
    let end = match admission.discharge_date() {
        Some(discharged) => discharged,
        None => {
            if as_of < admission.admission_date() {
                return Err(DomainError::validation("as_of precedes admission_date"));
            }
            as_of
        }
    };
    Ok((end - admission.admission_date()).num_days())
}

/// Mean stay in days across the discharged admissions in `admissions`.
///
/// `None` when no admission has been discharged; an empty sample is
/// reported distinctly from a zero-day average.
pub fn average_length_of_stay(admissions: &[Admission]) -> Option<f64> {
    let stays: Vec<i64> = admissions
        .iter()
        .filter_map(|a| {
            a.discharge_date()
                .map(|end| (end - a.admission_date()).num_days())
        })
        .collect();

    if stays.is_empty() {
        return None;
    }
    let total: i64 = stays.iter().sum();
    Some(total as f64 / stays.len() as f64)
}
