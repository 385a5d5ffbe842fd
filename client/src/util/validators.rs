//! Field validators used by the landing page forms.
//!
//! DESIGN
//! ======
//! A validator is a plain function pointer paired with the message shown when
//! it rejects a value. Validator sets are `'static` slices so every render of
//! a field shares the same list instead of rebuilding it.

use time::macros::format_description;
use time::{Date, OffsetDateTime};

#[cfg(test)]
#[path = "validators_test.rs"]
mod validators_test;

/// A single predicate over a field value plus the message shown on failure.
#[derive(Clone, Copy, Debug)]
pub struct Validator {
    pub check: fn(&str) -> bool,
    pub error_message: &'static str,
}

impl Validator {
    pub const fn new(check: fn(&str) -> bool, error_message: &'static str) -> Self {
        Self { check, error_message }
    }

    /// `true` when `value` passes this validator.
    pub fn validate(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

pub const EMPTY_FIELD_MESSAGE: &str = "O campo não pode estar vazio";
pub const PAST_DATE_MESSAGE: &str = "A data informada deve ser uma data passada";

/// Validators for free-text fields (name, email, password).
pub const TEXT_VALIDATORS: &[Validator] = &[Validator::new(is_not_empty, EMPTY_FIELD_MESSAGE)];

/// Validators for the birth date field.
pub const DATE_VALIDATORS: &[Validator] = &[Validator::new(is_past_date, PAST_DATE_MESSAGE)];

/// Messages of every validator rejecting `value`, in validator order.
pub fn collect_errors(validators: &[Validator], value: &str) -> Vec<&'static str> {
    validators
        .iter()
        .filter(|validator| !validator.validate(value))
        .map(|validator| validator.error_message)
        .collect()
}

/// Whitespace-only input counts as empty.
pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `true` when `value` is a `YYYY-MM-DD` date strictly before today (local).
pub fn is_past_date(value: &str) -> bool {
    is_date_before(value, today())
}

/// `true` when `value` parses as a `YYYY-MM-DD` date strictly before `today`.
///
/// Unparsable input is never a past date.
pub fn is_date_before(value: &str, today: Date) -> bool {
    parse_input_date(value).is_some_and(|date| date < today)
}

/// Parse the value format produced by `<input type="date">`.
pub fn parse_input_date(value: &str) -> Option<Date> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Current calendar date in the local offset, falling back to UTC when the
/// local offset cannot be determined.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
