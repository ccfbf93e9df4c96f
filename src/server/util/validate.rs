//! Restaurant field validation.
//!
//! Lengths are counted in characters rather than bytes.

pub const PHONE_LENGTH: usize = 10;
pub const ZIP_LENGTH: usize = 6;

pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().count() == PHONE_LENGTH
}

pub fn is_valid_zip(zip: &str) -> bool {
    zip.chars().count() == ZIP_LENGTH
}

/// Returns the value when it is present and not empty
pub fn required(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
