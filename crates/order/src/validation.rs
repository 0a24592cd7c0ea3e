//! Contact and address form validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use srb_core::validation::Validator;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("phone pattern is valid"));

// Swedish postal codes: `411 19` or `41119`
static POSTAL_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}\s?[0-9]{2}$").expect("postal code pattern is valid"));

const MISSING_CONTACT: &str = "MISSING_CONTACT_FIELDS";
const INVALID_EMAIL: &str = "INVALID_EMAIL";
const INVALID_PHONE: &str = "INVALID_PHONE";
const MISSING_ADDRESS: &str = "MISSING_ADDRESS_FIELDS";
const INVALID_POSTAL_CODE: &str = "INVALID_POSTAL_CODE";

/// Customer fields collected by the order form.
///
/// Field names serialize in camelCase to match stored sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl FormData {
    /// The customer's name for the confirmation: `full_name` when filled
    /// in, otherwise first and last name joined.
    pub fn display_name(&self) -> String {
        if let Some(full) = self.full_name.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            return full.to_string();
        }
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// First validation failure of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Missing required contact fields")]
    MissingContactFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone format")]
    InvalidPhone,

    #[error("Missing required address fields")]
    MissingAddressFields,

    #[error("Invalid postal code format")]
    InvalidPostalCode,
}

impl FormError {
    /// Returns the shared error code for this error.
    pub fn code(&self) -> srb_core::ErrorCode {
        match self {
            FormError::MissingContactFields | FormError::MissingAddressFields => {
                srb_core::ErrorCode::MissingField
            }
            FormError::InvalidEmail | FormError::InvalidPhone | FormError::InvalidPostalCode => {
                srb_core::ErrorCode::InvalidFormat
            }
        }
    }

    fn from_code(code: &str) -> Self {
        match code {
            INVALID_EMAIL => FormError::InvalidEmail,
            INVALID_PHONE => FormError::InvalidPhone,
            MISSING_ADDRESS => FormError::MissingAddressFields,
            INVALID_POSTAL_CODE => FormError::InvalidPostalCode,
            _ => FormError::MissingContactFields,
        }
    }
}

/// Validate the order form, stopping at the first failure.
///
/// Checks run in this order: contact fields present, email format, phone
/// format, address fields present, postal code format. A field is present
/// when it is set and not blank.
pub fn validate_form_data(form: &FormData) -> Result<(), FormError> {
    let result = Validator::fail_fast()
        .required_group(
            MISSING_CONTACT,
            "Missing required contact fields",
            &[
                ("firstName", form.first_name.as_deref()),
                ("lastName", form.last_name.as_deref()),
                ("email", form.email.as_deref()),
                ("phone", form.phone.as_deref()),
            ],
        )
        .pattern("email", form.email.as_deref(), &EMAIL_PATTERN, INVALID_EMAIL, "Invalid email format")
        .pattern("phone", form.phone.as_deref(), &PHONE_PATTERN, INVALID_PHONE, "Invalid phone format")
        .required_group(
            MISSING_ADDRESS,
            "Missing required address fields",
            &[
                ("street", form.street.as_deref()),
                ("postalCode", form.postal_code.as_deref()),
                ("city", form.city.as_deref()),
            ],
        )
        .pattern(
            "postalCode",
            form.postal_code.as_deref(),
            &POSTAL_CODE_PATTERN,
            INVALID_POSTAL_CODE,
            "Invalid postal code format",
        )
        .validate();

    match result.first_error() {
        None => Ok(()),
        Some(error) => {
            tracing::debug!(field = %error.field, code = %error.code, "order form rejected");
            Err(FormError::from_code(&error.code))
        }
    }
}
