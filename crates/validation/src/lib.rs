//! Form-input validation.
//!
//! Independent predicate functions over primitive inputs (email, phone,
//! GSTIN, PAN, password strength) plus a composite rule-driven form
//! validator. Everything here is pure, synchronous and total: invalid input
//! yields `false` or an error message, never a panic.
//!
//! These run in the UI layer *before* an entity reaches the domain crates;
//! entity constructors trust that identifier formats were checked here.

pub mod fields;
pub mod form;
pub mod password;

pub use fields::{is_valid_email, is_valid_gstin, is_valid_pan, is_valid_phone};
pub use form::{validate_form, FieldRule, FormValidation};
pub use password::{password_strength, PasswordStrength, StrengthLevel};
