//! Login and registration form validation.
//!
//! Each field reports at most one message: the first rule it fails. The
//! password-confirmation match is checked only once every other field is
//! valid, so users fix basic problems first.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::password::{MIN_PASSWORD_LEN, has_digit, has_lowercase, has_symbol, has_uppercase};

pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const MSG_PASSWORD_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const MSG_PASSWORD_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const MSG_PASSWORD_DIGIT: &str = "Password must contain at least one number";
pub const MSG_PASSWORD_SYMBOL: &str = "Password must contain at least one special character";
pub const MSG_CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_TERMS_REQUIRED: &str = "You must accept the terms and conditions";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    AcceptTerms,
}

/// Field-level validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    messages: BTreeMap<Field, &'static str>,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Record `message` unless the field already has one.
    fn add(&mut self, field: Field, message: &'static str) {
        self.messages.entry(field).or_insert(message);
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

pub fn validate_login(form: &LoginForm) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if !is_valid_email(&form.email) {
        errors.add(Field::Email, MSG_INVALID_EMAIL);
    }
    if form.password.is_empty() {
        errors.add(Field::Password, MSG_PASSWORD_REQUIRED);
    }
    errors.into_result()
}

pub fn validate_register(form: &RegisterForm) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if !is_valid_email(&form.email) {
        errors.add(Field::Email, MSG_INVALID_EMAIL);
    }
    if let Some(message) = password_rule_violation(&form.password) {
        errors.add(Field::Password, message);
    }
    if form.confirm_password.is_empty() {
        errors.add(Field::ConfirmPassword, MSG_CONFIRM_REQUIRED);
    }
    if !form.accept_terms {
        errors.add(Field::AcceptTerms, MSG_TERMS_REQUIRED);
    }
    if errors.is_empty() && form.password != form.confirm_password {
        errors.add(Field::ConfirmPassword, MSG_PASSWORD_MISMATCH);
    }
    errors.into_result()
}

/// First password rule the value breaks, in display order.
pub fn password_rule_violation(password: &str) -> Option<&'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        Some(MSG_PASSWORD_TOO_SHORT)
    } else if !has_lowercase(password) {
        Some(MSG_PASSWORD_LOWERCASE)
    } else if !has_uppercase(password) {
        Some(MSG_PASSWORD_UPPERCASE)
    } else if !has_digit(password) {
        Some(MSG_PASSWORD_DIGIT)
    } else if !has_symbol(password) {
        Some(MSG_PASSWORD_SYMBOL)
    } else {
        None
    }
}

/// Practical address check: `local@domain.tld`, no dot at either end of the
/// local part, no consecutive dots, alphabetic TLD of two or more letters.
pub fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.rsplit_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '\'' | '+' | '-'))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };
    if hosts.is_empty() || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    hosts.iter().all(|label| {
        label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
