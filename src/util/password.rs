//! Password strength meter for the registration form.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Coarse strength bucket shown under the password field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrengthLevel {
    /// Nothing typed yet.
    #[default]
    Empty,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    /// CSS modifier for the meter bar.
    pub fn class(self) -> &'static str {
        match self {
            Self::Empty => "strength-meter__bar",
            Self::Weak => "strength-meter__bar strength-meter__bar--weak",
            Self::Fair => "strength-meter__bar strength-meter__bar--fair",
            Self::Good => "strength-meter__bar strength-meter__bar--good",
            Self::Strong => "strength-meter__bar strength-meter__bar--strong",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordStrength {
    /// Number of satisfied rules, 0..=5.
    pub score: u8,
    pub level: StrengthLevel,
}

impl PasswordStrength {
    /// Meter fill as a percentage.
    pub fn percent(self) -> u8 {
        self.score * 20
    }
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Anything outside `[a-zA-Z0-9]`, including whitespace and non-ASCII.
pub fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Score a password: one point each for length, lowercase, uppercase, digit
/// and symbol.
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::default();
    }
    let rules = [
        password.chars().count() >= MIN_PASSWORD_LEN,
        has_lowercase(password),
        has_uppercase(password),
        has_digit(password),
        has_symbol(password),
    ];
    let score = rules.iter().fold(0u8, |acc, &ok| acc + u8::from(ok));
    let level = match score {
        0..=2 => StrengthLevel::Weak,
        3 => StrengthLevel::Fair,
        4 => StrengthLevel::Good,
        _ => StrengthLevel::Strong,
    };
    PasswordStrength { score, level }
}
