//! Value types shared by the scorer and the validator.

use std::fmt;

/// Discrete strength band a raw heuristic score is mapped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    /// No password entered yet.
    Empty,
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Text shown next to the strength meter.
    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Empty => "Enter a password",
            PasswordStrength::VeryWeak => "Very weak password",
            PasswordStrength::Weak => "Weak password",
            PasswordStrength::Fair => "Fair password",
            PasswordStrength::Good => "Good password",
            PasswordStrength::Strong => "Strong password",
        }
    }

    /// Reported score of the band, one of 0, 25, 50, 75, 100.
    pub fn value(self) -> u8 {
        match self {
            PasswordStrength::Empty | PasswordStrength::VeryWeak => 0,
            PasswordStrength::Weak => 25,
            PasswordStrength::Fair => 50,
            PasswordStrength::Good => 75,
            PasswordStrength::Strong => 100,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of scoring a single password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordScore {
    strength: PasswordStrength,
}

impl PasswordScore {
    /// Score reported for an empty password.
    pub fn empty() -> Self {
        Self { strength: PasswordStrength::Empty }
    }

    /// Maps a raw heuristic score onto its band.
    ///
    /// Thresholds are checked highest first; anything below 10, negative
    /// values included, is very weak.
    pub fn from_raw(raw: i64) -> Self {
        let strength = match raw {
            r if r >= 70 => PasswordStrength::Strong,
            r if r >= 50 => PasswordStrength::Good,
            r if r >= 30 => PasswordStrength::Fair,
            r if r >= 10 => PasswordStrength::Weak,
            _ => PasswordStrength::VeryWeak,
        };
        Self { strength }
    }

    pub fn value(&self) -> u8 {
        self.strength.value()
    }

    pub fn label(&self) -> &'static str {
        self.strength.label()
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }
}

/// How a field's value is interpreted beyond the required check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    /// Must equal the primary password field.
    PasswordConfirmation,
    /// Unknown kinds only get the required check.
    Other(String),
}

impl From<&str> for FieldKind {
    fn from(kind: &str) -> Self {
        match kind {
            "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "password-confirmation" => FieldKind::PasswordConfirmation,
            other => FieldKind::Other(other.to_string()),
        }
    }
}

/// A named form field and its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        required: bool,
        kind: impl Into<FieldKind>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required,
            kind: kind.into(),
        }
    }

    pub fn required(
        name: impl Into<String>,
        value: impl Into<String>,
        kind: impl Into<FieldKind>,
    ) -> Self {
        Self::new(name, value, true, kind)
    }

    pub fn optional(
        name: impl Into<String>,
        value: impl Into<String>,
        kind: impl Into<FieldKind>,
    ) -> Self {
        Self::new(name, value, false, kind)
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field_name: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_name, self.message)
    }
}
