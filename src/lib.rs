//! Password strength scoring and form validation for login and registration
//! pages.
//!
//! Both halves are pure functions: the page layer collects field values,
//! calls into this crate and renders the returned results.
//!
//! # Features
//!
//! - `async` (default): Enables debounced scoring with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `AUTH_PRIMARY_PASSWORD_FIELD`: Name of the primary password field
//!   (default: `password1`)
//!
//! # Example
//!
//! ```rust
//! use auth_forms::{score, validate, FieldSpec};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//! let result = score(&password);
//! assert_eq!(result.label(), "Good password");
//!
//! let fields = vec![
//!     FieldSpec::required("email", "alice@example.com", "email"),
//!     FieldSpec::required("password1", "Tr0ub4dor&3", "text"),
//!     FieldSpec::required("password2", "Tr0ub4dor&4", "password-confirmation"),
//! ];
//! let issues = validate(&fields, Some("password1"));
//! assert_eq!(issues.len(), 1);
//! assert_eq!(issues[0].message, "Passwords do not match.");
//! ```

// Internal modules
mod evaluator;
mod sections;
mod types;

pub mod config;
pub mod validator;

// Public API
pub use evaluator::score;
pub use types::{FieldKind, FieldSpec, PasswordScore, PasswordStrength, ValidationIssue};
pub use validator::{SubmissionError, check_submission, validate, validate_field};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE_DELAY, score_tx};
