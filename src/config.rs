//! Environment configuration.

/// Environment variable naming the primary password field.
pub const PRIMARY_PASSWORD_FIELD_ENV: &str = "AUTH_PRIMARY_PASSWORD_FIELD";

/// Primary password field of the registration form.
pub const DEFAULT_PRIMARY_PASSWORD_FIELD: &str = "password1";

/// Returns the name of the primary password field.
///
/// Priority:
/// 1. Environment variable `AUTH_PRIMARY_PASSWORD_FIELD` (ignored when blank)
/// 2. Default `password1`
pub fn primary_password_field() -> String {
    std::env::var(PRIMARY_PASSWORD_FIELD_ENV)
        .ok()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PRIMARY_PASSWORD_FIELD.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_primary_password_field_default() {
        remove_env(PRIMARY_PASSWORD_FIELD_ENV);
        assert_eq!(primary_password_field(), "password1");
    }

    #[test]
    #[serial]
    fn test_primary_password_field_from_env() {
        set_env(PRIMARY_PASSWORD_FIELD_ENV, "new_password");
        assert_eq!(primary_password_field(), "new_password");
        remove_env(PRIMARY_PASSWORD_FIELD_ENV);
    }

    #[test]
    #[serial]
    fn test_primary_password_field_blank_env_falls_back() {
        set_env(PRIMARY_PASSWORD_FIELD_ENV, "   ");
        assert_eq!(primary_password_field(), "password1");
        remove_env(PRIMARY_PASSWORD_FIELD_ENV);
    }
}
