//! Form Validation
//!
//! Synchronous checks run before any network call. A failure here means
//! the call is skipped and the message shown immediately.

use chrono::NaiveDate;

pub fn validate_login(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Please enter both username and password".to_string());
    }
    Ok(())
}

pub fn validate_register(username: &str, password: &str, confirm: &str) -> Result<(), String> {
    if username.trim().is_empty() || password.is_empty() || confirm.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

pub fn validate_forgot(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Please enter your email address".to_string());
    }
    Ok(())
}

/// Title and due date are required for creation; returns the parsed date.
pub fn validate_new_todo(title: &str, due_date: &str) -> Result<NaiveDate, String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if due_date.trim().is_empty() {
        return Err("Please pick a due date".to_string());
    }
    NaiveDate::parse_from_str(due_date.trim(), "%Y-%m-%d")
        .map_err(|_| "Invalid due date".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert!(validate_login("", "").is_err());
        assert!(validate_login("alice", "").is_err());
        assert!(validate_login("", "secret").is_err());
        assert!(validate_login("   ", "secret").is_err());
        assert!(validate_login("alice", "secret").is_ok());
    }

    #[test]
    fn test_register_requires_all_fields() {
        assert!(validate_register("", "", "").is_err());
        assert!(validate_register("bob", "", "").is_err());
        assert!(validate_register("bob", "pw", "").is_err());
        assert!(validate_register("", "pw", "pw").is_err());
        assert!(validate_register("bob", "pw", "pw").is_ok());
    }

    #[test]
    fn test_register_rejects_mismatched_passwords() {
        let err = validate_register("bob", "pw1", "pw2").unwrap_err();
        assert_eq!(err, "Passwords do not match");
    }

    #[test]
    fn test_forgot_requires_email() {
        assert!(validate_forgot("").is_err());
        assert!(validate_forgot("  ").is_err());
        assert!(validate_forgot("a@b.c").is_ok());
    }

    #[test]
    fn test_new_todo_requires_title_and_date() {
        assert!(validate_new_todo("", "2024-01-01").is_err());
        assert!(validate_new_todo("  ", "2024-01-01").is_err());
        assert!(validate_new_todo("Buy milk", "").is_err());
        assert!(validate_new_todo("Buy milk", "not-a-date").is_err());

        let date = validate_new_todo("Buy milk", "2024-01-01").unwrap();
        assert_eq!(date.to_string(), "2024-01-01");
    }
}
