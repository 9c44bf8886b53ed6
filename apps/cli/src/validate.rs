//! Form validation before any request goes out.

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

const MIN_PASSWORD_LEN: usize = 6;

pub fn login_form(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(FILL_ALL_FIELDS);
    }
    Ok(())
}

pub fn register_form(
    name: &str,
    email: &str,
    password: &str,
    confirmation: &str,
) -> Result<(), &'static str> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(FILL_ALL_FIELDS);
    }
    if password != confirmation {
        return Err(PASSWORDS_DO_NOT_MATCH);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(())
}
