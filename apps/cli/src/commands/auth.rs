//! Authentication commands.

use super::App;
use crate::output::{self, OutputFormat};
use crate::validate;
use anyhow::Result;
use keeper_alerts::{surface_auth_error, AlertKind};
use keeper_auth::{AuthState, Credentials, RegistrationProfile};
use serde_json::json;
use std::io::{self, Write};

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

/// Report an already valid session instead of prompting again.
async fn existing_session(app: &App, format: &OutputFormat) -> bool {
    if app.auth.state().token.is_none() {
        return false;
    }
    let state = app.auth.load_user().await;
    let authenticated = state.is_authenticated();
    match state.user.filter(|_| authenticated) {
        Some(user) => {
            output::print_success(&format!("Already logged in as {}", user.email), format);
            true
        }
        None => false,
    }
}

fn report_session(app: &App, state: &AuthState, format: &OutputFormat) -> Result<()> {
    surface_auth_error(&app.auth, &app.alerts);
    app.drain_alerts(format)?;

    let who = state
        .user
        .as_ref()
        .map(|u| format!("{} <{}>", u.name, u.email))
        .unwrap_or_else(|| "user".to_string());
    output::print_success(&format!("Logged in as {}", who), format);
    Ok(())
}

/// Login with email and password.
pub async fn login(app: &App, format: &OutputFormat) -> Result<()> {
    if existing_session(app, format).await {
        return Ok(());
    }

    let email = prompt("Email")?;
    let password = rpassword::prompt_password("Password: ")?;

    if let Err(message) = validate::login_form(&email, &password) {
        app.alerts.set_alert(message, AlertKind::Danger);
        return app.drain_alerts(format);
    }

    let state = app.auth.login(&Credentials::new(email, password)).await;
    report_session(app, &state, format)
}

/// Register a new account.
pub async fn register(app: &App, name: &str, format: &OutputFormat) -> Result<()> {
    if existing_session(app, format).await {
        return Ok(());
    }

    let email = prompt("Email")?;
    let password = rpassword::prompt_password("Password: ")?;
    let confirmation = rpassword::prompt_password("Confirm password: ")?;

    if let Err(message) = validate::register_form(name, &email, &password, &confirmation) {
        app.alerts.set_alert(message, AlertKind::Danger);
        return app.drain_alerts(format);
    }

    let profile = RegistrationProfile::new(name, email, password);
    let state = app.auth.register(&profile).await;
    report_session(app, &state, format)
}

/// Logout and clear session.
pub fn logout(app: &App, format: &OutputFormat) -> Result<()> {
    app.auth.logout();
    app.contacts.clear_contacts();
    output::print_success("Logged out successfully", format);
    Ok(())
}

/// Check authentication status.
pub async fn status(app: &App, format: &OutputFormat) -> Result<()> {
    let state = if app.auth.state().token.is_some() {
        app.auth.load_user().await
    } else {
        app.auth.state()
    };
    let user = state.user.as_ref().filter(|_| state.is_authenticated());

    match format {
        OutputFormat::Text => match user {
            Some(user) => {
                println!("Auth:     logged in");
                output::print_row("Name", &user.name);
                output::print_row("Email", &user.email);
                output::print_row("User ID", &user.id);
            }
            None => println!("Auth:     not logged in"),
        },
        OutputFormat::Json => output::print_json(&json!({
            "logged_in": user.is_some(),
            "user": user,
        })),
    }

    Ok(())
}
