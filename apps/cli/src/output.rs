//! Output formatting for the CLI.

use clap::ValueEnum;
use keeper_alerts::{Alert, AlertKind};
use keeper_contacts::Contact;
use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}

/// Print a success message.
pub fn print_success(message: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", message),
        OutputFormat::Json => {
            println!("{}", serde_json::json!({"status": "success", "message": message}));
        }
    }
}

/// Print an error message.
pub fn print_error(message: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Text => eprintln!("Error: {}", message),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({"status": "error", "message": message}));
        }
    }
}

/// Print a non-error alert.
pub fn print_alert(alert: &Alert, format: &OutputFormat) {
    match format {
        OutputFormat::Text => match alert.kind {
            AlertKind::Danger => eprintln!("Error: {}", alert.message),
            _ => println!("{}", alert.message),
        },
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({"status": alert.kind, "message": alert.message})
        ),
    }
}

/// Print a table row.
pub fn print_row(label: &str, value: &str) {
    println!("  {:<16} {}", format!("{}:", label), value);
}

/// Print a divider line.
pub fn print_divider() {
    println!("{}", "-".repeat(50));
}

/// Print a heading.
pub fn print_heading(text: &str) {
    println!("\n{}", text);
    print_divider();
}

/// Print one contact card.
pub fn print_contact(contact: &Contact, format: &OutputFormat) {
    match format {
        OutputFormat::Text => {
            print_heading(&format!("{} ({})", contact.name, contact.kind));
            print_row("ID", &contact.id);
            if !contact.email.is_empty() {
                print_row("Email", &contact.email);
            }
            if let Some(phone) = &contact.phone {
                print_row("Phone", phone);
            }
        }
        OutputFormat::Json => print_json(contact),
    }
}

/// Print a list of contacts.
pub fn print_contacts(contacts: &[Contact], format: &OutputFormat) {
    match format {
        OutputFormat::Text => {
            if contacts.is_empty() {
                println!("No contacts found.");
                return;
            }
            for contact in contacts {
                print_contact(contact, format);
            }
        }
        OutputFormat::Json => print_json(&contacts),
    }
}
