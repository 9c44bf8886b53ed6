//! Contact commands.

use super::App;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use keeper_alerts::{surface_contact_error, AlertKind};
use keeper_contacts::{Contact, ContactDraft, ContactKind};

/// Fields to change on an existing contact; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct ContactChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub kind: Option<ContactKind>,
}

impl ContactChanges {
    fn apply(self, contact: &Contact) -> Contact {
        let mut edited = contact.clone();
        if let Some(name) = self.name {
            edited.name = name;
        }
        if let Some(email) = self.email {
            edited.email = email;
        }
        if let Some(phone) = self.phone {
            edited.phone = Some(phone).filter(|p| !p.is_empty());
        }
        if let Some(kind) = self.kind {
            edited.kind = kind;
        }
        edited
    }
}

pub fn new_draft(
    name: String,
    email: String,
    phone: Option<String>,
    kind: ContactKind,
) -> ContactDraft {
    let draft = ContactDraft::new(name, email).with_kind(kind);
    match phone.filter(|p| !p.is_empty()) {
        Some(phone) => draft.with_phone(phone),
        None => draft,
    }
}

/// Surface a failed contact call through the alert store.
fn check(app: &App, format: &OutputFormat) -> Result<()> {
    surface_contact_error(&app.contacts, &app.alerts);
    app.drain_alerts(format)
}

/// List contacts, optionally filtered.
pub async fn contacts_list(app: &App, filter: Option<&str>, format: &OutputFormat) -> Result<()> {
    app.require_session(format).await?;

    app.contacts.get_contacts().await;
    check(app, format)?;

    let state = match filter {
        Some(text) => app.contacts.filter_contacts(text),
        None => app.contacts.state(),
    };
    output::print_contacts(state.visible(), format);
    Ok(())
}

/// Add a contact.
pub async fn contacts_add(app: &App, draft: ContactDraft, format: &OutputFormat) -> Result<()> {
    app.require_session(format).await?;

    let state = app.contacts.add_contact(&draft).await;
    check(app, format)?;

    if let Some(added) = state.contacts.as_deref().and_then(<[Contact]>::last) {
        output::print_contact(added, format);
    }
    Ok(())
}

/// Update a contact by id.
pub async fn contacts_update(
    app: &App,
    id: &str,
    changes: ContactChanges,
    format: &OutputFormat,
) -> Result<()> {
    app.require_session(format).await?;

    let state = app.contacts.get_contacts().await;
    check(app, format)?;

    let Some(existing) = state.find(id).cloned() else {
        app.alerts.set_alert("Contact not found", AlertKind::Danger);
        return app.drain_alerts(format);
    };

    // Edit flow: mark the contact current while the update is in flight.
    app.contacts.set_current(existing.clone());
    let state = app.contacts.update_contact(&changes.apply(&existing)).await;
    app.contacts.clear_current();
    check(app, format)?;

    if let Some(updated) = state.find(id) {
        output::print_contact(updated, format);
    }
    Ok(())
}

/// Delete a contact by id.
pub async fn contacts_delete(app: &App, id: &str, format: &OutputFormat) -> Result<()> {
    app.require_session(format).await?;

    app.contacts.delete_contact(id).await;
    app.contacts.clear_current();
    check(app, format)?;

    app.alerts.set_alert("Contact removed", AlertKind::Success);
    app.drain_alerts(format)
}
