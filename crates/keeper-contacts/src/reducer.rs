//! Pure contact transitions.

use crate::filter::{filter_contacts, matches};
use crate::{Contact, ContactAction, ContactState};
use keeper_store::Reducer;

/// Reducer for [`ContactState`].
pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactState;
    type Action = ContactAction;
    const NAME: &'static str = "contacts";

    fn reduce(state: &ContactState, action: ContactAction) -> ContactState {
        let mut next = state.clone();
        match action {
            ContactAction::Requested => {
                next.loading = true;
            }
            ContactAction::GetContacts(contacts) => {
                // An active filter follows the new list.
                if let Some(text) = &next.filter_text {
                    next.filtered = Some(filter_contacts(&contacts, text));
                }
                next.contacts = Some(contacts);
                next.loading = false;
            }
            ContactAction::AddContact(contact) => {
                if let (Some(filtered), Some(text)) = (&mut next.filtered, &next.filter_text) {
                    if matches(&contact, text) {
                        filtered.push(contact.clone());
                    }
                }
                next.contacts.get_or_insert_with(Vec::new).push(contact);
                next.loading = false;
            }
            ContactAction::UpdateContact(contact) => {
                if let Some(contacts) = &mut next.contacts {
                    replace_by_id(contacts, &contact);
                }
                // An edit can move a contact into or out of the filter.
                if let (Some(text), Some(contacts)) = (&next.filter_text, &next.contacts) {
                    next.filtered = Some(filter_contacts(contacts, text));
                }
                next.loading = false;
            }
            ContactAction::DeleteContact(id) => {
                if let Some(contacts) = &mut next.contacts {
                    remove_by_id(contacts, &id);
                }
                if let Some(filtered) = &mut next.filtered {
                    remove_by_id(filtered, &id);
                }
                next.loading = false;
            }
            ContactAction::SetCurrent(contact) => {
                next.current = Some(contact);
            }
            ContactAction::ClearCurrent => {
                next.current = None;
            }
            ContactAction::FilterContacts(text) => {
                let contacts = next.contacts.as_deref().unwrap_or(&[]);
                next.filtered = Some(filter_contacts(contacts, &text));
                next.filter_text = Some(text);
            }
            ContactAction::ClearFilter => {
                next.filtered = None;
                next.filter_text = None;
            }
            ContactAction::ClearContacts => {
                next = ContactState::default();
            }
            ContactAction::ContactError(message) => {
                next.error = Some(message);
                next.loading = false;
            }
        }
        next
    }
}

fn replace_by_id(list: &mut [Contact], contact: &Contact) {
    if let Some(slot) = list.iter_mut().find(|c| c.id == contact.id) {
        *slot = contact.clone();
    }
}

fn remove_by_id(list: &mut Vec<Contact>, id: &str) {
    if let Some(index) = list.iter().position(|c| c.id == id) {
        list.remove(index);
    }
}
