//! Async contact actions over the reducer store.

use crate::{Contact, ContactAction, ContactDraft, ContactReducer, ContactState};
use keeper_config::{DispatchOrdering, Endpoints};
use keeper_store::Store;
use keeper_transport::{decode, normalize, Transport, TransportError};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

const GET_CONTACTS: &str = "get_contacts";

/// The signed-in user's contacts.
///
/// Async actions never return errors. A failed call leaves `contacts` as it
/// was and records the normalized message in [`ContactState::error`].
pub struct ContactStore {
    store: Store<ContactReducer>,
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
}

impl ContactStore {
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoints: Endpoints,
        ordering: DispatchOrdering,
    ) -> Self {
        Self {
            store: Store::with_ordering(ContactState::default(), ordering),
            transport,
            endpoints,
        }
    }

    /// Replace the collection with the server's list.
    pub async fn get_contacts(&self) -> ContactState {
        let ticket = self.store.begin_call(GET_CONTACTS);
        self.store.dispatch(ContactAction::Requested);

        let result = self
            .transport
            .get(&self.endpoints.contacts)
            .await
            .and_then(decode::<Vec<Contact>>);
        let action = match result {
            Ok(contacts) => {
                debug!(count = contacts.len(), "Loaded contacts");
                ContactAction::GetContacts(contacts)
            }
            Err(e) => self.failed("get_contacts", e),
        };
        self.store.dispatch_settled(&ticket, action);
        self.store.snapshot()
    }

    /// Create a contact and append the server's copy.
    pub async fn add_contact(&self, draft: &ContactDraft) -> ContactState {
        self.store.dispatch(ContactAction::Requested);

        let action = match self.send_contact(None, draft).await {
            Ok(contact) => {
                info!(contact_id = %contact.id, "Contact added");
                ContactAction::AddContact(contact)
            }
            Err(e) => self.failed("add_contact", e),
        };
        self.store.dispatch(action)
    }

    /// Save `contact`'s fields and replace it in place with the server's copy.
    pub async fn update_contact(&self, contact: &Contact) -> ContactState {
        self.store.dispatch(ContactAction::Requested);

        let action = match self.send_contact(Some(&contact.id), &contact.draft()).await {
            Ok(updated) => {
                info!(contact_id = %updated.id, "Contact updated");
                ContactAction::UpdateContact(updated)
            }
            Err(e) => self.failed("update_contact", e),
        };
        self.store.dispatch(action)
    }

    /// Delete by id. Unknown ids leave the collection unchanged.
    pub async fn delete_contact(&self, id: &str) -> ContactState {
        self.store.dispatch(ContactAction::Requested);

        let action = match self.transport.delete(&self.endpoints.contact(id)).await {
            Ok(_) => {
                info!(contact_id = %id, "Contact deleted");
                ContactAction::DeleteContact(id.to_string())
            }
            Err(e) => self.failed("delete_contact", e),
        };
        self.store.dispatch(action)
    }

    pub fn set_current(&self, contact: Contact) -> ContactState {
        self.store.dispatch(ContactAction::SetCurrent(contact))
    }

    pub fn clear_current(&self) -> ContactState {
        self.store.dispatch(ContactAction::ClearCurrent)
    }

    /// Show only contacts whose name or email contains `text`.
    pub fn filter_contacts(&self, text: impl Into<String>) -> ContactState {
        self.store.dispatch(ContactAction::FilterContacts(text.into()))
    }

    pub fn clear_filter(&self) -> ContactState {
        self.store.dispatch(ContactAction::ClearFilter)
    }

    /// Forget everything, e.g. when the session ends.
    pub fn clear_contacts(&self) -> ContactState {
        self.store.dispatch(ContactAction::ClearContacts)
    }

    pub fn state(&self) -> ContactState {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ContactState> {
        self.store.subscribe()
    }

    /// POST a new contact, or PUT an existing one when `id` is given.
    async fn send_contact(
        &self,
        id: Option<&str>,
        draft: &ContactDraft,
    ) -> Result<Contact, TransportError> {
        let body = serde_json::to_value(draft)?;
        let response = match id {
            Some(id) => self.transport.put(&self.endpoints.contact(id), body).await?,
            None => self.transport.post(&self.endpoints.contacts, body).await?,
        };
        decode(response)
    }

    fn failed(&self, call: &'static str, error: TransportError) -> ContactAction {
        warn!(call, status = ?error.status(), error = %error, "Contact call failed");
        ContactAction::ContactError(normalize(&error))
    }
}

impl std::fmt::Debug for ContactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactStore")
            .field("state", &self.store.snapshot())
            .finish_non_exhaustive()
    }
}
