//! Contact store actions.

use crate::Contact;
use keeper_store::StoreAction;

/// Every transition the contact reducer accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactAction {
    /// An async contact call has started.
    Requested,
    GetContacts(Vec<Contact>),
    AddContact(Contact),
    UpdateContact(Contact),
    DeleteContact(String),
    SetCurrent(Contact),
    ClearCurrent,
    FilterContacts(String),
    ClearFilter,
    ClearContacts,
    ContactError(String),
}

impl StoreAction for ContactAction {
    fn name(&self) -> &'static str {
        match self {
            ContactAction::Requested => "CONTACTS_REQUESTED",
            ContactAction::GetContacts(_) => "GET_CONTACTS",
            ContactAction::AddContact(_) => "ADD_CONTACT",
            ContactAction::UpdateContact(_) => "UPDATE_CONTACT",
            ContactAction::DeleteContact(_) => "DELETE_CONTACT",
            ContactAction::SetCurrent(_) => "SET_CURRENT",
            ContactAction::ClearCurrent => "CLEAR_CURRENT",
            ContactAction::FilterContacts(_) => "FILTER_CONTACTS",
            ContactAction::ClearFilter => "CLEAR_FILTER",
            ContactAction::ClearContacts => "CLEAR_CONTACTS",
            ContactAction::ContactError(_) => "CONTACT_ERROR",
        }
    }
}
