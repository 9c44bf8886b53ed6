//! Contact collection snapshot.

use crate::Contact;

/// Everything the UI knows about the user's contacts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactState {
    /// `None` until the first successful load.
    pub contacts: Option<Vec<Contact>>,
    /// The contact being edited.
    pub current: Option<Contact>,
    /// `None` means no filter is active, which differs from an empty match.
    pub filtered: Option<Vec<Contact>>,
    /// Text behind `filtered`, kept so later mutations stay consistent.
    pub filter_text: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
}

impl ContactState {
    /// The list a consumer should render: the filter view when active.
    pub fn visible(&self) -> &[Contact] {
        self.filtered
            .as_deref()
            .or(self.contacts.as_deref())
            .unwrap_or(&[])
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered.is_some()
    }

    pub fn find(&self, id: &str) -> Option<&Contact> {
        self.contacts.as_ref()?.iter().find(|c| c.id == id)
    }
}
