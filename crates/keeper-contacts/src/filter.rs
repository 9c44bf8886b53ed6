//! Contact matching for the filter view.

use crate::Contact;

/// Case-insensitive substring match of `text` in the name or email.
///
/// The text is matched literally. Empty text matches every contact.
pub fn matches(contact: &Contact, text: &str) -> bool {
    let needle = text.to_lowercase();
    contact.name.to_lowercase().contains(&needle) || contact.email.to_lowercase().contains(&needle)
}

/// The subsequence of `contacts` matching `text`, in order.
pub fn filter_contacts(contacts: &[Contact], text: &str) -> Vec<Contact> {
    contacts
        .iter()
        .filter(|contact| matches(contact, text))
        .cloned()
        .collect()
}
