//! Alias records as handed to the menu by the address book.
//!
//! Aliases arrive already parsed. The menu never mutates them; it only keeps
//! shared references (`Rc<Alias>`) and compares them by identity.

use std::fmt::{Display, Formatter};

/// One address of an alias: an optional display name plus the mailbox.
///
/// `mailbox` is optional only so that malformed address book entries can
/// still be listed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Address {
    pub personal: Option<String>,
    pub mailbox: Option<String>,
}

impl Address {
    pub fn new(mailbox: impl Into<String>) -> Self {
        Self {
            personal: None,
            mailbox: Some(mailbox.into()),
        }
    }

    pub fn with_personal(personal: impl Into<String>, mailbox: impl Into<String>) -> Self {
        Self {
            personal: Some(personal.into()),
            mailbox: Some(mailbox.into()),
        }
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.personal.as_deref(), self.mailbox.as_deref()) {
            (Some(p), Some(m)) => write!(f, "{} <{}>", p, m),
            (Some(p), None) => write!(f, "{}", p),
            (None, Some(m)) => write!(f, "{}", m),
            (None, None) => Ok(()),
        }
    }
}

/// A named contact entry with an ordered list of addresses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub addresses: Vec<Address>,
    pub comment: Option<String>,
}

impl Alias {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            addresses: Vec::new(),
            comment: None,
        }
    }

    /// Builder helper: append an address.
    pub fn address(mut self, addr: Address) -> Self {
        self.addresses.push(addr);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// First address in the list; the only one used for ordering.
    pub fn first_address(&self) -> Option<&Address> {
        self.addresses.first()
    }

    /// All addresses joined for display, e.g. `Jo <jo@a.org>, jo@b.org`.
    pub fn address_line(&self) -> String {
        self.addresses
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
