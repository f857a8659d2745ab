//! Contacts a user can make bookings with.

use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::validate::{enforce_email, enforce_text};

pub const DEFAULT_CONTACT_NAME: &str = "New Contact";
pub const DEFAULT_CONTACT_EMAIL: &str = "unknown@app_genie.app";

/// A named contact with an email address.
///
/// The id is assigned on creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: Uuid,
    name: String,
    email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let email = email.into();
        enforce_text(&name, "name")?;
        enforce_email(&email, "email")?;
        let contact = Self { id: Uuid::new_v4(), name, email };
        debug!(id = %contact.id, name = %contact.name, email = %contact.email, "contact created");
        Ok(contact)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        enforce_text(&name, "name")?;
        self.name = name;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<()> {
        let email = email.into();
        enforce_email(&email, "email")?;
        self.email = email;
        Ok(())
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: DEFAULT_CONTACT_NAME.to_owned(),
            email: DEFAULT_CONTACT_EMAIL.to_owned(),
        }
    }
}
