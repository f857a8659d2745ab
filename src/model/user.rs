//! The signed-in user and their contacts.
//!
//! There is one `User` per running application. It is owned by the
//! controller and handed to whoever needs it; [`User::reset`] puts it back
//! to its initial state in place.

use tracing::debug;

use super::contact::Contact;
use crate::auth::{self, hash_password, verify_password};
use crate::validate::{enforce_email, enforce_text};

pub const DEFAULT_USER_NAME: &str = "new_user";
pub const DEFAULT_USER_EMAIL: &str = "update_this_email@appgenie.app";
pub const DEFAULT_PASSWORD: &str = "password";

#[derive(Debug, Clone)]
pub struct User {
    user_name: String,
    email: String,
    password_hash: String,
    contacts: Vec<Contact>,
}

impl User {
    /// Create a user, hashing `password` for storage.
    pub fn new(user_name: &str, email: &str, password: &str) -> auth::Result<Self> {
        enforce_text(user_name, "user_name")?;
        enforce_email(email, "email")?;
        let password_hash = hash_password(password)?;
        Ok(Self {
            user_name: user_name.to_owned(),
            email: email.to_owned(),
            password_hash,
            contacts: Vec::new(),
        })
    }

    /// The initial user: `new_user` with the default password.
    pub fn with_defaults() -> auth::Result<Self> {
        Self::new(DEFAULT_USER_NAME, DEFAULT_USER_EMAIL, DEFAULT_PASSWORD)
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn set_user_name(&mut self, user_name: &str) -> auth::Result<()> {
        enforce_text(user_name, "user_name")?;
        self.user_name = user_name.to_owned();
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> auth::Result<()> {
        enforce_email(email, "email")?;
        self.email = email.to_owned();
        Ok(())
    }

    /// Replace the password. Only the new hash is kept.
    pub fn set_password(&mut self, password: &str) -> auth::Result<()> {
        self.password_hash = hash_password(password)?;
        Ok(())
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn add_contact(&mut self, contact: Contact) {
        debug!(user = %self.user_name, contact = %contact.name(), "contact added");
        self.contacts.push(contact);
    }

    /// Whether `user_name` and `password` match this user.
    pub fn authenticate(&self, user_name: &str, password: &str) -> auth::Result<bool> {
        enforce_text(user_name, "user_name")?;
        if user_name != self.user_name {
            return Ok(false);
        }
        verify_password(&self.password_hash, password)
    }

    /// Reinitialise every field to its default. Contacts are dropped.
    pub fn reset(&mut self) -> auth::Result<()> {
        *self = Self::with_defaults()?;
        debug!("user reset");
        Ok(())
    }
}
