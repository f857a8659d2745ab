//! Application controller: owns the user and the database, builds screens
//! and handles what they submit.

use tracing::{debug, info};

use crate::auth::{verify_password, AuthError};
use crate::clock::Clock;
use crate::config::AppConfig;
use crate::db::{Database, DbError};
use crate::error::FormError;
use crate::form::FormEvent;
use crate::model::{Booking, Contact, User};
use crate::screens::{AddContact, CreateBooking, Login, View};
use crate::surface::Surface;
use crate::validate::{enforce_date, enforce_int, enforce_string, Value};

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Db(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, ControllerError>;

/// Wiring between screens, the user and persistence.
#[derive(Debug)]
pub struct Controller {
    config: AppConfig,
    user: User,
    db: Database,
}

impl Controller {
    /// Open the configured database (creating the `users` table) and start
    /// with the default user.
    pub fn new(config: AppConfig) -> Result<Self> {
        let db = match &config.database_path {
            Some(path) => Database::open(path)?,
            None => Database::open_in_memory()?,
        };
        db.create_users_table()?;
        let user = User::with_defaults()?;
        debug!(?config, "controller started");
        Ok(Self { config, user, db })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn db_mut(&mut self) -> &mut Database {
        &mut self.db
    }

    // ── Screens ──────────────────────────────────────────────────────

    /// Build the login screen with the configured title.
    pub fn login_view(&self, surface: impl Surface + 'static, clock: impl Clock + 'static) -> Result<Login> {
        let config = Login::config().with_title(self.config.login_title.clone());
        Ok(Login::with_config(config, surface, clock)?)
    }

    pub fn add_contact_view(&self, surface: impl Surface + 'static, clock: impl Clock + 'static) -> Result<AddContact> {
        Ok(AddContact::new(surface, clock)?)
    }

    /// Build the booking screen, offering the user's contacts when they have any.
    pub fn create_booking_view(
        &self,
        surface: impl Surface + 'static,
        clock: impl Clock + 'static,
    ) -> Result<CreateBooking> {
        let mut view = CreateBooking::new(surface, clock)?;
        if !self.user.contacts().is_empty() {
            view.set_contacts(self.user.contacts())?;
        }
        Ok(view)
    }

    // ── Handlers ─────────────────────────────────────────────────────

    /// Check credentials against the current user, then against registered
    /// users. Blank credentials simply fail.
    pub fn handle_login(&self, username: &str, password: &str) -> Result<bool> {
        if username.trim().is_empty() || password.trim().is_empty() {
            info!(username, "login failed: blank credentials");
            return Ok(false);
        }
        let mut ok = self.user.authenticate(username, password)?;
        if !ok {
            if let Some(record) = self.db.find_user(username)? {
                ok = verify_password(&record.password_hash, password)?;
            }
        }
        if ok {
            info!(username, "login successful");
        } else {
            info!(username, "login failed");
        }
        Ok(ok)
    }

    /// Create a contact from `[name, email]` and add it to the user.
    pub fn handle_add_contact(&mut self, details: &[String]) -> Result<&Contact> {
        let [name, email] = details else {
            return Err(FormError::InvalidLength {
                property: "details".to_owned(),
                expected: "2",
                actual: details.len(),
            }
            .into());
        };
        self.user.add_contact(Contact::new(name.as_str(), email.as_str())?);
        let contact = self
            .user
            .contacts()
            .last()
            .ok_or_else(|| FormError::EmptyCollection("contacts".to_owned()))?;
        Ok(contact)
    }

    /// Build a booking from `[contact, hour, minute, date]`.
    pub fn handle_create_booking(&self, details: &[Value]) -> Result<Booking> {
        let [contact, hour, minute, date] = details else {
            return Err(FormError::InvalidLength {
                property: "details".to_owned(),
                expected: "4",
                actual: details.len(),
            }
            .into());
        };
        let contact = enforce_string(contact, "contact")?;
        let hour = enforce_int(hour, "hour")?;
        let minute = enforce_int(minute, "minute")?;
        let date = enforce_date(date, "date")?;

        let mut booking = Booking::at(date.and_time(chrono::NaiveTime::MIN));
        booking.set_time(hour, minute)?;
        booking.set_contact(contact)?;
        debug!(%booking, "booking created");
        Ok(booking)
    }

    /// Persist `user` to the `users` table. Returns the row id.
    pub fn register_user(&self, user: &User) -> Result<i64> {
        Ok(self
            .db
            .insert_user(user.user_name(), user.password_hash(), user.email())?)
    }

    /// Put the user back to its initial state.
    pub fn reset_user(&mut self) -> Result<()> {
        Ok(self.user.reset()?)
    }

    /// Handle every pending event on the login screen.
    ///
    /// Returns the outcome of the last login attempt, or `None` if the submit
    /// button was not pressed.
    pub fn pump(&mut self, login: &mut Login) -> Result<Option<bool>> {
        let mut outcome = None;
        for event in login.form_mut().drain_events() {
            match event {
                FormEvent::Activated { name } if name == "btn_submit" => {
                    let (username, password) = login.submit()?;
                    outcome = Some(self.handle_login(&username, &password)?);
                }
                FormEvent::Activated { name } => debug!(name = %name, "unhandled activation"),
            }
        }
        Ok(outcome)
    }
}
