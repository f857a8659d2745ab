//! Bookings: a titled appointment with a contact at a date and time.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::clock::Clock;
use crate::error::{FormError, Result};
use crate::validate::enforce_text;

pub const DEFAULT_BOOKING_TITLE: &str = "New Booking";
pub const DEFAULT_BOOKING_CONTACT: &str = "New Contact";
pub const DEFAULT_DESCRIPTION: &str = "Enter a description.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    title: String,
    date: NaiveDate,
    time: NaiveTime,
    contact: String,
    description: String,
}

impl Booking {
    /// A default booking at `now`, truncated to the minute.
    pub fn at(now: NaiveDateTime) -> Self {
        let time = NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(NaiveTime::MIN);
        Self {
            title: DEFAULT_BOOKING_TITLE.to_owned(),
            date: now.date(),
            time,
            contact: DEFAULT_BOOKING_CONTACT.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
        }
    }

    /// A default booking at the clock's current time.
    pub fn now(clock: &dyn Clock) -> Self {
        Self::at(clock.now())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// `(hour, minute)`.
    pub fn hour_minute(&self) -> (u32, u32) {
        (self.time.hour(), self.time.minute())
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        enforce_text(&title, "title")?;
        self.title = title;
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Set the time of day. Hours run 0..=23, minutes 0..=59.
    pub fn set_time(&mut self, hour: i64, minute: i64) -> Result<()> {
        if !(0..=23).contains(&hour) {
            return Err(FormError::out_of_range("hour", format!("must be within 0..=23, got {hour}")));
        }
        if !(0..=59).contains(&minute) {
            return Err(FormError::out_of_range("minute", format!("must be within 0..=59, got {minute}")));
        }
        self.time = NaiveTime::from_hms_opt(hour as u32, minute as u32, 0)
            .ok_or_else(|| FormError::out_of_range("time", format!("{hour}:{minute}")))?;
        Ok(())
    }

    pub fn set_contact(&mut self, contact: impl Into<String>) -> Result<()> {
        let contact = contact.into();
        enforce_text(&contact, "contact")?;
        self.contact = contact;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<()> {
        let description = description.into();
        enforce_text(&description, "description")?;
        self.description = description;
        Ok(())
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking(title='{}', date={}, time={}, contact='{}', description='{}')",
            self.title,
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M"),
            self.contact,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(12, 30, 45).unwrap()
    }

    #[test]
    fn defaults_use_the_clock() {
        let booking = Booking::now(&FixedClock(noon()));
        assert_eq!(booking.title(), "New Booking");
        assert_eq!(booking.date(), noon().date());
        assert_eq!(booking.hour_minute(), (12, 30));
        assert_eq!(booking.contact(), "New Contact");
        assert_eq!(booking.description(), "Enter a description.");
    }

    #[test]
    fn display() {
        let mut booking = Booking::at(noon());
        booking.set_time(9, 5).unwrap();
        assert_eq!(
            booking.to_string(),
            "Booking(title='New Booking', date=2026-10-18, time=09:05, contact='New Contact', description='Enter a description.')"
        );
    }

    #[test]
    fn time_bounds() {
        let mut booking = Booking::at(noon());
        booking.set_time(23, 59).unwrap();
        booking.set_time(0, 0).unwrap();
        assert!(matches!(booking.set_time(24, 0), Err(FormError::ValueOutOfRange { ref property, .. }) if property == "hour"));
        assert!(matches!(booking.set_time(-1, 0), Err(FormError::ValueOutOfRange { .. })));
        assert!(matches!(booking.set_time(5, 60), Err(FormError::ValueOutOfRange { ref property, .. }) if property == "minute"));
        assert_eq!(booking.hour_minute(), (0, 0));
    }

    #[test]
    fn text_setters_reject_blank() {
        let mut booking = Booking::at(noon());
        booking.set_title("Dentist").unwrap();
        booking.set_contact("Dr. Molar").unwrap();
        booking.set_description("Check-up").unwrap();
        assert_eq!(booking.set_title(" ").unwrap_err(), FormError::EmptyString("title".into()));
        assert_eq!(booking.set_contact("").unwrap_err(), FormError::EmptyString("contact".into()));
        assert_eq!(booking.set_description("").unwrap_err(), FormError::EmptyString("description".into()));
        assert_eq!(booking.title(), "Dentist");
    }
}
