//! Domain entities: users, contacts, bookings.

pub mod booking;
pub mod contact;
pub mod user;

pub use booking::Booking;
pub use contact::Contact;
pub use user::User;
