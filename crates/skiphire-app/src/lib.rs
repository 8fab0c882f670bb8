//! Application service layer for the booking wizard

pub mod config;
pub mod session;

pub use config::Config;
pub use session::BookingSession;
