// --- File: crates/lexbook_booking/src/lib.rs ---
// Declare modules within this crate
pub mod confirm;
pub mod directory;
pub mod error;
pub mod factory;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod selection;
#[cfg(test)]
mod selection_proptest;
pub mod service;
#[cfg(test)]
mod service_test;
pub mod week;

pub use confirm::BookingConfirmer;
pub use directory::AttorneyDirectory;
pub use error::BookingError;
pub use factory::{load_directory, session_from_config};
pub use logic::{resolve, resolve_week, resolve_week_with_limit, DaySlots, WeekAvailability};
pub use models::{
    AvailabilityTemplate, Confirmation, ConsultationTerms, ConsultationType, Professional,
    ProfessionalId, TimeOfDay, Weekday,
};
pub use selection::{AvailabilityStatus, SelectionSnapshot, SelectionState};
pub use service::{BookingSession, SessionSettings};
pub use week::WeekWindow;
