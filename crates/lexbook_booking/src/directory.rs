//! Read-only attorney directory.
//!
//! The directory is a snapshot for the whole session: built once, shared
//! behind an `Arc` and never mutated.

use lexbook_common::{validation_error, Context, LexbookError};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::BookingError;
use crate::models::{AvailabilityTemplate, Professional, ProfessionalId, TimeOfDay, Weekday};

#[derive(Debug, Clone, Default)]
pub struct AttorneyDirectory {
    professionals: Vec<Professional>,
}

impl AttorneyDirectory {
    /// Builds a directory, keeping the given order.
    ///
    /// Rejects duplicate ids and ratings outside `[0, 5]`. Day lists that are
    /// not strictly ascending are accepted as-is and only logged.
    pub fn new(professionals: Vec<Professional>) -> Result<Self, LexbookError> {
        let mut seen = HashSet::with_capacity(professionals.len());
        for professional in &professionals {
            if !seen.insert(professional.id) {
                return Err(validation_error(format!(
                    "duplicate professional id {}",
                    professional.id
                )));
            }
            if !(0.0..=5.0).contains(&professional.rating) {
                return Err(validation_error(format!(
                    "rating {} of professional {} is outside 0..=5",
                    professional.rating, professional.id
                )));
            }
            let unordered = professional.availability.unordered_days();
            if !unordered.is_empty() {
                warn!(
                    "Professional {} ({}) has non-ascending slots on {:?}; keeping source order",
                    professional.id, professional.name, unordered
                );
            }
        }
        debug!("Attorney directory built with {} entries", professionals.len());
        Ok(Self { professionals })
    }

    /// Parses a JSON array of professionals.
    pub fn from_json_str(json: &str) -> Result<Self, LexbookError> {
        let professionals: Vec<Professional> = serde_json::from_str(json)?;
        Self::new(professionals)
    }

    /// Loads a JSON roster file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LexbookError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read attorney roster {}", display))?;
        let directory = Self::from_json_str(&json)?;
        info!(
            "Loaded {} professionals from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    /// The roster shipped with the consulting page.
    pub fn builtin() -> Self {
        let professionals = vec![
            Professional {
                id: ProfessionalId(1),
                name: "Jennifer Blackwell".to_string(),
                specialization: "Corporate Law".to_string(),
                experience: "15 years".to_string(),
                rating: 4.9,
                review_count: 124,
                languages: vec!["English".to_string(), "Spanish".to_string()],
                location: "New York, NY".to_string(),
                avatar: None,
                availability: weekly(&[
                    (Weekday::Monday, vec![9, 10, 14, 15, 16]),
                    (Weekday::Tuesday, vec![9, 10, 11, 14, 15]),
                    (Weekday::Wednesday, vec![10, 11, 14, 15, 16]),
                    (Weekday::Thursday, vec![9, 10, 11, 15, 16]),
                    (Weekday::Friday, vec![9, 10, 14, 15]),
                    (Weekday::Saturday, vec![10, 11]),
                    (Weekday::Sunday, vec![]),
                ]),
            },
            Professional {
                id: ProfessionalId(2),
                name: "Michael Chen".to_string(),
                specialization: "Intellectual Property".to_string(),
                experience: "12 years".to_string(),
                rating: 4.8,
                review_count: 98,
                languages: vec!["English".to_string(), "Mandarin".to_string()],
                location: "San Francisco, CA".to_string(),
                avatar: None,
                availability: weekly(&[
                    (Weekday::Monday, vec![9, 11, 13, 15, 17]),
                    (Weekday::Tuesday, vec![10, 11, 14, 16]),
                    (Weekday::Wednesday, vec![9, 11, 13, 15]),
                    (Weekday::Thursday, vec![10, 12, 14, 16]),
                    (Weekday::Friday, vec![9, 11, 15, 17]),
                    (Weekday::Saturday, vec![11, 13]),
                    (Weekday::Sunday, vec![]),
                ]),
            },
            Professional {
                id: ProfessionalId(3),
                name: "Sarah Johnson".to_string(),
                specialization: "Family Law".to_string(),
                experience: "18 years".to_string(),
                rating: 4.9,
                review_count: 156,
                languages: vec!["English".to_string(), "French".to_string()],
                location: "Chicago, IL".to_string(),
                avatar: None,
                availability: weekly(&[
                    (Weekday::Monday, vec![8, 10, 12, 14, 16]),
                    (Weekday::Tuesday, vec![8, 10, 14, 16]),
                    (Weekday::Wednesday, vec![10, 12, 14, 16]),
                    (Weekday::Thursday, vec![8, 10, 12, 16]),
                    (Weekday::Friday, vec![10, 12, 14]),
                    (Weekday::Saturday, vec![10]),
                    (Weekday::Sunday, vec![]),
                ]),
            },
        ];
        Self { professionals }
    }

    /// All professionals in insertion order.
    pub fn list(&self) -> &[Professional] {
        &self.professionals
    }

    pub fn get(&self, id: ProfessionalId) -> Result<&Professional, BookingError> {
        self.professionals
            .iter()
            .find(|p| p.id == id)
            .ok_or(BookingError::NotFound(id))
    }

    /// Index of `id` in `list()`.
    pub fn position(&self, id: ProfessionalId) -> Option<usize> {
        self.professionals.iter().position(|p| p.id == id)
    }

    pub fn first(&self) -> Option<&Professional> {
        self.professionals.first()
    }

    pub fn contains(&self, id: ProfessionalId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.professionals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.professionals.is_empty()
    }
}

// Full-hour slots per day.
fn weekly(days: &[(Weekday, Vec<u32>)]) -> AvailabilityTemplate {
    days.iter()
        .map(|(day, hours)| {
            let slots: Vec<TimeOfDay> = hours.iter().filter_map(|h| TimeOfDay::new(*h, 0)).collect();
            (*day, slots)
        })
        .collect()
}
