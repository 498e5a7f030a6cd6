//! Booking records: comedians, venues and shows.
//!
//! Records are plain structs with public fields. Constructors validate
//! their inputs; form widgets clamp to the same ranges, so a range error
//! can only come from code that bypasses the UI.

mod comedian;
mod show;
mod venue;

use std::fmt;

pub use comedian::Comedian;
pub use show::{Show, ShowId, ShowRequest};
pub use venue::Venue;

/// Inclusive numeric range with a widget step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits<T> {
    pub min: T,
    pub max: T,
    pub step: T,
}

impl<T: PartialOrd + Copy> Limits<T> {
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

pub const RATING: Limits<f64> = Limits {
    min: 1.0,
    max: 5.0,
    step: 0.1,
};

pub const COMEDIAN_FEE: Limits<u32> = Limits {
    min: 500,
    max: 50_000,
    step: 500,
};

pub const VENUE_CAPACITY: Limits<u32> = Limits {
    min: 50,
    max: 1_000,
    step: 10,
};

pub const RENTAL_FEE: Limits<u32> = Limits {
    min: 500,
    max: 10_000,
    step: 100,
};

/// Which list a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Comedian,
    Venue,
    Show,
}

/// A record of any kind, used by the generic store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Comedian(Comedian),
    Venue(Venue),
    Show(Show),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Comedian(_) => EntityKind::Comedian,
            Record::Venue(_) => EntityKind::Venue,
            Record::Show(_) => EntityKind::Show,
        }
    }
}

/// Why a record could not be built.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyName,
    EmptyTitle,
    NoVenue,
    UnknownVenue(String),
    NoComedians,
    RatingOutOfRange(f64),
    FeeOutOfRange(u32),
    CapacityOutOfRange(u32),
    RentalFeeOutOfRange(u32),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "name is required"),
            ValidationError::EmptyTitle => write!(f, "show title is required"),
            ValidationError::NoVenue => write!(f, "a venue must be selected"),
            ValidationError::UnknownVenue(name) => write!(f, "unknown venue '{name}'"),
            ValidationError::NoComedians => write!(f, "at least one comedian must be selected"),
            ValidationError::RatingOutOfRange(rating) => write!(
                f,
                "rating {rating} outside {}..={}",
                RATING.min, RATING.max
            ),
            ValidationError::FeeOutOfRange(fee) => write!(
                f,
                "fee {fee} outside {}..={}",
                COMEDIAN_FEE.min, COMEDIAN_FEE.max
            ),
            ValidationError::CapacityOutOfRange(capacity) => write!(
                f,
                "capacity {capacity} outside {}..={}",
                VENUE_CAPACITY.min, VENUE_CAPACITY.max
            ),
            ValidationError::RentalFeeOutOfRange(fee) => write!(
                f,
                "rental fee {fee} outside {}..={}",
                RENTAL_FEE.min, RENTAL_FEE.max
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trims a required text field, rejecting blank input.
pub(crate) fn required(value: &str, err: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_clamp() {
        assert_eq!(COMEDIAN_FEE.clamp(100), 500);
        assert_eq!(COMEDIAN_FEE.clamp(60_000), 50_000);
        assert_eq!(COMEDIAN_FEE.clamp(5_000), 5_000);
        assert!((RATING.clamp(7.5) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_limits_contains_bounds() {
        assert!(VENUE_CAPACITY.contains(50));
        assert!(VENUE_CAPACITY.contains(1_000));
        assert!(!VENUE_CAPACITY.contains(49));
        assert!(!RENTAL_FEE.contains(10_001));
    }

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  Ali  ", ValidationError::EmptyName).unwrap(), "Ali");
        assert_eq!(
            required("   ", ValidationError::EmptyName),
            Err(ValidationError::EmptyName)
        );
    }
}
