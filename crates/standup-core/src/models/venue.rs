use serde::Serialize;

use super::{RENTAL_FEE, VENUE_CAPACITY, ValidationError, required};

/// A room that can host shows. Immutable once added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Venue {
    pub name: String,
    pub capacity: u32,
    /// Rental fee per show in whole dollars.
    pub rental_fee: u32,
}

impl Venue {
    /// Builds a venue from form values.
    ///
    /// # Errors
    /// Returns a `ValidationError` for a blank name or an out-of-range
    /// capacity or rental fee.
    pub fn new(name: &str, capacity: u32, rental_fee: u32) -> Result<Self, ValidationError> {
        let name = required(name, ValidationError::EmptyName)?;
        if !VENUE_CAPACITY.contains(capacity) {
            return Err(ValidationError::CapacityOutOfRange(capacity));
        }
        if !RENTAL_FEE.contains(rental_fee) {
            return Err(ValidationError::RentalFeeOutOfRange(rental_fee));
        }
        Ok(Self {
            name,
            capacity,
            rental_fee,
        })
    }

    /// Rental fee divided by capacity, in dollars.
    pub fn cost_per_seat(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        f64::from(self.rental_fee) / f64::from(self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_per_seat_exact() {
        let venue = Venue::new("Test Hall", 100, 1_000).unwrap();
        assert!((venue.cost_per_seat() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cost_per_seat_zero_capacity_guarded() {
        let venue = Venue {
            name: "Broken".to_string(),
            capacity: 0,
            rental_fee: 1_000,
        };
        assert!(venue.cost_per_seat().abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(Venue::new("", 100, 1_000), Err(ValidationError::EmptyName));
        assert_eq!(
            Venue::new("Hall", 20, 1_000),
            Err(ValidationError::CapacityOutOfRange(20))
        );
        assert_eq!(
            Venue::new("Hall", 100, 20_000),
            Err(ValidationError::RentalFeeOutOfRange(20_000))
        );
    }
}
