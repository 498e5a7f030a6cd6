use serde::Serialize;

use super::{COMEDIAN_FEE, RATING, ValidationError, required};

/// A performer on the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comedian {
    pub name: String,
    /// Audience rating, one decimal place.
    pub rating: f64,
    /// Booking fee in whole dollars.
    pub fee: u32,
    pub specialty: String,
}

impl Comedian {
    /// Builds a comedian from form values.
    ///
    /// The name is trimmed and must not be blank. The rating is rounded to
    /// one decimal place before the range check.
    ///
    /// # Errors
    /// Returns a `ValidationError` for a blank name or an out-of-range
    /// rating or fee.
    pub fn new(
        name: &str,
        rating: f64,
        fee: u32,
        specialty: &str,
    ) -> Result<Self, ValidationError> {
        let name = required(name, ValidationError::EmptyName)?;
        let rating = (rating * 10.0).round() / 10.0;
        if !RATING.contains(rating) {
            return Err(ValidationError::RatingOutOfRange(rating));
        }
        if !COMEDIAN_FEE.contains(fee) {
            return Err(ValidationError::FeeOutOfRange(fee));
        }
        Ok(Self {
            name,
            rating,
            fee,
            specialty: specialty.trim().to_string(),
        })
    }

    /// Whole stars for the rating (4.7 shows four).
    pub fn stars(&self) -> usize {
        self.rating.floor().max(0.0) as usize
    }

    /// Case-insensitive substring match on the name.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_rounds() {
        let comedian = Comedian::new("  Maria Bamford ", 4.349_999, 7_500, " Surreal ").unwrap();
        assert_eq!(comedian.name, "Maria Bamford");
        assert!((comedian.rating - 4.3).abs() < f64::EPSILON);
        assert_eq!(comedian.specialty, "Surreal");
    }

    #[test]
    fn test_new_rejects_blank_name() {
        assert_eq!(
            Comedian::new("   ", 4.0, 5_000, ""),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(matches!(
            Comedian::new("X", 5.5, 5_000, ""),
            Err(ValidationError::RatingOutOfRange(_))
        ));
        assert_eq!(
            Comedian::new("X", 4.0, 400, ""),
            Err(ValidationError::FeeOutOfRange(400))
        );
    }

    #[test]
    fn test_stars_floor_rating() {
        let comedian = Comedian::new("Ali Wong", 4.7, 10_000, "Family life").unwrap();
        assert_eq!(comedian.stars(), 4);
    }

    #[test]
    fn test_matches_case_insensitive() {
        let comedian = Comedian::new("Ali Wong", 4.7, 10_000, "Family life").unwrap();
        assert!(comedian.matches("WONG"));
        assert!(comedian.matches("li w"));
        assert!(!comedian.matches("hart"));
    }
}
