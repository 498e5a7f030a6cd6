use std::fmt;

use chrono::NaiveDateTime;
use uuid::Uuid;

use super::{ValidationError, Venue, required};

/// Stable identity of a scheduled show.
///
/// Views that reorder shows (the date-sorted Shows page) resolve actions
/// through this id rather than through a list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShowId(Uuid);

impl ShowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Raw schedule-form values, validated by `Store` at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowRequest {
    pub title: String,
    pub date: NaiveDateTime,
    pub venue: Option<String>,
    pub comedians: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub id: ShowId,
    pub title: String,
    pub date: NaiveDateTime,
    /// Venue name. Not a reference: the venue list may hold duplicates.
    pub venue: String,
    /// Venue capacity copied at scheduling time.
    pub capacity: u32,
    pub tickets_sold: u32,
    /// Comedian names in selection order.
    pub comedians: Vec<String>,
}

impl Show {
    /// Schedules a show at `venue`, snapshotting its capacity.
    ///
    /// `venue` is the lookup result for `request.venue`; `None` means the
    /// selection was empty or named a venue that no longer exists.
    ///
    /// # Errors
    /// Returns a `ValidationError` for a blank title, a missing venue, or an
    /// empty comedian selection.
    pub fn schedule(request: &ShowRequest, venue: Option<&Venue>) -> Result<Self, ValidationError> {
        let title = required(&request.title, ValidationError::EmptyTitle)?;
        let venue = match (venue, &request.venue) {
            (Some(venue), _) => venue,
            (None, Some(name)) if !name.trim().is_empty() => {
                return Err(ValidationError::UnknownVenue(name.clone()));
            }
            (None, _) => return Err(ValidationError::NoVenue),
        };
        if request.comedians.is_empty() {
            return Err(ValidationError::NoComedians);
        }
        Ok(Self {
            id: ShowId::new(),
            title,
            date: request.date,
            venue: venue.name.clone(),
            capacity: venue.capacity,
            tickets_sold: 0,
            comedians: request.comedians.clone(),
        })
    }

    pub fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.tickets_sold)
    }

    /// Tickets sold as a percentage of capacity (0 for a zero capacity).
    pub fn occupancy_rate(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        f64::from(self.tickets_sold) / f64::from(self.capacity) * 100.0
    }

    /// Fraction of capacity sold, clamped to `0.0..=1.0` for gauges.
    pub fn progress(&self) -> f64 {
        (self.occupancy_rate() / 100.0).clamp(0.0, 1.0)
    }

    /// Sells up to `requested` tickets without exceeding capacity.
    ///
    /// Returns the number actually sold.
    pub fn sell(&mut self, requested: u32) -> u32 {
        let sold = requested.min(self.remaining());
        self.tickets_sold += sold;
        sold
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    fn request(venue: Option<&str>, comedians: &[&str]) -> ShowRequest {
        ShowRequest {
            title: "Late Set".to_string(),
            date: date(),
            venue: venue.map(str::to_string),
            comedians: comedians.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    fn venue(capacity: u32) -> Venue {
        Venue::new("Comedy Store", capacity, 3_000).unwrap()
    }

    #[test]
    fn test_schedule_snapshots_capacity() {
        let hall = venue(300);
        let show = Show::schedule(&request(Some("Comedy Store"), &["Ali Wong"]), Some(&hall)).unwrap();
        assert_eq!(show.capacity, 300);
        assert_eq!(show.tickets_sold, 0);
        assert_eq!(show.venue, "Comedy Store");
        assert!(show.occupancy_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn test_schedule_requires_comedians_and_venue() {
        let hall = venue(300);
        assert_eq!(
            Show::schedule(&request(Some("Comedy Store"), &[]), Some(&hall)),
            Err(ValidationError::NoComedians)
        );
        assert_eq!(
            Show::schedule(&request(None, &["Ali Wong"]), None),
            Err(ValidationError::NoVenue)
        );
        assert_eq!(
            Show::schedule(&request(Some("Gone"), &["Ali Wong"]), None),
            Err(ValidationError::UnknownVenue("Gone".to_string()))
        );
    }

    #[test]
    fn test_schedule_requires_title() {
        let hall = venue(300);
        let mut req = request(Some("Comedy Store"), &["Ali Wong"]);
        req.title = "  ".to_string();
        assert_eq!(
            Show::schedule(&req, Some(&hall)),
            Err(ValidationError::EmptyTitle)
        );
    }

    #[test]
    fn test_occupancy_full_and_empty() {
        let hall = venue(200);
        let mut show = Show::schedule(&request(Some("Comedy Store"), &["A"]), Some(&hall)).unwrap();
        assert!(show.occupancy_rate().abs() < f64::EPSILON);
        show.tickets_sold = 200;
        assert!((show.occupancy_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sell_clamps_to_remaining() {
        let hall = venue(200);
        let mut show = Show::schedule(&request(Some("Comedy Store"), &["A"]), Some(&hall)).unwrap();
        show.tickets_sold = 195;
        assert_eq!(show.sell(20), 5);
        assert_eq!(show.tickets_sold, 200);
        assert_eq!(show.sell(5), 0);
        assert_eq!(show.tickets_sold, 200);
    }

    #[test]
    fn test_sell_never_exceeds_capacity_for_any_draw() {
        let hall = venue(50);
        for start in 0..=50 {
            for draw in 5..=20 {
                let mut show =
                    Show::schedule(&request(Some("Comedy Store"), &["A"]), Some(&hall)).unwrap();
                show.tickets_sold = start;
                show.sell(draw);
                assert!(show.tickets_sold <= show.capacity);
            }
        }
    }
}
