//! In-memory record store.
//!
//! Holds the three entity lists for the lifetime of the process. Nothing is
//! written to disk; a restart starts again from the seed data.

use chrono::{NaiveDateTime, TimeDelta};
use tracing::debug;

use crate::models::{Comedian, EntityKind, Record, Show, ShowId, Venue};

#[derive(Debug, Clone, Default)]
pub struct Store {
    pub comedians: Vec<Comedian>,
    pub venues: Vec<Venue>,
    pub shows: Vec<Show>,
    initialized: bool,
}

impl Store {
    /// Creates a store already populated with the seed data.
    pub fn seeded(now: NaiveDateTime) -> Self {
        let mut store = Self::default();
        store.initialize(now);
        store
    }

    /// Populates the seed records on first call only.
    ///
    /// Later calls leave existing data alone, even if a list has since been
    /// emptied by the user.
    pub fn initialize(&mut self, now: NaiveDateTime) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        if self.comedians.is_empty() {
            self.comedians = seed_comedians();
        }
        if self.venues.is_empty() {
            self.venues = seed_venues();
        }
        if self.shows.is_empty() {
            self.shows = seed_shows(now);
        }
        debug!(
            comedians = self.comedians.len(),
            venues = self.venues.len(),
            shows = self.shows.len(),
            "store initialized"
        );
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Comedian => self.comedians.len(),
            EntityKind::Venue => self.venues.len(),
            EntityKind::Show => self.shows.len(),
        }
    }

    pub fn is_empty(&self, kind: EntityKind) -> bool {
        self.len(kind) == 0
    }

    /// Adds a record to the end of its list.
    pub fn append(&mut self, record: Record) {
        match record {
            Record::Comedian(comedian) => self.comedians.push(comedian),
            Record::Venue(venue) => self.venues.push(venue),
            Record::Show(show) => self.shows.push(show),
        }
    }

    /// Replaces the record at `index` in the list of the record's kind.
    ///
    /// Returns `false` (and changes nothing) when the index is stale.
    pub fn update_at(&mut self, index: usize, record: Record) -> bool {
        let kind = record.kind();
        let updated = match record {
            Record::Comedian(comedian) => replace(&mut self.comedians, index, comedian),
            Record::Venue(venue) => replace(&mut self.venues, index, venue),
            Record::Show(show) => replace(&mut self.shows, index, show),
        };
        if !updated {
            debug!(?kind, index, "ignoring update of stale index");
        }
        updated
    }

    /// Removes and returns the record at `index`.
    ///
    /// Returns `None` when the index is stale. Callers holding an edit index
    /// into the same list must adjust it.
    pub fn remove_at(&mut self, kind: EntityKind, index: usize) -> Option<Record> {
        if index >= self.len(kind) {
            debug!(?kind, index, "ignoring removal of stale index");
            return None;
        }
        Some(match kind {
            EntityKind::Comedian => Record::Comedian(self.comedians.remove(index)),
            EntityKind::Venue => Record::Venue(self.venues.remove(index)),
            EntityKind::Show => Record::Show(self.shows.remove(index)),
        })
    }

    /// Comedians whose name contains `query`, ignoring case, with their
    /// storage index. A blank query matches everyone.
    pub fn search_comedians(&self, query: &str) -> Vec<(usize, &Comedian)> {
        let query = query.trim();
        self.comedians
            .iter()
            .enumerate()
            .filter(|(_, comedian)| query.is_empty() || comedian.matches(query))
            .collect()
    }

    /// First venue with this exact name.
    pub fn find_venue(&self, name: &str) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.name == name)
    }

    pub fn show(&self, id: ShowId) -> Option<&Show> {
        self.shows.iter().find(|show| show.id == id)
    }

    pub fn show_mut(&mut self, id: ShowId) -> Option<&mut Show> {
        self.shows.iter_mut().find(|show| show.id == id)
    }

    pub fn show_index(&self, id: ShowId) -> Option<usize> {
        self.shows.iter().position(|show| show.id == id)
    }

    /// Shows ordered by date, ties kept in storage order.
    pub fn shows_by_date(&self) -> Vec<&Show> {
        let mut shows: Vec<&Show> = self.shows.iter().collect();
        shows.sort_by_key(|show| show.date);
        shows
    }
}

fn replace<T>(items: &mut [T], index: usize, value: T) -> bool {
    match items.get_mut(index) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

fn comedian(name: &str, rating: f64, fee: u32, specialty: &str) -> Comedian {
    Comedian {
        name: name.to_string(),
        rating,
        fee,
        specialty: specialty.to_string(),
    }
}

fn venue(name: &str, capacity: u32, rental_fee: u32) -> Venue {
    Venue {
        name: name.to_string(),
        capacity,
        rental_fee,
    }
}

fn show(
    title: &str,
    date: NaiveDateTime,
    venue: &str,
    capacity: u32,
    tickets_sold: u32,
    comedians: &[&str],
) -> Show {
    Show {
        id: ShowId::new(),
        title: title.to_string(),
        date,
        venue: venue.to_string(),
        capacity,
        tickets_sold,
        comedians: comedians.iter().map(|name| (*name).to_string()).collect(),
    }
}

fn seed_comedians() -> Vec<Comedian> {
    vec![
        comedian("Dave Chappelle", 4.9, 15_000, "Social commentary"),
        comedian("Ali Wong", 4.7, 10_000, "Family life"),
        comedian("John Mulaney", 4.8, 12_000, "Observational"),
        comedian("Hannah Gadsby", 4.6, 8_000, "Storytelling"),
        comedian("Kevin Hart", 4.7, 20_000, "Self-deprecating"),
    ]
}

fn seed_venues() -> Vec<Venue> {
    vec![
        venue("Laugh Factory", 200, 2_000),
        venue("Comedy Store", 300, 3_000),
        venue("Improv", 250, 2_500),
        venue("Stand Up NY", 150, 1_500),
        venue("Comedy Cellar", 120, 1_200),
    ]
}

fn seed_shows(now: NaiveDateTime) -> Vec<Show> {
    vec![
        show(
            "Comedy Night",
            now + TimeDelta::days(7),
            "Laugh Factory",
            200,
            150,
            &["Dave Chappelle", "Ali Wong"],
        ),
        show(
            "Stand Up Special",
            now + TimeDelta::days(14),
            "Comedy Store",
            300,
            200,
            &["John Mulaney", "Kevin Hart"],
        ),
        show(
            "Comedy Jam",
            now + TimeDelta::days(21),
            "Improv",
            250,
            100,
            &["Hannah Gadsby", "Ali Wong"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_seeded_counts() {
        let store = Store::seeded(now());
        assert_eq!(store.len(EntityKind::Comedian), 5);
        assert_eq!(store.len(EntityKind::Venue), 5);
        assert_eq!(store.len(EntityKind::Show), 3);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut store = Store::seeded(now());
        store.comedians.clear();
        store.append(Record::Venue(venue("Test Hall", 100, 1_000)));

        store.initialize(now());

        assert!(store.is_empty(EntityKind::Comedian));
        assert_eq!(store.len(EntityKind::Venue), 6);
    }

    #[test]
    fn test_append_and_remove_change_length_by_one() {
        let mut store = Store::seeded(now());
        let before = store.comedians.clone();

        store.append(Record::Comedian(comedian("Maria Bamford", 4.5, 6_000, "Surreal")));
        assert_eq!(store.comedians.len(), before.len() + 1);
        assert_eq!(&store.comedians[..before.len()], &before[..]);

        let removed = store.remove_at(EntityKind::Comedian, 1);
        assert!(matches!(removed, Some(Record::Comedian(c)) if c.name == "Ali Wong"));
        assert_eq!(store.comedians.len(), before.len());
        assert_eq!(store.comedians[0], before[0]);
        assert_eq!(store.comedians[1], before[2]);
    }

    #[test]
    fn test_stale_index_is_noop() {
        let mut store = Store::seeded(now());
        let before = store.comedians.clone();

        assert!(!store.update_at(99, Record::Comedian(comedian("X", 4.0, 500, ""))));
        assert!(store.remove_at(EntityKind::Comedian, 99).is_none());
        assert_eq!(store.comedians, before);
    }

    #[test]
    fn test_update_at_replaces_in_place() {
        let mut store = Store::seeded(now());
        let replacement = comedian("Ali Wong", 5.0, 11_000, "Family life");

        assert!(store.update_at(1, Record::Comedian(replacement.clone())));
        assert_eq!(store.comedians[1], replacement);
        assert_eq!(store.comedians.len(), 5);
    }

    #[test]
    fn test_search_wong_matches_only_ali() {
        let store = Store::seeded(now());
        let hits = store.search_comedians("wong");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 1);
        assert_eq!(hits[0].1.name, "Ali Wong");
    }

    #[test]
    fn test_search_blank_returns_all() {
        let store = Store::seeded(now());
        assert_eq!(store.search_comedians("  ").len(), 5);
    }

    #[test]
    fn test_find_venue_returns_first_duplicate() {
        let mut store = Store::seeded(now());
        store.append(Record::Venue(venue("Improv", 900, 9_000)));
        assert_eq!(store.find_venue("Improv").map(|v| v.capacity), Some(250));
    }

    #[test]
    fn test_shows_by_date_does_not_reorder_storage() {
        let mut store = Store::seeded(now());
        let early = show("Early Bird", now(), "Improv", 250, 0, &["Ali Wong"]);
        store.append(Record::Show(early));

        let sorted: Vec<&str> = store
            .shows_by_date()
            .iter()
            .map(|show| show.title.as_str())
            .collect();
        assert_eq!(
            sorted,
            ["Early Bird", "Comedy Night", "Stand Up Special", "Comedy Jam"]
        );
        assert_eq!(store.shows[3].title, "Early Bird");
    }

    #[test]
    fn test_show_lookup_by_id() {
        let store = Store::seeded(now());
        let id = store.shows[2].id;
        assert_eq!(store.show_index(id), Some(2));
        assert_eq!(store.show(id).map(|s| s.title.as_str()), Some("Comedy Jam"));
        assert!(store.show(ShowId::new()).is_none());
    }
}
