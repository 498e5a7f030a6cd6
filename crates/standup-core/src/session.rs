//! Session state and its transition function.
//!
//! `Session::dispatch` is the only way the UI changes records or the
//! active page. It never draws random numbers or touches the terminal:
//! callers resolve randomness first (see `random`) and pass the result in.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::models::{Comedian, EntityKind, Record, Show, ShowId, ShowRequest, ValidationError, Venue};
use crate::navigator::{Navigator, Page};
use crate::store::Store;

/// A user intent, already reduced to plain values.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Page),
    AddComedian(Comedian),
    BeginEditComedian { index: usize },
    SaveComedian { index: usize, comedian: Comedian },
    CancelEdit,
    RemoveComedian { index: usize },
    AddVenue(Venue),
    ScheduleShow(ShowRequest),
    SellTickets { show: ShowId, requested: u32 },
    CancelShow { show: ShowId },
}

/// Result of a dispatched action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// State changed; carries a confirmation for the user.
    Changed(String),
    /// Submission ignored because a required value was missing or invalid.
    Rejected(ValidationError),
    /// The index or id no longer refers to a record.
    Stale,
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed(_))
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub store: Store,
    pub navigator: Navigator,
    /// Storage index of the comedian being edited, if any.
    pub editing_comedian: Option<usize>,
}

impl Session {
    /// Starts a session on `start` with freshly seeded records.
    pub fn new(now: NaiveDateTime, start: Page) -> Self {
        Self {
            store: Store::seeded(now),
            navigator: Navigator::new(start),
            editing_comedian: None,
        }
    }

    pub fn page(&self) -> Page {
        self.navigator.current()
    }

    /// The comedian currently loaded in the edit form.
    pub fn edited_comedian(&self) -> Option<(usize, &Comedian)> {
        let index = self.editing_comedian?;
        self.store.comedians.get(index).map(|c| (index, c))
    }

    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = self.apply(action);
        match &outcome {
            Outcome::Changed(message) => info!(%message, "action applied"),
            Outcome::Rejected(reason) => debug!(%reason, "submission ignored"),
            Outcome::Stale => debug!("stale action ignored"),
        }
        outcome
    }

    fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::Navigate(page) => {
                self.navigator.go(page);
                Outcome::Changed(format!("Opened {page}"))
            }
            Action::AddComedian(comedian) => {
                let message = format!("Added {} to the roster!", comedian.name);
                self.store.append(Record::Comedian(comedian));
                Outcome::Changed(message)
            }
            Action::BeginEditComedian { index } => {
                if index >= self.store.comedians.len() {
                    return Outcome::Stale;
                }
                self.editing_comedian = Some(index);
                Outcome::Changed(format!("Editing {}", self.store.comedians[index].name))
            }
            Action::SaveComedian { index, comedian } => {
                self.editing_comedian = None;
                let message = format!("Updated {}'s information!", comedian.name);
                if self.store.update_at(index, Record::Comedian(comedian)) {
                    Outcome::Changed(message)
                } else {
                    Outcome::Stale
                }
            }
            Action::CancelEdit => {
                self.editing_comedian = None;
                Outcome::Changed("Edit cancelled".to_string())
            }
            Action::RemoveComedian { index } => {
                let Some(Record::Comedian(removed)) =
                    self.store.remove_at(EntityKind::Comedian, index)
                else {
                    return Outcome::Stale;
                };
                self.editing_comedian = match self.editing_comedian {
                    Some(editing) if editing == index => None,
                    Some(editing) if editing > index => Some(editing - 1),
                    other => other,
                };
                Outcome::Changed(format!("Removed {} from the roster!", removed.name))
            }
            Action::AddVenue(venue) => {
                let message = format!("Added {} to venues!", venue.name);
                self.store.append(Record::Venue(venue));
                Outcome::Changed(message)
            }
            Action::ScheduleShow(request) => {
                let venue = request
                    .venue
                    .as_deref()
                    .and_then(|name| self.store.find_venue(name));
                match Show::schedule(&request, venue) {
                    Ok(show) => {
                        let message = format!("Scheduled '{}' at {}!", show.title, show.venue);
                        self.store.append(Record::Show(show));
                        Outcome::Changed(message)
                    }
                    Err(err) => Outcome::Rejected(err),
                }
            }
            Action::SellTickets { show, requested } => match self.store.show_mut(show) {
                Some(show) => {
                    let sold = show.sell(requested);
                    Outcome::Changed(format!("Sold {sold} more tickets!"))
                }
                None => Outcome::Stale,
            },
            Action::CancelShow { show } => {
                let Some(index) = self.store.show_index(show) else {
                    return Outcome::Stale;
                };
                match self.store.remove_at(EntityKind::Show, index) {
                    Some(Record::Show(show)) => Outcome::Changed(format!("Cancelled '{}'", show.title)),
                    _ => Outcome::Stale,
                }
            }
        }
    }
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

    fn session() -> Session {
        Session::new(now(), Page::Dashboard)
    }

    fn request(title: &str, venue: Option<&str>, comedians: &[&str]) -> ShowRequest {
        ShowRequest {
            title: title.to_string(),
            date: now(),
            venue: venue.map(str::to_string),
            comedians: comedians.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    #[test]
    fn test_navigate() {
        let mut s = session();
        assert!(s.dispatch(Action::Navigate(Page::Venues)).is_changed());
        assert_eq!(s.page(), Page::Venues);
    }

    #[test]
    fn test_add_comedian_appends() {
        let mut s = session();
        let comedian = Comedian::new("Maria Bamford", 4.5, 6_000, "Surreal").unwrap();
        let outcome = s.dispatch(Action::AddComedian(comedian));
        assert_eq!(
            outcome,
            Outcome::Changed("Added Maria Bamford to the roster!".to_string())
        );
        assert_eq!(s.store.comedians.len(), 6);
        assert_eq!(s.store.comedians[5].name, "Maria Bamford");
    }

    #[test]
    fn test_edit_then_save_replaces_and_clears() {
        let mut s = session();
        s.dispatch(Action::BeginEditComedian { index: 1 });
        assert_eq!(s.edited_comedian().map(|(i, c)| (i, c.name.as_str())), Some((1, "Ali Wong")));

        let edited = Comedian::new("Ali Wong", 4.9, 12_000, "Family life").unwrap();
        s.dispatch(Action::SaveComedian {
            index: 1,
            comedian: edited.clone(),
        });

        assert_eq!(s.store.comedians[1], edited);
        assert_eq!(s.editing_comedian, None);
    }

    #[test]
    fn test_cancel_edit_leaves_record() {
        let mut s = session();
        let before = s.store.comedians.clone();
        s.dispatch(Action::BeginEditComedian { index: 0 });
        s.dispatch(Action::CancelEdit);
        assert_eq!(s.editing_comedian, None);
        assert_eq!(s.store.comedians, before);
    }

    #[test]
    fn test_begin_edit_stale_index() {
        let mut s = session();
        assert_eq!(s.dispatch(Action::BeginEditComedian { index: 9 }), Outcome::Stale);
        assert_eq!(s.editing_comedian, None);
    }

    #[test]
    fn test_remove_clears_or_shifts_edit_index() {
        let mut s = session();
        s.dispatch(Action::BeginEditComedian { index: 3 });
        s.dispatch(Action::RemoveComedian { index: 1 });
        assert_eq!(s.editing_comedian, Some(2));
        assert_eq!(s.edited_comedian().map(|(_, c)| c.name.as_str()), Some("Hannah Gadsby"));

        s.dispatch(Action::RemoveComedian { index: 2 });
        assert_eq!(s.editing_comedian, None);
        assert_eq!(s.store.comedians.len(), 3);
    }

    #[test]
    fn test_remove_stale_comedian() {
        let mut s = session();
        assert_eq!(s.dispatch(Action::RemoveComedian { index: 5 }), Outcome::Stale);
        assert_eq!(s.store.comedians.len(), 5);
    }

    #[test]
    fn test_schedule_show_snapshots_venue_capacity() {
        let mut s = session();
        let outcome = s.dispatch(Action::ScheduleShow(request(
            "Late Set",
            Some("Comedy Store"),
            &["Kevin Hart"],
        )));
        assert!(outcome.is_changed());
        let show = s.store.shows.last().unwrap();
        assert_eq!(show.capacity, 300);
        assert_eq!(show.tickets_sold, 0);
    }

    #[test]
    fn test_schedule_show_without_comedians_ignored() {
        let mut s = session();
        let outcome = s.dispatch(Action::ScheduleShow(request("Late Set", Some("Improv"), &[])));
        assert_eq!(outcome, Outcome::Rejected(ValidationError::NoComedians));
        assert_eq!(s.store.shows.len(), 3);
    }

    #[test]
    fn test_schedule_show_without_title_or_venue_ignored() {
        let mut s = session();
        assert_eq!(
            s.dispatch(Action::ScheduleShow(request("", Some("Improv"), &["Ali Wong"]))),
            Outcome::Rejected(ValidationError::EmptyTitle)
        );
        assert_eq!(
            s.dispatch(Action::ScheduleShow(request("Late Set", None, &["Ali Wong"]))),
            Outcome::Rejected(ValidationError::NoVenue)
        );
        assert_eq!(s.store.shows.len(), 3);
    }

    #[test]
    fn test_sell_tickets_clamps() {
        let mut s = session();
        let id = s.store.shows[0].id;
        s.store.shows[0].tickets_sold = 190;
        let outcome = s.dispatch(Action::SellTickets { show: id, requested: 20 });
        assert_eq!(outcome, Outcome::Changed("Sold 10 more tickets!".to_string()));
        assert_eq!(s.store.shows[0].tickets_sold, 200);
    }

    #[test]
    fn test_cancel_show_by_identity_not_position() {
        let mut s = session();
        // An earlier show sorts first but is stored last.
        s.dispatch(Action::ScheduleShow(ShowRequest {
            date: now(),
            ..request("Early Bird", Some("Improv"), &["Ali Wong"])
        }));
        let sorted_first = s.store.shows_by_date()[0].id;
        assert_eq!(s.store.show(sorted_first).unwrap().title, "Early Bird");

        s.dispatch(Action::CancelShow { show: sorted_first });

        let titles: Vec<&str> = s.store.shows.iter().map(|show| show.title.as_str()).collect();
        assert_eq!(titles, ["Comedy Night", "Stand Up Special", "Comedy Jam"]);
    }

    #[test]
    fn test_cancel_unknown_show_is_stale() {
        let mut s = session();
        assert_eq!(
            s.dispatch(Action::CancelShow { show: ShowId::new() }),
            Outcome::Stale
        );
        assert_eq!(s.store.shows.len(), 3);
    }
}
