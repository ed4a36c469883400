//! State of one weather view: the editable query, the last good snapshot and
//! the loading flag.
//!
//! Failures are logged and swallowed: a failed search leaves every field as it
//! was, so the view keeps showing the previous snapshot (or nothing at all).
//! The loading flag starts `true` and is cleared by the first successful
//! search only; it is never raised again.

use chrono::NaiveDate;
use tracing::{debug, error, info};

use crate::{
    display::WeatherCard,
    error::{ErrorKind, FetchError},
    model::WeatherSnapshot,
    provider::WeatherProvider,
};

/// A search that has been started but not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub location: String,
}

/// What a finished search did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Applied { generation: u64 },
    Failed { generation: u64, kind: ErrorKind },
}

impl SearchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SearchOutcome::Applied { .. })
    }
}

#[derive(Debug, Clone)]
pub struct WeatherState {
    query: String,
    snapshot: Option<WeatherSnapshot>,
    loading: bool,
    generation: u64,
}

impl WeatherState {
    pub fn new(initial_query: impl Into<String>) -> Self {
        Self {
            query: initial_query.into(),
            snapshot: None,
            loading: true,
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query verbatim. No trimming or validation.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Capture the current query for a new request.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.generation += 1;
        debug!(generation = self.generation, location = %self.query, "search started");
        SearchTicket { generation: self.generation, location: self.query.clone() }
    }

    /// Apply the result of a request. Whichever result is applied last wins,
    /// even if it belongs to an older ticket.
    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<WeatherSnapshot, FetchError>,
    ) -> SearchOutcome {
        match result {
            Ok(snapshot) => {
                info!(
                    generation = ticket.generation,
                    place = %snapshot.place,
                    country = %snapshot.country,
                    "weather snapshot updated"
                );
                if ticket.generation < self.generation {
                    debug!(
                        generation = ticket.generation,
                        latest = self.generation,
                        "applying response of an older search"
                    );
                }
                self.snapshot = Some(snapshot);
                self.query.clear();
                self.loading = false;
                SearchOutcome::Applied { generation: ticket.generation }
            }
            Err(err) => {
                error!(
                    generation = ticket.generation,
                    location = %ticket.location,
                    error = %err,
                    "Error fetching data"
                );
                SearchOutcome::Failed { generation: ticket.generation, kind: err.kind() }
            }
        }
    }

    /// One request for the current query, applied on completion.
    pub async fn search(&mut self, provider: &dyn WeatherProvider) -> SearchOutcome {
        let ticket = self.begin_search();
        let result = provider.current(&ticket.location).await;
        self.finish_search(ticket, result)
    }

    /// The card to show, or `None` while loading or before any success.
    pub fn card(&self, date: NaiveDate) -> Option<WeatherCard> {
        if self.loading {
            return None;
        }
        self.snapshot.as_ref().map(|snap| WeatherCard::new(snap, date))
    }
}
