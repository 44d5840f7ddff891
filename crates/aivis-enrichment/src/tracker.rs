//! Session-scoped collection of tracked competitors.
//!
//! The collection is append-only and lives for one session.
//! [`CompetitorTracker::add`] holds the tracker for the whole request, so
//! dropping its future is enough to cancel it.
//!
//! Callers that release the tracker while a request runs (for example one
//! shared behind a mutex) use tickets instead: [`CompetitorTracker::begin`]
//! issues a [`RequestTicket`], only the most recent ticket may
//! [`admit`](CompetitorTracker::admit) a result, and
//! [`CompetitorTracker::cancel`] invalidates every outstanding ticket. A
//! result that finishes after its caller moved on is dropped instead of
//! landing in the collection.

use aivis_core::CompetitorRecord;
use aivis_genai::TextGenerator;
use thiserror::Error;

use crate::competitor::CompetitorEnrichment;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddCompetitorError {
    #[error("competitor name must not be empty")]
    MissingName,

    #[error("competitor URL must not be empty")]
    MissingUrl,
}

/// Identifies one in-flight add request.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a ticket is needed to admit the request's result"]
pub struct RequestTicket {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct CompetitorTracker {
    records: Vec<CompetitorRecord>,
    generation: u64,
}

/// Check the add-competitor preconditions.
///
/// # Errors
///
/// Returns [`AddCompetitorError::MissingName`] or
/// [`AddCompetitorError::MissingUrl`] if either is empty after trimming.
pub fn validate_input(name: &str, url: &str) -> Result<(), AddCompetitorError> {
    if name.trim().is_empty() {
        return Err(AddCompetitorError::MissingName);
    }
    if url.trim().is_empty() {
        return Err(AddCompetitorError::MissingUrl);
    }
    Ok(())
}

impl CompetitorTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the session with an existing roster, in the given order.
    #[must_use]
    pub fn with_roster(records: Vec<CompetitorRecord>) -> Self {
        Self {
            records,
            generation: 0,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[CompetitorRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<CompetitorRecord> {
        self.records
    }

    /// Register a new request. Any earlier ticket stops being current.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket {
            generation: self.generation,
        }
    }

    /// Invalidate every outstanding ticket.
    pub fn cancel(&mut self) {
        self.generation += 1;
        tracing::debug!(generation = self.generation, "pending add requests cancelled");
    }

    /// Append `record` if `ticket` is still current.
    ///
    /// Returns `false`, leaving the collection untouched, for a stale ticket.
    pub fn admit(&mut self, ticket: RequestTicket, record: CompetitorRecord) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                competitor = %record.name,
                ticket = ticket.generation,
                current = self.generation,
                "discarding result for stale request"
            );
            return false;
        }
        // Retire the ticket's generation so nothing else can reuse it.
        self.generation += 1;
        self.append(record);
        true
    }

    /// Validate input, enrich via `enrichment`, and append the result.
    ///
    /// The record keeps `name` exactly as passed. Tickets issued before the
    /// call go stale. Dropping the returned future before it completes
    /// cancels the request and leaves the collection unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AddCompetitorError::MissingName`] or
    /// [`AddCompetitorError::MissingUrl`] before any request is made.
    /// Enrichment itself never fails.
    pub async fn add<G: TextGenerator>(
        &mut self,
        enrichment: &CompetitorEnrichment<G>,
        name: &str,
        url: &str,
    ) -> Result<&CompetitorRecord, AddCompetitorError> {
        validate_input(name, url)?;

        // `&mut self` is held until the result lands, so only tickets from
        // earlier callers need retiring.
        self.generation += 1;
        let record = enrichment.enrich(name, url).await.into_record(name);

        Ok(self.append(record))
    }

    fn append(&mut self, record: CompetitorRecord) -> &CompetitorRecord {
        tracing::info!(
            competitor = %record.name,
            provenance = %record.provenance,
            "competitor added"
        );
        self.records.push(record);
        let last = self.records.len() - 1;
        &self.records[last]
    }
}
