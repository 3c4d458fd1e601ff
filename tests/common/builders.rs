//! Test builders for `Record` values and catalogs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use cureat::Record;

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new("101", "Italian Feast Pizza")
///     .keyword("pizza")
///     .keyword("italian")
///     .rating(4.7)
///     .build();
/// ```
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            record: Record::new(id, name),
        }
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.record.keywords.push(keyword.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = Some(description.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.record.address = Some(address.into());
        self
    }

    pub fn rating(mut self, rating: f32) -> Self {
        self.record.rating = Some(rating);
        self
    }

    pub fn price_range(mut self, price_range: impl Into<String>) -> Self {
        self.record.price_range = Some(price_range.into());
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a record from a name and keyword list.
pub fn record(id: &str, name: &str, keywords: &[&str]) -> Record {
    Record::new(id, name).with_keywords(keywords.iter().copied())
}

/// The two-restaurant catalog used throughout the scenario tests.
pub fn pizza_and_burger() -> Vec<Record> {
    vec![
        record("101", "Italian Feast Pizza", &["pizza", "italian"]),
        record("102", "Classic Burger Joint", &["burger", "american"]),
    ]
}
