//! Static catalogs used across harnesses.

use cureat::Record;

/// A catalog in the current schema.
pub const CATALOG_JSON: &str = r#"[
  {
    "id": "101",
    "name": "Italian Feast Pizza",
    "keywords": ["pizza", "italian", "family"],
    "rating": 4.7,
    "price_range": "$$",
    "pros": ["generous toppings"],
    "cons": ["long wait"]
  },
  {
    "id": "102",
    "name": "Classic Burger Joint",
    "keywords": ["burger", "american"],
    "rating": 4.4
  },
  {
    "id": "103",
    "name": "Sushi Sashimi Set",
    "keywords": ["sushi", "japanese", "seafood"],
    "rating": 4.9
  },
  {
    "id": "104",
    "name": "Spicy Thai Noodles",
    "keywords": ["thai", "noodles", "spicy"],
    "rating": 4.5
  },
  {
    "id": "105",
    "name": "Cozy Coffee Cafe",
    "keywords": ["coffee", "dessert", "family"],
    "rating": 4.8
  }
]"#;

/// The same kind of data as published by an older revision: numeric ids,
/// `tags` instead of `keywords`, a free-text `description` and `reviews`.
pub const LEGACY_CATALOG_JSON: &str = r#"[
  {
    "id": 101,
    "name": "Italian Feast Pizza",
    "rating": 4.7,
    "reviews": "320+",
    "image": "https://placehold.co/100x100?text=Pizza",
    "description": "Freshly baked pizza with a variety of Italian meats and vegetables.",
    "tags": ["pizza", "italian"]
  },
  {
    "id": 102,
    "name": "Classic Burger Joint",
    "rating": 4.4,
    "reviews": "550+",
    "description": "A classic American burger with all the fixings, served with fries.",
    "tags": ["burger"]
  }
]"#;

pub fn catalog() -> Vec<Record> {
    serde_json::from_str(CATALOG_JSON).expect("CATALOG_JSON must parse")
}

pub fn legacy_catalog() -> Vec<Record> {
    serde_json::from_str(LEGACY_CATALOG_JSON).expect("LEGACY_CATALOG_JSON must parse")
}

/// Write `contents` to a fresh temp file and return the handle (kept alive
/// by the caller for the duration of the test).
pub fn catalog_file(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().expect("create temp catalog");
    file.write_all(contents.as_bytes()).expect("write temp catalog");
    file
}
