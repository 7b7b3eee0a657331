//! The table of translation keys injected into every locale file.
//!
//! On disk (in `.easerc.json`) the table is a JSON object of objects of
//! strings: `{ "navbar": { "cabs": "Cabs" } }`. In memory it is kept as
//! ordered vectors so new sections and keys are appended in the order the
//! table lists them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One section of the key table and the default values of its keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySection {
    pub name: String,
    pub keys: Vec<(String, String)>,
}

impl KeySection {
    pub fn new(name: impl Into<String>, keys: &[(&str, &str)]) -> Self {
        Self {
            name: name.into(),
            keys: keys
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct KeyTable {
    sections: Vec<KeySection>,
}

impl KeyTable {
    pub fn new(sections: Vec<KeySection>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[KeySection] {
        &self.sections
    }

    /// Total number of keys across all sections.
    pub fn key_count(&self) -> usize {
        self.sections.iter().map(|s| s.keys.len()).sum()
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::new(vec![
            KeySection::new(
                "navbar",
                &[
                    ("smart_predictions", "Smart Trip Predictions"),
                    ("analytics", "Analytics"),
                    ("cabs", "Cabs"),
                ],
            ),
            KeySection::new(
                "hotels",
                &[
                    ("title", "Premium Stays Across India"),
                    ("view_details", "View Details"),
                    ("price_per_night", "Price per night"),
                    ("about", "About this stay"),
                    ("popular_amenities", "Popular Amenities"),
                    ("guest_reviews", "Guest Reviews"),
                    ("verified_guest", "Verified Guest"),
                    ("book_now", "Book Now"),
                    ("back_to_hotels", "Back to Hotels"),
                    ("best_price", "Best Price"),
                    ("check_in", "Check-in"),
                    ("guests", "Guests"),
                    ("select_date", "Select Date"),
                    ("adults_room", "2 Adults, 1 Room"),
                    ("no_payment", "No payment charged yet"),
                ],
            ),
        ])
    }
}

/// Error for a key table whose JSON shape is not an object of string maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTableError(String);

impl fmt::Display for KeyTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for KeyTableError {}

impl TryFrom<Map<String, Value>> for KeyTable {
    type Error = KeyTableError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut sections = Vec::with_capacity(map.len());
        for (name, value) in map {
            let Value::Object(entries) = value else {
                return Err(KeyTableError(format!(
                    "section \"{}\" in 'newKeys' must be an object",
                    name
                )));
            };
            let mut keys = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                match value {
                    Value::String(s) => keys.push((key, s)),
                    _ => {
                        return Err(KeyTableError(format!(
                            "value of \"{}.{}\" in 'newKeys' must be a string",
                            name, key
                        )));
                    }
                }
            }
            sections.push(KeySection { name, keys });
        }
        Ok(Self { sections })
    }
}

impl From<KeyTable> for Map<String, Value> {
    fn from(table: KeyTable) -> Self {
        table
            .sections
            .into_iter()
            .map(|section| {
                let keys: Map<String, Value> = section
                    .keys
                    .into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect();
                (section.name, Value::Object(keys))
            })
            .collect()
    }
}
