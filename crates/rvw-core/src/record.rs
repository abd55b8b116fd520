use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// CSV header for the location name column.
pub const LOCATION_NAME: &str = "Location_Name";
/// CSV header for the location type column.
pub const LOCATION_TYPE: &str = "Location_Type";
/// CSV header for the publication date column.
pub const PUBLISHED_DATE: &str = "Published_Date";
/// CSV header for the review body. The dot is part of the name, not a path.
pub const REVIEW_TEXT: &str = "reviews.text";

/// Columns every input CSV must carry, in output key order.
pub const REQUIRED_COLUMNS: [&str; 4] = [LOCATION_NAME, LOCATION_TYPE, PUBLISHED_DATE, REVIEW_TEXT];

/// One review, projected from a single CSV row.
///
/// Field order is the serialized key order. Values are the raw cell text:
/// no trimming, no date parsing, no empty-to-null mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewRecord {
    #[serde(rename = "Location_Name")]
    pub location_name: String,
    #[serde(rename = "Location_Type")]
    pub location_type: String,
    #[serde(rename = "Published_Date")]
    pub published_date: String,
    #[serde(rename = "reviews.text")]
    pub review_text: String,
}

impl ReviewRecord {
    /// Build a record from cells given in [`REQUIRED_COLUMNS`] order.
    #[must_use]
    pub fn from_cells(cells: [&str; 4]) -> Self {
        let [location_name, location_type, published_date, review_text] = cells;
        Self {
            location_name: location_name.to_string(),
            location_type: location_type.to_string(),
            published_date: published_date.to_string(),
            review_text: review_text.to_string(),
        }
    }
}
