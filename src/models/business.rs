use super::schedule::WeeklySchedule;
use super::weekday::DutyDay;
use serde::{Deserialize, Serialize};

/// Geographic position of a business.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A directory entry. Field names mirror the dataset's camelCase JSON.
///
/// `is_open` is derived state: it is recomputed from `hours` against "now"
/// on every load and on every watch tick, never read from the dataset as
/// authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub hours: WeeklySchedule,
    #[serde(default)]
    pub is_open: bool,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_pharmacy: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pharmacy_turns: Vec<DutyDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_embed_url: Option<String>,
}

impl Business {
    /// True when this pharmacy is on duty on the given day.
    pub fn on_duty(&self, day: DutyDay) -> bool {
        self.pharmacy_turns.contains(&day)
    }

    /// Link to the business position on a public map.
    pub fn map_link(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}",
            self.coordinates.lat, self.coordinates.lng
        )
    }
}
