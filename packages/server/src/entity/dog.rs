use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle tag of a listing.
///
/// Transitions are unconstrained: any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DogStatus {
    Active,
    Claimed,
    Archived,
}

impl DogStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DogStatus::Active => "active",
            DogStatus::Claimed => "claimed",
            DogStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for DogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DogStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(DogStatus::Active),
            "claimed" => Ok(DogStatus::Claimed),
            "archived" => Ok(DogStatus::Archived),
            _ => Err(()),
        }
    }
}

/// A found-dog listing.
///
/// Serialized in camelCase — the wire contract the browsing clients expect.
/// Coordinates and date/time stay text-encoded end to end; the server never
/// parses them.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    pub id: i32,
    /// Optional breed from the report form's fixed selection list.
    pub breed: Option<String>,
    pub color: String,
    pub description: String,
    pub image_urls: Vec<String>,
    pub address: String,
    pub city: String,
    pub latitude: String,
    pub longitude: String,
    pub date_found: String,
    pub time_found: String,
    pub status: DogStatus,
    pub finder_name: String,
    pub finder_phone: String,
    pub finder_email: String,
    pub created_at: DateTime<Utc>,
}

/// A validated listing payload, ready for insertion. `id`, `status`, and
/// `created_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewDog {
    pub breed: Option<String>,
    pub color: String,
    pub description: String,
    pub image_urls: Vec<String>,
    pub address: String,
    pub city: String,
    pub latitude: String,
    pub longitude: String,
    pub date_found: String,
    pub time_found: String,
    pub finder_name: String,
    pub finder_phone: String,
    pub finder_email: String,
}
