use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::define_id_type!(ClientId);

/// Standing cleaning preferences recorded for a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientPreferences {
    #[serde(default)]
    pub pet_friendly: bool,
    #[serde(default)]
    pub kitchen_focus: bool,
    #[serde(default)]
    pub eco_friendly: bool,
    #[serde(default)]
    pub deep_clean: bool,
    #[serde(default)]
    pub special_instructions: String,
}

/// A customer's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub id: ClientId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub total_jobs: u32,
    #[serde(default)]
    pub preferences: ClientPreferences,
}
