use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::customer::Language;

/// A treatment offered by the clinic, with names and descriptions in every
/// supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name_fr: String,
    pub name_pt: String,
    pub name_en: String,
    pub description_fr: String,
    pub description_pt: String,
    pub description_en: String,
    pub price_cents: i32,
    pub duration_minutes: i32,
    pub is_active: bool,
}

impl Service {
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::Fr => &self.name_fr,
            Language::Pt => &self.name_pt,
            Language::En => &self.name_en,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub name_fr: String,
    pub name_pt: String,
    pub name_en: String,
    pub description_fr: String,
    pub description_pt: String,
    pub description_en: String,
    pub price_cents: i32,
    pub duration_minutes: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
