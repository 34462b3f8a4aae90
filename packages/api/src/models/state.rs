use serde::{Deserialize, Serialize};

use super::Entity;

/// A state or province. `CountryCode` is a soft reference to [`super::Country`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct State {
    #[serde(rename = "id", deserialize_with = "super::id_string")]
    pub id: String,
    pub state_code: String,
    pub state_name: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub sort_seq: i64,
    #[serde(default)]
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StateDraft {
    pub state_code: String,
    pub state_name: String,
    pub country_code: String,
    pub sort_seq: i64,
    pub active: bool,
}

impl Default for StateDraft {
    fn default() -> Self {
        Self {
            state_code: String::new(),
            state_name: String::new(),
            country_code: String::new(),
            sort_seq: 1,
            active: true,
        }
    }
}

impl Entity for State {
    type Id = String;
    type Draft = StateDraft;

    const RESOURCE: &'static str = "state";
    const LABEL: &'static str = "State";

    fn id(&self) -> &String {
        &self.id
    }

    fn to_draft(&self) -> StateDraft {
        StateDraft {
            state_code: self.state_code.clone(),
            state_name: self.state_name.clone(),
            country_code: self.country_code.clone(),
            sort_seq: self.sort_seq,
            active: self.active,
        }
    }
}
