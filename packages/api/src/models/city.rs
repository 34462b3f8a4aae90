use serde::{Deserialize, Serialize};

use super::Entity;

/// A city. Both references are optional and never checked client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct City {
    #[serde(rename = "id", deserialize_with = "super::id_string")]
    pub id: String,
    pub city_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default)]
    pub sort_seq: i64,
    #[serde(default)]
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CityDraft {
    pub city_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    pub sort_seq: i64,
    pub active: bool,
}

impl Default for CityDraft {
    fn default() -> Self {
        Self {
            city_name: String::new(),
            state_code: None,
            country_code: None,
            sort_seq: 1,
            active: true,
        }
    }
}

impl Entity for City {
    type Id = String;
    type Draft = CityDraft;

    const RESOURCE: &'static str = "city";
    const LABEL: &'static str = "City";

    fn id(&self) -> &String {
        &self.id
    }

    fn to_draft(&self) -> CityDraft {
        CityDraft {
            city_name: self.city_name.clone(),
            state_code: self.state_code.clone(),
            country_code: self.country_code.clone(),
            sort_seq: self.sort_seq,
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_references_deserialize() {
        let json = r#"{"id":"x","CityName":"Springfield","SortSeq":2,"Active":true}"#;
        let city: City = serde_json::from_str(json).unwrap();
        assert_eq!(city.state_code, None);
        assert_eq!(city.country_code, None);
    }

    #[test]
    fn test_draft_omits_unset_references() {
        let draft = CityDraft {
            city_name: "Springfield".into(),
            ..CityDraft::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("StateCode"));
        assert!(!object.contains_key("CountryCode"));
        assert_eq!(object["SortSeq"], 1);
        assert_eq!(object["Active"], true);
    }
}
