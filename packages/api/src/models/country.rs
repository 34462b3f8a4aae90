use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Country {
    #[serde(rename = "id", deserialize_with = "super::id_string")]
    pub id: String,
    pub country_code: String,
    pub country_name: String,
    #[serde(default)]
    pub sort_seq: i64,
    #[serde(default)]
    pub active: bool,
}

/// A country without its id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountryDraft {
    pub country_code: String,
    pub country_name: String,
    pub sort_seq: i64,
    pub active: bool,
}

impl Default for CountryDraft {
    fn default() -> Self {
        Self {
            country_code: String::new(),
            country_name: String::new(),
            sort_seq: 0,
            active: true,
        }
    }
}

impl Entity for Country {
    type Id = String;
    type Draft = CountryDraft;

    const RESOURCE: &'static str = "country";
    const LABEL: &'static str = "Country";

    fn id(&self) -> &String {
        &self.id
    }

    fn to_draft(&self) -> CountryDraft {
        CountryDraft {
            country_code: self.country_code.clone(),
            country_name: self.country_name.clone(),
            sort_seq: self.sort_seq,
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let json = r#"{"id":"c1","CountryCode":"US","CountryName":"United States","SortSeq":1,"Active":true}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.id, "c1");
        assert_eq!(country.country_code, "US");
        assert_eq!(country.sort_seq, 1);
        assert!(country.active);
    }

    #[test]
    fn test_numeric_id_is_accepted() {
        let json = r#"{"id":42,"CountryCode":"FR","CountryName":"France","SortSeq":3,"Active":false}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.id, "42");
    }

    #[test]
    fn test_draft_never_carries_id() {
        let draft = CountryDraft {
            country_code: "US".into(),
            country_name: "United States".into(),
            sort_seq: 1,
            active: true,
        };
        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("id"));
        assert_eq!(object["CountryCode"], "US");
        assert_eq!(object["SortSeq"], 1);
    }
}
