//! Wire models for the REST resources.
//!
//! Every record is flat. Field names follow the service exactly, which is why
//! the geographic entities carry PascalCase renames.

use std::fmt::{Debug, Display};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

mod city;
mod country;
mod state;
mod user;

pub use city::{City, CityDraft};
pub use country::{Country, CountryDraft};
pub use state::{State, StateDraft};
pub use user::{LoginRequest, User, UserDraft};

/// A record served by one REST resource.
pub trait Entity: Clone + Debug + DeserializeOwned + 'static {
    /// Server-assigned identifier. Never edited, never sent on create.
    type Id: Clone + Debug + Display + PartialEq + 'static;
    /// The record minus its `id`; the body of a create or full update.
    type Draft: Clone + Debug + PartialEq + Serialize + 'static;

    /// Path segment of the resource, e.g. `"country"`.
    const RESOURCE: &'static str;
    /// Human-readable singular name, e.g. `"Country"`.
    const LABEL: &'static str;

    fn id(&self) -> &Self::Id;
    fn to_draft(&self) -> Self::Draft;
}

/// Accept ids served either as JSON strings or numbers.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}
