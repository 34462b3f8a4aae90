//! Draft handling shared by the entity forms.
//!
//! A form keeps its own draft. The draft is rebuilt from the selected record
//! whenever the selection changes, or from the draft defaults when nothing is
//! selected, and is never written back into the list directly.

use api::{ApiError, City, Country, Entity, ResourceClient, State, Transport, User};
use thiserror::Error;

use crate::validation::validate_required;

/// Why a submit did not persist anything.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SaveError {
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Presence rules of an entity's draft.
pub trait FormEntity: Entity {
    fn required(draft: &Self::Draft) -> Vec<(&'static str, String)>;
}

/// Draft for `current`, or the defaults in create mode.
pub fn draft_for<E: Entity>(current: Option<&E>) -> E::Draft
where
    E::Draft: Default,
{
    current.map(Entity::to_draft).unwrap_or_default()
}

/// Message of the first empty required field.
pub fn check_required<E: FormEntity>(draft: &E::Draft) -> Option<String> {
    E::required(draft)
        .into_iter()
        .find_map(|(label, value)| validate_required(label, &value))
}

/// Validate presence, then create or update depending on `current`.
pub async fn submit<E, T>(
    client: &ResourceClient<E, T>,
    current: Option<&E::Id>,
    draft: &E::Draft,
) -> Result<E, SaveError>
where
    E: FormEntity,
    T: Transport,
{
    if let Some(message) = check_required::<E>(draft) {
        return Err(SaveError::Invalid(message));
    }
    let saved = client.save(current, draft).await?;
    tracing::info!("{} {} saved", E::LABEL, saved.id());
    Ok(saved)
}

impl FormEntity for Country {
    fn required(draft: &Self::Draft) -> Vec<(&'static str, String)> {
        vec![
            ("Country Code", draft.country_code.clone()),
            ("Country Name", draft.country_name.clone()),
        ]
    }
}

impl FormEntity for State {
    fn required(draft: &Self::Draft) -> Vec<(&'static str, String)> {
        vec![
            ("State Code", draft.state_code.clone()),
            ("State Name", draft.state_name.clone()),
            ("Country", draft.country_code.clone()),
        ]
    }
}

impl FormEntity for City {
    fn required(draft: &Self::Draft) -> Vec<(&'static str, String)> {
        vec![("City Name", draft.city_name.clone())]
    }
}

impl FormEntity for User {
    fn required(draft: &Self::Draft) -> Vec<(&'static str, String)> {
        vec![
            ("Email", draft.email.clone()),
            ("Phone", draft.phone.clone()),
            ("Password", draft.password.clone()),
        ]
    }
}

/// Parse a sort sequence input. An empty input is 0; garbage keeps the
/// previous value.
pub fn parse_sort_seq(input: &str, previous: i64) -> i64 {
    let input = input.trim();
    if input.is_empty() {
        return 0;
    }
    input.parse().unwrap_or(previous)
}

/// Text to show in a sort sequence input: what the user typed while it still
/// stands for `value`, otherwise `value` itself (e.g. after the draft reset).
pub fn sort_seq_text(raw: &str, value: i64) -> String {
    if parse_sort_seq(raw, value) == value {
        raw.to_string()
    } else {
        value.to_string()
    }
}

/// Reference options of a dependent form, loaded independently of the draft.
#[derive(Clone, Debug, PartialEq)]
pub enum Options<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> Options<T> {
    pub fn from_result(result: Result<Vec<T>, ApiError>, what: &str) -> Self {
        match result {
            Ok(items) => Options::Ready(items),
            Err(e) => {
                tracing::warn!("failed to load {what}: {e}");
                Options::Failed(format!("Failed to load {what}."))
            }
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Options::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Options::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::mock::MockServer;
    use api::{ApiClient, CityDraft, CountryDraft, StateDraft};

    #[test]
    fn test_create_mode_defaults() {
        let country = draft_for::<Country>(None);
        assert_eq!(country.sort_seq, 0);
        assert!(country.active);

        let state = draft_for::<State>(None);
        assert_eq!(state.sort_seq, 1);
        assert!(state.active);

        let city = draft_for::<City>(None);
        assert_eq!(city.sort_seq, 1);
        assert!(city.active);
    }

    #[test]
    fn test_edit_mode_copies_record() {
        let country = Country {
            id: "9".into(),
            country_code: "FR".into(),
            country_name: "France".into(),
            sort_seq: 4,
            active: false,
        };
        let draft = draft_for(Some(&country));
        assert_eq!(
            draft,
            CountryDraft {
                country_code: "FR".into(),
                country_name: "France".into(),
                sort_seq: 4,
                active: false,
            }
        );
    }

    #[test]
    fn test_required_fields() {
        let mut draft = StateDraft {
            state_code: "CA".into(),
            state_name: "California".into(),
            ..StateDraft::default()
        };
        assert_eq!(
            check_required::<State>(&draft).as_deref(),
            Some("Country is required.")
        );
        draft.country_code = "US".into();
        assert_eq!(check_required::<State>(&draft), None);
        assert_eq!(
            check_required::<City>(&CityDraft::default()).as_deref(),
            Some("City Name is required.")
        );
    }

    #[test]
    fn test_parse_sort_seq() {
        assert_eq!(parse_sort_seq(" 7 ", 1), 7);
        assert_eq!(parse_sort_seq("x", 3), 3);
        assert_eq!(parse_sort_seq("-2", 3), -2);
        assert_eq!(parse_sort_seq("", 3), 0);
    }

    #[test]
    fn test_sort_seq_text_survives_clearing() {
        // Backspace over "1", then type "2".
        let value = parse_sort_seq("", 1);
        assert_eq!(sort_seq_text("", value), "");
        let value = parse_sort_seq("2", value);
        assert_eq!(value, 2);
        assert_eq!(sort_seq_text("2", value), "2");

        assert_eq!(sort_seq_text("-", 4), "-");
        // Draft replaced underneath a stale input.
        assert_eq!(sort_seq_text("7", 1), "1");
    }

    #[tokio::test]
    async fn test_invalid_draft_sends_nothing() {
        let server = MockServer::new();
        let api = ApiClient::with_transport(server.clone());
        let result = submit(&api.cities(), None, &CityDraft::default()).await;
        assert!(matches!(result, Err(SaveError::Invalid(_))));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_submit_creates_then_updates() {
        let server = MockServer::new();
        let api = ApiClient::with_transport(server.clone());
        let mut draft = CityDraft {
            city_name: "Springfield".into(),
            ..CityDraft::default()
        };
        let created = submit(&api.cities(), None, &draft).await.unwrap();
        draft.sort_seq = 5;
        let updated = submit(&api.cities(), Some(&created.id), &draft)
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.sort_seq, 5);
        assert_eq!(server.records("city").len(), 1);
    }

    #[tokio::test]
    async fn test_options_failure_message() {
        let server = MockServer::new();
        server.fail_next(500, "down");
        let api = ApiClient::with_transport(server);
        let options = Options::from_result(api.countries().list().await, "countries");
        assert_eq!(options.error(), Some("Failed to load countries."));
        assert!(options.items().is_empty());
    }
}
