//! List-screen flow: the screen owns the last full snapshot returned by the
//! service and replaces it wholesale after every mutation.

use api::{ApiError, Entity, ResourceClient, Transport};

/// Collection and selection owned by one list screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<E> {
    pub records: Vec<E>,
    pub loading: bool,
    pub error: Option<String>,
    /// Record currently loaded into the form.
    pub selected: Option<E>,
}

impl<E> Default for ListState<E> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
            selected: None,
        }
    }
}

impl<E: Entity> ListState<E> {
    /// Replace the snapshot. A failed fetch keeps the previous one.
    pub fn apply(&mut self, result: Result<Vec<E>, ApiError>) {
        self.loading = false;
        match result {
            Ok(records) => {
                tracing::debug!("{} {} records", records.len(), E::LABEL);
                self.records = records;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("failed to fetch {}: {e}", E::RESOURCE);
                self.error = Some(format!("Failed to fetch {} data.", E::LABEL.to_lowercase()));
            }
        }
    }

    pub fn select(&mut self, key: &str) {
        self.selected = crate::columns::find_by_key(&self.records, key).cloned();
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// Fetch the full collection.
pub async fn refresh<E: Entity, T: Transport>(
    client: &ResourceClient<E, T>,
) -> Result<Vec<E>, ApiError> {
    client.list().await
}

/// Delete one record, then fetch the full collection. A failed delete
/// fetches nothing.
pub async fn delete_then_refresh<E: Entity, T: Transport>(
    client: &ResourceClient<E, T>,
    id: &E::Id,
) -> Result<Vec<E>, ApiError> {
    client.delete(id).await?;
    tracing::info!("{} {id} deleted", E::LABEL);
    client.list().await
}

/// Parse a row key back into the entity id.
pub fn parse_id<E: Entity>(key: &str) -> Option<E::Id>
where
    E::Id: std::str::FromStr,
{
    key.parse().ok()
}
