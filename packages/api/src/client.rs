//! # Entity clients
//!
//! [`ResourceClient`] is the thin request wrapper for one REST resource. The
//! same generic code serves countries, states, cities and users: paths come from
//! [`Entity::RESOURCE`], payloads from the entity and its draft.
//!
//! | Method | Request | Returns |
//! |--------|---------|---------|
//! | [`list`](ResourceClient::list) | `GET /<resource>/` | every record |
//! | [`get`](ResourceClient::get) | `GET /<resource>/{id}` | one record |
//! | [`create`](ResourceClient::create) | `POST /<resource>/` with the draft | the stored record |
//! | [`update`](ResourceClient::update) | `PUT /<resource>/{id}` with a (partial) body | the stored record |
//! | [`delete`](ResourceClient::delete) | `DELETE /<resource>/{id}` | nothing |
//!
//! [`ApiClient`] bundles one transport and hands out typed clients.

use std::marker::PhantomData;

use serde::Serialize;

use crate::auth::AuthClient;
use crate::envelope::{decode_data, decode_unit};
use crate::error::ApiError;
use crate::models::{City, Country, Entity, State, User};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

/// Request wrapper for the resource of `E`.
pub struct ResourceClient<E, T> {
    transport: T,
    _entity: PhantomData<fn() -> E>,
}

impl<E, T: Clone> Clone for ResourceClient<E, T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity, T: Transport> ResourceClient<E, T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            _entity: PhantomData,
        }
    }

    fn collection_path() -> String {
        format!("/{}/", E::RESOURCE)
    }

    fn item_path(id: &E::Id) -> String {
        format!("/{}/{}", E::RESOURCE, id)
    }

    async fn exchange(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        tracing::debug!("{} {}", request.method, request.path);
        let method = request.method;
        let path = request.path.clone();
        self.transport.send(request).await.inspect_err(|e| {
            tracing::warn!("{method} {path} failed: {e}");
        })
    }

    async fn fetch<R: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<R, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        let response = self.exchange(request).await?;
        decode_data(response.status, &response.body).inspect_err(|e| {
            tracing::warn!("{method} {path} rejected: {e}");
        })
    }

    pub async fn list(&self) -> Result<Vec<E>, ApiError> {
        self.fetch(ApiRequest::new(Method::Get, Self::collection_path()))
            .await
    }

    pub async fn get(&self, id: &E::Id) -> Result<E, ApiError> {
        self.fetch(ApiRequest::new(Method::Get, Self::item_path(id)))
            .await
    }

    pub async fn create(&self, draft: &E::Draft) -> Result<E, ApiError> {
        let request = ApiRequest::new(Method::Post, Self::collection_path()).with_json(draft)?;
        self.fetch(request).await
    }

    pub async fn update<P: Serialize + ?Sized>(
        &self,
        id: &E::Id,
        patch: &P,
    ) -> Result<E, ApiError> {
        let request = ApiRequest::new(Method::Put, Self::item_path(id)).with_json(patch)?;
        self.fetch(request).await
    }

    pub async fn delete(&self, id: &E::Id) -> Result<(), ApiError> {
        let path = Self::item_path(id);
        let response = self
            .exchange(ApiRequest::new(Method::Delete, path.clone()))
            .await?;
        decode_unit(response.status, &response.body).inspect_err(|e| {
            tracing::warn!("DELETE {path} rejected: {e}");
        })
    }

    /// Create when `current` is `None`, otherwise update that record.
    pub async fn save(&self, current: Option<&E::Id>, draft: &E::Draft) -> Result<E, ApiError> {
        match current {
            Some(id) => self.update(id, draft).await,
            None => self.create(draft).await,
        }
    }
}

/// One transport, every client.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// Client for the service at `base_url`, e.g. `"http://localhost:5114"`.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(HttpTransport::new(base_url))
    }
}

impl<T: Transport + Clone> ApiClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn resource<E: Entity>(&self) -> ResourceClient<E, T> {
        ResourceClient::new(self.transport.clone())
    }

    pub fn countries(&self) -> ResourceClient<Country, T> {
        self.resource()
    }

    pub fn states(&self) -> ResourceClient<State, T> {
        self.resource()
    }

    pub fn cities(&self) -> ResourceClient<City, T> {
        self.resource()
    }

    pub fn users(&self) -> ResourceClient<User, T> {
        self.resource()
    }

    pub fn auth(&self) -> AuthClient<T> {
        AuthClient::new(self.transport.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockServer;
    use crate::models::{CountryDraft, UserDraft};

    fn us() -> CountryDraft {
        CountryDraft {
            country_code: "US".into(),
            country_name: "United States".into(),
            sort_seq: 1,
            active: true,
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let server = MockServer::new();
        let api = ApiClient::with_transport(server.clone());

        let created = api.countries().create(&us()).await.unwrap();
        assert!(!created.id.is_empty());

        let countries = api.countries().list().await.unwrap();
        let matching: Vec<_> = countries
            .iter()
            .filter(|c| c.country_code == "US" && c.country_name == "United States")
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].id, created.id);
        assert_eq!(matching[0].sort_seq, 1);
        assert!(matching[0].active);

        // The create body carried no id
        let posted = server
            .requests()
            .into_iter()
            .find(|r| r.method == Method::Post)
            .unwrap();
        assert_eq!(posted.path, "/country/");
        assert!(posted.body.unwrap().get("id").is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_other_fields() {
        let server = MockServer::new();
        let api = ApiClient::with_transport(server);

        let created = api.countries().create(&us()).await.unwrap();
        let mut draft = created.to_draft();
        draft.sort_seq = 2;
        api.countries().update(&created.id, &draft).await.unwrap();

        let countries = api.countries().list().await.unwrap();
        let country = countries.iter().find(|c| c.id == created.id).unwrap();
        assert_eq!(country.sort_seq, 2);
        assert_eq!(country.country_code, "US");
        assert_eq!(country.country_name, "United States");
    }

    #[tokio::test]
    async fn test_delete_removes_id() {
        let server = MockServer::new();
        let api = ApiClient::with_transport(server);

        let first = api.countries().create(&us()).await.unwrap();
        let mut other = us();
        other.country_code = "CA".into();
        other.country_name = "Canada".into();
        let second = api.countries().create(&other).await.unwrap();

        api.countries().delete(&first.id).await.unwrap();

        let ids: Vec<String> = api
            .countries()
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![second.id]);
    }

    #[tokio::test]
    async fn test_save_dispatches_on_current() {
        let server = MockServer::new();
        let api = ApiClient::with_transport(server.clone());

        let created = api.countries().save(None, &us()).await.unwrap();
        let mut draft = created.to_draft();
        draft.country_name = "USA".into();
        let updated = api
            .countries()
            .save(Some(&created.id), &draft)
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.country_name, "USA");

        let methods: Vec<Method> = server.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![Method::Post, Method::Put]);
    }

    #[tokio::test]
    async fn test_missing_record_is_not_found() {
        let api = ApiClient::with_transport(MockServer::new());
        let err = api.states().get(&"nope".to_string()).await.unwrap_err();
        assert!(err.is_not_found());
        let err = api.cities().delete(&"nope".to_string()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_failures_propagate_without_retry() {
        let server = MockServer::new();
        let api = ApiClient::with_transport(server.clone());

        server.fail_next(500, "boom");
        let err = api.countries().list().await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "boom".into()
            }
        );
        assert_eq!(server.requests().len(), 1);

        server.fail_transport_next();
        assert!(matches!(
            api.countries().list().await,
            Err(ApiError::Transport(_))
        ));

        // Back to normal afterwards
        assert!(api.countries().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_user_partial_update() {
        let server = MockServer::new();
        let api = ApiClient::with_transport(server);

        let draft = UserDraft {
            email: "a@b.com".into(),
            phone: "555-0100".into(),
            password: "Abc123!@".into(),
        };
        api.auth().register(&draft).await.unwrap();

        let users = api.users().list().await.unwrap();
        assert_eq!(users.len(), 1);
        let user = &users[0];
        assert!(!user.created_at.is_empty());

        let fetched = api.users().get(&user.id).await.unwrap();
        assert_eq!(fetched, *user);

        let mut patch = fetched.to_draft();
        patch.phone = "555-0199".into();
        let updated = api.users().update(&user.id, &patch).await.unwrap();
        assert_eq!(updated.phone, "555-0199");
        assert_eq!(updated.email, "a@b.com");
        assert_eq!(updated.created_at, user.created_at);
    }
}
