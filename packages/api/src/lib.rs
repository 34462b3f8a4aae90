//! # API crate — typed client for the geographic admin REST service
//!
//! Every screen of the console talks to the service through this crate. It owns
//! the wire models, the `{statusCode, message, data}` envelope and the error
//! type, so the UI only ever sees `Result<T, ApiError>`.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Login and registration against `/user` |
//! | [`client`] | — | [`ResourceClient`] per entity, [`ApiClient`] bundling them |
//! | [`envelope`] | — | Response envelope decoding |
//! | [`error`] | — | [`ApiError`] |
//! | [`models`] | — | `Country`, `State`, `City`, `User` and their drafts |
//! | [`transport`] | — | [`Transport`] seam and the `reqwest` implementation |
//! | [`mock`] | `mock` | In-memory service used by tests |

pub mod auth;
pub mod client;
pub mod envelope;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod models;
pub mod transport;

pub use auth::AuthClient;
pub use client::{ApiClient, ResourceClient};
pub use envelope::Envelope;
pub use error::ApiError;
pub use models::{
    City, CityDraft, Country, CountryDraft, Entity, LoginRequest, State, StateDraft, User,
    UserDraft,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
