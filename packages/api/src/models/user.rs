//! # User accounts as served by `/user`
//!
//! Two representations:
//!
//! - [`User`]: the full record, including the plaintext `password` the service
//!   returns. The console only ever shows it masked unless the operator toggles
//!   it per row. Timestamps are kept as the strings the service sends.
//! - [`UserDraft`]: the `{email, phone, password}` body used both to register
//!   and to update an account.
//!
//! [`LoginRequest`] is the body of `POST /user/login`.

use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserDraft {
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl UserDraft {
    /// Names of empty fields, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("email", &self.email),
            ("phone", &self.phone),
            ("password", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Entity for User {
    type Id = i64;
    type Draft = UserDraft;

    const RESOURCE: &'static str = "user";
    const LABEL: &'static str = "User";

    fn id(&self) -> &i64 {
        &self.id
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_timestamps() {
        let json = r#"{"id":7,"email":"a@b.com","phone":"555-0100","password":"pw","createdAt":"2024-01-01","updatedAt":"2024-02-01"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.created_at, "2024-01-01");
        assert_eq!(user.updated_at, "2024-02-01");
    }

    #[test]
    fn test_missing_fields() {
        let draft = UserDraft {
            email: "a@b.com".into(),
            phone: " ".into(),
            password: String::new(),
        };
        assert_eq!(draft.missing_fields(), vec!["phone", "password"]);
        assert!(User {
            id: 1,
            email: "a@b.com".into(),
            phone: "1".into(),
            password: "p".into(),
            created_at: String::new(),
            updated_at: String::new(),
        }
        .to_draft()
        .missing_fields()
        .is_empty());
    }
}
