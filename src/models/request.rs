use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::User;

/// Body of `POST /users`.
#[derive(Clone, Serialize, PartialEq)]
pub struct Registration {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Birthday", skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

impl Registration {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            birthday: None,
        }
    }

    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .field("birthday", &self.birthday)
            .finish()
    }
}

/// Body of `POST /login`.
#[derive(Clone, Serialize, PartialEq)]
pub struct Credentials {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `PUT /users/:username`. Unset fields are left out of the JSON so
/// the service keeps their current values.
#[derive(Clone, Default, Serialize, PartialEq)]
pub struct ProfileUpdate {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "Birthday", skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.email.is_none()
            && self.birthday.is_none()
    }
}

impl std::fmt::Debug for ProfileUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileUpdate")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("email", &self.email)
            .field("birthday", &self.birthday)
            .finish()
    }
}

/// Response of `POST /login`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_serialize() {
        let body = Registration::new("alice", "s3cret", "alice@example.com")
            .with_birthday(NaiveDate::from_ymd_opt(1990, 4, 2).unwrap());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["Username"], "alice");
        assert_eq!(json["Password"], "s3cret");
        assert_eq!(json["Email"], "alice@example.com");
        assert_eq!(json["Birthday"], "1990-04-02");
    }

    #[test]
    fn test_registration_without_birthday() {
        let json = serde_json::to_value(Registration::new("a", "b", "c")).unwrap();
        assert!(json.get("Birthday").is_none());
    }

    #[test]
    fn test_credentials_serialize() {
        let json = serde_json::to_string(&Credentials::new("alice", "pw")).unwrap();
        assert_eq!(json, r#"{"Username":"alice","Password":"pw"}"#);
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let creds = format!("{:?}", Credentials::new("alice", "hunter2"));
        assert!(!creds.contains("hunter2"));

        let reg = format!("{:?}", Registration::new("alice", "hunter2", "a@b.c"));
        assert!(!reg.contains("hunter2"));

        let update = format!("{:?}", ProfileUpdate::new().with_password("hunter2"));
        assert!(!update.contains("hunter2"));
    }

    #[test]
    fn test_profile_update_skips_unset_fields() {
        let update = ProfileUpdate::new().with_email("new@example.com");
        assert!(!update.is_empty());
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"Email":"new@example.com"}"#);
        assert!(ProfileUpdate::new().is_empty());
    }

    #[test]
    fn test_login_response_deserialize() {
        let json = r#"{
            "user": { "_id": "u1", "Username": "alice", "FavoriteMovies": [] },
            "token": "eyJhbGciOi"
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.username, "alice");
        assert_eq!(response.token, "eyJhbGciOi");
    }

    #[test]
    fn test_login_response_without_token_is_rejected() {
        let json = r#"{ "user": { "Username": "alice" } }"#;
        assert!(serde_json::from_str::<LoginResponse>(json).is_err());
    }
}
