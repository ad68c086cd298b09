//! Repository creation types

use serde::{Deserialize, Serialize};

/// Visibility of a new repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// Label shown in the visibility prompt
    pub fn label(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }

    /// Get all choices, in prompt order
    pub fn all() -> &'static [Visibility] {
        &[Visibility::Public, Visibility::Private]
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Visibility::Private)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Repository descriptor collected from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRepository {
    pub name: String,
    pub description: Option<String>,
    pub visibility: Visibility,
}

impl NewRepository {
    /// Request body for `POST /user/repos`
    pub fn to_request(&self) -> CreateRepositoryRequest<'_> {
        CreateRepositoryRequest {
            name: &self.name,
            description: self.description.as_deref(),
            private: self.visibility.is_private(),
        }
    }
}

/// Create repository request body
#[derive(Debug, Serialize)]
pub struct CreateRepositoryRequest<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub private: bool,
}

/// The fields phonit reads back from a created repository
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedRepository {
    /// Full name (owner/name)
    #[serde(default)]
    pub full_name: Option<String>,
    /// HTTPS clone URL, used as the push target
    #[serde(default)]
    pub clone_url: Option<String>,
    /// Web page of the repository
    #[serde(default)]
    pub html_url: Option<String>,
}

impl CreatedRepository {
    /// The clone URL, if GitHub returned a non-empty one
    pub fn clone_url(&self) -> Option<&str> {
        self.clone_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_labels() {
        let labels: Vec<_> = Visibility::all().iter().map(Visibility::label).collect();
        assert_eq!(labels, vec!["public", "private"]);
        assert_eq!(Visibility::default(), Visibility::Public);
    }

    #[test]
    fn test_request_body() {
        let repo = NewRepository {
            name: "my-app".to_string(),
            description: Some("demo project".to_string()),
            visibility: Visibility::Private,
        };
        let body = serde_json::to_value(repo.to_request()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "my-app",
                "description": "demo project",
                "private": true,
            })
        );
    }

    #[test]
    fn test_request_body_without_description() {
        let repo = NewRepository {
            name: "my-app".to_string(),
            description: None,
            visibility: Visibility::Public,
        };
        let body = serde_json::to_value(repo.to_request()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "my-app", "private": false}));
    }

    #[test]
    fn test_clone_url_must_be_non_empty() {
        let created: CreatedRepository = serde_json::from_str(
            r#"{"full_name": "me/my-app", "clone_url": "https://github.com/me/my-app.git"}"#,
        )
        .unwrap();
        assert_eq!(
            created.clone_url(),
            Some("https://github.com/me/my-app.git")
        );

        let empty: CreatedRepository = serde_json::from_str(r#"{"clone_url": ""}"#).unwrap();
        assert_eq!(empty.clone_url(), None);

        let missing: CreatedRepository = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.clone_url(), None);
    }
}
