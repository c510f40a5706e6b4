//! Request and response types for the GraphQL API

use replkit_core::{Language, ReplConfig, TemplateCommand};
use serde::{Deserialize, Serialize};

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub username: String,
    pub display_name: String,
}

/// Input for creating a remote Repl
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReplRequest {
    pub title: String,
    pub language: Language,
    pub is_private: bool,
    /// Template commands, forwarded without interpretation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<TemplateCommand>,
}

impl CreateReplRequest {
    /// Request mirroring a materialized record
    pub fn from_record(record: &ReplConfig, commands: Vec<TemplateCommand>) -> Self {
        Self {
            title: record.title.clone(),
            language: record.language,
            is_private: record.private,
            commands,
        }
    }
}

/// A Repl created on the remote service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteRepl {
    pub id: String,
    pub url: String,
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CurrentUserData {
    pub current_user: Option<CurrentUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateReplData {
    pub create_repl: CreateReplPayload,
}

/// `createRepl` returns either a Repl or a user error
#[derive(Debug, Deserialize)]
pub(crate) struct CreateReplPayload {
    pub id: Option<String>,
    pub url: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use replkit_core::ConfigMaterializer;

    fn record(title: &str, language: &str, private: bool) -> ReplConfig {
        ConfigMaterializer::default()
            .build_record(title, language, private)
            .unwrap()
    }

    #[test]
    fn test_request_from_record() {
        let request = CreateReplRequest::from_record(&record("Demo", "nodejs", true), vec![]);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["title"], "Demo");
        assert_eq!(json["language"], "nodejs");
        assert_eq!(json["isPrivate"], true);
        assert!(json.get("commands").is_none());
    }

    #[test]
    fn test_request_includes_commands_when_present() {
        let request = CreateReplRequest::from_record(
            &record("Demo", "python", false),
            vec![TemplateCommand {
                command: "pip install flask".to_string(),
                context: "deps".to_string(),
            }],
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["commands"][0]["command"], "pip install flask");
    }

    #[test]
    fn test_current_user_deserialize() {
        let user: CurrentUser =
            serde_json::from_str(r#"{"username":"ada","displayName":"Ada L"}"#).unwrap();
        assert_eq!(user.display_name, "Ada L");
    }
}
