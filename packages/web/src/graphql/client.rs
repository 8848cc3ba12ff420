//! GraphQL client for making requests to the API server

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config;
use crate::session;

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<V: Serialize> {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// GraphQL response wrapper
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

/// GraphQL error
#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    pub locations: Option<Vec<GraphQLErrorLocation>>,
    pub path: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLErrorLocation {
    pub line: i32,
    pub column: i32,
}

/// Error type for GraphQL operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("No data returned")]
    NoData,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// GraphQL client for making requests
#[derive(Clone)]
pub struct GraphQLClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphQLClient {
    /// Create a new GraphQL client
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Execute a GraphQL query.
    ///
    /// The CSRF credential from session storage is attached to every
    /// request; the backend expects the header even when it is empty.
    pub async fn query<V, R>(&self, query: &'static str, variables: Option<V>) -> Result<R, ClientError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let request = GraphQLRequest { query, variables };
        let token = session::token().unwrap_or_default();

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-CSRF-TOKEN", token)
            .json(&request)
            .send()
            .await?;
        let graphql_response: GraphQLResponse<R> = response.json().await?;

        if let Some(errors) = graphql_response.errors {
            if let Some(first_error) = errors.first() {
                return Err(ClientError::GraphQL(first_error.message.clone()));
            }
        }

        graphql_response.data.ok_or(ClientError::NoData)
    }

    /// Execute a GraphQL mutation (same as query, but semantically different)
    pub async fn mutate<V, R>(&self, mutation: &'static str, variables: Option<V>) -> Result<R, ClientError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        self.query(mutation, variables).await
    }
}

/// Create a client bound to the configured endpoint
pub fn browser_client() -> GraphQLClient {
    GraphQLClient::new(config::api_url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_skips_absent_variables() {
        let request: GraphQLRequest<()> = GraphQLRequest {
            query: "query { authUrl }",
            variables: None,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "query": "query { authUrl }" }));
    }

    #[test]
    fn test_request_serializes_variables() {
        #[derive(Serialize)]
        struct Variables {
            id: String,
        }

        let request = GraphQLRequest {
            query: "query User($id: ID!) { user(id: $id) { id } }",
            variables: Some(Variables { id: "u1".to_string() }),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["variables"]["id"], "u1");
    }

    #[test]
    fn test_response_parses_data() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(rename = "authUrl")]
            auth_url: String,
        }

        let json = r#"{ "data": { "authUrl": "https://accounts.example.com" } }"#;
        let response: GraphQLResponse<Payload> = serde_json::from_str(json).unwrap();

        assert!(response.errors.is_none());
        assert_eq!(
            response.data.unwrap().auth_url,
            "https://accounts.example.com"
        );
    }

    #[test]
    fn test_response_parses_errors() {
        let json = r#"{
            "data": null,
            "errors": [
                { "message": "viewer could not be verified", "locations": [{ "line": 2, "column": 3 }], "path": ["logIn"] },
                { "message": "second error" }
            ]
        }"#;
        let response: GraphQLResponse<serde_json::Value> = serde_json::from_str(json).unwrap();

        assert!(response.data.is_none());
        let errors = response.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "viewer could not be verified");
        assert_eq!(errors[0].locations.as_ref().unwrap()[0].line, 2);
        assert_eq!(errors[0].path.as_ref().unwrap()[0], "logIn");
    }
}
