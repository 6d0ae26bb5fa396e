use async_graphql::http::GraphiQLSource;
use async_graphql::parser::parse_query;
use async_graphql::parser::types::{DocumentOperations, OperationType};
use async_graphql_poem::{GraphQLRequest, GraphQLResponse};
use poem::http::{HeaderMap, Method, StatusCode, header};
use poem::web::Html;
use poem::{Endpoint, FromRequest, IntoResponse, Request, Response, Result};

use crate::api::graphql::schema::ApiSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

/// GraphQL over HTTP: any operation via POST, queries only via GET query
/// strings, plus the GraphiQL IDE for browsers when enabled. Other methods
/// get 405.
pub struct GraphQLApi {
    schema: ApiSchema,
    graphiql_enabled: bool,
}

impl GraphQLApi {
    pub fn new(schema: ApiSchema, graphiql_enabled: bool) -> Self {
        Self {
            schema,
            graphiql_enabled,
        }
    }

    fn wants_graphiql(&self, req: &Request) -> bool {
        self.graphiql_enabled && req.method() == Method::GET && accepts_html(req.headers())
    }
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("text/html"))
        .unwrap_or(false)
}

/// Whether the operation `request` would run is a mutation. Unparsable
/// documents return false and are left to the executor to report.
fn selects_mutation(request: &async_graphql::Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };

    let is_mutation = |ty: OperationType| matches!(ty, OperationType::Mutation);

    match &document.operations {
        DocumentOperations::Single(operation) => is_mutation(operation.node.ty),
        DocumentOperations::Multiple(operations) => match &request.operation_name {
            Some(name) => operations
                .iter()
                .any(|(op_name, operation)| {
                    op_name.as_str() == name.as_str() && is_mutation(operation.node.ty)
                }),
            None => operations
                .values()
                .any(|operation| is_mutation(operation.node.ty)),
        },
    }
}

fn graphiql_page() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

impl Endpoint for GraphQLApi {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let is_get = req.method() == Method::GET;
        if !is_get && req.method() != Method::POST {
            return Err(poem::Error::from_string(
                "GraphQL only supports GET and POST requests",
                StatusCode::METHOD_NOT_ALLOWED,
            ));
        }

        if self.wants_graphiql(&req) {
            return Ok(graphiql_page().into_response());
        }

        let (req, mut body) = req.split();
        let request = GraphQLRequest::from_request(&req, &mut body).await?;

        if is_get {
            if request.0.query.trim().is_empty() {
                return Err(poem::Error::from_string(
                    "GET query missing",
                    StatusCode::BAD_REQUEST,
                ));
            }
            if selects_mutation(&request.0) {
                return Err(poem::Error::from_string(
                    "GET supports only query operation",
                    StatusCode::METHOD_NOT_ALLOWED,
                ));
            }
        }

        let response = self.schema.execute(request.0).await;

        Ok(GraphQLResponse::from(response).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_detect_browser_accept_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            "text/html,application/xhtml+xml".parse().unwrap(),
        );

        assert!(accepts_html(&headers));
    }

    #[test]
    fn should_detect_anonymous_mutation() {
        let request = async_graphql::Request::new(r#"mutation { generateText(prompt: "hi") { text } }"#);
        assert!(selects_mutation(&request));
    }

    #[test]
    fn should_not_flag_query_as_mutation() {
        assert!(!selects_mutation(&async_graphql::Request::new("{ hello }")));
        assert!(!selects_mutation(&async_graphql::Request::new("query Greet { hello }")));
    }

    #[test]
    fn should_follow_operation_name_in_multi_operation_document() {
        let document = r#"query Greet { hello } mutation Generate { generateText(prompt: "hi") { text } }"#;

        let query = async_graphql::Request::new(document).operation_name("Greet");
        let mutation = async_graphql::Request::new(document).operation_name("Generate");

        assert!(!selects_mutation(&query));
        assert!(selects_mutation(&mutation));
    }

    #[test]
    fn should_leave_unparsable_document_to_executor() {
        assert!(!selects_mutation(&async_graphql::Request::new("{ hello")));
    }

    #[test]
    fn should_not_treat_json_clients_as_browsers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, "application/json".parse().unwrap());

        assert!(!accepts_html(&headers));
        assert!(!accepts_html(&HeaderMap::new()));
    }
}
