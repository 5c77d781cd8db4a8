use async_graphql::http::GraphiQLSource;
use async_graphql::parser::parse_query;
use async_graphql::parser::types::OperationType;
use async_graphql::{Request, ServerError};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{AppError, Result};

use super::schema::UserSchema;

pub const GRAPHQL_PATH: &str = "/graphql";
pub const GRAPHIQL_PATH: &str = "/graphiql";

const LANDING_PAGE: &str = include_str!("landing.html");

/// Body returned for any unmatched route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNotFound {
    pub message: String,
    pub error: String,
    pub status_code: u16,
}

impl RouteNotFound {
    fn new(method: &Method, uri: &Uri) -> Self {
        let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        Self {
            message: format!("Route {}:{} not found", method, target),
            error: "Not Found".to_string(),
            status_code: StatusCode::NOT_FOUND.as_u16(),
        }
    }
}

/// Builds the router: landing page, GraphiQL, the operation endpoint and a
/// JSON 404 fallback.
///
/// Unknown paths and known paths hit with an unsupported method both get the
/// [`RouteNotFound`] body.
pub fn build_router(schema: UserSchema) -> Router {
    Router::new()
        .route("/", get(landing))
        .route(GRAPHIQL_PATH, get(graphiql))
        .route(GRAPHQL_PATH, get(graphql_get_handler).post(graphql_handler))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

/// Binds `config.socket_addr()` and serves until the process is terminated.
///
/// Bind failures are returned as [`AppError::Bind`]; there is no retry.
pub async fn run_server(schema: UserSchema, config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;

    let local = listener.local_addr()?;
    info!(address = %local, "GraphQL server listening");
    info!(
        "GraphiQL: http://localhost:{}{} (bound to http://{}{})",
        local.port(),
        GRAPHIQL_PATH,
        local,
        GRAPHIQL_PATH
    );

    axum::serve(listener, build_router(schema)).await?;
    Ok(())
}

async fn graphql_handler(State(schema): State<UserSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Queries may arrive as `GET /graphql?query=...`; mutations must use POST.
async fn graphql_get_handler(State(schema): State<UserSchema>, req: GraphQLRequest) -> Response {
    let req = req.into_inner();
    if is_mutation(&req) {
        let error = ServerError::new("Can only perform a mutation operation from a POST request", None);
        let response = GraphQLResponse::from(async_graphql::Response::from_errors(vec![error]));
        return (StatusCode::METHOD_NOT_ALLOWED, response).into_response();
    }
    GraphQLResponse::from(schema.execute(req).await).into_response()
}

/// Whether the operation `req` would run is a mutation. Unparseable documents
/// are left to the engine to report.
fn is_mutation(req: &Request) -> bool {
    let Ok(doc) = parse_query(&req.query) else {
        return false;
    };
    doc.operations.iter().any(|(name, op)| {
        let selected = match (&req.operation_name, name) {
            (Some(wanted), Some(name)) => wanted.as_str() == name.as_str(),
            (Some(_), None) => false,
            (None, _) => true,
        };
        selected && op.node.ty == OperationType::Mutation
    })
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn landing() -> impl IntoResponse {
    Html(LANDING_PAGE)
}

async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(RouteNotFound::new(&method, &uri)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::build_schema;
    use crate::storage::UserRepository;
    use axum::body::Body;
    use axum::http::{Request, header};
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(build_schema(Arc::new(UserRepository::seeded())))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn post_graphql(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(GRAPHQL_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();
        let (status, _, body) = send(app(), request).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_landing_page_is_html() {
        let (status, content_type, body) = send(app(), get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains("href=\"/graphiql\""));
    }

    #[tokio::test]
    async fn test_landing_page_ignores_query_and_headers() {
        let request = Request::builder()
            .uri("/?foo=bar")
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap();
        let (status, content_type, _) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_graphiql_is_served() {
        let (status, content_type, body) = send(app(), get_request(GRAPHIQL_PATH)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains("/graphql"));
    }

    #[tokio::test]
    async fn test_post_hello() {
        let (status, body) = post_graphql(json!({ "query": "{ hello }" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": { "hello": "Hello from Mercurius!" } }));
    }

    #[tokio::test]
    async fn test_post_user_found_and_missing() {
        let (_, body) =
            post_graphql(json!({ "query": "{ user(id: \"2\") { name email } }" })).await;
        assert_eq!(
            body,
            json!({ "data": { "user": { "name": "Bob", "email": "bob@example.com" } } })
        );

        let (_, body) = post_graphql(json!({ "query": "{ user(id: \"99\") { name } }" })).await;
        assert_eq!(body, json!({ "data": { "user": null } }));
    }

    #[tokio::test]
    async fn test_post_with_variables() {
        let (status, body) = post_graphql(json!({
            "query": "query($id: ID!) { user(id: $id) { name } }",
            "variables": { "id": "1" }
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": { "user": { "name": "Alice" } } }));
    }

    #[tokio::test]
    async fn test_post_send_message() {
        let (status, body) = post_graphql(json!({
            "query": "mutation { sendMessage(message: \"hi\") { message timestamp } }"
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["sendMessage"]["message"], "hi");
        let ts = body["data"]["sendMessage"]["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[tokio::test]
    async fn test_validation_error_is_still_200() {
        let (status, body) = post_graphql(json!({ "query": "{ nope }" })).await;
        assert_eq!(status, StatusCode::OK);
        let errors = body["errors"].as_array().unwrap();
        assert!(!errors.is_empty());
        assert!(errors[0]["message"].is_string());
        assert!(errors[0]["locations"].is_array());
    }

    #[tokio::test]
    async fn test_unmatched_route_is_structured_404() {
        let (status, content_type, body) = send(app(), get_request("/nonexistent")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(content_type.starts_with("application/json"));
        let body: RouteNotFound = serde_json::from_str(&body).unwrap();
        assert_eq!(body.message, "Route GET:/nonexistent not found");
        assert_eq!(body.error, "Not Found");
        assert_eq!(body.status_code, 404);
    }

    #[tokio::test]
    async fn test_unmatched_route_keeps_query_string() {
        let (status, _, body) = send(app(), get_request("/missing?x=1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: RouteNotFound = serde_json::from_str(&body).unwrap();
        assert_eq!(body.message, "Route GET:/missing?x=1 not found");
    }

    fn request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_wrong_method_on_known_path_is_structured_404() {
        for (method, path) in [("POST", "/"), ("DELETE", GRAPHIQL_PATH), ("PUT", GRAPHQL_PATH)] {
            let (status, content_type, body) = send(app(), request(method, path)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, path);
            assert!(content_type.starts_with("application/json"));
            let body: RouteNotFound = serde_json::from_str(&body).unwrap();
            assert_eq!(body.message, format!("Route {}:{} not found", method, path));
            assert_eq!(body.status_code, 404);
        }
    }

    #[tokio::test]
    async fn test_get_graphql_executes_query() {
        let (status, content_type, body) =
            send(app(), get_request("/graphql?query=%7B%20hello%20%7D")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("application/json"));
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body, json!({ "data": { "hello": "Hello from Mercurius!" } }));
    }

    #[tokio::test]
    async fn test_get_graphql_rejects_mutation() {
        let uri = "/graphql?query=mutation%20%7B%20sendMessage(message%3A%20%22hi%22)%20%7B%20message%20%7D%20%7D";
        let (status, _, body) = send(app(), get_request(uri)).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(body["errors"][0]["message"]
            .as_str()
            .unwrap()
            .contains("POST"));
    }

    #[test]
    fn test_is_mutation_follows_operation_name() {
        let doc = "query Q { hello } mutation M { sendMessage(message: \"x\") { message } }";
        assert!(is_mutation(&async_graphql::Request::new(doc)));
        assert!(!is_mutation(&async_graphql::Request::new(doc).operation_name("Q")));
        assert!(is_mutation(&async_graphql::Request::new(doc).operation_name("M")));
        assert!(!is_mutation(&async_graphql::Request::new("{ hello }")));
        assert!(!is_mutation(&async_graphql::Request::new("{ hello")));
    }

    #[tokio::test]
    async fn test_run_server_reports_bind_failure() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();
        let config = ServerConfig {
            host: crate::config::LOCAL_HOST,
            port,
        };

        let err = run_server(build_schema(Arc::new(UserRepository::seeded())), config)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Bind { .. }));
        assert!(err.to_string().contains(&port.to_string()));
    }
}
