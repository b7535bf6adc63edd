use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::Filter;
use spaces_cli::enums::api_error::ApiError;
use spaces_cli::enums::editor_action::EditorAction;
use spaces_cli::services::editor_controller::EditorController;
use spaces_cli::services::github_client::GitHubClient;
use spaces_cli::services::http_client::SpacesHttpClient;
use spaces_cli::services::sites_client::SitesClient;
use spaces_cli::structs::github::create_repo_request::CreateRepoRequest;
use spaces_cli::structs::github::push_request::PushRequest;
use spaces_cli::traits::github_api::GitHubApi;
use spaces_cli::traits::sites_api::SitesApi;
use spaces_cli::workers::editor_session::EditorSession;
use crate::common::{editor_config, RecordingClipboard, RecordingNotifier, RecordingPreview};

type Recorded = Arc<Mutex<Vec<(Option<String>, Value)>>>;

/// Serves the routes on an ephemeral local port and yields its address.
macro_rules! serve {
    ($routes:expr) => {{
        let (addr, server) = warp::serve($routes).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        addr
    }};
}

fn http(addr: SocketAddr) -> SpacesHttpClient {
    SpacesHttpClient::with_base_url(format!("http://{addr}")).with_session_cookie("s3cret")
}

fn recording() -> (Recorded, impl Filter<Extract = (Recorded,), Error = std::convert::Infallible> + Clone) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let handle = recorded.clone();
    (recorded, warp::any().map(move || handle.clone()))
}

#[tokio::test]
async fn save_puts_the_content_with_the_session_cookie() {
    let (recorded, with_recorded) = recording();
    let route = warp::put()
        .and(warp::path!("api" / "sites" / "abc123" / "files" / "styles.css"))
        .and(warp::header::optional::<String>("cookie"))
        .and(warp::body::json())
        .and(with_recorded)
        .map(|cookie: Option<String>, body: Value, recorded: Recorded| {
            recorded.lock().unwrap().push((cookie, body));
            warp::reply::json(&json!({ "success": true }))
        });
    let sites = SitesClient::new(http(serve!(route)));

    let result = sites.save_file("abc123", "styles.css", "body { margin: 0; }").await;

    tokio_test::assert_ok!(result);
    assert_eq!(
        recorded.lock().unwrap().clone(),
        vec![(
            Some("session=s3cret".to_string()),
            json!({ "content": "body { margin: 0; }" })
        )]
    );
}

#[tokio::test]
async fn rejected_save_surfaces_the_status_and_message() {
    let route = warp::put()
        .and(warp::path!("api" / "sites" / "abc123" / "files" / "styles.css"))
        .map(|| {
            warp::reply::with_status(
                warp::reply::json(&json!({ "error": "Forbidden" })),
                StatusCode::FORBIDDEN,
            )
        });
    let sites = SitesClient::new(http(serve!(route)));

    let result = sites.save_file("abc123", "styles.css", "x").await;

    assert_eq!(result, Err(ApiError::status(403, Some("Forbidden".to_string()))));
}

#[tokio::test]
async fn error_without_a_json_body_has_no_message() {
    let route = warp::any().map(|| warp::reply::with_status("boom", StatusCode::INTERNAL_SERVER_ERROR));
    let sites = SitesClient::new(http(serve!(route)));

    let result = sites.deploy("abc123").await;

    assert_eq!(result, Err(ApiError::status(500, None)));
}

#[tokio::test]
async fn fetch_returns_the_file_content() {
    let route = warp::get()
        .and(warp::path!("api" / "sites" / "abc123" / "files" / String))
        .map(|name: String| match name.as_str() {
            "index.html" => warp::reply::json(&json!({ "content": "<h1>Hi</h1>" })),
            _ => warp::reply::json(&json!({})),
        });
    let sites = SitesClient::new(http(serve!(route)));

    assert_eq!(sites.fetch_file("abc123", "index.html").await.unwrap(), "<h1>Hi</h1>");
    assert_eq!(sites.fetch_file("abc123", "script.js").await.unwrap(), "");
}

#[tokio::test]
async fn deploy_and_create_read_their_responses() {
    let deploy = warp::post()
        .and(warp::path!("api" / "sites" / "abc123" / "deploy"))
        .map(|| warp::reply::json(&json!({ "url": "https://abc123.spaces.app" })));
    let create = warp::post()
        .and(warp::path!("api" / "sites"))
        .and(warp::body::json())
        .map(|body: Value| {
            assert_eq!(body, json!({ "name": "Portfolio" }));
            warp::reply::json(&json!({ "site_id": 42 }))
        });
    let sites = SitesClient::new(http(serve!(deploy.or(create))));

    assert_eq!(sites.deploy("abc123").await.unwrap(), "https://abc123.spaces.app");
    assert_eq!(sites.create_site("Portfolio").await.unwrap(), "42");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let sites = SitesClient::new(http(addr));
    let result = sites.fetch_file("abc123", "index.html").await;

    assert!(matches!(result, Err(ApiError::Network(_))), "{result:?}");
}

#[tokio::test]
async fn github_calls_pass_the_site_id_as_a_query_parameter() {
    let (recorded, with_recorded) = recording();
    let repo_info = warp::get()
        .and(warp::path!("api" / "github" / "repo-info"))
        .and(warp::query::<HashMap<String, String>>())
        .map(|query: HashMap<String, String>| {
            assert_eq!(query.get("site_id").map(String::as_str), Some("42"));
            warp::reply::json(&json!({
                "repo_name": "site-42",
                "repo_url": "https://github.com/octo/site-42"
            }))
        });
    let push = warp::post()
        .and(warp::path!("api" / "github" / "push"))
        .and(warp::query::<HashMap<String, String>>())
        .and(warp::body::json())
        .and(with_recorded)
        .map(|query: HashMap<String, String>, body: Value, recorded: Recorded| {
            recorded.lock().unwrap().push((query.get("site_id").cloned(), body));
            warp::reply::json(&json!({ "success": true }))
        });
    let github = GitHubClient::new(http(serve!(repo_info.or(push))));

    let info = github.repo_info("42").await.unwrap();
    assert_eq!(info.repo_name, "site-42");

    github
        .push("42", &PushRequest { message: "Update hero".to_string() })
        .await
        .unwrap();
    assert_eq!(
        recorded.lock().unwrap().clone(),
        vec![(Some("42".to_string()), json!({ "message": "Update hero" }))]
    );
}

#[tokio::test]
async fn github_errors_keep_the_server_message() {
    let create = warp::post()
        .and(warp::path!("api" / "github" / "create-repo"))
        .map(|| {
            warp::reply::with_status(
                warp::reply::json(&json!({ "message": "Repository already exists" })),
                StatusCode::UNPROCESSABLE_ENTITY,
            )
        });
    let status = warp::get()
        .and(warp::path!("api" / "github" / "status"))
        .map(|| warp::reply::with_status(warp::reply::json(&json!({})), StatusCode::UNAUTHORIZED));
    let github = GitHubClient::new(http(serve!(create.or(status))));

    let created = github
        .create_repo(
            "42",
            &CreateRepoRequest {
                name: "site".to_string(),
                description: String::new(),
                private: true,
            },
        )
        .await;
    assert_eq!(
        created.unwrap_err().server_message(),
        Some("Repository already exists")
    );

    let status = github.status().await.unwrap_err();
    assert!(status.is_unauthorized());
}

#[test]
fn login_url_points_at_the_oauth_entry() {
    let github = GitHubClient::new(SpacesHttpClient::with_base_url("http://localhost:5000/"));
    assert_eq!(github.login_url(), "http://localhost:5000/api/github/login");
}

/// Saves `styles.css` of site `abc123` through the real client against a
/// backend answering `status`, and returns the notifications shown.
async fn save_styles_against(status: StatusCode) -> Arc<RecordingNotifier> {
    let route = warp::put()
        .and(warp::path!("api" / "sites" / "abc123" / "files" / "styles.css"))
        .map(move || warp::reply::with_status(warp::reply::json(&json!({})), status));
    let notifier = Arc::new(RecordingNotifier::default());
    let mut session = EditorSession::new(
        EditorController::new("abc123", &editor_config()),
        Arc::new(SitesClient::new(http(serve!(route)))),
        notifier.clone(),
        Arc::new(RecordingPreview::default()),
        Arc::new(RecordingClipboard::default()),
    );

    session.dispatch(EditorAction::SwitchFile("styles.css".to_string()));
    session.dispatch(EditorAction::Edit("h1 { color: red; }".to_string()));
    session.dispatch(EditorAction::Save);
    session.settle().await;
    notifier
}

#[tokio::test]
async fn saving_over_http_reports_success() {
    let notifier = save_styles_against(StatusCode::OK).await;

    assert_eq!(notifier.successes(), vec!["styles.css saved successfully"]);
    assert!(notifier.errors().is_empty());
}

#[tokio::test]
async fn saving_over_http_reports_a_non_2xx_answer() {
    let notifier = save_styles_against(StatusCode::INTERNAL_SERVER_ERROR).await;

    assert_eq!(notifier.errors(), vec!["Error saving styles.css"]);
    assert!(notifier.successes().is_empty());
}
