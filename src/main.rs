mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    domain::repositories::activity_repository::ActivityRepository,
    infrastructure::{activity_seed, in_memory_activity_repository::InMemoryActivityRepository},
    presentation::handlers::{
        activity_handler::create_activity_router, static_handler::create_static_router,
    },
    usecase::{
        list_activities_usecase::ListActivitiesUsecase, signup_usecase::SignupUsecase,
        unregister_usecase::UnregisterUsecase,
    },
};

const DEFAULT_LOG_FILTER: &str = "activity_signup=info,tower_http=info";

/// Wire every route against one shared repository.
fn create_app<R>(activity_repository: R, static_dir: impl AsRef<Path>) -> Router
where
    R: ActivityRepository + Send + Sync + 'static + Clone,
{
    let list_activities_usecase = ListActivitiesUsecase::new(activity_repository.clone());
    let signup_usecase = SignupUsecase::new(activity_repository.clone());
    let unregister_usecase = UnregisterUsecase::new(activity_repository);

    Router::new()
        .merge(create_static_router(static_dir))
        .merge(create_activity_router(
            list_activities_usecase,
            signup_usecase,
            unregister_usecase,
        ))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let activities = match &config.activities_file {
        Some(path) => {
            info!(path = %path.display(), "loading activities from file");
            activity_seed::load_from_file(path)?
        }
        None => activity_seed::default_activities(),
    };
    info!(count = activities.len(), "activity store ready");

    let activity_repository = InMemoryActivityRepository::new(activities);
    let app = create_app(activity_repository, &config.static_dir).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.addr()).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use http_body_util::BodyExt;
    use rstest::*;
    use tower::ServiceExt;

    use crate::{
        create_app,
        domain::{
            models::activity::{ActivityName, Email},
            repositories::activity_repository::ActivityRepository,
        },
        infrastructure::{
            activity_seed::default_activities,
            in_memory_activity_repository::InMemoryActivityRepository,
        },
        presentation::handlers::activity_handler::{
            ActivitiesResponse, ActivityInfo, ErrorResponse, MessageResponse,
        },
    };

    const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

    struct TestApp {
        router: Router,
        repository: InMemoryActivityRepository,
    }

    impl TestApp {
        async fn participants(&self, activity_name: &str) -> Vec<String> {
            let activities = self.repository.find_all().await.unwrap();
            activities[&ActivityName::new(activity_name)]
                .participants()
                .iter()
                .map(|email| email.as_str().to_string())
                .collect()
        }
    }

    #[fixture]
    async fn test_app() -> TestApp {
        // every test owns a freshly seeded store
        let repository = InMemoryActivityRepository::new(default_activities());
        let router = create_app(repository.clone(), STATIC_DIR);
        TestApp { router, repository }
    }

    /// # Description
    ///
    /// General request helper for the activity endpoints
    async fn send(app: &TestApp, method: &str, uri: &str) -> Response {
        app.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    fn participant_uri(activity_name: &str, action: &str, email: &str) -> String {
        format!(
            "/activities/{}/{}?email={}",
            activity_name.replace(' ', "%20"),
            action,
            email.replace('@', "%40")
        )
    }

    async fn signup(app: &TestApp, activity_name: &str, email: &str) -> Response {
        send(app, "POST", &participant_uri(activity_name, "signup", email)).await
    }

    async fn unregister(app: &TestApp, activity_name: &str, email: &str) -> Response {
        send(app, "POST", &participant_uri(activity_name, "unregister", email)).await
    }

    async fn json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    // List activities

    #[rstest]
    #[tokio::test]
    async fn test_get_activities_positive(#[future] test_app: TestApp) {
        let app = test_app.await;

        let response = send(&app, "GET", "/activities").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            mime::APPLICATION_JSON.as_ref()
        );
        let activities: HashMap<String, ActivityInfo> = json(response).await;
        for name in default_activities().keys() {
            assert!(activities.contains_key(name.as_str()), "missing {name}");
        }
        let chess = &activities["Chess Club"];
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_activities_keeps_seed_order(#[future] test_app: TestApp) {
        let app = test_app.await;

        let response = send(&app, "GET", "/activities").await;
        let activities: ActivitiesResponse = json(response).await;

        let names: Vec<&str> = activities.keys().map(String::as_str).collect();
        let expected: Vec<String> = default_activities()
            .keys()
            .map(|name| name.as_str().to_string())
            .collect();
        assert_eq!(names, expected);
    }

    // Signup

    #[rstest]
    #[tokio::test]
    async fn test_signup_positive(#[future] test_app: TestApp) {
        let app = test_app.await;
        let email = "test@student.edu";

        let response = signup(&app, "Chess Club", email).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = json(response).await;
        assert!(body.message.contains("Signed up"));
        assert_eq!(body.message, "Signed up test@student.edu for Chess Club");

        let participants = app.participants("Chess Club").await;
        assert_eq!(participants.iter().filter(|p| *p == email).count(), 1);
        assert_eq!(participants.last().map(String::as_str), Some(email));
    }

    #[rstest]
    #[tokio::test]
    async fn test_signup_duplicate_negative(#[future] test_app: TestApp) {
        let app = test_app.await;
        let before = app.participants("Chess Club").await;

        let response = signup(&app, "Chess Club", "michael@mergington.edu").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = json(response).await;
        assert_eq!(body.detail, "Student is already signed up");
        assert_eq!(app.participants("Chess Club").await, before);
    }

    #[rstest]
    #[tokio::test]
    async fn test_signup_not_found_negative(#[future] test_app: TestApp) {
        let app = test_app.await;

        let response = signup(&app, "Nonexistent", "a@b.com").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = json(response).await;
        assert_eq!(body.detail, "Activity not found");
    }

    #[rstest]
    #[tokio::test]
    async fn test_signup_twice_keeps_single_entry(#[future] test_app: TestApp) {
        let app = test_app.await;
        let email = "twice@mergington.edu";

        let first = signup(&app, "Art Club", email).await;
        let second = signup(&app, "Art Club", email).await;

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        let participants = app.participants("Art Club").await;
        assert_eq!(participants.iter().filter(|p| *p == email).count(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_signup_missing_email_negative(#[future] test_app: TestApp) {
        let app = test_app.await;

        let response = send(&app, "POST", "/activities/Chess%20Club/signup").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[tokio::test]
    async fn test_signup_is_isolated_per_store(#[future] test_app: TestApp) {
        let app = test_app.await;
        signup(&app, "Chess Club", "isolated@mergington.edu").await;

        let fresh = InMemoryActivityRepository::new(default_activities());
        let activities = fresh.find_all().await.unwrap();
        assert!(
            !activities[&ActivityName::new("Chess Club")]
                .is_signed_up(&Email::new("isolated@mergington.edu"))
        );
    }

    // Unregister

    #[rstest]
    #[tokio::test]
    async fn test_unregister_positive(#[future] test_app: TestApp) {
        let app = test_app.await;
        let email = "michael@mergington.edu";
        assert!(app.participants("Chess Club").await.iter().any(|p| p == email));

        let response = unregister(&app, "Chess Club", email).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = json(response).await;
        assert!(body.message.contains("Unregistered"));
        assert!(!app.participants("Chess Club").await.iter().any(|p| p == email));
    }

    #[rstest]
    #[tokio::test]
    async fn test_unregister_not_registered_negative(#[future] test_app: TestApp) {
        let app = test_app.await;
        let before = app.participants("Chess Club").await;

        let response = unregister(&app, "Chess Club", "nobody@mergington.edu").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = json(response).await;
        assert_eq!(body.detail, "Student is not signed up for this activity");
        assert_eq!(app.participants("Chess Club").await, before);
    }

    #[rstest]
    #[tokio::test]
    async fn test_unregister_not_found_negative(#[future] test_app: TestApp) {
        let app = test_app.await;

        let response = unregister(&app, "Nope", "a@b.com").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn test_signup_after_unregister_positive(#[future] test_app: TestApp) {
        let app = test_app.await;
        let email = "daniel@mergington.edu";

        assert_eq!(
            unregister(&app, "Chess Club", email).await.status(),
            StatusCode::OK
        );
        assert_eq!(signup(&app, "Chess Club", email).await.status(), StatusCode::OK);

        assert_eq!(
            app.participants("Chess Club").await,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    // Static front end

    #[rstest]
    #[tokio::test]
    async fn test_root_redirects_to_index(#[future] test_app: TestApp) {
        let app = test_app.await;

        let response = send(&app, "GET", "/").await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/static/index.html");
    }

    #[rstest]
    #[tokio::test]
    async fn test_static_index_is_served(#[future] test_app: TestApp) {
        let app = test_app.await;

        let response = send(&app, "GET", "/static/index.html").await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with(mime::TEXT_HTML.as_ref()));
    }

    #[rstest]
    #[tokio::test]
    async fn test_static_missing_file_negative(#[future] test_app: TestApp) {
        let app = test_app.await;

        let response = send(&app, "GET", "/static/missing.js").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
