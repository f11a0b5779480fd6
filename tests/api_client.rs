//! Transport-layer tests against a real loopback backend serving the
//! same JSON shapes the production API returns.

use std::net::SocketAddr;
use std::path::PathBuf;

use warp::http::StatusCode;
use warp::Filter;

use rentals_cli::api::{self, ApiClient, ApiError};
use rentals_cli::config::AppConfig;
use rentals_cli::gate::{self, Action};
use rentals_cli::model::{BookingStatus, Role};
use rentals_cli::session::Session;

async fn spawn_backend() -> SocketAddr {
    let login = warp::path!("api" / "users" / "login")
        .and(warp::post())
        .and(warp::body::json())
        .map(|body: serde_json::Value| {
            if body["email"] == "ben@example.com" && body["password"] == "secret1" {
                warp::reply::with_status(
                    warp::reply::json(&serde_json::json!({
                        "token": "cafef00d",
                        "role": "customer",
                        "userId": "u1"
                    })),
                    StatusCode::OK,
                )
            } else {
                warp::reply::with_status(
                    warp::reply::json(&serde_json::json!({"msg": "Invalid credentials"})),
                    StatusCode::UNAUTHORIZED,
                )
            }
        });

    let bookings = warp::path!("api" / "bookings")
        .and(warp::get())
        .and(warp::header::optional::<String>("authorization"))
        .map(|auth: Option<String>| match auth.as_deref() {
            Some("Bearer cafef00d") => warp::reply::with_status(
                warp::reply::json(&serde_json::json!([
                    {"_id": "b1", "status": "pending"},
                    // Legacy status spelling and a field this client
                    // does not model; both must deserialize.
                    {"_id": "b2", "status": "confirmed", "legacyField": 7}
                ])),
                StatusCode::OK,
            ),
            _ => warp::reply::with_status(
                warp::reply::json(&serde_json::json!({"msg": "No token, authorization denied"})),
                StatusCode::UNAUTHORIZED,
            ),
        });

    let cancel = warp::path!("api" / "bookings" / String / "cancel")
        .and(warp::put())
        .map(|id: String| {
            warp::reply::json(&serde_json::json!({"_id": id, "status": "cancelled"}))
        });

    let broken = warp::path!("api" / "owner" / "earnings")
        .and(warp::get())
        .map(|| {
            warp::reply::with_status(
                warp::reply::html("<html>gateway error</html>"),
                StatusCode::BAD_GATEWAY,
            )
        });

    let routes = login.or(bookings).or(cancel).or(broken);
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

fn config_for(addr: SocketAddr) -> AppConfig {
    AppConfig {
        api_base_url: format!("http://{addr}/api"),
        session_file: PathBuf::from("/tmp/rentals-cli-test-session.json"),
        display_timezone: None,
    }
}

fn session() -> Session {
    Session {
        token: "cafef00d".to_string(),
        role: Role::Customer,
        user_id: "u1".to_string(),
    }
}

#[tokio::test]
async fn login_returns_token_and_role() {
    let addr = spawn_backend().await;
    let api = ApiClient::new(&config_for(addr), None);

    let auth = api::users::login(&api, "ben@example.com".into(), "secret1".into())
        .await
        .unwrap();
    assert_eq!(auth.token, "cafef00d");
    assert_eq!(auth.role, Role::Customer);
    assert_eq!(auth.user_id, "u1");
}

#[tokio::test]
async fn rejected_login_surfaces_backend_message() {
    let addr = spawn_backend().await;
    let api = ApiClient::new(&config_for(addr), None);

    let err = api::users::login(&api, "ben@example.com".into(), "wrong".into())
        .await
        .unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn bearer_token_is_attached_and_statuses_decode() {
    let addr = spawn_backend().await;
    let api = ApiClient::new(&config_for(addr), Some(&session()));

    let bookings = api::bookings::mine(&api).await.unwrap();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].status, BookingStatus::Pending);
    // "confirmed" from the older backend maps onto the canonical status.
    assert_eq!(bookings[1].status, BookingStatus::PickupConfirmed);

    // And the freshly fetched records drive the gate directly.
    assert_eq!(
        gate::permitted_actions(&bookings[0]),
        vec![Action::CancelBooking]
    );
    assert_eq!(
        gate::permitted_actions(&bookings[1]),
        vec![Action::ReportBefore]
    );
}

#[tokio::test]
async fn missing_token_is_denied_by_backend() {
    let addr = spawn_backend().await;
    let api = ApiClient::new(&config_for(addr), None);

    let err = api::bookings::mine(&api).await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "No token, authorization denied");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn mutation_returns_refreshed_record() {
    let addr = spawn_backend().await;
    let api = ApiClient::new(&config_for(addr), Some(&session()));

    let updated = api::bookings::cancel(&api, "b1").await.unwrap();
    assert_eq!(updated.id, "b1");
    assert_eq!(updated.status, BookingStatus::Cancelled);
    assert!(gate::permitted_actions(&updated).is_empty());
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_reason_phrase() {
    let addr = spawn_backend().await;
    let api = ApiClient::new(&config_for(addr), Some(&session()));

    let err = api::owner::earnings(&api).await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("unexpected error: {other}"),
    }
}
