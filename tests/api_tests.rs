use edrs_portal::{AppConfig, AppState, create_router};
use reqwest::{StatusCode, redirect::Policy};
use tokio::net::TcpListener;

async fn spawn_app() -> String {
    let router = create_router(AppState {
        config: AppConfig::default(),
    });

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_health_check() {
    let address = spawn_app().await;
    let response = reqwest::get(format!("{address}/health"))
        .await
        .expect("req fail");
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_login_then_navigate() {
    let address = spawn_app().await;
    let client = reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .unwrap();

    // Unauthenticated navigation is redirected.
    let response = client
        .get(format!("{address}/dashboard"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = client
        .post(format!("{address}/login"))
        .form(&[("email", "pm@example.com"), ("role", "PM")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookie = response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .collect::<Vec<_>>()
        .join("; ");

    let dashboard = client
        .get(format!("{address}/dashboard"))
        .header(reqwest::header::COOKIE, &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(dashboard.status(), StatusCode::OK);

    let denied = client
        .get(format!("{address}/super-admin"))
        .header(reqwest::header::COOKIE, &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);
}
