mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

async fn sign_up(app: &TestApp, email: &str, password: &str, name: &str) -> reqwest::Response {
    app.post("/api/auth/sign-up")
        .json(&json!({
            "email": email,
            "password": password,
            "name": name
        }))
        .send()
        .await
        .expect("Failed to execute request")
}

async fn login(app: &TestApp, email: &str, password: &str) -> reqwest::Response {
    app.post("/api/auth/login")
        .json(&json!({
            "email": email,
            "password": password
        }))
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn test_sign_up_success() {
    let app = TestApp::spawn().await;

    let response = sign_up(&app, "nicola@example.com", "pass_word!", "Nicola").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Sign up successful");
    assert_eq!(body["user"]["name"], "Nicola");
    assert_eq!(body["user"]["email"], "nicola@example.com");
    assert!(body["user"]["id"].is_string());
    assert!(body["user"]["createdAt"].is_string());
    assert!(body["user"]["updatedAt"].is_string());
    // The hash must never leave the service
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_sign_up_duplicate_email() {
    let app = TestApp::spawn().await;

    let first = sign_up(&app, "nicola@example.com", "pass_word!", "Nicola").await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = sign_up(&app, "nicola@example.com", "other_password", "Nicola2").await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = second.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "User already exists with this email");
}

#[tokio::test]
async fn test_sign_up_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/sign-up")
        .json(&json!({ "email": "nicola@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Email, password, and name are required");
}

#[tokio::test]
async fn test_sign_up_invalid_email() {
    let app = TestApp::spawn().await;

    let response = sign_up(&app, "not-an-email", "pass_word!", "Nicola").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid email format");
}

#[tokio::test]
async fn test_sign_up_short_password() {
    let app = TestApp::spawn().await;

    let response = sign_up(&app, "nicola@example.com", "ab", "Nicola").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Password must be at least 6 characters");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    sign_up(&app, "nicola@example.com", "pass_word!", "Nicola").await;

    let response = login(&app, "nicola@example.com", "pass_word!").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Login successful");
    assert!(body["token"].is_string());
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "nicola@example.com");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    sign_up(&app, "nicola@example.com", "Correct_Password!", "Nicola").await;

    let response = login(&app, "nicola@example.com", "Wrong_Password!").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_unknown_email_same_message() {
    let app = TestApp::spawn().await;

    let response = login(&app, "nobody@example.com", "pass_word!").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    // Identical message to the wrong-password case
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "email": "nicola@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Email and password are required");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/charging-stations")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_token_is_accepted_by_gate() {
    let app = TestApp::spawn().await;

    sign_up(&app, "nicola@example.com", "pass_word!", "Nicola").await;
    let login_body: serde_json::Value = login(&app, "nicola@example.com", "pass_word!")
        .await
        .json()
        .await
        .expect("Failed to parse response");
    let token = login_body["token"].as_str().unwrap();

    let response = app
        .get_authenticated("/api/charging-stations", token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_station_crud_workflow() {
    let app = TestApp::spawn().await;

    // 1. Sign up and login
    sign_up(&app, "nicola@example.com", "pass_word!", "Nicola").await;
    let login_body: serde_json::Value = login(&app, "nicola@example.com", "pass_word!")
        .await
        .json()
        .await
        .expect("Failed to parse response");
    let token = login_body["token"].as_str().unwrap().to_string();

    // 2. Create a station
    let create_response = app
        .post_authenticated("/api/charging-stations", &token)
        .json(&json!({
            "name": "Plaza",
            "latitude": 45.5,
            "longitude": -122.6,
            "status": "active",
            "powerOutput": 50.0,
            "connectorType": "CCS"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(create_response.status(), StatusCode::CREATED);

    let create_body: serde_json::Value = create_response
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(create_body["message"], "Charging station inserted");
    assert_eq!(create_body["data"]["name"], "Plaza");
    assert_eq!(create_body["data"]["status"], "active");
    let station_id = create_body["data"]["id"].as_str().unwrap().to_string();

    // 3. List stations
    let list_response = app
        .get_authenticated("/api/charging-stations", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(list_response.status(), StatusCode::OK);

    let list_body: serde_json::Value = list_response.json().await.expect("Failed to parse");
    let stations = list_body.as_array().expect("Expected array");
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0]["id"], station_id.as_str());

    // 4. Partial update: only the status changes
    let patch_response = app
        .patch_authenticated(&format!("/api/charging-stations/{}", station_id), &token)
        .json(&json!({ "status": "inactive" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(patch_response.status(), StatusCode::OK);

    let patch_body: serde_json::Value = patch_response.json().await.expect("Failed to parse");
    assert_eq!(patch_body["message"], "Charging station updated successfully");
    assert_eq!(patch_body["data"]["status"], "inactive");
    assert_eq!(patch_body["data"]["name"], "Plaza");

    // 5. Update of an unknown station is a 404
    let missing_id = uuid::Uuid::new_v4();
    let missing_response = app
        .patch_authenticated(&format!("/api/charging-stations/{}", missing_id), &token)
        .json(&json!({ "status": "active" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(missing_response.status(), StatusCode::NOT_FOUND);

    // 6. Delete
    let delete_response = app
        .delete_authenticated(&format!("/api/charging-stations/{}", station_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(delete_response.status(), StatusCode::OK);

    let delete_body: serde_json::Value = delete_response.json().await.expect("Failed to parse");
    assert_eq!(delete_body["message"], "Charging station deleted successfully");

    // 7. List is empty again
    let final_list: serde_json::Value = app
        .get_authenticated("/api/charging-stations", &token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse");
    assert_eq!(final_list.as_array().unwrap().len(), 0);
}
