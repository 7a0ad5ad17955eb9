//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

async fn register_and_login(server: &TestServer) -> (Credentials, TokenPairResponse) {
    let credentials = Credentials::unique();

    let response = server.post("/register", &credentials).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post("/login", &credentials).await.unwrap();
    let tokens: TokenPairResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (credentials, tokens)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();

    let response = server.post("/register", &credentials).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.username, credentials.username);
    assert!(!user.id.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();

    let response = server.post("/register", &credentials).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post("/register", &credentials).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.message, "That username is already in use");
}

#[tokio::test]
async fn test_concurrent_registration_single_winner() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();

    let (first, second) = tokio::join!(
        server.post("/register", &credentials),
        server.post("/register", &credentials)
    );
    let mut statuses = vec![
        first.unwrap().status().as_u16(),
        second.unwrap().status().as_u16(),
    ];
    statuses.sort_unstable();

    assert_eq!(statuses, vec![200, 409]);
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = register_and_login(&server).await;

    assert!(!tokens.access_token.is_empty());
    assert!(!tokens.refresh_token.is_empty());
    assert_eq!(tokens.token_type, "Bearer");
    assert!(tokens.expires_in > 0);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (credentials, _) = register_and_login(&server).await;

    let response = server
        .post("/login", &credentials.with_password("secret124"))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.message, "Invalid credentials");

    let response = server.post("/login", &Credentials::unique()).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.message, "Invalid credentials");
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = register_and_login(&server).await;

    let response = server
        .post_empty_auth("/refresh", &tokens.refresh_token)
        .await
        .unwrap();
    let refreshed: AccessTokenResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!refreshed.access_token.is_empty());
    assert_eq!(refreshed.token_type, "Bearer");
    assert_eq!(refreshed.expires_in, tokens.expires_in);

    let response = server
        .post_empty_auth("/refresh", &tokens.access_token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.code, "WRONG_TOKEN_KIND");
}

// ============================================================================
// Recipe Tests
// ============================================================================

#[tokio::test]
async fn test_protected_route_requires_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let path = format!("/recipe/{}", unique_recipe_name());

    let response = server.get(&path).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.code, "MISSING_TOKEN");
}

#[tokio::test]
async fn test_recipe_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = register_and_login(&server).await;
    let token = &tokens.access_token;
    let name = unique_recipe_name();
    let path = format!("/recipe/{name}");

    let response = server
        .post_auth(&path, token, &RecipeRequest::full("water", "boil"))
        .await
        .unwrap();
    let created: RecipeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created.name, name);

    let response = server
        .post_auth(&path, token, &RecipeRequest::full("water", "boil"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .put_auth(&path, token, &RecipeRequest::full("water, salt", "boil longer"))
        .await
        .unwrap();
    let updated: RecipeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.ingredients, "water, salt");
    assert_eq!(updated.directions, "boil longer");

    let response = server.get("/recipes").await.unwrap();
    let list: RecipeListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(list.recipes.iter().any(|r| r.name == name));

    let response = server.delete_auth(&path, token).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, format!("The recipe for {name} has been deleted."));

    let response = server.get_auth(&path, token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_recipe_requires_both_fields() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = register_and_login(&server).await;
    let path = format!("/recipe/{}", unique_recipe_name());

    let body = RecipeRequest {
        ingredients: Some("flour".to_string()),
        directions: None,
    };
    let response = server
        .post_auth(&path, &tokens.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
