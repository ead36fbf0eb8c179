//! User API integration tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test user_api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, test_token, TestServer,
};
use reqwest::StatusCode;

/// The default administrator seeded by the migrations
const SEEDED_ADMIN_ID: &str = "9e9f7320-d23d-4688-96c4-d92f76cac6cd";

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
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_list_users_requires_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_auth("/api/v1/users", "not.a.token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = test_token().unwrap();
    let request = CreateUserRequest::unique();

    let response = server
        .post_auth("/api/v1/users", &token, &request)
        .await
        .unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.username, request.username);
    assert_eq!(created.role, "user");
    assert_eq!(created.age, request.age);

    // Fetch it back
    let response = server
        .get_auth(&format!("/api/v1/users/{}", created.id), &token)
        .await
        .unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, request.name);
}

#[tokio::test]
async fn test_list_users_includes_created_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = test_token().unwrap();
    let request = CreateUserRequest::unique();

    let response = server
        .post_auth("/api/v1/users", &token, &request)
        .await
        .unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/v1/users", &token).await.unwrap();
    let listing: UserListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(listing.count > 0);
    assert_eq!(listing.count, listing.data.len() as u64);
    assert!(listing.data.iter().any(|u| u.id == created.id));
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = test_token().unwrap();

    let response = server
        .get_auth(
            "/api/v1/users/00000000-0000-0000-0000-000000000000",
            &token,
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "NOT_FOUND");
}

#[tokio::test]
async fn test_invalid_user_id_is_bad_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = test_token().unwrap();

    let response = server
        .get_auth("/api/v1/users/not-a-uuid", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_partial_update_reports_change_count() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = test_token().unwrap();

    let response = server
        .post_auth("/api/v1/users", &token, &CreateUserRequest::unique())
        .await
        .unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Change the name only
    let patch = UpdateUserRequest {
        name: Some("Renamed User".to_string()),
        ..UpdateUserRequest::default()
    };
    let response = server
        .patch_auth(&format!("/api/v1/users/{}", created.id), &token, &patch)
        .await
        .unwrap();
    let result: UpdateCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.updated, 1);

    // Verify the other fields survived
    let response = server
        .get_auth(&format!("/api/v1/users/{}", created.id), &token)
        .await
        .unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.name, "Renamed User");
    assert_eq!(fetched.username, created.username);
    assert_eq!(fetched.age, created.age);
}

#[tokio::test]
async fn test_update_missing_user_reports_zero() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = test_token().unwrap();

    let patch = UpdateUserRequest {
        name: Some("Nobody".to_string()),
        ..UpdateUserRequest::default()
    };
    let response = server
        .patch_auth(
            "/api/v1/users/00000000-0000-0000-0000-000000000000",
            &token,
            &patch,
        )
        .await
        .unwrap();
    let result: UpdateCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.updated, 0);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = test_token().unwrap();

    let response = server
        .post_auth("/api/v1/users", &token, &CreateUserRequest::unique())
        .await
        .unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // First delete removes the account
    let response = server
        .delete_auth(&format!("/api/v1/users/{}", created.id), &token)
        .await
        .unwrap();
    let result: DeleteCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.deleted, 1);

    // Second delete finds nothing
    let response = server
        .delete_auth(&format!("/api/v1/users/{}", created.id), &token)
        .await
        .unwrap();
    let result: DeleteCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.deleted, 0);

    // And the account is gone
    let response = server
        .get_auth(&format!("/api/v1/users/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_validation_rejects_short_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = test_token().unwrap();

    let mut request = CreateUserRequest::unique();
    request.username = "ab".to_string();

    let response = server
        .post_auth("/api/v1/users", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Admin Protection Tests
// ============================================================================

#[tokio::test]
async fn test_seeded_admin_cannot_be_deleted() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = test_token().unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/users/{SEEDED_ADMIN_ID}"), &token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "DELETE_READONLY_RESOURCE");

    // The admin is still there
    let response = server
        .get_auth(&format!("/api/v1/users/{SEEDED_ADMIN_ID}"), &token)
        .await
        .unwrap();
    let admin: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(admin.username, "admin");
    assert_eq!(admin.role, "admin");
}

#[tokio::test]
async fn test_seeded_admin_cannot_be_demoted() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = test_token().unwrap();

    let patch = UpdateUserRequest {
        role: Some("user".to_string()),
        ..UpdateUserRequest::default()
    };
    let response = server
        .patch_auth(&format!("/api/v1/users/{SEEDED_ADMIN_ID}"), &token, &patch)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "UPDATE_READONLY_RESOURCE");
}

#[tokio::test]
async fn test_seeded_admin_profile_can_be_updated() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = test_token().unwrap();

    // Renaming the admin's profile is allowed; only demotion and deletion are blocked
    let patch = UpdateUserRequest {
        name: Some("admin".to_string()),
        ..UpdateUserRequest::default()
    };
    let response = server
        .patch_auth(&format!("/api/v1/users/{SEEDED_ADMIN_ID}"), &token, &patch)
        .await
        .unwrap();
    let result: UpdateCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.updated, 1);
}
