use serde_json::json;

use crate::common::{TestApp, routes};

mod login {
    use super::*;

    #[tokio::test]
    async fn bootstrap_admin_can_log_in() {
        let app = TestApp::spawn().await;
        let client = TestApp::client();

        let res = app
            .post(
                &client,
                routes::LOGIN,
                &json!({"username": "admin", "password": "password123"}),
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["user"]["username"], "admin");
        assert_eq!(res.body["user"]["isAdmin"], true);

        let status = app.get(&client, routes::AUTH_STATUS).await;
        assert_eq!(status.body["authenticated"], true);
    }

    #[tokio::test]
    async fn wrong_password_is_401_and_issues_no_session() {
        let app = TestApp::spawn().await;
        let client = TestApp::client();

        let res = app
            .post(
                &client,
                routes::LOGIN,
                &json!({"username": "admin", "password": "wrong"}),
            )
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "INVALID_CREDENTIALS");

        let status = app.get(&client, routes::AUTH_STATUS).await;
        assert_eq!(status.body["authenticated"], false);
    }

    #[tokio::test]
    async fn unknown_username_gets_the_same_generic_401() {
        let app = TestApp::spawn().await;
        let client = TestApp::client();

        let wrong_password = app
            .post(
                &client,
                routes::LOGIN,
                &json!({"username": "admin", "password": "wrong"}),
            )
            .await;
        let unknown_user = app
            .post(
                &client,
                routes::LOGIN,
                &json!({"username": "nobody", "password": "password123"}),
            )
            .await;

        // No field disambiguation between the two failure causes.
        assert_eq!(unknown_user.status, 401);
        assert_eq!(unknown_user.body, wrong_password.body);
    }

    #[tokio::test]
    async fn empty_credentials_are_rejected_before_lookup() {
        let app = TestApp::spawn().await;
        let client = TestApp::client();

        let res = app
            .post(
                &client,
                routes::LOGIN,
                &json!({"username": "  ", "password": "password123"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn login_response_never_leaks_the_password_hash() {
        let app = TestApp::spawn().await;
        let client = TestApp::client();

        let res = app
            .post(
                &client,
                routes::LOGIN,
                &json!({"username": "admin", "password": "password123"}),
            )
            .await;

        assert_eq!(res.status, 200);
        assert!(res.body["user"].get("password").is_none());
        assert!(!res.text.contains("argon2"));
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    async fn logout_invalidates_the_session() {
        let app = TestApp::spawn().await;
        let client = TestApp::client();
        app.login_as(&client, "admin", "password123").await;

        let res = app.post_empty(&client, routes::LOGOUT).await;
        assert_eq!(res.status, 200);

        let status = app.get(&client, routes::AUTH_STATUS).await;
        assert_eq!(status.body["authenticated"], false);
    }

    #[tokio::test]
    async fn logout_without_a_session_still_succeeds() {
        let app = TestApp::spawn().await;
        let client = TestApp::client();

        let first = app.post_empty(&client, routes::LOGOUT).await;
        let second = app.post_empty(&client, routes::LOGOUT).await;

        assert_eq!(first.status, 200);
        assert_eq!(second.status, 200);
    }
}

mod status {
    use super::*;

    #[tokio::test]
    async fn anonymous_status_reports_unauthenticated() {
        let app = TestApp::spawn().await;
        let client = TestApp::client();

        let res = app.get(&client, routes::AUTH_STATUS).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["authenticated"], false);
        assert!(res.body.get("user").is_none());
    }

    #[tokio::test]
    async fn authenticated_status_includes_the_account() {
        let app = TestApp::spawn().await;
        let client = TestApp::client();
        app.login_as(&client, "admin", "password123").await;

        let res = app.get(&client, routes::AUTH_STATUS).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["authenticated"], true);
        assert_eq!(res.body["user"]["username"], "admin");
        assert!(res.body["user"].get("password").is_none());
    }
}
