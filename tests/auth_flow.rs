mod common;

use actix_web::{http::StatusCode, test};
use common::{client::{bearer, TestClient}, test_data, TestContext};
use intern_backend::types::user::DBUserCreate;
use serde_json::json;
use uuid::Uuid;

fn unique_name(prefix: &str) -> String {
    format!("{}{}", prefix, &Uuid::new_v4().simple().to_string()[..10])
}

#[tokio::test]
async fn test_signup_signin_me_flow() {
    println!("\n\n[+] Running test: test_signup_signin_me_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let username = unique_name("alice");
    let signup = test_data::sample_signup(&username);
    println!("[>] Signing up {}", signup.username);
    let req = test::TestRequest::post().uri("/auth/signup").set_json(&signup).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["username"], username.as_str());
    assert!(body.get("password_hash").is_none(), "hash must never leave the server");

    println!("[>] Signing in by username");
    let req = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(json!({"username": username, "password": "password123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");
    let token = body["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get().uri("/auth/me").insert_header(bearer(&token)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], signup.email.as_str());
    println!("[/] Test passed: signup, signin and /me agree.");
}

#[tokio::test]
async fn test_duplicate_signup_conflicts() {
    println!("\n\n[+] Running test: test_duplicate_signup_conflicts");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let signup = test_data::sample_signup(&unique_name("bob"));
    let req = test::TestRequest::post().uri("/auth/signup").set_json(&signup).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post().uri("/auth/signup").set_json(&signup).to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Second signup status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    println!("[/] Test passed: duplicate signup rejected.");
}

#[tokio::test]
async fn test_signin_failures() {
    println!("\n\n[+] Running test: test_signin_failures");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (user, _) = client.create_test_user().await.unwrap();

    let req = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(json!({"email": user.email, "password": "wrong"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(json!({"email": "nobody@test.com", "password": "password123"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(json!({"password": "password123"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    println!("[/] Test passed: bad credentials rejected.");
}

#[tokio::test]
async fn test_protected_routes_need_a_token() {
    println!("\n\n[+] Running test: test_protected_routes_need_a_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/auth/me").to_request();
    let resp = test::try_call_service(&app, req).await;
    let status = match resp {
        Ok(resp) => resp.status(),
        Err(e) => e.error_response().status(),
    };
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(bearer("not-a-jwt"))
        .to_request();
    let resp = test::try_call_service(&app, req).await;
    let status = match resp {
        Ok(resp) => resp.status(),
        Err(e) => e.error_response().status(),
    };
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: missing and malformed tokens rejected.");
}

#[tokio::test]
async fn test_malformed_signup_is_bad_request() {
    println!("\n\n[+] Running test: test_malformed_signup_is_bad_request");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    println!("[>] Broken JSON body");
    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    println!("[>] Wrong field types");
    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({"name": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    println!("[>] Path segment that is not a uuid");
    let (_, token) = client.create_test_user().await.unwrap();
    let req = test::TestRequest::get()
        .uri("/users/not-a-uuid")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    println!("[/] Test passed: malformed input answers 400.");
}

#[tokio::test]
async fn test_external_user_provisioning() {
    println!("\n\n[+] Running test: test_external_user_provisioning");
    let ctx = TestContext::new().await;

    let fresh = unique_name("ext");
    println!("[>] Provisioning a fresh identity {}@corp.com", fresh);
    let user = ctx.db
        .provision_external_user(&format!("{}@corp.com", fresh), Some("External Person"))
        .await
        .unwrap();
    assert_eq!(user.username, fresh);
    assert_eq!(user.name, "External Person");

    let taken = unique_name("taken");
    ctx.db.create_user(DBUserCreate {
        name: "Local Person".to_string(),
        username: taken.clone(),
        email: format!("{}@local.test", taken),
        password_hash: "x".to_string(),
    })
    .await
    .unwrap();

    println!("[>] Provisioning {}@corp.com while the username is taken", taken);
    let user = ctx.db
        .provision_external_user(&format!("{}@corp.com", taken), None)
        .await
        .unwrap();
    println!("[<] Got username {}", user.username);
    assert_ne!(user.username, taken);
    assert!(user.username.starts_with(&format!("{}_", taken)));
    assert_eq!(user.name, user.username);
    println!("[/] Test passed: colliding usernames get a suffix.");
}
