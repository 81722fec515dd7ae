mod common;

use actix_web::{http::StatusCode, test};
use common::{client::{bearer, TestClient}, test_data, TestContext};
use serde_json::json;

#[tokio::test]
async fn test_quiz_create_and_answer() {
    println!("\n\n[+] Running test: test_quiz_create_and_answer");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (owner, owner_token) = client.create_test_user().await.unwrap();
    let (member, member_token) = client.create_test_user().await.unwrap();
    let company = client.create_company(&owner).await;
    client.add_member(&company, &member).await;

    println!("[>] Owner creates quiz");
    let req = test::TestRequest::post()
        .uri(&format!("/quizzes/{}", company.id))
        .insert_header(bearer(&owner_token))
        .set_json(test_data::sample_quiz())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let quiz: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Quiz: {}", quiz);
    let quiz_id = quiz["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/quizzes/{}", company.id))
        .insert_header(bearer(&member_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);

    println!("[>] Member answers one of two questions right");
    let req = test::TestRequest::post()
        .uri(&format!("/quizzes/{}/answer", quiz_id))
        .insert_header(bearer(&member_token))
        .set_json(json!([[2], [1]]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["answered"], 2);
    assert_eq!(body["correct"], 1);

    println!("[>] Member answers both right");
    let req = test::TestRequest::post()
        .uri(&format!("/quizzes/{}/answer", quiz_id))
        .insert_header(bearer(&member_token))
        .set_json(json!([[2], [3, 1]]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["correct"], 2);

    let req = test::TestRequest::get()
        .uri(&format!("/quizzes/{}/result/{}", member.id, company.id))
        .insert_header(bearer(&owner_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["rating"], 0.75);

    let req = test::TestRequest::get()
        .uri(&format!("/quizzes/{}/result", owner.id))
        .insert_header(bearer(&owner_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: quiz scored and rated.");
}

#[tokio::test]
async fn test_quiz_rules() {
    println!("\n\n[+] Running test: test_quiz_rules");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (owner, owner_token) = client.create_test_user().await.unwrap();
    let (member, member_token) = client.create_test_user().await.unwrap();
    let (_, stranger_token) = client.create_test_user().await.unwrap();
    let company = client.create_company(&owner).await;
    client.add_member(&company, &member).await;

    println!("[>] Plain member may not create quizzes");
    let req = test::TestRequest::post()
        .uri(&format!("/quizzes/{}", company.id))
        .insert_header(bearer(&member_token))
        .set_json(test_data::sample_quiz())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    println!("[>] One question is not enough");
    let mut short = test_data::sample_quiz();
    short.questions.truncate(1);
    let req = test::TestRequest::post()
        .uri(&format!("/quizzes/{}", company.id))
        .insert_header(bearer(&owner_token))
        .set_json(&short)
        .to_request();
    let status = test::call_service(&app, req).await.status();
    assert!(status.is_client_error(), "got {}", status);

    let quiz = ctx.db.create_quiz(company.id, test_data::sample_quiz()).await.unwrap();

    println!("[>] Outsider answers");
    let req = test::TestRequest::post()
        .uri(&format!("/quizzes/{}/answer", quiz.id))
        .insert_header(bearer(&stranger_token))
        .set_json(json!([[2], [1, 3]]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    println!("[>] Outsider may still browse the company's quizzes");
    let req = test::TestRequest::get()
        .uri(&format!("/quizzes/{}", company.id))
        .insert_header(bearer(&stranger_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);

    println!("[>] Incomplete answers");
    let req = test::TestRequest::post()
        .uri(&format!("/quizzes/{}/answer", quiz.id))
        .insert_header(bearer(&member_token))
        .set_json(json!([[2]]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNPROCESSABLE_ENTITY);

    println!("[>] Owner updates and deletes");
    let req = test::TestRequest::patch()
        .uri(&format!("/quizzes/{}", quiz.id))
        .insert_header(bearer(&owner_token))
        .set_json(json!({"frequency": 3}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["frequency"], 3);

    let req = test::TestRequest::delete()
        .uri(&format!("/quizzes/{}", quiz.id))
        .insert_header(bearer(&owner_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
    assert!(ctx.db.get_quiz(quiz.id).await.is_err());
    println!("[/] Test passed: quiz permissions and validation hold.");
}

#[tokio::test]
async fn test_admin_manages_quizzes() {
    println!("\n\n[+] Running test: test_admin_manages_quizzes");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (owner, _) = client.create_test_user().await.unwrap();
    let (admin, admin_token) = client.create_test_user().await.unwrap();
    let company = client.create_company(&owner).await;
    client.add_member(&company, &admin).await;
    ctx.db
        .apply_membership_action(company.id, admin.id, intern_backend::types::membership::MembershipAction::AppointAdmin)
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/quizzes/{}", company.id))
        .insert_header(bearer(&admin_token))
        .set_json(test_data::sample_quiz())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    println!("[/] Test passed: admins create quizzes.");
}
