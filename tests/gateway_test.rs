// ABOUTME: Integration tests for the remote API gateway against a mock backend
// ABOUTME: Covers bearer attachment, the 401 forced-logout policy, and empty-state decoding

mod common;

use anyhow::Result;
use common::{create_test_gateway, create_test_session};
use foodlens_client::models::{RegisterRequest, UpdateProfileRequest};
use foodlens_client::{ClientError, Language};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn analysis_body() -> serde_json::Value {
    json!({
        "nutrient_analysis": [
            {
                "nutrient_en": "Sugar",
                "nutrient_hi": "चीनी",
                "rating": 3.0,
                "explanation_en": "High sugar content",
                "explanation_hi": "उच्च चीनी सामग्री"
            }
        ],
        "overall_analysis": {
            "rating": 2.5,
            "explanation_en": "Consume occasionally",
            "explanation_hi": "कभी-कभी सेवन करें"
        },
        "suggested_alternatives": [
            {
                "name": "Fresh juice",
                "reason_en": "No added sugar",
                "reason_hi": "कोई अतिरिक्त चीनी नहीं"
            }
        ]
    })
}

#[tokio::test]
async fn test_login_success_persists_session() -> Result<()> {
    let server = MockServer::start().await;
    let (_dir, session) = create_test_session()?;
    let gateway = create_test_gateway(&server.uri(), session.clone())?;

    Mock::given(method("POST"))
        .and(path("/user/login"))
        .and(body_json(json!({"mobile": "9990001111", "password": "abc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "login successful",
            "token": "tok123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway.login("9990001111", "abc").await?;

    assert_eq!(response.token.as_deref(), Some("tok123"));
    assert!(session.is_logged_in());
    assert_eq!(session.current_token().as_deref(), Some("tok123"));
    assert_eq!(session.logged_in_user().as_deref(), Some("9990001111"));
    Ok(())
}

#[tokio::test]
async fn test_login_failure_surfaces_body_message() -> Result<()> {
    let server = MockServer::start().await;
    let (_dir, session) = create_test_session()?;
    let gateway = create_test_gateway(&server.uri(), session.clone())?;

    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "database unavailable"})),
        )
        .mount(&server)
        .await;

    let error = gateway
        .login("9990001111", "abc")
        .await
        .expect_err("expected an HTTP error");

    match error {
        ClientError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!session.is_logged_in());
    Ok(())
}

#[tokio::test]
async fn test_login_success_without_token_leaves_session_logged_out() -> Result<()> {
    let server = MockServer::start().await;
    let (_dir, session) = create_test_session()?;
    let gateway = create_test_gateway(&server.uri(), session.clone())?;

    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "invalid credentials"})),
        )
        .mount(&server)
        .await;

    let response = gateway.login("9990001111", "wrong").await?;

    assert!(response.token.is_none());
    assert!(!session.is_logged_in());
    assert!(session.current_token().is_none());
    Ok(())
}

#[tokio::test]
async fn test_register_posts_full_payload() -> Result<()> {
    let server = MockServer::start().await;
    let (_dir, session) = create_test_session()?;
    let gateway = create_test_gateway(&server.uri(), session)?;

    Mock::given(method("POST"))
        .and(path("/user/register"))
        .and(body_json(json!({
            "name": "Asha",
            "gender": "female",
            "email": "asha@example.com",
            "mobile": "9990001111",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "registered"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway
        .register(&RegisterRequest {
            name: "Asha".into(),
            gender: "female".into(),
            email: "asha@example.com".into(),
            mobile: "9990001111".into(),
            password: "secret".into(),
        })
        .await?;

    assert_eq!(response.message.as_deref(), Some("registered"));
    Ok(())
}

#[tokio::test]
async fn test_bearer_header_attached_when_token_present() -> Result<()> {
    let server = MockServer::start().await;
    let (_dir, session) = create_test_session()?;
    session.persist_login_success("tok123", "9990001111")?;
    let gateway = create_test_gateway(&server.uri(), session)?;

    Mock::given(method("GET"))
        .and(path("/product/category"))
        .and(query_param("categoryName", "Beverages"))
        .and(header("Authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                {
                    "name": "Cola Zero",
                    "image_url": "http://img.example/cola.jpg",
                    "ingredients": "Carbonated water, sweetener",
                    "nutritions": "0 kcal"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let products = gateway.products_by_category("Beverages").await?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Cola Zero");
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_forces_logout() -> Result<()> {
    let server = MockServer::start().await;
    let (_dir, session) = create_test_session()?;
    session.persist_login_success("stale-token", "9990001111")?;
    let gateway = create_test_gateway(&server.uri(), session.clone())?;

    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let error = gateway
        .user_profile()
        .await
        .expect_err("expected forced logout");

    assert!(error.is_unauthorized());
    assert!(!session.is_logged_in());
    assert!(session.current_token().is_none());
    Ok(())
}

#[tokio::test]
async fn test_malformed_list_body_renders_empty_state() -> Result<()> {
    let server = MockServer::start().await;
    let (_dir, session) = create_test_session()?;
    let gateway = create_test_gateway(&server.uri(), session)?;

    Mock::given(method("GET"))
        .and(path("/product/category"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let products = gateway.products_by_category("Beverages").await?;
    assert!(products.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_product_analysis_parses_report() -> Result<()> {
    let server = MockServer::start().await;
    let (_dir, session) = create_test_session()?;
    let gateway = create_test_gateway(&server.uri(), session)?;

    Mock::given(method("GET"))
        .and(path("/product/productAnalysis"))
        .and(query_param("productName", "Cola Zero"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "analysis": analysis_body(),
            "productImage": "http://img.example/cola.jpg"
        })))
        .mount(&server)
        .await;

    let report = gateway
        .product_analysis("Cola Zero")
        .await?
        .expect("expected an analysis report");

    assert_eq!(report.product_image, "http://img.example/cola.jpg");
    assert!((report.analysis.overall_analysis.rating - 2.5).abs() < f32::EPSILON);
    let nutrient = &report.analysis.nutrient_analysis[0];
    assert_eq!(nutrient.nutrient(Language::English), "Sugar");
    assert_eq!(nutrient.nutrient(Language::Hindi), "चीनी");
    assert_eq!(report.analysis.suggested_alternatives[0].name, "Fresh juice");
    Ok(())
}

#[tokio::test]
async fn test_malformed_analysis_body_renders_none() -> Result<()> {
    let server = MockServer::start().await;
    let (_dir, session) = create_test_session()?;
    let gateway = create_test_gateway(&server.uri(), session)?;

    Mock::given(method("GET"))
        .and(path("/product/productAnalysis"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let report = gateway.product_analysis("Cola Zero").await?;
    assert!(report.is_none());
    Ok(())
}

#[tokio::test]
async fn test_image_upload_returns_analysis() -> Result<()> {
    let server = MockServer::start().await;
    let (_dir, session) = create_test_session()?;
    session.persist_login_success("tok123", "9990001111")?;
    let gateway = create_test_gateway(&server.uri(), session)?;

    Mock::given(method("POST"))
        .and(path("/product/imageProductAnalysis"))
        .and(header("Authorization", "Bearer tok123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"analysis": analysis_body()})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let image = vec![0xFF, 0xD8, 0xFF, 0xE0];
    let analysis = gateway
        .image_product_analysis(image, "label.jpg")
        .await?
        .expect("expected an analysis");

    assert_eq!(analysis.nutrient_analysis.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_profile_fetch_and_partial_update() -> Result<()> {
    let server = MockServer::start().await;
    let (_dir, session) = create_test_session()?;
    session.persist_login_success("tok123", "9990001111")?;
    let gateway = create_test_gateway(&server.uri(), session)?;

    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "User": {"name": "Asha", "mobile": "9990001111", "bloodGroup": "O+"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/user/profile"))
        .and(body_json(json!({"age": 29, "allergies": "peanuts"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "profile updated",
            "user": {"name": "Asha", "age": "29", "allergies": "peanuts"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let profile = gateway.user_profile().await?.expect("expected a profile");
    assert_eq!(profile.name.as_deref(), Some("Asha"));
    assert_eq!(profile.blood_group.as_deref(), Some("O+"));

    let update = UpdateProfileRequest {
        age: Some(29),
        allergies: Some("peanuts".into()),
        ..UpdateProfileRequest::default()
    };
    let response = gateway
        .update_profile(&update)
        .await?
        .expect("expected an update response");
    assert_eq!(response.message, "profile updated");
    assert_eq!(response.user.age.as_deref(), Some("29"));
    Ok(())
}

#[tokio::test]
async fn test_recommendations_parse() -> Result<()> {
    let server = MockServer::start().await;
    let (_dir, session) = create_test_session()?;
    let gateway = create_test_gateway(&server.uri(), session)?;

    Mock::given(method("GET"))
        .and(path("/product/productSuggest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "foodRecommendations": [
                {"productName": "Oats", "benefits": "Fiber rich", "category": "Breakfast"},
                {"productName": "Sprouts", "benefits": "Protein", "category": "Snacks"}
            ]
        })))
        .mount(&server)
        .await;

    let recommendations = gateway.food_recommendations().await?;
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0].product_name, "Oats");
    assert_eq!(recommendations[1].category, "Snacks");
    Ok(())
}

#[tokio::test]
async fn test_transport_failure_is_not_retried() -> Result<()> {
    let (_dir, session) = create_test_session()?;
    // Nothing listens on this port; the single attempt fails at transport level
    let gateway = create_test_gateway("http://127.0.0.1:9", session.clone())?;

    let error = gateway
        .products_by_category("Beverages")
        .await
        .expect_err("expected a transport error");

    assert!(matches!(error, ClientError::Transport(_)));
    assert!(!session.is_logged_in());
    Ok(())
}
