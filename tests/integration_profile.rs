mod common;

use common::{register_user, spawn_app};

#[tokio::test]
async fn fresh_profile_has_empty_activity() {
    let app = spawn_app().await;
    let (token, user_id) = register_user(&app, "Alice Chen", "alice@example.com").await;

    let response =
        app.client.get(app.url("/api/user/profile")).bearer_auth(&token).send().await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"], user_id.as_str());
    assert_eq!(body["user"]["full_name"], "Alice Chen");
    assert_eq!(body["registered_events"].as_array().unwrap().len(), 0);
    assert_eq!(body["donations"].as_array().unwrap().len(), 0);
    assert_eq!(body["message_count"], 0);
}

#[tokio::test]
async fn partial_update_leaves_other_fields_alone() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "Alice Chen", "alice@example.com").await;

    let response = app
        .client
        .put(app.url("/api/user/profile"))
        .bearer_auth(&token)
        .json(&serde_json::json!({ "current_company": "Globex" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Profile updated successfully");
    assert_eq!(body["user"]["current_company"], "Globex");
    assert_eq!(body["user"]["full_name"], "Alice Chen");
    assert_eq!(body["user"]["current_location"], "San Francisco");
}

#[tokio::test]
async fn empty_update_returns_current_profile() {
    let app = spawn_app().await;
    let (token, user_id) = register_user(&app, "Alice Chen", "alice@example.com").await;

    let response = app
        .client
        .put(app.url("/api/user/profile"))
        .bearer_auth(&token)
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"], user_id.as_str());
    assert_eq!(body["user"]["full_name"], "Alice Chen");
}

#[tokio::test]
async fn update_rejects_malformed_phone() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "Alice Chen", "alice@example.com").await;

    let response = app
        .client
        .put(app.url("/api/user/profile"))
        .bearer_auth(&token)
        .json(&serde_json::json!({ "phone": "12345" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn search_matches_name_and_company_case_insensitively() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "Alice Chen", "alice@example.com").await;
    register_user(&app, "Bob Marlow", "bob@example.com").await;
    register_user(&app, "Carla Diaz", "carla@example.com").await;

    let by_name = app
        .client
        .get(app.url("/api/users/search"))
        .query(&[("q", "marlow")])
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(by_name.status(), 200);
    let results: serde_json::Value = by_name.json().await.unwrap();
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["full_name"], "Bob Marlow");

    // Every registered account shares the same company, so a company query
    // matches the other two but never the viewer.
    let by_company = app
        .client
        .get(app.url("/api/users/search"))
        .query(&[("q", "acme")])
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(by_company.status(), 200);
    let results: serde_json::Value = by_company.json().await.unwrap();
    let names: Vec<&str> =
        results.as_array().unwrap().iter().map(|u| u["full_name"].as_str().unwrap()).collect();
    assert_eq!(names.len(), 2);
    assert!(!names.contains(&"Alice Chen"));
}

#[tokio::test]
async fn short_query_returns_no_results() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "Alice Chen", "alice@example.com").await;
    register_user(&app, "Bob Marlow", "bob@example.com").await;

    let response = app
        .client
        .get(app.url("/api/users/search"))
        .query(&[("q", "b")])
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let results: serde_json::Value = response.json().await.unwrap();
    assert_eq!(results.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn query_minimum_counts_characters_not_bytes() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "Alice Chen", "alice@example.com").await;
    register_user(&app, "René Dubois", "rene@example.com").await;

    // One two-byte character is still below the two-character minimum.
    let single_char = app
        .client
        .get(app.url("/api/users/search"))
        .query(&[("q", "é")])
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(single_char.status(), 200);
    let results: serde_json::Value = single_char.json().await.unwrap();
    assert_eq!(results.as_array().unwrap().len(), 0);

    let two_chars = app
        .client
        .get(app.url("/api/users/search"))
        .query(&[("q", "né")])
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(two_chars.status(), 200);
    let results: serde_json::Value = two_chars.json().await.unwrap();
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["full_name"], "René Dubois");
}

#[tokio::test]
async fn dashboard_stats_reflect_registered_accounts() {
    let app = spawn_app().await;
    register_user(&app, "Alice Chen", "alice@example.com").await;
    register_user(&app, "Bob Marlow", "bob@example.com").await;

    let response = app.client.get(app.url("/api/dashboard/stats")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total_alumni"], 2);
    assert_eq!(body["upcoming_events"], 10);
    assert_eq!(body["recent_donations"], 0);
}
