mod common;

use common::{register_user, spawn_app};

fn registration_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Alice Chen",
        "email": "alice@example.com",
        "phone": "(555) 123-4567",
        "attend_dinner": true,
    })
}

/// Picks an event id out of the seeded catalog by registration availability.
async fn find_event(app: &common::TestApp, has_registration: bool) -> String {
    let response = app.client.get(app.url("/api/events")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    let events: serde_json::Value = response.json().await.unwrap();
    events
        .as_array()
        .unwrap()
        .iter()
        .find(|event| event["has_registration"] == has_registration)
        .map(|event| event["id"].as_str().unwrap().to_string())
        .expect("seeded catalog covers both kinds")
}

#[tokio::test]
async fn catalog_is_seeded_on_boot() {
    let app = spawn_app().await;

    let response = app.client.get(app.url("/api/events")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    let events: serde_json::Value = response.json().await.unwrap();
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 10);
    assert!(events.iter().any(|e| e["title"] == "Annual Alumni Reunion 2026"));
    assert!(events.iter().all(|e| !e["id"].as_str().unwrap().is_empty()));
}

#[tokio::test]
async fn event_registration_appears_on_profile() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "Alice Chen", "alice@example.com").await;
    let event_id = find_event(&app, true).await;

    let response = app
        .client
        .post(app.url(&format!("/api/events/{event_id}/register")))
        .bearer_auth(&token)
        .json(&registration_payload())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Registration Successful!");

    let profile =
        app.client.get(app.url("/api/user/profile")).bearer_auth(&token).send().await.unwrap();
    let profile: serde_json::Value = profile.json().await.unwrap();
    let registered = profile["registered_events"].as_array().unwrap();
    assert_eq!(registered.len(), 1);
    assert_eq!(registered[0]["id"], event_id.as_str());
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "Alice Chen", "alice@example.com").await;
    let event_id = find_event(&app, true).await;

    let first = app
        .client
        .post(app.url(&format!("/api/events/{event_id}/register")))
        .bearer_auth(&token)
        .json(&registration_payload())
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), 200);

    let second = app
        .client
        .post(app.url(&format!("/api/events/{event_id}/register")))
        .bearer_auth(&token)
        .json(&registration_payload())
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 400);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(body["error"], "Already registered for this event");
}

#[tokio::test]
async fn registering_for_unknown_event_is_not_found() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "Alice Chen", "alice@example.com").await;

    let response = app
        .client
        .post(app.url("/api/events/no-such-event/register"))
        .bearer_auth(&token)
        .json(&registration_payload())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn events_without_registration_reject_signups() {
    let app = spawn_app().await;
    let (token, _) = register_user(&app, "Alice Chen", "alice@example.com").await;
    let event_id = find_event(&app, false).await;

    let response = app
        .client
        .post(app.url(&format!("/api/events/{event_id}/register")))
        .bearer_auth(&token)
        .json(&registration_payload())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "This event does not have registration");
}

#[tokio::test]
async fn event_registration_requires_auth() {
    let app = spawn_app().await;
    let event_id = find_event(&app, true).await;

    let response = app
        .client
        .post(app.url(&format!("/api/events/{event_id}/register")))
        .json(&registration_payload())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 401);
}
