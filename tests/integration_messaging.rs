mod common;

use common::{TestApp, register_user, spawn_app};

async fn send(app: &TestApp, token: &str, receiver_id: &str, body: &str) -> serde_json::Value {
    let response = app
        .client
        .post(app.url("/api/messages"))
        .bearer_auth(token)
        .json(&serde_json::json!({ "receiver_id": receiver_id, "message": body }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    response.json().await.unwrap()
}

async fn conversation(app: &TestApp, token: &str, other_user_id: &str) -> Vec<serde_json::Value> {
    let response = app
        .client
        .get(app.url(&format!("/api/messages/{other_user_id}")))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    body.as_array().unwrap().clone()
}

#[tokio::test]
async fn sent_message_is_persisted_and_returned() {
    let app = spawn_app().await;
    let (alice_token, alice_id) = register_user(&app, "Alice Chen", "alice@example.com").await;
    let (_, bob_id) = register_user(&app, "Bob Marlow", "bob@example.com").await;

    let message = send(&app, &alice_token, &bob_id, "hi").await;

    assert!(!message["id"].as_str().unwrap().is_empty());
    assert_eq!(message["sender_id"], alice_id.as_str());
    assert_eq!(message["receiver_id"], bob_id.as_str());
    assert_eq!(message["message"], "hi");
    assert_eq!(message["read"], false);
    assert!(!message["timestamp"].as_str().unwrap().is_empty());

    let seen = conversation(&app, &alice_token, &bob_id).await;
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["id"], message["id"]);
}

#[tokio::test]
async fn both_parties_see_the_same_conversation() {
    let app = spawn_app().await;
    let (alice_token, alice_id) = register_user(&app, "Alice Chen", "alice@example.com").await;
    let (bob_token, bob_id) = register_user(&app, "Bob Marlow", "bob@example.com").await;
    send(&app, &alice_token, &bob_id, "hello bob").await;

    let alice_view = conversation(&app, &alice_token, &bob_id).await;
    let bob_view = conversation(&app, &bob_token, &alice_id).await;

    assert_eq!(alice_view.len(), 1);
    assert_eq!(bob_view.len(), 1);
    assert_eq!(alice_view[0]["id"], bob_view[0]["id"]);
}

#[tokio::test]
async fn conversation_is_chronological_and_excludes_other_threads() {
    let app = spawn_app().await;
    let (alice_token, alice_id) = register_user(&app, "Alice Chen", "alice@example.com").await;
    let (bob_token, bob_id) = register_user(&app, "Bob Marlow", "bob@example.com").await;
    let (carla_token, _) = register_user(&app, "Carla Diaz", "carla@example.com").await;

    send(&app, &alice_token, &bob_id, "first").await;
    send(&app, &carla_token, &bob_id, "unrelated").await;
    send(&app, &alice_token, &bob_id, "second").await;
    send(&app, &bob_token, &alice_id, "third").await;

    let thread = conversation(&app, &alice_token, &bob_id).await;
    let bodies: Vec<&str> = thread.iter().map(|m| m["message"].as_str().unwrap()).collect();
    assert_eq!(bodies, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn viewing_marks_inbound_messages_read() {
    let app = spawn_app().await;
    let (alice_token, alice_id) = register_user(&app, "Alice Chen", "alice@example.com").await;
    let (bob_token, bob_id) = register_user(&app, "Bob Marlow", "bob@example.com").await;

    send(&app, &alice_token, &bob_id, "hi").await;

    // The receiver's first view returns the thread as it stood before the
    // read transition was applied.
    let first_view = conversation(&app, &bob_token, &alice_id).await;
    assert_eq!(first_view[0]["read"], false);

    // Every later view, by either party, observes the flag flipped.
    let second_view = conversation(&app, &bob_token, &alice_id).await;
    assert_eq!(second_view[0]["read"], true);
    let sender_view = conversation(&app, &alice_token, &bob_id).await;
    assert_eq!(sender_view[0]["read"], true);
}

#[tokio::test]
async fn senders_own_view_does_not_mark_read() {
    let app = spawn_app().await;
    let (alice_token, alice_id) = register_user(&app, "Alice Chen", "alice@example.com").await;
    let (bob_token, bob_id) = register_user(&app, "Bob Marlow", "bob@example.com").await;

    send(&app, &alice_token, &bob_id, "hi").await;

    // The sender viewing their own outbound message leaves it unread.
    conversation(&app, &alice_token, &bob_id).await;
    let bob_view = conversation(&app, &bob_token, &alice_id).await;
    assert_eq!(bob_view[0]["read"], false);
}

#[tokio::test]
async fn receiver_existence_is_not_checked() {
    let app = spawn_app().await;
    let (alice_token, _) = register_user(&app, "Alice Chen", "alice@example.com").await;

    let message = send(&app, &alice_token, "ghost-user", "anyone there?").await;
    assert_eq!(message["receiver_id"], "ghost-user");
}

#[tokio::test]
async fn self_messages_are_allowed() {
    let app = spawn_app().await;
    let (alice_token, alice_id) = register_user(&app, "Alice Chen", "alice@example.com").await;

    let message = send(&app, &alice_token, &alice_id, "note to self").await;
    assert_eq!(message["sender_id"], message["receiver_id"]);

    let thread = conversation(&app, &alice_token, &alice_id).await;
    assert_eq!(thread.len(), 1);
}

#[tokio::test]
async fn messaging_requires_auth() {
    let app = spawn_app().await;

    let post = app
        .client
        .post(app.url("/api/messages"))
        .json(&serde_json::json!({ "receiver_id": "u2", "message": "hi" }))
        .send()
        .await
        .unwrap();
    assert_eq!(post.status(), 401);

    let get = app.client.get(app.url("/api/messages/u2")).send().await.unwrap();
    assert_eq!(get.status(), 401);
}
