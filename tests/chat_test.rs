mod common;

use agripartner_backend::errors::{DomainError, InternalError};
use agripartner_backend::types::db::user::UserRole;
use agripartner_backend::types::dto::chat::SendChatMessageRequest;

fn message(sender_id: i32, receiver_id: i32, text: &str) -> SendChatMessageRequest {
    SendChatMessageRequest {
        sender_id,
        receiver_id,
        message: text.to_string(),
    }
}

#[tokio::test]
async fn conversation_includes_both_directions_and_excludes_third_parties() {
    let app = common::setup_app().await;
    let alice = common::register_user(&app, "alice@example.com", UserRole::Partner).await;
    let bob = common::register_user(&app, "bob@example.com", UserRole::Farmer).await;
    let carol = common::register_user(&app, "carol@example.com", UserRole::Management).await;

    app.chat_messages
        .send(&message(alice.id, bob.id, "one"))
        .await
        .unwrap();
    app.chat_messages
        .send(&message(bob.id, alice.id, "two"))
        .await
        .unwrap();
    app.chat_messages
        .send(&message(alice.id, carol.id, "not yours"))
        .await
        .unwrap();
    app.chat_messages
        .send(&message(carol.id, bob.id, "also not yours"))
        .await
        .unwrap();
    app.chat_messages
        .send(&message(alice.id, bob.id, "three"))
        .await
        .unwrap();

    let conversation = app
        .chat_messages
        .conversation(alice.id, bob.id)
        .await
        .unwrap();
    let texts: Vec<&str> = conversation.iter().map(|m| m.message.as_str()).collect();

    assert_eq!(texts, vec!["one", "two", "three"]);

    // Argument order does not matter.
    let reversed = app
        .chat_messages
        .conversation(bob.id, alice.id)
        .await
        .unwrap();
    assert_eq!(reversed.len(), 3);
}

#[tokio::test]
async fn new_messages_start_unread() {
    let app = common::setup_app().await;
    let alice = common::register_user(&app, "alice@example.com", UserRole::Partner).await;
    let bob = common::register_user(&app, "bob@example.com", UserRole::Farmer).await;

    let sent = app
        .chat_messages
        .send(&message(alice.id, bob.id, "hello"))
        .await
        .unwrap();

    assert!(!sent.is_read);
}

#[tokio::test]
async fn missing_sender_or_receiver_is_not_found() {
    let app = common::setup_app().await;
    let alice = common::register_user(&app, "alice@example.com", UserRole::Partner).await;

    let err = app
        .chat_messages
        .send(&message(999, alice.id, "from nowhere"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InternalError::Domain(DomainError::NotFound { entity: "sender", .. })
    ));

    let err = app
        .chat_messages
        .send(&message(alice.id, 999, "to nowhere"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InternalError::Domain(DomainError::NotFound {
            entity: "receiver",
            ..
        })
    ));
}
