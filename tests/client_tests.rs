use echo_bot::build_app;
use echo_bot::client::session::{ChatSession, GREETING, Role};
use echo_bot::client::{ClientError, EchoClient};
use echo_bot::message::{EchoRequest, Message};
use echo_bot::state::AppState;
use uuid::Uuid;

/// Serve the app on an ephemeral port and return its base URL.
async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_app(AppState::default()))
            .await
            .unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_chat_turns_are_echoed() {
    let client = EchoClient::new(spawn_server().await);
    let mut session = ChatSession::new();

    session.push(Role::User, "hello");
    let reply = client.send_turn(&mut session).await.unwrap();
    assert_eq!(reply, "hello");

    session.push(Role::User, "again");
    client.send_turn(&mut session).await.unwrap();

    let contents: Vec<(Role, &str)> = session
        .transcript()
        .iter()
        .map(|t| (t.role, t.content.as_str()))
        .collect();
    assert_eq!(
        contents,
        vec![
            (Role::Assistant, GREETING),
            (Role::User, "hello"),
            (Role::Assistant, "hello"),
            (Role::User, "again"),
            (Role::Assistant, "again"),
        ]
    );
}

#[tokio::test]
async fn test_chat_turn_keeps_whitespace() {
    let client = EchoClient::new(spawn_server().await);
    let mut session = ChatSession::new();

    session.push(Role::User, "  padded  ");
    let reply = client.send_turn(&mut session).await.unwrap();
    assert_eq!(reply, "  padded  ");
}

#[tokio::test]
async fn test_send_turn_without_user_message() {
    let client = EchoClient::new("http://127.0.0.1:9");
    let mut session = ChatSession::new();

    let err = client.send_turn(&mut session).await.unwrap_err();
    assert!(matches!(err, ClientError::NothingToSend));
}

#[tokio::test]
async fn test_transport_failure_keeps_user_turn() {
    // Bind then drop so nothing is listening on the port.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = EchoClient::new(format!("http://{}/", addr));
    let mut session = ChatSession::new();
    session.push(Role::User, "anyone there?");

    let err = client.send_turn(&mut session).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert_eq!(session.transcript().len(), 2);
    assert_eq!(session.last_user_message(), Some("anyone there?"));
}

#[tokio::test]
async fn test_client_predict() {
    let client = EchoClient::new(spawn_server().await);
    let message = Message {
        dialog_id: Uuid::new_v4(),
        text: "hi".to_string(),
        id: Uuid::new_v4(),
        participant_index: 0,
    };

    let prediction = client.predict(&message).await.unwrap();
    assert_eq!(prediction.message_id, message.id);
    assert_eq!(prediction.dialog_id, message.dialog_id);
    assert!((0.0..1.0).contains(&prediction.is_bot_probability));
}

#[tokio::test]
async fn test_client_null_message_id() {
    let client = EchoClient::new(spawn_server().await);
    let request = EchoRequest {
        dialog_id: Uuid::new_v4(),
        last_msg_text: "no id".to_string(),
        last_message_id: None,
    };

    let response = client.get_message(&request).await.unwrap();
    assert_eq!(response.new_msg_text, "no id");
    assert_eq!(response.dialog_id, request.dialog_id);
}
