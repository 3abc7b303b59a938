//! Integration tests for the TCP transport
//!
//! Each test runs the transport against a local TCP listener scripted
//! to play the server side of the connection.

use std::time::Duration;

use serde_json::json;
use swsearch::error::Result;
use swsearch::{SearchError, TcpConfig, TcpTransport, Transport, TransportEvent};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(5);

async fn bind() -> (TcpListener, TcpConfig) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, TcpConfig::new(addr.to_string()))
}

async fn next_event(
    events: &mut mpsc::UnboundedReceiver<Result<TransportEvent>>,
) -> Result<TransportEvent> {
    timeout(WAIT, events.recv())
        .await
        .expect("timed out waiting for transport event")
        .expect("event stream ended")
}

#[tokio::test]
async fn connect_delivers_connected_event() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (listener, config) = bind().await;

    let mut transport = TcpTransport::new(config);
    let mut events = transport.events();
    transport.connect().await.unwrap();

    let _server = timeout(WAIT, listener.accept()).await.unwrap().unwrap();

    assert_eq!(next_event(&mut events).await.unwrap(), TransportEvent::Connected);
    assert!(transport.is_ready());

    transport.close().await.unwrap();
}

#[tokio::test]
async fn emit_writes_one_event_frame_per_line() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (listener, config) = bind().await;

    let mut transport = TcpTransport::new(config);
    let mut events = transport.events();
    transport.connect().await.unwrap();

    let (server, _) = timeout(WAIT, listener.accept()).await.unwrap().unwrap();
    assert_eq!(next_event(&mut events).await.unwrap(), TransportEvent::Connected);

    transport
        .emit("search", json!({"query": "Luke"}))
        .await
        .unwrap();

    let (read_half, _write_half) = server.into_split();
    let mut lines = BufReader::new(read_half).lines();
    let line = timeout(WAIT, lines.next_line())
        .await
        .unwrap()
        .unwrap()
        .unwrap();

    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&line).unwrap(),
        json!({"event": "search", "data": {"query": "Luke"}})
    );

    transport.close().await.unwrap();
}

#[tokio::test]
async fn inbound_frame_is_delivered_as_named_event() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (listener, config) = bind().await;

    let mut transport = TcpTransport::new(config);
    let mut events = transport.events();
    transport.connect().await.unwrap();

    let (mut server, _) = timeout(WAIT, listener.accept()).await.unwrap().unwrap();
    assert_eq!(next_event(&mut events).await.unwrap(), TransportEvent::Connected);

    let payload = json!({
        "event": "search",
        "data": {"name": "Yoda", "films": [], "page": 1, "resultCount": 1},
    });
    server
        .write_all(format!("{payload}\n").as_bytes())
        .await
        .unwrap();

    assert_eq!(
        next_event(&mut events).await.unwrap(),
        TransportEvent::Event {
            name: "search".to_string(),
            data: json!({"name": "Yoda", "films": [], "page": 1, "resultCount": 1}),
        }
    );

    transport.close().await.unwrap();
}

#[tokio::test]
async fn unknown_event_names_pass_through() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (listener, config) = bind().await;

    let mut transport = TcpTransport::new(config);
    let mut events = transport.events();
    transport.connect().await.unwrap();

    let (mut server, _) = timeout(WAIT, listener.accept()).await.unwrap().unwrap();
    assert_eq!(next_event(&mut events).await.unwrap(), TransportEvent::Connected);

    server.write_all(b"{\"event\":\"ping\",\"data\":{}}\n").await.unwrap();

    // Filtering by event name is the controller's job, not the transport's.
    assert_eq!(
        next_event(&mut events).await.unwrap(),
        TransportEvent::Event {
            name: "ping".to_string(),
            data: json!({}),
        }
    );

    transport.close().await.unwrap();
}

#[tokio::test]
async fn undecodable_frame_is_an_in_band_error() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (listener, config) = bind().await;

    let mut transport = TcpTransport::new(config);
    let mut events = transport.events();
    transport.connect().await.unwrap();

    let (mut server, _) = timeout(WAIT, listener.accept()).await.unwrap().unwrap();
    assert_eq!(next_event(&mut events).await.unwrap(), TransportEvent::Connected);

    server.write_all(b"not json\n").await.unwrap();

    let err = next_event(&mut events).await.unwrap_err();
    assert!(matches!(err, SearchError::JsonDecode(_)), "got {err}");

    transport.close().await.unwrap();
}

#[tokio::test]
async fn server_close_delivers_disconnected() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (listener, config) = bind().await;

    let mut transport = TcpTransport::new(config);
    let mut events = transport.events();
    transport.connect().await.unwrap();

    let (server, _) = timeout(WAIT, listener.accept()).await.unwrap().unwrap();
    assert_eq!(next_event(&mut events).await.unwrap(), TransportEvent::Connected);

    drop(server);

    assert_eq!(
        next_event(&mut events).await.unwrap(),
        TransportEvent::Disconnected
    );
    assert!(!transport.is_ready());

    transport.close().await.unwrap();
}

#[tokio::test]
async fn dial_failure_delivers_connect_error() {
    let _ = env_logger::builder().is_test(true).try_init();

    // Bind then drop the listener so the port refuses connections.
    let (listener, config) = bind().await;
    drop(listener);

    let mut transport = TcpTransport::new(config);
    let mut events = transport.events();
    transport.connect().await.unwrap();

    match next_event(&mut events).await.unwrap() {
        TransportEvent::ConnectError(detail) => assert!(!detail.is_empty()),
        other => panic!("expected connect error, got {other:?}"),
    }

    transport.close().await.unwrap();
}

#[tokio::test]
async fn emit_without_connection_fails() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut transport = TcpTransport::new(TcpConfig::default());
    let err = transport
        .emit("search", json!({"query": "Luke"}))
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Transport(_)), "got {err}");
}

#[tokio::test]
async fn event_stream_can_only_be_taken_once() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut transport = TcpTransport::new(TcpConfig::default());
    let _first = transport.events();
    let mut second = transport.events();

    let err = timeout(WAIT, second.recv())
        .await
        .unwrap()
        .unwrap()
        .unwrap_err();
    assert!(matches!(err, SearchError::Connection(_)), "got {err}");
}

#[tokio::test]
async fn close_is_idempotent_and_final() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (listener, config) = bind().await;

    let mut transport = TcpTransport::new(config);
    let mut events = transport.events();
    transport.connect().await.unwrap();

    let _server = timeout(WAIT, listener.accept()).await.unwrap().unwrap();
    assert_eq!(next_event(&mut events).await.unwrap(), TransportEvent::Connected);

    transport.close().await.unwrap();
    transport.close().await.unwrap();

    assert!(!transport.is_ready());
    assert!(transport.connect().await.is_err());
    assert!(transport.emit("search", json!({"query": "x"})).await.is_err());
}
