//! Tests for the search client controller
//!
//! The full interactive loop needs a terminal; these tests cover
//! construction, initial state, and the shutdown path.

use swsearch::{SearchClient, TcpConfig, TcpTransport, Transport};
use tokio::net::TcpListener;

#[test]
fn client_starts_idle() {
    let _ = env_logger::builder().is_test(true).try_init();

    tokio_test::block_on(async {
        let transport = TcpTransport::new(TcpConfig::default());
        let client = SearchClient::new(transport);

        assert!(!client.state().is_searching());
        assert_eq!(client.state().query(), "");
        assert_eq!(client.state().total_results(), 0);
        assert_eq!(client.state().pages_received(), 0);
        assert!(client.state().started_at().is_none());
    });
}

#[test]
fn shutdown_without_connect_is_clean() {
    let _ = env_logger::builder().is_test(true).try_init();

    tokio_test::block_on(async {
        let transport = TcpTransport::new(TcpConfig::default());
        let mut client = SearchClient::new(transport);

        client.shutdown().await.unwrap();
        assert!(!client.state().is_searching());
    });
}

#[tokio::test]
async fn shutdown_closes_a_connected_transport() {
    let _ = env_logger::builder().is_test(true).try_init();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut transport = TcpTransport::new(TcpConfig::new(addr.to_string()));
    transport.connect().await.unwrap();
    let _server = listener.accept().await.unwrap();

    let mut client = SearchClient::new(transport);
    client.shutdown().await.unwrap();
}
