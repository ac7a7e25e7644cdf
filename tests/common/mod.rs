//! Shared test utilities: a minimal HTTP server serving canned responses.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// A local server answering each connection with the next scripted response.
pub struct MockServer {
    /// Base URL including the `/rankings` path.
    pub url: String,
    /// Request head (request line and headers) of every request received.
    pub requests: mpsc::UnboundedReceiver<String>,
}

/// Starts a server on an ephemeral port.
///
/// Responses are `(status, body)` pairs served in order; the last one is
/// repeated once the script runs out.
pub async fn serve(responses: Vec<(u16, &'static str)>) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock server");
    let addr = listener.local_addr().expect("no local addr");
    let (tx, requests) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut index = 0;
        while let Ok((mut socket, _)) = listener.accept().await {
            let head = read_head(&mut socket).await;
            let _ = tx.send(head);

            let (status, body) = responses[index.min(responses.len() - 1)];
            index += 1;

            let reason = if status == 200 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    MockServer {
        url: format!("http://{addr}/rankings"),
        requests,
    }
}

/// Reads until the blank line ending the request head.
async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut data = Vec::new();
    let mut chunk = [0u8; 1024];
    while !data.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => data.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}

/// Address on which nothing is listening.
pub async fn unused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind");
    let addr = listener.local_addr().expect("no local addr");
    drop(listener);
    format!("http://{addr}/rankings")
}

pub const SAMPLE_BODY: &str = r#"{
    "top": [
        { "ticker": "AAA", "change": 5.1 },
        { "ticker": "BBB", "change": 2.75 }
    ],
    "bottom": [
        { "ticker": "ZZZ", "change": -3.25 }
    ]
}"#;
