//! Minimal one-shot HTTP server for exercising the real HTTP clients.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Serve a single canned response and return the Truncgil-style feed URL.
///
/// `delay` holds the response back, for timeout tests.
pub async fn serve_once(status_line: &'static str, body: &'static str, delay: Duration) -> String {
    let (addr, _request) = spawn(status_line, body, delay).await;
    format!("http://{addr}/v4/today.json")
}

/// Serve a single canned Bot API response.
///
/// Returns the base URL to hand to the publisher and a handle resolving to
/// the raw request that was received.
pub async fn serve_bot_api(
    status_line: &'static str,
    body: &'static str,
    delay: Duration,
) -> (String, JoinHandle<String>) {
    let (addr, request) = spawn(status_line, body, delay).await;
    (format!("http://{addr}/"), request)
}

async fn spawn(
    status_line: &'static str,
    body: &'static str,
    delay: Duration,
) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    let handle = tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return String::new();
        };

        let request = read_request(&mut socket).await;

        tokio::time::sleep(delay).await;

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;

        request
    });

    (addr, handle)
}

/// Read headers plus a `Content-Length` body, whichever arrives.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut raw = Vec::new();
    let mut buf = [0_u8; 4096];

    loop {
        let Ok(n) = socket.read(&mut buf).await else {
            break;
        };
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);

        let text = String::from_utf8_lossy(&raw);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let expected = text[..head_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if raw.len() >= head_end + 4 + expected {
                break;
            }
        }
    }

    String::from_utf8_lossy(&raw).into_owned()
}
