/*!
 * One-shot HTTP server for provider tests.
 *
 * Accepts a single connection, records the raw request and answers with a
 * canned status and body.
 */

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as the stub received it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request line and headers
    pub head: String,
    /// Request body
    pub body: String,
}

impl RecordedRequest {
    /// Value of a header, matched case-insensitively
    pub fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }

    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or("")
    }
}

/// Start a stub answering once with `status` (e.g. `"200 OK"`) and `body`.
///
/// Returns the base URL to use as endpoint and a handle yielding the
/// recorded request.
pub async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<RecordedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local test server");
    let addr = listener.local_addr().expect("local addr");

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept connection");

        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        let (head, body_start, content_length) = loop {
            let n = socket.read(&mut buf).await.expect("read request");
            assert!(n > 0, "connection closed before headers were complete");
            data.extend_from_slice(&buf[..n]);

            if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&data[..pos]).to_string();
                let content_length = head
                    .lines()
                    .find_map(|line| {
                        let (key, value) = line.split_once(':')?;
                        key.trim()
                            .eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())?
                    })
                    .unwrap_or(0);
                break (head, pos + 4, content_length);
            }
        };

        while data.len() < body_start + content_length {
            let n = socket.read(&mut buf).await.expect("read body");
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
        }

        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");

        RecordedRequest {
            head,
            body: String::from_utf8_lossy(&data[body_start..]).to_string(),
        }
    });

    (format!("http://{}", addr), server)
}
