//! Minimal HTTP/1.1 responder for driving `HttpTransport` in tests.
//!
//! Every connection serves exactly one request and is closed afterwards.

use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

type Handler = Arc<dyn Fn(&Value) -> Option<(u16, String)> + Send + Sync>;

pub struct MockHttpServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Value>>>,
    handle: JoinHandle<()>,
}

impl MockHttpServer {
    /// Answers every request with `status` and `body`.
    pub async fn replying(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::with_handler(move |_| Some((status, body.clone()))).await
    }

    /// Lets `handler` build the reply from the decoded JSON-RPC request.
    /// Returning `None` keeps the connection open without answering.
    pub async fn with_handler<F>(handler: F) -> Self
    where
        F: Fn(&Value) -> Option<(u16, String)> + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler: Handler = Arc::new(handler);

        let handle = tokio::spawn({
            let requests = Arc::clone(&requests);
            async move {
                while let Ok((stream, _)) = listener.accept().await {
                    let requests = Arc::clone(&requests);
                    let handler = Arc::clone(&handler);
                    tokio::spawn(async move {
                        let _ = serve(stream, handler, requests).await;
                    });
                }
            }
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// JSON-RPC request bodies received so far, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockHttpServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Builds a JSON-RPC success envelope around `result`.
pub fn mock_response(id: &Value, result: Value) -> String {
    serde_json::json!({"jsonrpc": "2.0", "id": id, "result": result}).to_string()
}

/// Address nothing is listening on.
pub async fn unused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn serve(
    mut stream: TcpStream,
    handler: Handler,
    requests: Arc<Mutex<Vec<Value>>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let (header_end, content_length) = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..pos]).into_owned();
            let content_length = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            break (pos + 4, content_length);
        }
    };

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let end = buf.len().min(header_end + content_length);
    let request: Value = serde_json::from_slice(&buf[header_end..end]).unwrap_or(Value::Null);
    requests.lock().unwrap().push(request.clone());

    let Some((status, body)) = handler(&request) else {
        tokio::time::sleep(Duration::from_secs(30)).await;
        return Ok(());
    };

    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );

    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
