//! A throwaway HTTP/1.1 server for exercising the real reqwest backend.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Serves the same canned response to every connection and records the
/// request line of each request.
pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Start a server answering with `status` (e.g. `"200 OK"`) and `body`.
    pub async fn start(status: &'static str, body: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let recorded = Arc::clone(&recorded);
                let body = body.clone();
                tokio::spawn(async move {
                    serve_one(stream, status, &body, &recorded).await;
                });
            }
        });

        Self { addr, requests }
    }

    /// Base URL pointing at this server's `/api/` path.
    pub fn base_url(&self) -> String {
        format!("http://{}/api/", self.addr)
    }

    /// Request lines received so far, e.g. `GET /api/?results=20 HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve_one(
    mut stream: TcpStream,
    status: &str,
    body: &str,
    recorded: &Mutex<Vec<String>>,
) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let head = String::from_utf8_lossy(&buf);
    if let Some(line) = head.lines().next() {
        recorded.lock().unwrap().push(line.to_string());
    }

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// An address nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/")
}

/// One user object in the Random User API shape.
pub fn user_json(first: &str, last: &str) -> serde_json::Value {
    serde_json::json!({
        "name": {"title": "Mr", "first": first, "last": last},
        "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        "picture": {
            "large": "https://randomuser.me/api/portraits/men/1.jpg",
            "medium": "https://randomuser.me/api/portraits/med/men/1.jpg",
            "thumbnail": "https://randomuser.me/api/portraits/thumb/men/1.jpg"
        }
    })
}
