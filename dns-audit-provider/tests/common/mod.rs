//! 共享测试工具和辅助函数

#![allow(dead_code)]

use dns_audit_provider::{CloudflareProvider, Credentials};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Provider built from `CLOUDFLARE_EMAIL` / `CLOUDFLARE_API_TOKEN`.
pub fn live_provider() -> CloudflareProvider {
    let credentials = Credentials {
        email: std::env::var("CLOUDFLARE_EMAIL").unwrap_or_default(),
        api_token: std::env::var("CLOUDFLARE_API_TOKEN").unwrap_or_default(),
    };
    CloudflareProvider::new(credentials).expect("http client")
}

/// Serves exactly one canned HTTP response and returns the raw request head.
pub struct StubServer {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl StubServer {
    pub async fn start(status_line: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut head = Vec::new();
            let mut buf = [0_u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.expect("read");
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write");
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&head).into_owned()
        });

        Self {
            base_url: format!("http://{addr}/client/v4"),
            handle,
        }
    }

    pub fn provider(&self) -> CloudflareProvider {
        CloudflareProvider::new(Credentials {
            email: "ops@example.com".to_string(),
            api_token: "test-token".to_string(),
        })
        .expect("http client")
        .with_base_url(&self.base_url)
    }

    /// Raw request head received by the server.
    pub async fn request(self) -> String {
        self.handle.await.expect("stub server task")
    }
}
