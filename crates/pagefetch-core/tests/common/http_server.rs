//! Minimal HTTP/1.1 server for exercising the curl transport.
//!
//! Routes by request path:
//! - `/page`     200 with a small HTML document
//! - `/flaky`    503 for the first two requests, then 200
//! - `/missing`  404
//! - `/latin1`   200 with a body that is not valid UTF-8
//! - `/agent`    200 echoing the request's User-Agent inside `<body>`
//! - `/slow`     sleeps [`SLOW_DELAY`] before answering 200

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub const SLOW_DELAY: Duration = Duration::from_secs(3);

pub const PAGE_HTML: &str =
    "<html><head><title>T</title></head><body><nav>menu</nav><p>Served page body</p></body></html>";

/// Request counters per route, readable from the test.
#[derive(Debug, Default)]
pub struct Hits {
    pub flaky: AtomicUsize,
    pub missing: AtomicUsize,
    pub slow: AtomicUsize,
}

/// Starts the server on an ephemeral port. Returns the base URL
/// (e.g. "http://127.0.0.1:12345") and the hit counters.
pub fn start() -> (String, Arc<Hits>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(Hits::default());
    let server_hits = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let hits = Arc::clone(&server_hits);
            thread::spawn(move || handle(stream, &hits));
        }
    });
    (format!("http://127.0.0.1:{}", port), hits)
}

/// An address nothing listens on (bound, then released).
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, hits: &Hits) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]).to_string();
    let path = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    let agent = request
        .lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.trim()
                .eq_ignore_ascii_case("user-agent")
                .then(|| value.trim().to_string())
        })
        .unwrap_or_default();

    let (status, body): (&str, Vec<u8>) = match path.as_str() {
        "/page" => ("200 OK", PAGE_HTML.as_bytes().to_vec()),
        "/flaky" => {
            if hits.flaky.fetch_add(1, Ordering::SeqCst) < 2 {
                ("503 Service Unavailable", b"busy".to_vec())
            } else {
                ("200 OK", b"<html><body>Recovered</body></html>".to_vec())
            }
        }
        "/missing" => {
            hits.missing.fetch_add(1, Ordering::SeqCst);
            ("404 Not Found", b"<html><body>nope</body></html>".to_vec())
        }
        "/slow" => {
            hits.slow.fetch_add(1, Ordering::SeqCst);
            thread::sleep(SLOW_DELAY);
            ("200 OK", b"<html><body>too late</body></html>".to_vec())
        }
        "/latin1" => ("200 OK", b"<html><body>caf\xe9</body></html>".to_vec()),
        "/agent" => ("200 OK", format!("<html><body>{}</body></html>", agent).into_bytes()),
        _ => ("404 Not Found", Vec::new()),
    };

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
}
