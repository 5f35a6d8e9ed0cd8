//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves canned responses by request path. A route can delay its response to
//! simulate a slow server, redirect, or echo the request's `User-Agent`.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub reason: &'static str,
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
    /// Sleep this long before writing anything.
    pub delay: Duration,
    pub location: Option<&'static str>,
    /// Respond with the request's `User-Agent` value as the body.
    pub echo_user_agent: bool,
}

impl Route {
    pub fn ok(body: &str) -> Self {
        Self::with_status(200, "OK", body.as_bytes())
    }

    pub fn with_status(status: u16, reason: &'static str, body: &[u8]) -> Self {
        Self {
            status,
            reason,
            content_type: Some("text/plain"),
            body: body.to_vec(),
            delay: Duration::ZERO,
            location: None,
            echo_user_agent: false,
        }
    }

    pub fn content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn redirect(location: &'static str) -> Self {
        let mut route = Self::with_status(302, "Found", b"");
        route.location = Some(location);
        route
    }

    pub fn user_agent_echo() -> Self {
        let mut route = Self::ok("");
        route.echo_user_agent = true;
        route
    }
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Unknown paths get 404.
pub fn start(routes: Vec<(&'static str, Route)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<&'static str, Route>> = Arc::new(routes.into_iter().collect());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A URL on which nothing is listening.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<&'static str, Route>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (path, user_agent) = parse_request(request);

    let not_found = Route::with_status(404, "Not Found", b"no such page");
    let route = routes.get(path).unwrap_or(&not_found);
    if !route.delay.is_zero() {
        thread::sleep(route.delay);
    }

    let body: Vec<u8> = if route.echo_user_agent {
        user_agent.unwrap_or("").as_bytes().to_vec()
    } else {
        route.body.clone()
    };
    let mut head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        route.reason,
        body.len()
    );
    if let Some(content_type) = route.content_type {
        head.push_str(&format!("Content-Type: {}\r\n", content_type));
    }
    if let Some(location) = route.location {
        head.push_str(&format!("Location: {}\r\n", location));
    }
    head.push_str("\r\n");
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
}

/// Returns (path, optional User-Agent value).
fn parse_request(request: &str) -> (&str, Option<&str>) {
    let mut path = "/";
    let mut user_agent = None;
    for (i, line) in request.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if i == 0 {
            path = line.split_whitespace().nth(1).unwrap_or("/");
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim());
            }
        }
    }
    (path, user_agent)
}
