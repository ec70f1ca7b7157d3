//! Minimal in-process HTTP server standing in for the FRED endpoint in tests.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub const OBSERVATIONS_PATH: &str = "/fred/series/observations";

/// Serves canned responses on `127.0.0.1` and records each request target.
pub struct StubServer {
    url: String,
    targets: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Start serving; `respond` maps a request target (path + query) to `(status, body)`.
    pub fn start<F>(respond: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let targets = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&targets);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                handle(stream, &respond, &recorded);
            }
        });

        Self {
            url: format!("http://{addr}{OBSERVATIONS_PATH}"),
            targets,
        }
    }

    /// Serve the same body with status 200 for every series.
    pub fn ok(body: &str) -> Self {
        let body = body.to_string();
        Self::start(move |_| (200, body.clone()))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

/// An endpoint on a port nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{OBSERVATIONS_PATH}")
}

/// Value of `key` in the query string of `target`, if present.
pub fn query_param(target: &str, key: &str) -> Option<String> {
    let (_, query) = target.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        (k == key).then(|| v.to_string())
    })
}

fn handle<F>(mut stream: TcpStream, respond: &F, recorded: &Mutex<Vec<String>>)
where
    F: Fn(&str) -> (u16, String),
{
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // Drain headers; GET requests carry no body.
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) if line == "\r\n" || line == "\n" => break,
            Ok(_) => continue,
            Err(_) => return,
        }
    }

    let target = request_line.split_whitespace().nth(1).unwrap_or("").to_string();
    recorded.lock().unwrap().push(target.clone());

    let (status, body) = respond(&target);
    let reason = if status < 400 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
