use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

/// How the test server answers one connection.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: &'static str,
    /// Advertise more body bytes than are sent, then hang up.
    pub truncate_body: bool,
    pub header_delay: Duration,
    pub body_delay: Duration,
}

impl Reply {
    pub fn ok(body: &'static str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            truncate_body: false,
            header_delay: Duration::ZERO,
            body_delay: Duration::ZERO,
        }
    }

    pub fn truncated() -> Self {
        Self {
            truncate_body: true,
            ..Self::ok("OK")
        }
    }

    pub fn with_header_delay(mut self, delay: Duration) -> Self {
        self.header_delay = delay;
        self
    }

    pub fn with_body_delay(mut self, delay: Duration) -> Self {
        self.body_delay = delay;
        self
    }
}

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    hits: Arc<AtomicUsize>,
}

impl ServerHandle {
    /// Number of connections accepted so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _ = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

/// Spawn a one-connection-per-request HTTP server. Connection `i` is answered
/// with `replies[i % replies.len()]`.
pub fn spawn_http_server(replies: Vec<Reply>) -> (String, ServerHandle) {
    assert!(!replies.is_empty(), "at least one reply is required");

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("server addr");
    listener.set_nonblocking(true).expect("set_nonblocking");

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = hits.clone();

    let handle = thread::spawn(move || loop {
        if shutdown_rx.try_recv().is_ok() {
            break;
        }

        match listener.accept() {
            Ok((stream, _)) => {
                let n = server_hits.fetch_add(1, Ordering::SeqCst);
                let reply = replies[n % replies.len()].clone();
                thread::spawn(move || handle_client(stream, reply));
            }
            Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                thread::sleep(Duration::from_millis(5));
            }
            Err(_) => break,
        }
    });

    (
        format!("http://{}/", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
            hits,
        },
    )
}

/// A URL on a local port nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{}/", addr)
}

fn handle_client(mut stream: TcpStream, reply: Reply) {
    let _ = stream.set_nonblocking(false);
    let mut buffer = [0u8; 4096];
    if stream.read(&mut buffer).is_err() {
        return;
    }

    thread::sleep(reply.header_delay);

    let advertised = if reply.truncate_body {
        reply.body.len() + 100
    } else {
        reply.body.len()
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reply.status,
        reason(reply.status),
        advertised
    );
    if stream.write_all(head.as_bytes()).is_err() || stream.flush().is_err() {
        return;
    }

    thread::sleep(reply.body_delay);

    let _ = stream.write_all(reply.body.as_bytes());
    let _ = stream.flush();
    let _ = stream.shutdown(Shutdown::Both);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
