use crate::error::Result;
use crate::package::Version;
use crate::url_generator::UrlGenerator;
use regex::Regex;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::LazyLock;
use std::thread;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("valid ANSI pattern"));

/// Drops terminal color codes so display output can be compared as text
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Generator answering with canned urls, whatever the source
pub struct FakeUrlGenerator {
    supports: bool,
    compare_url: Option<String>,
    release_url: Option<String>,
}

impl FakeUrlGenerator {
    pub fn new(supports: bool, compare_url: Option<&str>, release_url: Option<&str>) -> Self {
        Self {
            supports,
            compare_url: compare_url.map(str::to_string),
            release_url: release_url.map(str::to_string),
        }
    }
}

impl UrlGenerator for FakeUrlGenerator {
    fn supports(&self, _source_url: &str) -> bool {
        self.supports
    }

    fn generate_compare_url(
        &self,
        _source_url_from: &str,
        _version_from: &Version,
        _source_url_to: &str,
        _version_to: &Version,
    ) -> Result<Option<String>> {
        Ok(self.compare_url.clone())
    }

    fn generate_release_url(&self, _source_url: &str, _version: &Version) -> Result<Option<String>> {
        Ok(self.release_url.clone())
    }
}

/// Answers a single request with `status_line` and hands back the raw
/// request it received.
pub fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = format!("http://{}/hook", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        request
    });

    (address, handle)
}

/// Listener that never answers, for asserting that nothing was posted
pub fn silent_listener() -> (String, TcpListener) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = format!("http://{}/hook", listener.local_addr().unwrap());
    (address, listener)
}

/// Whether a client connected to `listener` since it was bound
pub fn received_connection(listener: &TcpListener) -> bool {
    listener.set_nonblocking(true).unwrap();
    match listener.accept() {
        Ok(_) => true,
        Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => false,
        Err(e) => panic!("unexpected accept error: {e}"),
    }
}

fn read_request(stream: &mut impl Read) -> String {
    let mut data = Vec::new();
    let mut buffer = [0u8; 1024];

    loop {
        let read = stream.read(&mut buffer).unwrap();
        if read == 0 {
            break;
        }
        data.extend_from_slice(&buffer[..read]);

        let text = String::from_utf8_lossy(&data);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if data.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8(data).unwrap()
}
