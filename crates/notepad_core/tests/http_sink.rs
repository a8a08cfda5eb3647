use notepad_core::{HttpNoteSink, NoopSink, NoteStore, SyncConfig, SyncError};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

struct CapturedRequest {
    head: String,
    body: String,
}

/// Accepts one connection, captures the request and replies with `response`.
async fn spawn_stub_server(response: String) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("loopback bind should succeed");
    let base_url = base_url_of(&listener);
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("stub server should accept");
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 1024];
        let (head, body) = loop {
            let read = socket
                .read(&mut chunk)
                .await
                .expect("request should be readable");
            assert!(read > 0, "client closed before sending a full request");
            buf.extend_from_slice(&chunk[..read]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(split) = text.find("\r\n\r\n") {
                let head = text[..split].to_string();
                let body = text[split + 4..].to_string();
                let expected = content_length(&head);
                if body.len() >= expected {
                    break (head, body);
                }
            }
        };

        socket
            .write_all(response.as_bytes())
            .await
            .expect("response should be writable");
        socket.shutdown().await.ok();
        let _ = tx.send(CapturedRequest { head, body });
    });

    (base_url, rx)
}

fn base_url_of(listener: &TcpListener) -> String {
    let addr = listener
        .local_addr()
        .expect("listener should have an address");
    format!("http://{addr}")
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn add_posts_note_as_json_to_notes_endpoint() {
    let (base_url, captured) = spawn_stub_server(http_response(
        "200 OK",
        r#"{"id": 7, "message": "Note successfully created"}"#,
    ))
    .await;
    let config = SyncConfig::new(&base_url).expect("stub url should be valid");
    let sink = HttpNoteSink::new(&config, Handle::current()).expect("http sink should build");

    let mut store = NoteStore::new(sink);
    let id = store.add(" Groceries ", "Milk, eggs").expect("non-blank input should create a note");
    assert_eq!(store.len(), 1);

    let request = tokio::time::timeout(Duration::from_secs(5), captured)
        .await
        .expect("stub server should receive a request")
        .expect("stub server should report the request");
    let head = request.head.to_ascii_lowercase();
    assert!(head.starts_with("post /notes http/1.1"));
    assert!(head.contains("content-type: application/json"));

    let payload: serde_json::Value =
        serde_json::from_str(&request.body).expect("request body should be JSON");
    assert_eq!(payload["id"], serde_json::json!(id.as_i64()));
    assert_eq!(payload["title"], "Groceries");
    assert_eq!(payload["content"], "Milk, eggs");
    assert!(payload["created_at"].is_string());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dispatch_parses_acknowledgement() {
    let (base_url, _captured) = spawn_stub_server(http_response(
        "200 OK",
        r#"{"id": 7, "message": "Note successfully created"}"#,
    ))
    .await;
    let config = SyncConfig::new(&base_url).expect("stub url should be valid");
    let sink = HttpNoteSink::new(&config, Handle::current()).expect("http sink should build");
    let mut store = NoteStore::new(NoopSink);

    let id = store.add("title", "").expect("non-blank input should create a note");
    let note = store.get(id).expect("note should be stored").clone();
    let ack = sink.dispatch(&note)
        .await
        .expect("sync task should not panic")
        .expect("create-note should succeed");

    assert_eq!(ack.remote_id, Some(7));
    assert_eq!(ack.message.as_deref(), Some("Note successfully created"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn server_error_is_reported_without_touching_store() {
    let (base_url, _captured) =
        spawn_stub_server(http_response("500 Internal Server Error", "boom")).await;
    let config = SyncConfig::new(&base_url).expect("stub url should be valid");
    let sink = HttpNoteSink::new(&config, Handle::current()).expect("http sink should build");
    let mut store = NoteStore::new(NoopSink);

    let id = store.add("title", "body").expect("non-blank input should create a note");
    let note = store.get(id).expect("note should be stored").clone();
    let err = sink.dispatch(&note)
        .await
        .expect("sync task should not panic")
        .expect_err("create-note should fail");

    assert!(matches!(err, SyncError::Status { code: 500, .. }));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(id).expect("note should be stored"), &note);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn refused_connection_never_affects_local_state() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("loopback bind should succeed");
    let base_url = base_url_of(&listener);
    drop(listener);

    let config = SyncConfig::new(&base_url).expect("stub url should be valid");
    let sink = HttpNoteSink::new(&config, Handle::current()).expect("http sink should build");
    let mut store = NoteStore::new(sink.clone());

    let id = store.add("offline", "still visible").expect("non-blank input should create a note");
    assert_eq!(store.len(), 1);

    let note = store.get(id).expect("note should be stored").clone();
    let err = sink.dispatch(&note)
        .await
        .expect("sync task should not panic")
        .expect_err("create-note should fail");
    assert!(matches!(err, SyncError::Transport(_)));

    store.delete(id);
    assert!(store.is_empty());
}

#[test]
fn add_returns_before_remote_call_completes() {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("runtime should build");

    // Accepts but never answers, so the request stays pending.
    let listener = runtime
        .block_on(TcpListener::bind("127.0.0.1:0"))
        .expect("loopback bind should succeed");
    let base_url = base_url_of(&listener);
    runtime.spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let config = SyncConfig::new(&base_url).expect("stub url should be valid");
    let sink =
        HttpNoteSink::new(&config, runtime.handle().clone()).expect("http sink should build");
    let mut store = NoteStore::new(sink);

    let first = store.add("one", "").expect("non-blank input should create a note");
    let second = store.add("two", "").expect("non-blank input should create a note");
    store.begin_edit_by_id(first);
    store.set_edit_title("uno");
    store.save_edit(first);
    store.delete(second);

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(first).expect("note should be stored").title, "uno");
    runtime.shutdown_background();
}
