//! `GeminiClient` against a scripted local HTTP listener.

use std::sync::Arc;
use std::time::Duration;

use mtd_config::GenaiConfig;
use mtd_core::{DocumentKind, Grade, GenerationRequest, Language, MaxScore};
use mtd_genai::{
    CannedGenerator, GeminiClient, GenerationError, PromptBuilder, RetryPolicy,
    generate_with_retry,
};
use pretty_assertions::assert_eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

const OK_BODY: &str = r#"{"candidates":[{"content":{"parts":[{"text":"Задание 1. Решите"}]}}]}"#;

/// Serve one scripted `(status, body)` per connection; returns the base URL
/// and the captured request heads.
async fn serve(script: Vec<(u16, &'static str)>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&seen);

    tokio::spawn(async move {
        for (status, body) in script {
            let (mut socket, _) = listener.accept().await.unwrap();
            let head = read_request(&mut socket).await;
            captured.lock().await.push(head);
            let response = format!(
                "HTTP/1.1 {status} X\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        }
    });

    (format!("http://{addr}"), seen)
}

/// Read headers plus a `content-length` body; return the request line.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|l| {
                    let (name, value) = l.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + length || n == 0 {
                return text.lines().next().unwrap_or_default().to_string();
            }
        }
        if n == 0 {
            return String::new();
        }
    }
}

fn client(endpoint: String) -> GeminiClient {
    GeminiClient::from_config(&GenaiConfig {
        api_key: "test-key".into(),
        endpoint,
        timeout_secs: 5,
        ..Default::default()
    })
}

const FAST: RetryPolicy = RetryPolicy {
    max_attempts: 3,
    delay: Duration::from_millis(5),
};

#[tokio::test]
async fn posts_to_generate_content_path() {
    let (endpoint, seen) = serve(vec![(200, OK_BODY)]).await;
    let text = generate_with_retry(&client(endpoint), "prompt", &FAST)
        .await
        .unwrap();

    assert_eq!(text, "Задание 1. Решите");
    let seen = seen.lock().await;
    assert_eq!(
        seen[0],
        "POST /v1beta/models/gemini-1.5-flash:generateContent?key=test-key HTTP/1.1"
    );
}

#[tokio::test]
async fn retries_through_quota_errors() {
    let (endpoint, seen) = serve(vec![
        (429, r#"{"error":{"status":"RESOURCE_EXHAUSTED"}}"#),
        (503, "overloaded"),
        (200, OK_BODY),
    ])
    .await;
    let text = generate_with_retry(&client(endpoint), "prompt", &FAST)
        .await
        .unwrap();

    assert_eq!(text, "Задание 1. Решите");
    assert_eq!(seen.lock().await.len(), 3);
}

#[tokio::test]
async fn bad_key_fails_without_retry() {
    let (endpoint, seen) = serve(vec![(400, "API key not valid"), (200, OK_BODY)]).await;
    let err = generate_with_retry(&client(endpoint), "prompt", &FAST)
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Api { status: 400, .. }));
    assert_eq!(seen.lock().await.len(), 1);
}

#[tokio::test]
async fn canned_generator_feeds_prompt_pipeline() {
    let request = GenerationRequest {
        subject: "Физика".into(),
        grade: Grade::new(8).unwrap(),
        topic: "Давление".into(),
        goals: "8.2.1.1".into(),
        max_score: MaxScore::new(10).unwrap(),
        kind: DocumentKind::Summative,
        student: None,
        variant: Some(1),
        language: Language::Russian,
        teacher: "Иванова".into(),
    };
    let prompt = PromptBuilder::new(&request).build();
    let generator = CannedGenerator("Задание 1. Вычислите давление".into());

    let text = generate_with_retry(&generator, &prompt, &RetryPolicy::none())
        .await
        .unwrap();
    assert_eq!(text, "Задание 1. Вычислите давление");
}
