use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use civicwatch::gateway::gemini::to_data_uri;
use civicwatch::gateway::{ModelClient, PromptGateway, TranscribeRequest};
use civicwatch::store::IssueStore;

/// Transcribes either an issue's voice memo or an explicit audio file.
pub async fn run<C: ModelClient>(
    store: &IssueStore,
    gateway: &PromptGateway<C>,
    id: Option<&str>,
    file: Option<&Path>,
) -> Result<()> {
    let path = match (id, file) {
        (_, Some(path)) => path.to_path_buf(),
        (Some(id), None) => {
            let issue = match store.get(id) {
                Some(i) => i,
                None => bail!("Issue '{}' not found", id),
            };
            match &issue.voice_memo_url {
                Some(memo) => Path::new(memo.trim_start_matches('/')).to_path_buf(),
                None => bail!("Issue '{}' has no voice memo", id),
            }
        }
        (None, None) => bail!("Provide an issue id or --file"),
    };

    let bytes = fs::read(&path)
        .with_context(|| format!("Failed to read audio file {}", path.display()))?;
    let request = TranscribeRequest {
        audio: to_data_uri(mime_for_path(&path), &bytes),
    };

    let response = gateway
        .transcribe(&request)
        .await
        .context("Could not transcribe the audio")?;

    println!("Transcription: {}", response.transcription);
    Ok(())
}

fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match extension.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a") => "audio/mp4",
        Some("ogg") => "audio/ogg",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use civicwatch::gateway::Prompt;
    use civicwatch::seed;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    struct StubClient;

    impl ModelClient for StubClient {
        async fn generate(&self, prompt: &Prompt) -> Result<Value> {
            if prompt.media.is_none() {
                return Err(anyhow!("expected inline audio"));
            }
            Ok(json!({ "transcription": "there is a large pothole near the gate" }))
        }
    }

    #[test]
    fn test_mime_for_known_extensions() {
        assert_eq!(mime_for_path(Path::new("memo.mp3")), "audio/mpeg");
        assert_eq!(mime_for_path(Path::new("memo.WAV")), "audio/wav");
        assert_eq!(mime_for_path(Path::new("memo.ogg")), "audio/ogg");
        assert_eq!(mime_for_path(Path::new("memo")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_transcribe_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("memo.mp3");
        fs::write(&path, b"fake audio bytes").unwrap();

        let store = IssueStore::new();
        let gateway = PromptGateway::new(StubClient);
        assert!(run(&store, &gateway, None, Some(&path)).await.is_ok());
    }

    #[tokio::test]
    async fn test_transcribe_requires_a_source() {
        let store = IssueStore::new();
        let gateway = PromptGateway::new(StubClient);
        let err = run(&store, &gateway, None, None).await.unwrap_err();
        assert!(err.to_string().contains("issue id or --file"));
    }

    #[tokio::test]
    async fn test_transcribe_issue_without_memo() {
        let store = IssueStore::with_issues(seed::issues());
        let gateway = PromptGateway::new(StubClient);
        let err = run(&store, &gateway, Some("issue-2"), None).await.unwrap_err();
        assert!(err.to_string().contains("no voice memo"));
    }

    #[tokio::test]
    async fn test_transcribe_missing_file_errors() {
        let store = IssueStore::new();
        let gateway = PromptGateway::new(StubClient);
        let err = run(&store, &gateway, None, Some(Path::new("does-not-exist.mp3")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read audio file"));
    }
}
