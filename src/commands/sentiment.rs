use anyhow::{bail, Context, Result};

use civicwatch::gateway::{ModelClient, PromptGateway, SentimentRequest};
use civicwatch::store::IssueStore;

pub async fn run<C: ModelClient>(
    store: &IssueStore,
    gateway: &PromptGateway<C>,
    id: &str,
) -> Result<()> {
    let issue = match store.get(id) {
        Some(i) => i,
        None => bail!("Issue '{}' not found", id),
    };

    if issue.comments.is_empty() {
        bail!("Issue '{}' has no comments to analyze", id);
    }

    let request = SentimentRequest {
        comments: issue
            .comments
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    };

    let response = gateway
        .analyze_sentiment(&request)
        .await
        .context("Could not analyze comment sentiment")?;

    println!("Sentiment: {}", response.sentiment);
    println!("Explanation: {}", response.explanation);
    Ok(())
}
