use anyhow::{bail, Context, Result};

use civicwatch::gateway::{ModelClient, PromptGateway, SummarizeRequest};
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

    let request = SummarizeRequest {
        title: issue.title.clone(),
        description: issue.description.clone(),
        comments: issue.comments.iter().map(|c| c.text.clone()).collect(),
    };

    let response = gateway
        .summarize(&request)
        .await
        .context("Could not summarize the report")?;

    println!("Summary: {}", response.summary);
    println!("Sentiment: {}", response.sentiment);
    Ok(())
}
