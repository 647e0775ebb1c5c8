//! Example: Basic web search with optional parameters.

use serper_client::{Client, SearchRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("SERPER_API_KEY")
        .map_err(|_| anyhow::anyhow!("SERPER_API_KEY environment variable not set"))?;

    let client = Client::new(api_key)?;

    let request = SearchRequest::new("rust programming language")
        .with_gl("us")
        .with_hl("en")
        .with_num(10);

    println!("Searching for: {}", request.q);
    println!();

    let response = client.search(&request).await?;

    println!("Call cost {} credit(s)", response.base.credits);
    println!();

    for result in &response.organic {
        println!("{}. {}", result.position, result.title);
        println!("   URL: {}", result.link);
        if !result.snippet.is_empty() {
            let snippet = if result.snippet.len() > 100 {
                format!("{}...", &result.snippet[..100])
            } else {
                result.snippet.clone()
            };
            println!("   {}", snippet);
        }
        println!();
    }

    if let Some(kg) = &response.knowledge_graph {
        println!("Knowledge graph: {} ({})", kg.title, kg.entity_type);
    }

    for related in &response.related_searches {
        println!("Related: {}", related.query);
    }

    Ok(())
}
