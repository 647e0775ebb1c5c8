//! Example: Querying several verticals concurrently with one client.

use futures::future::try_join3;
use serper_client::{Client, SearchRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("SERPER_API_KEY")
        .map_err(|_| anyhow::anyhow!("SERPER_API_KEY environment variable not set"))?;

    let client = Client::new(api_key)?;
    let request = SearchRequest::new("tour eiffel").with_gl("fr").with_hl("fr");

    // One client, three concurrent round trips
    let (news, videos, places) = try_join3(
        client.news(&request),
        client.videos(&request),
        client.places(&request),
    )
    .await?;

    println!("News ({} credits):", news.base.credits);
    for item in news.news.iter().take(3) {
        println!("  {} - {} ({})", item.position, item.title, item.source);
    }

    println!("Videos ({} credits):", videos.base.credits);
    for item in videos.videos.iter().take(3) {
        println!("  {} - {}", item.position, item.title);
    }

    println!("Places ({} credits):", places.base.credits);
    for item in places.places.iter().take(3) {
        let rating = item
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        println!("  {} - {} (rating {})", item.position, item.title, rating);
    }

    Ok(())
}
