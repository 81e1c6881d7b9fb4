//! Home timeline example.
//!
//! This example verifies the configured credentials, prints the most recent
//! tweets on the home timeline, and shows the author's own latest tweet.
//!
//! Run with: cargo run --example home_timeline

use tweetlite_rs::auth::{AccessCredentials, ConsumerCredentials};
use tweetlite_rs::{TimelineParams, TwitterClient};

fn main() -> tweetlite_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Get credentials from environment variables
    let consumer_key = std::env::var("TWITTER_CONSUMER_KEY")
        .expect("TWITTER_CONSUMER_KEY environment variable required");
    let consumer_secret = std::env::var("TWITTER_CONSUMER_SECRET")
        .expect("TWITTER_CONSUMER_SECRET environment variable required");
    let access_token = std::env::var("TWITTER_ACCESS_TOKEN")
        .expect("TWITTER_ACCESS_TOKEN environment variable required");
    let access_secret = std::env::var("TWITTER_ACCESS_SECRET")
        .expect("TWITTER_ACCESS_SECRET environment variable required");

    let client = TwitterClient::new(
        ConsumerCredentials::new(consumer_key, consumer_secret),
        AccessCredentials::new(access_token, access_secret),
    )?;

    let me = client.account().verify_credentials()?;
    println!("Signed in as @{} ({} followers)", me.screen_name, me.followers_count);

    let timeline = client
        .statuses()
        .home_timeline(&TimelineParams::new().count(10))?;
    println!("\nLatest {} tweet(s) on your home timeline:", timeline.len());

    for tweet in &timeline {
        let author = tweet
            .author()
            .map(|user| user.screen_name.as_str())
            .unwrap_or("unknown");
        println!("  - [{}] @{}: {}", tweet.created_at.format("%Y-%m-%d %H:%M"), author, tweet.text);
    }

    if let Some(latest) = me.timeline(&TimelineParams::new().count(1))?.first() {
        println!("\nYour latest tweet ({}): {}", latest.id, latest.text);
    }

    println!("\nDone!");
    Ok(())
}
