use anyhow::Context;
use nptel_scraper::config::settings::Settings;
use nptel_scraper::core::pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("nptel_scraper=info"),
    )
    .init();

    let settings = Settings::load().context("failed to load settings")?;
    let summary = pipeline::run(&settings)
        .await
        .with_context(|| format!("failed to scrape {}", settings.listing_url))?;

    println!(
        "✅ Scraping completed. Saved to {}",
        summary.output.display()
    );
    Ok(())
}
