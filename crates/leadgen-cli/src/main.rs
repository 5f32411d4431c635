//! Command-line front end for the lead-collection pipeline.
//!
//! Stands in for the conversational/payment collaborator: it assembles a
//! validated `JobRequest` from arguments, runs one collection to completion,
//! and exports the result. Fatal pipeline errors surface with the provider
//! status intact; an empty result is reported as a distinct terminal state.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use leadgen_core::{FilterSpec, JobRequest, PresenceFilter, RatingFilter};
use leadgen_scraper::{EmailHarvester, LeadCollector, Pacing, PlacesClient};

#[derive(Debug, Parser)]
#[command(name = "leadgen")]
#[command(about = "Collect business leads around a location and export them")]
struct Cli {
    /// Free-text place name, or literal "lat,lng" coordinates.
    #[arg(long)]
    location: String,

    /// Search radius in meters.
    #[arg(long)]
    radius: u32,

    /// Keyword to search; repeat the flag for multiple keywords.
    #[arg(short = 'k', long = "keyword", required = true)]
    keywords: Vec<String>,

    /// Website filter: no_filter, with, without.
    #[arg(long, default_value = "no_filter")]
    website_filter: String,

    /// Email filter: no_filter, with, without.
    #[arg(long, default_value = "no_filter")]
    email_filter: String,

    /// Rating filter: no_filter, or 1..5 ("5" means exactly 5.0,
    /// lower values mean "at least").
    #[arg(long, default_value = "no_filter")]
    rating_filter: String,

    /// CSV output path.
    #[arg(long, default_value = "leads.csv")]
    out: PathBuf,

    /// Also write an XLSX rendering to this path.
    #[arg(long)]
    xlsx: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = leadgen_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let filters = FilterSpec {
        website: cli.website_filter.parse::<PresenceFilter>()?,
        email: cli.email_filter.parse::<PresenceFilter>()?,
        rating: cli.rating_filter.parse::<RatingFilter>()?,
    };

    let job = JobRequest::builder()
        .location(cli.location)
        .radius_meters(cli.radius)
        .keywords(cli.keywords)
        .filters(filters)
        .build()?;

    let client = PlacesClient::new(
        &config.google_api_key,
        config.http_timeout_secs,
        &config.user_agent,
    )?;
    let harvester = EmailHarvester::new(config.http_timeout_secs, &config.user_agent)?;
    let pacing = Pacing::new(
        config.page_token_delay_ms,
        config.detail_jitter_min_ms,
        config.detail_jitter_max_ms,
    );
    let collector = LeadCollector::new(client, harvester, pacing, config.max_pages_per_keyword);

    let leads = collector.collect(&job).await?;
    if leads.is_empty() {
        tracing::info!("no leads matched the request; exporting a header-only table");
    }

    let csv_path = leadgen_export::write_csv(&leads, &cli.out)?;
    tracing::info!(path = %csv_path.display(), lead_count = leads.len(), "wrote CSV export");

    if let Some(xlsx_path) = &cli.xlsx {
        let written = leadgen_export::write_xlsx(&leads, xlsx_path)?;
        tracing::info!(path = %written.display(), "wrote XLSX export");
    }

    Ok(())
}
