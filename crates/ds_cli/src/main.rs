use clap::Parser;
use ds_classifier::Classifier;
use ds_core::{ClassifiedArticle, Error, Result};
use ds_sources::{NewsApiSource, NewsSource};
use ds_web::{aggregate, AppState};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Ok(num) = current_number.parse::<u64>() {
                let seconds = match c {
                    's' => num,
                    'm' => num.saturating_mul(60),
                    'h' => num.saturating_mul(3600),
                    'd' => num.saturating_mul(86400),
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                };
                total_seconds = total_seconds.saturating_add(seconds);
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // A trailing bare number counts as seconds
        if !current_number.is_empty() {
            if let Ok(num) = current_number.parse::<u64>() {
                total_seconds = total_seconds.saturating_add(num);
                has_unit = true;
            } else {
                return Err("Invalid number in duration".to_string());
            }
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Defense news sentiment tracker", long_about = None)]
struct Cli {
    /// NewsAPI key; falls back to the NEWSAPI_KEY environment variable
    #[arg(long)]
    api_key: Option<String>,
    /// Override the search query sent to the news API
    #[arg(long)]
    query: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch and classify the latest articles once, printing the results
    Fetch {
        /// Emit the classified records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Fetch periodically, e.g. every 1h, 30m or 1h15m30s
    Watch {
        #[arg(long, default_value = "1h")]
        interval: HumanDuration,
    },
    /// Serve the dashboard API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

fn build_source(cli: &Cli) -> Result<NewsApiSource> {
    let api_key = cli
        .api_key
        .clone()
        .or_else(|| std::env::var("NEWSAPI_KEY").ok())
        .ok_or_else(|| {
            Error::Config("no API key given; pass --api-key or set NEWSAPI_KEY".to_string())
        })?;

    let mut source = NewsApiSource::new(api_key);
    if let Some(query) = &cli.query {
        source = source.with_query(query.clone());
    }
    Ok(source)
}

fn print_records(records: &[ClassifiedArticle]) {
    for record in records {
        let marker = if record.is_threat { "⚠️" } else { "  " };
        println!(
            "{} [{}] [{}] {} ({}, {})",
            marker, record.region, record.sentiment, record.title, record.source, record.date
        );
    }

    let sentiments = aggregate::sentiment_counts(records);
    let threats = aggregate::threat_count(records);
    info!(
        "🧠 {} articles: {} positive, {} negative, {} neutral, {} flagged as threats",
        records.len(),
        sentiments.get(&ds_core::Sentiment::Positive).unwrap_or(&0),
        sentiments.get(&ds_core::Sentiment::Negative).unwrap_or(&0),
        sentiments.get(&ds_core::Sentiment::Neutral).unwrap_or(&0),
        threats
    );
}

async fn fetch_cycle(source: &NewsApiSource, classifier: &Classifier) -> Vec<ClassifiedArticle> {
    match source.fetch_latest().await {
        Ok(raw) => classifier.classify_all(&raw),
        Err(e) => {
            warn!("⚠️ Fetch failed, showing zero articles: {}", e);
            Vec::new()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let source = build_source(&cli)?;
    let classifier = Classifier::default();
    info!("🧠 Sentiment scorer initialized ({})", classifier.scorer_name());

    match cli.command {
        Commands::Fetch { json } => {
            let records = fetch_cycle(&source, &classifier).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print_records(&records);
            }
        }
        Commands::Watch { interval } => {
            info!("🛰️ Watching, refreshing every {}s", interval.0.as_secs());
            loop {
                let records = fetch_cycle(&source, &classifier).await;
                print_records(&records);
                tokio::time::sleep(interval.0).await;
            }
        }
        Commands::Serve { addr } => {
            let state = Arc::new(AppState::new(Arc::new(source), classifier));
            state.refresh().await;

            let app = ds_web::create_app(state);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("🛰️ Serving dashboard API on {}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
