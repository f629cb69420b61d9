use clap::Parser;
use anyhow::Context;
use seo_collector::{ArticleCollector, CollectorConfig, Collection, KeywordOutcome, LinkOutcome, ProviderKind};
use seo_core::{ArticleRequest, Result};
use seo_inference::{DEFAULT_MODEL, SUPPORTED_MODELS};
use seo_web::{AppState, ServerConfig};
use seo_writer::Composer;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};

#[derive(Debug, Clone, PartialEq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let overflow = || format!("Duration too large: {}", s);
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if !current_number.is_empty() {
                let num = current_number.parse::<u64>().map_err(|_| overflow())?;
                let seconds = match c {
                    's' => Some(num),
                    'm' => num.checked_mul(60),
                    'h' => num.checked_mul(3600),
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                };
                total_seconds = seconds
                    .and_then(|secs| total_seconds.checked_add(secs))
                    .ok_or_else(overflow)?;
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // A trailing bare number counts as seconds
        if !current_number.is_empty() {
            let num = current_number.parse::<u64>().map_err(|_| overflow())?;
            total_seconds = total_seconds.checked_add(num).ok_or_else(overflow)?;
            has_unit = true;
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(name = "seo", author, version, about = "Write SEO articles from the top search results for a topic", long_about = None)]
pub struct Cli {
    #[arg(long, default_value = DEFAULT_MODEL, help = "Model to write with: gpt-3.5-turbo (default), gpt-4, or dummy for offline runs")]
    model: String,
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// OpenAI-compatible endpoint, e.g. http://localhost:11434/v1
    #[arg(long, env = "OPENAI_BASE_URL")]
    base_url: Option<String>,
    /// duckduckgo or duckduckgo-text
    #[arg(long, default_value = "duckduckgo")]
    search_provider: ProviderKind,
    /// Links kept per keyword
    #[arg(long, default_value_t = seo_collector::DEFAULT_MAX_LINKS_PER_KEYWORD)]
    max_links: usize,
    /// Timeout for page fetches and model calls (e.g. 30s, 2m)
    #[arg(long, default_value = "30s")]
    timeout: HumanDuration,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Write one article and print its HTML and references
    Generate {
        #[arg(long)]
        topic: String,
        /// Comma separated keywords
        #[arg(long)]
        keywords: String,
        /// Target length in words
        #[arg(long, default_value_t = 100)]
        length: u32,
        #[arg(long, default_value = "English")]
        language: String,
        #[arg(long, default_value = "exciting")]
        tone: String,
        #[arg(long, default_value = "general")]
        audience: String,
        /// Write the HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Search and fetch only, then report what was found
    Collect {
        /// Comma separated keywords
        keywords: String,
        #[arg(long)]
        json: bool,
    },
    /// Serve the JSON API
    Serve {
        /// Overrides SERVER_PORT
        #[arg(long)]
        port: Option<u16>,
        /// Overrides ROOT_PATH
        #[arg(long)]
        root_path: Option<String>,
    },
    /// List the models the API offers
    Models,
}

impl Cli {
    fn collector_config(&self) -> CollectorConfig {
        CollectorConfig {
            max_links_per_keyword: self.max_links,
            fetch_timeout: self.timeout.0,
            provider: self.search_provider,
            ..CollectorConfig::default()
        }
    }

    fn composer(&self) -> Result<Composer> {
        let collector = ArticleCollector::from_config(&self.collector_config())?;
        info!("🦗 Collector ready (search: {}, {} links per keyword)", collector.search_provider(), self.max_links);
        Ok(Composer::new(collector)
            .with_base_url(self.base_url.clone())
            .with_timeout(Some(self.timeout.0)))
    }
}

fn print_collection(collection: &Collection) {
    for outcome in &collection.outcomes {
        match outcome {
            KeywordOutcome::Searched { keyword, links } => {
                println!("🔍 {} ({} links)", keyword, links.len());
                for link in links {
                    match link {
                        LinkOutcome::Fetched { result, text } => {
                            println!("  ✅ {} ({} chars)", result.url, text.chars().count())
                        }
                        LinkOutcome::Failed { result, reason } => println!("  ❌ {}: {}", result.url, reason),
                    }
                }
            }
            KeywordOutcome::Failed { keyword, reason } => println!("❌ {}: {}", keyword, reason),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    seo_collector::logging::init_logging(if cli.verbose { Level::DEBUG } else { Level::INFO });

    match &cli.command {
        Commands::Generate { topic, keywords, length, language, tone, audience, output } => {
            let composer = cli.composer()?;
            let request = ArticleRequest {
                model: cli.model.clone(),
                api_key: cli.api_key.clone(),
                topic: topic.clone(),
                keywords: keywords.clone(),
                length: *length,
                language: language.clone(),
                tone: tone.clone(),
                audience: audience.clone(),
            };

            info!("📝 Writing article about {}", topic);
            let article = composer.compose(&request).await;

            match output {
                Some(path) => {
                    std::fs::write(path, &article.html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("💾 Article written to {}", path.display());
                }
                None => println!("{}", article.html),
            }
            println!("{}", serde_json::to_string_pretty(&article.references)?);
        }
        Commands::Collect { keywords, json } => {
            let collector = ArticleCollector::from_config(&cli.collector_config())?;
            let collection = collector.collect(keywords).await;
            if *json {
                println!("{}", serde_json::to_string_pretty(&collection)?);
            } else {
                print_collection(&collection);
            }
        }
        Commands::Serve { port, root_path } => {
            let mut config = ServerConfig::from_env();
            if let Some(port) = port {
                config.port = *port;
            }
            if let Some(root_path) = root_path {
                config.root_path = root_path.clone();
            }

            let state = AppState::new(Arc::new(cli.composer()?))
                .with_default_api_key(cli.api_key.clone());
            seo_web::serve(config, state).await?;
        }
        Commands::Models => {
            for model in SUPPORTED_MODELS {
                let marker = if model == DEFAULT_MODEL { " (default)" } else { "" };
                println!("{}{}", model, marker);
            }
            println!("{} (offline)", seo_inference::models::DUMMY_MODEL);
        }
    }

    Ok(())
}
