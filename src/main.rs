use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cvanalyzer::models::CvReport;
use cvanalyzer::{report, AnalysisPipeline, AnalyzerConfig, Config, OllamaProvider};

#[derive(Parser, Debug)]
#[command(name = "cvanalyzer")]
#[command(version = "0.1.0")]
#[command(about = "Score a CV for ATS compatibility and suggest improvements")]
struct Args {
    /// CV file to analyze (.pdf or .docx)
    file: PathBuf,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Ollama model name (overrides OLLAMA_MODEL)
    #[arg(short, long)]
    model: Option<String>,

    /// Ollama base URL (overrides OLLAMA_BASE_URL)
    #[arg(long)]
    ollama_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("cvanalyzer=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        tracing::error!("Analysis failed at the {} boundary", e.boundary());
        eprintln!("Analysis failed ({}): {}", e.boundary(), e);
        if let Some(hint) = e.hint() {
            eprintln!("Troubleshooting: {}", hint);
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(args: Args) -> cvanalyzer::Result<()> {
    let config = Config::from_env()?.with_overrides(args.model, args.ollama_url)?;

    let llm = OllamaProvider::from_config(&config)?;
    let pipeline = AnalysisPipeline::new(llm, AnalyzerConfig::from(&config));

    let analysis = pipeline.analyze_document(&args.file).await?;

    let file_name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());
    let cv_report = CvReport::new(file_name, pipeline.model().to_string(), analysis);

    let output = report::render(&cv_report, &args.format)?;
    report::write_output(&output, args.output.as_deref())
}
