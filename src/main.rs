use clap::Parser;
use quiz_tui::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "quiz-tui", about = "Trivia quiz in your terminal")]
struct Args {
    /// Score and move on with a single press (no separate Submit step)
    #[arg(long)]
    single_step: bool,

    /// Trivia endpoint to fetch questions from
    #[arg(long)]
    url: Option<String>,

    /// Number of questions per quiz
    #[arg(short, long)]
    limit: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to quiz-tui.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("quiz-tui.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        config::QuizConfig::default()
    });
    let cli = CliOverrides {
        single_step: args.single_step,
        url: args.url,
        limit: args.limit,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "quiz-tui starting up: url={}, two_step={}",
        resolved.api_url,
        resolved.two_step
    );

    quiz_tui::tui::run(resolved)
}
