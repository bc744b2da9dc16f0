use anyhow::Context;
use chrono::Local;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use vocab_app::app::App;
use vocab_app::config::Config;
use vocab_app::content;

#[derive(Parser)]
#[command(name = "vocab", about = "Vocabulary drills for English exam preparation", version)]
struct Cli {
    /// Go straight to the vocabulary tool
    #[arg(short, long, conflicts_with = "reading")]
    vocab: bool,

    /// Print the reading strategies overview and exit
    #[arg(short, long)]
    reading: bool,

    /// Directory holding words.json, wrong_words.json and learning_log.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Questions per random or wrong-answer quiz
    #[arg(long)]
    quiz_size: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.reading {
        println!("{}", content::BANNER);
        println!("{}", content::READING_OVERVIEW);
        return Ok(());
    }

    let config = Config::load(cli.data_dir, cli.quiz_size).context("Failed to load configuration")?;
    let data_dir = config.data_dir.clone();
    let today = Local::now().date_naive();

    let stdin = io::stdin();
    let mut app = App::new(config, stdin.lock(), io::stdout(), today, StdRng::from_entropy())
        .with_context(|| format!("Failed to open study data in {}", data_dir.display()))?;

    if cli.vocab {
        app.run_vocabulary()?;
        return Ok(());
    }

    app.run()?;
    Ok(())
}
