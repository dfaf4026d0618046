use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordsplit::engine::DEFAULT_LOCALE;
use wordsplit::input::{load_file, read_stdin};
use wordsplit::output::write_tokens;
use wordsplit::repl::ReplSession;
use wordsplit::{Config, Tokenizer};

#[derive(Parser)]
#[command(author, version, about = "Split text into Unicode word tokens", long_about = None)]
struct Cli {
    /// File to tokenize (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Word-breaking locale
    #[arg(short, long, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Print byte offsets next to each token
    #[arg(short, long)]
    offsets: bool,

    /// Start an interactive session
    #[arg(short, long)]
    repl: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::default();
        config.tokenizer.locale = self.locale.clone();
        config.output.show_offsets = self.offsets;
        config
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.config();
    debug!(?config, "config resolved");

    let tokenizer = Tokenizer::new(&config.tokenizer)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.repl {
        let mut session = ReplSession::new(tokenizer, config.output);
        session.run(io::stdin().lock(), &mut out)?;
        return Ok(());
    }

    let text = match &cli.file {
        Some(path) => load_file(path)?,
        None => read_stdin()?,
    };

    let tokens = tokenizer.tokenize_spans(&text);
    write_tokens(&mut out, &tokens, &config.output)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
