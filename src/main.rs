use clap::Parser;
use log::{LevelFilter, info};
use macroquad::prelude::*;
use wordle_mallorca::app::App;
use wordle_mallorca::config::{self, WINDOW_HEIGHT, WINDOW_WIDTH};
use wordle_mallorca::logging;
use wordle_mallorca::render::Renderer;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TTF font for the UI (the built-in font has no accented glyphs)
    #[arg(long)]
    font: Option<String>,

    /// Debug filter to specify log topics (e.g., "game,input")
    /// Available topics: game, input, render
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Adivina el destino".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    if let Err(e) = logging::init_logger(log_level, args.debug_filter) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!(
        "Starting word game: {} letters, {} guesses.",
        config::WORD_LENGTH,
        config::MAX_GUESSES
    );

    let mut renderer = Renderer::new();
    if let Some(path) = &args.font {
        renderer.load_ui_font(path).await;
    }

    let mut app = App::new();
    app.run(&renderer).await;
}
