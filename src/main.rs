use std::process::ExitCode;
use wordle_board::app::App;
use wordle_board::cli::{Cli, parse_cli};
use wordle_board::error::AppError;
use wordle_board::logging::{default_log_path, init_logger};
use wordle_board::tui::TuiInterface;
use wordle_board::wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};

fn run(cli: &Cli) -> Result<(), AppError> {
    let settings = cli.board_settings()?;
    let wordbank = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path).map_err(|e| {
            log::error!("Failed to load word bank from '{}': {e}", path.display());
            e
        })?,
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    log::info!(
        "Starting with {} x {} board, {} words loaded",
        settings.attempts,
        settings.word_length,
        wordbank.len()
    );

    let mut tui = TuiInterface::new(App::new(settings, wordbank))?;
    tui.run()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(default_log_path)
        && let Err(e) = init_logger(&path)
    {
        eprintln!("Logging disabled, could not open '{}': {e}", path.display());
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
