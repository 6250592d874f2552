use crate::error::StoreError;
use crate::store::{BoardSettings, DEFAULT_ATTEMPTS, DEFAULT_WORD_LENGTH};
use clap::Parser;
use std::path::PathBuf;

/// Wordle Board options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of guess rows on the board
    #[arg(short = 'a', long = "attempts", default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Letters per word
    #[arg(short = 'w', long = "word-length", default_value_t = DEFAULT_WORD_LENGTH)]
    pub word_length: usize,

    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Where to write the log (defaults to the user cache directory)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn board_settings(&self) -> Result<BoardSettings, StoreError> {
        BoardSettings::new(self.attempts, self.word_length)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::try_parse_from(["wordle-board"]).unwrap();
        assert_eq!(cli.attempts, 6);
        assert_eq!(cli.word_length, 5);
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.log_file, None);
        assert_eq!(cli.board_settings(), Ok(BoardSettings::default()));
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::try_parse_from([
            "wordle-board",
            "-a",
            "4",
            "--word-length",
            "6",
            "-i",
            "words.txt",
            "--log-file",
            "/tmp/board.log",
        ])
        .unwrap();
        assert_eq!(
            cli.board_settings(),
            Ok(BoardSettings {
                attempts: 4,
                word_length: 6
            })
        );
        assert_eq!(cli.wordbank_path, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/board.log")));
    }

    #[test]
    fn test_zero_word_length_rejected() {
        let cli = Cli::try_parse_from(["wordle-board", "-w", "0"]).unwrap();
        assert!(cli.board_settings().is_err());
    }

    #[test]
    fn test_non_numeric_attempts_rejected_by_parser() {
        assert!(Cli::try_parse_from(["wordle-board", "-a", "six"]).is_err());
    }
}
