//! The interface the board action panel consumes.
//!
//! Anything that owns puzzle state can sit behind the panel as long as it
//! publishes its current dimensions and exposes the two mutations below.

use crate::error::StoreError;

pub const DEFAULT_ATTEMPTS: usize = 6;
pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const MAX_ATTEMPTS: usize = 10;
pub const MAX_WORD_LENGTH: usize = 12;

/// Dimensions of the current puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSettings {
    pub attempts: usize,
    pub word_length: usize,
}

impl BoardSettings {
    pub fn new(attempts: usize, word_length: usize) -> Result<Self, StoreError> {
        let settings = Self {
            attempts,
            word_length,
        };
        if settings.is_valid() {
            Ok(settings)
        } else {
            Err(StoreError::InvalidDimensions {
                attempts,
                word_length,
            })
        }
    }

    /// Both dimensions are non-zero and inside the supported range.
    pub fn is_valid(&self) -> bool {
        (1..=MAX_ATTEMPTS).contains(&self.attempts)
            && (1..=MAX_WORD_LENGTH).contains(&self.word_length)
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            word_length: DEFAULT_WORD_LENGTH,
        }
    }
}

/// Shared puzzle state as seen by the action panel.
pub trait PuzzleStore {
    /// Snapshot of the current settings, `None` before the board is configured.
    fn settings(&self) -> Option<BoardSettings>;

    /// Rebuild the board for the given dimensions, discarding every letter mark.
    fn reset_board(&mut self, attempts: usize, word_length: usize) -> Result<(), StoreError>;

    /// Mark every letter unavailable for future guesses.
    fn set_all_unavailable(&mut self) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BoardSettings::default();
        assert_eq!(settings.attempts, 6);
        assert_eq!(settings.word_length, 5);
        assert!(settings.is_valid());
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            BoardSettings::new(0, 5),
            Err(StoreError::InvalidDimensions {
                attempts: 0,
                word_length: 5
            })
        );
        assert!(BoardSettings::new(6, 0).is_err());
    }

    #[test]
    fn test_new_rejects_oversized_board() {
        assert!(BoardSettings::new(MAX_ATTEMPTS + 1, 5).is_err());
        assert!(BoardSettings::new(6, MAX_WORD_LENGTH + 1).is_err());
        assert!(BoardSettings::new(MAX_ATTEMPTS, MAX_WORD_LENGTH).is_ok());
    }

    #[test]
    fn test_malformed_literal_is_invalid() {
        let settings = BoardSettings {
            attempts: 6,
            word_length: 0,
        };
        assert!(!settings.is_valid());
    }
}
