//! Concrete puzzle store: the letter board and per-letter availability.

use crate::debug_log;
use crate::error::StoreError;
use crate::store::{BoardSettings, PuzzleStore};
use std::collections::{BTreeMap, BTreeSet};

pub const ALPHABET_LEN: usize = 26;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellMark {
    #[default]
    Unmarked,
    Absent,  // Gray
    Present, // Yellow
    Correct, // Green
}

impl CellMark {
    pub fn next(self) -> Self {
        match self {
            Self::Unmarked => Self::Absent,
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Unmarked,
        }
    }

    fn confirms_letter(self) -> bool {
        matches!(self, Self::Present | Self::Correct)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub mark: CellMark,
}

/// What the board currently says about the hidden word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordRestrictions {
    pub available: BTreeSet<char>,
    pub required: BTreeSet<char>,
    /// Zero-based position -> letter known to be there.
    pub positions: BTreeMap<usize, char>,
    /// Zero-based position -> letters known not to be there.
    pub exclusions: BTreeMap<usize, BTreeSet<char>>,
}

fn letter_index(c: char) -> Option<usize> {
    let upper = c.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as usize)
}

fn index_letter(i: usize) -> char {
    (b'A' + i as u8) as char
}

#[derive(Debug, Clone)]
pub struct BoardState {
    settings: Option<BoardSettings>,
    rows: Vec<Vec<Cell>>,
    available: [bool; ALPHABET_LEN],
    cursor: (usize, usize),
}

impl BoardState {
    /// A board built for `settings`, every letter available.
    pub fn new(settings: BoardSettings) -> Self {
        Self {
            settings: Some(settings),
            rows: vec![vec![Cell::default(); settings.word_length]; settings.attempts],
            available: [true; ALPHABET_LEN],
            cursor: (0, 0),
        }
    }

    /// A store whose settings have not been published yet.
    pub fn unconfigured() -> Self {
        Self {
            settings: None,
            rows: Vec::new(),
            available: [true; ALPHABET_LEN],
            cursor: (0, 0),
        }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn is_available(&self, c: char) -> bool {
        letter_index(c).is_some_and(|i| self.available[i])
    }

    /// Available letters in alphabetical order.
    pub fn available_letters(&self) -> String {
        (0..ALPHABET_LEN)
            .filter(|&i| self.available[i])
            .map(index_letter)
            .collect()
    }

    pub fn toggle_letter(&mut self, c: char) -> bool {
        let Some(i) = letter_index(c) else {
            return false;
        };
        self.available[i] = !self.available[i];
        debug_log!(
            "toggle_letter() - '{}' now available={}",
            index_letter(i),
            self.available[i]
        );
        true
    }

    /// Place a letter at the cursor and advance. Returns `false` if nothing changed.
    pub fn type_letter(&mut self, c: char) -> bool {
        if !c.is_ascii_alphabetic() {
            return false;
        }
        let (row, col) = self.cursor;
        let Some(cell) = self.rows.get_mut(row).and_then(|cells| cells.get_mut(col)) else {
            return false;
        };
        let replaced = std::mem::replace(
            cell,
            Cell {
                letter: Some(c.to_ascii_uppercase()),
                mark: CellMark::Unmarked,
            },
        );
        self.cursor.1 += 1;
        self.sync_cleared(replaced);
        true
    }

    pub fn backspace(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col == 0 {
            return false;
        }
        let Some(cell) = self.rows.get_mut(row).and_then(|cells| cells.get_mut(col - 1)) else {
            return false;
        };
        let cleared = std::mem::take(cell);
        self.cursor.1 = col - 1;
        self.sync_cleared(cleared);
        true
    }

    /// Move to the start of the next row once the current one is filled.
    pub fn next_row(&mut self) -> bool {
        let (row, _) = self.cursor;
        let row_full = self
            .rows
            .get(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.letter.is_some()));
        if row_full && row + 1 < self.rows.len() {
            self.cursor = (row + 1, 0);
            true
        } else {
            false
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let width = self.rows.get(self.cursor.0).map_or(0, Vec::len);
        self.cursor.1 = self.cursor.1.saturating_add_signed(delta).min(width);
    }

    /// Cycle the mark of the cell under the cursor (the last cell when the row is full).
    pub fn cycle_mark_at_cursor(&mut self) -> bool {
        let (row, col) = self.cursor;
        let width = self.rows.get(row).map_or(0, Vec::len);
        if width == 0 {
            return false;
        }
        self.cycle_mark(row, col.min(width - 1))
    }

    /// Advance a filled cell's mark and re-derive the letter's availability.
    pub fn cycle_mark(&mut self, row: usize, col: usize) -> bool {
        let Some(cell) = self.rows.get_mut(row).and_then(|cells| cells.get_mut(col)) else {
            return false;
        };
        let Some(letter) = cell.letter else {
            return false;
        };
        let previous = cell.mark;
        cell.mark = previous.next();
        let mark = cell.mark;

        self.sync_letter(letter, previous == CellMark::Absent);
        debug_log!("cycle_mark() - ({}, {}) '{}' -> {:?}", row, col, letter, mark);
        true
    }

    fn sync_cleared(&mut self, cleared: Cell) {
        if let Some(letter) = cleared.letter {
            self.sync_letter(letter, cleared.mark == CellMark::Absent);
        }
    }

    /// Re-derive one letter's availability from every mark on the board.
    ///
    /// A confirmed letter is available; an absent, unconfirmed one is not.
    /// With neither on the board the flag is left alone, unless the change
    /// just removed an absent mark, which gives the letter back.
    fn sync_letter(&mut self, letter: char, removed_absent: bool) {
        let Some(i) = letter_index(letter) else {
            return;
        };
        if self.letter_confirmed(letter) {
            self.available[i] = true;
        } else if self.letter_marked(letter, CellMark::Absent) {
            self.available[i] = false;
        } else if removed_absent {
            self.available[i] = true;
        }
    }

    fn letter_marked(&self, letter: char, mark: CellMark) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|cell| cell.letter == Some(letter) && cell.mark == mark)
    }

    fn letter_confirmed(&self, letter: char) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|cell| cell.letter == Some(letter) && cell.mark.confirms_letter())
    }

    pub fn restrictions(&self) -> WordRestrictions {
        let mut restrictions = WordRestrictions {
            available: (0..ALPHABET_LEN)
                .filter(|&i| self.available[i])
                .map(index_letter)
                .collect(),
            ..WordRestrictions::default()
        };
        for cells in &self.rows {
            for (col, cell) in cells.iter().enumerate() {
                let Some(letter) = cell.letter else { continue };
                match cell.mark {
                    CellMark::Correct => {
                        restrictions.positions.insert(col, letter);
                        restrictions.required.insert(letter);
                    }
                    CellMark::Present => {
                        restrictions.exclusions.entry(col).or_default().insert(letter);
                        restrictions.required.insert(letter);
                    }
                    // Absent here but confirmed elsewhere: a repeated letter
                    CellMark::Absent if self.letter_confirmed(letter) => {
                        restrictions.exclusions.entry(col).or_default().insert(letter);
                    }
                    CellMark::Absent | CellMark::Unmarked => {}
                }
            }
        }
        restrictions
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(BoardSettings::default())
    }
}

impl PuzzleStore for BoardState {
    fn settings(&self) -> Option<BoardSettings> {
        self.settings
    }

    fn reset_board(&mut self, attempts: usize, word_length: usize) -> Result<(), StoreError> {
        let settings = BoardSettings::new(attempts, word_length)?;
        *self = Self::new(settings);
        debug_log!("reset_board() - {} x {}", attempts, word_length);
        Ok(())
    }

    fn set_all_unavailable(&mut self) -> Result<(), StoreError> {
        self.available = [false; ALPHABET_LEN];
        debug_log!("set_all_unavailable() - all letters excluded");
        Ok(())
    }
}
