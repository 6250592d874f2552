use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_uppercase();
    (!word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())).then_some(word)
}

/// Words grouped by length, each group sorted and deduplicated.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    by_length: BTreeMap<usize, Vec<String>>,
}

impl WordBank {
    pub fn from_words<I: IntoIterator<Item = String>>(words: I) -> Self {
        let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for word in words {
            by_length.entry(word.len()).or_default().push(word);
        }
        for group in by_length.values_mut() {
            group.sort();
            group.dedup();
        }
        Self { by_length }
    }

    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn load_wordbank_from_str(data: &str) -> WordBank {
    WordBank::from_words(data.lines().filter_map(normalize))
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordBank> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(WordBank::from_words(words))
}
