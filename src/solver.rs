use crate::board::{ALPHABET_LEN, WordRestrictions};

/// True if `word` could still be the answer under `restrictions`.
pub fn is_viable(word: &str, restrictions: &WordRestrictions) -> bool {
    if !restrictions.required.iter().all(|&c| word.contains(c)) {
        return false;
    }
    for (i, c) in word.chars().enumerate() {
        if restrictions.positions.get(&i).is_some_and(|&known| known != c) {
            return false;
        }
        if restrictions
            .exclusions
            .get(&i)
            .is_some_and(|excluded| excluded.contains(&c))
        {
            return false;
        }
        if !restrictions.available.contains(&c) {
            return false;
        }
    }
    // A known position past the end of the word can never match.
    restrictions
        .positions
        .keys()
        .all(|&i| i < word.chars().count())
}

pub fn viable_words(words: &[String], restrictions: &WordRestrictions) -> Vec<String> {
    words
        .iter()
        .filter(|w| is_viable(w, restrictions))
        .cloned()
        .collect()
}

pub fn build_freq_chart(words: &[String], word_length: usize) -> Vec<[usize; ALPHABET_LEN]> {
    let mut freq = vec![[0; ALPHABET_LEN]; word_length];
    for word in words {
        for (i, c) in word.chars().enumerate().take(word_length) {
            if c.is_ascii_uppercase() {
                freq[i][(c as u8 - b'A') as usize] += 1;
            }
        }
    }
    freq
}

pub fn score_word(word: &str, freq: &[[usize; ALPHABET_LEN]]) -> usize {
    word.chars()
        .zip(freq)
        .filter(|(c, _)| c.is_ascii_uppercase())
        .map(|(c, column)| column[(c as u8 - b'A') as usize])
        .sum()
}

/// Viable words ordered by positional letter frequency, best first.
pub fn rank_words(
    words: &[String],
    restrictions: &WordRestrictions,
    word_length: usize,
) -> Vec<String> {
    let mut viable = viable_words(words, restrictions);
    let freq = build_freq_chart(&viable, word_length);
    viable.sort_by(|a, b| {
        score_word(b, &freq)
            .cmp(&score_word(a, &freq))
            .then_with(|| a.cmp(b))
    });
    viable
}
