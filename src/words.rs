use rand::{seq::SliceRandom, Rng};

pub use crate::error::{Error, Result};

static WORDLIST: &str = include_str!("wordlists/common.wordlist");

/// Returns one uniformly drawn word from the built in word list.
pub fn random_word<R: Rng>(rng: &mut R) -> Result<&'static str> {
    let words: Vec<&str> = WORDLIST
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    words
        .choose(rng)
        .copied()
        .ok_or(Error::Generic("the word list is empty"))
}

#[cfg(test)]
#[path = "tests/words.rs"]
mod words_tests;
