use rand::{seq::SliceRandom, Rng};

use crate::config::{BaseText, Config};
pub use crate::error::{Error, Result};
use crate::words;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMERALS: &str = "0123456789";

/// One character of the password under construction, tagged with the
/// position it will occupy in the final string.
#[derive(Debug, Clone)]
struct Slot {
    index: usize,
    ch: char,
}

/// The pools that together hold every position of the password exactly once.
/// Classification only fills `capitals` and `default`; the remaining pools
/// gain members through the repair passes.
#[derive(Debug, Default)]
struct Pools {
    capitals: Vec<Slot>,
    default: Vec<Slot>,
    numerals: Vec<Slot>,
    spaces: Vec<Slot>,
    specials: Vec<Slot>,
}

/// Generates a password from `config` using the thread local rng.
pub fn generate_password(config: &Config) -> Result<String> {
    generate_password_with(&mut rand::thread_rng(), config)
}

/// Generates a password from `config`, drawing all randomness from the
/// supplied rng. With a seeded rng the output is fully reproducible.
pub fn generate_password_with<R: Rng>(rng: &mut R, config: &Config) -> Result<String> {
    config.validate()?;

    let length = rng.gen_range(config.length.min..=config.length.max);
    let base = base_text(rng, config.base, length)?;

    // Targets are drawn up front, even for categories whose pass ends up
    // skipped, so a seeded rng always consumes the same draw sequence.
    let capitals_target = rng.gen_range(config.capitals.min..=config.capitals.max);
    let numerals_target = rng.gen_range(config.numerals.min..=config.numerals.max);
    let specials_target =
        rng.gen_range(config.specials.bounds.min..=config.specials.bounds.max);
    let spaces_target = rng.gen_range(config.spaces.bounds.min..=config.spaces.bounds.max);

    let mut pools = classify(&base);

    // Each pass trades positions with the same default pool, so the order is
    // part of the algorithm: a later pass sees the pool exactly as the
    // earlier passes left it.
    let uppercase: Vec<char> = UPPERCASE.chars().collect();
    repair(
        rng,
        &mut pools.capitals,
        capitals_target,
        &mut pools.default,
        &uppercase,
    )?;

    let numerals: Vec<char> = NUMERALS.chars().collect();
    repair(
        rng,
        &mut pools.numerals,
        numerals_target,
        &mut pools.default,
        &numerals,
    )?;

    if !config.specials.includes.is_empty() {
        repair(
            rng,
            &mut pools.specials,
            specials_target,
            &mut pools.default,
            &config.specials.includes,
        )?;
    }

    if config.spaces.allow {
        repair(rng, &mut pools.spaces, spaces_target, &mut pools.default, &[' '])?;
    }

    assemble(&pools, length)
}

/// Produces the raw text the composition rules are applied to, exactly
/// `length` characters long.
fn base_text<R: Rng>(rng: &mut R, mode: BaseText, length: usize) -> Result<String> {
    match mode {
        BaseText::Random => {
            let mixed: Vec<char> = UPPERCASE.chars().chain(LOWERCASE.chars()).collect();
            (0..length).map(|_| draw(rng, &mixed)).collect()
        }
        BaseText::Word => {
            let mut text = String::new();
            // random_word never hands back an empty word, so the text grows
            // every round and the loop terminates for any target length.
            while text.len() <= length {
                text.push_str(words::random_word(rng)?);
            }
            Ok(text.chars().take(length).collect())
        }
    }
}

/// Splits the base text into positioned characters: uppercase letters into
/// the capitals pool, everything else into the default pool. Digits or
/// symbols already present in the text are not recognized here; composition
/// is enforced purely by the repair passes afterwards.
fn classify(text: &str) -> Pools {
    let mut pools = Pools::default();
    for (index, ch) in text.chars().enumerate() {
        let slot = Slot { index, ch };
        if ch.is_ascii_uppercase() {
            pools.capitals.push(slot);
        } else {
            pools.default.push(slot);
        }
    }
    pools
}

/// Adjusts `set` to hold exactly `required` entries by exchanging positions
/// with the shared default pool. Growing takes a random position from the
/// pool and overwrites its character with a fresh draw from `alphabet`;
/// shrinking hands a random position back as a plain lowercase letter.
/// Position indices are only ever moved, never created or dropped, so the
/// pools keep partitioning the whole password.
fn repair<R: Rng>(
    rng: &mut R,
    set: &mut Vec<Slot>,
    required: usize,
    pool: &mut Vec<Slot>,
    alphabet: &[char],
) -> Result<()> {
    while set.len() < required {
        if pool.is_empty() {
            return Err(Error::PoolExhausted);
        }
        let picked = rng.gen_range(0..pool.len());
        let mut slot = pool.remove(picked);
        slot.ch = draw(rng, alphabet)?;
        set.push(slot);
    }

    if set.len() > required {
        let lowercase: Vec<char> = LOWERCASE.chars().collect();
        while set.len() > required {
            let picked = rng.gen_range(0..set.len());
            let mut slot = set.remove(picked);
            slot.ch = draw(rng, &lowercase)?;
            pool.push(slot);
        }
    }

    Ok(())
}

/// Writes every pooled character back at its recorded position. After the
/// repair passes the pools partition 0..length, so every cell is written
/// exactly once.
fn assemble(pools: &Pools, length: usize) -> Result<String> {
    let mut cells: Vec<Option<char>> = vec![None; length];

    let slots = pools
        .capitals
        .iter()
        .chain(&pools.default)
        .chain(&pools.numerals)
        .chain(&pools.spaces)
        .chain(&pools.specials);
    for slot in slots {
        match cells.get_mut(slot.index) {
            Some(cell) => *cell = Some(slot.ch),
            None => return Err(Error::Generic("character position outside the password")),
        }
    }

    cells
        .into_iter()
        .collect::<Option<String>>()
        .ok_or(Error::Generic("assembly left a gap in the password"))
}

fn draw<R: Rng>(rng: &mut R, alphabet: &[char]) -> Result<char> {
    alphabet
        .choose(rng)
        .copied()
        .ok_or(Error::Generic("empty character alphabet"))
}

#[cfg(test)]
#[path = "tests/generate.rs"]
mod generate_tests;
