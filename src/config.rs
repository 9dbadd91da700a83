use std::path::Path;

use toml::value::{Table, Value};

pub use crate::error::{Error, Result};

/// How the base text is produced before any composition rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseText {
    /// Concatenate random dictionary words and cut at the requested length.
    Word,
    /// Draw independent random letters, mixed case.
    Random,
}

impl Default for BaseText {
    fn default() -> Self {
        Self::Word
    }
}

/// An inclusive min/max pair, used both for the password length and for the
/// occurrence count of each character category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Which special characters are allowed and how many of them to place.
/// An empty `includes` disables the category entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialChars {
    pub includes: Vec<char>,
    pub bounds: Bounds,
}

/// Whether spaces may appear in the password and how many to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spaces {
    pub allow: bool,
    pub bounds: Bounds,
}

/// The full description of a password to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base: BaseText,
    pub length: Bounds,
    pub capitals: Bounds,
    pub numerals: Bounds,
    pub specials: SpecialChars,
    pub spaces: Spaces,
}

impl Default for Config {
    /// The stock configuration: a word based password of 12 to 16 characters
    /// with exactly three capital letters, exactly two numerals, no special
    /// characters and no spaces.
    fn default() -> Self {
        Self {
            base: BaseText::default(),
            length: Bounds::new(12, 16),
            capitals: Bounds::new(3, 3),
            numerals: Bounds::new(2, 2),
            specials: SpecialChars {
                includes: vec![],
                bounds: Bounds::new(0, 0),
            },
            spaces: Spaces {
                allow: false,
                bounds: Bounds::new(0, 0),
            },
        }
    }
}

impl Config {
    /// Checks that the configuration can actually produce a password, before
    /// any generation work starts. Catches inverted bounds, a zero length and
    /// category minimums that together ask for more characters than the
    /// shortest password can hold.
    pub fn validate(&self) -> Result<()> {
        for (name, bounds) in [
            ("length", self.length),
            ("capital_letters", self.capitals),
            ("numerals", self.numerals),
            ("special_characters", self.specials.bounds),
            ("spaces", self.spaces.bounds),
        ] {
            if bounds.min > bounds.max {
                return Err(Error::InvalidConfig(format!(
                    "{name}: min {} is greater than max {}",
                    bounds.min, bounds.max
                )));
            }
        }

        if self.length.min == 0 {
            return Err(Error::InvalidConfig(
                "length.min must be at least 1".to_owned(),
            ));
        }

        // Only categories that actually run a repair pass draw from the pool.
        let mut demand = self.capitals.min + self.numerals.min;
        if !self.specials.includes.is_empty() {
            demand += self.specials.bounds.min;
        }
        if self.spaces.allow {
            demand += self.spaces.bounds.min;
        }
        if demand > self.length.min {
            return Err(Error::InvalidConfig(format!(
                "category minimums require {demand} characters but the password \
                 may be as short as {}",
                self.length.min
            )));
        }

        Ok(())
    }

    /// Reads a configuration from a TOML file. Keys that are absent keep
    /// their default values, so a file only needs to name what it changes.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut settings = config::Config::default();
        settings.merge(config::File::from(path.to_path_buf()))?;

        let mut result = Self::default();

        if let Some(base) = optional(settings.get_str("base"))? {
            result.base = match base.to_lowercase().as_str() {
                "word" => BaseText::Word,
                "random" => BaseText::Random,
                other => {
                    return Err(Error::InvalidConfig(format!(
                        "base must be \"word\" or \"random\", not \"{other}\""
                    )))
                }
            };
        }

        result.length = read_bounds(&settings, "length", result.length)?;
        result.capitals = read_bounds(&settings, "capital_letters", result.capitals)?;
        result.numerals = read_bounds(&settings, "numerals", result.numerals)?;
        result.specials.bounds =
            read_bounds(&settings, "special_characters", result.specials.bounds)?;
        result.spaces.bounds = read_bounds(&settings, "spaces", result.spaces.bounds)?;

        if let Some(includes) = optional(settings.get_str("special_characters.includes"))? {
            result.specials.includes = includes.chars().collect();
        }
        if let Some(allow) = optional(settings.get_bool("spaces.allow"))? {
            result.spaces.allow = allow;
        }

        Ok(result)
    }

    /// Renders the configuration as a TOML document, in the same shape that
    /// `from_file` reads back.
    pub fn to_toml(&self) -> Result<String> {
        let mut root = Table::new();

        let base = match self.base {
            BaseText::Word => "word",
            BaseText::Random => "random",
        };
        root.insert("base".to_owned(), Value::String(base.to_owned()));
        root.insert("length".to_owned(), bounds_value(self.length, None));
        root.insert("capital_letters".to_owned(), bounds_value(self.capitals, None));
        root.insert("numerals".to_owned(), bounds_value(self.numerals, None));

        let includes: String = self.specials.includes.iter().collect();
        let mut specials = bounds_value(self.specials.bounds, None);
        if let Value::Table(t) = &mut specials {
            t.insert("includes".to_owned(), Value::String(includes));
        }
        root.insert("special_characters".to_owned(), specials);

        root.insert(
            "spaces".to_owned(),
            bounds_value(self.spaces.bounds, Some(self.spaces.allow)),
        );

        Ok(toml::to_string(&Value::Table(root))?)
    }
}

fn bounds_value(bounds: Bounds, allow: Option<bool>) -> Value {
    let mut table = Table::new();
    if let Some(allow) = allow {
        table.insert("allow".to_owned(), Value::Boolean(allow));
    }
    table.insert("min".to_owned(), Value::Integer(bounds.min as i64));
    table.insert("max".to_owned(), Value::Integer(bounds.max as i64));
    Value::Table(table)
}

fn read_bounds(settings: &config::Config, key: &str, fallback: Bounds) -> Result<Bounds> {
    let min = match optional(settings.get_int(&format!("{key}.min")))? {
        Some(v) => to_count(key, "min", v)?,
        None => fallback.min,
    };
    let max = match optional(settings.get_int(&format!("{key}.max")))? {
        Some(v) => to_count(key, "max", v)?,
        None => fallback.max,
    };
    Ok(Bounds::new(min, max))
}

fn to_count(key: &str, field: &str, value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| Error::InvalidConfig(format!("{key}.{field} must not be negative")))
}

/// Maps a missing key to `None` so the caller can fall back to the default,
/// while real errors (unparsable file, wrong type) still propagate.
fn optional<T>(res: std::result::Result<T, config::ConfigError>) -> Result<Option<T>> {
    match res {
        Ok(value) => Ok(Some(value)),
        Err(config::ConfigError::NotFound(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod config_tests;
