use super::*;

use std::{fs::File, io::Write};

use tempfile::tempdir;

#[test]
fn default_config_is_stable() {
    assert_eq!(Config::default(), Config::default());
}

#[test]
fn default_config_values() {
    let config = Config::default();

    assert_eq!(config.base, BaseText::Word);
    assert_eq!(config.length, Bounds::new(12, 16));
    assert_eq!(config.capitals, Bounds::new(3, 3));
    assert_eq!(config.numerals, Bounds::new(2, 2));
    assert!(config.specials.includes.is_empty());
    assert_eq!(config.specials.bounds, Bounds::new(0, 0));
    assert!(!config.spaces.allow);
    assert_eq!(config.spaces.bounds, Bounds::new(0, 0));
}

#[test]
fn validate_accepts_the_default_config() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn validate_rejects_inverted_bounds() {
    let mut config = Config::default();
    config.capitals = Bounds::new(4, 2);

    assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn validate_rejects_a_zero_minimum_length() {
    let mut config = Config::default();
    config.length = Bounds::new(0, 4);

    assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn validate_rejects_minimums_that_exceed_the_shortest_password() {
    let mut config = Config::default();
    config.length = Bounds::new(4, 4);
    config.capitals = Bounds::new(3, 3);
    config.numerals = Bounds::new(2, 2);

    assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
}

#[test]
fn validate_accepts_minimums_that_exactly_fill_the_password() {
    let mut config = Config::default();
    config.length = Bounds::new(8, 8);
    config.capitals = Bounds::new(3, 3);
    config.numerals = Bounds::new(3, 3);
    config.spaces = Spaces {
        allow: true,
        bounds: Bounds::new(2, 2),
    };

    assert!(config.validate().is_ok());
}

#[test]
fn validate_ignores_minimums_of_disabled_categories() {
    let mut config = Config::default();
    config.length = Bounds::new(5, 5);
    config.capitals = Bounds::new(0, 0);
    config.numerals = Bounds::new(0, 0);
    // Neither category runs a repair pass, so neither can demand characters.
    config.specials = SpecialChars {
        includes: vec![],
        bounds: Bounds::new(9, 9),
    };
    config.spaces = Spaces {
        allow: false,
        bounds: Bounds::new(9, 9),
    };

    assert!(config.validate().is_ok());
}

#[test]
fn from_file_overrides_only_named_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wordpass.toml");
    let mut file = File::create(&path).unwrap();
    writeln!(
        file,
        "base = \"random\"\n\
         \n\
         [length]\n\
         min = 8\n\
         max = 8\n\
         \n\
         [special_characters]\n\
         includes = \"!?\"\n\
         min = 1\n\
         max = 1\n"
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.base, BaseText::Random);
    assert_eq!(config.length, Bounds::new(8, 8));
    assert_eq!(config.specials.includes, vec!['!', '?']);
    assert_eq!(config.specials.bounds, Bounds::new(1, 1));
    // Everything the file does not mention keeps its default.
    assert_eq!(config.capitals, Bounds::new(3, 3));
    assert_eq!(config.numerals, Bounds::new(2, 2));
    assert!(!config.spaces.allow);
}

#[test]
fn from_file_rejects_an_unknown_base() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wordpass.toml");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "base = \"dicey\"").unwrap();

    assert!(matches!(
        Config::from_file(&path),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn from_file_rejects_negative_counts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wordpass.toml");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "[numerals]\nmin = -1").unwrap();

    assert!(matches!(
        Config::from_file(&path),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn from_file_reads_back_what_to_toml_writes() {
    let mut config = Config::default();
    config.base = BaseText::Random;
    config.length = Bounds::new(10, 20);
    config.specials = SpecialChars {
        includes: vec!['#', '%'],
        bounds: Bounds::new(1, 2),
    };
    config.spaces = Spaces {
        allow: true,
        bounds: Bounds::new(0, 1),
    };

    let dir = tempdir().unwrap();
    let path = dir.path().join("wordpass.toml");
    let mut file = File::create(&path).unwrap();
    file.write_all(config.to_toml().unwrap().as_bytes()).unwrap();

    assert_eq!(Config::from_file(&path).unwrap(), config);
}
