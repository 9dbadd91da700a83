use std::{env, path::PathBuf, process};

use wordpass::{
    config::{Config, Result},
    generate::generate_password,
};

const USAGE: &str = "usage: wordpass [--defaults | CONFIG_FILE]";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let result = match args.as_slice() {
        [] => generate(None),
        [flag] if flag == "--defaults" => Config::default().to_toml(),
        [flag] if flag == "--help" || flag == "-h" => {
            println!("{USAGE}");
            return;
        }
        [path] => generate(Some(PathBuf::from(path))),
        _ => {
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

fn generate(config_file: Option<PathBuf>) -> Result<String> {
    let config = match config_file {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    generate_password(&config)
}
