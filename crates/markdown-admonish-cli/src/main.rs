use anyhow::{Context, Result};
use markdown_admonish_config::Config;
use markdown_admonish_engine::{ParseOptions, io, to_html_with};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().collect();
    let htmlbook_flag = {
        let before = args.len();
        args.retain(|arg| arg != "--htmlbook");
        args.len() != before
    };

    match args.len() {
        // Single file to stdout
        2 => {
            let input = PathBuf::from(&args[1]);
            if input.is_dir() {
                eprintln!(
                    "Error: '{}' is a directory; pass an output directory as well",
                    input.display()
                );
                eprintln!("Usage: {} <input.md> [<out-dir>] [--htmlbook]", args[0]);
                process::exit(1);
            }
            let options = ParseOptions {
                htmlbook: htmlbook_flag,
            };
            let source = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read '{}'", input.display()))?;
            print!("{}", to_html_with(&source, options));
        }

        // Directory tree conversion
        3 => {
            let docs_path = PathBuf::from(&args[1]);
            let out_path = PathBuf::from(&args[2]);
            let options = ParseOptions {
                htmlbook: htmlbook_flag,
            };
            convert_tree(&docs_path, &out_path, options, None)?;
        }

        // No arguments: fall back to the config file
        1 => {
            let config_path = Config::config_path();
            match Config::load() {
                Ok(Some(config)) => {
                    let options = ParseOptions {
                        htmlbook: htmlbook_flag || config.htmlbook,
                    };
                    convert_tree(&config.docs_path, &config.out_path, options, Some(&config_path))?;
                }
                Ok(None) => {
                    eprintln!("Error: No docs path provided and no config file found");
                    eprintln!("Usage: {} <input.md> [<out-dir>] [--htmlbook]", args[0]);
                    eprintln!("Or create a config file at {}", config_path.display());
                    process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: Failed to load config file: {e}");
                    eprintln!("Usage: {} <input.md> [<out-dir>] [--htmlbook]", args[0]);
                    process::exit(1);
                }
            }
        }

        _ => {
            eprintln!("Usage: {} <input.md> [<out-dir>] [--htmlbook]", args[0]);
            process::exit(1);
        }
    }

    Ok(())
}

fn convert_tree(
    docs_path: &Path,
    out_path: &Path,
    options: ParseOptions,
    config_path: Option<&Path>,
) -> Result<()> {
    if let Err(e) = io::validate_docs_dir(docs_path) {
        let source = match config_path {
            Some(path) => format!(" from config file '{}'", path.display()),
            None => String::new(),
        };
        eprintln!(
            "Error: Docs path '{}'{} is invalid: {e}",
            docs_path.display(),
            source
        );
        process::exit(1);
    }

    let converted = io::convert_tree(docs_path, out_path, options)
        .with_context(|| format!("failed to convert '{}'", docs_path.display()))?;
    eprintln!("Converted {converted} file(s) into {}", out_path.display());
    Ok(())
}
