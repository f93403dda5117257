// inkwell-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use inkwell_text::handle::{InkwellError, InkwellHandle};

/// Word-list file name looked up in the home and working directories.
const WORDS_FILE: &str = "words.txt";

/// Environment variable naming a word-list file.
const WORDS_ENV: &str = "INKWELL_WORDS_PATH";

/// Initialise `env_logger`: `RUST_LOG` wins, otherwise warnings and errors.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Search for a word list and create an InkwellHandle.
///
/// Search order:
/// 1. `words_path` argument (if provided)
/// 2. `INKWELL_WORDS_PATH` environment variable
/// 3. `~/.inkwell/words.txt`
/// 4. `/usr/share/dict/words`
/// 5. `./words.txt`
///
/// An explicit path that cannot be read is an error. When nothing is found
/// the handle knows only the built-in common words.
pub fn load_handle(words_path: Option<&str>) -> Result<InkwellHandle, String> {
    if let Some(path) = words_path {
        return InkwellHandle::from_path(path).map_err(|e: InkwellError| e.to_string());
    }

    let search_paths = build_search_paths();
    for path in &search_paths {
        if path.is_file() {
            log::info!("using word list {}", path.display());
            return InkwellHandle::from_path(path).map_err(|e| e.to_string());
        }
    }

    log::warn!(
        "no word list found in any of the search paths:\n{}\nusing the built-in common words only",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    );
    Ok(InkwellHandle::new())
}

/// Build the list of files to try as the word list.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(WORDS_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".inkwell").join(WORDS_FILE));
    }

    paths.push(PathBuf::from("/usr/share/dict/words"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--words=PATH` or `-w PATH` argument from command line args.
///
/// Returns `(words_path, remaining_args)`.
pub fn parse_words_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut words_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--words=") {
            words_path = Some(val.to_string());
        } else if arg == "--words" || arg == "-w" {
            match args.get(i + 1) {
                Some(val) => {
                    words_path = Some(val.clone());
                    skip_next = true;
                }
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (words_path, remaining)
}

/// Split arguments into options and operands.
///
/// Arguments starting with `-` are options until a bare `--`; everything
/// after `--` is an operand, so `-- -x` passes `-x` through verbatim.
pub fn split_options(args: &[String]) -> (Vec<String>, Vec<String>) {
    let mut options = Vec::new();
    let mut operands = Vec::new();
    let mut rest = args.iter();
    for arg in rest.by_ref() {
        if arg == "--" {
            break;
        }
        if arg.starts_with('-') {
            options.push(arg.clone());
        } else {
            operands.push(arg.clone());
        }
    }
    operands.extend(rest.cloned());
    (options, operands)
}

/// Parse the value following a numeric option such as `-n`.
pub fn parse_count(name: &str, value: Option<&String>) -> usize {
    match value {
        Some(v) => v
            .parse()
            .unwrap_or_else(|_| fatal(&format!("invalid number for {name}"))),
        None => fatal(&format!("{name} requires a value")),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// 1-based `(line, column)` of byte `offset` in `text`, counting columns in
/// characters.
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset.min(text.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn words_path_is_extracted() {
        let (path, rest) = parse_words_path(&args(&["-w", "list.txt", "recieve"]));
        assert_eq!(path.as_deref(), Some("list.txt"));
        assert_eq!(rest, args(&["recieve"]));

        let (path, rest) = parse_words_path(&args(&["--words=a.txt", "-n", "3"]));
        assert_eq!(path.as_deref(), Some("a.txt"));
        assert_eq!(rest, args(&["-n", "3"]));

        let (path, _) = parse_words_path(&args(&["word"]));
        assert!(path.is_none());
    }

    #[test]
    fn double_dash_ends_option_parsing() {
        let (opts, ops) = split_options(&args(&["-c", "--", "-foo", "file.txt"]));
        assert_eq!(opts, args(&["-c"]));
        assert_eq!(ops, args(&["-foo", "file.txt"]));

        let (opts, ops) = split_options(&args(&["pat", "--count", "--", "--", "-h"]));
        assert_eq!(opts, args(&["--count"]));
        assert_eq!(ops, args(&["pat", "--", "-h"]));
        assert!(!wants_help(&opts));
    }

    #[test]
    fn options_and_operands_without_double_dash() {
        let (opts, ops) = split_options(&args(&["aba", "-c", "in.txt"]));
        assert_eq!(opts, args(&["-c"]));
        assert_eq!(ops, args(&["aba", "in.txt"]));
    }

    #[test]
    fn help_flag_is_detected() {
        assert!(wants_help(&args(&["x", "--help"])));
        assert!(wants_help(&args(&["-h"])));
        assert!(!wants_help(&args(&["-n", "3"])));
    }

    #[test]
    fn line_col_counts_from_one() {
        let text = "ab\ncdé\nf";
        assert_eq!(line_col(text, 0), (1, 1));
        assert_eq!(line_col(text, 1), (1, 2));
        assert_eq!(line_col(text, 3), (2, 1));
        assert_eq!(line_col(text, 8), (3, 1));
    }

    #[test]
    fn explicit_missing_word_list_is_an_error() {
        assert!(load_handle(Some("/nonexistent/inkwell/words.txt")).is_err());
    }
}
