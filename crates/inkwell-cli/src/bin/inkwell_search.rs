// inkwell-search: Find every occurrence of a pattern in a file or stdin.
//
// Prints one line per match: the byte offset, a tab, and the 1-based
// line:column of the match. Overlapping matches are all reported.
//
// Usage:
//   inkwell-search [OPTIONS] [--] PATTERN [FILE]
//
// Use `--` before a pattern that starts with `-`.
//
// Options:
//   -c, --count   Print only the number of matches
//   -h, --help    Print help

use std::io::{self, Read, Write};

use inkwell_text::search::search;

fn main() {
    inkwell_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, positional) = inkwell_cli::split_options(&args);

    if inkwell_cli::wants_help(&options) {
        println!("inkwell-search: Find every occurrence of a pattern.");
        println!();
        println!("Usage: inkwell-search [OPTIONS] [--] PATTERN [FILE]");
        println!();
        println!("Reads FILE, or stdin when no file is given.");
        println!("Arguments after -- are never options, e.g. `-- -foo`.");
        println!("Prints OFFSET<TAB>LINE:COL for each match.");
        println!();
        println!("Options:");
        println!("  -c, --count  Print only the number of matches");
        println!("  -h, --help   Print this help");
        return;
    }

    let count_only = options.iter().any(|a| a == "-c" || a == "--count");
    let Some(pattern) = positional.first() else {
        inkwell_cli::fatal("missing PATTERN (see --help)");
    };

    let text = match positional.get(1) {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| inkwell_cli::fatal(&format!("failed to read {path}: {e}"))),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| inkwell_cli::fatal(&format!("failed to read stdin: {e}")));
            buf
        }
    };

    let matches = if pattern.trim().is_empty() {
        Vec::new()
    } else {
        search(&text, pattern)
    };
    log::debug!("{} matches for {pattern:?}", matches.len());

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if count_only {
        writeln!(out, "{}", matches.len())
    } else {
        matches.iter().try_for_each(|&offset| {
            let (line, col) = inkwell_cli::line_col(&text, offset);
            writeln!(out, "{offset}\t{line}:{col}")
        })
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        inkwell_cli::fatal(&e.to_string());
    }
}
