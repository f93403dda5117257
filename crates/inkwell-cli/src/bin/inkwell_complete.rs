// inkwell-complete: List dictionary words starting with a prefix.
//
// Usage:
//   inkwell-complete [-w WORDS] [-n LIMIT] PREFIX...
//
// Options:
//   -w, --words PATH   Word-list file (one word per line)
//   -n, --limit N      Maximum completions per prefix (default: 3)
//   -h, --help         Print help

use std::io::{self, Write};

fn main() {
    inkwell_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (words_path, args) = inkwell_cli::parse_words_path(&args);

    if inkwell_cli::wants_help(&args) || args.is_empty() {
        println!("inkwell-complete: List dictionary words starting with a prefix.");
        println!();
        println!("Usage: inkwell-complete [-w WORDS] [-n LIMIT] PREFIX...");
        println!();
        println!("Options:");
        println!("  -w, --words PATH  Word-list file (one word per line)");
        println!("  -n, --limit N     Maximum completions per prefix (default: 3)");
        println!("  -h, --help        Print this help");
        return;
    }

    let mut limit: usize = 3;
    let mut prefixes: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "-n" | "--limit" => {
                limit = inkwell_cli::parse_count(arg, args.get(i + 1));
                skip_next = true;
            }
            s if !s.starts_with('-') => prefixes.push(arg.clone()),
            _ => {}
        }
    }

    let mut handle = inkwell_cli::load_handle(words_path.as_deref())
        .unwrap_or_else(|e| inkwell_cli::fatal(&e));
    handle.set_completion_limit(limit);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let multiple = prefixes.len() > 1;

    let result = prefixes.iter().try_for_each(|prefix| {
        if multiple {
            writeln!(out, "{prefix}:")?;
        }
        for word in handle.suggest_completions(prefix) {
            if multiple {
                writeln!(out, "  {word}")?;
            } else {
                writeln!(out, "{word}")?;
            }
        }
        Ok(())
    });

    if let Err(e) = result.and_then(|()| out.flush()) {
        inkwell_cli::fatal(&e.to_string());
    }
}
