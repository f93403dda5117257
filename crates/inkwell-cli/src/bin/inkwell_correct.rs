// inkwell-correct: Correct misspelled words.
//
// Prints known words as-is and ranked repairs for the rest. Words come from
// the command line or, when none are given, from stdin (one per line).
//
// Usage:
//   inkwell-correct [-w WORDS] [OPTIONS] [WORD...]
//
// Options:
//   -w, --words PATH          Word-list file (one word per line)
//   -n, --max-suggestions N   Maximum number of suggestions (default: 5)
//   -h, --help                Print help

use std::io::{self, BufRead, Write};

use inkwell_text::InkwellHandle;

fn correct_word(word: &str, handle: &InkwellHandle, out: &mut impl Write) -> io::Result<()> {
    if handle.contains(word) {
        return writeln!(out, "{word} (correct)");
    }
    let best = handle.correct(word);
    let suggestions = handle.suggest(word);
    if suggestions.is_empty() {
        if best == word {
            writeln!(out, "{word}: (no suggestions)")
        } else {
            // only the common-word fallback found something
            writeln!(out, "{word}:\n  {best}")
        }
    } else {
        writeln!(out, "{word}:")?;
        for s in &suggestions {
            writeln!(out, "  {s}")?;
        }
        Ok(())
    }
}

fn main() {
    inkwell_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (words_path, args) = inkwell_cli::parse_words_path(&args);

    if inkwell_cli::wants_help(&args) {
        println!("inkwell-correct: Correct misspelled words.");
        println!();
        println!("Usage: inkwell-correct [-w WORDS] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, corrects each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -w, --words PATH         Word-list file (one word per line)");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 5)");
        println!("  -h, --help               Print this help");
        return;
    }

    let mut max_suggestions: usize = 5;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            max_suggestions = inkwell_cli::parse_count(arg, args.get(i + 1));
            skip_next = true;
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let mut handle = inkwell_cli::load_handle(words_path.as_deref())
        .unwrap_or_else(|e| inkwell_cli::fatal(&e));
    handle.set_max_suggestions(max_suggestions);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if words.is_empty() {
        let stdin = io::stdin();
        stdin.lock().lines().try_for_each(|line| {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                return Ok(());
            }
            correct_word(word, &handle, &mut out)
        })
    } else {
        words
            .iter()
            .try_for_each(|word| correct_word(word, &handle, &mut out))
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        inkwell_cli::fatal(&e.to_string());
    }
}
