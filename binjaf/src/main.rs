//! JAF command-line tool for reindenting JSON-ish streams.
//!
//! Usage: jaf [OPTIONS] [FILE|DIR]
//!
//! Options:
//!   -o, --output <FILE>    Write output to specified file
//!   -w, --write            Write output next to each input with the fmt extension
//!   -h, --help             Print help
//!   -V, --version          Print version

use libjaf::{reindent, reindent_to};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut output_file: Option<&str> = None;
    let mut write_back = false;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("jaf {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires an argument");
                    process::exit(1);
                }
                output_file = Some(&args[i]);
            }
            "-w" | "--write" => {
                write_back = true;
            }
            "-" => {
                // Explicit stdin
                // input_path stays None, which means stdin
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            _ => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input paths not supported");
                    process::exit(1);
                }
                input_path = Some(&args[i]);
            }
        }
        i += 1;
    }

    if write_back && output_file.is_some() {
        eprintln!("Error: --write and --output are mutually exclusive");
        process::exit(1);
    }

    // Check if input is a directory
    if let Some(path) = input_path {
        let path_ref = Path::new(path);
        if path_ref.is_dir() {
            // Directory mode: process all .json files
            if output_file.is_some() {
                eprintln!("Error: --output cannot be used with directory input");
                process::exit(1);
            }
            process_directory(path, write_back);
            return;
        }
    }

    // Single input: file or stdin.
    let input: String = match input_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            match String::from_utf8(buffer) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error: input is not valid UTF-8: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    let exit_code = process_input(&input, input_path, output_file, write_back);
    process::exit(exit_code);
}

fn process_directory(dir_path: &str, write_back: bool) {
    let entries = match fs::read_dir(dir_path) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error reading directory {}: {}", dir_path, e);
            process::exit(1);
        }
    };

    let mut had_errors = false;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            let path_str = path.to_string_lossy();
            let input = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading {}: {}", path_str, e);
                    had_errors = true;
                    continue;
                }
            };

            if process_input(&input, Some(&path_str), None, write_back) != 0 {
                had_errors = true;
            }
        }
    }

    process::exit(if had_errors { 1 } else { 0 });
}

fn process_input(
    input: &str,
    input_file: Option<&str>,
    output_file: Option<&str>,
    write_back: bool,
) -> i32 {
    if let Some(path) = output_file {
        let output = reindent(input);
        if let Err(e) = fs::write(path, output) {
            eprintln!("Error writing {}: {}", path, e);
            return 1;
        }
        return 0;
    }

    if write_back {
        let input_path = match input_file {
            Some(p) => p,
            None => {
                eprintln!("Error: --write requires an input file");
                return 1;
            }
        };
        let output = reindent(input);
        let output_path = Path::new(input_path).with_extension("fmt");
        if let Err(e) = fs::write(&output_path, output) {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            return 1;
        }
        return 0;
    }

    // Default: stream straight to stdout.
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = reindent_to(input, &mut handle) {
        eprintln!("Error writing to stdout: {}", e);
        return 1;
    }

    0
}

fn print_help() {
    println!(
        "jaf - permissive JSON stream reindenter

USAGE:
    jaf [OPTIONS] [FILE|DIR]

ARGS:
    [FILE|DIR]    Input file or directory (reads from stdin if not provided)
                  When a directory is given, processes all .json files in it

OPTIONS:
    -o, --output <FILE>    Write output to specified file (not valid with directory input)

    -w, --write            Write output next to each input with the 'fmt' extension

    -h, --help             Print help

    -V, --version          Print version

EXAMPLES:
    # Reindent a compact JSON document from stdin
    curl -s https://example.org/data.json | jaf

    # Reindent a file to stdout
    jaf data.json

    # Reindent a file into a new file
    jaf data.json -o data.pretty.json

    # Reindent every .json file in a directory, writing .fmt files
    jaf -w ./payloads/
"
    );
}
