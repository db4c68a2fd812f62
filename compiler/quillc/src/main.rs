//! Quill interpreter CLI.

use quillc::commands::{lex_file, parse_file, run_file};
use quillc::{init_tracing, InterpreterConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let mut config = InterpreterConfig::default();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if let Some(depth) = arg.strip_prefix("--max-depth=") {
                    let Ok(depth) = depth.parse::<usize>() else {
                        eprintln!("error: invalid --max-depth value '{depth}'");
                        std::process::exit(1);
                    };
                    config.max_call_depth = Some(depth);
                } else if arg.starts_with('-') {
                    eprintln!("error: unknown option '{arg}'");
                    std::process::exit(1);
                } else if file_path.is_none() {
                    file_path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    eprintln!("Usage: quill run <file> [--max-depth=N]");
                    std::process::exit(1);
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: quill run <file> [--max-depth=N]");
                std::process::exit(1);
            };

            run_file(path, &config);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: quill lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: quill parse <file>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("quill {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            if command.starts_with('-') {
                eprintln!("Unknown option: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
            if let Some(extra) = args.get(2) {
                eprintln!("error: unexpected argument '{extra}'");
                eprintln!("Usage: quill <file>");
                std::process::exit(1);
            }
            run_file(command, &InterpreterConfig::default());
        }
    }
}

fn print_usage() {
    println!("Quill interpreter");
    println!();
    println!("Usage: quill <command> [options]");
    println!("       quill <file>");
    println!();
    println!("Commands:");
    println!("  run <file>       Run a Quill program");
    println!("  lex <file>       Tokenize and display tokens");
    println!("  parse <file>     Parse and display top-level statements");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Run options:");
    println!("  --max-depth=N    Fail once user function calls nest deeper than N");
    println!();
    println!("Environment:");
    println!("  RUST_LOG         Enable diagnostic logging (e.g. RUST_LOG=quill_eval=debug)");
}
