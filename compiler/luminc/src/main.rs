//! Lumin CLI
//!
//! Lua minifier and require packer.

use std::path::Path;

use luminc::commands::{compile_file, lex_file, minify_file, pack_file, parse_options};
use luminc::{init_tracing, CliError};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "minify" | "pack" | "compile" => {
            if args.len() < 3 {
                eprintln!("Usage: lumin {command} <file.lua> [options]");
                eprintln!("Run `lumin help` to list the options.");
                std::process::exit(1);
            }

            let options = match parse_options(&args[3..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };
            init_tracing(options.verbose);

            let path = Path::new(&args[2]);
            let result = match command.as_str() {
                "minify" => minify_file(path, &options),
                "pack" => pack_file(path, &options),
                _ => compile_file(path, &options, &options.host_compiler()),
            };
            exit_on_error(result);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: lumin lex <file.lua>");
                std::process::exit(1);
            }
            init_tracing(false);
            exit_on_error(lex_file(Path::new(&args[2])));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("lumin {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn exit_on_error(result: Result<(), CliError>) {
    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Lumin - Lua minifier and require packer");
    println!();
    println!("Usage: lumin <command> [options]");
    println!();
    println!("Commands:");
    println!("  minify <file.lua>   Strip comments and whitespace, process comment blocks");
    println!("  pack <file.lua>     Minify and inline every literal require");
    println!("  compile <file.lua>  Pack, then compile with the host Lua compiler");
    println!("  lex <file.lua>      Print the token stream (debugging)");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --root=<dir>          Directory require and build-replace paths are relative to (default: .)");
    println!("  --keep-delete-blocks  Keep --[[minify-delete]] blocks");
    println!("  --sandbox             Minify embedded Lua files without packing them");
    println!("  -o <path>             Output file (default: stdout)");
    println!("  --luac=<program>      Host compiler for `compile` (default: luac)");
    println!("  -v, --verbose         Debug logging (RUST_LOG overrides)");
}
