use std::env;
use std::fs;
use std::io::{self, Read};
use uniquify_rs::{Operation, SepSpec, ShortenOptions};

/// Thin command-line wrapper around the four library operations.
///
/// Reads newline-delimited names from a file (or stdin when no file is
/// given), runs the named operation, and writes the result to stdout.
///
/// Usage: cargo run --example main -- <operation> [filename]
///            [--sep SEP]... [--marker MARKER] [--direction head|tail]
///            [--minlen N]
fn main() {
    let args: Vec<String> = env::args().collect();
    let mut opts = ShortenOptions::default();
    let mut seps: Vec<String> = Vec::new();
    let mut operation = None;
    let mut filename = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sep" => seps.push(take_value(&args, &mut i)),
            "--marker" => opts.marker = take_value(&args, &mut i),
            "--direction" => {
                opts.direction = take_value(&args, &mut i).parse().unwrap_or_else(|e| fail(e))
            }
            "--minlen" => {
                opts.minlen = take_value(&args, &mut i).parse().unwrap_or_else(|e| fail(e))
            }
            arg if operation.is_none() => {
                operation = Some(arg.parse::<Operation>().unwrap_or_else(|e| fail(e)))
            }
            arg if filename.is_none() => filename = Some(arg.to_owned()),
            arg => fail(format!("unexpected argument `{arg}`")),
        }
        i += 1;
    }

    let Some(operation) = operation else {
        eprintln!(
            "Usage: {} <operation> [filename] [--sep SEP]... [--marker MARKER] \
             [--direction head|tail] [--minlen N]",
            args[0]
        );
        std::process::exit(1);
    };
    if !seps.is_empty() {
        opts.sep = SepSpec::levels(seps);
    }

    let input = match &filename {
        Some(name) => fs::read_to_string(name).unwrap_or_else(|e| fail(e)),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| fail(e));
            buf
        }
    };

    let names: Vec<&str> = input.lines().collect();
    println!("{}", operation.apply(&names, &opts).join("\n"));
}

fn take_value(args: &[String], i: &mut usize) -> String {
    *i += 1;
    args.get(*i)
        .cloned()
        .unwrap_or_else(|| fail(format!("missing value after `{}`", args[*i - 1])))
}

fn fail<E: std::fmt::Display>(err: E) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
