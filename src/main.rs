use std::process;

use clap::Parser;

/// Folds simple keyword effects into each card's `mechanics` list and
/// rewrites the collection with a fixed field order.
#[derive(Parser)]
#[command(name = "mechpatch")]
struct Args {
    /// Card collection to patch (JSON object of card-id -> card)
    input: String,
    /// Where to write the patched collection
    output: String,
}

fn main() {
    let args = Args::parse();

    match mechpatch::run(&args.input, &args.output) {
        Ok(count) => println!("Patched {} cards -> {}", count, args.output),
        Err(errors) => {
            for e in errors {
                eprintln!("{}", e);
            }
            process::exit(65);
        }
    }
}
