//! Command-line label transcoder.
//!
//! Loads font bundles the same way the tiling bootstrap does, then
//! classifies or encodes a string, which makes it handy for checking what
//! a given bundle archive will do to a label before kicking off a build.

use std::collections::BTreeMap;

use clap::Parser;
use label_encoding::{archive_metadata, FontRegistry, Script, TextEncoder};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the bundle archive entries.
    #[arg(short, long)]
    archive: std::path::PathBuf,

    /// Bundle to load, as '<name>,<version>,<script>'; repeatable.
    #[arg(short, long = "bundle")]
    bundles: Vec<String>,

    /// Only classify the text; skip encoding.
    #[arg(long)]
    classify: bool,

    /// Print the archive metadata pairs after loading.
    #[arg(long)]
    metadata: bool,

    /// The label text to classify/encode.
    text: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut registry = FontRegistry::new(&args.archive);
    for spec in &args.bundles {
        let (name, version, script) = match parse_bundle_spec(spec) {
            Ok(parts) => parts,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = registry.load_bundle(name, version, script) {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    if args.metadata {
        print_metadata(&archive_metadata(&registry));
    }

    let script = Script::of(&args.text);
    println!("script: {script}");

    if !args.classify {
        let encoder = TextEncoder::new(&registry);
        match encoder.encode(&args.text, script) {
            Some(encoded) => println!("encoded: {}", format_tokens(&encoded)),
            None => println!("encoded: (no bundle loaded for {script})"),
        }
    }
}

fn parse_bundle_spec(spec: &str) -> Result<(&str, &str, Script), String> {
    let mut parts = spec.splitn(3, ',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(version), Some(script)) => {
            let script = script
                .parse::<Script>()
                .map_err(|e| format!("bad bundle spec '{spec}': {e}"))?;
            Ok((name, version, script))
        }
        _ => Err(format!(
            "bad bundle spec '{spec}': expected '<name>,<version>,<script>'"
        )),
    }
}

fn print_metadata(metadata: &BTreeMap<String, String>) {
    for (key, value) in metadata {
        println!("{key}={value}");
    }
}

/// Encoded values are Private Use Area text; print the token scalars
/// instead of tofu.
fn format_tokens(encoded: &str) -> String {
    encoded
        .chars()
        .map(|c| format!("{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}
