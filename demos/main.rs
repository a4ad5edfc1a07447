use ahash::AHashMap;
use frontcoding_rs::FrontCodedDict;
use std::collections::BTreeMap;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem::size_of;

/// Builds a dictionary from a line-oriented file and compares its footprint
/// with standard maps holding the same keys.
///
/// Usage: cargo run --example main <filename>
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <filename>", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];

    let file = File::open(filename).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found.", filename);
        std::process::exit(1);
    });

    let mut lines = Vec::new();
    for line in BufReader::new(file).split(b'\n') {
        let mut line = line.expect("Error reading file");
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        lines.push(line);
    }

    let dict = FrontCodedDict::build(&lines).unwrap_or_else(|err| {
        eprintln!("Cannot build dictionary: {}", err);
        std::process::exit(1);
    });

    // Verify every line round-trips
    for (line_no, line) in lines.iter().enumerate() {
        match dict.lookup(line) {
            Some(id) if dict.access(id).map(|s| s == *line).unwrap_or(false) => {}
            _ => eprintln!("Mismatch at line {}", line_no + 1),
        }
    }

    // Baselines: key bytes plus per-entry overhead, ignoring allocator slack
    let key_bytes: usize = lines.iter().map(|l| l.capacity()).sum();

    let btree: BTreeMap<&[u8], usize> = lines
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_slice(), i))
        .collect();
    let btree_bytes = key_bytes + btree.len() * size_of::<(Vec<u8>, usize)>();

    let hash: AHashMap<&[u8], usize> = lines
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_slice(), i))
        .collect();
    let hash_bytes = key_bytes + hash.capacity() * (size_of::<(Vec<u8>, usize)>() + 1);

    let stats = dict.stats();

    println!("\n=== Statistics ===");
    println!("Lines read: {}", stats.num_strings);
    println!("Distinct lines: {}", hash.len());
    println!("Blocks: {}", stats.num_blocks);
    println!("Raw bytes: {}", stats.raw_bytes);
    println!("Arena bytes: {}", stats.arena_bytes);
    println!("Compression ratio: {:.2}%", stats.compression_ratio());
    println!();
    println!("BTreeMap - ~{} bytes", btree_bytes);
    println!("AHashMap - ~{} bytes", hash_bytes);
    println!("FrontCodedDict - {} bytes", dict.memory_footprint());
}
