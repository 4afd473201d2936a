//! Build script to generate the embedded level catalog
//!
//! Reads pipe-separated level files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_level_list(
        "data/clue_levels.txt",
        &Path::new(&out_dir).join("clue_levels.rs"),
        "CLUE_LEVELS",
        "Built-in levels for the clue-driven word find game",
    );

    // Rebuild if level data changes
    println!("cargo:rerun-if-changed=data/clue_levels.txt");
}

fn generate_level_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let records: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .collect();
    let count = records.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated level list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[EmbeddedLevel] = &[").unwrap();

    for (line_no, line) in records {
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        assert!(
            fields.len() == 7,
            "{input_path}:{}: expected 7 fields, got {}",
            line_no + 1,
            fields.len()
        );

        let id: u32 = fields[0]
            .parse()
            .unwrap_or_else(|e| panic!("{input_path}:{}: bad id: {e}", line_no + 1));
        let difficulty: u8 = fields[5]
            .parse()
            .unwrap_or_else(|e| panic!("{input_path}:{}: bad difficulty: {e}", line_no + 1));
        let hints: Vec<&str> = fields[4]
            .split(';')
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .collect();

        writeln!(output, "    EmbeddedLevel {{").unwrap();
        writeln!(output, "        id: {id},").unwrap();
        writeln!(output, "        clue: {:?},", fields[1]).unwrap();
        writeln!(output, "        letters: {:?},", fields[2]).unwrap();
        writeln!(output, "        solution: {:?},", fields[3]).unwrap();
        writeln!(output, "        hints: &{hints:?},").unwrap();
        writeln!(output, "        difficulty: {difficulty},").unwrap();
        writeln!(output, "        language: {:?},", fields[6]).unwrap();
        writeln!(output, "    }},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of levels in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
