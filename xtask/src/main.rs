use std::{
    collections::HashSet,
    env,
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::{bail, ensure, Context, Result};
use heck::ToPascalCase;
use once_cell::sync::Lazy;

use crate::schema::*;

mod schema;

pub static WORKSPACE_DIR: Lazy<PathBuf> = Lazy::new(|| {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
});

const FACES: [&str; 6] = ["north", "east", "south", "west", "up", "down"];

const HEADER: &str = r###"
// IMPORTANT: DO NOT EDIT THIS FILE MANUALLY!
// This file is automatically generated with `cargo xtask codegen`.
// To make any changes, edit `data/blocks.json` or the xtask source instead.
"###;

fn main() -> Result<()> {
    match env::args().nth(1).unwrap_or_default().as_str() {
        "--help" | "-h" | "" => println!(
            "{}",
            r###"
Usage: Run with `cargo xtask <task>`, eg. `cargo xtask codegen`.

    Tasks:
        codegen:                              Run all codegen subtasks.
        codegen properties:                   Generate the `list.rs` file for the property registry
        codegen block-data:                   Generate the `list.rs` file for block data types

    Options:
        --check:                              Only verify that the generated files are up to date
            "###
            .trim(),
        ),
        "codegen" => {
            let args: Vec<_> = env::args().skip(2).collect();
            let check = args.iter().any(|arg| arg == "--check");
            let arg = args.iter().find(|arg| !arg.starts_with("--"));

            // read the schema
            println!("\x1b[1;36m>>> reading `data/blocks.json`\x1b[0m");
            let path = WORKSPACE_DIR.join("data/blocks.json");
            let blocks: BlocksJson = serde_json::from_reader(BufReader::new(
                File::open(&path).with_context(|| format!("could not open {}", path.display()))?,
            ))
            .with_context(|| format!("could not parse {}", path.display()))?;
            validate(&blocks)?;

            if arg.map_or(true, |arg| arg == "properties") {
                println!("\x1b[1;36m>>> generating the property registry\x1b[0m");
                write_generated(
                    WORKSPACE_DIR.join("src/property/list.rs"),
                    codegen_properties(&blocks),
                    check,
                )?;
            }

            if arg.map_or(true, |arg| arg == "block-data") {
                println!("\x1b[1;36m>>> generating the block data types\x1b[0m");
                write_generated(
                    WORKSPACE_DIR.join("src/block_data/list.rs"),
                    codegen_block_data(&blocks),
                    check,
                )?;
            }

            println!("\x1b[1;32m>>> Done!\x1b[0m");
        }
        task => {
            eprintln!(
                "unknown task '{task}', run `cargo xtask --help` to see a list of available tasks"
            );
            std::process::exit(1);
        }
    }

    Ok(())
}

fn write_generated(path: impl AsRef<Path>, content: String, check: bool) -> Result<()> {
    let path = path.as_ref();
    if !check {
        fs::write(path, content).with_context(|| format!("could not write {}", path.display()))?;
        return Ok(());
    }
    let current = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    if current != content {
        bail!(
            "{} is out of date, run `cargo xtask codegen` to regenerate it",
            path.display()
        );
    }
    println!("\x1b[36m> {} is up to date\x1b[0m", path.display());
    Ok(())
}

fn validate(BlocksJson { blocks }: &BlocksJson) -> Result<()> {
    let mut ids = HashSet::new();
    for Block {
        id,
        multiple_facing,
        properties,
    } in blocks
    {
        ensure!(
            id.starts_with("minecraft:"),
            "block id '{id}' must be in the `minecraft` namespace"
        );
        ensure!(ids.insert(id.as_str()), "block '{id}' is listed twice");
        ensure!(!properties.is_empty(), "block '{id}' has no properties");

        let mut names = HashSet::new();
        for prop in properties {
            ensure!(
                names.insert(prop.name()),
                "block '{id}' has property '{}' twice",
                prop.name()
            );
            if let Property::Int {
                name,
                min,
                max,
                default,
            } = prop
            {
                ensure!(
                    min <= default && default <= max,
                    "default {default} of property '{name}' of block '{id}' is not in {min}..={max}"
                );
            }
        }

        if *multiple_facing {
            let has_face = properties.iter().any(|prop| {
                matches!(prop, Property::Bool { name, .. } if FACES.contains(&name.as_str()))
            });
            ensure!(
                has_face,
                "block '{id}' is marked as multiple facing but has no face properties"
            );
        }
    }
    Ok(())
}

fn codegen_properties(BlocksJson { blocks }: &BlocksJson) -> String {
    let mut property_list_rs = HEADER.trim_start().to_owned();
    property_list_rs += "\nproperties! {\n";
    for block in blocks {
        let mut properties: Vec<_> = block.properties.iter().collect();
        properties.sort_by(|a, b| a.name().cmp(b.name()));

        property_list_rs += &format!("    \"{}\" => ", block.id);
        let last_index = properties.len() - 1;
        for (index, prop) in properties.into_iter().enumerate() {
            match prop {
                Property::Bool { name, default } => {
                    property_list_rs += &format!("{name}: bool = {default}")
                }
                Property::Int {
                    name,
                    min,
                    max,
                    default,
                } => property_list_rs += &format!("{name}: int({min}, {max}) = {default}"),
            }
            if index != last_index {
                property_list_rs += ", ";
            }
        }
        property_list_rs += ";\n";
    }
    property_list_rs += "}\n";
    property_list_rs
}

fn codegen_block_data(BlocksJson { blocks }: &BlocksJson) -> String {
    let mut block_data_list_rs = HEADER.trim_start().to_owned();
    block_data_list_rs += "\nmultiple_facing! {\n";
    for block in blocks.iter().filter(|block| block.multiple_facing) {
        let Some(name) = block.id.strip_prefix("minecraft:") else {
            continue;
        };
        block_data_list_rs += &format!("    \"{}\", {};\n", block.id, name.to_pascal_case());
    }
    block_data_list_rs += "}\n";
    block_data_list_rs
}
