//! Command line frontend: formats files (or stdin) with the standard
//! ruleset and reports every warning as `file:line:col message`.

use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;

use cjk_fmt::{format_text_with_options, Options, Output};

#[derive(Debug, Parser)]
#[command(version, about = "Format and lint prose mixing CJK and Latin text")]
struct Cli {
    /// Files to format. Reads stdin when none are given.
    files: Vec<PathBuf>,

    /// Rewrite the files in place instead of printing the result.
    #[arg(short, long)]
    write: bool,

    /// Leave every style aspect untouched instead of applying the
    /// standard ruleset. Useful to check the pipeline is lossless.
    #[arg(long)]
    preserve: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();
    let options = if cli.preserve {
        Options::default()
    } else {
        Options::standard()
    };

    let mut warned = false;
    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("reading stdin")?;
        let output = format_text_with_options(&input, options);
        warned |= report("<stdin>", &input, &output);
        io::stdout().write_all(output.result.as_bytes())?;
    } else {
        for file in &cli.files {
            let input = fs::read_to_string(file)
                .with_context(|| format!("reading {}", file.display()))?;
            let output = format_text_with_options(&input, options.clone());
            warned |= report(&file.display().to_string(), &input, &output);
            if !cli.write {
                io::stdout().write_all(output.result.as_bytes())?;
            } else if output.result != input {
                fs::write(file, &output.result)
                    .with_context(|| format!("writing {}", file.display()))?;
            }
        }
    }
    Ok(if warned && !cli.write {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn report(name: &str, input: &str, output: &Output) -> bool {
    for validation in &output.validations {
        let (line, col) = line_col(input, validation.index);
        eprintln!("{name}:{line}:{col}: {}", validation.message);
    }
    !output.validations.is_empty()
}

/// 1-based line and column of a char offset.
fn line_col(input: &str, index: usize) -> (usize, usize) {
    let (mut line, mut col) = (1, 1);
    for c in input.chars().take(index) {
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}
