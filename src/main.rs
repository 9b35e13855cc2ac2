//! CLI entry point for zsh-keymap
//!
//! Generates a `bindkey` script from a keymap file, validates keymaps,
//! and prints the notation reference.

use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zsh_keymap::config::{expand_path, generate, output, validate, IssueLevel, KeymapConfig, ValidationReport};
use zsh_keymap::core::notation::{resolve, SPECIAL_KEYS, TERMINAL_SEQUENCES};

#[derive(Parser)]
#[command(name = "zsh-keymap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the keymap YAML file
    file: Option<PathBuf>,

    /// Sections to generate, in order (default: all sections)
    sections: Vec<String>,

    /// Validate only; exit with status 1 if any error is found
    #[arg(long)]
    validate: bool,

    /// Write the generated script to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip generation when the output file is newer than the keymap
    #[arg(long, requires = "output")]
    if_stale: bool,

    /// Print the shortcut notation reference and exit
    #[arg(long, conflicts_with_all = ["validate", "output"])]
    notation: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.notation {
        print_notation_reference();
        return Ok(());
    }

    let file = cli
        .file
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("No keymap file specified"))?;
    let path = expand_path(file)?;

    let output_path = cli.output.as_deref().map(expand_path).transpose()?;

    if let Some(out) = &output_path {
        if cli.if_stale && path.exists() && output::is_up_to_date(&path, out) {
            tracing::debug!(output = %out.display(), "output is up to date");
            return Ok(());
        }
    }

    let config = KeymapConfig::load(&path)?;

    let report = validate(&config);
    print_issues(&config, &report);

    if cli.validate {
        if report.is_clean() {
            eprintln!("{} {} OK", "✓".green().bold(), config);
        }
        if report.has_errors() {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Best-effort: issues are already on stderr, emit whatever is valid
    let generated = generate(&config, &cli.sections);

    match output_path {
        Some(out) => {
            output::write_atomically(&out, &generated.to_script())?;
            eprintln!(
                "{} Wrote {} binding{} to {}",
                "✓".green(),
                generated.binding_count(),
                if generated.binding_count() == 1 { "" } else { "s" },
                out.display()
            );
        }
        None => print!("{}", generated.to_script()),
    }

    Ok(())
}

/// Routes tracing output to stderr so stdout stays a clean script
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Prints validation issues and a summary line to stderr
fn print_issues(config: &KeymapConfig, report: &ValidationReport) {
    if report.is_clean() {
        return;
    }

    eprintln!("{} {}", "zsh-keymap:".bold(), config);

    for issue in &report.issues {
        let line = issue.to_string();
        match issue.level {
            IssueLevel::Error => eprintln!("  {}", line.red()),
            IssueLevel::Warning => eprintln!("  {}", line.yellow()),
        }
    }

    let errors = report.error_count();
    let warnings = report.warning_count();
    eprintln!(
        "{} {} error{}, {} warning{}\n",
        if errors > 0 { "✗".red().bold() } else { "⚠".yellow().bold() },
        errors,
        if errors == 1 { "" } else { "s" },
        warnings,
        if warnings == 1 { "" } else { "s" },
    );
}

/// Prints modifiers, named keys and terminal sequences
fn print_notation_reference() {
    let show = |shortcut: String| resolve(&shortcut).map(|s| s.to_string()).unwrap_or_default();

    println!("{}", "Modifiers".bold());
    println!("  {}  Ctrl            C-a → {}", "C-".cyan(), show("C-a".to_string()));
    println!("  {}  Meta (ESC)      M-a → {}", "M-".cyan(), show("M-a".to_string()));
    println!("  {}  Alt, same as M-", "A-".cyan());
    println!("  Shift and other modifiers need {}\n", "raw: true".yellow());

    println!("{}", "Named keys".bold());
    for (name, _) in SPECIAL_KEYS {
        println!(
            "  {:<10} C-: {:<6} M-: {}",
            name.cyan(),
            format!("'{}'", show(format!("C-{}", name))),
            format!("'{}'", show(format!("M-{}", name)))
        );
    }

    println!("\n{} (use {})", "Terminal-specific keys".bold(), "raw: true".yellow());
    for (name, sequence) in TERMINAL_SEQUENCES {
        println!("  {:<10} {}", name.cyan(), sequence);
    }
}
