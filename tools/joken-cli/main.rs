use clap::Parser;
use joken::prelude::*;
use std::time::Instant;

/// A conditional logic engine CLI: validates a form's rules and dumps the
/// derived field state for a data snapshot (the "run test" view).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a sample form JSON file ({ "fields": [...], "rules": [...], "data": {...} })
    form_path: Option<String>,

    /// Maximum number of evaluation passes before giving up on convergence
    #[arg(short, long, default_value_t = DEFAULT_PASS_CAP)]
    passes: usize,

    /// Only validate the rules, without evaluating the form data
    #[arg(long)]
    check: bool,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let form = if let Some(path) = &cli.form_path {
        SampleForm::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load form from '{}': {}", path, e))
        })
    } else {
        println!("No form file provided. Using the built-in mock form.");
        SampleForm::mock()
    };
    let load_duration = load_start.elapsed();

    // --- 2. Rule Validation ---
    println!("\nValidating {} rule(s)...", form.rules().len());
    let validate_start = Instant::now();
    let mut invalid = 0;
    for rule in form.rules() {
        let report = validate_rule(rule, form.fields());
        if !report.is_valid() {
            invalid += 1;
            println!("  Rule '{}' ({}) is invalid:", rule.name, rule.id);
            for message in report.messages() {
                println!("    - {}", message);
            }
        }
    }
    let validate_duration = validate_start.elapsed();

    if invalid == 0 {
        println!("All rules are structurally valid.");
    } else {
        println!("{} rule(s) failed validation.", invalid);
    }

    if cli.check {
        if invalid > 0 {
            std::process::exit(1);
        }
        return;
    }

    // --- 3. Evaluation ---
    println!("\nResolving derived field state...");
    let eval_start = Instant::now();
    let engine = ResolutionEngine::new(cli.passes);
    let resolution = engine.update_form_data(form.fields(), form.rules(), form.data());
    let eval_duration = eval_start.elapsed();

    // --- 4. Results and Summary ---
    let dump = serde_json::to_string_pretty(&resolution.fields)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize result: {}", e)));
    println!("{}", dump);

    if !resolution.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &resolution.warnings {
            println!("  - {}", warning);
        }
    }

    let total_duration = total_start.elapsed();
    println!("\n--- Resolution Summary ---");
    println!("Fields:     {}", form.fields().len());
    println!(
        "Rules:      {} ({} active)",
        form.rules().len(),
        form.rules().iter().filter(|r| r.active).count()
    );
    println!("Passes:     {}", resolution.passes);
    println!("Converged:  {}", resolution.converged);

    println!("\n--- Performance Summary ---");
    println!("File Loading:  {:?}", load_duration);
    println!("Validation:    {:?}", validate_duration);
    println!("Evaluation:    {:?}", eval_duration);
    println!("---------------------------");
    println!("Total:         {:?}", total_duration);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
