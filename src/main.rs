//! # chatfold CLI
//!
//! Command-line interface for the chatfold library.

use std::io::IsTerminal;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatfold::cli::Args;
use chatfold::format::{OutputFormat, write_to_format};
use chatfold::{ChatParser, ChatfoldError, ParseStats, ParserConfig};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays the human-readable report.
fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatfoldError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();
    let report = !args.quiet;

    if report {
        println!("📦 chatfold v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Input:   {}", args.input.display());
        println!("💾 Output:  {}", output_path.display());
        println!("📄 Format:  {}", format);
    }

    let config = match &args.config {
        Some(path) => {
            if report {
                println!("⚙️  Config:  {}", path.display());
            }
            ParserConfig::from_file(path)?
        }
        None => ParserConfig::default(),
    };

    if report {
        println!();
        println!("⏳ Parsing...");
    }
    let parse_start = Instant::now();
    let records = ChatParser::with_config(config).parse(&args.input)?;
    let parse_time = parse_start.elapsed();
    if report {
        println!(
            "   Found {} messages ({:.2}s)",
            records.len(),
            parse_time.as_secs_f64()
        );
        println!("💾 Writing {}...", format);
    }

    write_to_format(&records, &output_path, format)?;

    if !report {
        return Ok(());
    }

    let stats = ParseStats::from_records(&records);
    println!();
    println!("✅ Done! Output saved to {}", output_path.display());

    println!();
    println!("📊 Summary:");
    println!("   Text:      {}", stats.text);
    println!("   Media:     {}", stats.media);
    println!("   System:    {}", stats.system);
    println!("   Senders:   {}", stats.senders.len());
    println!("   Authored:  {:.1}%", stats.authored_ratio());
    if stats.invalid_timestamps > 0 {
        println!("   ⚠️  Unreadable timestamps: {}", stats.invalid_timestamps);
    }

    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
