use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use pwa_icons::commands::check::CheckResult;
use pwa_icons::icon::Variant;
use pwa_icons::render::FontBook;
use pwa_icons::targets::DEFAULT_OUTPUT_DIR;

#[derive(Parser)]
#[command(name = "pwa-icons")]
#[command(about = "Generate the PWA icon set")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render all icons into the output directory
    Generate {
        /// Output directory (created if missing)
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        out_dir: PathBuf,
        /// Icon set to render. Available: primary, alternate
        #[arg(short, long, default_value = "primary")]
        variant: String,
    },
    /// Verify a previously generated output directory
    Check {
        /// Directory holding the icons
        #[arg(default_value = DEFAULT_OUTPUT_DIR)]
        dir: PathBuf,
    },
    /// Print the web manifest icon entries as JSON
    Manifest {
        /// Icon set to describe. Available: primary, alternate
        #[arg(short, long, default_value = "primary")]
        variant: String,
    },
}

fn parse_variant(name: &str) -> Variant {
    match Variant::parse(name) {
        Some(variant) => variant,
        None => {
            eprintln!("Error: unknown variant '{}' (expected primary or alternate)", name);
            process::exit(2);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { out_dir, variant } => {
            let variant = parse_variant(&variant);
            let book = FontBook::system();
            match pwa_icons::commands::generate::run(&out_dir, variant, &book) {
                Ok(result) => {
                    for file in &result.files {
                        println!(
                            "Wrote {} ({}x{}) {}",
                            file.path.display(),
                            file.size,
                            file.size,
                            file.sha256
                        );
                    }
                    let fonts: Vec<String> = result.fonts.iter().map(|f| f.to_string()).collect();
                    println!("Fonts: {}", fonts.join(", "));
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
        Commands::Check { dir } => match pwa_icons::commands::check::run(&dir) {
            Ok(checks) => {
                let mut failed = false;
                for check in &checks {
                    match &check.result {
                        CheckResult::Ok => println!("{}: ok", check.file),
                        CheckResult::Missing => println!("{}: missing", check.file),
                        CheckResult::Empty => println!("{}: empty", check.file),
                        CheckResult::Undecodable { reason } => {
                            println!("{}: undecodable ({})", check.file, reason)
                        }
                        CheckResult::WrongSize { expected, actual } => {
                            println!(
                                "{}: wrong size (expected {:?}, got {:?})",
                                check.file, expected, actual
                            )
                        }
                    }
                    failed |= !check.result.is_ok();
                }
                if failed {
                    println!("Icon set incomplete");
                    process::exit(1);
                }
                println!("Icon set complete");
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        },
        Commands::Manifest { variant } => {
            let variant = parse_variant(&variant);
            match pwa_icons::commands::manifest::run(variant) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
    }
}
