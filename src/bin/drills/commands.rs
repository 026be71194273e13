use drills::registry::{catalog, find};

use crate::cli::Command;
use crate::demos;

pub fn execute_command(cmd: Command) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Command::List { category } => {
            println!(
                "{:<32} | {:<45} | {:<19} | {:<6} | {}",
                "slug", "title", "category", "level", "variants"
            );
            for p in catalog() {
                if let Some(cat) = &category {
                    if p.category.as_str() != cat {
                        continue;
                    }
                }
                println!(
                    "{:<32} | {:<45} | {:<19} | {:<6} | {}",
                    p.slug,
                    p.title,
                    p.category.to_string(),
                    p.difficulty.to_string(),
                    p.variants.join(", ")
                );
            }
        }
        Command::Catalog { pretty } => {
            let json = if pretty {
                serde_json::to_string_pretty(catalog())?
            } else {
                serde_json::to_string(catalog())?
            };
            println!("{json}");
        }
        Command::Run { slug } => {
            let info = find(&slug)?;
            demos::run(info)?;
        }
        Command::All => {
            for info in catalog() {
                demos::run(info)?;
                println!();
            }
        }
    }
    Ok(())
}
