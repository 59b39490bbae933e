use anyhow::Context;
use clap::Parser;
use modulus_core::{Category, FormData, OnboardConfig};
use modulus_tui::Outcome;

mod cli;
mod logging;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => OnboardConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => OnboardConfig::default(),
    };
    logging::init(config.log_file.as_deref());

    if cli.dump_tui {
        println!("{}", modulus_tui::dump_all_steps(&config));
        return Ok(());
    }

    match modulus_tui::run(&config)? {
        Outcome::Completed(data) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("{}", summary(&data));
            }
        }
        Outcome::Quit => {
            println!("Onboarding cancelled. Nothing was saved.");
        }
    }
    Ok(())
}

fn summary(data: &FormData) -> String {
    let category = data.category.map(|c: Category| c.label()).unwrap_or("-");
    format!(
        "🎉 You're all set!\n\
         Store:    {} ({})\n\
         Mobile:   {}\n\
         Location: {} {}",
        data.store_name, category, data.phone, data.city, data.pincode
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_category_label() {
        let data = FormData {
            phone: "9876543210".into(),
            store_name: "Test Store".into(),
            category: Some(Category::Restaurant),
            city: "Mumbai".into(),
            pincode: "400001".into(),
            ..FormData::default()
        };
        let text = summary(&data);
        assert!(text.contains("Test Store (Food)"));
        assert!(text.contains("Mumbai 400001"));
    }
}
