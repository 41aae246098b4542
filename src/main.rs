use art_exhibition::utils::{logger, validation::Validate};
use art_exhibition::{
    CatalogConfig, CatalogError, CliConfig, Command, ExhibitionService, UserStore,
};
use clap::Parser;
use serde::Serialize;
use std::fmt::Display;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting art-exhibition CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(config: &CliConfig) -> art_exhibition::Result<()> {
    config.validate()?;

    let (service, users) = match &config.catalog {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path);
            let catalog = CatalogConfig::from_file(path)?;
            catalog.validate()?;
            if let Some(name) = catalog.name() {
                tracing::info!("📚 Catalog: {}", name);
            }
            (ExhibitionService::from_catalog(&catalog), catalog.users()?)
        }
        None => (ExhibitionService::new(), UserStore::new()),
    };

    match &config.command {
        Command::Galleries => print_list(config.json, service.galleries())?,
        Command::Artworks => print_list(config.json, service.artworks())?,
        Command::Gallery { id } => print_list(config.json, &service.artworks_in_gallery(*id))?,
        Command::Artwork { id } => {
            let artwork = service
                .artwork_by_id(*id)
                .ok_or_else(|| CatalogError::not_found("Artwork", id))?;
            print_one(config.json, artwork)?;
        }
        Command::Login { username } => {
            let user = users
                .login(username)
                .ok_or_else(|| CatalogError::not_found("User", username))?;
            print_one(config.json, user)?;
        }
    }

    Ok(())
}

fn print_list<T: Serialize + Display>(json: bool, items: &[T]) -> art_exhibition::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else if items.is_empty() {
        println!("(none)");
    } else {
        for item in items {
            println!("{}", item);
        }
    }
    Ok(())
}

fn print_one<T: Serialize + Display>(json: bool, item: &T) -> art_exhibition::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item);
    }
    Ok(())
}
