use courtfinder::{search::CourtSearchFeature, App, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config: Config = match std::env::args().nth(1) {
        Some(path) => Config::from_path(&path)?,
        None => Config::default(),
    };

    let search = CourtSearchFeature::from_config(&config.search);

    App::new(config)
        .register_feature(search)
        .apply_fallback()
        .build()
        .run()
        .await?;

    Ok(())
}
