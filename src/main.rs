use std::{fs::File, io, path::Path};

use anyhow::Result;
use clap::Parser;

use layer_search::{
    cli::{CliArgs, Mode},
    config::{Config, load_config},
    display,
    engines::{BoxedSearchEngine, FmeSearch},
    export::{JsonPublisher, Publisher, to_features},
    session::SearchSession,
};

fn publish(session: &SearchSession, target: &Path) -> Result<()> {
    let features = to_features(session.raw_hits());

    if target == Path::new("-") {
        JsonPublisher::new(io::stdout().lock()).publish(&features)
    } else {
        log::info!("Writing feature records to {}", target.display());
        JsonPublisher::new(File::create(target)?).publish(&features)
    }
}

async fn run(args: CliArgs, config: Config) -> Result<()> {
    let engine: BoxedSearchEngine = Box::new(FmeSearch::from_config(&config.api));
    let mut session = SearchSession::from_config(&config.display);

    let outcome = session.search(engine.as_ref(), &args.query()).await;

    match args.mode {
        Mode::Full => {
            session.set_page(args.page);
            for index in &args.expand {
                session.toggle_description(index.saturating_sub(1));
            }
            println!("{}", display::results::format(&session, &config.display));
        }
        Mode::Lite => {
            eprintln!("{}", display::status::format(&session));
        }
    }

    if outcome.is_ok() {
        let target = match (&args.export, args.mode) {
            (Some(path), _) => Some(path.as_path()),
            (None, Mode::Lite) => Some(Path::new("-")),
            (None, Mode::Full) => None,
        };
        if let Some(target) = target {
            publish(&session, target)?;
        }
    }

    outcome?;
    Ok(())
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let args = CliArgs::parse();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    if args.print_config {
        match config.to_toml() {
            Ok(text) => print!("{}", text),
            Err(err) => {
                log::error!("{}", err);
                std::process::exit(1);
            }
        }
        return;
    }

    rust_i18n::set_locale(&config.display.language);
    log::info!("Searching with {}", config.api.base_url);

    if let Err(err) = run(args, config).await {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
