//! Command execution

use indicatif::{ProgressBar, ProgressStyle};
use skiphire_app::{BookingSession, Config};
use skiphire_domain::{PriceRange, SizeRange, DEFAULT_PRICE_RANGE, DEFAULT_SIZE_RANGE};
use skiphire_source::HttpSkipSource;
use skiphire_types::Result;
use std::time::Duration;

use crate::cli::{Cli, Commands};
use crate::output;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let postcode = cli.postcode.clone().unwrap_or_else(|| config.postcode.clone());
    let area = cli.area.clone().unwrap_or_else(|| config.area.clone());
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::List {
            road_only,
            heavy,
            min_size,
            max_size,
            min_price,
            max_price,
        } => {
            let mut session = fetch_session(&config, &postcode, &area)?;

            for heavy_type in &heavy {
                session.state_mut().toggle_heavy_waste_type(heavy_type);
            }

            // Explicit bounds replace the derived/default ones; an inverted
            // pair is rejected here, before any filtering happens.
            session.filter_mut().road_placement_only = road_only;
            if min_size.is_some() || max_size.is_some() {
                session.filter_mut().size_range = SizeRange::new(
                    min_size.unwrap_or(DEFAULT_SIZE_RANGE.0),
                    max_size.unwrap_or(DEFAULT_SIZE_RANGE.1),
                )?;
            }
            if min_price.is_some() || max_price.is_some() {
                session.filter_mut().price_range = PriceRange::new(
                    min_price.unwrap_or(DEFAULT_PRICE_RANGE.0),
                    max_price.unwrap_or(DEFAULT_PRICE_RANGE.1),
                )?;
            }

            let visible = session.visible_skips();
            output::print_skips(format, &visible, session.state().has_heavy_waste())?;
        }

        Commands::Compare { ids } => {
            let mut session = fetch_session(&config, &postcode, &area)?;

            for id in ids {
                session.toggle_compare(id);
            }

            let compared = session.compared_skips();
            output::print_comparison(format, &compared)?;
        }

        Commands::Config {
            show,
            set_postcode,
            set_area,
            set_base_url,
            set_format,
        } => {
            let mut config = config;
            let mut modified = false;

            if let Some(postcode) = set_postcode {
                config.postcode = postcode;
                modified = true;
            }
            if let Some(area) = set_area {
                config.area = area;
                modified = true;
            }
            if let Some(base_url) = set_base_url {
                config.base_url = base_url;
                modified = true;
            }
            if let Some(format) = set_format {
                config.output_format = format;
                modified = true;
            }

            if modified {
                config.save()?;
                println!("Configuration saved.");
            }
            if show || !modified {
                println!("{}", config);
            }
        }
    }

    Ok(())
}

/// Build a session and run the one-shot fetch with a spinner
fn fetch_session(config: &Config, postcode: &str, area: &str) -> Result<BookingSession> {
    let source = HttpSkipSource::new(config.base_url.clone());
    let mut session = BookingSession::new(Box::new(source));

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Fetching skips for {} {}...", postcode, area));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = session.load_skips(postcode, area);
    spinner.finish_and_clear();
    result?;

    Ok(session)
}
