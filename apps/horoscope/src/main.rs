mod cli;
mod prompt;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use cli::{Args, OutputFormat};
use std::fs;
use urania::geo::{Gazetteer, Place};
use urania::rendering::{ChartComposer, Color, VisualConfig};
use urania::report::text_report;
use urania::{
    compute_chart, AspectSettings, ChartKind, ChartRequest, GeoLocation, HouseSystem,
    LayoutSettings, LocationInput, RenderSession, SwissEphemerisAdapter,
};
use urania_config::UraniaConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(mut args: Args) -> anyhow::Result<()> {
    let config = urania_config::load(args.config.as_deref())?;

    let kind = match args.chart_type {
        Some(t) => ChartKind::from(t),
        None => config
            .chart
            .chart_type
            .parse::<ChartKind>()
            .map_err(anyhow::Error::msg)
            .context("Invalid chart.chart_type in config")?,
    };

    if !args.no_prompt {
        prompt::fill_missing(&mut args, kind == ChartKind::Natal)?;
    }

    let house_system = match args.house_system.as_deref().or(config.chart.house_system.as_deref()) {
        Some(name) => name.parse::<HouseSystem>()?,
        None => kind.default_house_system(),
    };

    let location = match (args.lat, args.lon, args.location.take()) {
        (Some(lat), Some(lon), _) => LocationInput::Coordinates(GeoLocation { lat, lon }),
        (_, _, Some(place)) => LocationInput::Place(place),
        _ => anyhow::bail!("A location is required: use --location or --lat/--lon"),
    };

    let request = ChartRequest {
        kind,
        date: args.date.take(),
        time: args.time.take(),
        timezone: args.timezone.take(),
        location,
        house_system,
    };

    let gazetteer = gazetteer(&config);
    let mut ephemeris = SwissEphemerisAdapter::new(config.ephemeris.path.clone());
    let aspect_settings = AspectSettings::with_orb(config.chart.orb);

    let data = compute_chart(
        &request,
        &gazetteer,
        &gazetteer,
        &mut ephemeris,
        &aspect_settings,
        Utc::now(),
    )?;
    print!("{}", text_report(&data, aspect_settings.orb));

    let mut session = RenderSession::new(data, layout_settings(&config), composer(&config));
    let contents = match args.format {
        OutputFormat::Svg => session.svg(),
        OutputFormat::Json => session.json().context("Failed to serialize chart")?,
    };

    let output = args
        .output
        .unwrap_or_else(|| config.render.output.with_extension(args.format.extension()));
    fs::write(&output, contents).with_context(|| format!("Failed to write {}", output.display()))?;
    println!("\nChart written to {}", output.display());
    Ok(())
}

fn gazetteer(config: &UraniaConfig) -> Gazetteer {
    let places = config
        .places
        .iter()
        .map(|p| Place {
            name: p.name.clone(),
            aliases: p.aliases.clone(),
            lat: p.lat,
            lon: p.lon,
            timezone: p.timezone.clone(),
        })
        .collect();
    Gazetteer::new(places).with_timezone_radius(config.geo.timezone_radius_km)
}

fn layout_settings(config: &UraniaConfig) -> LayoutSettings {
    LayoutSettings {
        overlap_threshold: config.layout.overlap_threshold,
        offset_step: config.layout.offset_step,
        max_attempts: config.layout.max_attempts,
    }
}

fn composer(config: &UraniaConfig) -> ChartComposer {
    let background = Color::from_hex(&config.render.background).unwrap_or_else(|| {
        log::warn!(
            "Invalid render.background '{}'; using white",
            config.render.background
        );
        Color::WHITE
    });
    ChartComposer::with_config(VisualConfig {
        size: config.render.size,
        background_color: background,
        ..VisualConfig::default()
    })
}
