use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use urania::ChartKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartType {
    /// Birth or event chart for a given date and time.
    Natal,
    /// Chart for the moment the question is asked.
    Horary,
}

impl From<ChartType> for ChartKind {
    fn from(t: ChartType) -> Self {
        match t {
            ChartType::Natal => ChartKind::Natal,
            ChartType::Horary => ChartKind::Horary,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    /// Declarative shape list, for other renderers.
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute and draw natal and horary charts")]
pub struct Args {
    /// Date as YYYY-MM-DD (natal charts).
    #[arg(long)]
    pub date: Option<String>,

    /// Local time as HH:MM, 24-hour (natal charts).
    #[arg(long)]
    pub time: Option<String>,

    /// IANA timezone, e.g. America/Sao_Paulo. Overrides the zone found for the location.
    #[arg(long)]
    pub timezone: Option<String>,

    /// Place name looked up in the configured gazetteer, e.g. "São Paulo, Brazil".
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub location: Option<String>,

    /// Latitude in decimal degrees, north positive.
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees, east positive.
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// House system (placidus, regiomontanus, koch, equal, whole-sign, campanus).
    #[arg(long)]
    pub house_system: Option<String>,

    /// Chart type; defaults to `chart.chart_type` from the config.
    #[arg(long, value_enum)]
    pub chart_type: Option<ChartType>,

    /// Output file (default: `render.output` from the config, with the format's extension).
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Config file (default: configs/urania.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fail instead of prompting for missing inputs.
    #[arg(long)]
    pub no_prompt: bool,
}
