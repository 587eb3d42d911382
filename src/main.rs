use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use latlon::codec;
use latlon::config::{FileConfig, OutputFormat};
use latlon::geometry::{Point, Polygon};

/// Great-circle math and point-in-polygon tests for lat/lon coordinates
///
/// Examples:
///   # Distance between Seattle and San Francisco airports
///   latlon distance 47.4489,-122.3094 37.6160933,-122.3924223
///
///   # Where does 1090.7km due south end up?
///   latlon destination 47.4474,-122.3080 --distance-km 1090.7 --bearing 180
///
///   # Is a point inside a polygon loaded from a JSON file?
///   latlon contains --polygon city_limits.json 47.6062,-122.3321
#[derive(Parser, Debug)]
#[command(name = "latlon")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches latlon.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format (defaults to plain)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Decimal places for plain output (defaults to 6)
    #[arg(long)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Great-circle distance between two points, in kilometers
    Distance {
        /// Start point as LAT,LON in decimal degrees
        #[arg(allow_hyphen_values = true)]
        from: String,
        /// End point as LAT,LON
        #[arg(allow_hyphen_values = true)]
        to: String,
    },
    /// Initial bearing from one point toward another, in degrees
    Bearing {
        #[arg(allow_hyphen_values = true)]
        from: String,
        #[arg(allow_hyphen_values = true)]
        to: String,
    },
    /// Great-circle midpoint of two points
    Midpoint {
        #[arg(allow_hyphen_values = true)]
        from: String,
        #[arg(allow_hyphen_values = true)]
        to: String,
    },
    /// Destination reached from a point by distance and bearing
    Destination {
        #[arg(allow_hyphen_values = true)]
        from: String,
        /// Distance to travel in kilometers
        #[arg(long)]
        distance_km: f64,
        /// Initial compass bearing in degrees (0 = north, clockwise)
        #[arg(long, allow_hyphen_values = true)]
        bearing: f64,
    },
    /// Test whether a polygon contains a point
    Contains {
        /// JSON file holding the polygon vertices as an array of
        /// {"lat":..,"lon":..} objects, in loop order
        #[arg(long)]
        polygon: PathBuf,
        /// Query point as LAT,LON
        #[arg(allow_hyphen_values = true)]
        point: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let format = args
        .format
        .or_else(|| file_config.as_ref().and_then(|c| c.format))
        .unwrap_or(OutputFormat::Plain);
    let precision = args
        .precision
        .or_else(|| file_config.as_ref().and_then(|c| c.precision))
        .unwrap_or(6);

    match args.command {
        Command::Distance { from, to } => {
            let from = parse_point(&from)?;
            let to = parse_point(&to)?;
            print_scalar(from.distance_km(&to), format, precision);
        }
        Command::Bearing { from, to } => {
            let from = parse_point(&from)?;
            let to = parse_point(&to)?;
            print_scalar(from.bearing_to(&to), format, precision);
        }
        Command::Midpoint { from, to } => {
            let from = parse_point(&from)?;
            let to = parse_point(&to)?;
            print_point(&from.midpoint(&to), format, precision)?;
        }
        Command::Destination {
            from,
            distance_km,
            bearing,
        } => {
            let from = parse_point(&from)?;
            print_point(&from.destination(distance_km, bearing), format, precision)?;
        }
        Command::Contains { polygon, point } => {
            let polygon = load_polygon(&polygon)?;
            let point = parse_point(&point)?;
            println!("{}", polygon.contains(&point));
        }
    }

    Ok(())
}

/// Parse a LAT,LON command-line argument into a point.
fn parse_point(arg: &str) -> Result<Point> {
    let (lat, lon) = arg
        .split_once(',')
        .with_context(|| format!("Expected LAT,LON, got: {}", arg))?;

    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("Invalid latitude: {}", lat))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .with_context(|| format!("Invalid longitude: {}", lon))?;

    Ok(Point::new(lat, lon))
}

/// Read polygon vertices from a JSON file.
fn load_polygon(path: &Path) -> Result<Polygon> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read polygon file: {}", path.display()))?;

    let points: Vec<Point> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse polygon file: {}", path.display()))?;

    Ok(Polygon::new(points))
}

fn print_scalar(value: f64, format: OutputFormat, precision: usize) {
    match format {
        OutputFormat::Plain => println!("{:.*}", precision, value),
        OutputFormat::Json => println!("{}", value),
    }
}

fn print_point(point: &Point, format: OutputFormat, precision: usize) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            println!("{:.*},{:.*}", precision, point.lat, precision, point.lon)
        }
        OutputFormat::Json => println!("{}", codec::json::to_json(point)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_parse_point() {
        let p = parse_point("47.4489,-122.3094").unwrap();
        assert_eq!(p.lat, 47.4489);
        assert_eq!(p.lon, -122.3094);

        // Whitespace around the comma is tolerated
        let p = parse_point("-33.8688, 151.2093").unwrap();
        assert_eq!(p.lat, -33.8688);
        assert_eq!(p.lon, 151.2093);
    }

    #[test]
    fn test_parse_point_rejects_garbage() {
        assert!(parse_point("no comma here").is_err());
        assert!(parse_point("47.44,north").is_err());
        assert!(parse_point("abc,-122.3").is_err());
    }

    #[test]
    fn test_load_polygon() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"lat":0.0,"lon":0.0}},{{"lat":0.0,"lon":10.0}},{{"lat":10.0,"lon":10.0}},{{"lat":10.0,"lon":0.0}}]"#
        )
        .unwrap();

        let polygon = load_polygon(file.path()).unwrap();
        assert!(polygon.is_closed());
        assert!(polygon.contains(&Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_load_polygon_missing_file() {
        assert!(load_polygon(Path::new("/nonexistent/polygon.json")).is_err());
    }
}
