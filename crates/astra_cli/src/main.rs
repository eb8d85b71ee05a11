use clap::{Parser, Subcommand};

use astra_core::{BirthData, NatalChart, calculate_natal_chart, positions_at, sign_position};
use astra_time::{CalendarDate, ClockTime, julian_day};

#[derive(Parser)]
#[command(name = "astra", about = "Natal-chart engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a full natal chart
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time, 24h (HH:MM)
        #[arg(long)]
        time: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Timezone label (carried, not resolved)
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Emit the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Body positions at an arbitrary instant
    Transits {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time, 24h (HH:MM)
        #[arg(long)]
        time: String,
        /// Emit the positions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Julian Day for a date and time
    Jd {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time, 24h (HH:MM)
        #[arg(long)]
        time: String,
    },
    /// Zodiac decomposition of an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// SVG path data for a chart's wheel (sectors, house spokes, aspect chords)
    Wheel {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time, 24h (HH:MM)
        #[arg(long)]
        time: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
    },
}

fn parse_instant(date: &str, time: &str) -> (CalendarDate, ClockTime) {
    let date = CalendarDate::parse(date).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    let time = ClockTime::parse(time).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    (date, time)
}

fn print_chart(chart: &NatalChart) {
    println!("Ascendant: {:8.4} deg  {}", chart.ascendant_deg, sign_position(chart.ascendant_deg));
    println!("Midheaven: {:8.4} deg  {}", chart.midheaven_deg, sign_position(chart.midheaven_deg));

    println!("\nPlanets:");
    for p in &chart.planets {
        let retro = if p.longitude_speed < 0.0 { " R" } else { "" };
        println!(
            "  {} {:<10} {:8.4} deg  {}\u{b0}{:02}\u{2032} {:<11} house {:>2}{retro}",
            p.body.symbol(),
            p.body.name(),
            p.longitude_deg,
            p.degree,
            p.minute,
            p.sign.name(),
            p.house.unwrap_or(1),
        );
    }

    println!("\nHouses:");
    for h in &chart.houses {
        println!(
            "  {:>2}  {:8.4} deg  {}",
            h.number,
            h.cusp_deg,
            h.sign.name()
        );
    }

    println!("\nAspects:");
    for a in &chart.aspects {
        let phase = if a.applying { "applying" } else { "separating" };
        println!(
            "  {:<10} {} {:<11} {:<10} orb {:>5.2} deg ({phase})",
            a.body1.name(),
            a.kind.symbol(),
            a.body2.name(),
            a.kind.name(),
            a.orb_deg,
        );
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            date,
            time,
            lat,
            lon,
            timezone,
            json,
        } => {
            let (date, _) = parse_instant(&date, &time);
            let birth = BirthData {
                date,
                time,
                latitude_deg: lat,
                longitude_deg: lon,
                timezone,
            };
            let chart = match calculate_natal_chart(&birth) {
                Ok(chart) => chart,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&chart).expect("chart serializes"));
            } else {
                print_chart(&chart);
            }
        }

        Commands::Transits { date, time, json } => {
            let (date, time) = parse_instant(&date, &time);
            let positions = positions_at(julian_day(date, time));
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&positions).expect("positions serialize")
                );
            } else {
                for p in &positions {
                    let retro = if p.longitude_speed < 0.0 { " R" } else { "" };
                    println!(
                        "  {} {:<10} {:8.4} deg  {}\u{b0}{:02}\u{2032} {}{retro}",
                        p.body.symbol(),
                        p.body.name(),
                        p.longitude_deg,
                        p.degree,
                        p.minute,
                        p.sign.name(),
                    );
                }
            }
        }

        Commands::Jd { date, time } => {
            let (date, time) = parse_instant(&date, &time);
            println!("{:.6}", julian_day(date, time));
        }

        Commands::Sign { lon } => {
            let p = sign_position(lon);
            println!(
                "{} {} - {} deg {} min ({:.4} deg)",
                p.sign.symbol(),
                p.sign.name(),
                p.degree,
                p.minute,
                lon.rem_euclid(360.0)
            );
        }

        Commands::Wheel {
            date,
            time,
            lat,
            lon,
        } => {
            let (date, _) = parse_instant(&date, &time);
            let birth = BirthData {
                date,
                time,
                latitude_deg: lat,
                longitude_deg: lon,
                timezone: "UTC".to_string(),
            };
            let chart = match calculate_natal_chart(&birth) {
                Ok(chart) => chart,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            print_wheel(&chart);
        }
    }
}

fn print_wheel(chart: &NatalChart) {
    use astra_core::ALL_SIGNS;
    use astra_wheel::{
        CHART_RADIUS, HOUSE_RADIUS, INNER_RADIUS, OUTER_RADIUS, PLANET_RADIUS, chart_angle_deg,
        chord_path, radial_line_path, sector_path,
    };

    // Sign sectors run clockwise on screen; keep the raw (unnormalized)
    // angles so each sector's span stays a plain 30 degrees for the arc flag.
    println!("Zodiac sectors:");
    for sign in ALL_SIGNS {
        let start = 270.0 - 30.0 * (sign.index() + 1) as f64;
        let end = 270.0 - 30.0 * sign.index() as f64;
        println!(
            "  {:<11} {}",
            sign.name(),
            sector_path(start, end, INNER_RADIUS, OUTER_RADIUS, 0.0, 0.0)
        );
    }

    println!("\nHouse spokes:");
    for h in &chart.houses {
        println!(
            "  {:>2}  {}",
            h.number,
            radial_line_path(chart_angle_deg(h.cusp_deg), HOUSE_RADIUS, CHART_RADIUS, 0.0, 0.0)
        );
    }

    println!("\nAspect chords:");
    for a in &chart.aspects {
        let lon1 = chart.planets[a.body1.index() as usize].longitude_deg;
        let lon2 = chart.planets[a.body2.index() as usize].longitude_deg;
        println!(
            "  {:<10} {:<10} {}",
            a.body1.name(),
            a.body2.name(),
            chord_path(
                chart_angle_deg(lon1),
                chart_angle_deg(lon2),
                PLANET_RADIUS,
                0.0,
                0.0
            )
        );
    }
}
