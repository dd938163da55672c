use clap::{Parser, Subcommand};
use drik_ayanamsa::{AyanamsaMethod, ayanamsa_deg};
use drik_time::CalendarTime;

#[derive(Parser)]
#[command(name = "drik", about = "Drik ayanamsa CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ayanamsa for a date and method
    Ayanamsa {
        /// Calendar date-time (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        date: String,
        /// Method: Lahiri, Fagan-Bradley, Krishnamurti, Raman
        #[arg(long, default_value = "Lahiri")]
        method: String,
    },
    /// Ayanamsa table for all four methods
    Table {
        /// Calendar date-time (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss)
        #[arg(long, default_value = "2024-11-30")]
        date: String,
    },
    /// List recognized methods and their reference epochs
    Methods,
}

fn parse_calendar(s: &str) -> Result<CalendarTime, String> {
    // Parse "YYYY-MM-DD" or "YYYY-MM-DDThh:mm:ss", optional trailing Z
    let s = s.trim_end_matches('Z');
    let (date_str, time_str) = match s.split_once('T') {
        Some((d, t)) => (d, Some(t)),
        None => (s, None),
    };
    let date_parts: Vec<&str> = date_str.split('-').collect();
    if date_parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD[Thh:mm:ss], got {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let (hour, minute, second) = match time_str {
        Some(t) => {
            let time_parts: Vec<&str> = t.split(':').collect();
            if time_parts.len() != 3 {
                return Err(format!("invalid time format: {t}"));
            }
            let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
            let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
            let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
            (hour, minute, second)
        }
        None => (0, 0, 0.0),
    };
    CalendarTime::new(year, month, day, hour, minute, second).map_err(|e| format!("{e}"))
}

fn require_calendar(s: &str) -> CalendarTime {
    parse_calendar(s).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn require_method(s: &str) -> AyanamsaMethod {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ayanamsa { date, method } => {
            let time = require_calendar(&date);
            let method = require_method(&method);
            println!("{method}: {}°", ayanamsa_deg(method, &time));
        }

        Commands::Table { date } => {
            let time = require_calendar(&date);
            println!(
                "Ayanamsa values for {:04}-{:02}-{:02}:",
                time.year, time.month, time.day
            );
            for &method in AyanamsaMethod::all() {
                println!("{method}: {}°", ayanamsa_deg(method, &time));
            }
        }

        Commands::Methods => {
            for &method in AyanamsaMethod::all() {
                println!("{method} (epoch {:04}-01-01)", method.epoch_year());
            }
        }
    }
}
