use clap::{Args, Parser, Subcommand};
use porondam_base::{
    ALL_NAKSHATRAS, ALL_RASHIS, Rashi, RashiPart, nakshatra_from_longitude,
    nakshatra_from_rashi, rajju_of, rashi_from_longitude,
};
use porondam_match::{
    ChartAttributes, Gender, MatchConfig, MatchReport, RolePolicy, ScoringDate,
    compute_match_with,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "porondam", about = "Porondam marriage compatibility CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Nakshatra and pada from sidereal lunar longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Rashi from sidereal lunar longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Approximate nakshatra when only the rashi is known
    FromRashi {
        /// Rashi id (1-12)
        rashi: u8,
        /// Part of the rashi: start, middle (default) or end
        #[arg(long, default_value = "middle")]
        part: String,
    },
    /// List the nakshatra and rashi catalog
    Catalog,
    /// Score two charts
    Match {
        #[command(flatten)]
        first: ChartArgs1,
        #[command(flatten)]
        second: ChartArgs2,
        /// Treat the first chart as the bride regardless of gender
        #[arg(long)]
        as_given: bool,
        /// Scoring date label (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Also print Sinhala texts
        #[arg(long)]
        sinhala: bool,
    },
}

#[derive(Args)]
struct ChartArgs1 {
    /// First chart: nakshatra id (1-27)
    #[arg(long)]
    nakshatra1: Option<u8>,
    /// First chart: rashi id (1-12)
    #[arg(long)]
    rashi1: Option<u8>,
    /// First chart: pada (1-4)
    #[arg(long)]
    pada1: Option<u8>,
    /// First chart: sidereal moon longitude, instead of ids
    #[arg(long, allow_negative_numbers = true)]
    lon1: Option<f64>,
    /// First chart: male or female
    #[arg(long)]
    gender1: String,
}

#[derive(Args)]
struct ChartArgs2 {
    /// Second chart: nakshatra id (1-27)
    #[arg(long)]
    nakshatra2: Option<u8>,
    /// Second chart: rashi id (1-12)
    #[arg(long)]
    rashi2: Option<u8>,
    /// Second chart: pada (1-4)
    #[arg(long)]
    pada2: Option<u8>,
    /// Second chart: sidereal moon longitude, instead of ids
    #[arg(long, allow_negative_numbers = true)]
    lon2: Option<f64>,
    /// Second chart: male or female
    #[arg(long)]
    gender2: String,
}

/// Raw chart flags, independent of which chart they came from.
struct ChartFlags<'a> {
    label: &'static str,
    nakshatra: Option<u8>,
    rashi: Option<u8>,
    pada: Option<u8>,
    lon: Option<f64>,
    gender: &'a str,
}

impl ChartArgs1 {
    fn flags(&self) -> ChartFlags<'_> {
        ChartFlags {
            label: "first",
            nakshatra: self.nakshatra1,
            rashi: self.rashi1,
            pada: self.pada1,
            lon: self.lon1,
            gender: &self.gender1,
        }
    }
}

impl ChartArgs2 {
    fn flags(&self) -> ChartFlags<'_> {
        ChartFlags {
            label: "second",
            nakshatra: self.nakshatra2,
            rashi: self.rashi2,
            pada: self.pada2,
            lon: self.lon2,
            gender: &self.gender2,
        }
    }
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    match s.to_ascii_lowercase().as_str() {
        "male" | "m" => Ok(Gender::Male),
        "female" | "f" => Ok(Gender::Female),
        _ => Err(format!("Invalid gender: {s} (male or female)")),
    }
}

fn parse_rashi_part(s: &str) -> Result<RashiPart, String> {
    match s.to_ascii_lowercase().as_str() {
        "start" => Ok(RashiPart::Start),
        "middle" => Ok(RashiPart::Middle),
        "end" => Ok(RashiPart::End),
        _ => Err(format!("Invalid rashi part: {s} (start, middle or end)")),
    }
}

fn chart_from_flags(flags: &ChartFlags<'_>) -> Result<ChartAttributes, String> {
    let gender = parse_gender(flags.gender)?;
    if let Some(lon) = flags.lon {
        return Ok(ChartAttributes::from_longitude(lon, gender));
    }
    let rashi_id = flags
        .rashi
        .ok_or_else(|| format!("{} chart: give --lon or --rashi", flags.label))?;
    let nakshatra_id = match flags.nakshatra {
        Some(id) => id,
        None => {
            let rashi = Rashi::from_id(rashi_id).map_err(|e| format!("{} chart: {e}", flags.label))?;
            let nakshatra = nakshatra_from_rashi(rashi, RashiPart::Middle);
            tracing::warn!(
                chart = flags.label,
                rashi = rashi.name(),
                nakshatra = nakshatra.name(),
                "nakshatra not given, approximated from rashi"
            );
            nakshatra.id()
        }
    };
    let chart = ChartAttributes::new(nakshatra_id, rashi_id, gender);
    Ok(match flags.pada {
        Some(p) => chart.with_pada(p),
        None => chart,
    })
}

fn require<T>(r: Result<T, String>) -> T {
    r.unwrap_or_else(|msg| {
        eprintln!("{msg}");
        std::process::exit(1);
    })
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_report(report: &MatchReport, sinhala: bool) {
    for (label, c) in [("First", &report.first), ("Second", &report.second)] {
        let pada = c.pada.map(|p| format!(" pada {p}")).unwrap_or_default();
        println!(
            "{label:<7} {} ({}){pada}, {} - {}, {:?}",
            c.nakshatra,
            c.nakshatra_id,
            c.rashi,
            c.gender.name(),
            c.role
        );
    }
    if let Some(date) = report.scored_on {
        println!("Scored on {date}");
    }
    println!();
    for s in &report.scores {
        let mark = if s.favorable { "+" } else { "-" };
        println!(
            "{mark} {:<28} {}/{}  {}",
            s.name, s.score, s.max_points, s.description.english
        );
        if sinhala {
            println!("  {:<28}       {}", s.name_sinhala, s.description.sinhala);
        }
    }
    println!();
    let tier = report.compatibility.label();
    println!(
        "Overall: {}% ({}), {} of {} aspects favorable",
        report.overall_score, tier.english, report.matched_count, report.total_aspects
    );
    let weak: Vec<&str> = report.unfavorable().map(|s| s.name).collect();
    if !weak.is_empty() {
        println!("Unfavorable: {}", weak.join(", "));
    }
    println!("{}", report.recommendation.english);
    if sinhala {
        println!("{} - {}", tier.sinhala, report.recommendation.sinhala);
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} ({}, id {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                info.nakshatra.name(),
                info.nakshatra.sinhala_name(),
                info.nakshatra.id(),
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada
            );
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}, id {}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.rashi.id(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::FromRashi { rashi, part } => {
            let part = require(parse_rashi_part(&part));
            let rashi = require(Rashi::from_id(rashi).map_err(|e| e.to_string()));
            let n = nakshatra_from_rashi(rashi, part);
            println!("{} -> {} (id {})", rashi.name(), n.name(), n.id());
        }

        Commands::Catalog => {
            println!("Nakshatras:");
            for n in ALL_NAKSHATRAS {
                let rec = n.record();
                println!(
                    "  {:>2} {:<18} {:<12} lord {:<7} {:<9} {:<9} {:<6} {}",
                    rec.id,
                    rec.name,
                    rec.sinhala,
                    rec.lord.english_name(),
                    rec.gana.name(),
                    rec.yoni.name(),
                    rec.nadi.name(),
                    rajju_of(n).name()
                );
            }
            println!("Rashis:");
            for r in ALL_RASHIS {
                println!(
                    "  {:>2} {:<11} {:<12} {:<8} lord {}",
                    r.id(),
                    r.name(),
                    r.western_name(),
                    r.sinhala_name(),
                    r.lord().english_name()
                );
            }
        }

        Commands::Match {
            first,
            second,
            as_given,
            date,
            json,
            sinhala,
        } => {
            let a = require(chart_from_flags(&first.flags()));
            let b = require(chart_from_flags(&second.flags()));
            let scored_on = date.map(|d| require(d.parse::<ScoringDate>().map_err(|e| e.to_string())));
            let config = MatchConfig {
                roles: if as_given {
                    RolePolicy::AsGiven
                } else {
                    RolePolicy::ByGender
                },
                scored_on,
            };
            let report = require(compute_match_with(&a, &b, &config).map_err(|e| e.to_string()));
            if json {
                let text = require(serde_json::to_string_pretty(&report).map_err(|e| e.to_string()));
                println!("{text}");
            } else {
                print_report(&report, sinhala);
            }
        }
    }
}
