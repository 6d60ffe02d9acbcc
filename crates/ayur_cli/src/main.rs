use ayur_cli::locale_en::EnglishLocale;
use ayur_cli::{build_chart, parse_graha};
use ayur_engine::locale::Localizer;
use ayur_engine::{analyze_graha, analyze_trimurti, assess_longevity, render_longevity_report};
use ayur_vedic_base::{ALL_GRAHAS, Chart, Graha, Rashi, rashi_from_longitude};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ayur", about = "Jyotish dignity, strength, and longevity analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strength score and factor breakdown for one graha (or all)
    Strength {
        /// Graha to analyze; omit to analyze all nine
        graha: Option<String>,
        /// Ascendant sidereal longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Graha position as name=lon[,r]; repeatable
        #[arg(long = "pos")]
        positions: Vec<String>,
    },
    /// TriMurti significators (Rudra, Brahma, Maheshwara)
    Trimurti {
        /// Ascendant sidereal longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Graha position as name=lon[,r]; repeatable
        #[arg(long = "pos")]
        positions: Vec<String>,
    },
    /// Longevity assessment report
    Longevity {
        /// Ascendant sidereal longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Graha position as name=lon[,r]; repeatable
        #[arg(long = "pos")]
        positions: Vec<String>,
    },
}

fn require_chart(asc: f64, positions: &[String]) -> Chart {
    build_chart(asc, positions).unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(1);
    })
}

fn require_graha(s: &str) -> Graha {
    parse_graha(s).unwrap_or_else(|| {
        eprintln!("Invalid graha name: {s}");
        eprintln!("Valid: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu");
        std::process::exit(1);
    })
}

fn print_strength(chart: &Chart, graha: Graha, lagna: Rashi, locale: &EnglishLocale) {
    let analysis = analyze_graha(chart, graha, lagna);
    println!(
        "{}: {:.1} ({})",
        locale.graha(graha),
        analysis.score,
        locale.strength_tier(analysis.tier)
    );
    for factor in &analysis.positives {
        println!("  + {}", locale.strength_factor(factor));
    }
    for factor in &analysis.issues {
        println!("  - {}", locale.strength_factor(factor));
    }
    if analysis.needs_remedy {
        println!("  ! Remedial measures indicated");
    }
}

fn main() {
    let cli = Cli::parse();
    let locale = EnglishLocale;

    match cli.command {
        Commands::Strength {
            graha,
            asc,
            positions,
        } => {
            let chart = require_chart(asc, &positions);
            let lagna = rashi_from_longitude(asc);
            match graha {
                Some(name) => print_strength(&chart, require_graha(&name), lagna, &locale),
                None => {
                    for graha in ALL_GRAHAS {
                        print_strength(&chart, graha, lagna, &locale);
                    }
                }
            }
        }

        Commands::Trimurti { asc, positions } => {
            let chart = require_chart(asc, &positions);
            let lagna = rashi_from_longitude(asc);
            let trimurti = analyze_trimurti(&chart, lagna);

            let rudra_rashi = trimurti
                .rudra
                .rashi
                .map_or_else(|| "not placed".to_string(), |r| locale.rashi(r));
            println!(
                "Rudra: {} in {} (strength {:.2})",
                locale.graha(trimurti.rudra.graha),
                rudra_rashi,
                trimurti.rudra.strength
            );
            match trimurti.secondary_rudra {
                Some(secondary) => {
                    let rashi = secondary
                        .rashi
                        .map_or_else(|| "not placed".to_string(), |r| locale.rashi(r));
                    println!(
                        "Secondary Rudra: {} in {}",
                        locale.graha(secondary.graha),
                        rashi
                    );
                }
                None => println!("Secondary Rudra: none"),
            }
            match trimurti.brahma {
                Some(brahma) => println!(
                    "Brahma: {} in {} (strength {:.2})",
                    locale.graha(brahma.graha),
                    locale.rashi(brahma.rashi),
                    brahma.strength
                ),
                None => println!("Brahma: none"),
            }
            let maheshwara_place = match (trimurti.maheshwara.rashi, trimurti.maheshwara.house) {
                (Some(rashi), Some(house)) => {
                    format!("in {} (house {house})", locale.rashi(rashi))
                }
                _ => "not placed".to_string(),
            };
            println!(
                "Maheshwara: {} {}",
                locale.graha(trimurti.maheshwara.graha),
                maheshwara_place
            );
        }

        Commands::Longevity { asc, positions } => {
            let chart = require_chart(asc, &positions);
            let lagna = rashi_from_longitude(asc);
            let trimurti = analyze_trimurti(&chart, lagna);
            let assessment = assess_longevity(&chart, &trimurti, lagna);
            print!("{}", render_longevity_report(&assessment, &locale));
        }
    }
}
