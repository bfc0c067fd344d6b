use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{error, info};

use optibid_cli::{
    build_valuator,
    commands::{optimal::optimal, valuations::valuations},
    config::{AppConfig, ConfigOverrides, LogLevel, load_or_default},
    dashboard::{self, App},
    format::{format_currency, render_error},
    logging::{self, LogTarget},
};
use optibid_core::BidValuator;

#[derive(Debug, Parser)]
#[command(
    name = "optibid",
    about = "Optimal bid price from historical win rates",
    version
)]
struct Cli {
    /// Path to the configuration file (defaults to ./optibid.toml, then the user config dir)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSV file with `bid_price` and `win_rate` columns
    #[arg(long, env = "OPTIBID_DATA", value_name = "FILE")]
    data: Option<PathBuf>,

    /// Log verbosity, overrides the config file
    #[arg(long, value_enum, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the optimal bid price for an advertiser pay
    Optimal(PayArgs),

    /// Print the expected payoff of every bid price for an advertiser pay
    Valuations(ValuationArgs),

    /// Interactive terminal dashboard
    Dashboard,
}

#[derive(Debug, Args)]
struct PayArgs {
    /// Amount the advertiser pays when the slot is won
    #[arg(long, value_name = "AMOUNT")]
    advertiser_pay: Option<Decimal>,
}

#[derive(Debug, Args)]
struct ValuationArgs {
    #[command(flatten)]
    pay: PayArgs,

    /// Emit JSON instead of a text table
    #[arg(long)]
    json: bool,
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    let (config, config_path) = match load_or_default(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };
    let config = config.apply(ConfigOverrides {
        data: cli.data,
        log_level: cli.log_level,
    });

    let target = match cli.command {
        Some(Commands::Dashboard) => LogTarget::for_dashboard(config.logging.file.as_deref()),
        _ => LogTarget::Stderr,
    };
    logging::init(config.logging.level, target)?;

    match &config_path {
        Some(path) => info!(path = %path.display(), "loaded config"),
        None => info!("no config file found, using defaults"),
    }

    let valuator = match build_valuator(&config.data.path) {
        Ok(valuator) => valuator,
        Err(err) => {
            error!(error = %err, "failed to load win rate table");
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Optimal(args)) => handle_optimal(&valuator, args),
        Some(Commands::Valuations(args)) => handle_valuations(&valuator, args)?,
        Some(Commands::Dashboard) => {
            dashboard::run(App::new(valuator, config.dashboard.pay_options()))?
        }
        None => print_summary(&config, &valuator),
    }

    Ok(())
}

fn handle_optimal(valuator: &BidValuator, args: PayArgs) {
    match optimal(valuator, args.advertiser_pay) {
        Ok(bid) => println!("{}", format_currency(bid.bid_price.as_decimal())),
        Err(err) => {
            eprintln!("{}", render_error(&err));
            std::process::exit(1);
        }
    }
}

fn handle_valuations(valuator: &BidValuator, args: ValuationArgs) -> eyre::Result<()> {
    let report = match valuations(valuator, args.pay.advertiser_pay) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{}", render_error(&err));
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

fn print_summary(config: &AppConfig, valuator: &BidValuator) {
    let options = config.dashboard.pay_options();
    println!(
        "Loaded {} bid prices from {}",
        valuator.table().len(),
        config.data.path.display()
    );
    if let (Some(first), Some(last)) = (options.first(), options.last()) {
        println!(
            "{} advertiser pay options from {} to {}",
            options.len(),
            format_currency(*first),
            format_currency(*last)
        );
    }
}
