use anyhow::{Context, Result};
use cami::report::Report;
use cami::{
    canonicalize, levenshtein, require_input, Config, DuplicatePolicy, Health, Matcher,
    QueryResult, Store, Sustainability,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{print_not_found, print_verdict, record_row, row, section_bot, section_top};
use cli::{Cli, Commands, DataArgs};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check {
            ingredients,
            data,
            max_distance,
            max_suggestions,
            verbose,
            json,
        } => {
            let mut config = load_config(&data)?;
            if let Some(max_distance) = max_distance {
                config.matcher.max_distance = max_distance;
            }
            if let Some(max_suggestions) = max_suggestions {
                config.matcher.max_suggestions = max_suggestions;
            }
            config.matcher.validate()?;
            run_check(&ingredients, &data, &config, verbose, json)
        }
        Commands::List { data } => {
            let config = load_config(&data)?;
            run_list(&data, &config)
        }
        Commands::Validate {
            file,
            reject_duplicates,
        } => run_validate(&file, reject_duplicates),
        Commands::Distance { a, b } => {
            println!("{}", levenshtein(&canonicalize(&a), &canonicalize(&b)));
            Ok(())
        }
    }
}

fn load_config(data: &DataArgs) -> Result<Config> {
    match &data.config {
        Some(path) => {
            Config::from_path(path).with_context(|| format!("Failed to load config {}", path))
        }
        None => Ok(Config::default()),
    }
}

fn load_store(data: &DataArgs, policy: DuplicatePolicy) -> Result<Store> {
    match &data.data {
        Some(path) => Store::from_path(path, policy)
            .with_context(|| format!("Failed to load ingredient data {}", path)),
        None => Store::embedded().context("Bundled ingredient data is malformed"),
    }
}

fn run_check(
    ingredients: &[String],
    data: &DataArgs,
    config: &Config,
    verbose: bool,
    json: bool,
) -> Result<()> {
    // Reject blank names before touching the dictionary
    for raw in ingredients {
        require_input(raw).with_context(|| format!("Invalid input {:?}", raw))?;
    }

    let store = load_store(data, config.duplicates)?;
    let matcher = Matcher::with_config(&store, config.matcher);

    for (i, raw) in ingredients.iter().enumerate() {
        let result = matcher.query(raw);

        if json {
            let line = serde_json::to_string(&Report::new(raw, &result))?;
            println!("{}", line);
            continue;
        }

        if i > 0 {
            println!();
        }
        match &result {
            QueryResult::Found(verdict) => print_verdict(verdict),
            QueryResult::NotFound(suggestions) => {
                let ranked = verbose.then(|| matcher.suggest(&canonicalize(raw)));
                print_not_found(raw, suggestions, ranked.as_deref());
            }
        }
    }
    Ok(())
}

fn run_list(data: &DataArgs, config: &Config) -> Result<()> {
    let store = load_store(data, config.duplicates)?;

    section_top(&format!("{} ingredients", store.len()));
    for record in store.all() {
        row(&record_row(record));
    }
    section_bot();
    Ok(())
}

fn run_validate(file: &str, reject_duplicates: bool) -> Result<()> {
    let policy = if reject_duplicates {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::LastWins
    };
    let store =
        Store::from_path(file, policy).with_context(|| format!("{} is not valid", file))?;

    section_top(file);
    row(&format!(" ✓ {} ingredients", store.len()));
    for health in Health::ALL {
        let count = store.all().filter(|r| r.health == health).count();
        row(&format!("   health {:<16} {:>4}", health.as_str(), count));
    }
    for level in Sustainability::ALL {
        let count = store.all().filter(|r| r.sustainability == level).count();
        row(&format!("   sustainability {:<14} {:>4}", level.as_str(), count));
    }
    let without_emoji = store.all().filter(|r| r.emoji.is_none()).count();
    row(&format!("   without emoji {:>20}", without_emoji));
    section_bot();
    Ok(())
}
