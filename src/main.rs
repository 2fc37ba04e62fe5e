use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use meal_planning::{
    BudgetAwareStrategy, GroceryService, MealPlanStrategy, MealPlannerService, MealType,
    PantryFirstStrategy, RandomStrategy,
};
use mealplanner::io::{load_catalog, load_pantry, save_catalog};
use mealplanner::pantry_spec::parse_pantry_spec;
use mealplanner::render::{render_text, write_csv};
use recipe::RecipeCatalog;
use shopping::{Pantry, PriceBook};

/// mealplanner - meal planning and shopping list generation
#[derive(Parser)]
#[command(name = "mealplanner")]
#[command(about = "Plan meals, aggregate ingredients, build shopping lists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a meal plan and print its shopping list
    Plan {
        /// Number of days to plan
        #[arg(long, default_value_t = 2)]
        days: u32,

        /// Comma-separated meal types: breakfast,lunch,dinner
        #[arg(long, default_value = "lunch,dinner")]
        meals: String,

        /// Random seed for reproducible plans
        #[arg(long, default_value_t = 7)]
        seed: u64,

        /// Planning strategy
        #[arg(long, value_enum, default_value_t = StrategyKind::Random)]
        strategy: StrategyKind,

        /// Total budget; required by the budget-aware strategy
        #[arg(long)]
        budget: Option<f64>,

        /// Existing stock, e.g. "milk=200:ML,egg=1:PCS"
        #[arg(long, conflicts_with = "pantry_file")]
        pantry: Option<String>,

        /// Load the pantry from a JSON file instead of a spec string
        #[arg(long)]
        pantry_file: Option<PathBuf>,

        /// Load the recipe catalog from a JSON file instead of the samples
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Also export the shopping list as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Write the built-in sample catalog as JSON
    ExportCatalog {
        /// Output path
        #[arg(long, default_value = "catalog.json")]
        out: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyKind {
    /// Uniformly random pick per slot
    Random,
    /// Prefer recipes covered by current pantry stock
    PantryFirst,
    /// Prefer expensive recipes that still fit the budget
    BudgetAware,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    mealplanner::observability::init_observability("info")?;

    match cli.command {
        Commands::Plan {
            days,
            meals,
            seed,
            strategy,
            budget,
            pantry,
            pantry_file,
            catalog,
            csv,
        } => plan_command(
            days,
            &meals,
            seed,
            strategy,
            budget,
            pantry.as_deref(),
            pantry_file.as_deref(),
            catalog.as_deref(),
            csv.as_deref(),
        ),
        Commands::ExportCatalog { out } => export_catalog_command(&out),
    }
}

#[tracing::instrument(skip_all)]
#[allow(clippy::too_many_arguments)]
fn plan_command(
    days: u32,
    meals: &str,
    seed: u64,
    strategy: StrategyKind,
    budget: Option<f64>,
    pantry_spec: Option<&str>,
    pantry_file: Option<&std::path::Path>,
    catalog_path: Option<&std::path::Path>,
    csv: Option<&std::path::Path>,
) -> Result<()> {
    let meal_types = parse_meals(meals)?;

    let catalog = match catalog_path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => RecipeCatalog::samples(),
    };

    let pantry = match (pantry_spec, pantry_file) {
        (Some(spec), _) => Some(parse_pantry_spec(spec)?),
        (None, Some(path)) => Some(
            load_pantry(path).with_context(|| format!("loading pantry from {}", path.display()))?,
        ),
        (None, None) => None,
    };

    let strategy: Box<dyn MealPlanStrategy> = match strategy {
        StrategyKind::Random => Box::new(RandomStrategy::new(seed)),
        StrategyKind::PantryFirst => {
            let snapshot = pantry.clone().unwrap_or_default();
            Box::new(PantryFirstStrategy::new(&snapshot))
        }
        StrategyKind::BudgetAware => {
            let budget = budget.context("--budget is required with --strategy budget-aware")?;
            Box::new(BudgetAwareStrategy::new(PriceBook::samples(), budget)?)
        }
    };

    let service = MealPlannerService::new(&catalog, strategy)?;
    let plan = service.plan(days, &meal_types)?;
    tracing::info!(slots = plan.len(), days, "meal plan generated");

    let grocery = GroceryService::new();
    let list = match &pantry {
        Some(pantry) => grocery.build_from_with_pantry(&plan, pantry),
        None => grocery.build_from(&plan),
    };
    tracing::info!(items = list.len(), "shopping list built");

    print!("{}", render_text(&list));

    if let Some(path) = csv {
        write_csv(&list, path).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "csv exported");
    }

    Ok(())
}

#[tracing::instrument(skip_all)]
fn export_catalog_command(out: &std::path::Path) -> Result<()> {
    save_catalog(&RecipeCatalog::samples(), out)
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(path = %out.display(), "sample catalog exported");
    Ok(())
}

/// Parses a comma-separated meal-type list; tokens are case-insensitive.
fn parse_meals(csv: &str) -> Result<Vec<MealType>> {
    let mut meal_types = Vec::new();
    for token in csv.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let meal_type = token
            .parse::<MealType>()
            .map_err(|_| anyhow::anyhow!("unknown meal type: {token} (use breakfast,lunch,dinner)"))?;
        meal_types.push(meal_type);
    }
    if meal_types.is_empty() {
        bail!("--meals must not be empty");
    }
    Ok(meal_types)
}
