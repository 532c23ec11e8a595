use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;
use std::time::Duration;

use recipe_generator::{
    save_recipe, Cuisine, ExtractionStrategy, MealType, Recipe, RecipeGenerator, RecipeRequest,
};

#[derive(Parser, Debug)]
#[command(
    name = "recipe-generator",
    version,
    about = "Generate recipes with Google Gemini"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Gemini model to use (overrides config)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// How to find the JSON in the model reply: greedy or balanced
    #[arg(long, global = true)]
    strategy: Option<ExtractionStrategy>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a random recipe for a meal type and cuisine
    Random {
        /// breakfast, lunch or dinner
        #[arg(short, long, default_value = "")]
        meal: String,

        /// One of the supported cuisines (see `cuisines`)
        #[arg(short, long, default_value = "")]
        cuisine: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate a recipe for a named dish
    Search {
        /// Name of the dish
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List supported meal types and cuisines
    Cuisines,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Print the recipe as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Also save the recipe as a .txt file in this directory
    #[arg(long)]
    save: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let (request, output) = match cli.command {
        Commands::Cuisines => {
            let meals: Vec<&str> = MealType::ALL.iter().map(|m| m.as_str()).collect();
            println!("Meal types: {}", meals.join(", "));
            println!("Cuisines:");
            for cuisine in Cuisine::ALL {
                println!("  {}", cuisine);
            }
            return Ok(());
        }
        Commands::Random {
            meal,
            cuisine,
            output,
        } => (RecipeRequest::random_from(&meal, &cuisine), output),
        Commands::Search { name, output } => (RecipeRequest::search(name.join(" ")), output),
    };

    let request = request.map_err(|e| {
        error!("{}", e);
        e
    })?;

    let mut builder = RecipeGenerator::builder();
    if let Some(model) = cli.model {
        builder = builder.model(model);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(strategy) = cli.strategy {
        builder = builder.strategy(strategy);
    }
    let generator = builder.build()?;

    info!("Requesting a recipe for {}", request);
    let recipe = generator.generate(&request).await.map_err(|e| {
        error!("Failed to generate recipe: {}", e);
        e
    })?;

    print_recipe(&recipe, output.json)?;

    if let Some(dir) = output.save {
        let path = save_recipe(&recipe, &dir).await?;
        eprintln!("Saved to {}", path.display());
    }

    Ok(())
}

fn print_recipe(recipe: &Recipe, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(recipe)?);
    } else {
        println!("{}", recipe);
    }
    Ok(())
}
