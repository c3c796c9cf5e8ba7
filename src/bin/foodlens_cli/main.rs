// ABOUTME: FoodLens CLI - command-line consumer of the FoodLens client library
// ABOUTME: Exercises login, registration, browsing, analysis, profile, and local-store operations
//!
//! Usage:
//! ```bash
//! # Log in against the remote backend
//! foodlens-cli login --mobile 9990001111 --password secret
//!
//! # Browse a category and analyze a product
//! foodlens-cli category Beverages
//! foodlens-cli analyze "Cola Zero"
//!
//! # Analyze a photo
//! foodlens-cli analyze-image ./label.jpg
//!
//! # Show or update the remote profile
//! foodlens-cli profile show
//! foodlens-cli profile update --age 29 --allergies peanuts
//!
//! # Local (legacy) credential store
//! foodlens-cli local register --name Asha --email asha@example.com \
//!     --mobile 9990001111 --password secret
//! foodlens-cli local login --mobile 9990001111 --password secret
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use foodlens_client::models::{NewUser, RegisterRequest, UpdateProfileRequest};
use foodlens_client::{ApiGateway, ClientConfig, Database, Language, SessionStore};

#[derive(Parser)]
#[command(
    name = "foodlens-cli",
    about = "FoodLens nutrition analysis client",
    long_about = "Command-line client for the FoodLens backend: authentication, product analysis, profile management, and the local credential store."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show session state (the start-screen decision)
    Status,

    /// Log in against the remote backend
    Login {
        /// Mobile number
        #[arg(long)]
        mobile: String,
        /// Password
        #[arg(long)]
        password: String,
    },

    /// Clear the session
    Logout,

    /// Register a new account with the remote backend
    Register {
        /// Display name
        #[arg(long)]
        name: String,
        /// Gender
        #[arg(long)]
        gender: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Mobile number
        #[arg(long)]
        mobile: String,
        /// Password
        #[arg(long)]
        password: String,
    },

    /// List products within a category
    Category {
        /// Category name
        name: String,
    },

    /// Fetch the nutrition analysis for a product
    Analyze {
        /// Product name
        product: String,
    },

    /// Upload a product photo for analysis
    AnalyzeImage {
        /// Path to a JPEG image
        path: PathBuf,
    },

    /// Remote profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Fetch personalized food recommendations
    Suggest,

    /// Set the display language (English or Hindi)
    Language {
        /// Language name or code
        language: Language,
    },

    /// Local (legacy) credential store operations
    Local {
        #[command(subcommand)]
        action: LocalCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the remote profile
    Show,

    /// Partially update the remote profile
    Update {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Gender
        #[arg(long)]
        gender: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
        /// Age in years
        #[arg(long)]
        age: Option<i32>,
        /// Height in centimeters
        #[arg(long)]
        height: Option<i32>,
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<i32>,
        /// Medical history
        #[arg(long)]
        medical_history: Option<String>,
        /// Allergies
        #[arg(long)]
        allergies: Option<String>,
        /// Blood group
        #[arg(long)]
        blood_group: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum LocalCommand {
    /// Register a user in the local store
    Register {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Mobile number
        #[arg(long)]
        mobile: String,
        /// Password
        #[arg(long)]
        password: String,
    },

    /// Check credentials against the local store
    Login {
        /// Mobile number
        #[arg(long)]
        mobile: String,
        /// Password
        #[arg(long)]
        password: String,
    },

    /// Check whether a mobile number is registered locally
    Check {
        /// Mobile number
        mobile: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    foodlens_client::logging::init_logging(default_level)?;

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    debug!(base_url = %config.base_url, "client configured");

    let session = Arc::new(SessionStore::new(&config.data_dir)?);

    match cli.command {
        Command::Status => {
            if session.is_logged_in() {
                let user = session.logged_in_user().unwrap_or_else(|| "unknown".into());
                println!("logged in as {user} ({})", session.language());
            } else {
                println!("logged out");
            }
        }
        Command::Login { mobile, password } => {
            let gateway = ApiGateway::new(&config, Arc::clone(&session))?;
            let response = gateway.login(&mobile, &password).await?;
            if session.is_logged_in() {
                println!(
                    "{}",
                    response.message.unwrap_or_else(|| "login successful".into())
                );
            } else {
                println!(
                    "{}",
                    response.error.unwrap_or_else(|| "login failed".into())
                );
            }
        }
        Command::Logout => {
            session.logout()?;
            println!("logged out");
        }
        Command::Register {
            name,
            gender,
            email,
            mobile,
            password,
        } => {
            let gateway = ApiGateway::new(&config, Arc::clone(&session))?;
            let request = RegisterRequest {
                name,
                gender,
                email,
                mobile,
                password,
            };
            let response = gateway.register(&request).await?;
            println!(
                "{}",
                response
                    .message
                    .or(response.error)
                    .unwrap_or_else(|| "registration submitted".into())
            );
        }
        Command::Category { name } => {
            let gateway = ApiGateway::new(&config, Arc::clone(&session))?;
            let products = gateway.products_by_category(&name).await?;
            if products.is_empty() {
                println!("no products found in {name}");
            }
            for product in products {
                println!("{}\n  ingredients: {}", product.name, product.ingredients);
            }
        }
        Command::Analyze { product } => {
            let gateway = ApiGateway::new(&config, Arc::clone(&session))?;
            let language = session.language();
            match gateway.product_analysis(&product).await? {
                Some(report) => print_analysis(&report.analysis, language),
                None => println!("no analysis available for {product}"),
            }
        }
        Command::AnalyzeImage { path } => {
            let gateway = ApiGateway::new(&config, Arc::clone(&session))?;
            let language = session.language();
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("upload.jpg")
                .to_owned();
            let image = tokio::fs::read(&path)
                .await
                .with_context(|| format!("failed to read image {}", path.display()))?;
            match gateway.image_product_analysis(image, &file_name).await? {
                Some(analysis) => print_analysis(&analysis, language),
                None => println!("no analysis available for this image"),
            }
        }
        Command::Profile { action } => {
            let gateway = ApiGateway::new(&config, Arc::clone(&session))?;
            match action {
                ProfileCommand::Show => match gateway.user_profile().await? {
                    Some(profile) => {
                        println!("{}", serde_json::to_string_pretty(&profile)?);
                    }
                    None => println!("no profile data"),
                },
                ProfileCommand::Update {
                    name,
                    gender,
                    email,
                    age,
                    height,
                    weight,
                    medical_history,
                    allergies,
                    blood_group,
                } => {
                    let request = UpdateProfileRequest {
                        name,
                        gender,
                        email,
                        age,
                        height,
                        weight,
                        medical_history,
                        allergies,
                        blood_group,
                        mobile: None,
                    };
                    match gateway.update_profile(&request).await? {
                        Some(response) => println!("{}", response.message),
                        None => println!("profile update submitted"),
                    }
                }
            }
        }
        Command::Suggest => {
            let gateway = ApiGateway::new(&config, Arc::clone(&session))?;
            let recommendations = gateway.food_recommendations().await?;
            if recommendations.is_empty() {
                println!("no recommendations available");
            }
            for entry in recommendations {
                println!(
                    "{} [{}]\n  {}",
                    entry.product_name, entry.category, entry.benefits
                );
            }
        }
        Command::Language { language } => {
            session.set_language(language)?;
            println!("language set to {language} ({})", language.code());
        }
        Command::Local { action } => {
            let database = Database::new(&config.database_url).await?;
            match action {
                LocalCommand::Register {
                    name,
                    email,
                    mobile,
                    password,
                } => {
                    if database.is_mobile_registered(&mobile).await? {
                        println!("mobile {mobile} is already registered");
                    } else {
                        let id = database
                            .register_user(&NewUser {
                                name,
                                email,
                                mobile,
                                password,
                            })
                            .await?;
                        println!("registered local user #{id}");
                    }
                }
                LocalCommand::Login { mobile, password } => {
                    match database.find_by_credentials(&mobile, &password).await? {
                        Some(user) => println!("welcome back, {}", user.name),
                        None => println!("invalid mobile or password"),
                    }
                }
                LocalCommand::Check { mobile } => {
                    if database.is_mobile_registered(&mobile).await? {
                        println!("{mobile} is registered");
                    } else {
                        println!("{mobile} is not registered");
                    }
                }
            }
        }
    }

    Ok(())
}

/// Render an analysis report in the selected language
fn print_analysis(analysis: &foodlens_client::models::ProductAnalysis, language: Language) {
    println!(
        "overall: {:.1}/5 - {}",
        analysis.overall_analysis.rating,
        analysis.overall_analysis.explanation(language)
    );
    for nutrient in &analysis.nutrient_analysis {
        println!(
            "  {} {:.1}/10 - {}",
            nutrient.nutrient(language),
            nutrient.rating,
            nutrient.explanation(language)
        );
    }
    if !analysis.suggested_alternatives.is_empty() {
        println!("alternatives:");
        for alternative in &analysis.suggested_alternatives {
            println!("  {} - {}", alternative.name, alternative.reason(language));
        }
    }
}
