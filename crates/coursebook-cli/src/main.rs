use clap::{Parser, Subcommand};
use coursebook_cli::seeder::{self, SeedConfig, users};
use coursebook_config::{AuthConfig, DatabaseConfig};
use coursebook_core::hash_password_with_cost;
use coursebook_db::{SqlitePool, init_db_pool, run_migrations};
use coursebook_models::{CreateUserDto, validation_messages};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use validator::Validate;

#[derive(Parser)]
#[command(name = "coursebook-cli")]
#[command(about = "Coursebook CLI - Administrative tools for Coursebook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user account
    CreateUser {
        /// First name of the user
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name of the user
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Email address, used as the Basic auth user name
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake users and courses
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "10")]
        users: usize,

        /// Number of courses per user
        #[arg(short = 'c', long, default_value = "3")]
        courses: usize,
    },
    /// Delete every course and user
    Clear,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    let pool = connect().await;

    match cli.command {
        Commands::CreateUser {
            first_name,
            last_name,
            email,
            password,
        } => handle_create_user(&pool, first_name, last_name, email, password).await,
        Commands::Seed { users, courses } => handle_seed(&pool, users, courses).await,
        Commands::Clear => handle_clear(&pool).await,
    }
}

fn fail(context: &str, error: impl std::fmt::Display) -> ! {
    eprintln!("\n❌ {}: {}", context, error);
    std::process::exit(1);
}

async fn connect() -> SqlitePool {
    let config = DatabaseConfig::from_env();

    let pool = match init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => fail("Failed to connect to database", e),
    };

    if let Err(e) = run_migrations(&pool).await {
        fail("Failed to apply migrations", e);
    }

    pool
}

fn prompt(label: &str) -> String {
    Input::new()
        .with_prompt(label)
        .interact_text()
        .unwrap_or_else(|e| fail(&format!("Failed to read {}", label.to_lowercase()), e))
}

async fn handle_create_user(
    pool: &SqlitePool,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) {
    let dto = CreateUserDto {
        first_name: first_name.unwrap_or_else(|| prompt("First name")),
        last_name: last_name.unwrap_or_else(|| prompt("Last name")),
        email_address: email.unwrap_or_else(|| prompt("Email address")),
        password: password.unwrap_or_else(|| {
            Password::new()
                .with_prompt("Password")
                .with_confirmation("Confirm password", "Passwords don't match")
                .interact()
                .unwrap_or_else(|e| fail("Failed to read password", e))
        }),
    };

    if let Err(errors) = dto.validate() {
        fail("Invalid user", validation_messages(&errors).join(" "));
    }

    let cost = AuthConfig::from_env().bcrypt_cost;
    let password_hash = match hash_password_with_cost(&dto.password, cost) {
        Ok(hash) => hash,
        Err(e) => fail("Failed to hash password", e.error),
    };

    match users::create_user(
        pool,
        &dto.first_name,
        &dto.last_name,
        &dto.email_address,
        &password_hash,
    )
    .await
    {
        Ok(id) => {
            println!("\n✅ User created successfully!");
            println!("   ID: {}", id);
            println!("   Email: {}", dto.email_address);
            println!("   Name: {} {}", dto.first_name, dto.last_name);
        }
        Err(e) => fail("Error creating user", e),
    }
}

async fn handle_seed(pool: &SqlitePool, users: usize, courses: usize) {
    let config = SeedConfig::new(users)
        .with_courses_per_user(courses)
        .with_bcrypt_cost(AuthConfig::from_env().bcrypt_cost);

    if let Err(e) = seeder::seed_all(pool, config).await {
        fail("Error seeding database", e);
    }
}

async fn handle_clear(pool: &SqlitePool) {
    if let Err(e) = seeder::clear_all(pool).await {
        fail("Error clearing database", e);
    }
}
