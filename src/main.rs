mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventhub_core::{EventHub, EventHubConfig, Role, RsvpStatus};
use tracing_subscriber::EnvFilter;

use commands::update::UpdateArgs;

#[derive(Parser)]
#[command(name = "eventhub")]
#[command(about = "Browse events, organize your own and RSVP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in as an existing user
    Login {
        email: String,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create an account and sign in
    Register {
        name: String,
        email: String,

        /// organizer or attendee
        #[arg(short, long, default_value = "attendee")]
        role: Role,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out
    Logout,
    /// Show who is signed in
    Whoami,
    /// List events
    Events {
        /// Only events that haven't started yet
        #[arg(short, long)]
        upcoming: bool,

        /// Show at most this many events
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one event with its RSVPs
    Show { id: String },
    /// Create an event (organizers only)
    New {
        title: String,

        /// Date (e.g. "2025-03-20" or "next friday")
        #[arg(short, long)]
        date: String,

        /// Start time (e.g. "18:30")
        #[arg(short, long)]
        time: String,

        #[arg(short, long)]
        location: String,

        #[arg(long)]
        description: String,

        #[arg(short, long, default_value = eventhub_core::event::DEFAULT_CATEGORY)]
        category: String,

        #[arg(short, long)]
        max_attendees: Option<u32>,

        #[arg(long)]
        image_url: Option<String>,
    },
    /// Change one of your events
    Update {
        id: String,

        #[command(flatten)]
        args: UpdateArgs,
    },
    /// Delete one of your events and its RSVPs
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Answer yes, no or maybe to an event
    Rsvp {
        id: String,

        status: RsvpStatus,

        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Your events and how many are coming (organizers only)
    Dashboard,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = EventHubConfig::load()?;
    let mut hub = EventHub::open(&config)?;

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&mut hub, &email, password),
        Commands::Register {
            name,
            email,
            role,
            password,
        } => commands::auth::register(&mut hub, &name, &email, role, password),
        Commands::Logout => commands::auth::logout(&mut hub),
        Commands::Whoami => commands::auth::whoami(&hub),
        Commands::Events { upcoming, limit } => commands::events::list(&hub, upcoming, limit),
        Commands::Show { id } => commands::events::show(&hub, &id),
        Commands::New {
            title,
            date,
            time,
            location,
            description,
            category,
            max_attendees,
            image_url,
        } => commands::new::run(
            &mut hub,
            commands::new::NewArgs {
                title,
                date,
                time,
                location,
                description,
                category,
                max_attendees,
                image_url,
            },
        ),
        Commands::Update { id, args } => commands::update::run(&mut hub, &id, args),
        Commands::Delete { id, yes } => commands::delete::run(&mut hub, &id, yes),
        Commands::Rsvp { id, status, notes } => commands::rsvp::run(&mut hub, &id, status, notes),
        Commands::Dashboard => commands::dashboard::run(&hub),
    }
}
