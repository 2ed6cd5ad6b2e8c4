//! # roster-cli
//!
//! Command-line demo driving the roster engine against a live endpoint.
//!
//! ## Commands
//!
//! - `list`: Show one page of the user collection
//! - `show`: Show a single user
//! - `add`: Create a user with a chosen id
//! - `update`: Edit fields of an existing user
//! - `delete`: Remove a user
//!
//! ## Example
//!
//! ```bash
//! roster list --page 2
//! roster add --id 11 --first-name Nora --last-name Quinn \
//!     --email nora@q.example --department Design
//! roster update 11 --department Research
//! roster delete 11
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use roster_client::{CollectionStore, HttpTransport, NoteKind, Notifier, UserResource};
use roster_types::{Field, User, UserId};

/// Command-line demo for the roster engine.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the remote user resource
    #[arg(long, global = true, default_value = "https://jsonplaceholder.typicode.com")]
    base_url: String,

    /// Records per page for listings
    #[arg(long, global = true, default_value_t = roster_core::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show one page of the user collection
    List {
        /// Page to show (1-based)
        #[arg(long, short, default_value_t = 1)]
        page: usize,
    },

    /// Show a single user
    Show {
        /// Id of the user
        id: u32,
    },

    /// Create a user with a chosen id
    Add {
        /// Id for the new user (must be unused)
        #[arg(long)]
        id: u32,
        /// Given name
        #[arg(long)]
        first_name: String,
        /// Family name
        #[arg(long)]
        last_name: String,
        /// Contact email address
        #[arg(long)]
        email: String,
        /// Organizational department
        #[arg(long)]
        department: String,
    },

    /// Edit fields of an existing user
    Update {
        /// Id of the user to edit
        id: u32,
        /// New given name
        #[arg(long)]
        first_name: Option<String>,
        /// New family name
        #[arg(long)]
        last_name: Option<String>,
        /// New contact email address
        #[arg(long)]
        email: Option<String>,
        /// New organizational department
        #[arg(long)]
        department: Option<String>,
    },

    /// Remove a user
    Delete {
        /// Id of the user to remove
        id: u32,
    },
}

/// Notifier that prints outcomes to stderr.
#[derive(Debug, Clone, Copy, Default)]
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, kind: NoteKind, message: &str) {
        match kind {
            NoteKind::Success => eprintln!("ok: {message}"),
            NoteKind::Error => eprintln!("error: {message}"),
        }
    }
}

fn print_user(user: &User) {
    println!(
        "{:>4}  {} {} <{}> - {}",
        user.id, user.first_name, user.last_name, user.email, user.department
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let resource = UserResource::new(HttpTransport::new(&cli.base_url));
    let mut store = CollectionStore::open(resource, StderrNotifier, cli.page_size).await;
    if let Some(error) = store.load_error() {
        bail!("{error}");
    }

    match cli.command {
        Commands::List { page } => {
            for _ in 1..page {
                store.next_page();
            }
            for user in store.current_view() {
                print_user(user);
            }
            println!(
                "page {} of {} ({} users)",
                store.current_page(),
                store.total_pages(),
                store.len()
            );
        }

        Commands::Show { id } => {
            let id = UserId::new(id);
            match store.users().iter().find(|user| user.id == id) {
                Some(user) => print_user(user),
                None => bail!("no user with id {id}"),
            }
        }

        Commands::Add {
            id,
            first_name,
            last_name,
            email,
            department,
        } => {
            store.start_add();
            store.set_field(Field::Id, id.to_string());
            store.set_field(Field::FirstName, first_name);
            store.set_field(Field::LastName, last_name);
            store.set_field(Field::Email, email);
            store.set_field(Field::Department, department);
            if let Err(err) = store.submit().await {
                report_submit_failure(&store, err)?;
            }
        }

        Commands::Update {
            id,
            first_name,
            last_name,
            email,
            department,
        } => {
            let id = UserId::new(id);
            store.start_edit(id);
            if store.draft().is_none() {
                bail!("no user with id {id}");
            }
            let edits = [
                (Field::FirstName, first_name),
                (Field::LastName, last_name),
                (Field::Email, email),
                (Field::Department, department),
            ];
            for (field, value) in edits {
                if let Some(value) = value {
                    store.set_field(field, value);
                }
            }
            if let Err(err) = store.submit().await {
                report_submit_failure(&store, err)?;
            }
        }

        Commands::Delete { id } => {
            store.delete(UserId::new(id)).await?;
        }
    }

    Ok(())
}

/// Turn a failed submit into a readable exit, listing field errors.
fn report_submit_failure(
    store: &CollectionStore<HttpTransport, StderrNotifier>,
    err: roster_client::SubmitError,
) -> Result<()> {
    if let Some(errors) = store.validation_errors() {
        for (field, message) in errors {
            eprintln!("{field}: {message}");
        }
    }
    bail!("{err}")
}
