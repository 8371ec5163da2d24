//! `studyhub` terminal shell.
//!
//! # Responsibility
//! - Map each subcommand to one user action on the core controller.
//! - Print the recomputed view after every mutating action.
//!
//! Destructive commands show the confirmation prompt and stop unless `--yes`
//! is passed.

mod render;

use clap::{Parser, Subcommand};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use studyhub_core::db::open_db;
use studyhub_core::{
    core_version, init_logging, CatalogStore, Controller, ResourceForm, ResourceRef,
    SqliteKvRepository, StudyHubConfig,
};

#[derive(Parser)]
#[command(name = "studyhub")]
#[command(about = "Organize study links by subject")]
#[command(version = core_version())]
struct Cli {
    /// SQLite file backing local storage (overrides STUDYHUB_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show subjects and resources
    List {
        /// Only show this subject
        #[arg(long)]
        subject: Option<String>,
        /// Case-insensitive text filter
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show the subject sidebar only
    Subjects,
    /// Add an empty subject
    AddSubject { name: String },
    /// Add a resource (strict validation)
    Add {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        url: String,
    },
    /// Edit a resource, optionally moving it to another subject
    Edit {
        #[arg(long)]
        subject: String,
        /// Index within the subject, as shown by `list`
        #[arg(long)]
        index: usize,
        #[arg(long)]
        to_subject: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        url: Option<String>,
    },
    /// Delete one resource
    DeleteResource {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        index: usize,
        #[arg(long)]
        yes: bool,
    },
    /// Delete a subject and all its resources
    DeleteSubject {
        name: String,
        #[arg(long)]
        yes: bool,
    },
    /// Replace everything with the sample data
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// Show or toggle the light/dark theme
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut config = StudyHubConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(config.log_level.as_str(), log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    if let Err(err) = run(&config, cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &StudyHubConfig, command: Commands) -> Result<(), Box<dyn Error>> {
    let conn = open_db(&config.db_path)?;
    let mut controller = Controller::new(CatalogStore::new(SqliteKvRepository::new(&conn)));
    info!("event=cli_start module=cli status=ok");

    match command {
        Commands::List { subject, filter } => {
            if let Some(subject) = subject {
                controller.click_subject(subject.as_str())?;
            }
            if let Some(filter) = filter {
                controller.set_filter(filter);
            }
            print!("{}", render::render_view(&controller.view()));
        }
        Commands::Subjects => {
            print!("{}", render::render_subjects(&controller.view().subjects));
        }
        Commands::AddSubject { name } => {
            if controller.add_subject(name.as_str())? {
                println!("Added subject \"{}\".", name.trim());
            } else {
                println!("Nothing added.");
            }
            print!("{}", render::render_subjects(&controller.view().subjects));
        }
        Commands::Add { subject, name, url } => {
            controller.open_add()?;
            controller.set_form(ResourceForm::new(subject, name, url))?;
            if let Some(saved) = controller.save_dialog()? {
                println!("Saved {saved}.");
            }
            print!("{}", render::render_view(&controller.view()));
        }
        Commands::Edit {
            subject,
            index,
            to_subject,
            name,
            url,
        } => {
            controller.open_edit(ResourceRef::new(subject, index))?;
            let form = controller.form_mut()?;
            if let Some(to_subject) = to_subject {
                form.subject = to_subject;
            }
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(url) = url {
                form.url = url;
            }
            if let Some(saved) = controller.save_dialog()? {
                println!("Saved {saved}.");
            }
            print!("{}", render::render_view(&controller.view()));
        }
        Commands::DeleteResource {
            subject,
            index,
            yes,
        } => {
            controller.request_delete_resource(ResourceRef::new(subject, index))?;
            confirm_or_stop(&mut controller, yes)?;
        }
        Commands::DeleteSubject { name, yes } => {
            controller.request_delete_subject(name.as_str())?;
            confirm_or_stop(&mut controller, yes)?;
        }
        Commands::Reset { yes } => {
            controller.request_reset_to_sample()?;
            confirm_or_stop(&mut controller, yes)?;
        }
        Commands::Theme { toggle } => {
            let theme = if toggle {
                controller.toggle_theme()
            } else {
                controller.theme()
            };
            println!("theme={}", theme.as_str());
        }
    }

    Ok(())
}

fn confirm_or_stop<P>(controller: &mut Controller<P>, yes: bool) -> Result<(), Box<dyn Error>>
where
    P: studyhub_core::CatalogPersistence + studyhub_core::ThemePersistence,
{
    if !yes {
        if let Some(pending) = controller.pending_confirmation() {
            println!("{}", pending.prompt());
        }
        println!("Re-run with --yes to confirm.");
        controller.dismiss();
        return Ok(());
    }

    controller.confirm()?;
    print!("{}", render::render_view(&controller.view()));
    Ok(())
}
