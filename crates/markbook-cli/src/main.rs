//! Markbook CLI - student mark records backed by a CSV file.

mod cli;
mod commands;
mod console;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let file = cli.file;
    let verbose = cli.verbose;

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::run(file, verbose),

        Commands::Add {
            name,
            maths,
            science,
            english,
            social_studies,
            language,
        } => commands::add::run(
            file,
            name,
            [maths, science, english, social_studies, language],
            verbose,
        ),

        Commands::Update {
            name,
            subject,
            mark,
        } => commands::update::run(file, name, subject, mark, verbose),

        Commands::Delete { name } => commands::delete::run(file, name, verbose),

        Commands::Analytics { json } => commands::analytics::run(file, json, verbose),

        Commands::List { json } => commands::list::run(file, json, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
