use clap::Parser;
use colored::*;
use cstr_roster::classifier::categorize_members;
use cstr_roster::parser::load_members;
use cstr_roster::types::{CategorizedMembers, Category, Member};
use tracing::error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "2.csv")]
    source: String,

    #[arg(short, long)]
    category: Option<Category>,

    #[arg(long, conflicts_with = "category")]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .init();

    let args = Args::parse();

    let members = load_members(&args.source);
    let directory = categorize_members(members);

    if args.json {
        match serde_json::to_string_pretty(&directory) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Could not serialize directory: {}", e),
        }
        return;
    }

    match args.category {
        Some(category) => print_category(&directory, category),
        None => print_directory(&directory),
    }
}

fn print_directory(directory: &CategorizedMembers) {
    let total: usize = directory.values().map(Vec::len).sum();

    println!("------------------------------------------------");
    println!(
        "{} ({} members)",
        "CSTR TEAM DIRECTORY".green().bold(),
        total
    );
    println!("------------------------------------------------");

    if total == 0 {
        println!("{}", "No members found".yellow());
        return;
    }

    // Empty teams stay hidden.
    for (category, members) in directory {
        if members.is_empty() {
            continue;
        }
        print_section(*category, members);
    }
}

fn print_category(directory: &CategorizedMembers, category: Category) {
    match directory.get(&category) {
        Some(members) if !members.is_empty() => print_section(category, members),
        _ => println!("{}", format!("No members in {}", category).yellow()),
    }
}

fn print_section(category: Category, members: &[Member]) {
    println!();
    println!("{} ({})", category.label().cyan().bold(), members.len());
    for member in members {
        match &member.linked_in {
            Some(link) => println!("  * {} ({})  {}", member.name, member.role, link.dimmed()),
            None => println!("  * {} ({})", member.name, member.role),
        }
    }
}
