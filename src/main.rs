use clap::Parser;
use piping_datasheets::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Piping Datasheets - Catalog Datasheet Generator");
    println!("===============================================");
    println!();
    println!("Populate piping part, gasket, valve and bolt datasheet templates from");
    println!("engineering catalog records, and write one summary per pipe class.");
    println!();
    println!("USAGE:");
    println!("    piping-datasheets <COMMAND> --catalog <FILE> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    items        List catalog items with their datasheet category");
    println!("    datasheets   Generate datasheet workbooks for selected items");
    println!("    classes      List pipe classes found in the catalog");
    println!("    summary      Generate one summary workbook per pipe class");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Datasheets for two items:");
    println!("    piping-datasheets datasheets --catalog catalog.json --select PP-100,GV-12");
    println!();
    println!("    # Summaries for every discovered pipe class:");
    println!("    piping-datasheets summary --catalog catalog.json --all-classes \\");
    println!("                              --project-root /path/to/project");
    println!();
    println!("For detailed help on any command, use:");
    println!("    piping-datasheets <COMMAND> --help");
}
