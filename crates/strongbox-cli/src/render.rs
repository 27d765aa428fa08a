//! Terminal rendering utilities.

use console::{style, Term};
use strongbox_vault::{Catalog, Category, DecryptedPayload};

const RULE: &str = "------------------------------------";

/// Clear the terminal. Does nothing when stderr is not a terminal.
pub fn clear_screen() {
    let term = Term::stderr();
    if term.is_term() {
        let _ = term.clear_screen();
    }
}

/// Print the banner and the main menu.
pub fn render_menu() {
    eprintln!();
    eprintln!("{}", style("=====================================").cyan());
    eprintln!("{}", style("   S T R O N G B O X   (Secure Vault)").bold().cyan());
    eprintln!("{}", style("=====================================").cyan());
    eprintln!();
    eprintln!("Select an option:");
    for (key, label) in crate::menu::MENU_ITEMS {
        eprintln!("  {} {}", style(format!("{}.", key)).cyan(), label);
    }
    eprintln!("  {} Quit", style("q.").cyan());
    eprintln!("{}", style(RULE).dim());
}

/// Print the category choices used by the add flow.
pub fn render_categories() {
    for (i, category) in Category::ALL.iter().enumerate() {
        eprintln!("  {} {}", style(format!("{}.", i + 1)).cyan(), category.title());
    }
}

/// Catalog as numbered lines, `1. label`.
pub fn format_catalog(catalog: &Catalog) -> String {
    catalog
        .entries()
        .iter()
        .map(|entry| format!("{}. {}\n", entry.index, entry.label))
        .collect()
}

/// Print the numbered catalog to stdout.
pub fn render_catalog(catalog: &Catalog) {
    eprintln!("{}", style("Available entries:").bold());
    print!("{}", format_catalog(catalog));
}

/// Print one decrypted entry to stdout.
pub fn render_payload(label: &str, payload: &DecryptedPayload) {
    println!("{}", style(label).bold());
    println!("{}", style(RULE).dim());
    println!("{}", payload.expose().trim_end());
    println!("{}", style(RULE).dim());
}

pub fn render_success(message: &str) {
    eprintln!("{} {}", style("*").green(), message);
}

pub fn render_notice(message: &str) {
    eprintln!("{} {}", style("!").yellow(), message);
}

pub fn render_error(err: &anyhow::Error) {
    eprintln!("{}: {}", style("Error").red(), err);
}
