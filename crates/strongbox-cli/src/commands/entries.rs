//! Entry commands: add, list, show, delete.
//!
//! Shared by the one-shot subcommands and the interactive menu; anything
//! not supplied up front is asked through the [`Prompter`].

use std::io::BufRead;

use clap::Args;
use strongbox_vault::{Category, DeleteOutcome, Vault};

use crate::prompt::Prompter;
use crate::render;

/// Arguments for `strongbox add`.
#[derive(Args)]
pub struct AddArgs {
    /// accounts, seeds, private-keys, or others
    pub category: Category,

    /// Entry name (prompts if omitted)
    pub label: Option<String>,

    /// Entry data, taken as-is (prompts per category if omitted)
    #[arg(long)]
    pub data: Option<String>,
}

/// Add an entry, prompting for whatever was not given.
pub fn add<R: BufRead>(
    vault: &Vault,
    prompter: &mut Prompter<R>,
    category: Category,
    label: Option<&str>,
    data: Option<&str>,
) -> anyhow::Result<()> {
    let label = match label {
        Some(label) => label.to_string(),
        None => prompter.line(&format!("Enter {} : ", category.label_prompt()))?,
    };

    // Refuse a duplicate before asking for the payload.
    let reserved = vault.reserve_label(category, &label)?;

    let data = match data {
        Some(data) => data.to_string(),
        None => prompter.payload(category)?,
    };

    vault.add_reserved(category, &reserved, &data)?;
    render::render_success("Data added successfully!");
    Ok(())
}

/// Print the numbered entry names in `category`.
pub fn list(vault: &Vault, category: Category) -> anyhow::Result<()> {
    let catalog = vault.catalog(category)?;
    render::render_catalog(&catalog);
    Ok(())
}

/// Reveal one entry, every entry, or prompt for a selection.
pub fn show<R: BufRead>(
    vault: &Vault,
    prompter: &mut Prompter<R>,
    category: Category,
    index: Option<usize>,
    all: bool,
) -> anyhow::Result<()> {
    if all {
        for (label, payload) in vault.list_entries(category)? {
            render::render_payload(&label, &payload);
        }
        return Ok(());
    }

    let catalog = vault.catalog(category)?;
    let entry = match index {
        Some(index) => catalog.resolve(index)?,
        None => {
            render::render_catalog(&catalog);
            let choice = prompter.line("Choose an entry by number: ")?;
            catalog.resolve_input(&choice)?
        }
    };

    let payload = catalog.reveal(vault.store(), vault.session(), entry.index)?;
    render::render_payload(&entry.label, &payload);
    Ok(())
}

/// Delete one entry after confirmation, unless `yes` is set.
pub fn delete<R: BufRead>(
    vault: &Vault,
    prompter: &mut Prompter<R>,
    category: Category,
    index: Option<usize>,
    yes: bool,
) -> anyhow::Result<()> {
    let catalog = vault.catalog(category)?;

    let index = match index {
        Some(index) => index,
        None => {
            render::render_catalog(&catalog);
            let choice = prompter.line("Choose to delete by number: ")?;
            catalog.resolve_input(&choice)?.index
        }
    };

    let outcome = catalog.delete(vault.store(), index, |entry| {
        yes || prompter
            .confirm(&format!("Delete '{}'? Are you sure?", entry.label))
            .unwrap_or(false)
    })?;

    match outcome {
        DeleteOutcome::Deleted { label } => {
            render::render_success(&format!("Deleted '{}'.", label));
        }
        DeleteOutcome::Cancelled => render::render_notice("Delete cancelled."),
    }
    Ok(())
}
