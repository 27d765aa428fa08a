//! Interactive menu loop.

use std::io::BufRead;

use strongbox_vault::{Category, Vault};

use crate::commands::entries;
use crate::prompt::{self, Prompter};
use crate::render;

/// Numbered menu entries, in display order.
pub const MENU_ITEMS: [(&str, &str); 4] = [
    ("1", "Reset Password"),
    ("2", "View Entries"),
    ("3", "Add"),
    ("4", "Delete"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    ResetPassword,
    View,
    Add,
    Delete,
    Quit,
}

impl MenuAction {
    fn parse(choice: &str) -> Option<Self> {
        match choice.trim().to_ascii_lowercase().as_str() {
            "1" => Some(Self::ResetPassword),
            "2" => Some(Self::View),
            "3" => Some(Self::Add),
            "4" => Some(Self::Delete),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the menu on stdin until the user quits.
pub fn run(vault: &mut Vault) -> anyhow::Result<()> {
    let mut prompter = Prompter::stdin();
    run_with(vault, &mut prompter, || {
        prompt::password("Enter your password: ")
    })
}

/// Run the menu reading answers from `prompter`. `read_password` supplies
/// the new master password for a reset. End of input quits.
pub fn run_with<R, F>(
    vault: &mut Vault,
    prompter: &mut Prompter<R>,
    mut read_password: F,
) -> anyhow::Result<()>
where
    R: BufRead,
    F: FnMut() -> anyhow::Result<String>,
{
    loop {
        render::clear_screen();
        render::render_menu();

        let Ok(choice) = prompter.line("Enter your choice: ") else {
            return Ok(());
        };

        let Some(action) = MenuAction::parse(&choice) else {
            render::render_notice("Invalid option. Try again.");
            prompter.pause();
            continue;
        };

        if action == MenuAction::Quit {
            eprintln!("{}", console::style("Goodbye!").dim());
            return Ok(());
        }

        render::clear_screen();
        if let Err(e) = perform(vault, prompter, action, &mut read_password) {
            render::render_error(&e);
        }
        prompter.pause();
    }
}

fn perform<R, F>(
    vault: &mut Vault,
    prompter: &mut Prompter<R>,
    action: MenuAction,
    read_password: &mut F,
) -> anyhow::Result<()>
where
    R: BufRead,
    F: FnMut() -> anyhow::Result<String>,
{
    match action {
        MenuAction::ResetPassword => {
            let password = read_password()?;
            if password.is_empty() {
                anyhow::bail!("password must not be empty");
            }
            vault.set_password(password);
            render::render_success("Password set successfully.");
            Ok(())
        }
        MenuAction::View => {
            let category = choose_category(prompter)?;
            entries::show(vault, prompter, category, None, false)
        }
        MenuAction::Add => {
            let category = choose_category(prompter)?;
            entries::add(vault, prompter, category, None, None)
        }
        MenuAction::Delete => {
            let category = choose_category(prompter)?;
            entries::delete(vault, prompter, category, None, false)
        }
        MenuAction::Quit => Ok(()),
    }
}

fn choose_category<R: BufRead>(prompter: &mut Prompter<R>) -> anyhow::Result<Category> {
    render::render_categories();
    let choice = prompter.line("Choose data type: ")?;
    Category::from_menu_choice(&choice).ok_or_else(|| anyhow::anyhow!("Invalid option."))
}
