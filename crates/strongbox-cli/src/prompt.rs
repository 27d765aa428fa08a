//! Line-oriented terminal prompts.
//!
//! Prompts are written to stderr so stdout carries only revealed data.

use std::io::{self, BufRead, StdinLock, Write};

use console::style;
use strongbox_vault::payload::{self, Fields};
use strongbox_vault::Category;

/// Read the master password without echo.
pub fn password(prompt: &str) -> anyhow::Result<String> {
    let password = rpassword::prompt_password(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
    Ok(password.trim().to_string())
}

/// Reads answers from a line source.
pub struct Prompter<R> {
    reader: R,
}

impl Prompter<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Prompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Print `prompt` and read one trimmed line. Fails at end of input.
    pub fn line(&mut self, prompt: &str) -> anyhow::Result<String> {
        eprint!("{}", prompt);
        io::stderr().flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            anyhow::bail!("input closed");
        }
        Ok(input.trim().to_string())
    }

    /// Ask a yes/no question; only `y` or `yes` counts as yes.
    pub fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        let answer = self.line(&format!("{} (y/n): ", question))?;
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    /// Wait for Enter. End of input is not an error here.
    pub fn pause(&mut self) {
        eprintln!("{}", style("Press Enter to continue...").dim());
        let mut discard = String::new();
        let _ = self.reader.read_line(&mut discard);
    }

    /// Collect the payload for a new entry in `category`.
    pub fn payload(&mut self, category: Category) -> anyhow::Result<String> {
        match category {
            Category::Accounts => {
                let username = self.line("Username : ")?;
                let password = self.line("Password : ")?;
                let mut extra = Fields::new();
                if self.confirm("Other Data?")? {
                    self.fields(&mut extra)?;
                }
                Ok(payload::account_payload(&username, &password, &extra))
            }
            Category::Seeds => self.line("Enter Seed : "),
            Category::PrivateKeys => self.line("Enter Private Key : "),
            Category::Others => {
                let mut fields = Fields::new();
                self.fields(&mut fields)?;
                Ok(fields.render())
            }
        }
    }

    /// Read `key: value` pairs until a blank key.
    pub fn fields(&mut self, fields: &mut Fields) -> anyhow::Result<()> {
        loop {
            let key = self.line("Enter Data Key (Leave Blank to SKIP) : ")?;
            if key.is_empty() {
                return Ok(());
            }
            let value = self.line(&format!("{} : ", key))?;
            fields.push(&key, &value);
        }
    }
}
