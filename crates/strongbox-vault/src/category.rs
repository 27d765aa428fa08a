//! The fixed set of secret categories.

use std::fmt;
use std::str::FromStr;

use crate::error::VaultError;

/// A class of secret, each stored in its own directory under the vault root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Accounts,
    Seeds,
    PrivateKeys,
    Others,
}

impl Category {
    /// All categories, in menu order.
    pub const ALL: [Category; 4] = [
        Category::Accounts,
        Category::Seeds,
        Category::PrivateKeys,
        Category::Others,
    ];

    /// Directory name under the vault root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Seeds => "seeds",
            Self::PrivateKeys => "private_keys",
            Self::Others => "others",
        }
    }

    /// Human-readable name for menus.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Accounts => "Account",
            Self::Seeds => "Wallet (Seed)",
            Self::PrivateKeys => "Wallet (Private Key)",
            Self::Others => "Other",
        }
    }

    /// What the label of an entry in this category names.
    pub fn label_prompt(&self) -> &'static str {
        match self {
            Self::Accounts => "Account Name",
            Self::Seeds | Self::PrivateKeys => "Wallet Name",
            Self::Others => "Type Name",
        }
    }

    /// Resolve a 1-based menu choice.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        let index: usize = choice.trim().parse().ok()?;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Category {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accounts" | "account" => Ok(Self::Accounts),
            "seeds" | "seed" => Ok(Self::Seeds),
            "private_keys" | "private-keys" | "private_key" | "private-key" => {
                Ok(Self::PrivateKeys)
            }
            "others" | "other" => Ok(Self::Others),
            other => Err(VaultError::InvalidInput(format!(
                "unknown category '{other}' (expected accounts, seeds, private-keys, or others)"
            ))),
        }
    }
}
