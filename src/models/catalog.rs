//! Categories and icons an event may reference, as loaded from the config.

use super::category::is_pseudo_category;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub categories: Vec<String>,
    pub icons: Vec<String>,
}

impl Catalog {
    pub fn new(categories: Vec<String>, icons: Vec<String>) -> Self {
        Self { categories, icons }
    }

    /// Check that `group` can be stored on an event.
    pub fn check_group(&self, group: &str) -> AppResult<()> {
        if is_pseudo_category(group) {
            return Err(AppError::ReservedCategory(group.to_string()));
        }
        if !self.categories.iter().any(|c| c == group) {
            return Err(AppError::UnknownCategory(group.to_string()));
        }
        Ok(())
    }

    pub fn check_icon(&self, icon: Option<&str>) -> AppResult<()> {
        match icon {
            Some(name) if !self.icons.iter().any(|i| i == name) => {
                Err(AppError::UnknownIcon(name.to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Group used by `add` when none is given: the first configured
    /// category that can actually be stored.
    pub fn default_group(&self) -> Option<&str> {
        self.categories
            .iter()
            .map(String::as_str)
            .find(|c| !is_pseudo_category(c))
    }

    /// Selector used by `list` and `export` when none is given.
    pub fn default_selector(&self) -> &str {
        self.categories
            .first()
            .map(String::as_str)
            .unwrap_or(super::category::ALL)
    }
}
