use serde::Serialize;
use std::fmt;

/// Group marker for events that repeat every year on the same day/month.
pub const RECURRING_GROUP: &str = "_birthdays";

/// Pseudo-category selecting every event.
pub const ALL: &str = "_all";
/// Pseudo-category selecting events due within the next week.
pub const WEEK: &str = "_week";
/// Pseudo-category selecting everything except recurring events.
pub const EVENTS: &str = "_events";

/// Names that only exist as list filters and never as a stored group.
pub const PSEUDO_CATEGORIES: [&str; 3] = [ALL, WEEK, EVENTS];

/// A list selector: one of the pseudo-categories or a concrete group name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Category {
    All,
    Week,
    Events,
    Named(String),
}

impl Category {
    pub fn parse(s: &str) -> Self {
        match s {
            ALL => Category::All,
            WEEK => Category::Week,
            EVENTS => Category::Events,
            other => Category::Named(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::All => ALL,
            Category::Week => WEEK,
            Category::Events => EVENTS,
            Category::Named(name) => name,
        }
    }

    pub fn is_pseudo(&self) -> bool {
        !matches!(self, Category::Named(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_pseudo_category(name: &str) -> bool {
    PSEUDO_CATEGORIES.contains(&name)
}

pub fn is_recurring_group(group: &str) -> bool {
    group == RECURRING_GROUP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reserved_selectors() {
        assert_eq!(Category::parse("_all"), Category::All);
        assert_eq!(Category::parse("_week"), Category::Week);
        assert_eq!(Category::parse("_events"), Category::Events);
        assert_eq!(
            Category::parse("_birthdays"),
            Category::Named("_birthdays".into())
        );
        assert_eq!(Category::parse("work"), Category::Named("work".into()));
    }

    #[test]
    fn display_round_trips_names() {
        for name in ["_all", "_week", "_events", "work"] {
            assert_eq!(Category::parse(name).to_string(), name);
        }
        assert!(Category::Week.is_pseudo());
        assert!(!Category::Named("_birthdays".into()).is_pseudo());
    }
}
