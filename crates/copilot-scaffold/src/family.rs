//! Component-family classification
//!
//! Component names are matched against an ordered rule table. The first
//! rule whose substring test passes decides the family; substrings are
//! case-sensitive. Keeping the table separate from rendering makes the
//! priority order testable on its own.

use serde::{Deserialize, Serialize};

/// Visual treatment of a button mockup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonStyle {
    Filled,
    Outlined,
    Text,
}

/// Family a component name resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentFamily {
    TextField { outlined: bool },
    Button(ButtonStyle),
    Checkbox,
    List { rows: u8 },
    Expansion,
    Card,
    Generic,
}

/// One classification rule
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Rule label, for diagnostics
    pub label: &'static str,
    /// Whether the rule applies to a component name
    pub matches: fn(&str) -> bool,
    /// Family for a matching name
    pub family: fn(&str) -> ComponentFamily,
}

/// Classification rules in priority order
pub const RULES: &[Rule] = &[
    Rule {
        label: "text-field",
        matches: is_text_field,
        family: text_field,
    },
    Rule {
        label: "button",
        matches: is_button,
        family: button,
    },
    Rule {
        label: "checkbox",
        matches: is_checkbox,
        family: checkbox,
    },
    Rule {
        label: "list",
        matches: is_list,
        family: list,
    },
    Rule {
        label: "expansion",
        matches: is_expansion,
        family: expansion,
    },
    Rule {
        label: "card",
        matches: is_card,
        family: card,
    },
];

impl ComponentFamily {
    /// Resolve a component name to its family
    #[must_use]
    pub fn classify(name: &str) -> Self {
        RULES
            .iter()
            .find(|rule| (rule.matches)(name))
            .map_or(Self::Generic, |rule| (rule.family)(name))
    }

    /// Label of the rule that matched `name`, if any
    #[must_use]
    pub fn matching_rule(name: &str) -> Option<&'static str> {
        RULES
            .iter()
            .find(|rule| (rule.matches)(name))
            .map(|rule| rule.label)
    }
}

fn is_text_field(name: &str) -> bool {
    name.contains("text-field") || name.contains("textfield")
}

fn text_field(name: &str) -> ComponentFamily {
    ComponentFamily::TextField {
        outlined: name.contains("outlined"),
    }
}

fn is_button(name: &str) -> bool {
    name.contains("button")
}

fn button(name: &str) -> ComponentFamily {
    let style = if name.contains("filled") {
        ButtonStyle::Filled
    } else if name.contains("outlined") {
        ButtonStyle::Outlined
    } else {
        ButtonStyle::Text
    };
    ComponentFamily::Button(style)
}

fn is_checkbox(name: &str) -> bool {
    name.contains("checkbox")
}

fn checkbox(_: &str) -> ComponentFamily {
    ComponentFamily::Checkbox
}

fn is_list(name: &str) -> bool {
    name.contains("list")
}

fn list(name: &str) -> ComponentFamily {
    let rows = if name.contains("list-item") { 1 } else { 3 };
    ComponentFamily::List { rows }
}

fn is_expansion(name: &str) -> bool {
    name.contains("expansion") || name.contains("accordion")
}

fn expansion(_: &str) -> ComponentFamily {
    ComponentFamily::Expansion
}

fn is_card(name: &str) -> bool {
    name.contains("card")
}

fn card(_: &str) -> ComponentFamily {
    ComponentFamily::Card
}
