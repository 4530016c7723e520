//! Category rules and pretty-name derivation.
//!
//! Rules are checked in order and the first match wins, so an entry that
//! matches several markers (e.g. a `Meetings` path and an `ops` tag) always
//! resolves to the earliest rule.

use crate::models::Category;
use regex::Regex;
use std::sync::OnceLock;

/// Field of the raw entry a rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Path,
    Filename,
    /// Exact membership in the tag list, not a substring match.
    Tag,
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: Field,
    pub marker: &'static str,
    pub category: Category,
}

const fn rule(field: Field, marker: &'static str, category: Category) -> Rule {
    Rule {
        field,
        marker,
        category,
    }
}

/// Ordered rule table.
///
/// `sim.` maps to sprint even though it sits after the `Extra` rule; kept
/// as observed in existing datasets.
pub const RULES: &[Rule] = &[
    rule(Field::Filename, "calendar", Category::Calendar),
    rule(Field::Path, "Meetings", Category::Calendar),
    rule(Field::Filename, "oncall", Category::Ops),
    rule(Field::Tag, "ops", Category::Ops),
    rule(Field::Name, "tt.", Category::Ops),
    rule(Field::Path, "Tasks", Category::Sprint),
    rule(Field::Path, "Extra", Category::Extra),
    rule(Field::Name, "sim.", Category::Sprint),
];

/// Borrowed view over the fields the rules inspect.
pub struct Subject<'a> {
    pub name: &'a str,
    pub path: &'a str,
    pub filename: &'a str,
    pub tags: &'a [String],
}

impl Rule {
    pub fn matches(&self, s: &Subject<'_>) -> bool {
        match self.field {
            Field::Name => s.name.contains(self.marker),
            Field::Path => s.path.contains(self.marker),
            Field::Filename => s.filename.contains(self.marker),
            Field::Tag => s.tags.iter().any(|t| t == self.marker),
        }
    }
}

pub fn classify(subject: &Subject<'_>) -> Category {
    RULES
        .iter()
        .find(|r| r.matches(subject))
        .map(|r| r.category)
        .unwrap_or(Category::Unknown)
}

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[\[[^\]]*\]\[([^\]]*)\]\]").expect("static regex"))
}

fn status_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(TODO|DONE|CANCELLED) ").expect("static regex"))
}

/// Display label: `[[target][label]]` → `label`, then drop one leading
/// `TODO ` / `DONE ` / `CANCELLED ` status word.
pub fn pretty_name(name: &str) -> String {
    let unlinked = link_re().replace_all(name, "$1");
    status_re().replace(&unlinked, "").into_owned()
}
