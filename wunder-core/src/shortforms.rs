//! State/country abbreviation handling applied to locations before querying.
//!
//! The upstream geocoder resolves bare two-letter codes as US states, so
//! "london, uk" finds nothing until the code is spelled out, and codes like
//! "ca" are ambiguous between California and Canada. Substitution runs in two
//! stages: [`Shortforms::expand`] rewrites codes that can only mean a
//! country, and [`Shortforms::resolve_conflict`] offers the country reading
//! of an ambiguous code after the state reading has failed to resolve.

/// Abbreviation substitution collaborator.
pub trait Shortforms {
    /// Best-effort substitution of unambiguous country shortforms; returns
    /// the location unchanged when nothing matches.
    fn expand(&self, location: &str) -> String;

    /// Alternate substitution for a shortform that collides with a state
    /// code, or `None` when the location holds no such code.
    fn resolve_conflict(&self, location: &str) -> Option<String>;
}

/// Country shortforms that are not also US state or Canadian province codes.
const COUNTRY_SHORTFORMS: &[(&str, &str)] = &[
    ("at", "Austria"),
    ("au", "Australia"),
    ("be", "Belgium"),
    ("br", "Brazil"),
    ("ch", "Switzerland"),
    ("cn", "China"),
    ("cz", "Czech Republic"),
    ("dk", "Denmark"),
    ("es", "Spain"),
    ("fi", "Finland"),
    ("fr", "France"),
    ("gb", "United Kingdom"),
    ("ie", "Ireland"),
    ("it", "Italy"),
    ("jp", "Japan"),
    ("mx", "Mexico"),
    ("nl", "Netherlands"),
    ("nz", "New Zealand"),
    ("pl", "Poland"),
    ("pt", "Portugal"),
    ("ru", "Russia"),
    ("se", "Sweden"),
    ("uk", "United Kingdom"),
    ("za", "South Africa"),
];

/// Country shortforms that collide with a state code; tried only after the
/// state reading produced no match.
const CONFLICTING_SHORTFORMS: &[(&str, &str)] = &[
    ("al", "Albania"),
    ("ar", "Argentina"),
    ("ca", "Canada"),
    ("co", "Colombia"),
    ("de", "Germany"),
    ("id", "Indonesia"),
    ("in", "India"),
    ("md", "Moldova"),
    ("mt", "Malta"),
    ("pa", "Panama"),
];

/// Table-backed [`Shortforms`] implementation matching on the text after the
/// last comma.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateCountryShortforms;

impl Shortforms for StateCountryShortforms {
    fn expand(&self, location: &str) -> String {
        substitute(location, COUNTRY_SHORTFORMS)
            .unwrap_or_else(|| location.to_string())
    }

    fn resolve_conflict(&self, location: &str) -> Option<String> {
        substitute(location, CONFLICTING_SHORTFORMS)
    }
}

fn substitute(location: &str, table: &[(&str, &str)]) -> Option<String> {
    let (head, tail) = location.rsplit_once(',')?;
    let code = tail.trim();

    let full = table
        .iter()
        .find(|(short, _)| code.eq_ignore_ascii_case(short))
        .map(|(_, full)| full)?;

    Some(format!("{}, {}", head.trim_end(), full))
}
