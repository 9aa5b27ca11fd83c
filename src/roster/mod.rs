pub mod member;
pub mod parse;

use anyhow::Result;
use tracing::warn;

pub use member::Member;

/// Two-stage pipeline: response text → composite row values → member records.
pub fn parse_members(text: &str) -> Result<Vec<Member>> {
    let composites = parse::composite_values(text)?;
    let mut members = Vec::with_capacity(composites.len());

    for (row, raw) in composites {
        match Member::parse(raw.trim()) {
            Some(m) => members.push(m),
            None => warn!("Skipping row {}: composite field has fewer than 3 segments", row),
        }
    }

    Ok(members)
}

/// Display names of every member with at least one name half, in row order.
pub fn extract_names(text: &str) -> Result<Vec<String>> {
    Ok(parse_members(text)?
        .iter()
        .filter_map(Member::display_name)
        .collect())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whitelist::Whitelist;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.csv", name)).unwrap()
    }

    #[test]
    fn neustadt_roster() {
        let members = parse_members(&fixture("g0353")).unwrap();
        // The truncated trailer row is dropped, the three real members survive.
        assert_eq!(members.len(), 3);
        assert_eq!(members[0].last_name, "Mustermann");
        assert_eq!(members[0].dwz, Some(2105));
        assert_eq!(members[1].first_name, "");
        assert_eq!(members[2].first_name, "Jürgen");
    }

    #[test]
    fn neustadt_names() {
        let names = extract_names(&fixture("g0353")).unwrap();
        assert_eq!(names, vec!["Max Mustermann", "Schmidt", "Jürgen Köhler"]);
    }

    #[test]
    fn roster_without_member_column_yields_nothing() {
        let text = "vkz;verein;ort\nG0353;Schachfreunde Neustadt;Neustadt\n";
        assert!(extract_names(text).unwrap().is_empty());
    }

    #[test]
    fn empty_response_yields_nothing() {
        assert!(extract_names("").unwrap().is_empty());
    }

    #[test]
    fn two_club_aggregation_dedupes_preserving_order() {
        let mut names = extract_names(&fixture("g0353")).unwrap();
        names.extend(extract_names(&fixture("g0314")).unwrap());

        let whitelist = Whitelist::from_names(names);
        assert_eq!(
            whitelist.players,
            vec!["Max Mustermann", "Schmidt", "Jürgen Köhler", "Anna Weber"]
        );
    }
}
