//! OS → architecture → package type → Java version → bundle → release narrowing.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::Release;

/// Catalog fields the selection hierarchy narrows on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseField {
    Os,
    Architecture,
    PackageType,
    FeatureVersion,
    BundleType,
}

impl ReleaseField {
    fn value(self, release: &Release) -> Option<String> {
        let value = match self {
            ReleaseField::Os => release.os.clone(),
            ReleaseField::Architecture => release.architecture.clone(),
            ReleaseField::PackageType => release.package_type.clone(),
            ReleaseField::FeatureVersion => release.feature_version?.to_string(),
            ReleaseField::BundleType => release.bundle_type.clone(),
        };
        Some(value).filter(|v| !v.is_empty())
    }
}

/// Distinct non-empty values of `field` among releases matching every filter.
///
/// Java feature versions sort numerically, everything else alphabetically.
pub fn unique_values(
    releases: &[Release],
    field: ReleaseField,
    filters: &[(ReleaseField, &str)],
) -> Vec<String> {
    let values: BTreeSet<String> = releases
        .iter()
        .filter(|release| {
            filters
                .iter()
                .all(|(key, expected)| key.value(release).as_deref() == Some(*expected))
        })
        .filter_map(|release| field.value(release))
        .collect();

    let mut values: Vec<String> = values.into_iter().collect();
    if field == ReleaseField::FeatureVersion {
        values.sort_by_key(|v| v.parse::<u32>().unwrap_or(u32::MAX));
    }
    values
}

/// A fully narrowed selection, minus the final release pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseQuery {
    pub os: String,
    pub architecture: String,
    pub package_type: String,
    pub feature_version: u32,
    /// `None` when the catalog carries no bundle types for this combination.
    pub bundle_type: Option<String>,
}

impl ReleaseQuery {
    pub fn matches(&self, release: &Release) -> bool {
        release.os == self.os
            && release.architecture == self.architecture
            && release.package_type == self.package_type
            && release.feature_version == Some(self.feature_version)
            && self.bundle_type.as_ref().is_none_or(|bundle| &release.bundle_type == bundle)
    }
}

/// Releases satisfying `query`, newest version first.
pub fn matching<'a>(releases: &'a [Release], query: &ReleaseQuery) -> Vec<&'a Release> {
    let mut found: Vec<&Release> = releases.iter().filter(|r| query.matches(r)).collect();
    found.sort_by(|a, b| compare_versions(&b.version, &a.version));
    found
}

/// Compare version strings treating digit runs as numbers, so `21.0.10 > 21.0.9`.
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let left_tokens = tokenize(left);
    let right_tokens = tokenize(right);

    for (l, r) in left_tokens.iter().zip(right_tokens.iter()) {
        let ordering = match (l, r) {
            (Token::Number(a), Token::Number(b)) => a.cmp(b),
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            (Token::Number(_), Token::Text(_)) => Ordering::Greater,
            (Token::Text(_), Token::Number(_)) => Ordering::Less,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    left_tokens.len().cmp(&right_tokens.len())
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Number(u64),
    Text(&'a str),
}

fn tokenize(value: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let bytes = value.as_bytes();

    while start < bytes.len() {
        let digit = bytes[start].is_ascii_digit();
        let end = bytes[start..]
            .iter()
            .position(|b| b.is_ascii_digit() != digit)
            .map_or(bytes.len(), |offset| start + offset);
        let run = &value[start..end];
        tokens.push(match run.parse::<u64>() {
            Ok(number) if digit => Token::Number(number),
            _ => Token::Text(run),
        });
        start = end;
    }
    tokens
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn comparison_is_antisymmetric(a in "[0-9a-z.+]{0,12}", b in "[0-9a-z.+]{0,12}") {
            prop_assert_eq!(compare_versions(&a, &b), compare_versions(&b, &a).reverse());
        }

        #[test]
        fn patch_numbers_compare_as_numbers(major in 1u32..40, x in 0u32..500, y in 0u32..500) {
            let left = format!("{}.0.{}", major, x);
            let right = format!("{}.0.{}", major, y);
            prop_assert_eq!(compare_versions(&left, &right), x.cmp(&y));
        }
    }
}
