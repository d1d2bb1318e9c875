//! Normalization of Turkish free-text labels
//!
//! Business names, month fields and district ids arrive from the backend as
//! free text with inconsistent diacritics. Everything here is total: unknown
//! input maps to a documented default, never to an error.

use serde::{Deserialize, Serialize};

/// Suffix carried by every forestry business name in the registry
pub const BUSINESS_SUFFIX: &str = " Orman İşletmesi";

// ============================================================================
// Character folding
// ============================================================================

/// Fold a Turkish-specific letter onto its ASCII base letter.
///
/// Upper-case forms fold to lower-case ASCII. Other characters pass through.
pub fn fold_turkish(c: char) -> char {
    match c {
        'ç' | 'Ç' => 'c',
        'ğ' | 'Ğ' => 'g',
        'ı' | 'İ' => 'i',
        'ö' | 'Ö' => 'o',
        'ş' | 'Ş' => 's',
        'ü' | 'Ü' => 'u',
        other => other,
    }
}

/// Slug used as a district id for names missing from the district table.
///
/// Lower-cases, joins whitespace runs with a single hyphen and folds Turkish
/// letters. Idempotent.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        // Fold before lower-casing so 'İ' never becomes "i\u{307}"
        slug.extend(fold_turkish(c).to_lowercase());
    }

    slug
}

// ============================================================================
// Business name -> district id
// ============================================================================

/// Hand-maintained district ids for registry business names, including the
/// ASCII spellings that show up in older rows.
fn known_district_id(business_name: &str) -> Option<&'static str> {
    let id = match business_name {
        "Bursa Merkez Orman İşletmesi" => "bursa-merkez",
        "Gemlik Orman İşletmesi" => "bursa-gemlik",
        "İnegöl Orman İşletmesi" | "Inegol Orman İşletmesi" => "bursa-inegol",
        "İznik Orman İşletmesi" => "bursa-iznik",
        "Orhaneli Orman İşletmesi" => "bursa-orhaneli",
        "Mustafakemalpaşa Orman İşletmesi" => "bursa-mkpasa",
        "Karacabey Orman İşletmesi" => "bursa-karacabey",
        "Keles Orman İşletmesi" => "bursa-keles",
        "Bilecik Merkez Orman İşletmesi" => "bilecik-merkez",
        "Bozüyük Orman İşletmesi" | "Bozuyuk Orman İşletmesi" => "bilecik-bozuyuk",
        "Yalova Merkez Orman İşletmesi" => "yalova-merkez",
        _ => return None,
    };
    Some(id)
}

/// Resolve the map district id for a business name.
///
/// Known names use the district table; anything else gets [`slugify`].
/// Returns `None` only for an absent or empty name, in which case callers
/// fall back to the business's own id.
pub fn resolve_district_id(business_name: Option<&str>) -> Option<String> {
    let name = business_name.filter(|n| !n.is_empty())?;
    Some(
        known_district_id(name)
            .map(str::to_string)
            .unwrap_or_else(|| slugify(name)),
    )
}

/// Chart label for a business: the name without the " Orman İşletmesi" suffix
pub fn short_business_name(name: &str) -> String {
    name.replacen(BUSINESS_SUFFIX, "", 1)
}

// ============================================================================
// Months
// ============================================================================

/// Calendar month as shown on the monthly fire chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Three-letter Turkish chart label
    pub fn label(&self) -> &'static str {
        match self {
            Month::January => "Oca",
            Month::February => "Şub",
            Month::March => "Mar",
            Month::April => "Nis",
            Month::May => "May",
            Month::June => "Haz",
            Month::July => "Tem",
            Month::August => "Ağu",
            Month::September => "Eyl",
            Month::October => "Eki",
            Month::November => "Kas",
            Month::December => "Ara",
        }
    }

    /// Lower-case spellings accepted in the incident month field
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Month::January => &["ocak", "january"],
            Month::February => &["şubat", "subat", "february"],
            Month::March => &["mart", "march"],
            Month::April => &["nisan", "april"],
            Month::May => &["mayıs", "mayis", "may"],
            Month::June => &["haziran", "june"],
            Month::July => &["temmuz", "july"],
            Month::August => &["ağustos", "agustos", "august"],
            Month::September => &["eylül", "eylul", "september"],
            Month::October => &["ekim", "october"],
            Month::November => &["kasım", "kasim", "november"],
            Month::December => &["aralık", "aralik", "december"],
        }
    }

    /// Zero-based position in the calendar
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Match a free-text month value against every alias, ignoring case and
    /// surrounding whitespace.
    pub fn from_source(raw: &str) -> Option<Month> {
        let lower = raw.trim().to_lowercase();
        Month::ALL
            .into_iter()
            .find(|month| month.aliases().iter().any(|alias| *alias == lower))
    }
}

/// Count incident month values per calendar month.
///
/// Values that match no alias are not attributed anywhere.
pub fn tally_months<'a, I>(values: I) -> [u64; 12]
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts = [0u64; 12];
    for month in values.into_iter().flatten().filter_map(Month::from_source) {
        counts[month.index()] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // District id tests
    // ========================================================================

    #[test]
    fn test_known_names_use_table() {
        assert_eq!(
            resolve_district_id(Some("Gemlik Orman İşletmesi")).as_deref(),
            Some("bursa-gemlik")
        );
        assert_eq!(
            resolve_district_id(Some("Mustafakemalpaşa Orman İşletmesi")).as_deref(),
            Some("bursa-mkpasa")
        );
        assert_eq!(
            resolve_district_id(Some("Inegol Orman İşletmesi")),
            resolve_district_id(Some("İnegöl Orman İşletmesi"))
        );
    }

    #[test]
    fn test_unknown_names_are_slugged() {
        assert_eq!(
            resolve_district_id(Some("Çanakkale Orman İşletmesi")).as_deref(),
            Some("canakkale-orman-isletmesi")
        );
        assert_eq!(slugify("Söğüt   Şefliği"), "sogut-sefligi");
        assert_eq!(slugify("IĞDIR"), "igdir");
    }

    #[test]
    fn test_empty_name_is_none() {
        assert_eq!(resolve_district_id(None), None);
        assert_eq!(resolve_district_id(Some("")), None);
    }

    #[test]
    fn test_slug_is_idempotent() {
        let once = slugify("Yenişehir Orman İşletmesi");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_short_business_name() {
        assert_eq!(short_business_name("Keles Orman İşletmesi"), "Keles");
        assert_eq!(short_business_name("Merkez"), "Merkez");
    }

    // ========================================================================
    // Month tests
    // ========================================================================

    #[test]
    fn test_month_aliases() {
        assert_eq!(Month::from_source("Ağustos"), Some(Month::August));
        assert_eq!(Month::from_source("agustos"), Some(Month::August));
        assert_eq!(Month::from_source("AUGUST"), Some(Month::August));
        assert_eq!(Month::from_source(" Mayis "), Some(Month::May));
        assert_eq!(Month::from_source("Ağu"), None);
        assert_eq!(Month::from_source(""), None);
    }

    #[test]
    fn test_labels_follow_calendar_order() {
        let labels: Vec<&str> = Month::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec!["Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara"]
        );
        assert_eq!(Month::December.index(), 11);
    }

    #[test]
    fn test_tally_months() {
        let values = [
            Some("Temmuz"),
            Some("july"),
            Some("Ağustos"),
            None,
            Some("not a month"),
        ];
        let counts = tally_months(values);
        assert_eq!(counts[Month::July.index()], 2);
        assert_eq!(counts[Month::August.index()], 1);
        assert_eq!(counts.iter().sum::<u64>(), 3);
    }
}
