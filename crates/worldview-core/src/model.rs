// crates/worldview-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A country entry in normalized form.
///
/// The type parameter is the border representation: raw neighbour codes
/// (`String`) straight from the source, or [`ResolvedBorder`] once the codes
/// have been turned into display names (see [`CountryDetail`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country<B = String> {
    /// Canonical identifier: upper-case ISO 3166-1 alpha-2 (`cca2`).
    pub code: String,
    pub name: CountryName,
    pub region: String,
    pub subregion: Option<String>,
    pub capital: Vec<String>,
    pub population: u64,
    /// Language code → display name, e.g. `"deu" → "German"`.
    pub languages: Option<BTreeMap<String, String>>,
    /// Currency code → name and symbol.
    pub currencies: Option<BTreeMap<String, Currency>>,
    pub borders: Vec<B>,
    pub flags: Flags,
    pub independent: Option<bool>,
    pub demonyms: Option<BTreeMap<String, Demonym>>,
}

/// A country with its neighbour codes resolved into names.
pub type CountryDetail = Country<ResolvedBorder>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
    /// `(language code, name)` pairs in source order.
    pub native: Vec<(String, NativeName)>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeName {
    pub common: String,
    pub official: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    pub png: String,
    pub svg: String,
    pub alt: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demonym {
    pub singular: Option<String>,
    pub f: Option<String>,
    pub m: Option<String>,
}

/// A neighbour reference resolved into something a link can show.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedBorder {
    pub name: String,
    pub code: String,
}

impl<B> Country<B> {
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Common name, the sort and search key of the catalog.
    pub fn name(&self) -> &str {
        &self.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.name.official
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn subregion(&self) -> Option<&str> {
        self.subregion.as_deref()
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn borders(&self) -> &[B] {
        &self.borders
    }

    pub fn has_borders(&self) -> bool {
        !self.borders.is_empty()
    }

    /// Swaps the border list, keeping every other attribute.
    pub fn with_borders<N>(self, borders: Vec<N>) -> Country<N> {
        Country {
            code: self.code,
            name: self.name,
            region: self.region,
            subregion: self.subregion,
            capital: self.capital,
            population: self.population,
            languages: self.languages,
            currencies: self.currencies,
            borders,
            flags: self.flags,
            independent: self.independent,
            demonyms: self.demonyms,
        }
    }

    /// Capitals joined with ", ", or `"N/A"`.
    pub fn capital_display(&self) -> String {
        if self.capital.is_empty() {
            "N/A".to_string()
        } else {
            self.capital.join(", ")
        }
    }

    /// Official native name of the first language entry the source lists.
    pub fn native_official_name(&self) -> Option<&str> {
        self.name
            .native
            .first()
            .map(|(_, n)| n.official.as_str())
            .filter(|s| !s.is_empty())
    }

    /// English demonym: singular form, else feminine, else masculine.
    pub fn demonym(&self) -> Option<&str> {
        let eng = self.demonyms.as_ref()?.get("eng")?;
        eng.singular
            .as_deref()
            .or(eng.f.as_deref())
            .or(eng.m.as_deref())
    }

    pub fn currency_names(&self) -> Vec<&str> {
        self.currencies
            .iter()
            .flat_map(|m| m.values())
            .map(|c| c.name.as_str())
            .collect()
    }

    pub fn language_names(&self) -> Vec<&str> {
        self.languages
            .iter()
            .flat_map(|m| m.values())
            .map(String::as_str)
            .collect()
    }

    pub fn independence_status(&self) -> &'static str {
        match self.independent {
            Some(true) => "Independent Country",
            Some(false) => "Dependent Territory",
            None => "Status Unknown",
        }
    }

    /// Population with thousands separators, e.g. `83,240,525`.
    pub fn population_display(&self) -> String {
        group_thousands(self.population)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Country<String> {
    /// Raw neighbour codes awaiting resolution.
    pub fn border_codes(&self) -> &[String] {
        &self.borders
    }
}

/// Coarse geographic grouping used as the catalog's filter facet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Americas,
    Antarctic,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Africa,
        Region::Americas,
        Region::Antarctic,
        Region::Asia,
        Region::Europe,
        Region::Oceania,
    ];

    /// Regions offered by the catalog's selector.
    pub const SELECTABLE: [Region; 5] = [
        Region::Africa,
        Region::Americas,
        Region::Asia,
        Region::Europe,
        Region::Oceania,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Antarctic => "Antarctic",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRegion(pub String);

impl fmt::Display for UnknownRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown region '{}'", self.0)
    }
}

impl std::error::Error for UnknownRegion {}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(code: &str, common: &str) -> Country {
        Country {
            code: code.into(),
            name: CountryName {
                common: common.into(),
                official: format!("Republic of {common}"),
                native: Vec::new(),
            },
            region: "Europe".into(),
            subregion: None,
            capital: Vec::new(),
            population: 0,
            languages: None,
            currencies: None,
            borders: vec!["DEU".into()],
            flags: Flags::default(),
            independent: None,
            demonyms: None,
        }
    }

    #[test]
    fn region_parses_case_insensitively() {
        assert_eq!("europe".parse::<Region>(), Ok(Region::Europe));
        assert_eq!(" AMERICAS ".parse::<Region>(), Ok(Region::Americas));
        assert!("Atlantis".parse::<Region>().is_err());
        assert_eq!(Region::Oceania.to_string(), "Oceania");
    }

    #[test]
    fn population_is_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(83_240_525), "83,240,525");
    }

    #[test]
    fn display_helpers_fall_back() {
        let mut c = bare("FR", "France");
        assert_eq!(c.capital_display(), "N/A");
        assert_eq!(c.independence_status(), "Status Unknown");
        assert!(c.demonym().is_none());
        assert!(c.native_official_name().is_none());
        assert!(c.currency_names().is_empty());

        c.capital = vec!["Paris".into()];
        c.independent = Some(true);
        c.demonyms = Some(BTreeMap::from([(
            "eng".to_string(),
            Demonym {
                singular: None,
                f: None,
                m: Some("French".into()),
            },
        )]));
        assert_eq!(c.capital_display(), "Paris");
        assert_eq!(c.independence_status(), "Independent Country");
        assert_eq!(c.demonym(), Some("French"));
    }

    #[test]
    fn demonym_prefers_singular_then_feminine() {
        let mut c = bare("XI", "Xia");
        let eng = Demonym {
            singular: Some("Xian".into()),
            f: Some("Xianne".into()),
            m: Some("Xiano".into()),
        };
        c.demonyms = Some(BTreeMap::from([("eng".to_string(), eng.clone())]));
        assert_eq!(c.demonym(), Some("Xian"));

        c.demonyms = Some(BTreeMap::from([(
            "eng".to_string(),
            Demonym {
                singular: None,
                ..eng
            },
        )]));
        assert_eq!(c.demonym(), Some("Xianne"));
    }

    #[test]
    fn with_borders_keeps_everything_else() {
        let c = bare("FR", "France");
        let detail: CountryDetail = c.clone().with_borders(vec![ResolvedBorder {
            name: "Germany".into(),
            code: "DE".into(),
        }]);
        assert_eq!(detail.code(), "FR");
        assert_eq!(detail.name, c.name);
        assert_eq!(detail.borders()[0].name, "Germany");
    }
}
