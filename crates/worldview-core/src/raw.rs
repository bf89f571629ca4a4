// crates/worldview-core/src/raw.rs
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Raw country structure as it comes from the REST Countries JSON.
/// NOTE: This type mirrors the external API and may change with its versions.
/// We do *not* expose this type from the public API.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub cca2: String,
    pub name: NameRaw,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub languages: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub currencies: Option<BTreeMap<String, CurrencyRaw>>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub flags: FlagsRaw,
    /// Only present on full-record (`/alpha/{code}`) responses.
    #[serde(default)]
    pub independent: Option<bool>,
    #[serde(default)]
    pub demonyms: Option<BTreeMap<String, DemonymRaw>>,
}

/// { "common": "Germany", "official": "Federal Republic of Germany", "nativeName": {...} }
#[derive(Debug, Deserialize)]
pub struct NameRaw {
    pub common: String,
    #[serde(default)]
    pub official: String,
    /// Entries in source order.
    #[serde(rename = "nativeName", default, deserialize_with = "ordered_entries")]
    pub native_name: Vec<(String, NativeNameRaw)>,
}

#[derive(Debug, Deserialize)]
pub struct NativeNameRaw {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Some territories list a currency without a symbol.
#[derive(Debug, Deserialize)]
pub struct CurrencyRaw {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DemonymRaw {
    #[serde(default)]
    pub singular: Option<String>,
    #[serde(default)]
    pub f: Option<String>,
    #[serde(default)]
    pub m: Option<String>,
}

/// Entry of the batch `/alpha?codes=...&fields=cca2,name` projection.
#[derive(Debug, Deserialize)]
pub struct BorderRaw {
    pub cca2: String,
    pub name: BorderNameRaw,
}

#[derive(Debug, Deserialize)]
pub struct BorderNameRaw {
    pub common: String,
}

/// `/alpha/{code}` answers with an array on current API versions and with a
/// bare object on older ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::Many(v) => v.into_iter().next(),
            OneOrMany::One(t) => Some(t),
        }
    }
}

pub type CountriesRaw = Vec<CountryRaw>;

/// Decodes a JSON object into its entries, keeping document order.
/// `null` decodes as no entries.
fn ordered_entries<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct Entries<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for Entries<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object or null")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                out.push(entry);
            }
            Ok(out)
        }
    }

    deserializer.deserialize_any(Entries(PhantomData))
}
