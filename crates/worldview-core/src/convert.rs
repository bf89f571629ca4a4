// crates/worldview-core/src/convert.rs

//! Raw JSON → normalized model.

use crate::model::{Country, CountryName, Currency, Demonym, Flags, NativeName, ResolvedBorder};
use crate::raw::{BorderRaw, CountriesRaw, CountryRaw};

/// Canonical form of a country code: trimmed, upper-case.
pub fn canonical_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

pub fn from_raw(c: CountryRaw) -> Country {
    let native = c
        .name
        .native_name
        .into_iter()
        .map(|(lang, n)| {
            (
                lang,
                NativeName {
                    common: n.common,
                    official: n.official,
                },
            )
        })
        .collect();

    let currencies = c.currencies.map(|m| {
        m.into_iter()
            .map(|(code, cur)| {
                (
                    code,
                    Currency {
                        name: cur.name,
                        symbol: cur.symbol,
                    },
                )
            })
            .collect()
    });

    let demonyms = c.demonyms.map(|m| {
        m.into_iter()
            .map(|(lang, d)| {
                (
                    lang,
                    Demonym {
                        singular: d.singular,
                        f: d.f,
                        m: d.m,
                    },
                )
            })
            .collect()
    });

    Country {
        code: canonical_code(&c.cca2),
        name: CountryName {
            common: c.name.common,
            official: c.name.official,
            native,
        },
        region: c.region.unwrap_or_default(),
        subregion: c.subregion.filter(|s| !s.is_empty()),
        capital: c.capital,
        population: c.population,
        languages: c.languages,
        currencies,
        borders: c.borders.iter().map(|b| canonical_code(b)).collect(),
        flags: Flags {
            png: c.flags.png,
            svg: c.flags.svg,
            alt: c.flags.alt,
        },
        independent: c.independent,
        demonyms,
    }
}

pub fn countries_from_raw(raw: CountriesRaw) -> Vec<Country> {
    raw.into_iter().map(from_raw).collect()
}

pub fn border_from_raw(b: BorderRaw) -> ResolvedBorder {
    ResolvedBorder {
        name: b.name.common,
        code: canonical_code(&b.cca2),
    }
}
