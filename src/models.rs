// src/models.rs

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;

/// A named, ordered list of shell commands that is executed as a unit.
///
/// Packs are built from one entry of the configuration document and are
/// immutable for the duration of a run; the configuration file is never
/// written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    pub name: String,
    pub commands: Vec<String>,
}

impl Pack {
    pub fn new(name: impl Into<String>, commands: Vec<String>) -> Self {
        Self {
            name: name.into(),
            commands,
        }
    }

    /// Number of commands in this pack.
    pub fn count(&self) -> usize {
        self.commands.len()
    }
}

/// An ordered collection of [`Pack`]s, keyed by pack name.
///
/// Iteration order is the order in which packs appear in the configuration
/// document. Names are unique: a duplicated key in the document keeps its
/// first position but takes the last value, matching JSON object semantics.
#[derive(Debug, Clone, Default)]
pub struct PackCatalog {
    packs: Vec<Pack>,
}

impl PackCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Pack> {
        self.packs.iter().find(|p| p.name == name)
    }

    /// Iterates packs in configuration-document order.
    pub fn iter(&self) -> impl Iterator<Item = &Pack> {
        self.packs.iter()
    }

    /// Inserts a pack, replacing the commands of an existing pack with the
    /// same name while keeping its original position.
    pub fn insert(&mut self, pack: Pack) {
        match self.packs.iter_mut().find(|p| p.name == pack.name) {
            Some(existing) => existing.commands = pack.commands,
            None => self.packs.push(pack),
        }
    }
}

impl FromIterator<Pack> for PackCatalog {
    fn from_iter<I: IntoIterator<Item = Pack>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for pack in iter {
            catalog.insert(pack);
        }
        catalog
    }
}

// Deserialized by hand rather than through an ordered map type: the document
// is a single JSON object and the visitor sees its entries in document
// order, which is exactly the enumeration order the selector must present.
impl<'de> Deserialize<'de> for PackCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = PackCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of pack names to lists of command strings")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut catalog = PackCatalog::new();
                while let Some((name, commands)) = access.next_entry::<String, Vec<String>>()? {
                    catalog.insert(Pack::new(name, commands));
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// The outcome of running one pack: every command visited, in order, with
/// the formatted message of each failure. Reported to the user and returned
/// to the caller; never persisted.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Commands visited (execution never stops early, so this equals the
    /// pack's `count` after a full run).
    pub attempted: usize,
    /// Formatted failure messages, in execution order.
    pub errors: Vec<String>,
}

impl RunReport {
    /// Commands that exited successfully.
    pub fn succeeded(&self) -> usize {
        self.attempted - self.errors.len()
    }
}

/// Static identity of the application, shown in the opening and closing
/// banners. Built once at startup and handed to the session; nothing else
/// reads it.
#[derive(Debug, Clone, Copy)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub donate: &'static str,
    pub paypal: &'static str,
    pub copyright: &'static str,
}

impl AppInfo {
    pub fn from_build_env() -> Self {
        Self {
            name: "Commandoro",
            version: env!("CARGO_PKG_VERSION"),
            author: "Aleksandr Suvorov",
            description: env!("CARGO_PKG_DESCRIPTION"),
            donate: "Donate: https://yoomoney.ru/to/4100115206129186",
            paypal: "https://www.paypal.com/paypalme/myhackband",
            copyright: "Copyright © 2020-2021 Aleksandr Suvorov",
        }
    }
}
