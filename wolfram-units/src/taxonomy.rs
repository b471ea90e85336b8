//! Unit taxonomy - category name to unit strings
//!
//! The table is built once and never mutated. Every unit string belongs to
//! exactly one category, which is what makes `resolve_category` unambiguous;
//! construction rejects any table that breaks that rule.

use std::collections::HashMap;
use crate::catalog::BUILTIN;
use crate::TaxonomyError;

/// A unit string paired with its lowercased form
#[derive(Debug, Clone)]
pub(crate) struct UnitEntry {
    pub(crate) name: String,
    pub(crate) folded: String,
}

impl UnitEntry {
    fn new(name: String) -> Self {
        let folded = name.to_lowercase();
        UnitEntry { name, folded }
    }
}

/// A physical quantity and the unit strings that denote it
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    entries: Vec<UnitEntry>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit strings in table order
    pub fn units(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.entries.iter().any(|e| e.name == unit)
    }

    pub(crate) fn entries(&self) -> &[UnitEntry] {
        &self.entries
    }
}

/// Read-only registry of all unit categories
#[derive(Debug, Clone)]
pub struct UnitTaxonomy {
    categories: Vec<Category>,
    /// unit string -> position in `categories`
    index: HashMap<String, usize>,
}

impl UnitTaxonomy {
    /// The built-in table: 40 categories covering mechanics, thermal,
    /// electrical, fluid, optical, nuclear and monetary quantities.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::from_categories(
            BUILTIN
                .iter()
                .map(|(name, units)| (*name, units.iter().copied())),
        )
    }

    /// Build and validate a taxonomy from `(category, units)` pairs.
    ///
    /// Category order is kept as given. Fails on a repeated category name,
    /// an empty unit string, or a unit string listed twice anywhere.
    pub fn from_categories<I, S, U>(categories: I) -> Result<Self, TaxonomyError>
    where
        I: IntoIterator<Item = (S, U)>,
        S: Into<String>,
        U: IntoIterator,
        U::Item: Into<String>,
    {
        let mut taxonomy = UnitTaxonomy {
            categories: Vec::new(),
            index: HashMap::new(),
        };

        for (name, units) in categories {
            taxonomy.register(name.into(), units.into_iter().map(Into::into))?;
        }

        tracing::debug!(
            categories = taxonomy.categories.len(),
            units = taxonomy.index.len(),
            "unit taxonomy built"
        );
        Ok(taxonomy)
    }

    fn register(
        &mut self,
        name: String,
        units: impl Iterator<Item = String>,
    ) -> Result<(), TaxonomyError> {
        if self.categories.iter().any(|c| c.name == name) {
            return Err(TaxonomyError::DuplicateCategory(name));
        }

        let position = self.categories.len();
        let mut entries = Vec::new();

        for unit in units {
            if unit.is_empty() {
                return Err(TaxonomyError::EmptyUnit { category: name });
            }
            if let Some(&owner) = self.index.get(&unit) {
                let first = if owner == position {
                    name.clone()
                } else {
                    self.categories[owner].name.clone()
                };
                return Err(TaxonomyError::DuplicateUnit { unit, first, second: name });
            }
            self.index.insert(unit.clone(), position);
            entries.push(UnitEntry::new(unit));
        }

        self.categories.push(Category { name, entries });
        Ok(())
    }

    /// Category containing `unit`, matched exactly and case-sensitively.
    ///
    /// `None` is an ordinary answer for strings outside the table.
    pub fn resolve_category(&self, unit: &str) -> Option<&Category> {
        self.index.get(unit).map(|&i| &self.categories[i])
    }

    /// Look up a category by name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// All categories in registration order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every unit string across all categories
    pub fn units(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().flat_map(|c| c.units())
    }

    pub fn unit_count(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &UnitEntry> + '_ {
        self.categories.iter().flat_map(|c| c.entries.iter())
    }
}
