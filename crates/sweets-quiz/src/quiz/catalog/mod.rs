mod import;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use super::domain::{Item, ItemId};

const BUILTIN_CATALOG: &str = include_str!("../../../data/sweets.json");

/// Read-only sweets catalog. Construction validates that the catalog is non-empty and that
/// ids are unique, so scoring never has to handle an empty catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }

        Ok(Self { items })
    }

    /// Catalog bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_reader(BUILTIN_CATALOG.as_bytes())
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_reader(reader)?;
        Self::new(items)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::new(import::parse_items(reader)?)
    }

    /// Loads a catalog file. Files ending in `.csv` are read as a spreadsheet export,
    /// anything else as a JSON array.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            Self::from_csv_reader(file)
        } else {
            Self::from_json_reader(std::io::BufReader::new(file))
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed catalog; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Failure to build a usable catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog contains no items")]
    Empty,
    #[error("catalog contains duplicate item id {0}")]
    DuplicateId(ItemId),
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog CSV: {0}")]
    Csv(#[from] csv::Error),
}
