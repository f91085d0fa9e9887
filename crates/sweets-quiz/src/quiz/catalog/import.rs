use std::collections::BTreeSet;
use std::io::Read;

use serde::{Deserialize, Deserializer};

use crate::quiz::domain::{Item, ItemId};

const TAG_SEPARATOR: char = '|';

/// Reads a spreadsheet export with one sweet per row. Multi-valued columns hold
/// `|`-separated tags.
pub(crate) fn parse_items<R: Read>(reader: R) -> Result<Vec<Item>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut items = Vec::new();

    for record in csv_reader.deserialize::<CatalogRow>() {
        items.push(record?.into_item());
    }

    Ok(items)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: u32,
    name: String,
    category: String,
    #[serde(default)]
    description: String,
    price_range: String,
    #[serde(default)]
    texture: String,
    sweetness: String,
    #[serde(default)]
    mood: String,
    #[serde(default)]
    time: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    image: Option<String>,
    #[serde(default)]
    recommendation: String,
}

impl CatalogRow {
    fn into_item(self) -> Item {
        Item {
            id: ItemId(self.id),
            name: self.name,
            category: self.category,
            description: self.description,
            price_range: self.price_range,
            texture: split_tags(&self.texture),
            sweetness: self.sweetness,
            mood: split_tags(&self.mood),
            time: split_tags(&self.time),
            image: self.image,
            recommendation: self.recommendation,
        }
    }
}

fn split_tags(raw: &str) -> BTreeSet<String> {
    raw.split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
