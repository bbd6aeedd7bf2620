//! Line formats for catalog files.
//!
//! - [`MenuCsv`]: `id,name,description,price`, the format `menu.txt` has always used.
//!   Fields are not quoted, so a comma inside the name shifts the remaining fields.
//! - [`MenuJsonLines`]: one JSON object per line. Same records, no delimiter ambiguity.

use crate::framework::{CodecError, RecordDecoder, RecordEncoder};
use crate::model::MenuItem;

/// Comma-separated menu records without header or escaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuCsv;

impl RecordEncoder for MenuCsv {
    type Record = MenuItem;

    fn encode(&self, item: &MenuItem) -> Result<String, CodecError> {
        Ok(format!(
            "{},{},{},{}",
            item.id(),
            item.name(),
            item.description(),
            item.price()
        ))
    }
}

impl RecordDecoder for MenuCsv {
    type Record = MenuItem;

    fn decode(&self, line: &str) -> Result<MenuItem, CodecError> {
        // price takes the rest of the line
        let mut fields = line.splitn(4, ',');
        let id = fields.next().ok_or(CodecError::MissingField("id"))?;
        let name = fields.next().ok_or(CodecError::MissingField("name"))?;
        let description = fields
            .next()
            .ok_or(CodecError::MissingField("description"))?;
        let price = fields.next().ok_or(CodecError::MissingField("price"))?;

        let id = id.trim().parse::<i32>().map_err(|_| CodecError::InvalidNumber {
            field: "id",
            value: id.to_string(),
        })?;
        let price = price
            .trim()
            .parse::<f64>()
            .map_err(|_| CodecError::InvalidNumber {
                field: "price",
                value: price.to_string(),
            })?;

        Ok(MenuItem::new(id, name, description, price))
    }
}

/// One serialized [`MenuItem`] per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuJsonLines;

impl RecordEncoder for MenuJsonLines {
    type Record = MenuItem;

    fn encode(&self, item: &MenuItem) -> Result<String, CodecError> {
        serde_json::to_string(item).map_err(|e| CodecError::Json(e.to_string()))
    }
}

impl RecordDecoder for MenuJsonLines {
    type Record = MenuItem;

    fn decode(&self, line: &str) -> Result<MenuItem, CodecError> {
        serde_json::from_str(line).map_err(|e| CodecError::Json(e.to_string()))
    }
}
