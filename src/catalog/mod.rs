//! The menu: an ordered catalog of [`MenuItem`]s with id lookup and file persistence.

pub mod codec;
pub mod entity;
pub mod error;

pub use codec::*;
pub use error::*;

use crate::framework::{GrowableBuffer, RecordDecoder, RecordEncoder};
use crate::model::{ItemId, MenuItem, DEFAULT_CAPACITY};
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

/// Ordered collection of menu items backed by a [`GrowableBuffer`].
///
/// Insertion order is kept; deleting an item shifts the later items left. Ids are
/// not checked for uniqueness, lookups return the first match.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: GrowableBuffer<MenuItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: GrowableBuffer::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    /// Appends `item`; the capacity doubles first if the catalog is full.
    #[instrument(skip(self, item), fields(item_id = %item.id()))]
    pub fn add_item(&mut self, item: MenuItem) -> Result<(), CatalogError> {
        debug!(?item, "add_item called");
        self.items.push(item)?;
        info!(size = self.items.len(), capacity = self.items.capacity(), "Added");
        Ok(())
    }

    /// Removes the first item with `id`, keeping the order of the others.
    #[instrument(skip(self))]
    pub fn delete_item(&mut self, id: ItemId) -> Result<MenuItem, CatalogError> {
        match self.items.remove_by_id(id) {
            Some(item) => {
                info!(size = self.items.len(), "Deleted");
                Ok(item)
            }
            None => {
                warn!("Not found");
                Err(CatalogError::NotFound(id))
            }
        }
    }

    /// Returns a copy of the first item with `id`.
    pub fn get_item_by_id(&self, id: ItemId) -> Option<MenuItem> {
        let item = self.items.find_by_id(id).cloned();
        debug!(%id, found = item.is_some(), "Get");
        item
    }

    /// Drops every item and returns to the constructed capacity.
    pub fn reset(&mut self) {
        self.items.reset();
        info!(capacity = self.items.capacity(), "Catalog reset");
    }

    /// Id of the most recently appended item, `None` when empty.
    pub fn last_item_id(&self) -> Option<ItemId> {
        self.items.last().map(MenuItem::id)
    }

    /// Appends every record of a `menu.txt` style file. See [`MenuCsv`].
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, CatalogError> {
        self.load_with(path, &MenuCsv)
    }

    /// Writes every item to `path` as `id,name,description,price` lines.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        self.save_with(path, &MenuCsv)
    }

    /// Appends every record in `path` decoded with `codec`, returning how many were read.
    ///
    /// Blank lines are ignored. Lines the codec rejects are logged and skipped. Bytes that
    /// are not valid UTF-8 are replaced with `U+FFFD` on their own line only.
    #[instrument(skip(self, path, codec), fields(path = %path.as_ref().display()))]
    pub fn load_with<C>(&mut self, path: impl AsRef<Path>, codec: &C) -> Result<usize, CatalogError>
    where
        C: RecordDecoder<Record = MenuItem>,
    {
        let path = path.as_ref();
        let contents = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(error = %e, "Could not read menu");
                return Err(CatalogError::io(path, e));
            }
        };

        let mut loaded = 0;
        for (index, raw) in contents.split(|&b| b == b'\n').enumerate() {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = String::from_utf8_lossy(raw);
            if let Cow::Owned(_) = line {
                warn!(line = index + 1, "Replaced invalid UTF-8 in record");
            }
            if line.trim().is_empty() {
                continue;
            }
            match codec.decode(&line) {
                Ok(item) => {
                    self.items.push(item)?;
                    loaded += 1;
                }
                Err(e) => warn!(line = index + 1, error = %e, "Skipping malformed record"),
            }
        }

        info!(loaded, size = self.items.len(), "Loaded");
        Ok(loaded)
    }

    /// Writes every item to `path` encoded with `codec`, one per line.
    ///
    /// The whole file is rendered before it is opened, so an encoding failure
    /// leaves any existing file untouched.
    #[instrument(skip(self, path, codec), fields(path = %path.as_ref().display()))]
    pub fn save_with<C>(&self, path: impl AsRef<Path>, codec: &C) -> Result<(), CatalogError>
    where
        C: RecordEncoder<Record = MenuItem>,
    {
        let path = path.as_ref();
        let mut contents = String::new();
        for (record, item) in self.items.iter().enumerate() {
            let line = codec
                .encode(item)
                .map_err(|source| CatalogError::Codec { record, source })?;
            contents.push_str(&line);
            contents.push('\n');
        }

        if let Err(e) = fs::write(path, contents) {
            error!(error = %e, "Could not write menu");
            return Err(CatalogError::io(path, e));
        }
        info!(size = self.items.len(), "Saved");
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Menu Items ---")?;
        if self.items.is_empty() {
            writeln!(f, "No items on menu.")?;
        }
        for item in self.items.iter() {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
