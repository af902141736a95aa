//! Non-owning reference to the record a frontend has selected.
//!
//! A selection stores only an [`ItemId`] and is checked against the catalog
//! every time it is used, so it never outlives the record it points to.

use mediateca_catalog::{Catalog, ContainerError};
use mediateca_core::{ItemId, Record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    id: Option<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the record at `index`.
    pub fn select_at(&mut self, catalog: &Catalog, index: usize) -> Result<ItemId, ContainerError> {
        let id = catalog.get_at(index)?.id();
        self.id = Some(id);
        Ok(id)
    }

    pub fn select(&mut self, id: ItemId) {
        self.id = Some(id);
    }

    pub fn clear(&mut self) {
        self.id = None;
    }

    pub fn id(&self) -> Option<ItemId> {
        self.id
    }

    /// Current position and record, if the selected record is still present.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<(usize, &'a Record)> {
        let id = self.id?;
        let index = catalog.position_of(id)?;
        catalog.get_at(index).ok().map(|r| (index, r))
    }

    /// Like [`Selection::resolve`], but forgets a stale selection.
    pub fn revalidate(&mut self, catalog: &Catalog) -> Option<usize> {
        let resolved = self.resolve(catalog).map(|(index, _)| index);
        if resolved.is_none() {
            self.id = None;
        }
        resolved
    }
}
