//=========================================================================
// Texture Catalog
//=========================================================================
//
// Opaque texture handles plus their pixel dimensions.
//
// There is no rendering backend; the catalog exists so scene objects
// can size their bounding rects and describe sprites for a future
// renderer without holding asset data themselves.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Texture Id ==========================================================

/// Opaque handle to a registered texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TexId(u32);

//=== Texture Catalog =====================================================

/// Registry of texture handles and their pixel sizes.
pub struct TextureCatalog {
    sizes: HashMap<TexId, (u32, u32)>,
    next_id: u32,
}

impl TextureCatalog {
    pub fn new() -> Self {
        Self {
            sizes: HashMap::new(),
            next_id: 0,
        }
    }

    /// Registers a texture by its pixel dimensions and returns its handle.
    pub fn register(&mut self, width: u32, height: u32) -> TexId {
        let id = TexId(self.next_id);
        self.next_id += 1;
        self.sizes.insert(id, (width, height));
        debug!("Registered texture {:?} ({}x{})", id, width, height);
        id
    }

    /// Pixel dimensions of a registered texture.
    pub fn size(&self, id: TexId) -> Option<(u32, u32)> {
        self.sizes.get(&id).copied()
    }
}

impl Default for TextureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
