//! Persistent product catalog store for Homecraft.
//!
//! This crate owns the product collection and the edit selection, and persists
//! both as a single JSON blob through a pluggable key-value backend. The
//! abstraction separates catalog semantics (id assignment, selection rules,
//! search) from blob storage (filesystem today, anything byte-addressed
//! tomorrow).
//!
//! # Features
//!
//! - **Single-blob persistence**: The whole catalog round-trips through one key
//! - **Pluggable backends**: Trait-based abstraction over blob storage
//! - **Atomic writes**: Filesystem backend uses temp file + rename
//!
//! # Example
//!
//! ```rust
//! use homecraft_store::{Catalog, FileBlobStore};
//! use homecraft_core::ProductDraft;
//!
//! # fn example() -> homecraft_error::HomecraftResult<()> {
//! let store = FileBlobStore::new("/tmp/homecraft-data")?;
//! let mut catalog = Catalog::open(Box::new(store), "products")?;
//!
//! let draft = ProductDraft::builder()
//!     .title("Shoe")
//!     .price(100000.0)
//!     .img("http://x/y.png")
//!     .rate(4)
//!     .description("desc")
//!     .build();
//!
//! let id = catalog.add(draft)?;
//! assert!(catalog.get(id).is_some());
//! # Ok(())
//! # }
//! ```

use homecraft_error::HomecraftResult;

mod catalog;
mod config;
mod file;
mod snapshot;

pub use catalog::Catalog;
pub use config::StoreConfig;
pub use file::FileBlobStore;
pub use homecraft_error::{StorageError, StorageErrorKind};
pub use snapshot::CatalogSnapshot;

/// Trait for pluggable blob storage backends.
///
/// Implementations store opaque byte blobs under string names. The catalog
/// sits on top of this trait and never touches the filesystem directly.
///
/// Note: Only requires `Send` (not `Sync`) since callers are single-threaded.
pub trait BlobStore: Send {
    /// Load a blob by name.
    ///
    /// # Arguments
    ///
    /// * `name` - Name the blob was saved under
    ///
    /// # Returns
    ///
    /// `Some(bytes)` if the blob exists, `None` if nothing has been saved
    /// under this name yet
    fn load(&self, name: &str) -> HomecraftResult<Option<Vec<u8>>>;

    /// Save a blob under a name, replacing any previous contents.
    ///
    /// # Arguments
    ///
    /// * `name` - Name to save the blob under
    /// * `bytes` - Blob contents
    fn save(&mut self, name: &str, bytes: &[u8]) -> HomecraftResult<()>;

    /// Check if a blob exists.
    ///
    /// # Arguments
    ///
    /// * `name` - Name to check
    ///
    /// # Returns
    ///
    /// `true` if a blob has been saved under this name, `false` otherwise
    fn exists(&self, name: &str) -> HomecraftResult<bool>;
}
