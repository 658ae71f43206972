//! Content transfer for Reinhardt CMS.
//!
//! This crate moves pages and aliases between CMS instances:
//!
//! - **Export**: Walk a live page (or alias) tree and turn it into a portable
//!   JSON document
//! - **Reference update**: Rebind the database references embedded in a
//!   document to the objects of the destination instance
//! - **Import**: Recreate the tree in the destination, block by block
//! - **Link rewrite**: Point the internal links of imported blocks at the
//!   destination's pages
//!
//! # Features
//!
//! - `memory` - In-process host implementation (enabled by default)
//!
//! # Quick Start
//!
//! ```ignore
//! use reinhardt_cms_transfer::prelude::*;
//!
//! let settings = TransferSettings::from_env()?;
//! let mut blocks = BlockRegistry::new();
//! blocks.register_rich_text("TextPlugin").register_json("LinkPlugin");
//!
//! // Source instance
//! let page = PageExporter::new(&source, &blocks, &settings)
//!     .recursive(true)
//!     .export(home)
//!     .await?;
//! let document = page.to_json()?;
//!
//! // Destination instance
//! let mut page = PageItem::from_json(&document)?;
//! ReferenceUpdater::new(&destination, &settings)
//!     .update_model_refs(&mut page)
//!     .await;
//! let result = PageImporter::new(&destination, &destination, &settings)
//!     .with_parent(Some(parent))
//!     .import(&mut page)
//!     .await?;
//! LinkRewriter::new(&destination, &destination, &settings)
//!     .update_internal_links(&mut page)
//!     .await?;
//! ```
//!
//! # Architecture
//!
//! ## Items
//!
//! - [`PageItem`](items::PageItem) - Page with its localized contents and subpages
//! - [`SnippetItem`](items::SnippetItem) - Alias with its localized contents
//! - [`SlotItem`](items::SlotItem) - Named placeholder holding root blocks
//! - [`ContentBlockItem`](items::ContentBlockItem) - Block with its config and children
//!
//! ## References
//!
//! - [`ReferenceCodec`](reference::ReferenceCodec) - Field values to JSON, objects to descriptors
//! - [`ReferenceResolver`](reference::ReferenceResolver) - Descriptors back to destination objects
//!
//! ## Host contracts
//!
//! - [`ContentSource`](host::ContentSource) - Read access to a live tree
//! - [`ContentHost`](host::ContentHost) - Write access to a live tree
//! - [`EntityCatalog`](host::EntityCatalog) - Lookup of referenced objects
//!
//! ## Workflow
//!
//! - [`TransferRecord`](record::TransferRecord) - Stored document with its metadata
//! - [`TransferActions`](actions::TransferActions) - Administrative actions on records

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod actions;
pub mod blocks;
pub mod error;
pub mod exporter;
pub mod host;
pub mod importer;
pub mod items;
#[cfg(feature = "memory")]
pub mod memory;
pub mod passes;
pub mod prelude;
pub mod record;
pub mod reference;
pub mod settings;

// Re-export commonly used types at crate root
pub use error::{TransferError, TransferResult};
pub use exporter::{PageExporter, SnippetExporter};
pub use importer::{ImportResult, PageImporter, SnippetImporter};
pub use items::{ContentBlockItem, PageItem, SlotItem, SnippetItem, TransferItem};
pub use passes::{LinkRewriter, ReferenceUpdater};
pub use settings::TransferSettings;
