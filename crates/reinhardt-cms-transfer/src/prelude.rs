//! Convenience re-exports for common usage.
//!
//! ```ignore
//! use reinhardt_cms_transfer::prelude::*;
//! ```

// Error types
pub use crate::error::{TransferError, TransferResult};

// Settings
pub use crate::settings::TransferSettings;

// Item types
pub use crate::items::{
	Config, ContentBlockItem, JSON_CONFIG_KEY, LocalizedContentItem, PageItem, SlotItem, SnippetContentItem,
	SnippetItem, TransferItem,
};

// Reference types
pub use crate::reference::{FieldValue, ReferenceCodec, ReferenceDescriptor, ReferenceResolver};

// Block types
pub use crate::blocks::{BlockCapability, BlockRegistry, BlockSerializer};

// Host contracts
pub use crate::host::{
	BlockArg, BlockConfig, BlockPayload, ContentHost, ContentRef, ContentSource, Entity, EntityCatalog, Lookup,
};

// Transfer steps
pub use crate::exporter::{PageExporter, SnippetExporter};
pub use crate::importer::{BlockFailure, ImportResult, PageImporter, SkippedSlot, SnippetImporter};
pub use crate::passes::{LinkMiss, LinkRewriter, ReferenceMiss, ReferenceUpdater};

// Workflow
pub use crate::actions::TransferActions;
pub use crate::record::{TransferKind, TransferRecord};

#[cfg(feature = "memory")]
pub use crate::memory::MemoryHost;
