//! Administrative actions on transfer records.
//!
//! Each action loads the record's document, runs one step of the transfer
//! and stores the (possibly changed) document back:
//!
//! | action | record kinds |
//! |---|---|
//! | [`export_page`](TransferActions::export_page) | page export |
//! | [`export_snippet`](TransferActions::export_snippet) | alias export |
//! | [`update_model_refs`](TransferActions::update_model_refs) | page or alias import |
//! | [`exec_import`](TransferActions::exec_import) | page or alias import |
//! | [`update_internal_links`](TransferActions::update_internal_links) | page or alias import |

use crate::blocks::BlockRegistry;
use crate::error::{TransferError, TransferResult};
use crate::exporter::{PageExporter, SnippetExporter};
use crate::host::{ContentHost, ContentSource, EntityCatalog};
use crate::importer::{ImportResult, PageImporter, SnippetImporter};
use crate::items::{PageItem, SnippetItem};
use crate::passes::{LinkMiss, LinkRewriter, ReferenceMiss, ReferenceUpdater};
use crate::record::{TransferKind, TransferRecord};
use crate::settings::TransferSettings;

const IMPORT_KINDS: [TransferKind; 2] = [TransferKind::PageImport, TransferKind::SnippetImport];

/// Entry points for the administrative workflow.
pub struct TransferActions<'a> {
	source: &'a dyn ContentSource,
	host: &'a dyn ContentHost,
	catalog: &'a dyn EntityCatalog,
	blocks: &'a BlockRegistry,
	settings: &'a TransferSettings,
}

impl<'a> TransferActions<'a> {
	/// Creates the actions for an instance implementing every host contract.
	pub fn new<B>(backend: &'a B, blocks: &'a BlockRegistry, settings: &'a TransferSettings) -> Self
	where
		B: ContentSource + ContentHost + EntityCatalog,
	{
		Self {
			source: backend,
			host: backend,
			catalog: backend,
			blocks,
			settings,
		}
	}

	/// Creates the actions from separate collaborators.
	pub fn from_parts(
		source: &'a dyn ContentSource,
		host: &'a dyn ContentHost,
		catalog: &'a dyn EntityCatalog,
		blocks: &'a BlockRegistry,
		settings: &'a TransferSettings,
	) -> Self {
		Self {
			source,
			host,
			catalog,
			blocks,
			settings,
		}
	}

	/// Exports the record's page into the record.
	pub async fn export_page(&self, record: &mut TransferRecord) -> TransferResult<()> {
		record.expect_kind(&[TransferKind::PageExport])?;
		let page = record
			.page
			.ok_or_else(|| TransferError::InvalidItem(format!("{} has no page", record)))?;
		let item = PageExporter::new(self.source, self.blocks, self.settings)
			.recursive(record.recursive)
			.export(page)
			.await?;
		record.store(&item)
	}

	/// Exports the record's alias into the record.
	pub async fn export_snippet(&self, record: &mut TransferRecord) -> TransferResult<()> {
		record.expect_kind(&[TransferKind::SnippetExport])?;
		let snippet = record
			.snippet
			.ok_or_else(|| TransferError::InvalidItem(format!("{} has no alias", record)))?;
		let item = SnippetExporter::new(self.source, self.blocks, self.settings)
			.export(snippet)
			.await?;
		record.store(&item)
	}

	/// Rebinds the references of the record's document to this instance.
	pub async fn update_model_refs(&self, record: &mut TransferRecord) -> TransferResult<Vec<ReferenceMiss>> {
		record.expect_kind(&IMPORT_KINDS)?;
		let updater = ReferenceUpdater::new(self.catalog, self.settings);
		if record.kind == TransferKind::PageImport {
			let mut item: PageItem = record.load()?;
			let misses = updater.update_model_refs(&mut item).await;
			record.store(&item)?;
			Ok(misses)
		} else {
			let mut item: SnippetItem = record.load()?;
			let misses = updater.update_model_refs(&mut item).await;
			record.store(&item)?;
			Ok(misses)
		}
	}

	/// Imports the record's document. Pages go below the record's parent.
	pub async fn exec_import(&self, record: &mut TransferRecord) -> TransferResult<ImportResult> {
		record.expect_kind(&IMPORT_KINDS)?;
		if record.kind == TransferKind::PageImport {
			let mut item: PageItem = record.load()?;
			let result = PageImporter::new(self.host, self.catalog, self.settings)
				.with_parent(record.page)
				.import(&mut item)
				.await;
			// Block ids assigned before a failure are kept.
			record.store(&item)?;
			result
		} else {
			let mut item: SnippetItem = record.load()?;
			let result = SnippetImporter::new(self.host, self.catalog, self.settings)
				.import(&mut item)
				.await;
			record.store(&item)?;
			result
		}
	}

	/// Rewrites the internal links of the record's imported document.
	pub async fn update_internal_links(&self, record: &mut TransferRecord) -> TransferResult<Vec<LinkMiss>> {
		record.expect_kind(&IMPORT_KINDS)?;
		let rewriter = LinkRewriter::new(self.host, self.catalog, self.settings);
		if record.kind == TransferKind::PageImport {
			let mut item: PageItem = record.load()?;
			let misses = rewriter.update_internal_links(&mut item).await?;
			record.store(&item)?;
			Ok(misses)
		} else {
			let mut item: SnippetItem = record.load()?;
			let misses = rewriter.update_internal_links(&mut item).await?;
			record.store(&item)?;
			Ok(misses)
		}
	}
}
