//! Importers: transfer items to a live tree.
//!
//! Per page: create the page jointly with its first content, create the
//! remaining contents, import the blocks of every content's slots (parents
//! before children), then recurse into subpages.
//!
//! Block creation failures do not abort the import. The failing block and
//! its subtree are skipped and reported in [`ImportResult::failures`]. Slots
//! the destination template does not have are skipped the same way. Page and
//! content creation failures propagate.

use futures::future::{BoxFuture, FutureExt};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::error::{TransferError, TransferResult};
use crate::host::{
	BlockArg, BlockConfig, BlockId, ContentHost, ContentRef, EntityCatalog, NewBlock, NewPage, NewPageContent,
	NewSnippet, NewSnippetContent, PageId, SlotId, SnippetId,
};
use crate::items::{ContentBlockItem, PageItem, SlotItem, SnippetItem};
use crate::reference::ReferenceResolver;
use crate::settings::TransferSettings;

/// A block the destination refused to create.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockFailure {
	/// Title (or alias name) of the content the block belongs to.
	pub container: String,
	/// Slot name.
	pub slot: String,
	/// Type of the failing block.
	pub block_type: String,
	/// Host error message.
	pub error: String,
	/// Number of descendants skipped along with the block.
	pub skipped_children: usize,
}

/// A slot the destination template does not have.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedSlot {
	/// Title (or alias name) of the content.
	pub container: String,
	/// Slot name.
	pub slot: String,
	/// Number of root blocks not imported.
	pub blocks: usize,
}

/// Outcome of an import.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportResult {
	/// Page or alias created for the root item.
	pub root: Option<i64>,
	/// Pages (or aliases) created.
	pub containers_created: usize,
	/// Localized contents created, including the first ones.
	pub contents_created: usize,
	/// Blocks created.
	pub blocks_created: usize,
	/// Blocks skipped after a creation failure.
	pub failures: Vec<BlockFailure>,
	/// Slots skipped because the template lacks them.
	pub skipped_slots: Vec<SkippedSlot>,
}

impl ImportResult {
	/// Returns true if every block and slot was imported.
	pub fn is_complete(&self) -> bool {
		self.failures.is_empty() && self.skipped_slots.is_empty()
	}
}

struct SlotTarget<'t> {
	slot: SlotId,
	language: &'t str,
	container: &'t str,
	slot_name: &'t str,
}

/// Shared slot and block import.
struct TreeWriter<'a> {
	host: &'a dyn ContentHost,
	resolver: ReferenceResolver<'a>,
}

impl<'a> TreeWriter<'a> {
	async fn import_slots(
		&self,
		content: ContentRef,
		language: &str,
		container: &str,
		slots: &mut [SlotItem],
		result: &mut ImportResult,
	) -> TransferResult<()> {
		for slot in slots {
			let Some(slot_id) = self.host.slot(content, &slot.slot).await? else {
				warn!(
					container,
					slot = %slot.slot,
					blocks = slot.blocks.len(),
					"Template has no such slot, skipping its blocks"
				);
				result.skipped_slots.push(SkippedSlot {
					container: container.to_string(),
					slot: slot.slot.clone(),
					blocks: slot.blocks.len(),
				});
				continue;
			};

			let target = SlotTarget {
				slot: slot_id,
				language,
				container,
				slot_name: &slot.slot,
			};
			for block in &mut slot.blocks {
				self.import_block(&target, block, None, result).await;
			}
		}
		Ok(())
	}

	fn import_block<'b>(
		&'b self,
		target: &'b SlotTarget<'b>,
		item: &'b mut ContentBlockItem,
		parent: Option<BlockId>,
		result: &'b mut ImportResult,
	) -> BoxFuture<'b, ()> {
		async move {
			let config = self.block_config(item).await;
			let block = NewBlock {
				slot: target.slot,
				block_type: item.block_type.clone(),
				language: target.language.to_string(),
				parent,
				config,
			};

			let id = match self.host.create_block(block).await {
				Ok(id) => id,
				Err(err) => {
					let skipped_children = descendant_count(item);
					error!(
						container = target.container,
						slot = target.slot_name,
						block_type = %item.block_type,
						skipped_children,
						error = %err,
						"Cannot create block, skipping it with its children"
					);
					result.failures.push(BlockFailure {
						container: target.container.to_string(),
						slot: target.slot_name.to_string(),
						block_type: item.block_type.clone(),
						error: err.to_string(),
						skipped_children,
					});
					return;
				}
			};

			item.assign_id(id);
			result.blocks_created += 1;
			for child in &mut item.children {
				self.import_block(target, child, Some(id), result).await;
			}
		}
		.boxed()
	}

	async fn block_config(&self, item: &ContentBlockItem) -> BlockConfig {
		if item.is_json_config() {
			return BlockConfig::Json(item.json_config().cloned().unwrap_or_default());
		}
		let mut arguments = IndexMap::with_capacity(item.config.len());
		for (key, value) in &item.config {
			let argument = self.resolver.resolve_argument(value).await;
			if let BlockArg::Entity(None) = &argument {
				warn!(block_type = %item.block_type, key = %key, "Referenced object not found");
			}
			arguments.insert(key.clone(), argument);
		}
		BlockConfig::Fields(arguments)
	}
}

fn descendant_count(item: &ContentBlockItem) -> usize {
	item.children
		.iter()
		.map(|child| 1 + descendant_count(child))
		.sum()
}

/// Imports page items.
pub struct PageImporter<'a> {
	writer: TreeWriter<'a>,
	parent: Option<PageId>,
	created_by: String,
}

impl<'a> PageImporter<'a> {
	/// Creates an importer writing to `host` and resolving references in
	/// `catalog`.
	pub fn new(host: &'a dyn ContentHost, catalog: &'a dyn EntityCatalog, settings: &'a TransferSettings) -> Self {
		Self {
			writer: TreeWriter {
				host,
				resolver: ReferenceResolver::new(catalog, settings),
			},
			parent: None,
			created_by: settings.created_by.clone(),
		}
	}

	/// Places the imported page below `parent`.
	pub fn with_parent(mut self, parent: Option<PageId>) -> Self {
		self.parent = parent;
		self
	}

	/// Author recorded on created contents.
	pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
		self.created_by = created_by.into();
		self
	}

	/// Imports a page tree and writes the created block ids back onto `item`.
	pub async fn import(&self, item: &mut PageItem) -> TransferResult<ImportResult> {
		let mut result = ImportResult::default();
		let page = self.import_page(item, self.parent, &mut result).await?;
		result.root = Some(page);
		info!(
			page,
			contents = result.contents_created,
			blocks = result.blocks_created,
			failures = result.failures.len(),
			skipped_slots = result.skipped_slots.len(),
			"Imported page"
		);
		Ok(result)
	}

	fn import_page<'b>(
		&'b self,
		item: &'b mut PageItem,
		parent: Option<PageId>,
		result: &'b mut ImportResult,
	) -> BoxFuture<'b, TransferResult<PageId>> {
		async move {
			let Some(first) = item.contents.first() else {
				return Err(TransferError::InvalidItem(format!(
					"{} has no page contents",
					item
				)));
			};
			let template = if first.template.is_empty() {
				item.template.clone()
			} else {
				first.template.clone()
			};
			let title = first.title.clone();

			let created = self
				.writer
				.host
				.create_page(NewPage {
					title: title.clone(),
					template,
					language: first.language.clone(),
					parent,
					in_navigation: first.in_navigation,
					reverse_id: item.reverse_id.clone(),
				})
				.await?;
			info!(page = created.page, title = %title, "Created page");
			result.containers_created += 1;

			for (index, content) in item.contents.iter_mut().enumerate() {
				let content_id = if index == 0 {
					created.content
				} else {
					self.writer
						.host
						.create_page_content(NewPageContent {
							language: content.language.clone(),
							title: content.title.clone(),
							page: created.page,
							slug: content.slug.clone(),
							page_title: content.page_title.clone(),
							menu_title: content.menu_title.clone(),
							meta_description: content.meta_description.clone(),
							in_navigation: content.in_navigation,
							template: content.template.clone(),
							created_by: self.created_by.clone(),
						})
						.await?
				};
				result.contents_created += 1;

				self.writer
					.import_slots(
						ContentRef::Page(content_id),
						&content.language,
						&title,
						&mut content.slots,
						result,
					)
					.await?;
			}

			for child in &mut item.pages {
				self.import_page(child, Some(created.page), result).await?;
			}
			Ok(created.page)
		}
		.boxed()
	}
}

/// Imports alias items.
pub struct SnippetImporter<'a> {
	writer: TreeWriter<'a>,
}

impl<'a> SnippetImporter<'a> {
	/// Creates an importer writing to `host` and resolving references in
	/// `catalog`.
	pub fn new(host: &'a dyn ContentHost, catalog: &'a dyn EntityCatalog, settings: &'a TransferSettings) -> Self {
		Self {
			writer: TreeWriter {
				host,
				resolver: ReferenceResolver::new(catalog, settings),
			},
		}
	}

	/// Imports an alias and writes the created block ids back onto `item`.
	pub async fn import(&self, item: &mut SnippetItem) -> TransferResult<ImportResult> {
		let Some(first) = item.contents.first() else {
			return Err(TransferError::InvalidItem(format!("{} has no alias contents", item)));
		};

		let created = self
			.writer
			.host
			.create_snippet(NewSnippet {
				category: item.category.clone(),
				name: first.name.clone(),
				language: first.language.clone(),
				template: first.template.clone(),
			})
			.await?;
		let snippet: SnippetId = created.snippet;
		info!(snippet, name = %first.name, "Created alias");

		let mut result = ImportResult {
			root: Some(snippet),
			containers_created: 1,
			..Default::default()
		};

		for (index, content) in item.contents.iter_mut().enumerate() {
			let content_id = if index == 0 {
				created.content
			} else {
				self.writer
					.host
					.create_snippet_content(NewSnippetContent {
						snippet,
						language: content.language.clone(),
						name: content.name.clone(),
						template: content.template.clone(),
					})
					.await?
			};
			result.contents_created += 1;

			let name = content.name.clone();
			self.writer
				.import_slots(
					ContentRef::Snippet(content_id),
					&content.language,
					&name,
					&mut content.slots,
					&mut result,
				)
				.await?;
		}

		info!(
			snippet,
			blocks = result.blocks_created,
			failures = result.failures.len(),
			"Imported alias"
		);
		Ok(result)
	}
}
