//! Exporters: live tree to transfer items.
//!
//! The walk is top-down and strictly ordered: contents in host order, slots
//! in template order, root blocks in display order, children by position.

use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, info};

use crate::blocks::BlockRegistry;
use crate::error::{TransferError, TransferResult};
use crate::host::{BlockRecord, ContentRef, ContentSource, PageId, SlotRecord, SnippetId};
use crate::items::{
	ContentBlockItem, LocalizedContentItem, PageItem, SlotItem, SnippetContentItem, SnippetItem, TransferItem,
};
use crate::reference::ReferenceCodec;
use crate::settings::TransferSettings;

/// Shared slot and block walk.
struct TreeReader<'a> {
	source: &'a dyn ContentSource,
	blocks: &'a BlockRegistry,
	codec: ReferenceCodec,
}

impl<'a> TreeReader<'a> {
	async fn slot_items(&self, content: ContentRef, language: &str) -> TransferResult<Vec<SlotItem>> {
		let mut items = Vec::new();
		for slot in self.source.slots(content).await? {
			items.push(self.slot_item(slot, language).await?);
		}
		Ok(items)
	}

	async fn slot_item(&self, slot: SlotRecord, language: &str) -> TransferResult<SlotItem> {
		let mut item = SlotItem::new(slot.slot);
		item.extra_context = slot.extra_context;
		for block in self.source.root_blocks(slot.id, language).await? {
			item.blocks.push(self.block_item(block).await?);
		}
		Ok(item)
	}

	fn block_item(&self, block: BlockRecord) -> BoxFuture<'_, TransferResult<ContentBlockItem>> {
		async move {
			let payload = self.source.block_payload(block.id).await?;
			let config = self.blocks.export(&payload, &self.codec)?;
			debug!(block = block.id, block_type = %block.block_type, "Exported block");

			let mut item = ContentBlockItem::new(block.block_type).with_config(config);
			for child in self.source.child_blocks(block.id).await? {
				item.children.push(self.block_item(child).await?);
			}
			Ok(item)
		}
		.boxed()
	}
}

/// Exports pages, optionally with their whole subtree.
pub struct PageExporter<'a> {
	reader: TreeReader<'a>,
	recursive: bool,
}

impl<'a> PageExporter<'a> {
	/// Creates an exporter reading from `source`.
	pub fn new(source: &'a dyn ContentSource, blocks: &'a BlockRegistry, settings: &TransferSettings) -> Self {
		Self {
			reader: TreeReader {
				source,
				blocks,
				codec: ReferenceCodec::new(settings),
			},
			recursive: settings.recursive_export,
		}
	}

	/// Includes subpages in the export.
	pub fn recursive(mut self, recursive: bool) -> Self {
		self.recursive = recursive;
		self
	}

	/// Exports a page.
	pub async fn export(&self, page: PageId) -> TransferResult<PageItem> {
		let item = self.page_item(page).await?;
		info!(
			page,
			pages = item.page_count(),
			blocks = item.collect_plugins().len(),
			"Exported page"
		);
		Ok(item)
	}

	/// Exports a page as a JSON document.
	pub async fn export_json(&self, page: PageId) -> TransferResult<String> {
		self.export(page).await?.to_json()
	}

	fn page_item(&self, page: PageId) -> BoxFuture<'_, TransferResult<PageItem>> {
		async move {
			let record = self
				.reader
				.source
				.page(page)
				.await?
				.ok_or_else(|| TransferError::NotFound(format!("page {}", page)))?;

			let mut item = PageItem::new(record.id);
			item.reverse_id = record.reverse_id;
			item.title = record.title;
			item.template = record.template;
			item.in_navigation = record.in_navigation;
			item.languages = record.languages;

			for content in self.reader.source.page_contents(page).await? {
				let slots = self
					.reader
					.slot_items(ContentRef::Page(content.id), &content.language)
					.await?;
				let mut content_item = LocalizedContentItem::new(content.language, content.title, content.slug)
					.with_template(content.template);
				content_item.page_title = content.page_title;
				content_item.menu_title = content.menu_title;
				content_item.meta_description = content.meta_description;
				content_item.in_navigation = content.in_navigation;
				content_item.slots = slots;
				item.contents.push(content_item);
			}

			if self.recursive {
				for child in self.reader.source.child_pages(page).await? {
					item.pages.push(self.page_item(child).await?);
				}
			}
			Ok(item)
		}
		.boxed()
	}
}

/// Exports aliases.
pub struct SnippetExporter<'a> {
	reader: TreeReader<'a>,
}

impl<'a> SnippetExporter<'a> {
	/// Creates an exporter reading from `source`.
	pub fn new(source: &'a dyn ContentSource, blocks: &'a BlockRegistry, settings: &TransferSettings) -> Self {
		Self {
			reader: TreeReader {
				source,
				blocks,
				codec: ReferenceCodec::new(settings),
			},
		}
	}

	/// Exports an alias with all its contents.
	pub async fn export(&self, snippet: SnippetId) -> TransferResult<SnippetItem> {
		let record = self
			.reader
			.source
			.snippet(snippet)
			.await?
			.ok_or_else(|| TransferError::NotFound(format!("alias {}", snippet)))?;

		let mut item = SnippetItem::new(record.id, record.category);
		item.languages = record.languages;

		for content in self.reader.source.snippet_contents(snippet).await? {
			let slots = self
				.reader
				.slot_items(ContentRef::Snippet(content.id), &content.language)
				.await?;
			let mut content_item = SnippetContentItem::new(content.language, content.name);
			content_item.template = content.template;
			content_item.slots = slots;
			item.contents.push(content_item);
		}

		info!(snippet, contents = item.contents.len(), "Exported alias");
		Ok(item)
	}
}
