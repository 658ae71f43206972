//! In-process host.
//!
//! [`MemoryHost`] implements [`ContentSource`], [`ContentHost`] and
//! [`EntityCatalog`] over plain maps. It is enough to export, import and
//! rewrite real documents without a database, which makes it the backend of
//! dry runs and tests.
//!
//! Templates declare their slots, block types declare the fields they
//! accept. Pages and aliases are also exposed as catalog entities (pages with
//! their `reverse_id` and absolute path), so links and alias references
//! resolve against content created through the host.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;

use crate::error::{TransferError, TransferResult};
use crate::host::{
	BlockArg, BlockConfig, BlockId, BlockPayload, BlockRecord, ContentHost, ContentId, ContentRef, ContentSource,
	CreatedPage, CreatedSnippet, Entity, EntityCatalog, Lookup, NewBlock, NewPage, NewPageContent, NewSnippet,
	NewSnippetContent, PageContentRecord, PageId, PageRecord, SlotId, SlotRecord, SnippetContentRecord, SnippetId,
	SnippetRecord,
};
use crate::items::Config;
use crate::reference::FieldValue;
use crate::settings::TransferSettings;

struct StoredPage {
	record: PageRecord,
	parent: Option<PageId>,
}

struct StoredPageContent {
	page: PageId,
	record: PageContentRecord,
}

struct StoredSnippetContent {
	snippet: SnippetId,
	record: SnippetContentRecord,
}

struct StoredSlot {
	owner: ContentRef,
	record: SlotRecord,
}

struct StoredBlock {
	slot: SlotId,
	language: String,
	parent: Option<BlockId>,
	position: u32,
	block_type: String,
	json_config: Option<Config>,
	fields: IndexMap<String, FieldValue>,
}

#[derive(Default)]
struct MemoryState {
	next_id: i64,
	pages: IndexMap<PageId, StoredPage>,
	page_contents: IndexMap<ContentId, StoredPageContent>,
	snippets: IndexMap<SnippetId, SnippetRecord>,
	snippet_contents: IndexMap<ContentId, StoredSnippetContent>,
	slots: IndexMap<SlotId, StoredSlot>,
	blocks: IndexMap<BlockId, StoredBlock>,
	entities: Vec<Entity>,
	models: HashSet<String>,
}

impl MemoryState {
	fn next_id(&mut self) -> i64 {
		self.next_id += 1;
		self.next_id
	}

	fn page_path(&self, page: PageId) -> String {
		let mut slugs = Vec::new();
		let mut current = Some(page);
		while let Some(id) = current {
			let slug = self
				.page_contents
				.values()
				.find(|content| content.page == id)
				.map(|content| content.record.slug.clone())
				.unwrap_or_default();
			slugs.push(slug);
			current = self.pages.get(&id).and_then(|stored| stored.parent);
		}
		slugs.reverse();
		format!("/{}/", slugs.join("/"))
	}
}

/// Block type accepted by a [`MemoryHost`].
#[derive(Debug, Clone)]
enum BlockSchema {
	Fields(Vec<String>),
	Open,
}

/// An in-memory CMS instance.
pub struct MemoryHost {
	state: RwLock<MemoryState>,
	templates: HashMap<String, Vec<String>>,
	default_slots: Vec<String>,
	block_types: HashMap<String, BlockSchema>,
	page_model: String,
	snippet_model: String,
	snippet_name_field: String,
}

impl Default for MemoryHost {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryHost {
	/// Creates an empty instance using the default settings' model names.
	pub fn new() -> Self {
		Self::with_settings(&TransferSettings::default())
	}

	/// Creates an empty instance using the model names of `settings`.
	pub fn with_settings(settings: &TransferSettings) -> Self {
		Self {
			state: RwLock::new(MemoryState::default()),
			templates: HashMap::new(),
			default_slots: vec!["content".to_string()],
			block_types: HashMap::new(),
			page_model: settings.page_model.clone(),
			snippet_model: settings.snippet_model.clone(),
			snippet_name_field: settings.snippet_name_field.clone(),
		}
	}

	/// Declares the slots of a template, in order.
	pub fn with_template<I, S>(mut self, template: impl Into<String>, slots: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.templates
			.insert(template.into(), slots.into_iter().map(Into::into).collect());
		self
	}

	/// Slots of templates that were not declared.
	pub fn with_default_slots<I, S>(mut self, slots: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.default_slots = slots.into_iter().map(Into::into).collect();
		self
	}

	/// Accepts a block type with exactly the given fields.
	pub fn with_block_type<I, S>(mut self, block_type: impl Into<String>, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let fields = fields.into_iter().map(Into::into).collect();
		self.block_types
			.insert(block_type.into(), BlockSchema::Fields(fields));
		self
	}

	/// Accepts a block type with any fields or a JSON config.
	pub fn with_open_block_type(mut self, block_type: impl Into<String>) -> Self {
		self.block_types.insert(block_type.into(), BlockSchema::Open);
		self
	}

	/// Makes `model` known to the catalog, even without entities.
	pub fn register_model(&self, model: impl Into<String>) {
		self.state.write().models.insert(model.into());
	}

	/// Adds a catalog entity.
	pub fn add_entity(&self, entity: Entity) {
		let mut state = self.state.write();
		state.models.insert(entity.model.clone());
		state.entities.push(entity);
	}

	/// Removes a block and its descendants. Returns false if it did not exist.
	pub fn remove_block(&self, block: BlockId) -> bool {
		let mut state = self.state.write();
		if state.blocks.shift_remove(&block).is_none() {
			return false;
		}
		let mut orphans = vec![block];
		while let Some(parent) = orphans.pop() {
			let children: Vec<BlockId> = state
				.blocks
				.iter()
				.filter(|(_, stored)| stored.parent == Some(parent))
				.map(|(id, _)| *id)
				.collect();
			for child in children {
				state.blocks.shift_remove(&child);
				orphans.push(child);
			}
		}
		true
	}

	/// Number of stored blocks.
	pub fn block_count(&self) -> usize {
		self.state.read().blocks.len()
	}

	/// Identifiers of all blocks of a type, in creation order.
	pub fn blocks_of_type(&self, block_type: &str) -> Vec<BlockId> {
		self.state
			.read()
			.blocks
			.iter()
			.filter(|(_, stored)| stored.block_type == block_type)
			.map(|(id, _)| *id)
			.collect()
	}

	/// First page with the given title.
	pub fn find_page(&self, title: &str) -> Option<PageId> {
		self.state
			.read()
			.pages
			.values()
			.find(|stored| stored.record.title == title)
			.map(|stored| stored.record.id)
	}

	/// Parent of a page.
	pub fn page_parent(&self, page: PageId) -> Option<PageId> {
		self.state.read().pages.get(&page).and_then(|stored| stored.parent)
	}

	fn slots_for(&self, template: &str) -> Vec<String> {
		self.templates
			.get(template)
			.cloned()
			.unwrap_or_else(|| self.default_slots.clone())
	}

	fn create_slots(&self, state: &mut MemoryState, owner: ContentRef, template: &str) {
		for slot in self.slots_for(template) {
			let id = state.next_id();
			state.slots.insert(
				id,
				StoredSlot {
					owner,
					record: SlotRecord {
						id,
						slot,
						extra_context: Config::new(),
					},
				},
			);
		}
	}

	fn computed_entities(&self, state: &MemoryState, model: &str) -> Vec<Entity> {
		if model == self.page_model {
			state
				.pages
				.values()
				.map(|stored| {
					let reverse_id = stored
						.record
						.reverse_id
						.clone()
						.map(Value::String)
						.unwrap_or(Value::Null);
					Entity::new(model, stored.record.id, stored.record.title.clone())
						.with_field("reverse_id", reverse_id)
						.with_absolute_url(state.page_path(stored.record.id))
				})
				.collect()
		} else if model == self.snippet_model {
			state
				.snippets
				.values()
				.map(|record| {
					let name = state
						.snippet_contents
						.values()
						.find(|content| content.snippet == record.id)
						.map(|content| content.record.name.clone())
						.unwrap_or_default();
					Entity::new(model, record.id, name.clone())
						.with_field(self.snippet_name_field.clone(), name)
						.with_field("category", record.category.clone())
				})
				.collect()
		} else {
			Vec::new()
		}
	}

	fn check_fields(&self, block_type: &str, config: &BlockConfig) -> TransferResult<()> {
		let schema = self
			.block_types
			.get(block_type)
			.ok_or_else(|| TransferError::Host(format!("Unknown plugin type {}", block_type)))?;
		match (schema, config) {
			(BlockSchema::Open, _) => Ok(()),
			(BlockSchema::Fields(_), BlockConfig::Json(_)) => Err(TransferError::Host(format!(
				"{} does not take a JSON config",
				block_type
			))),
			(BlockSchema::Fields(fields), BlockConfig::Fields(arguments)) => {
				match arguments.keys().find(|key| !fields.contains(*key)) {
					Some(key) => Err(TransferError::Host(format!(
						"{} got an unexpected keyword argument '{}'",
						block_type, key
					))),
					None => Ok(()),
				}
			}
		}
	}
}

fn field_value(argument: BlockArg) -> FieldValue {
	match argument {
		BlockArg::Value(value) => FieldValue::Json(value),
		BlockArg::Entity(Some(entity)) => FieldValue::Entity(entity),
		BlockArg::Entity(None) => FieldValue::Null,
		BlockArg::Entities { model, entities } => {
			let name = entities
				.iter()
				.map(|entity| entity.name.as_str())
				.collect::<Vec<_>>()
				.join(", ");
			FieldValue::Entities {
				model,
				name,
				entities,
			}
		}
	}
}

#[async_trait]
impl EntityCatalog for MemoryHost {
	async fn get(&self, model: &str, pk: &Value) -> TransferResult<Option<Entity>> {
		let found = self.filter(model, &[Lookup::exact("pk", pk.clone())]).await?;
		Ok(found.into_iter().next())
	}

	async fn filter(&self, model: &str, lookups: &[Lookup]) -> TransferResult<Vec<Entity>> {
		let state = self.state.read();
		let computed = model == self.page_model || model == self.snippet_model;
		if !computed && !state.models.contains(model) {
			return Err(TransferError::UnknownModel(model.to_string()));
		}
		let mut entities = self.computed_entities(&state, model);
		entities.extend(
			state
				.entities
				.iter()
				.filter(|entity| entity.model == model)
				.cloned(),
		);
		entities.retain(|entity| lookups.iter().all(|lookup| lookup.matches(entity)));
		Ok(entities)
	}
}

#[async_trait]
impl ContentSource for MemoryHost {
	async fn page(&self, page: PageId) -> TransferResult<Option<PageRecord>> {
		Ok(self.state.read().pages.get(&page).map(|stored| stored.record.clone()))
	}

	async fn page_contents(&self, page: PageId) -> TransferResult<Vec<PageContentRecord>> {
		Ok(self
			.state
			.read()
			.page_contents
			.values()
			.filter(|content| content.page == page)
			.map(|content| content.record.clone())
			.collect())
	}

	async fn child_pages(&self, page: PageId) -> TransferResult<Vec<PageId>> {
		Ok(self
			.state
			.read()
			.pages
			.values()
			.filter(|stored| stored.parent == Some(page))
			.map(|stored| stored.record.id)
			.collect())
	}

	async fn snippet(&self, snippet: SnippetId) -> TransferResult<Option<SnippetRecord>> {
		Ok(self.state.read().snippets.get(&snippet).cloned())
	}

	async fn snippet_contents(&self, snippet: SnippetId) -> TransferResult<Vec<SnippetContentRecord>> {
		Ok(self
			.state
			.read()
			.snippet_contents
			.values()
			.filter(|content| content.snippet == snippet)
			.map(|content| content.record.clone())
			.collect())
	}

	async fn slots(&self, content: ContentRef) -> TransferResult<Vec<SlotRecord>> {
		Ok(self
			.state
			.read()
			.slots
			.values()
			.filter(|slot| slot.owner == content)
			.map(|slot| slot.record.clone())
			.collect())
	}

	async fn root_blocks(&self, slot: SlotId, language: &str) -> TransferResult<Vec<BlockRecord>> {
		let state = self.state.read();
		let mut blocks: Vec<BlockRecord> = state
			.blocks
			.iter()
			.filter(|(_, stored)| stored.slot == slot && stored.parent.is_none() && stored.language == language)
			.map(|(id, stored)| BlockRecord {
				id: *id,
				block_type: stored.block_type.clone(),
				position: stored.position,
			})
			.collect();
		blocks.sort_by_key(|block| block.position);
		Ok(blocks)
	}

	async fn child_blocks(&self, block: BlockId) -> TransferResult<Vec<BlockRecord>> {
		let state = self.state.read();
		let mut blocks: Vec<BlockRecord> = state
			.blocks
			.iter()
			.filter(|(_, stored)| stored.parent == Some(block))
			.map(|(id, stored)| BlockRecord {
				id: *id,
				block_type: stored.block_type.clone(),
				position: stored.position,
			})
			.collect();
		blocks.sort_by_key(|block| block.position);
		Ok(blocks)
	}

	async fn block_payload(&self, block: BlockId) -> TransferResult<BlockPayload> {
		let state = self.state.read();
		let stored = state
			.blocks
			.get(&block)
			.ok_or_else(|| TransferError::NotFound(format!("block {}", block)))?;
		Ok(BlockPayload {
			block_type: stored.block_type.clone(),
			json_config: stored.json_config.clone(),
			fields: stored.fields.clone(),
		})
	}
}

#[async_trait]
impl ContentHost for MemoryHost {
	async fn create_page(&self, page: NewPage) -> TransferResult<CreatedPage> {
		let mut state = self.state.write();
		if let Some(parent) = page.parent
			&& !state.pages.contains_key(&parent)
		{
			return Err(TransferError::Host(format!("Parent page {} does not exist", parent)));
		}

		let page_id = state.next_id();
		let content_id = state.next_id();
		state.pages.insert(
			page_id,
			StoredPage {
				record: PageRecord {
					id: page_id,
					reverse_id: page.reverse_id,
					title: page.title.clone(),
					template: page.template.clone(),
					in_navigation: page.in_navigation,
					languages: vec![page.language.clone()],
				},
				parent: page.parent,
			},
		);
		let slug = slugify(&page.title);
		state.page_contents.insert(
			content_id,
			StoredPageContent {
				page: page_id,
				record: PageContentRecord {
					id: content_id,
					language: page.language,
					title: page.title.clone(),
					slug,
					page_title: String::new(),
					menu_title: String::new(),
					meta_description: String::new(),
					in_navigation: page.in_navigation,
					template: page.template.clone(),
				},
			},
		);
		self.create_slots(&mut state, ContentRef::Page(content_id), &page.template);

		Ok(CreatedPage {
			page: page_id,
			content: content_id,
		})
	}

	async fn create_page_content(&self, content: NewPageContent) -> TransferResult<ContentId> {
		let mut state = self.state.write();
		let stored = state
			.pages
			.get_mut(&content.page)
			.ok_or_else(|| TransferError::Host(format!("Page {} does not exist", content.page)))?;
		if !stored.record.languages.contains(&content.language) {
			stored.record.languages.push(content.language.clone());
		}

		let content_id = state.next_id();
		let template = content.template.clone();
		state.page_contents.insert(
			content_id,
			StoredPageContent {
				page: content.page,
				record: PageContentRecord {
					id: content_id,
					language: content.language,
					title: content.title,
					slug: content.slug,
					page_title: content.page_title,
					menu_title: content.menu_title,
					meta_description: content.meta_description,
					in_navigation: content.in_navigation,
					template: content.template,
				},
			},
		);
		self.create_slots(&mut state, ContentRef::Page(content_id), &template);
		Ok(content_id)
	}

	async fn create_snippet(&self, snippet: NewSnippet) -> TransferResult<CreatedSnippet> {
		let mut state = self.state.write();
		let snippet_id = state.next_id();
		let content_id = state.next_id();
		state.snippets.insert(
			snippet_id,
			SnippetRecord {
				id: snippet_id,
				category: snippet.category,
				languages: vec![snippet.language.clone()],
			},
		);
		state.snippet_contents.insert(
			content_id,
			StoredSnippetContent {
				snippet: snippet_id,
				record: SnippetContentRecord {
					id: content_id,
					language: snippet.language,
					name: snippet.name,
					template: snippet.template.clone(),
				},
			},
		);
		self.create_slots(&mut state, ContentRef::Snippet(content_id), &snippet.template);
		Ok(CreatedSnippet {
			snippet: snippet_id,
			content: content_id,
		})
	}

	async fn create_snippet_content(&self, content: NewSnippetContent) -> TransferResult<ContentId> {
		let mut state = self.state.write();
		let stored = state
			.snippets
			.get_mut(&content.snippet)
			.ok_or_else(|| TransferError::Host(format!("Alias {} does not exist", content.snippet)))?;
		if !stored.languages.contains(&content.language) {
			stored.languages.push(content.language.clone());
		}

		let content_id = state.next_id();
		let template = content.template.clone();
		state.snippet_contents.insert(
			content_id,
			StoredSnippetContent {
				snippet: content.snippet,
				record: SnippetContentRecord {
					id: content_id,
					language: content.language,
					name: content.name,
					template: content.template,
				},
			},
		);
		self.create_slots(&mut state, ContentRef::Snippet(content_id), &template);
		Ok(content_id)
	}

	async fn slot(&self, content: ContentRef, slot: &str) -> TransferResult<Option<SlotId>> {
		Ok(self
			.state
			.read()
			.slots
			.values()
			.find(|stored| stored.owner == content && stored.record.slot == slot)
			.map(|stored| stored.record.id))
	}

	async fn create_block(&self, block: NewBlock) -> TransferResult<BlockId> {
		self.check_fields(&block.block_type, &block.config)?;

		let mut state = self.state.write();
		if !state.slots.contains_key(&block.slot) {
			return Err(TransferError::Host(format!("Slot {} does not exist", block.slot)));
		}
		if let Some(parent) = block.parent
			&& !state.blocks.contains_key(&parent)
		{
			return Err(TransferError::Host(format!("Parent block {} does not exist", parent)));
		}

		let position = state
			.blocks
			.values()
			.filter(|stored| {
				stored.slot == block.slot && stored.parent == block.parent && stored.language == block.language
			})
			.count() as u32;
		let (json_config, fields) = match block.config {
			BlockConfig::Json(config) => (Some(config), IndexMap::new()),
			BlockConfig::Fields(arguments) => (
				None,
				arguments
					.into_iter()
					.map(|(key, argument)| (key, field_value(argument)))
					.collect(),
			),
		};

		let id = state.next_id();
		state.blocks.insert(
			id,
			StoredBlock {
				slot: block.slot,
				language: block.language,
				parent: block.parent,
				position,
				block_type: block.block_type,
				json_config,
				fields,
			},
		);
		Ok(id)
	}

	async fn block_json_config(&self, block: BlockId) -> TransferResult<Option<Config>> {
		Ok(self
			.state
			.read()
			.blocks
			.get(&block)
			.and_then(|stored| stored.json_config.clone()))
	}

	async fn save_block_json_config(&self, block: BlockId, config: Config) -> TransferResult<()> {
		let mut state = self.state.write();
		let stored = state
			.blocks
			.get_mut(&block)
			.ok_or_else(|| TransferError::Host(format!("Block {} does not exist", block)))?;
		stored.json_config = Some(config);
		Ok(())
	}
}

fn slugify(title: &str) -> String {
	let mut slug = String::with_capacity(title.len());
	for c in title.chars() {
		if c.is_alphanumeric() {
			slug.extend(c.to_lowercase());
		} else if !slug.is_empty() && !slug.ends_with('-') {
			slug.push('-');
		}
	}
	slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn new_page(title: &str, parent: Option<PageId>) -> NewPage {
		NewPage {
			title: title.to_string(),
			template: "page.html".to_string(),
			language: "en".to_string(),
			parent,
			in_navigation: true,
			reverse_id: None,
		}
	}

	fn host() -> MemoryHost {
		MemoryHost::new()
			.with_template("page.html", ["content", "sidebar"])
			.with_block_type("TextPlugin", ["body", "json", "rte"])
	}

	#[rstest]
	#[case("About Us", "about-us")]
	#[case("  Team & Co. ", "team-co")]
	#[case("Über", "über")]
	fn test_slugify(#[case] title: &str, #[case] expected: &str) {
		assert_eq!(slugify(title), expected);
	}

	#[rstest]
	#[tokio::test]
	async fn test_template_slots_in_order() {
		let host = host();

		let created = host.create_page(new_page("Home", None)).await.unwrap();
		let slots = host.slots(ContentRef::Page(created.content)).await.unwrap();

		let names: Vec<&str> = slots.iter().map(|slot| slot.slot.as_str()).collect();
		assert_eq!(names, vec!["content", "sidebar"]);
	}

	#[rstest]
	#[tokio::test]
	async fn test_undeclared_template_uses_default_slots() {
		let host = host().with_default_slots(["main", "footer"]);
		let mut page = new_page("Landing", None);
		page.template = "landing.html".to_string();

		let created = host.create_page(page).await.unwrap();
		let slots = host.slots(ContentRef::Page(created.content)).await.unwrap();

		let names: Vec<&str> = slots.iter().map(|slot| slot.slot.as_str()).collect();
		assert_eq!(names, vec!["main", "footer"]);
	}

	#[rstest]
	#[tokio::test]
	async fn test_create_block_rejects_unknown_type_and_field() {
		let host = host();
		let created = host.create_page(new_page("Home", None)).await.unwrap();
		let slot = host
			.slot(ContentRef::Page(created.content), "content")
			.await
			.unwrap()
			.unwrap();
		let block = |block_type: &str, key: &str| NewBlock {
			slot,
			block_type: block_type.to_string(),
			language: "en".to_string(),
			parent: None,
			config: BlockConfig::Fields(IndexMap::from([(key.to_string(), BlockArg::Value(json!("x")))])),
		};

		let unknown_type = host.create_block(block("MapPlugin", "body")).await;
		let unknown_field = host.create_block(block("TextPlugin", "colour")).await;
		let accepted = host.create_block(block("TextPlugin", "body")).await;

		assert!(matches!(unknown_type, Err(TransferError::Host(_))));
		assert!(matches!(unknown_field, Err(TransferError::Host(_))));
		assert!(accepted.is_ok());
		assert_eq!(host.block_count(), 1);
	}

	#[rstest]
	#[tokio::test]
	async fn test_pages_are_catalog_entities() {
		let host = host();
		let root = host.create_page(new_page("Home", None)).await.unwrap();
		let mut not_found = new_page("Not Found", Some(root.page));
		not_found.reverse_id = Some("error-404".to_string());
		let child = host.create_page(not_found).await.unwrap();

		let pages = host
			.filter("cms.page", &[Lookup::exact("reverse_id", "error-404")])
			.await
			.unwrap();

		assert_eq!(pages.len(), 1);
		assert_eq!(pages[0].pk, json!(child.page));
		assert_eq!(pages[0].absolute_url.as_deref(), Some("/home/not-found/"));
	}

	#[rstest]
	#[tokio::test]
	async fn test_unknown_model() {
		let host = host();

		let result = host.filter("shop.voucher", &[]).await;
		host.register_model("shop.voucher");
		let registered = host.filter("shop.voucher", &[]).await;

		assert!(matches!(result, Err(TransferError::UnknownModel(_))));
		assert!(registered.unwrap().is_empty());
	}

	#[rstest]
	#[tokio::test]
	async fn test_remove_block_removes_descendants() {
		let host = host().with_open_block_type("RowPlugin");
		let created = host.create_page(new_page("Home", None)).await.unwrap();
		let slot = host
			.slot(ContentRef::Page(created.content), "content")
			.await
			.unwrap()
			.unwrap();
		let row = host
			.create_block(NewBlock {
				slot,
				block_type: "RowPlugin".to_string(),
				language: "en".to_string(),
				parent: None,
				config: BlockConfig::Json(Config::new()),
			})
			.await
			.unwrap();
		host.create_block(NewBlock {
			slot,
			block_type: "RowPlugin".to_string(),
			language: "en".to_string(),
			parent: Some(row),
			config: BlockConfig::Json(Config::new()),
		})
		.await
		.unwrap();

		assert!(host.remove_block(row));

		assert_eq!(host.block_count(), 0);
		assert!(!host.remove_block(row));
	}
}
