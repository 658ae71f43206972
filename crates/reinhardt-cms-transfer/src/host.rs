//! Contracts with the CMS instance on either side of a transfer.
//!
//! The transfer code never touches storage directly. It reads a live tree
//! through [`ContentSource`], recreates one through [`ContentHost`] and looks
//! up foreign entities through [`EntityCatalog`]. Handles are plain integer
//! identifiers assigned by the host.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TransferResult;
use crate::items::Config;
use crate::reference::FieldValue;

/// Identifier of a page.
pub type PageId = i64;
/// Identifier of a localized page content or an alias content.
pub type ContentId = i64;
/// Identifier of a slot (placeholder).
pub type SlotId = i64;
/// Identifier of a content block (plugin).
pub type BlockId = i64;
/// Identifier of an alias.
pub type SnippetId = i64;

/// A foreign entity as seen by the transfer code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
	/// Fully qualified type name (`"app_label.model"`).
	pub model: String,

	/// Primary key.
	pub pk: Value,

	/// Display string.
	pub name: String,

	/// Field values usable for lookups (content hash, business code, ...).
	#[serde(default)]
	pub fields: Config,

	/// Canonical absolute path, for entities that can be linked to.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub absolute_url: Option<String>,
}

impl Entity {
	/// Creates an entity without lookup fields.
	pub fn new(model: impl Into<String>, pk: impl Into<Value>, name: impl Into<String>) -> Self {
		Self {
			model: model.into(),
			pk: pk.into(),
			name: name.into(),
			fields: Config::new(),
			absolute_url: None,
		}
	}

	/// Adds a lookup field.
	pub fn with_field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
		self.fields.insert(field.into(), value.into());
		self
	}

	/// Sets the canonical absolute path.
	pub fn with_absolute_url(mut self, url: impl Into<String>) -> Self {
		self.absolute_url = Some(url.into());
		self
	}

	/// Value of a lookup field. `"pk"` addresses the primary key.
	pub fn field(&self, field: &str) -> Option<&Value> {
		if field == "pk" {
			Some(&self.pk)
		} else {
			self.fields.get(field)
		}
	}

	/// Primary key as it appears inside link strings (`"cms.page:42"`).
	pub fn pk_string(&self) -> String {
		match &self.pk {
			Value::String(pk) => pk.clone(),
			other => other.to_string(),
		}
	}
}

/// A single filter condition of an entity query.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
	/// `field = value`
	Exact {
		/// Field name (`"pk"` for the primary key).
		field: String,
		/// Expected value.
		value: Value,
	},
	/// `field IN (values)`
	In {
		/// Field name (`"pk"` for the primary key).
		field: String,
		/// Accepted values.
		values: Vec<Value>,
	},
}

impl Lookup {
	/// Builds an exact lookup.
	pub fn exact(field: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::Exact {
			field: field.into(),
			value: value.into(),
		}
	}

	/// Builds an `IN` lookup.
	pub fn any_of(field: impl Into<String>, values: Vec<Value>) -> Self {
		Self::In {
			field: field.into(),
			values,
		}
	}

	/// Evaluates the lookup against an entity.
	pub fn matches(&self, entity: &Entity) -> bool {
		match self {
			Self::Exact { field, value } => entity.field(field) == Some(value),
			Self::In { field, values } => entity
				.field(field)
				.is_some_and(|actual| values.contains(actual)),
		}
	}
}

/// Query access to the entities referenced from block configs.
#[async_trait]
pub trait EntityCatalog: Send + Sync {
	/// Fetches one entity by primary key.
	///
	/// Returns `Err(TransferError::UnknownModel)` for types the catalog does not
	/// know.
	async fn get(&self, model: &str, pk: &Value) -> TransferResult<Option<Entity>>;

	/// Entities of `model` matching every lookup.
	async fn filter(&self, model: &str, lookups: &[Lookup]) -> TransferResult<Vec<Entity>>;

	/// All entities of `model`.
	async fn all(&self, model: &str) -> TransferResult<Vec<Entity>> {
		self.filter(model, &[]).await
	}
}

/// Owner of a set of slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentRef {
	/// A localized page content.
	Page(ContentId),
	/// An alias content.
	Snippet(ContentId),
}

/// A page of the live tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecord {
	/// Identifier.
	pub id: PageId,
	/// Reverse id, if any.
	pub reverse_id: Option<String>,
	/// Title in the default language.
	pub title: String,
	/// Template identifier.
	pub template: String,
	/// Whether the page is shown in navigation.
	pub in_navigation: bool,
	/// Languages the page has contents in.
	pub languages: Vec<String>,
}

/// A localized content of a live page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContentRecord {
	/// Identifier.
	pub id: ContentId,
	/// Language code.
	pub language: String,
	/// Title.
	pub title: String,
	/// Slug of the page in this language.
	pub slug: String,
	/// Title used in the HTML head.
	pub page_title: String,
	/// Title used in menus.
	pub menu_title: String,
	/// Meta description.
	pub meta_description: String,
	/// Whether the page is shown in navigation.
	pub in_navigation: bool,
	/// Template identifier.
	pub template: String,
}

/// A live alias.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetRecord {
	/// Identifier.
	pub id: SnippetId,
	/// Category name.
	pub category: String,
	/// Languages the alias has contents in.
	pub languages: Vec<String>,
}

/// A localized content of a live alias.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetContentRecord {
	/// Identifier.
	pub id: ContentId,
	/// Language code.
	pub language: String,
	/// Alias name in this language.
	pub name: String,
	/// Template identifier.
	pub template: String,
}

/// A live slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRecord {
	/// Identifier.
	pub id: SlotId,
	/// Slot name.
	pub slot: String,
	/// Extra template context.
	pub extra_context: Config,
}

/// A live block without its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord {
	/// Identifier.
	pub id: BlockId,
	/// Block type.
	pub block_type: String,
	/// Position among its siblings.
	pub position: u32,
}

/// The concrete data of a live block.
#[derive(Debug, Clone)]
pub struct BlockPayload {
	/// Block type.
	pub block_type: String,
	/// Opaque config of a pass-through JSON block.
	pub json_config: Option<Config>,
	/// Editable field values in declaration order.
	pub fields: IndexMap<String, FieldValue>,
}

impl BlockPayload {
	/// Payload of a pass-through JSON block.
	pub fn json(block_type: impl Into<String>, config: Config) -> Self {
		Self {
			block_type: block_type.into(),
			json_config: Some(config),
			fields: IndexMap::new(),
		}
	}

	/// Payload of a field-based block.
	pub fn fields(block_type: impl Into<String>, fields: IndexMap<String, FieldValue>) -> Self {
		Self {
			block_type: block_type.into(),
			json_config: None,
			fields,
		}
	}
}

/// Read access to a live content tree, used by the exporters.
#[async_trait]
pub trait ContentSource: Send + Sync {
	/// Looks up a page.
	async fn page(&self, page: PageId) -> TransferResult<Option<PageRecord>>;

	/// Localized contents of a page.
	async fn page_contents(&self, page: PageId) -> TransferResult<Vec<PageContentRecord>>;

	/// Direct children of a page in tree order.
	async fn child_pages(&self, page: PageId) -> TransferResult<Vec<PageId>>;

	/// Looks up an alias.
	async fn snippet(&self, snippet: SnippetId) -> TransferResult<Option<SnippetRecord>>;

	/// Contents of an alias.
	async fn snippet_contents(&self, snippet: SnippetId) -> TransferResult<Vec<SnippetContentRecord>>;

	/// Slots of a content in the order its template declares them.
	async fn slots(&self, content: ContentRef) -> TransferResult<Vec<SlotRecord>>;

	/// Root blocks of a slot for one language, in display order.
	async fn root_blocks(&self, slot: SlotId, language: &str) -> TransferResult<Vec<BlockRecord>>;

	/// Children of a block, by position.
	async fn child_blocks(&self, block: BlockId) -> TransferResult<Vec<BlockRecord>>;

	/// Concrete payload of a block.
	async fn block_payload(&self, block: BlockId) -> TransferResult<BlockPayload>;
}

/// Parameters for creating a page together with its first content.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPage {
	/// Title of the first content.
	pub title: String,
	/// Template identifier.
	pub template: String,
	/// Language of the first content.
	pub language: String,
	/// Parent page, `None` for a root page.
	pub parent: Option<PageId>,
	/// Whether the page is shown in navigation.
	pub in_navigation: bool,
	/// Reverse id.
	pub reverse_id: Option<String>,
}

/// Handles returned by [`ContentHost::create_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedPage {
	/// The new page.
	pub page: PageId,
	/// Its first localized content.
	pub content: ContentId,
}

/// Parameters for adding a localized content to an existing page.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPageContent {
	/// Language code.
	pub language: String,
	/// Title.
	pub title: String,
	/// Owning page.
	pub page: PageId,
	/// Slug.
	pub slug: String,
	/// Title used in the HTML head.
	pub page_title: String,
	/// Title used in menus.
	pub menu_title: String,
	/// Meta description.
	pub meta_description: String,
	/// Whether the page is shown in navigation.
	pub in_navigation: bool,
	/// Template identifier.
	pub template: String,
	/// Author recorded on the content.
	pub created_by: String,
}

/// Parameters for creating an alias together with its first content.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSnippet {
	/// Category name.
	pub category: String,
	/// Name of the first content.
	pub name: String,
	/// Language of the first content.
	pub language: String,
	/// Template identifier.
	pub template: String,
}

/// Handles returned by [`ContentHost::create_snippet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedSnippet {
	/// The new alias.
	pub snippet: SnippetId,
	/// Its first content.
	pub content: ContentId,
}

/// Parameters for adding a content to an existing alias.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSnippetContent {
	/// Owning alias.
	pub snippet: SnippetId,
	/// Language code.
	pub language: String,
	/// Alias name in this language.
	pub name: String,
	/// Template identifier.
	pub template: String,
}

/// A config argument handed to [`ContentHost::create_block`].
#[derive(Debug, Clone, PartialEq)]
pub enum BlockArg {
	/// A plain value.
	Value(Value),
	/// A resolved single reference; `None` when nothing matched.
	Entity(Option<Entity>),
	/// A resolved bulk reference.
	Entities {
		/// Referenced type.
		model: String,
		/// Matching entities.
		entities: Vec<Entity>,
	},
}

/// Configuration of a block to create.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockConfig {
	/// Pass-through JSON config, stored as is.
	Json(Config),
	/// Field arguments.
	Fields(IndexMap<String, BlockArg>),
}

/// Parameters for creating a content block.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlock {
	/// Target slot.
	pub slot: SlotId,
	/// Block type.
	pub block_type: String,
	/// Language code.
	pub language: String,
	/// Parent block, `None` for a root block.
	pub parent: Option<BlockId>,
	/// Configuration.
	pub config: BlockConfig,
}

/// Write access to a destination instance, used by the importers and the
/// link-rewrite pass.
#[async_trait]
pub trait ContentHost: Send + Sync {
	/// Creates a page together with its first localized content.
	async fn create_page(&self, page: NewPage) -> TransferResult<CreatedPage>;

	/// Adds a localized content to an existing page.
	async fn create_page_content(&self, content: NewPageContent) -> TransferResult<ContentId>;

	/// Creates an alias together with its first content.
	async fn create_snippet(&self, snippet: NewSnippet) -> TransferResult<CreatedSnippet>;

	/// Adds a content to an existing alias.
	async fn create_snippet_content(&self, content: NewSnippetContent) -> TransferResult<ContentId>;

	/// Slot of a content by name, `None` when the template has no such slot.
	async fn slot(&self, content: ContentRef, slot: &str) -> TransferResult<Option<SlotId>>;

	/// Creates a block and returns its identifier.
	async fn create_block(&self, block: NewBlock) -> TransferResult<BlockId>;

	/// Stored config of a pass-through JSON block, `None` if the block no
	/// longer exists.
	async fn block_json_config(&self, block: BlockId) -> TransferResult<Option<Config>>;

	/// Replaces the stored config of a pass-through JSON block.
	async fn save_block_json_config(&self, block: BlockId, config: Config) -> TransferResult<()>;
}
