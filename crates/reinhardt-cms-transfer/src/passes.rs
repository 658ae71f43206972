//! Reference-update and link-rewrite passes.
//!
//! Both passes work on a whole item tree and follow the same two phases:
//! resolve everything against the destination while only reading the tree,
//! then apply the results in one mutable walk. Misses are returned as data.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{TransferError, TransferResult};
use crate::host::{BlockId, ContentHost, Entity, EntityCatalog};
use crate::items::{Config, ContentBlockItem, TransferItem};
use crate::reference::{ReferenceDescriptor, ReferenceResolver};
use crate::settings::TransferSettings;

/// A reference descriptor that matched nothing in the destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceMiss {
	/// Type of the block holding the descriptor.
	pub block_type: String,
	/// Config key of the descriptor.
	pub key: String,
	/// The descriptor as it was before the pass.
	pub descriptor: Value,
}

impl fmt::Display for ReferenceMiss {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} not found.", self.descriptor)
	}
}

/// An internal link whose target path does not exist in the destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkMiss {
	/// Live block holding the link.
	pub block: BlockId,
	/// Config key of the link.
	pub key: String,
	/// The link value as it was exported.
	pub link: Value,
}

impl fmt::Display for LinkMiss {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} not found.", self.link)
	}
}

/// Key of a link value inside a JSON block config.
pub const INTERNAL_LINK_KEY: &str = "internal_link";

/// Attribute mapping the unresolved originals are stashed in.
pub const ATTRIBUTES_KEY: &str = "attributes";

enum Resolution {
	Found(Vec<Entity>),
	Missing,
}

/// Rebinds reference descriptors against the destination catalog before an
/// import.
///
/// Running the pass again on its own output changes nothing.
pub struct ReferenceUpdater<'a> {
	resolver: ReferenceResolver<'a>,
}

impl<'a> ReferenceUpdater<'a> {
	/// Creates the pass.
	pub fn new(catalog: &'a dyn EntityCatalog, settings: &'a TransferSettings) -> Self {
		Self {
			resolver: ReferenceResolver::new(catalog, settings),
		}
	}

	/// Re-resolves every descriptor in every block config of `item`.
	///
	/// Descriptors of JSON blocks are looked up inside the `_json` config.
	/// A descriptor that resolves gets its `pk` (or `p_keys`) rewritten; one
	/// that does not is reported and its key nulled.
	pub async fn update_model_refs<T: TransferItem>(&self, item: &mut T) -> Vec<ReferenceMiss> {
		let mut plan: HashMap<usize, Vec<(String, Resolution)>> = HashMap::new();
		for (index, block) in item.collect_plugins().into_iter().enumerate() {
			let Some(scope) = block.reference_scope() else {
				continue;
			};
			for (key, value) in scope {
				let Some(descriptor) = ReferenceDescriptor::parse(value) else {
					continue;
				};
				let found = self
					.resolver
					.search_related_objects(&descriptor, &block.block_type)
					.await;
				let resolution = if found.is_empty() {
					Resolution::Missing
				} else {
					Resolution::Found(found)
				};
				plan.entry(index).or_default().push((key.clone(), resolution));
			}
		}

		let mut misses = Vec::new();
		let mut updated = 0usize;
		let mut index = 0usize;
		item.visit_plugins_mut(&mut |block: &mut ContentBlockItem| {
			let current = index;
			index += 1;
			let Some(resolutions) = plan.remove(&current) else {
				return;
			};
			let block_type = block.block_type.clone();
			let Some(scope) = block.reference_scope_mut() else {
				return;
			};
			for (key, resolution) in resolutions {
				let Some(descriptor) = scope.get_mut(&key).and_then(Value::as_object_mut) else {
					continue;
				};
				match resolution {
					Resolution::Found(entities) => {
						rebind(descriptor, &entities);
						updated += 1;
					}
					Resolution::Missing => {
						let original = Value::Object(descriptor.clone());
						warn!(block_type = %block_type, key = %key, descriptor = %original, "Reference not found");
						clear(descriptor);
						misses.push(ReferenceMiss {
							block_type: block_type.clone(),
							key,
							descriptor: original,
						});
					}
				}
			}
		});

		info!(updated, missing = misses.len(), "Updated model references");
		misses
	}
}

fn is_bulk(descriptor: &Config) -> bool {
	descriptor.contains_key("p_keys")
}

fn rebind(descriptor: &mut Config, entities: &[Entity]) {
	if is_bulk(descriptor) {
		let keys = entities.iter().map(|entity| entity.pk.clone()).collect();
		descriptor.insert("p_keys".to_string(), Value::Array(keys));
	} else if let Some(entity) = entities.first() {
		descriptor.insert("pk".to_string(), entity.pk.clone());
	}
}

/// Nulls a descriptor that matched nothing. Single references stay single.
fn clear(descriptor: &mut Config) {
	if is_bulk(descriptor) {
		descriptor.insert("p_keys".to_string(), Value::Array(Vec::new()));
	} else {
		descriptor.insert("pk".to_string(), Value::Null);
	}
}

/// Rewrites internal links of imported JSON blocks to destination ids.
///
/// Links are `"<model>:<absolute path>"` strings stored under
/// `internal_link` in a mapping of the block's JSON config. Resolved links
/// become `"<model>:<pk>"`. Unresolved ones point at the fallback page and
/// the original is kept in `attributes["data-link-<key>"]`.
pub struct LinkRewriter<'a> {
	host: &'a dyn ContentHost,
	resolver: ReferenceResolver<'a>,
}

impl<'a> LinkRewriter<'a> {
	/// Creates the pass.
	pub fn new(host: &'a dyn ContentHost, catalog: &'a dyn EntityCatalog, settings: &'a TransferSettings) -> Self {
		Self {
			host,
			resolver: ReferenceResolver::new(catalog, settings),
		}
	}

	/// Rewrites the links of every imported JSON block of `item`, in the
	/// live block and in the item.
	///
	/// Fails with [`TransferError::MissingFallback`] before touching anything
	/// if the fallback page does not exist. When a host call fails midway,
	/// the item still receives the links of every block saved before the
	/// failure and the error is returned.
	pub async fn update_internal_links<T: TransferItem>(&self, item: &mut T) -> TransferResult<Vec<LinkMiss>> {
		let settings = self.resolver.settings();
		let fallback = self
			.resolver
			.fallback_page()
			.await
			.ok_or_else(|| TransferError::MissingFallback(settings.fallback_reverse_id.clone()))?;
		let fallback_link = format!("{}:{}", settings.page_model, fallback.pk_string());

		let candidates: Vec<(usize, BlockId, Config)> = item
			.collect_plugins()
			.into_iter()
			.enumerate()
			.filter_map(|(index, block)| Some((index, block.id?, block.json_config()?.clone())))
			.collect();

		let mut plan: HashMap<usize, Vec<(String, String)>> = HashMap::new();
		let mut misses = Vec::new();
		let mut outcome = Ok(());

		for (index, block, exported) in candidates {
			match self.rewrite_block(block, &exported, &fallback_link).await {
				Ok(Some(rewrite)) => {
					plan.insert(index, rewrite.links);
					misses.extend(rewrite.misses);
				}
				Ok(None) => {}
				Err(error) => {
					warn!(block, error = %error, "Stopped rewriting internal links");
					outcome = Err(error);
					break;
				}
			}
		}

		let mut rewritten = 0usize;
		let mut index = 0usize;
		item.visit_plugins_mut(&mut |block: &mut ContentBlockItem| {
			let current = index;
			index += 1;
			let Some(links) = plan.remove(&current) else {
				return;
			};
			let Some(config) = block.json_config_mut() else {
				return;
			};
			for (key, link) in links {
				if let Some(value) = config.get_mut(&key).and_then(Value::as_object_mut) {
					value.insert(INTERNAL_LINK_KEY.to_string(), Value::String(link));
					rewritten += 1;
				}
			}
		});

		info!(rewritten, missing = misses.len(), "Updated internal links");
		outcome.map(|()| misses)
	}

	/// Rewrites and saves one live block. Returns `None` when the block is
	/// gone or carries no rewritable link.
	async fn rewrite_block(
		&self,
		block: BlockId,
		exported: &Config,
		fallback_link: &str,
	) -> TransferResult<Option<BlockRewrite>> {
		let Some(mut live) = self.host.block_json_config(block).await? else {
			debug!(block, "Imported block no longer exists");
			return Ok(None);
		};

		let link_keys: Vec<String> = live
			.iter()
			.filter(|(_, value)| {
				value
					.as_object()
					.is_some_and(|map| map.contains_key(INTERNAL_LINK_KEY))
			})
			.map(|(key, _)| key.clone())
			.collect();

		let mut rewrite = BlockRewrite::default();
		for key in link_keys {
			let Some(original) = exported.get(&key).and_then(Value::as_object) else {
				continue;
			};
			let Some(link) = original.get(INTERNAL_LINK_KEY).and_then(Value::as_str) else {
				continue;
			};
			let Some((model, path)) = link.split_once(':') else {
				continue;
			};
			if !path.starts_with('/') {
				continue;
			}

			let rewritten = match self.resolver.get_object_by_abs_url(model, path).await {
				Some(target) => {
					debug!(block, key = %key, link, "Resolved internal link");
					format!("{}:{}", model, target.pk_string())
				}
				None => {
					warn!(block, key = %key, link, "Internal link target not found");
					stash_original(&mut live, &key, original)?;
					rewrite.misses.push(LinkMiss {
						block,
						key: key.clone(),
						link: Value::Object(original.clone()),
					});
					fallback_link.to_string()
				}
			};

			if let Some(value) = live.get_mut(&key).and_then(Value::as_object_mut) {
				value.insert(INTERNAL_LINK_KEY.to_string(), Value::String(rewritten.clone()));
			}
			rewrite.links.push((key, rewritten));
		}

		if rewrite.links.is_empty() {
			return Ok(None);
		}
		self.host.save_block_json_config(block, live).await?;
		Ok(Some(rewrite))
	}
}

/// Links of one block that reached the host.
#[derive(Default)]
struct BlockRewrite {
	links: Vec<(String, String)>,
	misses: Vec<LinkMiss>,
}

fn stash_original(live: &mut Config, key: &str, original: &Config) -> TransferResult<()> {
	let stashed = serde_json::to_string(original)?;
	let attributes = live
		.entry(ATTRIBUTES_KEY)
		.or_insert_with(|| Value::Object(Config::new()));
	if !attributes.is_object() {
		*attributes = Value::Object(Config::new());
	}
	if let Some(attributes) = attributes.as_object_mut() {
		attributes.insert(format!("data-link-{}", key), Value::String(stashed));
	}
	Ok(())
}
