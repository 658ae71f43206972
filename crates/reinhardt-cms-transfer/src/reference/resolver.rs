use serde_json::Value;
use tracing::{debug, warn};

use super::descriptor::{ReferenceDescriptor, ReferenceTarget};
use crate::error::TransferResult;
use crate::host::{BlockArg, Entity, EntityCatalog, Lookup};
use crate::settings::TransferSettings;

/// Resolves reference descriptors against a destination catalog.
///
/// None of the resolution methods fail: unknown models, malformed descriptors
/// and catalog errors all read as "not found".
#[derive(Clone, Copy)]
pub struct ReferenceResolver<'a> {
	catalog: &'a dyn EntityCatalog,
	settings: &'a TransferSettings,
}

impl<'a> ReferenceResolver<'a> {
	/// Creates a resolver.
	pub fn new(catalog: &'a dyn EntityCatalog, settings: &'a TransferSettings) -> Self {
		Self { catalog, settings }
	}

	/// Settings in use.
	pub fn settings(&self) -> &'a TransferSettings {
		self.settings
	}

	/// Looks up the single entity a descriptor names by `model` and `pk`.
	pub async fn get_related_object(&self, value: &Value) -> Option<Entity> {
		let descriptor = ReferenceDescriptor::parse(value)?;
		let pk = descriptor.pk()?;
		let found = self.catalog.get(&descriptor.model, pk).await;
		settle(&descriptor.model, found).flatten()
	}

	/// Turns a config value into a block-creation argument.
	///
	/// Plain values pass through; descriptors become the entity (or entities)
	/// they name in the destination.
	pub async fn resolve_argument(&self, value: &Value) -> BlockArg {
		let Some(descriptor) = ReferenceDescriptor::parse(value) else {
			return BlockArg::Value(value.clone());
		};
		match &descriptor.target {
			ReferenceTarget::Bulk(keys) => {
				let lookups = [Lookup::any_of("pk", keys.clone())];
				let found = self.catalog.filter(&descriptor.model, &lookups).await;
				BlockArg::Entities {
					model: descriptor.model.clone(),
					entities: settle(&descriptor.model, found).unwrap_or_default(),
				}
			}
			_ => BlockArg::Entity(self.get_related_object(value).await),
		}
	}

	/// Broad lookup used by the reference-update pass.
	///
	/// Tried in order, the first applicable step decides:
	///
	/// 1. the model's configured alternate lookup field, when the descriptor
	///    carries a value for it;
	/// 2. the name, for the alias model;
	/// 3. `p_keys`, never falling back to a single-key lookup;
	/// 4. `pk` (plus the content hash for the asset model), then the content
	///    hash alone for the asset model.
	pub async fn search_related_objects(
		&self,
		descriptor: &ReferenceDescriptor,
		block_type: &str,
	) -> Vec<Entity> {
		let model = descriptor.model.as_str();

		if let Some(field) = self.settings.lookup_field(model) {
			if let Some(value) = descriptor.lookup_value(field) {
				debug!(model, field, block_type, "Resolving reference by alternate lookup field");
				return self.filter(model, &[Lookup::exact(field, value)]).await;
			}
			debug!(model, field, block_type, "Descriptor lacks alternate lookup field");
		}

		if model == self.settings.snippet_model
			&& let Some(name) = &descriptor.name
		{
			debug!(model, name = %name, block_type, "Resolving alias reference by name");
			let lookup = Lookup::exact(self.settings.snippet_name_field.as_str(), name.as_str());
			return self.filter(model, &[lookup]).await;
		}

		if let ReferenceTarget::Bulk(keys) = &descriptor.target {
			return self.filter(model, &[Lookup::any_of("pk", keys.clone())]).await;
		}

		let hash = if model == self.settings.asset_model {
			descriptor.lookup_value(&self.settings.asset_hash_field)
		} else {
			None
		};

		if let Some(pk) = descriptor.pk() {
			let mut lookups = vec![Lookup::exact("pk", pk.clone())];
			if let Some(hash) = &hash {
				lookups.push(Lookup::exact(self.settings.asset_hash_field.as_str(), hash.clone()));
			}
			let found = self.filter(model, &lookups).await;
			if !found.is_empty() {
				return found;
			}
		}

		let Some(hash) = hash else {
			return Vec::new();
		};

		let mut found = self
			.filter(model, &[Lookup::exact(self.settings.asset_hash_field.as_str(), hash)])
			.await;
		if found.len() > 1 {
			warn!(
				model,
				block_type,
				matches = found.len(),
				"Content hash matches several assets, using the first"
			);
		}
		found.truncate(1);
		found
	}

	/// Finds the entity of `model` whose canonical absolute path is `path`.
	pub async fn get_object_by_abs_url(&self, model: &str, path: &str) -> Option<Entity> {
		let all = settle(model, self.catalog.all(model).await)?;
		all.into_iter()
			.find(|entity| entity.absolute_url.as_deref() == Some(path))
	}

	/// The page broken links are redirected to.
	pub async fn fallback_page(&self) -> Option<Entity> {
		let model = self.settings.page_model.as_str();
		let lookup = Lookup::exact("reverse_id", self.settings.fallback_reverse_id.as_str());
		self.filter(model, &[lookup]).await.into_iter().next()
	}

	async fn filter(&self, model: &str, lookups: &[Lookup]) -> Vec<Entity> {
		settle(model, self.catalog.filter(model, lookups).await).unwrap_or_default()
	}
}

fn settle<T>(model: &str, result: TransferResult<T>) -> Option<T> {
	match result {
		Ok(value) => Some(value),
		Err(error) => {
			debug!(model, error = %error, "Catalog lookup failed, treating as not found");
			None
		}
	}
}
