use serde_json::Value;

use crate::items::Config;

/// What a descriptor points at.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceTarget {
	/// A single entity (`pk`). The key may be `null` after a failed resolution.
	Single(Value),
	/// A set of entities (`p_keys`).
	Bulk(Vec<Value>),
	/// Neither key is present; only `name` or natural-key attributes.
	Unkeyed,
}

/// A parsed reference descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDescriptor {
	/// Fully qualified type name.
	pub model: String,
	/// Primary key(s). `p_keys` wins over `pk` when both are present.
	pub target: ReferenceTarget,
	/// Display string of the source entity.
	pub name: Option<String>,
	/// Every other key (content hash, business code, ...).
	pub attrs: Config,
}

impl ReferenceDescriptor {
	/// Parses a config value. Returns `None` unless it is a mapping with a
	/// string `model` key.
	pub fn parse(value: &Value) -> Option<Self> {
		let map = value.as_object()?;
		let model = map.get("model")?.as_str()?.to_string();

		let target = if let Some(keys) = map.get("p_keys") {
			ReferenceTarget::Bulk(keys.as_array().cloned().unwrap_or_default())
		} else if let Some(pk) = map.get("pk") {
			ReferenceTarget::Single(pk.clone())
		} else {
			ReferenceTarget::Unkeyed
		};

		let name = map.get("name").map(|name| match name {
			Value::String(name) => name.clone(),
			other => other.to_string(),
		});

		let attrs = map
			.iter()
			.filter(|(key, _)| !matches!(key.as_str(), "model" | "pk" | "p_keys" | "name"))
			.map(|(key, value)| (key.clone(), value.clone()))
			.collect();

		Some(Self {
			model,
			target,
			name,
			attrs,
		})
	}

	/// Returns true for mappings carrying a `model` key.
	pub fn is_descriptor(value: &Value) -> bool {
		value
			.as_object()
			.is_some_and(|map| map.get("model").is_some_and(Value::is_string))
	}

	/// Value of a lookup field as carried by the descriptor.
	pub fn lookup_value(&self, field: &str) -> Option<Value> {
		match field {
			"pk" => match &self.target {
				ReferenceTarget::Single(pk) if !pk.is_null() => Some(pk.clone()),
				_ => None,
			},
			"name" if !self.attrs.contains_key("name") => self.name.clone().map(Value::String),
			_ => self.attrs.get(field).filter(|value| !value.is_null()).cloned(),
		}
	}

	/// Non-null primary key of a single reference.
	pub fn pk(&self) -> Option<&Value> {
		match &self.target {
			ReferenceTarget::Single(pk) if !pk.is_null() => Some(pk),
			_ => None,
		}
	}

	/// Builds the persisted mapping.
	pub fn to_value(&self) -> Value {
		let mut map = Config::new();
		map.insert("model".to_string(), Value::String(self.model.clone()));
		match &self.target {
			ReferenceTarget::Single(pk) => {
				map.insert("pk".to_string(), pk.clone());
			}
			ReferenceTarget::Bulk(keys) => {
				map.insert("p_keys".to_string(), Value::Array(keys.clone()));
			}
			ReferenceTarget::Unkeyed => {}
		}
		if let Some(name) = &self.name {
			map.insert("name".to_string(), Value::String(name.clone()));
		}
		for (key, value) in &self.attrs {
			map.insert(key.clone(), value.clone());
		}
		Value::Object(map)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_parse_single() {
		let value = json!({"model": "filer.image", "pk": 58, "name": "photo.jpg", "sha1": "abc"});

		let descriptor = ReferenceDescriptor::parse(&value).unwrap();

		assert_eq!(descriptor.model, "filer.image");
		assert_eq!(descriptor.target, ReferenceTarget::Single(json!(58)));
		assert_eq!(descriptor.name.as_deref(), Some("photo.jpg"));
		assert_eq!(descriptor.lookup_value("sha1"), Some(json!("abc")));
		assert_eq!(descriptor.to_value(), value);
	}

	#[rstest]
	fn test_parse_bulk() {
		let descriptor =
			ReferenceDescriptor::parse(&json!({"model": "catalog.product", "p_keys": [1, 2, 3]})).unwrap();

		assert_eq!(
			descriptor.target,
			ReferenceTarget::Bulk(vec![json!(1), json!(2), json!(3)])
		);
		assert_eq!(descriptor.pk(), None);
	}

	#[rstest]
	#[case(json!("filer.image"))]
	#[case(json!({"pk": 1}))]
	#[case(json!({"model": 3, "pk": 1}))]
	#[case(json!([{"model": "filer.image"}]))]
	fn test_parse_rejects_non_descriptors(#[case] value: Value) {
		assert!(ReferenceDescriptor::parse(&value).is_none());
		assert!(!ReferenceDescriptor::is_descriptor(&value));
	}

	#[rstest]
	fn test_null_pk_is_single_without_key() {
		let descriptor = ReferenceDescriptor::parse(&json!({"model": "filer.image", "pk": null})).unwrap();

		assert_eq!(descriptor.target, ReferenceTarget::Single(Value::Null));
		assert_eq!(descriptor.pk(), None);
		assert_eq!(descriptor.lookup_value("pk"), None);
	}

	#[rstest]
	fn test_name_lookup_value() {
		let descriptor =
			ReferenceDescriptor::parse(&json!({"model": "djangocms_alias.alias", "name": "Footer"})).unwrap();

		assert_eq!(descriptor.target, ReferenceTarget::Unkeyed);
		assert_eq!(descriptor.lookup_value("name"), Some(json!("Footer")));
	}
}
