//! Portable references to foreign entities.
//!
//! A live reference in a block config is persisted as a descriptor mapping:
//!
//! ```json
//! {"model": "filer.image", "pk": 58, "name": "photo.jpg", "sha1": "abc"}
//! {"model": "catalog.product", "p_keys": [1, 2, 3], "name": "Chairs"}
//! ```
//!
//! [`ReferenceCodec`] produces descriptors and coerces every other config
//! value to JSON. [`ReferenceResolver`] turns descriptors back into entities of
//! a destination catalog.

mod codec;
mod descriptor;
mod resolver;
mod value;

pub use codec::ReferenceCodec;
pub use descriptor::{ReferenceDescriptor, ReferenceTarget};
pub use resolver::ReferenceResolver;
pub use value::{DeferredText, FieldValue, format_date, format_datetime, format_duration, format_time};
