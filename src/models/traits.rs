//! Trait definitions for domain models
//!
//! Every entity exposes its key through [`EntityModel`] and converts to and
//! from Arrow record batches through [`ArrowSchema`].

use std::fmt::Debug;
use std::hash::Hash;

use arrow::datatypes::{Field, FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// A trait that all entity records implement.
pub trait EntityModel: Clone + Send + Sync + Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Ord + Send + Sync + Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> Self::Id;

    /// Create a unique key string representation of the identifier
    fn key(&self) -> String;
}

/// A trait for models stored as one Arrow table each.
///
/// Column names in the table files match the struct field names; the
/// conversion itself goes through the serde representation via `serde_arrow`.
pub trait ArrowSchema: Serialize + DeserializeOwned + Sized {
    /// Logical table name, also the file stem used by the loader
    const TABLE: &'static str;

    /// Get the Arrow fields for this model
    fn fields() -> Vec<Field>;

    /// Get the schema as Arc<Schema>
    fn schema_ref() -> std::sync::Arc<Schema> {
        std::sync::Arc::new(Schema::new(Self::fields()))
    }

    /// Convert a `RecordBatch` to a vector of this model
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch(batch)?)
    }

    /// Convert a slice of this model to a `RecordBatch`
    fn to_record_batch(models: &[Self]) -> Result<RecordBatch> {
        let fields: Vec<FieldRef> = Self::fields().into_iter().map(FieldRef::new).collect();
        Ok(serde_arrow::to_record_batch(&fields, &models)?)
    }
}
