//! Reference-table lookup trait
//!
//! The classification engine never knows where reference rows live. Anything
//! that can answer a (sex, kind, key) lookup can back an evaluator: the
//! in-memory [`StandardTable`](crate::reference::StandardTable), a database
//! adapter, or a test fixture.

use crate::error::Result;
use crate::models::{MeasureKey, ReferenceKind, Sex, Thresholds};
use std::sync::Arc;

/// Read-only source of growth reference thresholds
///
/// A lookup that finds no row returns `Ok(None)`. `Err` is reserved for a
/// repository that cannot answer at all; evaluators propagate it.
pub trait GrowthStandardRepository: Send + Sync {
    /// Find the thresholds for a (sex, kind, key) row
    fn lookup(&self, sex: Sex, kind: ReferenceKind, key: MeasureKey) -> Result<Option<Thresholds>>;
}

impl<T: GrowthStandardRepository + ?Sized> GrowthStandardRepository for &T {
    fn lookup(&self, sex: Sex, kind: ReferenceKind, key: MeasureKey) -> Result<Option<Thresholds>> {
        (**self).lookup(sex, kind, key)
    }
}

impl<T: GrowthStandardRepository + ?Sized> GrowthStandardRepository for Box<T> {
    fn lookup(&self, sex: Sex, kind: ReferenceKind, key: MeasureKey) -> Result<Option<Thresholds>> {
        (**self).lookup(sex, kind, key)
    }
}

impl<T: GrowthStandardRepository + ?Sized> GrowthStandardRepository for Arc<T> {
    fn lookup(&self, sex: Sex, kind: ReferenceKind, key: MeasureKey) -> Result<Option<Thresholds>> {
        (**self).lookup(sex, kind, key)
    }
}
