//! Iteration-only collections

use super::Sample;
use std::fmt;

/// A collection that can only be walked front to back.
///
/// Implementors expose no length and no indexing; serializers that want the
/// elements must enumerate them.
pub trait Enumerable: fmt::Debug + Send + Sync {
    /// Type label used in tagged output
    fn type_name(&self) -> &'static str;

    /// Yield every element in order
    fn each(&self) -> Box<dyn Iterator<Item = Sample> + '_>;
}

/// Three primary-ish colors, yielded one at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct Colors;

impl Enumerable for Colors {
    fn type_name(&self) -> &'static str {
        "Colors"
    }

    fn each(&self) -> Box<dyn Iterator<Item = Sample> + '_> {
        Box::new(["red", "green", "blue"].into_iter().map(Sample::from))
    }
}
