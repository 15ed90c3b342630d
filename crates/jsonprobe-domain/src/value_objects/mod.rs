//! Value objects carried by fixtures
//!
//! `Sample` is the payload every serializer receives. The other types here
//! are the non-JSON shapes a sample can hold.

mod decimal;
mod enumerable;
mod record;
mod sample;
mod validation;

pub use decimal::DecimalValue;
pub use enumerable::{Colors, Enumerable};
pub use record::{Opaque, Record};
pub use sample::Sample;
pub use validation::{ValidationErrors, ValidationKind, ValidationMessage};
