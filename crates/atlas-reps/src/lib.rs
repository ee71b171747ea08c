//! Magma exports for matrix and permutation representations.

pub mod linear;
pub mod permutation;

pub use linear::LinearRep;
pub use permutation::{PermutationGenerators, PermutationRep};

use atlas_core::{representation_filename, strip_math_delimiters, TargetFormat};

/// A representation record that can be exported as text.
pub trait Representation {
    fn id(&self) -> &str;

    /// Raw display name, possibly containing `$...$` math
    fn raw_name(&self) -> Option<&str>;

    /// Render in `format`, or the placeholder text when unsupported.
    fn render(&self, format: &TargetFormat) -> String;

    fn title(&self) -> String {
        strip_math_delimiters(self.raw_name().unwrap_or_default())
    }

    fn filename(&self, format: &TargetFormat) -> String {
        representation_filename(self.id(), format)
    }
}
