use stid_core::GeneratedFile;
use stid_ir::{Category, TypeDescriptor};

use crate::emit_partial;

/// `{Name}.Partial.g.cs`
pub struct PartialCs<'a> {
    descriptor: &'a TypeDescriptor,
    category: Category,
}

impl<'a> PartialCs<'a> {
    pub fn new(descriptor: &'a TypeDescriptor, category: Category) -> Self {
        Self {
            descriptor,
            category,
        }
    }
}

impl GeneratedFile for PartialCs<'_> {
    fn file_name(&self) -> String {
        format!("{}.Partial.g.cs", self.descriptor.name)
    }

    fn render(&self) -> String {
        emit_partial(self.descriptor, self.category, &self.descriptor.flags)
    }
}
