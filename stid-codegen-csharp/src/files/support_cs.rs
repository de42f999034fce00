use stid_core::GeneratedFile;
use stid_ir::{Category, TypeDescriptor};

use crate::emit_support;

/// `{Name}.Support.g.cs`
pub struct SupportCs<'a> {
    descriptor: &'a TypeDescriptor,
    category: Category,
}

impl<'a> SupportCs<'a> {
    pub fn new(descriptor: &'a TypeDescriptor, category: Category) -> Self {
        Self {
            descriptor,
            category,
        }
    }
}

impl GeneratedFile for SupportCs<'_> {
    fn file_name(&self) -> String {
        format!("{}.Support.g.cs", self.descriptor.name)
    }

    fn render(&self) -> String {
        emit_support(self.descriptor, self.category, &self.descriptor.flags)
    }
}
