//! Runtime conversion helper for unrecognized underlying types.

use stid_codegen::builder::{CodeFragment, Renderable};

use crate::{
    ast::{Doc, Member, TypeDecl, TypeKind},
    expressions::CONVERSION_HELPER,
};

/// The `ConversionHelper` class used by fallback try-parse expressions.
///
/// `TryConvert<T>` never throws: any conversion failure yields `false` and
/// `default` in the out parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionHelper;

impl ConversionHelper {
    fn declaration(&self) -> TypeDecl {
        let body = vec![
            CodeFragment::line("result = default!;"),
            CodeFragment::braced(
                "try",
                vec![
                    CodeFragment::line("result = (T)Convert.ChangeType(value, typeof(T));"),
                    CodeFragment::line("return true;"),
                ],
            ),
            CodeFragment::braced("catch", vec![CodeFragment::line("return false;")]),
        ];

        TypeDecl::new(TypeKind::InternalStaticClass, CONVERSION_HELPER)
            .doc(Doc::summary(
                "Helper method to try converting a string to a target type",
            ))
            .member(Member::new("internal static bool TryConvert<T>(string value, out T result)").block(body))
    }
}

impl Renderable for ConversionHelper {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.declaration().to_fragments()
    }
}
