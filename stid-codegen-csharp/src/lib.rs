//! C# backend for stid.
//!
//! For every identifier type two files are produced:
//!
//! - `{Name}.Partial.g.cs` - attributes and members of the partial record
//! - `{Name}.Support.g.cs` - JSON/type converters, extension methods and,
//!   for unrecognized underlying types, the conversion helper
//!
//! A run where the host lacks the marker attribute produces only
//! `GenerateStronglyTypedIdSupportAttribute.g.cs`.

mod cs_file;
mod emitter;
mod fallback;
mod generator;
mod type_mapper;

pub mod ast;
pub mod expressions;
pub mod files;

pub use cs_file::{CsFile, FILE_HEADER};
pub use emitter::{emit_partial, emit_support};
pub use fallback::ConversionHelper;
pub use generator::Generator;
pub use stid_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::CSharpTypeMapper;
