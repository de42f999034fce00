//! C# syntax builders for the declarations stid emits.
//!
//! Nodes implement [`Renderable`](stid_codegen::builder::Renderable) and are
//! written out through a `CodeBuilder`.

mod doc;
mod member;
mod type_decl;

pub use doc::Doc;
pub use member::{Body, Member};
pub use type_decl::{TypeDecl, TypeKind};
