//! The `{Name}.Partial` artifact: attributes and members added to the
//! user's partial record.

use stid_codegen::{builder::CodeFragment, schema::PartialSection};
use stid_ir::{Category, FeatureFlags, TypeDescriptor};

use super::Subject;
use crate::{
    CsFile,
    ast::{Doc, Member, TypeDecl, TypeKind},
    expressions,
};

/// Render the partial record for `descriptor`.
pub fn emit_partial(descriptor: &TypeDescriptor, category: Category, flags: &FeatureFlags) -> String {
    let subject = Subject::new(descriptor, category, flags);
    let plan = &subject.plan;
    let has = |section| plan.has_partial(section);

    CsFile::new()
        .using_if(
            has(PartialSection::FromWithProvider) || has(PartialSection::TryParseWithProvider),
            "System",
        )
        .using("System.Diagnostics")
        .using_if(plan.is_comparable(), "System.Collections.Generic")
        .using_if(has(PartialSection::TypeConverterAttribute), "System.ComponentModel")
        .using_if(
            has(PartialSection::JsonConverterAttribute),
            "System.Text.Json.Serialization",
        )
        .namespace(subject.namespace)
        .add(record(&subject))
        .render()
}

fn record(s: &Subject<'_>) -> TypeDecl {
    let name = s.name;
    let mut decl = TypeDecl::new(TypeKind::PartialRecord, name);

    for section in &s.plan.partial {
        decl = match section {
            PartialSection::DebuggerDisplay => decl.attribute("DebuggerDisplay(\"{Value}\")"),
            PartialSection::JsonConverterAttribute => {
                decl.attribute(format!("JsonConverter(typeof({name}JsonConverter))"))
            }
            PartialSection::TypeConverterAttribute => {
                decl.attribute(format!("TypeConverter(typeof({name}TypeConverter))"))
            }
            PartialSection::From => decl.member(from(s)),
            PartialSection::FromWithProvider => decl.members(from_with_provider(s)),
            PartialSection::TryParse => decl.member(try_parse(s)),
            PartialSection::TryParseWithProvider => decl.members(try_parse_with_provider(s)),
            PartialSection::New => decl.member(new_method(s)),
            PartialSection::Empty => decl.members(empty(s)),
            PartialSection::ToString => decl.member(to_string_override()),
            PartialSection::Conversions => decl.members(conversions(s)),
            PartialSection::Comparisons => decl
                .base(format!("IComparable<{name}>"))
                .members(comparisons(s)),
        };
    }

    decl.doc(Doc::summary(format!(
        "Partial record extension for {name} with generated support methods and attributes"
    )))
}

fn from(s: &Subject<'_>) -> Member {
    let name = s.name;
    Member::new(format!("public static {name} From(string value)"))
        .doc(
            Doc::summary(format!("Creates a new {name} from a string value"))
                .param("value", "The string value to parse")
                .returns(format!("A new {name} instance")),
        )
        .lines([
            format!(
                "var parsed = {};",
                expressions::parse(s.category, &s.ty, "value")
            ),
            format!("return new {name}(parsed);"),
        ])
}

fn from_with_provider(s: &Subject<'_>) -> Option<Member> {
    let name = s.name;
    let parse = expressions::parse_with_provider(s.category, &s.ty, "value", "provider")?;

    Some(
        Member::new(format!(
            "public static {name} From(string value, IFormatProvider? provider)"
        ))
        .doc(
            Doc::summary(format!(
                "Creates a new {name} from a string value using the specified format provider"
            ))
            .param("value", "The string value to parse")
            .param(
                "provider",
                "An object that provides culture-specific formatting information",
            )
            .returns(format!("A new {name} instance")),
        )
        .lines([
            format!("var parsed = {parse};"),
            format!("return new {name}(parsed);"),
        ]),
    )
}

fn try_parse(s: &Subject<'_>) -> Member {
    let name = s.name;
    let mut body = guard();

    match expressions::try_parse(s.category, &s.ty, "value", "parsedValue") {
        Some(expr) => body.extend(parsed_result(name, &expr)),
        None => body.extend([
            CodeFragment::line(format!("result = new {name}(value);")),
            CodeFragment::line("return true;"),
        ]),
    }

    Member::new(format!(
        "public static bool TryParse(string? value, out {name}? result)"
    ))
    .doc(
        Doc::summary(format!("Tries to parse a string value into a {name}"))
            .param("value", "The string value to parse")
            .param(
                "result",
                format!("The parsed {name} if successful, null otherwise"),
            )
            .returns("True if parsing was successful, false otherwise"),
    )
    .block(body)
}

fn try_parse_with_provider(s: &Subject<'_>) -> Option<Member> {
    let name = s.name;
    let expr = expressions::try_parse_with_provider(
        s.category,
        &s.ty,
        "value",
        "provider",
        "parsedValue",
    )?;

    let mut body = guard();
    body.extend(parsed_result(name, &expr));

    Some(
        Member::new(format!(
            "public static bool TryParse(string? value, IFormatProvider? provider, out {name}? result)"
        ))
        .doc(
            Doc::summary(format!(
                "Tries to parse a string value into a {name} using the specified format provider"
            ))
            .param("value", "The string value to parse")
            .param(
                "provider",
                "An object that provides culture-specific formatting information",
            )
            .param(
                "result",
                format!("The parsed {name} if successful, null otherwise"),
            )
            .returns("True if parsing was successful, false otherwise"),
        )
        .block(body),
    )
}

/// Null-or-empty guard shared by both `TryParse` overloads.
fn guard() -> Vec<CodeFragment> {
    vec![
        CodeFragment::line("result = null;"),
        CodeFragment::line("if (string.IsNullOrEmpty(value)) return false;"),
        CodeFragment::blank(),
    ]
}

fn parsed_result(name: &str, condition: &str) -> Vec<CodeFragment> {
    vec![
        CodeFragment::braced(
            format!("if ({condition})"),
            vec![
                CodeFragment::line(format!("result = new {name}(parsedValue);")),
                CodeFragment::line("return true;"),
            ],
        ),
        CodeFragment::line("return false;"),
    ]
}

fn new_method(s: &Subject<'_>) -> Member {
    let name = s.name;
    Member::new(format!("public static {name} New()"))
        .doc(
            Doc::summary(format!("Creates a new {name} with a generated value"))
                .returns(format!("A new {name} instance with a generated value")),
        )
        .arrow(format!(
            "new({})",
            expressions::new_value(s.category, &s.ty)
        ))
}

fn empty(s: &Subject<'_>) -> Option<Member> {
    let name = s.name;
    let value = expressions::empty_value(s.category)?;
    Some(
        Member::new(format!("public static {name} Empty {{ get; }} = new({value});"))
            .doc(Doc::summary(format!("Gets an empty {name} instance"))),
    )
}

fn to_string_override() -> Member {
    Member::new("public override string ToString()")
        .doc(Doc::summary(
            "Returns the string representation of the underlying value",
        ))
        .arrow("Value.ToString() ?? string.Empty")
}

fn conversions(s: &Subject<'_>) -> [Member; 2] {
    let (name, ty) = (s.name, &s.ty);
    [
        Member::new(format!(
            "public static implicit operator {name}({ty} value)"
        ))
        .doc(Doc::summary(format!(
            "Implicitly converts from {ty} to {name}"
        )))
        .arrow("new(value)"),
        Member::new(format!(
            "public static explicit operator {ty}({name} value)"
        ))
        .doc(Doc::summary(format!(
            "Explicitly converts from {name} to {ty}"
        )))
        .arrow("value.Value"),
    ]
}

fn comparisons(s: &Subject<'_>) -> Vec<Member> {
    let (name, ty) = (s.name, &s.ty);

    let compare_to = Member::new(format!("public int CompareTo({name}? other)"))
        .doc(
            Doc::summary("Compares this instance to another instance")
                .param("other", format!("The other {name} to compare to"))
                .returns("A value indicating the relative order of the objects being compared"),
        )
        .lines([
            "if (other is null) return 1;".to_string(),
            format!("return Comparer<{ty}>.Default.Compare(Value, other.Value);"),
        ]);

    let operators = [
        ("<", "Less than operator"),
        ("<=", "Less than or equal operator"),
        (">", "Greater than operator"),
        (">=", "Greater than or equal operator"),
    ]
    .into_iter()
    .map(|(op, summary)| {
        Member::new(format!(
            "public static bool operator {op}({name} left, {name} right)"
        ))
        .doc(Doc::summary(summary))
        .arrow_below([format!(
            "=> Comparer<{ty}>.Default.Compare(left.Value, right.Value) {op} 0;"
        )])
    });

    std::iter::once(compare_to).chain(operators).collect()
}
