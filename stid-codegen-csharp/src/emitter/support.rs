//! The `{Name}.Support` artifact: converters, extensions and the
//! conversion helper.

use stid_codegen::{builder::CodeFragment, schema::SupportSection};
use stid_ir::{Category, FeatureFlags, TypeDescriptor};

use super::Subject;
use crate::{
    ConversionHelper, CsFile,
    ast::{Doc, Member, TypeDecl, TypeKind},
    expressions,
};

/// Render the support declarations for `descriptor`.
pub fn emit_support(descriptor: &TypeDescriptor, category: Category, flags: &FeatureFlags) -> String {
    let subject = Subject::new(descriptor, category, flags);
    let plan = &subject.plan;

    let json = plan.has_support(SupportSection::JsonConverter);
    let type_converter = plan.has_support(SupportSection::TypeConverter);
    let extensions = plan.extensions().is_some();

    let mut file = CsFile::new()
        .using_if(!plan.support.is_empty(), "System")
        .using_if(extensions, "System.Collections.Generic")
        .using_if(type_converter, "System.ComponentModel")
        .using_if(type_converter, "System.Globalization")
        .using_if(extensions, "System.Linq")
        .using_if(json, "System.Text.Json")
        .using_if(json, "System.Text.Json.Serialization")
        .namespace(subject.namespace);

    for section in &plan.support {
        file = match section {
            SupportSection::JsonConverter => file.add(json_converter(&subject)),
            SupportSection::TypeConverter => file.add(type_converter_class(&subject)),
            SupportSection::Extensions { empty_checks } => {
                file.add(extensions_class(&subject, *empty_checks))
            }
            SupportSection::ConversionHelper => file.add(ConversionHelper),
        };
    }

    file.render()
}

fn json_converter(s: &Subject<'_>) -> TypeDecl {
    let name = s.name;

    TypeDecl::new(TypeKind::SealedClass, format!("{name}JsonConverter"))
        .doc(Doc::summary(format!("JSON converter for {name}")))
        .base(format!("JsonConverter<{name}>"))
        .member(
            Member::new(format!(
                "public override {name} Read(ref Utf8JsonReader reader, Type typeToConvert, JsonSerializerOptions options)"
            ))
            .doc(Doc::inherit())
            .lines([
                format!("var value = {};", expressions::json_read(s.category)),
                format!("return new {name}(value);"),
            ]),
        )
        .member(
            Member::new(format!(
                "public override void Write(Utf8JsonWriter writer, {name} value, JsonSerializerOptions options)"
            ))
            .doc(Doc::inherit())
            .lines([format!(
                "{};",
                expressions::json_write(s.category, "value.Value")
            )]),
        )
        .member(
            Member::new(format!(
                "public override {name} ReadAsPropertyName(ref Utf8JsonReader reader, Type typeToConvert, JsonSerializerOptions options)"
            ))
            .doc(Doc::inherit())
            .lines([
                "var stringValue = reader.GetString();".to_string(),
                format!(
                    "return stringValue != null ? {name}.From(stringValue) : throw new JsonException(\"Property name cannot be null\");"
                ),
            ]),
        )
        .member(
            Member::new(format!(
                "public override void WriteAsPropertyName(Utf8JsonWriter writer, {name} value, JsonSerializerOptions options)"
            ))
            .doc(Doc::inherit())
            .lines(["writer.WritePropertyName(value.Value.ToString());"]),
        )
}

fn type_converter_class(s: &Subject<'_>) -> TypeDecl {
    let (name, ty) = (s.name, &s.ty);

    TypeDecl::new(TypeKind::SealedClass, format!("{name}TypeConverter"))
        .doc(Doc::summary(format!("Type converter for {name}")))
        .base("TypeConverter")
        .member(
            Member::new("public override bool CanConvertFrom(ITypeDescriptorContext? context, Type sourceType)")
                .doc(Doc::inherit())
                .arrow_below([format!(
                    "=> sourceType == typeof(string) || sourceType == typeof({ty}) || base.CanConvertFrom(context, sourceType);"
                )]),
        )
        .member(
            Member::new("public override object? ConvertFrom(ITypeDescriptorContext? context, CultureInfo? culture, object value)")
                .doc(Doc::inherit())
                .arrow_below([
                    "=> value switch".to_string(),
                    "{".to_string(),
                    format!("    string s when {name}.TryParse(s, out var result) => result,"),
                    format!("    {ty} v => new {name}(v),"),
                    "    _ => base.ConvertFrom(context, culture, value)".to_string(),
                    "};".to_string(),
                ]),
        )
        .member(
            Member::new("public override bool CanConvertTo(ITypeDescriptorContext? context, Type? destinationType)")
                .doc(Doc::inherit())
                .arrow_below([format!(
                    "=> destinationType == typeof(string) || destinationType == typeof({ty}) || base.CanConvertTo(context, destinationType);"
                )]),
        )
        .member(
            Member::new("public override object? ConvertTo(ITypeDescriptorContext? context, CultureInfo? culture, object? value, Type destinationType)")
                .doc(Doc::inherit())
                .block(vec![
                    CodeFragment::braced(
                        format!("if (value is {name} id)"),
                        vec![
                            CodeFragment::line("return destinationType == typeof(string) ? id.ToString() :"),
                            CodeFragment::line(format!("       destinationType == typeof({ty}) ? id.Value :")),
                            CodeFragment::line("       base.ConvertTo(context, culture, value, destinationType);"),
                        ],
                    ),
                    CodeFragment::line("return base.ConvertTo(context, culture, value, destinationType);"),
                ]),
        )
}

fn extensions_class(s: &Subject<'_>, empty_checks: bool) -> TypeDecl {
    let (name, ty) = (s.name, &s.ty);

    let empty_members = expressions::empty_value(s.category)
        .filter(|_| empty_checks)
        .map(|empty| {
            [
                Member::new(format!("public static bool IsEmpty(this {name} id)"))
                    .doc(Doc::summary(format!("Determines whether the {name} is empty")))
                    .arrow(format!("id.Value.Equals({empty})")),
                Member::new(format!("public static bool IsNotEmpty(this {name} id)"))
                    .doc(Doc::summary(format!(
                        "Determines whether the {name} is not empty"
                    )))
                    .arrow("!id.IsEmpty()"),
            ]
        })
        .into_iter()
        .flatten();

    TypeDecl::new(TypeKind::StaticClass, format!("{name}Extensions"))
        .doc(Doc::summary(format!("Extension methods for {name}")))
        .members(empty_members)
        .member(
            Member::new(format!(
                "public static IEnumerable<{ty}> ToValues(this IEnumerable<{name}> ids)"
            ))
            .doc(Doc::summary(
                "Converts a collection of strongly typed IDs to their underlying values",
            ))
            .arrow_below(["=> ids.Select(id => id.Value);"]),
        )
        .member(
            Member::new(format!(
                "public static HashSet<{ty}> ToValueSet(this IEnumerable<{name}> ids)"
            ))
            .doc(Doc::summary(
                "Converts a collection of strongly typed IDs to a HashSet of their underlying values",
            ))
            .arrow_below(["=> new(ids.Select(id => id.Value));"]),
        )
        .member(
            Member::new(format!(
                "public static Dictionary<{ty}, T> ToValueDictionary<T>(this IEnumerable<{name}> ids, Func<{name}, T> valueSelector)"
            ))
            .doc(Doc::summary(
                "Converts a collection of strongly typed IDs to a Dictionary using their underlying values as keys",
            ))
            .arrow_below(["=> ids.ToDictionary(id => id.Value, valueSelector);"]),
        )
}

#[cfg(test)]
mod tests {
    use stid_ir::Flag;

    use super::*;

    fn support(name: &str, underlying: &str, flags: FeatureFlags) -> String {
        let descriptor = TypeDescriptor::new(name, underlying).with_flags(flags);
        emit_support(&descriptor, Category::classify(underlying), &flags)
    }

    #[test]
    fn test_nothing_enabled() {
        let code = support("OrderId", "System.Guid", FeatureFlags::all(false));
        assert_eq!(code, "// <auto-generated />\n#nullable enable\n\n");
    }

    #[test]
    fn test_extensions_only() {
        let flags = FeatureFlags::all(false).with(Flag::Extensions, true);
        let code = support("OrderId", "System.Guid", flags);

        insta::assert_snapshot!(code, @r"
        // <auto-generated />
        #nullable enable

        using System;
        using System.Collections.Generic;
        using System.Linq;

        /// <summary>
        /// Extension methods for OrderId
        /// </summary>
        public static class OrderIdExtensions
        {
            /// <summary>
            /// Determines whether the OrderId is empty
            /// </summary>
            public static bool IsEmpty(this OrderId id) => id.Value.Equals(Guid.Empty);

            /// <summary>
            /// Determines whether the OrderId is not empty
            /// </summary>
            public static bool IsNotEmpty(this OrderId id) => !id.IsEmpty();

            /// <summary>
            /// Converts a collection of strongly typed IDs to their underlying values
            /// </summary>
            public static IEnumerable<Guid> ToValues(this IEnumerable<OrderId> ids)
                => ids.Select(id => id.Value);

            /// <summary>
            /// Converts a collection of strongly typed IDs to a HashSet of their underlying values
            /// </summary>
            public static HashSet<Guid> ToValueSet(this IEnumerable<OrderId> ids)
                => new(ids.Select(id => id.Value));

            /// <summary>
            /// Converts a collection of strongly typed IDs to a Dictionary using their underlying values as keys
            /// </summary>
            public static Dictionary<Guid, T> ToValueDictionary<T>(this IEnumerable<OrderId> ids, Func<OrderId, T> valueSelector)
                => ids.ToDictionary(id => id.Value, valueSelector);
        }
        ");
    }

    #[test]
    fn test_json_converter_uses_category_expressions() {
        let flags = FeatureFlags::all(false).with(Flag::JsonConverter, true);
        let code = support("Amount", "decimal", flags);

        assert!(code.contains("using System.Text.Json;\nusing System.Text.Json.Serialization;\n"));
        assert!(code.contains("public sealed class AmountJsonConverter : JsonConverter<Amount>\n"));
        assert!(code.contains("        var value = reader.GetDecimal();\n"));
        assert!(code.contains("        writer.WriteNumberValue(value.Value);\n"));
        assert!(code.contains("Amount.From(stringValue) : throw new JsonException(\"Property name cannot be null\");"));
    }

    #[test]
    fn test_type_converter() {
        let flags = FeatureFlags::all(false).with(Flag::TypeConverter, true);
        let code = support("CustomerId", "string", flags);

        assert!(code.contains("using System.ComponentModel;\nusing System.Globalization;\n"));
        assert!(code.contains(
            "        => value switch\n        {\n            string s when CustomerId.TryParse(s, out var result) => result,\n            string v => new CustomerId(v),\n"
        ));
        assert!(code.contains("            return destinationType == typeof(string) ? id.ToString() :\n"));
    }
}
