//! C# source fragments shared by the declaration generators.

use crate::error::CodegenError;

/// Indentation of members inside a type body.
pub const MEMBER_INDENT: &str = "    ";

/// Converts a GraphQL field name to a PascalCase C# member name.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Escapes text for an XML doc comment.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Renders a C# regular string literal.
#[must_use]
pub fn string_literal(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Renders a `<summary>` doc comment, or nothing for a blank description.
#[must_use]
pub fn doc_comment(description: Option<&str>, indent: &str) -> String {
    let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) else {
        return String::new();
    };

    let mut output = format!("{indent}/// <summary>\n");
    for line in description.lines() {
        let line = xml_escape(line.trim_end());
        if line.is_empty() {
            output.push_str(&format!("{indent}///\n"));
        } else {
            output.push_str(&format!("{indent}/// {line}\n"));
        }
    }
    output.push_str(&format!("{indent}/// </summary>\n"));
    output
}

/// Renders an `[Obsolete]` attribute for a deprecated member.
///
/// # Errors
/// Returns `CodegenError::MissingDeprecationReason` when the member is
/// deprecated but carries no reason.
pub fn obsolete_attribute(
    owner: &str,
    member: &str,
    is_deprecated: bool,
    reason: Option<&str>,
    indent: &str,
) -> Result<String, CodegenError> {
    if !is_deprecated {
        return Ok(String::new());
    }

    let reason = reason.ok_or_else(|| CodegenError::MissingDeprecationReason {
        owner: owner.to_string(),
        member: member.to_string(),
    })?;

    Ok(format!(
        "{indent}[Obsolete({})]\n",
        string_literal(reason.trim())
    ))
}

/// Renders the `[JsonPolymorphic]`/`[JsonDerivedType]` attributes of a
/// polymorphic supertype.
#[must_use]
pub fn polymorphic_attributes<'a>(members: impl IntoIterator<Item = &'a str>) -> String {
    let mut output = String::from(
        "[JsonPolymorphic(TypeDiscriminatorPropertyName = GraphQLJson.TypeDiscriminator, \
         IgnoreUnrecognizedTypeDiscriminators = true)]\n",
    );
    for member in members {
        output.push_str(&format!(
            "[JsonDerivedType(typeof({member}), typeDiscriminator: {})]\n",
            string_literal(member)
        ));
    }
    output
}

/// Renders the downcast helper declaration of a polymorphic supertype.
#[must_use]
pub fn downcast_declaration(member: &str) -> String {
    format!("{MEMBER_INDENT}[JsonIgnore]\n{MEMBER_INDENT}{member}? As{member} {{ get; }}\n\n")
}
