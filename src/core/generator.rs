//! Go struct generation
//!
//! Every table row becomes one struct field:
//!
//! ```text
//! 	UserId int `json:"user_id,omitempty"` // 用户ID。内部字段
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use super::options::GenOptions;
use super::parser::{Row, Table};
use crate::data::constants::{FULLWIDTH_PERIOD, OMITEMPTY, REQUEST_TAG};
use crate::data::gotypes::{is_known_type, resolve_go_type};
use crate::utils::error::{ConversionOutput, ConversionWarning, WarningKind};

lazy_static! {
    /// `<br>`, `<br/>` and `<br />`
    static ref BR_TAG: Regex = Regex::new(r"<br(?: ?/)?>").unwrap();
}

/// Convert `snake_case` into `SnakeCase`.
///
/// Only the first character of every segment is changed, so an already
/// camel-cased segment keeps its inner capitals.
pub fn snake_to_camel(name: &str) -> String {
    name.split('_').map(capitalize).collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build the trailing ` // ...` comment from the description and remark
/// columns. Returns an empty string when both are empty.
pub fn build_comment(content: &str, comment: &str, strip_backslashes: bool) -> String {
    if content.is_empty() && comment.is_empty() {
        return String::new();
    }

    let sep = if !content.is_empty() && !comment.is_empty() {
        FULLWIDTH_PERIOD
    } else {
        ""
    };
    let text = format!(" // {}{}{}", content, sep, comment);
    let text = BR_TAG.replace_all(&text, FULLWIDTH_PERIOD);

    if strip_backslashes {
        text.replace('\\', "")
    } else {
        text.into_owned()
    }
}

/// A struct field derived from one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Go identifier (`UserId`)
    pub name: String,
    /// Go type (`int`, `[]Item`, ...)
    pub go_type: String,
    /// Raw name used as the json key (`user_id`)
    pub json_key: String,
    pub omit_empty: bool,
    /// Trailing comment including the leading ` // `, or empty
    pub comment: String,
}

impl Field {
    pub fn from_row(row: &Row, options: &GenOptions) -> Self {
        let name = snake_to_camel(row.name());
        let go_type = resolve_go_type(row.type_token(), &name, options.extended_types);
        let omit_empty = !options.is_required(row.not_null.as_deref());
        let comment = build_comment(
            row.content.as_deref().unwrap_or(""),
            row.comment.as_deref().unwrap_or(""),
            options.strip_backslashes,
        );

        Self {
            name,
            go_type,
            json_key: row.name().to_string(),
            omit_empty,
            comment,
        }
    }

    /// Render the field declaration (tab-indented, no newline)
    pub fn render(&self, options: &GenOptions) -> String {
        let mut tag = format!("json:\"{}", self.json_key);
        if self.omit_empty {
            tag.push_str(OMITEMPTY);
        }
        tag.push('"');
        if self.omit_empty && options.request_tag {
            tag.push_str(REQUEST_TAG);
        }

        format!("\t{} {} `{}`{}", self.name, self.go_type, tag, self.comment)
    }
}

/// Generates Go struct declarations from parsed tables
pub struct StructGenerator<'a> {
    options: &'a GenOptions,
}

impl<'a> StructGenerator<'a> {
    pub fn new(options: &'a GenOptions) -> Self {
        Self { options }
    }

    /// Generate the struct block for `table`.
    ///
    /// Malformed rows still produce a (possibly malformed) field line; the
    /// problems are reported as warnings.
    pub fn generate(&self, table: &Table) -> ConversionOutput {
        let warnings = self.check(table);
        let mut lines = Vec::with_capacity(table.rows.len() + 2);

        lines.push(format!("type {} struct {{", self.options.struct_name));
        for row in &table.rows {
            lines.push(Field::from_row(row, self.options).render(self.options));
        }
        lines.push("}".to_string());

        ConversionOutput::with_warnings(lines.join("\n"), warnings)
    }

    fn check(&self, table: &Table) -> Vec<ConversionWarning> {
        let mut warnings = Vec::new();

        if let Some(header) = &table.header {
            for label in header.unknown_labels() {
                warnings.push(
                    ConversionWarning::new(
                        WarningKind::UnknownHeader,
                        format!("column '{}' is not recognised and will be ignored", label),
                    )
                    .at_line(1),
                );
            }
        }

        for (idx, row) in table.rows.iter().enumerate() {
            // Rows are numbered by position; separator rows are already gone
            let position = idx + 1;
            if row.name().is_empty() {
                warnings.push(ConversionWarning::new(
                    WarningKind::MissingName,
                    format!("row {} has no field name", position),
                ));
            }
            let token = row.type_token();
            if !is_known_type(token, self.options.extended_types) {
                let message = if token.is_empty() {
                    format!("row {} has no type", position)
                } else {
                    format!("row {}: type '{}' is emitted verbatim", position, token)
                };
                warnings.push(ConversionWarning::new(WarningKind::UnknownType, message));
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, ty: &str) -> Row {
        Row {
            name: Some(name.to_string()),
            type_token: Some(ty.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("user_id"), "UserId");
        assert_eq!(snake_to_camel("is_deleted"), "IsDeleted");
        assert_eq!(snake_to_camel("items"), "Items");
        assert_eq!(snake_to_camel("pageSize"), "PageSize");
        assert_eq!(snake_to_camel("a__b_"), "AB");
        assert_eq!(snake_to_camel(""), "");
    }

    #[test]
    fn test_comment_join() {
        assert_eq!(build_comment("", "", false), "");
        assert_eq!(build_comment("用户ID", "", false), " // 用户ID");
        assert_eq!(build_comment("", "内部字段", false), " // 内部字段");
        assert_eq!(build_comment("用户ID", "内部字段", false), " // 用户ID。内部字段");
    }

    #[test]
    fn test_comment_line_breaks() {
        assert_eq!(
            build_comment("1: 正常<br>2: 禁用<br/>3: 删除<br />", "", false),
            " // 1: 正常。2: 禁用。3: 删除。"
        );
    }

    #[test]
    fn test_comment_backslashes() {
        assert_eq!(build_comment(r"a\_b", "", false), r" // a\_b");
        assert_eq!(build_comment(r"a\_b", "", true), " // a_b");
    }

    #[test]
    fn test_required_field() {
        let opts = GenOptions::default();
        let mut r = row("user_id", "num");
        r.not_null = Some("必要".to_string());
        let field = Field::from_row(&r, &opts);
        assert!(!field.omit_empty);
        assert_eq!(field.render(&opts), "\tUserId int `json:\"user_id\"`");
    }

    #[test]
    fn test_optional_field() {
        let opts = GenOptions::default();
        let mut r = row("is_deleted", "bool");
        r.not_null = Some("可选".to_string());
        assert_eq!(
            Field::from_row(&r, &opts).render(&opts),
            "\tIsDeleted bool `json:\"is_deleted,omitempty\"`"
        );
    }

    #[test]
    fn test_missing_required_column_is_required() {
        let opts = GenOptions::default();
        let field = Field::from_row(&row("items", "array"), &opts);
        assert_eq!(field.render(&opts), "\tItems []Items `json:\"items\"`");
    }

    #[test]
    fn test_request_tag() {
        let opts = GenOptions::extended();
        let mut r = row("page", "num");
        r.not_null = Some("否".to_string());
        assert_eq!(
            Field::from_row(&r, &opts).render(&opts),
            "\tPage int `json:\"page,omitempty\" request:\"query,omitempty\"`"
        );

        r.not_null = Some("√".to_string());
        assert_eq!(
            Field::from_row(&r, &opts).render(&opts),
            "\tPage int `json:\"page\"`"
        );
    }

    #[test]
    fn test_generate_block_and_warnings() {
        let opts = GenOptions::default().with_struct_name("Req");
        let table = Table {
            header: None,
            rows: vec![row("owner", "obj"), row("", "float")],
        };
        let output = StructGenerator::new(&opts).generate(&table);
        assert_eq!(
            output.content,
            "type Req struct {\n\tOwner Owner `json:\"owner\"`\n\t float `json:\"\"`\n}"
        );
        let kinds: Vec<_> = output.warnings.iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WarningKind::MissingName, WarningKind::UnknownType]);
    }

    #[test]
    fn test_generate_empty_table() {
        let opts = GenOptions::default();
        let output = StructGenerator::new(&opts).generate(&Table::default());
        assert_eq!(output.content, "type T struct {\n}");
        assert!(!output.has_warnings());
    }
}
