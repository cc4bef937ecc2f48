//! Fixed strings of the interactive session and the generated code

/// Printed at the start of every input cycle
pub const PROMPT: &str = "请输入Markdown表格，在最后一行之后输入ok表示结束：（退出请输入exit）";

/// Printed when a data row does not match the header's column count
pub const COLUMN_MISMATCH_MESSAGE: &str = "列数不一致，无法解析";

/// Terminates the whole session
pub const EXIT_TOKEN: &str = "exit";

/// Ends the current table and triggers generation
pub const END_TABLE_TOKEN: &str = "ok";

/// Cell delimiter
pub const CELL_DELIMITER: char = '|';

/// Prefix marking a Markdown header separator cell
pub const SEPARATOR_PREFIX: &str = "---";

/// Default name of the generated struct
pub const DEFAULT_STRUCT_NAME: &str = "T";

/// Full-width period used to join and break comment text
pub const FULLWIDTH_PERIOD: &str = "。";

/// Suffix for optional fields in the json tag
pub const OMITEMPTY: &str = ",omitempty";

/// Extra tag appended to optional fields when request tags are enabled
pub const REQUEST_TAG: &str = r#" request:"query,omitempty""#;

/// The only required marker recognised by default
pub const DEFAULT_REQUIRED_MARKER: &str = "必要";

/// Required markers of the extended preset
pub const EXTENDED_REQUIRED_MARKERS: &[&str] = &["必要", "必须", "必填", "√"];
