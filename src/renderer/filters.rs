// Case conversion filters let bundle templates derive identifiers from the project name.
pub use cruet::case::{
    camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
    screaming_snake::to_screaming_snake_case, snake::to_snake_case, train::to_train_case,
};

/// Quotes a value for POSIX shells.
///
/// The value is wrapped in single quotes and every embedded single quote is
/// closed, escaped and reopened, so the shell sees the text literally.
///
/// # Arguments
/// * `val` - The text to quote
///
/// # Returns
/// * `String` - A single shell word
pub fn shell_quote(val: &str) -> String {
    format!("'{}'", val.replace('\'', r"'\''"))
}
