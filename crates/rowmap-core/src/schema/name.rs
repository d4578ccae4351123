use heck::ToSnakeCase;

/// Folds a declared field identifier into its canonical external name.
///
/// Word boundaries of camel-cased identifiers become `_` and the result is
/// lower-cased. Existing separators are kept but never doubled, including
/// leading and trailing `_` runs, and a raw-identifier prefix is dropped.
///
/// ```
/// use rowmap_core::schema::canonical_name;
///
/// assert_eq!(canonical_name("UserAddr"), "user_addr");
/// assert_eq!(canonical_name("user_addr"), "user_addr");
/// assert_eq!(canonical_name("r#type"), "type");
/// assert_eq!(canonical_name("_id"), "_id");
/// ```
pub fn canonical_name(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);

    // heck trims surrounding underscores; fold only the middle.
    let body = ident.trim_matches('_');
    if body.is_empty() {
        return ident.to_string();
    }

    let leading = ident.len() - ident.trim_start_matches('_').len();
    let trailing = ident.len() - ident.trim_end_matches('_').len();

    format!(
        "{}{}{}",
        &ident[..leading],
        body.to_snake_case(),
        &ident[ident.len() - trailing..],
    )
}
