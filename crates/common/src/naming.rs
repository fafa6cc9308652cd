//! Name transforms between API names and Python identifiers

/// Convert an API name to the snake_case method name the SDK exposes
///
/// Names that already contain an underscore are returned unchanged.
///
/// # Examples
/// ```
/// use botodocs_common::naming::xform_name;
///
/// assert_eq!(xform_name("CreateBucket"), "create_bucket");
/// assert_eq!(xform_name("DescribeDBInstances"), "describe_db_instances");
/// assert_eq!(xform_name("ListObjectsV2"), "list_objects_v2");
/// assert_eq!(xform_name("ListARNs"), "list_arns");
/// ```
pub fn xform_name(name: &str) -> String {
    if name.contains('_') {
        return name.to_string();
    }

    // A pluralized acronym stays one word: ARNs -> arns, not ar_ns
    if let Some((head, acronym)) = split_plural_acronym(name) {
        let head = xform_name(head);
        let acronym = acronym.to_ascii_lowercase();
        return if head.is_empty() {
            acronym
        } else {
            format!("{}_{}", head, acronym)
        };
    }

    let mut result = String::new();
    let chars: Vec<char> = name.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            // Break before a capital that follows a lowercase letter or digit,
            // or that starts a new word after an acronym (DBInstances).
            let should_add_underscore = i > 0
                && (chars[i - 1].is_lowercase()
                    || chars[i - 1].is_ascii_digit()
                    || (i + 1 < chars.len() && chars[i + 1].is_lowercase()));

            if should_add_underscore && !result.ends_with('_') {
                result.push('_');
            }
            result.push(ch.to_ascii_lowercase());
        } else if ch == '-' || ch == ' ' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
        } else {
            result.push(ch);
        }
    }

    result.trim_matches('_').to_string()
}

/// Split "ListARNs" into ("List", "ARNs"); needs two or more capitals before the `s`
fn split_plural_acronym(name: &str) -> Option<(&str, &str)> {
    let head = name.strip_suffix('s')?;
    let capitals = head
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_uppercase())
        .count();
    (capitals >= 2).then(|| name.split_at(head.len() - capitals))
}

/// Short variable name for a resource, e.g. "BucketAcl" -> "acl"
pub fn variable_name(name: &str) -> String {
    let snake = xform_name(name);
    match snake.rfind('_') {
        Some(pos) => snake[pos + 1..].to_string(),
        None => snake,
    }
}

/// Client class name for a display name, e.g. "Amazon S3" -> "S3"
pub fn class_name(display_name: &str) -> String {
    display_name
        .replace("Amazon", "")
        .replace("AWS", "")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
