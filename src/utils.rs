//! Identifier case helpers used when deriving member and argument names

/// Splits an identifier into lowercase words.
///
/// Word boundaries are separators (`-`, `_`, whitespace and other
/// non-alphanumerics) and lowercase-to-uppercase transitions. Runs of capitals
/// stay together, so `HTTPResponse` is a single word.
fn words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_is_lowercase = false;
            continue;
        }
        if ch.is_uppercase() && prev_is_lowercase && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.extend(ch.to_lowercase());
        prev_is_lowercase = ch.is_lowercase() || ch.is_numeric();
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Converts a string to PascalCase, e.g. for method-group property names.
///
/// # Examples
/// ```
/// use clientbind::utils::to_pascal_case;
///
/// assert_eq!(to_pascal_case("widget_operations"), "WidgetOperations");
/// assert_eq!(to_pascal_case("widgetOperations"), "WidgetOperations");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    words(s).iter().map(|w| capitalize(w)).collect()
}

/// Converts a string to camelCase, e.g. for constructor argument names.
///
/// # Examples
/// ```
/// use clientbind::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("SubscriptionId"), "subscriptionId");
/// assert_eq!(to_camel_case("api-version"), "apiVersion");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::new();
    for (i, word) in words(s).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("find_pets_by_status"), "FindPetsByStatus");
        assert_eq!(to_pascal_case("findPetsByStatus"), "FindPetsByStatus");
        assert_eq!(to_pascal_case("find-pets-by-status"), "FindPetsByStatus");
        assert_eq!(to_pascal_case("FIND_PETS_BY_STATUS"), "FindPetsByStatus");
        assert_eq!(to_pascal_case("Widgets"), "Widgets");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("Credentials"), "credentials");
        assert_eq!(to_camel_case("SubscriptionId"), "subscriptionId");
        assert_eq!(to_camel_case("api_version"), "apiVersion");
        assert_eq!(to_camel_case("HTTPResponse"), "httpresponse");
        assert_eq!(to_camel_case("v2Endpoint"), "v2Endpoint");
    }
}
