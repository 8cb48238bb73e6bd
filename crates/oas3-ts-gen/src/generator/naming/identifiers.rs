use std::sync::LazyLock;

use regex::Regex;

/// Namespace prefixes dropped from schema names before they become type names.
static NAMESPACE_PREFIX_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(common\.|entities\.|responses\.)").unwrap());

/// Uppercases the first character when it is an ASCII lowercase letter.
/// Everything after the first character is left untouched, so `userId`
/// becomes `UserId` and `XMLParser` stays as is.
#[must_use]
pub fn to_upper_camel_case(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    Some(first) if first.is_ascii_lowercase() => {
      let mut out = String::with_capacity(input.len());
      out.push(first.to_ascii_uppercase());
      out.push_str(chars.as_str());
      out
    }
    _ => input.to_string(),
  }
}

/// Converts a schema name into a TypeScript type name.
///
/// # Rules:
/// 1. A leading `common.`, `entities.` or `responses.` namespace is removed.
/// 2. Remaining dots become underscores (`billing.Invoice` -> `billing_Invoice`).
/// 3. The first character is uppercased.
///
/// The output never contains a dot, so applying it twice is the same as once.
#[must_use]
pub fn clean_name(name: &str) -> String {
  let stripped = NAMESPACE_PREFIX_RE.replace(name, "");
  to_upper_camel_case(&stripped.replace('.', "_"))
}

/// Trailing segment of a `$ref` path: `#/components/schemas/User` -> `User`.
#[must_use]
pub fn ref_name(ref_path: &str) -> &str {
  ref_path.rsplit_once('/').map_or(ref_path, |(_, name)| name)
}

/// Converts a URL path template into a type-name fragment.
///
/// Parameter segments in either `:id` or `{id}` form become `ById`; literal
/// segments are uppercased at the first character. Empty segments are skipped.
#[must_use]
pub fn path_to_type_name(path: &str) -> String {
  path
    .split('/')
    .filter(|segment| !segment.is_empty())
    .map(|segment| {
      if let Some(param) = segment.strip_prefix(':') {
        return format!("By{}", to_upper_camel_case(param));
      }
      if let Some(param) = segment.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
        return format!("By{}", to_upper_camel_case(param));
      }
      to_upper_camel_case(segment)
    })
    .collect()
}

/// Base name shared by every request type derived from one operation,
/// e.g. `get` + `/users/{id}` -> `GetUsersById`.
#[must_use]
pub fn operation_base_name(method: &str, path: &str) -> String {
  format!("{}{}", to_upper_camel_case(method), path_to_type_name(path))
}
