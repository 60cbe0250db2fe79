//! Case conventions for turning `snake_case` schema names into Go identifiers.

/// Upper-case the first character (e.g., "abc" -> "Abc").
pub fn uc_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character (e.g., "Abc" -> "abc").
pub fn lc_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to small camel case (e.g., "user_name" -> "userName").
///
/// The first segment has its first character lower-cased, every following
/// segment has its first character upper-cased. Empty segments vanish.
pub fn to_small_camel_case(s: &str) -> String {
    s.split('_')
        .enumerate()
        .map(|(i, part)| if i == 0 { lc_first(part) } else { uc_first(part) })
        .collect()
}

/// Convert a string to big camel case (e.g., "user_name" -> "UserName").
pub fn to_big_camel_case(s: &str) -> String {
    s.split('_').map(uc_first).collect()
}

/// Derive a struct field name from a raw column name.
///
/// Every segment gets an upper-case first character. With `uc_first_only`
/// the rest of each segment is lower-cased too (`USER_ID` -> `UserId`),
/// otherwise it is kept verbatim (`USER_ID` -> `USERID`).
pub fn to_field_name(column: &str, uc_first_only: bool) -> String {
    column
        .split('_')
        .map(|part| {
            if uc_first_only {
                let mut chars = part.chars();
                match chars.next() {
                    None => String::new(),
                    Some(c) => c
                        .to_uppercase()
                        .chain(chars.as_str().to_lowercase().chars())
                        .collect(),
                }
            } else {
                uc_first(part)
            }
        })
        .collect()
}

/// Derive a struct type name from an (already prefix-stripped) table name.
pub fn to_type_name(table: &str, big_camel_case: bool) -> String {
    let name = uc_first(table);
    if big_camel_case {
        to_big_camel_case(&name)
    } else {
        name
    }
}

/// Remove a leading `prefix` from `name`. Names without it are unchanged.
pub fn strip_prefix(name: &str, prefix: &str) -> String {
    name.strip_prefix(prefix).unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uc_first() {
        assert_eq!(uc_first(""), "");
        assert_eq!(uc_first("abc"), "Abc");
        assert_eq!(uc_first("a"), "A");
        assert_eq!(uc_first("Abc"), "Abc");
        assert_eq!(uc_first("élan"), "Élan");
    }

    #[test]
    fn test_lc_first() {
        assert_eq!(lc_first(""), "");
        assert_eq!(lc_first("ABC"), "aBC");
        assert_eq!(lc_first("Z"), "z");
    }

    #[test]
    fn test_to_small_camel_case() {
        assert_eq!(to_small_camel_case("user_name"), "userName");
        assert_eq!(to_small_camel_case("User_name_id"), "userNameId");
        assert_eq!(to_small_camel_case("username"), "username");
        assert_eq!(to_small_camel_case("Username"), "username");
        assert_eq!(to_small_camel_case(""), "");
    }

    #[test]
    fn test_to_big_camel_case() {
        assert_eq!(to_big_camel_case("user_name"), "UserName");
        assert_eq!(to_big_camel_case("foo_bar_baz"), "FooBarBaz");
        assert_eq!(to_big_camel_case("username"), "Username");
        assert_eq!(to_big_camel_case(""), "");
    }

    #[test]
    fn test_empty_segments_contribute_nothing() {
        assert_eq!(to_big_camel_case("_user__name_"), "UserName");
        assert_eq!(to_small_camel_case("user__name"), "userName");
        assert_eq!(to_small_camel_case("_user"), "User");
        assert_eq!(to_field_name("__id__", false), "Id");
    }

    #[test]
    fn test_single_char_segments() {
        assert_eq!(to_big_camel_case("a_b_c"), "ABC");
        assert_eq!(to_small_camel_case("a_b_c"), "aBC");
        assert_eq!(to_field_name("x_y", true), "XY");
    }

    #[test]
    fn test_to_field_name() {
        assert_eq!(to_field_name("user_id", false), "UserId");
        assert_eq!(to_field_name("USER_ID", false), "USERID");
        assert_eq!(to_field_name("USER_ID", true), "UserId");
        assert_eq!(to_field_name("createdAt", false), "CreatedAt");
        assert_eq!(to_field_name("createdAt", true), "Createdat");
    }

    #[test]
    fn test_to_type_name() {
        assert_eq!(to_type_name("users", false), "Users");
        assert_eq!(to_type_name("user_roles", false), "User_roles");
        assert_eq!(to_type_name("user_roles", true), "UserRoles");
        assert_eq!(to_type_name("", true), "");
    }

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_prefix("t_users", "t_"), "users");
        assert_eq!(strip_prefix("t_users", ""), "t_users");
        assert_eq!(strip_prefix("users", "t_"), "users");
        assert_eq!(strip_prefix("t_t_users", "t_"), "t_users");
        assert_eq!(strip_prefix("cat_log", "t_"), "cat_log");
        assert_eq!(strip_prefix("a_t_b", "t_"), "a_t_b");
    }
}
