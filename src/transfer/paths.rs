//! In-container path helpers. Container paths always use `/`.

fn trimmed(path: &str) -> &str {
    let t = path.trim_end_matches('/');
    if t.is_empty() && path.starts_with('/') {
        "/"
    } else {
        t
    }
}

/// Last component of `path`, ignoring trailing separators.
///
/// Returns `None` for the root and for empty paths.
pub fn base_name(path: &str) -> Option<&str> {
    let t = trimmed(path);
    let name = t.rsplit('/').next().unwrap_or(t);
    match name {
        "" | "." | ".." => None,
        n => Some(n),
    }
}

/// Directory containing `path`, ignoring trailing separators.
pub fn parent_dir(path: &str) -> String {
    match trimmed(path).rsplit_once('/') {
        Some(("", _)) => "/".to_string(),
        Some((parent, _)) => parent.to_string(),
        None => "/".to_string(),
    }
}

/// Join a relative artifact path onto the repository path as given.
pub fn join_container_path(repo_path: &str, relative: &str) -> String {
    if repo_path.ends_with('/') {
        format!("{repo_path}{relative}")
    } else {
        format!("{repo_path}/{relative}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/srv/app"), Some("app"));
        assert_eq!(base_name("/srv/app/"), Some("app"));
        assert_eq!(base_name("app"), Some("app"));
        assert_eq!(base_name("/srv/my.app"), Some("my.app"));
        assert_eq!(base_name("/"), None);
        assert_eq!(base_name(""), None);
        assert_eq!(base_name("/srv/.."), None);
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("/srv/app"), "/srv");
        assert_eq!(parent_dir("/srv/app/"), "/srv");
        assert_eq!(parent_dir("/app"), "/");
        assert_eq!(parent_dir("app"), "/");
    }

    #[test]
    fn test_join_container_path() {
        assert_eq!(
            join_container_path("/srv/app", "target/app.jar"),
            "/srv/app/target/app.jar"
        );
        assert_eq!(
            join_container_path("/srv/app/", "target/app.jar"),
            "/srv/app/target/app.jar"
        );
    }
}
