use std::borrow::Cow;

/// Marks an excluded path as a prefix pattern.
const WILDCARD: char = '*';

/// Returns `true` if `path` is not covered by any of the `excluded_paths`.
///
/// An entry ending in `*` excludes every path starting with the rest of the entry.
/// Any other entry must equal `path` once a trailing `/` has been appended to it.
/// Empty entries are skipped.
///
/// An empty `path` or an empty `excluded_paths` always requires authentication.
pub fn require_auth<P>(path: &str, excluded_paths: &[P]) -> bool
where
    P: AsRef<str>,
{
    if path.is_empty() || excluded_paths.is_empty() {
        return true;
    }

    let normalized: Cow<'_, str> = if path.ends_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("{path}/"))
    };

    for excluded in excluded_paths.iter().map(AsRef::as_ref) {
        if excluded.is_empty() {
            continue;
        }

        let excluded_match = match excluded.strip_suffix(WILDCARD) {
            Some(prefix) => path.starts_with(prefix),
            None => normalized == excluded,
        };

        if excluded_match {
            return false;
        }
    }

    true
}

/// Ordered set of path patterns exempt from authentication. See [`require_auth`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludedPaths {
    paths: Vec<Cow<'static, str>>,
}

impl ExcludedPaths {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Cow<'static, str>>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, path: impl Into<Cow<'static, str>>) {
        self.paths.push(path.into());
    }

    pub fn as_slice(&self) -> &[Cow<'static, str>] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn requires_auth(&self, path: &str) -> bool {
        require_auth(path, &self.paths)
    }
}

impl<P> FromIterator<P> for ExcludedPaths
where
    P: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}
