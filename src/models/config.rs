//! Option structs for the configurable helpers.
//!
//! Defaults come from utils/constants.rs.

use std::fmt;
use std::sync::Arc;

use crate::models::value::Value;
use crate::utils::constants::{DEFAULT_NESTED_SEPARATOR, DEFAULT_QUERY_SEPARATOR};

/// Custom array merge function: `(target, source) -> merged`
pub type ArrayMergeFn = Arc<dyn Fn(&[Value], &[Value]) -> Vec<Value> + Send + Sync>;

/// Key segment transformation for `convert_to_nested`
pub type KeyTransform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Value transformation for `convert_to_nested`
pub type ValueTransform = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// How `merge` combines two arrays
#[derive(Clone, Default)]
pub enum ArrayPolicy {
    /// Source array replaces target array
    #[default]
    Overwrite,
    /// Target followed by source
    Merge,
    /// Caller decides
    Custom(ArrayMergeFn),
}

impl fmt::Debug for ArrayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayPolicy::Overwrite => write!(f, "Overwrite"),
            ArrayPolicy::Merge => write!(f, "Merge"),
            ArrayPolicy::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Options for `merge`
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Keep the target value when the source value is null
    pub skip_nulls: bool,
    /// Array combination policy
    pub array_policy: ArrayPolicy,
}

impl MergeOptions {
    pub fn skip_nulls(mut self, skip: bool) -> Self {
        self.skip_nulls = skip;
        self
    }

    pub fn array_policy(mut self, policy: ArrayPolicy) -> Self {
        self.array_policy = policy;
        self
    }

    /// Shorthand for `ArrayPolicy::Custom`
    pub fn merge_arrays_with<F>(self, f: F) -> Self
    where
        F: Fn(&[Value], &[Value]) -> Vec<Value> + Send + Sync + 'static,
    {
        self.array_policy(ArrayPolicy::Custom(Arc::new(f)))
    }
}

/// Options for `throttle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleOptions {
    /// Invoke on the first call
    pub leading: bool,
    /// Invoke once more at the end of the window with the latest arguments
    pub trailing: bool,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

/// Options for `convert_to_nested`
#[derive(Clone)]
pub struct NestedOptions {
    /// Separator splitting flat keys into path segments
    pub separator: String,
    /// Applied to every path segment
    pub transform_key: KeyTransform,
    /// Applied to every value (default: parse JSON strings, keep others)
    pub transform_value: ValueTransform,
}

impl Default for NestedOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_NESTED_SEPARATOR.to_string(),
            transform_key: Arc::new(|segment: &str| segment.to_string()),
            transform_value: Arc::new(crate::core::object::parse_json_or_raw),
        }
    }
}

impl fmt::Debug for NestedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedOptions")
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

impl NestedOptions {
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn transform_key<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transform_key = Arc::new(f);
        self
    }

    pub fn transform_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.transform_value = Arc::new(f);
        self
    }
}

/// `SameSite` cookie attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Options for `generate_cookie`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieOptions {
    /// Expire after this many days (negative removes the cookie)
    pub expires: Option<f64>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
    pub same_site: Option<SameSite>,
}

impl CookieOptions {
    pub fn expires(mut self, days: f64) -> Self {
        self.expires = Some(days);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }
}

/// Options for query string parsing/generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub separator: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_QUERY_SEPARATOR.to_string(),
        }
    }
}

impl QueryOptions {
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let throttle = ThrottleOptions::default();
        assert!(throttle.leading && throttle.trailing);

        let merge = MergeOptions::default();
        assert!(!merge.skip_nulls);
        assert!(matches!(merge.array_policy, ArrayPolicy::Overwrite));

        assert_eq!(NestedOptions::default().separator, ".");
        assert_eq!(QueryOptions::default().separator, "&");
    }

    #[test]
    fn test_cookie_builder() {
        let options = CookieOptions::default()
            .path("/")
            .secure(true)
            .same_site(SameSite::Lax);
        assert_eq!(options.path.as_deref(), Some("/"));
        assert!(options.secure);
        assert_eq!(options.same_site.map(|s| s.as_str()), Some("Lax"));
    }
}
