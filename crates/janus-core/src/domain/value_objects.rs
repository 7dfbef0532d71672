//! Domain value objects: TemplateRef, ProjectName.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. They
//! never touch the filesystem; turning a [`TemplateRef`] into a real path is
//! the job of the `TemplateStore` port.

use std::fmt;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Name used when sanitisation leaves nothing behind.
pub const FALLBACK_PROJECT_NAME: &str = "my-project";

/// Characters that are invalid in directory names on at least one platform,
/// plus `!` which shells treat as history expansion.
const FORBIDDEN_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*', '!'];

// ── TemplateRef ──────────────────────────────────────────────────────────────

/// A `(domain, subdomain)` pair naming one template directory.
///
/// `janus python flask` resolves to `<root>/python/flask`; `janus nextjs`
/// resolves to `<root>/nextjs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateRef {
    domain: String,
    subdomain: Option<String>,
}

impl TemplateRef {
    /// Build a reference from raw CLI input.
    ///
    /// Both parts are trimmed. A blank subdomain is treated as absent. Either
    /// part must be a single path segment: separators, `.` and `..` are
    /// rejected so a reference can never escape the templates root.
    pub fn new(domain: impl AsRef<str>, subdomain: Option<&str>) -> Result<Self, DomainError> {
        let domain = domain.as_ref().trim();
        if domain.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "domain" });
        }
        check_segment(domain)?;

        let subdomain = match subdomain.map(str::trim) {
            Some(s) if !s.is_empty() => {
                check_segment(s)?;
                Some(s.to_owned())
            }
            _ => None,
        };

        Ok(Self {
            domain: domain.to_owned(),
            subdomain,
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn subdomain(&self) -> Option<&str> {
        self.subdomain.as_deref()
    }

    /// Display name: `domain` or `domain-subdomain`.
    pub fn name(&self) -> String {
        match &self.subdomain {
            Some(sub) => format!("{}-{}", self.domain, sub),
            None => self.domain.clone(),
        }
    }

    /// Project name offered when the user just presses enter.
    pub fn default_project_name(&self) -> String {
        format!("{}-app", self.name())
    }

    /// Path of the template relative to the templates root.
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::from(&self.domain);
        if let Some(sub) = &self.subdomain {
            path.push(sub);
        }
        path
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

fn check_segment(segment: &str) -> Result<(), DomainError> {
    let reason = if segment == "." || segment == ".." {
        Some("relative path segments are not allowed")
    } else if segment.contains(['/', '\\']) {
        Some("path separators are not allowed")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DomainError::InvalidTemplateRef {
            input: segment.to_owned(),
            reason: reason.to_owned(),
        }),
        None => Ok(()),
    }
}

// ── ProjectName ──────────────────────────────────────────────────────────────

/// A filesystem-safe, lowercase, hyphenated project directory name.
///
/// Invariant: only constructible through [`ProjectName::sanitize`], so every
/// value is non-empty and a fixed point of sanitisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Sanitise arbitrary user input into a project name.
    ///
    /// 1. Trim surrounding whitespace
    /// 2. Drop `< > : " / \ | ? * !`
    /// 3. Replace spaces with `-`
    /// 4. Lowercase
    /// 5. Trim leading/trailing `-` and `.`
    /// 6. Fall back to [`FALLBACK_PROJECT_NAME`] if nothing is left
    pub fn sanitize(raw: &str) -> Self {
        let cleaned: String = raw
            .trim()
            .chars()
            .filter(|c| !FORBIDDEN_NAME_CHARS.contains(c))
            .map(|c| if c == ' ' { '-' } else { c })
            .collect::<String>()
            .to_lowercase();

        let trimmed = cleaned.trim_matches(|c| c == '-' || c == '.');

        if trimmed.is_empty() {
            Self(FALLBACK_PROJECT_NAME.to_owned())
        } else {
            Self(trimmed.to_owned())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── TemplateRef ───────────────────────────────────────────────────────

    #[test]
    fn domain_only_reference() {
        let r = TemplateRef::new("nextjs", None).unwrap();
        assert_eq!(r.name(), "nextjs");
        assert_eq!(r.default_project_name(), "nextjs-app");
        assert_eq!(r.relative_path(), PathBuf::from("nextjs"));
        assert_eq!(r.subdomain(), None);
    }

    #[test]
    fn domain_and_subdomain_reference() {
        let r = TemplateRef::new("python", Some("flask")).unwrap();
        assert_eq!(r.name(), "python-flask");
        assert_eq!(r.default_project_name(), "python-flask-app");
        assert_eq!(r.relative_path(), PathBuf::from("python").join("flask"));
    }

    #[test]
    fn blank_subdomain_degenerates_to_domain_only() {
        let r = TemplateRef::new("go", Some("  ")).unwrap();
        assert_eq!(r.subdomain(), None);
        assert_eq!(r.name(), "go");
    }

    #[test]
    fn empty_domain_is_rejected() {
        assert_eq!(
            TemplateRef::new("   ", None),
            Err(DomainError::MissingRequiredField { field: "domain" })
        );
    }

    #[test]
    fn traversal_segments_are_rejected() {
        assert!(TemplateRef::new("..", None).is_err());
        assert!(TemplateRef::new("python", Some("..")).is_err());
        assert!(TemplateRef::new("a/b", None).is_err());
        assert!(TemplateRef::new("python", Some("x\\y")).is_err());
    }

    // ── ProjectName ───────────────────────────────────────────────────────

    #[test]
    fn sanitize_strips_lowers_and_hyphenates() {
        assert_eq!(ProjectName::sanitize("My Cool App!").as_str(), "my-cool-app");
        assert_eq!(ProjectName::sanitize("Hello World?").as_str(), "hello-world");
    }

    #[test]
    fn sanitize_blank_falls_back() {
        assert_eq!(ProjectName::sanitize("   ").as_str(), FALLBACK_PROJECT_NAME);
        assert_eq!(ProjectName::sanitize("").as_str(), FALLBACK_PROJECT_NAME);
        assert_eq!(ProjectName::sanitize("-.-").as_str(), FALLBACK_PROJECT_NAME);
    }

    #[test]
    fn sanitize_trims_surrounding_whitespace() {
        assert_eq!(ProjectName::sanitize("\tweird\n").as_str(), "weird");
        assert_eq!(ProjectName::sanitize("  My App ").as_str(), "my-app");
    }

    #[test]
    fn sanitize_neutralises_parent_traversal() {
        assert_eq!(ProjectName::sanitize("../etc").as_str(), "etc");
        assert_eq!(ProjectName::sanitize("..\\..\\win").as_str(), "win");
    }

    #[test]
    fn sanitize_removes_every_forbidden_char() {
        assert_eq!(ProjectName::sanitize(r#"a<b>c:d"e/f\g|h?i*j!"#).as_str(), "abcdefghij");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let inputs = [
            "My Cool App!",
            "   ",
            "../etc",
            " -.Leading and trailing.- ",
            "UPPER_case 123",
            "a - . - b",
            "ÄÖÜ Straße",
            "--..--",
            "x* y? z:",
        ];
        for input in inputs {
            let once = ProjectName::sanitize(input);
            let twice = ProjectName::sanitize(once.as_str());
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}
