//! Splitting a fully-qualified name into subdomain and registrable domain.

use std::fmt;
use std::str::FromStr;

use crate::error::{PorkbunError, Result};

/// A name split into its subdomain and registrable-domain parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedDomain {
    /// Labels before the registrable domain; empty for a bare domain.
    pub subdomain: String,
    /// The last two labels, e.g. `example.com`.
    pub domain: String,
}

/// Split `name` on `.`; the last two labels are the domain, the rest the subdomain.
///
/// Purely syntactic: labels are not checked for characters, length or IDN form.
///
/// ```
/// use porkbun_dns::parse_domain;
///
/// let parsed = parse_domain("foo.bar.example.com")?;
/// assert_eq!(parsed.subdomain, "foo.bar");
/// assert_eq!(parsed.domain, "example.com");
/// # Ok::<(), porkbun_dns::PorkbunError>(())
/// ```
pub fn parse_domain(name: &str) -> Result<ParsedDomain> {
    let labels: Vec<&str> = name.split('.').collect();
    if labels.len() < 2 {
        return Err(PorkbunError::InvalidDomain {
            domain: name.to_string(),
        });
    }

    let (sub, dom) = labels.split_at(labels.len() - 2);
    Ok(ParsedDomain {
        subdomain: sub.join("."),
        domain: dom.join("."),
    })
}

impl FromStr for ParsedDomain {
    type Err = PorkbunError;

    fn from_str(s: &str) -> Result<Self> {
        parse_domain(s)
    }
}

impl fmt::Display for ParsedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subdomain.is_empty() {
            f.write_str(&self.domain)
        } else {
            write!(f, "{}.{}", self.subdomain, self.domain)
        }
    }
}
