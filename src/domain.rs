use crate::error::DomainError;

/// A registrable domain split the way Namecheap commands address it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDomain {
    sld: String, // e.g., "example"
    tld: String, // e.g., "com" or "co.uk"
}

impl ParsedDomain {
    pub fn parse(domain: &str) -> Result<Self, DomainError> {
        let domain = domain.trim();
        let domain = domain.strip_suffix('.').unwrap_or(domain);

        let (sld, tld) = domain.split_once('.').ok_or_else(|| {
            DomainError::DomainValidationError(format!(
                "Domain '{}' must have at least 2 parts (e.g., example.com)",
                domain
            ))
        })?;

        if domain.split('.').any(|label| label.is_empty()) {
            return Err(DomainError::DomainValidationError(format!(
                "Domain '{}' contains empty parts",
                domain
            )));
        }

        if let Some(label) = domain.split('.').find(|label| !is_valid_label(label)) {
            return Err(DomainError::DomainValidationError(format!(
                "Domain '{}' contains invalid label '{}'",
                domain, label
            )));
        }

        Ok(Self {
            sld: sld.to_string(),
            tld: tld.to_string(),
        })
    }

    pub fn sld(&self) -> &str {
        &self.sld
    }

    pub fn tld(&self) -> &str {
        &self.tld
    }
}

fn is_valid_label(label: &str) -> bool {
    label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}
