// Template identifiers — the target style a CV is converted into.
//
// A template is named by an opaque http(s) URL that only the conversion
// service interprets. A few well-known templates can be picked by key.

use anyhow::Result;
use reqwest::Url;

/// A template that can be chosen by a short key instead of its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

pub const POPULAR_TEMPLATES: &[PopularTemplate] = &[
    PopularTemplate {
        key: "awesome-cv",
        name: "Awesome CV",
        url: "https://www.overleaf.com/latex/templates/awesome-cv/dfnvtnhzhhbm",
    },
    PopularTemplate {
        key: "deedy-resume",
        name: "Deedy Resume",
        url: "https://www.overleaf.com/latex/templates/deedy-resume/bjryvfsjdyxz",
    },
    PopularTemplate {
        key: "moderncv-classic",
        name: "ModernCV Classic",
        url: "https://www.overleaf.com/latex/templates/moderncv-classic/qzxmwmmkqzjv",
    },
];

/// Look up a popular template by key (case-insensitive).
pub fn find_popular(key: &str) -> Option<&'static PopularTemplate> {
    POPULAR_TEMPLATES
        .iter()
        .find(|t| t.key.eq_ignore_ascii_case(key.trim()))
}

/// Turn user input (a popular-template key or a URL) into a template URL.
pub fn resolve_template(input: &str) -> Result<String> {
    if let Some(popular) = find_popular(input) {
        return Ok(popular.url.to_string());
    }
    validate_template_url(input)
}

/// Accept only absolute http/https URLs. Returns the trimmed input unchanged.
pub fn validate_template_url(input: &str) -> Result<String> {
    let trimmed = input.trim();
    let valid = Url::parse(trimmed).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some()
    });
    if !valid {
        anyhow::bail!(
            "Please enter a valid HTTP/HTTPS template URL (got {trimmed:?}).\n\
             Run `resume-wizard template --list` to see the built-in templates."
        );
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popular_key_resolves_to_url() {
        let url = resolve_template("Awesome-CV").unwrap();
        assert_eq!(url, POPULAR_TEMPLATES[0].url);
    }

    #[test]
    fn url_is_trimmed_but_otherwise_kept() {
        let url = resolve_template("  https://example.com/templates/x?y=1  ").unwrap();
        assert_eq!(url, "https://example.com/templates/x?y=1");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let url = validate_template_url("HTTPS://Example.com/t").unwrap();
        assert_eq!(url, "HTTPS://Example.com/t");
        assert!(validate_template_url("Http://example.com/t").is_ok());
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert!(validate_template_url("ftp://example.com/t").is_err());
        assert!(validate_template_url("example.com/t").is_err());
        assert!(validate_template_url("https://").is_err());
        assert!(validate_template_url("").is_err());
    }

    #[test]
    fn popular_templates_are_valid_urls() {
        for t in POPULAR_TEMPLATES {
            assert!(validate_template_url(t.url).is_ok(), "{} has a bad URL", t.key);
        }
    }
}
