use crate::href::VcfHref;

/// Stub file content standing in for a downloaded vCard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub filename: String,
    pub url: String,
}

impl Placeholder {
    pub fn for_href(href: &VcfHref, base_url: &str) -> Self {
        Self {
            filename: href.filename().to_string(),
            url: href.full_url(base_url),
        }
    }

    /// Render the two-line comment template written to disk.
    pub fn contents(&self) -> String {
        format!("# Placeholder for {}\n# URL: {}\n", self.filename, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contents_template() {
        let p = Placeholder::for_href(&VcfHref::new("/a/b/x.vcf"), "https://example.com");
        assert_eq!(p.filename, "x.vcf");
        assert_eq!(
            p.contents(),
            "# Placeholder for x.vcf\n# URL: https://example.com/a/b/x.vcf\n"
        );
    }
}
