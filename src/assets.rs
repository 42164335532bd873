//! Image references stored in the content and product tables are either
//! absolute URLs or object keys inside the public bucket.

use url::Url;

#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    bucket: Option<Url>,
}

impl AssetResolver {
    pub fn new(bucket: Option<Url>) -> Self {
        let bucket = bucket.map(|mut url| {
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            url
        });
        Self { bucket }
    }

    /// Absolute, protocol-relative, data and root-relative references pass
    /// through; bare keys are joined onto the bucket when one is configured.
    pub fn resolve(&self, reference: &str) -> String {
        let reference = reference.trim();
        if reference.is_empty()
            || reference.starts_with('/')
            || reference.starts_with("data:")
            || Url::parse(reference).is_ok()
        {
            return reference.to_string();
        }

        match &self.bucket {
            Some(bucket) => bucket
                .join(reference)
                .map_or_else(|_| reference.to_string(), String::from),
            None => reference.to_string(),
        }
    }

    pub fn resolve_all<'a, I>(&self, references: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        references
            .into_iter()
            .filter(|r| !r.trim().is_empty())
            .map(|r| self.resolve(r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> AssetResolver {
        AssetResolver::new(Some(
            Url::parse("https://demo.supabase.co/storage/v1/object/public/web").expect("url"),
        ))
    }

    #[test]
    fn bare_keys_join_the_bucket() {
        assert_eq!(
            resolver().resolve("hero/fondo.jpg"),
            "https://demo.supabase.co/storage/v1/object/public/web/hero/fondo.jpg"
        );
    }

    #[test]
    fn absolute_and_rooted_references_pass_through() {
        let r = resolver();
        assert_eq!(r.resolve("https://cdn.test/a.jpg"), "https://cdn.test/a.jpg");
        assert_eq!(r.resolve("/static/logo.svg"), "/static/logo.svg");
        assert_eq!(r.resolve(""), "");
        assert_eq!(AssetResolver::default().resolve("hero.jpg"), "hero.jpg");
    }

    #[test]
    fn resolve_all_drops_blanks() {
        assert_eq!(
            resolver().resolve_all(["", " ", "https://x.test/a.png"]),
            vec!["https://x.test/a.png"]
        );
    }
}
