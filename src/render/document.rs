use leptos::prelude::*;

use super::styles::SITE_CSS;

pub const FOOTER_TEXT: &str = "ECOMOVING © 2026 | SUSTAINABLE LUXURY";

/// Page shell shared by every server-rendered page.
#[component]
pub fn SiteDocument(
    #[prop(into)] title: String,
    /// Page-specific rules appended after the site stylesheet.
    #[prop(into, default = String::new())]
    extra_css: String,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="es">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style inner_html=SITE_CSS></style>
                <style inner_html=extra_css></style>
            </head>
            <body>
                {children()}
                <footer>
                    <p>{FOOTER_TEXT}</p>
                </footer>
            </body>
        </html>
    }
}
