//! Server-side rendered pages.
//!
//! Every page is a Leptos view rendered straight to a string; there is no
//! hydration and no client runtime.

pub mod catalog;
pub mod document;
pub mod gallery;
pub mod home;
pub mod lead;
pub mod styles;

use ecomoving_schema::{Product, WebContent};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::assets::AssetResolver;
use crate::catalog::CatalogQuery;
use crate::gallery::{SlideTiming, hero_slides};
use catalog::{CatalogPage, MessagePage, ProductDetail};
use document::SiteDocument;
use home::{Hero, SectionView, hero_keyframes};

/// Settings every page render needs.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub assets: AssetResolver,
    pub hero_rotation_secs: u64,
}

fn finish(html: String) -> String {
    // Leptos does not emit a doctype.
    format!("<!DOCTYPE html>\n{html}")
}

pub fn render_home(content: &WebContent, ctx: &PageContext) -> String {
    let hero = content.hero.clone();
    let sections: Vec<_> = content.sorted_sections().into_iter().cloned().collect();
    let title = hero
        .meta_title
        .clone()
        .unwrap_or_else(|| "Ecomoving | Merchandising sustentable".to_string());
    let keyframes = hero_keyframes(SlideTiming::new(
        hero_slides(&hero).len(),
        ctx.hero_rotation_secs,
    ));
    let assets = ctx.assets.clone();
    let rotation_secs = ctx.hero_rotation_secs;

    let doc = view! {
        <SiteDocument title=title extra_css=keyframes>
            <main>
                <Hero hero=hero assets=assets.clone() rotation_secs=rotation_secs />
                {sections.into_iter().map(|section| {
                    view! { <SectionView section=section assets=assets.clone() /> }
                }).collect::<Vec<_>>()}
            </main>
        </SiteDocument>
    };
    finish(doc.to_html())
}

pub fn render_catalog(
    products: Vec<Product>,
    query: &CatalogQuery,
    lead_submitted: bool,
    ctx: &PageContext,
) -> String {
    let query = query.clone();
    let assets = ctx.assets.clone();
    let doc = view! {
        <SiteDocument title="Catálogo 2026 | Ecomoving">
            <CatalogPage
                products=products
                query=query
                assets=assets
                lead_submitted=lead_submitted
            />
        </SiteDocument>
    };
    finish(doc.to_html())
}

pub fn render_product(product: Product, related: Vec<Product>, ctx: &PageContext) -> String {
    let title = format!("{} | Ecomoving", product.name);
    let assets = ctx.assets.clone();
    let doc = view! {
        <SiteDocument title=title>
            <ProductDetail product=product assets=assets related=related />
        </SiteDocument>
    };
    finish(doc.to_html())
}

/// Standalone page with a heading and a short message.
pub fn render_message(heading: &str, message: &str) -> String {
    let title = format!("{heading} | Ecomoving");
    let heading = heading.to_string();
    let message = message.to_string();
    let doc = view! {
        <SiteDocument title=title>
            <MessagePage heading=heading message=message />
        </SiteDocument>
    };
    finish(doc.to_html())
}
