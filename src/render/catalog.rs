use ecomoving_schema::Product;
use leptos::prelude::*;
use url::form_urlencoded;

use super::lead::LeadForm;
use crate::assets::AssetResolver;
use crate::catalog::{CatalogQuery, CategoryFilter, DISPLAY_CATEGORIES};

/// Features every supplier attaches; they say nothing about the product.
pub const BOILERPLATE_FEATURES: [&str; 2] = ["Calidad Premium", "Ecorresponsable"];

/// Shown when a product has no features left after dropping the boilerplate.
pub const NO_FEATURES: &str = "Consulte para más detalles técnicos.";

/// How many same-category products the detail page suggests.
pub const RELATED_LIMIT: usize = 4;

pub const ALL_CATEGORIES: &str = "TODOS";
pub const PREMIUM_CATEGORY: &str = "PREMIUM";

fn encode(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// `/catalogo/<id>` with the id percent-encoded as a path segment.
pub fn product_href(id: &str) -> String {
    format!("/catalogo/{}", encode(id).replace('+', "%20"))
}

fn category_href(category: &str, search: &str) -> String {
    if search.is_empty() {
        format!("/catalogo?categoria={}", encode(category))
    } else {
        format!("/catalogo?categoria={}&q={}", encode(category), encode(search))
    }
}

pub fn visible_features(product: &Product) -> Vec<String> {
    product
        .features
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty() && !BOILERPLATE_FEATURES.contains(f))
        .map(str::to_string)
        .collect()
}

#[component]
pub fn CatalogPage(
    products: Vec<Product>,
    query: CatalogQuery,
    assets: AssetResolver,
    #[prop(default = false)] lead_submitted: bool,
) -> impl IntoView {
    let active = query
        .categoria
        .as_deref()
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());
    let show_all = matches!(
        query.category_filter(),
        None | Some(CategoryFilter::Everything)
    );
    let search = query.search().to_string();

    let buttons: Vec<(String, &'static str, bool)> = std::iter::once((
        ALL_CATEGORIES.to_string(),
        "",
        show_all,
    ))
    .chain(
        DISPLAY_CATEGORIES
            .iter()
            .map(|c| ((*c).to_string(), "", active == *c)),
    )
    .chain(std::iter::once((
        PREMIUM_CATEGORY.to_string(),
        "premium",
        active == PREMIUM_CATEGORY,
    )))
    .collect();

    let hidden_category = if show_all { String::new() } else { active.clone() };
    let count = products.len();

    view! {
        <main class="catalog">
            <div class="catalog-inner">
                <a class="back-link" href="/">"← VOLVER AL INICIO"</a>
                <h1>"CATÁLOGO " <span>"2026"</span></h1>
                <nav class="category-bar">
                    {buttons.into_iter().map(|(category, extra, is_active)| {
                        let class = match (extra, is_active) {
                            ("", true) => "active".to_string(),
                            ("", false) => String::new(),
                            (extra, true) => format!("{extra} active"),
                            (extra, false) => extra.to_string(),
                        };
                        let href = category_href(&category, &search);
                        let label = if category == PREMIUM_CATEGORY {
                            "PRODUCTOS PREMIUM".to_string()
                        } else {
                            category
                        };
                        view! { <a class=class href=href>{label}</a> }
                    }).collect::<Vec<_>>()}
                </nav>
                <form class="search-form" method="get" action="/catalogo">
                    <input type="hidden" name="categoria" value=hidden_category />
                    <input type="search" name="q" value=search.clone() placeholder="Buscar por nombre, descripción o código" />
                    <button type="submit">"BUSCAR"</button>
                </form>
                {if count == 0 {
                    view! { <p class="empty">"No encontramos productos para esta búsqueda."</p> }.into_any()
                } else {
                    view! {
                        <div class="product-grid">
                            {products.into_iter().map(|product| {
                                view! { <ProductCard product=product assets=assets.clone() /> }
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_any()
                }}
                <LeadForm submitted=lead_submitted />
            </div>
        </main>
    }
}

#[component]
fn ProductCard(product: Product, assets: AssetResolver) -> impl IntoView {
    let href = product_href(&product.id);
    let image = assets.resolve(&product.image);
    let badge_class = if product.is_premium { "badge premium" } else { "badge" };
    let badge = if product.is_premium {
        "PREMIUM".to_string()
    } else {
        product.category.clone()
    };

    view! {
        <a class="product-card" href=href data-id=product.id>
            <img src=image alt=product.name.clone() loading="lazy" />
            <div class="body">
                <span class=badge_class>{badge}</span>
                <h3>{product.name}</h3>
                <p>{product.description}</p>
            </div>
        </a>
    }
}

#[component]
pub fn ProductDetail(
    product: Product,
    assets: AssetResolver,
    #[prop(default = Vec::new())] related: Vec<Product>,
) -> impl IntoView {
    let main_image = assets.resolve(&product.image);
    let thumbs = assets.resolve_all(product.gallery());
    let features = visible_features(&product);
    let badge_class = if product.is_premium { "badge premium" } else { "badge" };
    let wholesaler = product.wholesaler.clone();

    view! {
        <main class="catalog">
            <div class="catalog-inner">
                <a class="back-link" href="/catalogo">"← VOLVER AL CATÁLOGO"</a>
                <div class="product-detail">
                    <div>
                        <img class="main-image" src=main_image alt=product.name.clone() />
                        <div class="thumbs">
                            {thumbs.into_iter().map(|src| {
                                view! { <img src=src alt="" loading="lazy" /> }
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                    <div>
                        <span class=badge_class>{product.category}</span>
                        <h1>{product.name}</h1>
                        <p>{product.description}</p>
                        <ul class="features">
                            {if features.is_empty() {
                                view! { <li class="features-empty">{NO_FEATURES}</li> }.into_any()
                            } else {
                                features
                                    .into_iter()
                                    .map(|f| view! { <li>{f}</li> })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }}
                        </ul>
                        <p class="badge">{wholesaler}</p>
                        <a class="cta" href="/catalogo#lead">"COTIZAR"</a>
                    </div>
                </div>
                <RelatedStrip products=related assets=assets />
            </div>
        </main>
    }
}

#[component]
fn RelatedStrip(products: Vec<Product>, assets: AssetResolver) -> impl IntoView {
    if products.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <section class="related">
            <h4>"Productos Relacionados"</h4>
            <div class="related-grid">
                {products.into_iter().map(|p| {
                    let href = product_href(&p.id);
                    let image = assets.resolve(&p.image);
                    view! {
                        <a class="related-card" href=href>
                            <img src=image alt=p.name.clone() loading="lazy" />
                            <span>{p.name}</span>
                        </a>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
    .into_any()
}

/// Plain heading and message, used for 404s and rejected forms.
#[component]
pub fn MessagePage(
    #[prop(into)] heading: String,
    #[prop(into)] message: String,
    #[prop(into, default = "/catalogo".to_string())] back_href: String,
) -> impl IntoView {
    view! {
        <main class="catalog">
            <div class="catalog-inner">
                <a class="back-link" href=back_href>"← VOLVER"</a>
                <h1>{heading}</h1>
                <p class="empty">{message}</p>
            </div>
        </main>
    }
}
