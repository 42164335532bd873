use ecomoving_schema::{DynamicSection, HeroContent, LayoutBlock, TextAlign};
use leptos::prelude::*;

use super::gallery::GalleryStripView;
use super::styles::{
    ACCENT, DEFAULT_BLOCK_BG, DEFAULT_BLOCK_RADIUS, DEFAULT_DESC_SIZE, DEFAULT_PARAGRAPH_COLOR,
    DEFAULT_SECTION_BG, DEFAULT_TITLE_COLOR, DEFAULT_TITLE_SIZE, GRID_COLUMNS, css_or, css_url,
};
use crate::assets::AssetResolver;
use crate::gallery::{SlideTiming, hero_slides};

pub const UNTITLED: &str = "Sin Título";
pub const NO_DESCRIPTION: &str = "Sin descripción disponible.";

/// Keyframes for the hero crossfade; empty when there is a single slide.
pub fn hero_keyframes(timing: SlideTiming) -> String {
    if !timing.rotates() {
        return String::new();
    }
    let visible = timing.visible_percent();
    let fade = (visible / 4.0).min(5.0);
    format!(
        "@keyframes hero-fade {{ 0% {{ opacity: 0; }} {fade_in:.2}% {{ opacity: 0.4; }} {hold:.2}% {{ opacity: 0.4; }} {fade_out:.2}% {{ opacity: 0; }} 100% {{ opacity: 0; }} }}",
        fade_in = fade,
        hold = visible,
        fade_out = (visible + fade).min(100.0),
    )
}

#[component]
pub fn Hero(hero: HeroContent, assets: AssetResolver, rotation_secs: u64) -> impl IntoView {
    let slides: Vec<String> = hero_slides(&hero)
        .into_iter()
        .map(|s| assets.resolve(s))
        .collect();
    let timing = SlideTiming::new(slides.len(), rotation_secs);
    let alt = hero.alt_text.clone().unwrap_or_else(|| "Hero".to_string());

    view! {
        <section class="hero">
            <div class="hero-backdrop" role="img" aria-label=alt>
                {slides.into_iter().enumerate().map(|(idx, src)| {
                    let (class, style) = if timing.rotates() {
                        (
                            "hero-slide rotating",
                            format!(
                                "background-image:{};animation-name:hero-fade;animation-duration:{}s;animation-delay:{}s",
                                css_url(&src),
                                timing.cycle_secs(),
                                timing.delay_secs(idx),
                            ),
                        )
                    } else {
                        ("hero-slide", format!("background-image:{}", css_url(&src)))
                    };
                    view! { <div class=class style=style></div> }
                }).collect::<Vec<_>>()}
                <div class="hero-shade"></div>
            </div>
            <div class="hero-copy">
                <h1>{hero.title1}</h1>
                <p>{hero.paragraph1}</p>
                <a class="cta" href=hero.cta_link>{hero.cta_text}</a>
            </div>
        </section>
    }
}

#[component]
pub fn SectionView(section: DynamicSection, assets: AssetResolver) -> impl IntoView {
    let accent = css_or(section.title_color.as_deref(), ACCENT);
    let align = section.desc_align().unwrap_or_default();
    let paragraph_margin = if align == TextAlign::Center { "0 auto 40px" } else { "0 0 40px 0" };

    let title = if section.title1.trim().is_empty() {
        UNTITLED.to_string()
    } else {
        section.title1.clone()
    };
    let paragraph = if section.paragraph1.trim().is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        section.paragraph1.clone()
    };

    let section_style = format!(
        "background-color:{}",
        css_or(Some(section.bg_color.as_str()), DEFAULT_SECTION_BG)
    );
    let header_style = format!("text-align:{}", align.as_css());
    let title_style = format!(
        "font-size:{};color:{}",
        css_or(section.title_size.as_deref(), DEFAULT_TITLE_SIZE),
        css_or(section.title_color.as_deref(), DEFAULT_TITLE_COLOR),
    );
    let paragraph_style = format!(
        "font-size:{};color:{};margin:{paragraph_margin}",
        css_or(section.desc_size.as_deref(), DEFAULT_DESC_SIZE),
        css_or(section.desc_color.as_deref(), DEFAULT_PARAGRAPH_COLOR),
    );

    let subtitle = section.subtitle.clone().filter(|s| !s.trim().is_empty());
    let title2 = section.title2.clone().filter(|s| !s.trim().is_empty());
    let paragraph2 = section.paragraph2.clone().filter(|s| !s.trim().is_empty());
    let blocks: Vec<LayoutBlock> = section.blocks_by_depth().into_iter().cloned().collect();
    let gallery = assets.resolve_all(section.gallery.iter().map(String::as_str));
    let subtitle_accent = accent.clone();

    view! {
        <section class="section" id=section.id style=section_style>
            <div class="section-inner">
                <div class="section-header" style=header_style>
                    {match subtitle {
                        Some(subtitle) => view! {
                            <span class="section-subtitle" style=format!("color:{subtitle_accent}")>
                                {subtitle.to_uppercase()}
                            </span>
                        }.into_any(),
                        None => view! { "" }.into_any(),
                    }}
                    <h2 class="section-title" style=title_style>{title}</h2>
                    <p class="section-paragraph" style=paragraph_style>{paragraph}</p>
                    {if title2.is_some() || paragraph2.is_some() {
                        view! {
                            <div class="section-secondary">
                                {title2.map(|t| view! { <h3>{t}</h3> })}
                                {paragraph2.map(|p| view! { <p>{p}</p> })}
                            </div>
                        }.into_any()
                    } else {
                        view! { "" }.into_any()
                    }}
                </div>
                <div class="block-grid" style=format!("grid-template-columns:repeat({GRID_COLUMNS}, 1fr)")>
                    {blocks.into_iter().map(|block| {
                        view! { <BlockView block=block assets=assets.clone() /> }
                    }).collect::<Vec<_>>()}
                </div>
                <GalleryStripView images=gallery accent=accent />
            </div>
        </section>
    }
}

#[component]
fn BlockView(block: LayoutBlock, assets: AssetResolver) -> impl IntoView {
    let (columns, rows) = block.grid_span();
    let style = format!(
        "grid-column:span {columns};grid-row:span {rows};background-color:{};border-radius:{}{}{}",
        css_or(block.bg_color.as_deref(), DEFAULT_BLOCK_BG),
        css_or(block.border_radius.as_deref(), DEFAULT_BLOCK_RADIUS),
        block
            .shadow
            .as_deref()
            .map(|s| format!(";box-shadow:{}", css_or(Some(s), "none")))
            .unwrap_or_default(),
        block
            .blur
            .as_deref()
            .map(|b| format!(";backdrop-filter:blur({})", css_or(Some(b), "0")))
            .unwrap_or_default(),
    );

    let image = block
        .image
        .as_deref()
        .map(|img| assets.resolve(img))
        .filter(|img| !img.is_empty());
    let has_image = image.is_some();
    let alt = block.alt_text.clone().unwrap_or_else(|| block.label.clone());

    let text = block.text_content.clone().filter(|t| !t.trim().is_empty());
    let justify = match block.text_align() {
        Some(TextAlign::Left) => "flex-start",
        Some(TextAlign::Right) => "flex-end",
        _ => "center",
    };
    let text_style = format!(
        "justify-content:{justify};background:{};color:{}",
        if has_image { "rgba(0,0,0,0.3)" } else { "transparent" },
        css_or(block.text_color.as_deref(), "white"),
    );
    let font_style = format!("font-size:{}", css_or(block.font_size.as_deref(), "1rem"));

    view! {
        <div class="block" id=block.id style=style>
            {image.map(|src| view! { <img src=src alt=alt loading="lazy" /> })}
            {text.map(|t| view! {
                <div class="block-text" style=text_style>
                    <span style=font_style>{t}</span>
                </div>
            })}
        </div>
    }
}
