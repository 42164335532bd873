use leptos::prelude::*;

use crate::gallery::GalleryStrip;

/// Portfolio strip under a section. Nothing is rendered for an empty list.
#[component]
pub fn GalleryStripView(images: Vec<String>, #[prop(into)] accent: String) -> impl IntoView {
    let Some(strip) = GalleryStrip::new(&images) else {
        return view! { "" }.into_any();
    };

    let looping = strip.looping;
    let window_class = if looping { "gallery-window looping" } else { "gallery-window" };
    let track_class = if looping { "gallery-track looping" } else { "gallery-track" };
    let track_style = if looping {
        format!(
            "animation-name:gallery-scroll-{width};animation-duration:{secs}s",
            width = strip.loop_width_px(),
            secs = strip.loop_duration_secs(),
        )
    } else {
        String::new()
    };
    let keyframes = if looping {
        format!(
            "@keyframes gallery-scroll-{width} {{ from {{ transform: translateX(0); }} to {{ transform: translateX(-{width}px); }} }}",
            width = strip.loop_width_px(),
        )
    } else {
        String::new()
    };

    view! {
        <div class="gallery">
            <style inner_html=keyframes></style>
            <div class="gallery-header">
                <div>
                    <h4 style=format!("color:{accent}")>"TRABAJOS REALIZADOS"</h4>
                    <p style=format!("color:{accent}99")>"PORTFOLIO EN MOVIMIENTO"</p>
                </div>
                {if looping {
                    view! { <div class="gallery-infinity">"∞"</div> }.into_any()
                } else {
                    view! { "" }.into_any()
                }}
            </div>
            <div class=window_class>
                {if looping {
                    view! { <div class="gallery-fade"></div> }.into_any()
                } else {
                    view! { "" }.into_any()
                }}
                <div class=track_class style=track_style>
                    {strip.images.into_iter().map(|src| {
                        view! {
                            <a class="gallery-tile" href=src.clone() target="_blank" rel="noopener">
                                <img src=src.clone() alt="Trabajo realizado" loading="lazy" />
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
    .into_any()
}
