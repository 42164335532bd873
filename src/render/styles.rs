//! Site stylesheet and the palette defaults used by inline section styles.

pub const DEFAULT_SECTION_BG: &str = "#050505";
pub const ACCENT: &str = "#00d4bd";
pub const DEFAULT_PARAGRAPH_COLOR: &str = "#888";
pub const DEFAULT_TITLE_COLOR: &str = "white";
pub const DEFAULT_TITLE_SIZE: &str = "4.5rem";
pub const DEFAULT_DESC_SIZE: &str = "1.1rem";
pub const DEFAULT_BLOCK_BG: &str = "rgba(255,255,255,0.03)";
pub const DEFAULT_BLOCK_RADIUS: &str = "24px";
pub const GRID_COLUMNS: u32 = 24;

/// Values from the content table end up inside `style` attributes; anything
/// that could close the declaration is dropped.
pub fn css_value(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\\'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// `raw` if it survives [`css_value`] non-empty, else `fallback`.
pub fn css_or(raw: Option<&str>, fallback: &str) -> String {
    raw.map(css_value)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// A `url(...)` value safe to embed in an inline style.
pub fn css_url(raw: &str) -> String {
    let escaped: String = raw
        .trim()
        .chars()
        .map(|c| match c {
            '\'' => "%27".to_string(),
            '"' => "%22".to_string(),
            '(' => "%28".to_string(),
            ')' => "%29".to_string(),
            '\\' => "%5C".to_string(),
            c if c.is_whitespace() => "%20".to_string(),
            c => c.to_string(),
        })
        .collect();
    format!("url('{escaped}')")
}

pub const SITE_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
html, body { margin: 0; padding: 0; background: #050505; color: white; }
body { font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif; -webkit-font-smoothing: antialiased; }
a { color: inherit; }
img { display: block; max-width: 100%; }

.hero { height: 100vh; position: relative; display: flex; align-items: center; justify-content: center; overflow: hidden; }
.hero-backdrop { position: absolute; inset: 0; z-index: 0; }
.hero-slide { position: absolute; inset: 0; background-size: cover; background-position: center; opacity: 0.4; }
.hero-slide.rotating { opacity: 0; animation-fill-mode: backwards; animation-timing-function: ease-in-out; animation-iteration-count: infinite; }
.hero-shade { position: absolute; inset: 0; background: linear-gradient(to bottom, transparent, #050505); }
.hero-copy { position: relative; z-index: 2; text-align: center; padding: 0 20px; max-width: 1000px; }
.hero-copy h1 { font-size: 5rem; font-weight: 900; margin: 0 0 20px; line-height: 1; }
.hero-copy p { font-size: 1.4rem; color: #aaa; margin: 0 0 40px; }
.cta { display: inline-block; padding: 20px 50px; background: #00d4bd; color: #000; font-weight: 900; border-radius: 50px; text-decoration: none; letter-spacing: 2px; }

.section { padding: 120px 20px; overflow: hidden; }
.section-inner { max-width: 1400px; margin: 0 auto; }
.section-header { margin-bottom: 80px; }
.section-subtitle { font-size: 11px; font-weight: 900; letter-spacing: 5px; display: block; margin-bottom: 20px; }
.section-title { margin: 0 0 30px; line-height: 1.1; }
.section-paragraph { max-width: 800px; line-height: 1.8; }
.section-secondary { margin-top: 20px; opacity: 0.8; }
.section-secondary h3 { font-size: 1.5rem; margin: 0 0 10px; }
.section-secondary p { font-size: 1rem; color: #666; }
.block-grid { display: grid; grid-auto-rows: minmax(75px, auto); gap: 15px; }
.block { overflow: hidden; position: relative; display: flex; align-items: center; justify-content: center; }
.block img { width: 100%; height: 100%; object-fit: cover; }
.block-text { position: absolute; inset: 0; padding: 20px; display: flex; align-items: center; }
.block-text span { font-weight: 600; }

.gallery { margin-top: 80px; position: relative; width: 100%; padding-bottom: 40px; }
.gallery-header { padding: 0 20px; margin-bottom: 30px; display: flex; justify-content: space-between; align-items: flex-end; }
.gallery-header h4 { font-size: 10px; font-weight: 900; letter-spacing: 5px; text-transform: uppercase; margin: 0; }
.gallery-header p { font-size: 11px; margin: 5px 0 0; font-weight: 600; letter-spacing: 2px; }
.gallery-infinity { color: rgba(255,255,255,0.1); font-size: 3rem; font-weight: 900; line-height: 0.8; }
.gallery-window { position: relative; overflow: hidden; padding: 20px 0; width: 100%; }
.gallery-window.looping { width: 100vw; left: 50%; margin-left: -50vw; }
.gallery-fade { position: absolute; inset: 0; z-index: 10; pointer-events: none; background: linear-gradient(to right, #050505 0%, transparent 15%, transparent 85%, #050505 100%); }
.gallery-track { display: flex; gap: 20px; width: 100%; justify-content: center; flex-wrap: wrap; }
.gallery-track.looping { width: max-content; justify-content: flex-start; flex-wrap: nowrap; animation-timing-function: linear; animation-iteration-count: infinite; }
.gallery-tile { display: block; cursor: zoom-in; width: 350px; height: 450px; border-radius: 24px; overflow: hidden; flex-shrink: 0; }
.gallery-tile img { width: 100%; height: 100%; object-fit: cover; }

.catalog { min-height: 100vh; padding: 100px 20px; }
.catalog-inner { max-width: 1200px; margin: 0 auto; }
.back-link { display: inline-flex; align-items: center; gap: 10px; color: #00d4bd; text-decoration: none; margin-bottom: 40px; font-weight: 700; }
.catalog h1 { font-size: 4rem; font-weight: 900; margin: 0 0 20px; }
.catalog h1 span { color: #00d4bd; }
.category-bar { display: flex; flex-wrap: wrap; gap: 10px; margin: 40px 0 20px; }
.category-bar a { padding: 10px 18px; border: 1px solid rgba(255,255,255,0.08); border-radius: 30px; color: #aaa; font-size: 12px; font-weight: 700; text-decoration: none; }
.category-bar a.active { color: #00d4bd; border-color: #00d4bd; }
.category-bar a.premium.active { color: #d4af37; border-color: #d4af37; background: rgba(212,175,55,0.1); }
.search-form { display: flex; gap: 10px; margin-bottom: 40px; }
.search-form input { flex: 1; padding: 14px 18px; border-radius: 30px; border: 1px solid #222; background: #0b0b0b; color: white; }
.search-form button, .lead-submit { padding: 14px 28px; border-radius: 30px; border: none; background: #00d4bd; color: #000; font-weight: 900; cursor: pointer; }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 30px; }
.product-card { background: #111; border: 1px solid #222; border-radius: 24px; overflow: hidden; text-decoration: none; display: flex; flex-direction: column; }
.product-card img { width: 100%; height: 260px; object-fit: cover; background: #0b0b0b; }
.product-card .body { padding: 20px; }
.product-card h3 { margin: 0 0 8px; font-size: 1.1rem; }
.product-card p { margin: 0; color: #888; font-size: 0.9rem; }
.badge { display: inline-block; font-size: 10px; letter-spacing: 3px; font-weight: 900; color: #00d4bd; margin-bottom: 10px; }
.badge.premium { color: #d4af37; }
.empty { color: #666; padding: 60px 0; text-align: center; }

.product-detail { display: grid; grid-template-columns: 1fr 1fr; gap: 60px; }
.product-detail .main-image { width: 100%; border-radius: 24px; object-fit: cover; }
.thumbs { display: flex; gap: 10px; margin-top: 16px; flex-wrap: wrap; }
.thumbs img { width: 80px; height: 80px; object-fit: cover; border-radius: 12px; }
.features { list-style: none; padding: 0; }
.features li { padding: 10px 0; border-bottom: 1px solid #1a1a1a; color: #ccc; }
.features li.features-empty { color: #666; font-style: italic; }
.related { margin-top: 60px; border-top: 1px solid #1a1a1a; padding-top: 30px; }
.related h4 { color: #00d4bd; letter-spacing: 3px; text-transform: uppercase; }
.related-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 20px; }
.related-card { display: flex; flex-direction: column; gap: 10px; color: #ccc; text-decoration: none; }
.related-card img { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 16px; background: #111; }

.lead { margin: 80px 0 0; padding: 40px; border: 1px solid #1a1a1a; border-radius: 24px; background: #0b0b0b; }
.lead-title { font-size: 1.4rem; font-weight: 900; letter-spacing: 2px; margin: 0 0 20px; }
.lead-form .input-group { display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin-bottom: 16px; }
.lead-input { padding: 14px 18px; border-radius: 14px; border: 1px solid #222; background: #050505; color: white; }
.lead-footer-trend { margin-top: 20px; font-size: 10px; letter-spacing: 3px; color: #444; }
.lead-success { color: #00d4bd; font-weight: 900; letter-spacing: 2px; }

footer { padding: 80px 20px; text-align: center; border-top: 1px solid #111; }
footer p { color: #444; font-size: 11px; letter-spacing: 4px; }

@media (max-width: 900px) {
  .hero-copy h1 { font-size: 3rem; }
  .product-detail { grid-template-columns: 1fr; }
  .lead-form .input-group { grid-template-columns: 1fr; }
  .block-grid { grid-template-columns: repeat(6, 1fr) !important; }
  .block { grid-column: span 6 !important; }
}
"#;
