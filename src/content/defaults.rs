use ecomoving_schema::{HeroContent, WebContent};

pub const DEFAULT_TITLE: &str = "ECOMOVING: MERCHANDISING SUSTENTABLE";
pub const DEFAULT_PARAGRAPH: &str = "Elevamos tu marca con conciencia ecológica.";
pub const DEFAULT_CTA_TEXT: &str = "EXPLORAR CATÁLOGO";
pub const DEFAULT_CTA_LINK: &str = "/catalogo";
pub const DEFAULT_BACKGROUND: &str = "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?q=80&w=2013&auto=format&fit=crop";

/// Hero shown until the content table answers, and the base every fetched
/// hero row is merged over.
pub fn default_hero() -> HeroContent {
    HeroContent {
        title1: DEFAULT_TITLE.to_string(),
        paragraph1: DEFAULT_PARAGRAPH.to_string(),
        cta_text: DEFAULT_CTA_TEXT.to_string(),
        cta_link: DEFAULT_CTA_LINK.to_string(),
        background_image: DEFAULT_BACKGROUND.to_string(),
        ..Default::default()
    }
}

pub fn default_content() -> WebContent {
    WebContent {
        hero: default_hero(),
        sections: Vec::new(),
        extras: Vec::new(),
    }
}

pub const CAMPAIGN_TITLE: &str = "ECOMOVING: MERCHANDISING SUSTENTABLE Y DISEÑO PREMIUM";
pub const CAMPAIGN_PARAGRAPH: &str =
    "Elevamos tu marca con productos corporativos de alto impacto y conciencia ecológica.";
pub const CAMPAIGN_CTA_TEXT: &str = "EXPLORAR CATÁLOGO 2026";

/// Hero of the 2026 campaign, written by the `fix-hero` tool.
pub fn campaign_hero() -> HeroContent {
    HeroContent {
        title1: CAMPAIGN_TITLE.to_string(),
        paragraph1: CAMPAIGN_PARAGRAPH.to_string(),
        cta_text: CAMPAIGN_CTA_TEXT.to_string(),
        cta_link: DEFAULT_CTA_LINK.to_string(),
        background_image: DEFAULT_BACKGROUND.to_string(),
        ..Default::default()
    }
}
