/// Category buttons shown above the catalog grid, in display order.
pub const DISPLAY_CATEGORIES: [&str; 6] = [
    "ECOLOGICOS",
    "BOTELLAS, MUG Y TAZAS",
    "CUADERNOS, LIBRETAS Y MEMO SET",
    "MOCHILAS, BOLSOS Y MORRALES",
    "BOLÍGRAFOS",
    "ACCESORIOS",
];

/// Each display category matches products whose stored category contains any
/// of these words. Stored categories come from several suppliers and are not
/// normalized.
const CATEGORY_ALIASES: [(&str, &[&str]); 6] = [
    ("ECOLOGICOS", &["ECOLOGICOS", "ECO", "MADERA", "CORCHO"]),
    (
        "BOTELLAS, MUG Y TAZAS",
        &["BOTELLAS", "MUG", "TAZAS", "BOTELLA", "TAZA", "VASO", "TERMO"],
    ),
    (
        "CUADERNOS, LIBRETAS Y MEMO SET",
        &["CUADERNOS", "LIBRETAS", "MEMO", "LIBRETA", "CUADERNO", "NOTAS"],
    ),
    (
        "MOCHILAS, BOLSOS Y MORRALES",
        &[
            "MOCHILAS", "BOLSOS", "MORRALES", "MOCHILA", "BOLSO", "MORRAL", "MALETIN", "CARPETA",
        ],
    ),
    ("BOLÍGRAFOS", &["BOLÍGRAFOS", "BOLIGRAFO", "LAPIZ", "BOLIGRAFOS"]),
    (
        "ACCESORIOS",
        &["ACCESORIOS", "RELOJ", "TECNOLOGIA", "LLAVERO", "HERRAMIENTAS"],
    ),
];

/// Aliases for an uppercased, trimmed category; an unknown category is its
/// own only alias.
pub fn aliases_for(category: &str) -> Vec<String> {
    CATEGORY_ALIASES
        .iter()
        .find(|(name, _)| *name == category)
        .map_or_else(
            || vec![category.to_string()],
            |(_, aliases)| aliases.iter().map(|a| (*a).to_string()).collect(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_display_category_has_aliases() {
        for category in DISPLAY_CATEGORIES {
            let aliases = aliases_for(category);
            assert!(aliases.len() > 1, "{category} should map to several aliases");
        }
    }

    #[test]
    fn unknown_category_aliases_itself() {
        assert_eq!(aliases_for("TEXTIL"), vec!["TEXTIL".to_string()]);
    }
}
