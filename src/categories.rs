//! Fixed topical categories and keyword scoring.
//!
//! The category table is static configuration data: 20 named keyword
//! buckets with a display color each, constructed once and never mutated.

use serde::Serialize;

use crate::count_words;

/// A topical bucket: unique name, keyword list, chart color.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub color: &'static str,
}

/// The fixed category set, in display order.
pub static CATEGORIES: &[Category] = &[
    Category {
        name: "Technik",
        keywords: &["computer", "software", "internet", "ki", "daten", "digital", "technik"],
        color: "#4C72B0",
    },
    Category {
        name: "Wetter",
        keywords: &["wetter", "regen", "sonne", "temperatur", "wind", "wettervorhersage", "klima"],
        color: "#55A868",
    },
    Category {
        name: "Sport",
        keywords: &["sport", "fußball", "olympia", "wettkampf", "athletik", "team", "sportart"],
        color: "#CCB974",
    },
    Category {
        name: "Unterhaltung",
        keywords: &["film", "musik", "kino", "buch", "unterhaltung", "show", "kultur"],
        color: "#64B5CD",
    },
    Category {
        name: "Wissenschaft",
        keywords: &["wissenschaft", "forschung", "physik", "biologie", "chemie", "technologie", "innovation"],
        color: "#D65F5F",
    },
    Category {
        name: "Bildung",
        keywords: &["bildung", "schule", "universität", "studium", "lehrer", "ausbildung", "wissen"],
        color: "#8C564B",
    },
    Category {
        name: "Reisen",
        keywords: &["reisen", "urlaub", "tourismus", "abenteuer", "kulturreise", "entdeckung", "reiseziele"],
        color: "#E377C2",
    },
    Category {
        name: "Familie",
        keywords: &["familie", "kinder", "eltern", "beziehung", "partnerschaft", "erziehung", "familienleben"],
        color: "#7F7F7F",
    },
    Category {
        name: "Kunst",
        keywords: &["kunst", "malerei", "skulptur", "fotografie", "kunstwerk", "künstler", "galerie"],
        color: "#FFBB78",
    },
    Category {
        name: "Essen",
        keywords: &["essen", "kochen", "restaurant", "küche", "lebensmittel", "rezept", "ernährung"],
        color: "#98DF8A",
    },
    Category {
        name: "Mode",
        keywords: &["mode", "kleidung", "stil", "accessoires", "fashion", "designer", "trends"],
        color: "#F7B6D2",
    },
    Category {
        name: "Soziales",
        keywords: &["sozial", "hilfe", "gemeinwohl", "ehrenamt", "gemeinschaft", "solidarität", "sozialearbeit"],
        color: "#C49C94",
    },
    Category {
        name: "Geschichte",
        keywords: &["geschichte", "historisch", "ereignis", "zeitgeschichte", "kulturgeschichte", "archäologie"],
        color: "#DBDB8D",
    },
    Category {
        name: "Rechtsprechung",
        keywords: &["rechtsprechung", "urteil", "gesetzgebung", "jurist", "rechtsfall", "gerichtsurteil"],
        color: "#FF9896",
    },
    Category {
        name: "Migration",
        keywords: &["migration", "flüchtling", "integration", "asyl", "wanderung", "kulturwechsel", "migrationspolitik"],
        color: "#9467BD",
    },
    Category {
        name: "Nachhaltigkeit",
        keywords: &["nachhaltigkeit", "umweltschutz", "ressourcen", "klimaschutz", "erneuerbar", "ökologie", "grün"],
        color: "#E377C2",
    },
    Category {
        name: "Schimpfwort",
        keywords: &["arsch", "scheiße", "dumm", "idiot", "schlampe", "blöd", "mist", "verdammt"],
        color: "#FF6347",
    },
    Category {
        name: "Politik",
        keywords: &["regierung", "wahl", "eu", "gesetz", "partei", "politik", "minister"],
        color: "#DD8452",
    },
    Category {
        name: "Wirtschaft",
        keywords: &["unternehmen", "markt", "preis", "geld", "arbeit", "wirtschaft", "kosten"],
        color: "#55A868",
    },
    Category {
        name: "Gesundheit",
        keywords: &["gesundheit", "krankenhaus", "arzt", "krankheit", "medizin", "pflege"],
        color: "#C44E52",
    },
];

/// Hit count of one category for one token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub name: &'static str,
    pub hits: u32,
}

/// Counts keyword hits per category over a token sequence.
///
/// The result always has one entry per category, in table order,
/// including zero-valued entries; dropping zeros for display is the
/// caller's concern. A keyword listed in several categories counts
/// toward each of them.
pub fn score_categories(words: &[String]) -> Vec<CategoryScore> {
    let frequency = count_words(words);
    CATEGORIES
        .iter()
        .map(|category| CategoryScore {
            name: category.name,
            hits: category
                .keywords
                .iter()
                .map(|keyword| frequency.get(*keyword).copied().unwrap_or(0))
                .sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn category_names_are_unique() {
        let mut names: Vec<_> = CATEGORIES.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATEGORIES.len());
    }

    #[test]
    fn scores_cover_every_category_including_zeros() {
        let scores = score_categories(&words(&["wetter", "wetter", "regen"]));
        assert_eq!(scores.len(), CATEGORIES.len());
        let wetter = scores.iter().find(|s| s.name == "Wetter").unwrap();
        assert_eq!(wetter.hits, 3);
        let kunst = scores.iter().find(|s| s.name == "Kunst").unwrap();
        assert_eq!(kunst.hits, 0);
    }

    #[test]
    fn empty_sequence_scores_all_zero() {
        let scores = score_categories(&[]);
        assert_eq!(scores.len(), CATEGORIES.len());
        assert!(scores.iter().all(|s| s.hits == 0));
    }
}
