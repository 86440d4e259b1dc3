// ABOUTME: Fuzzy allergen matching between user-declared allergens and a food analysis
// ABOUTME: Normalization, synonym group classification, needle expansion, and hit detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! # Allergen Matcher
//!
//! Decides which of a user's declared allergens plausibly appear in a dish.
//! Domain text mixes Korean and English and there is no tokenizer to lean on,
//! so matching is deliberately loose:
//!
//! 1. The user's term is classified into synonym groups (dairy, egg, ...)
//!    by per-group keyword patterns.
//! 2. The term plus every synonym of every matched group become "needles".
//! 3. A term is a hit when any normalized source token (dish name,
//!    ingredients, declared allergens, detection labels) contains a needle,
//!    or a needle contains the token.
//!
//! Matching is substring based. It can over-match (a longer unrelated word
//! containing a needle) and under-match (synonym lists are hand curated, no
//! morphological analysis).
//!
//! ```rust
//! use nutrilens_core::models::FoodAnalysis;
//! use nutrilens_intelligence::allergen::compute_hits;
//!
//! let analysis = FoodAnalysis::named("계란찜");
//! assert_eq!(compute_hits(&["난류(계란)"], &analysis), vec!["난류(계란)"]);
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

use nutrilens_core::constants::allergen::{CATALOG, MIN_NEEDLE_CHARS, STRIP_CHARS};
use nutrilens_core::models::FoodAnalysis;

/// Semantic allergen cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllergenGroup {
    /// Milk and dairy products
    Dairy,
    /// Eggs
    Egg,
    /// Soybeans
    Soy,
    /// Wheat and gluten
    Wheat,
    /// Peanuts
    Peanut,
    /// Tree nuts
    TreeNut,
    /// Shrimp and prawns
    Shrimp,
    /// Crab
    Crab,
    /// Molluscs and bivalves
    Shellfish,
    /// Fish
    Fish,
    /// Sesame
    Sesame,
}

impl AllergenGroup {
    /// Every group in classification order
    pub const ALL: [Self; 11] = [
        Self::Dairy,
        Self::Egg,
        Self::Soy,
        Self::Wheat,
        Self::Peanut,
        Self::TreeNut,
        Self::Shrimp,
        Self::Crab,
        Self::Shellfish,
        Self::Fish,
        Self::Sesame,
    ];

    /// Stable key of the group
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dairy => "dairy",
            Self::Egg => "egg",
            Self::Soy => "soy",
            Self::Wheat => "wheat",
            Self::Peanut => "peanut",
            Self::TreeNut => "tree_nut",
            Self::Shrimp => "shrimp",
            Self::Crab => "crab",
            Self::Shellfish => "shellfish",
            Self::Fish => "fish",
            Self::Sesame => "sesame",
        }
    }

    /// Keyword patterns that classify a normalized term into this group
    ///
    /// Patterns run against normalized text (lowercase, no whitespace or
    /// punctuation), so multi-word English keywords are written without spaces.
    const fn patterns(self) -> &'static [&'static str] {
        match self {
            Self::Dairy => &[
                "우유",
                "유제품",
                "유청",
                "치즈",
                "요거트",
                "요구르트",
                "(?:^|[^콩])버터",
                "분유",
                "연유",
                "카제인",
                "유당",
                "milk",
                "dairy",
                "cheese",
                "yogh?urt",
                "whey",
                "casein",
                "lactose",
            ],
            Self::Egg => &[
                "난류",
                "계란",
                "달걀",
                "에그",
                "난백",
                "난황",
                "메추리알",
                "egg",
            ],
            Self::Soy => &[
                "대두",
                "(?:^|[^땅])콩",
                "두부",
                "두유",
                "된장",
                "간장",
                "청국장",
                "낫또",
                "soy",
                "tofu",
                "edamame",
                "miso",
            ],
            Self::Wheat => &[
                "^밀$",
                "밀가루",
                "소맥",
                "글루텐",
                "통밀",
                "wheat",
                "gluten",
                "flour",
            ],
            Self::Peanut => &["땅콩", "피넛", "peanut", "groundnut"],
            Self::TreeNut => &[
                "견과",
                "호두",
                "아몬드",
                "캐슈",
                "피스타치오",
                "^잣$",
                "헤이즐넛",
                "마카다미아",
                "피칸",
                "treenut",
                "walnut",
                "almond",
                "cashew",
                "pistachio",
                "pinenut",
                "hazelnut",
                "macadamia",
                "pecan",
            ],
            Self::Shrimp => &[
                "새우",
                "대하",
                "크릴",
                "갑각류",
                "해산물",
                "shrimp",
                "prawn",
                "crustacean",
                "seafood",
            ],
            Self::Crab => &[
                "^게$",
                "꽃게",
                "대게",
                "게살",
                "킹크랩",
                "갑각류",
                "해산물",
                "crab",
                "crustacean",
                "seafood",
            ],
            Self::Shellfish => &[
                "조개",
                "패류",
                "^굴$",
                "굴(?:전|국|밥|소스)",
                "전복",
                "홍합",
                "바지락",
                "가리비",
                "꼬막",
                "관자",
                "해산물",
                "shellfish",
                "clam",
                "oyster",
                "mussel",
                "scallop",
                "abalone",
                "seafood",
            ],
            Self::Fish => &[
                "생선",
                "어류",
                "고등어",
                "연어",
                "참치",
                "멸치",
                "대구",
                "명태",
                "갈치",
                "꽁치",
                "삼치",
                "광어",
                "해산물",
                "fish",
                "salmon",
                "tuna",
                "mackerel",
                "anchovy",
                "seafood",
            ],
            Self::Sesame => &[
                "참깨",
                "들깨",
                "^깨$",
                "참기름",
                "들기름",
                "깨소금",
                "타히니",
                "sesame",
                "tahini",
            ],
        }
    }

    /// Synonyms that become needles when a term falls into this group
    #[must_use]
    pub const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Dairy => &[
                "우유",
                "유제품",
                "유청",
                "치즈",
                "요거트",
                "요구르트",
                "버터",
                "분유",
                "연유",
                "카제인",
                "유당",
                "milk",
                "dairy",
                "cheese",
                "yogurt",
                "butter",
                "whey",
                "casein",
                "lactose",
            ],
            Self::Egg => &[
                "난류",
                "계란",
                "달걀",
                "에그",
                "난백",
                "난황",
                "메추리알",
                "마요네즈",
                "egg",
                "mayonnaise",
            ],
            Self::Soy => &[
                "대두",
                "콩",
                "두부",
                "두유",
                "된장",
                "간장",
                "청국장",
                "낫또",
                "soy",
                "soybean",
                "tofu",
                "edamame",
                "miso",
            ],
            Self::Wheat => &[
                "밀",
                "밀가루",
                "소맥",
                "글루텐",
                "통밀",
                "부침가루",
                "튀김가루",
                "국수",
                "라면",
                "wheat",
                "flour",
                "gluten",
            ],
            Self::Peanut => &["땅콩", "피넛", "땅콩버터", "peanut"],
            Self::TreeNut => &[
                "견과",
                "견과류",
                "호두",
                "아몬드",
                "캐슈넛",
                "피스타치오",
                "잣",
                "헤이즐넛",
                "마카다미아",
                "피칸",
                "tree nut",
                "walnut",
                "almond",
                "cashew",
                "pistachio",
                "pine nut",
                "hazelnut",
                "macadamia",
                "pecan",
            ],
            Self::Shrimp => &["새우", "대하", "크릴", "shrimp", "prawn"],
            Self::Crab => &["게", "꽃게", "대게", "게살", "킹크랩", "crab"],
            Self::Shellfish => &[
                "조개",
                "조개류",
                "패류",
                "굴",
                "전복",
                "홍합",
                "바지락",
                "가리비",
                "꼬막",
                "관자",
                "shellfish",
                "clam",
                "oyster",
                "mussel",
                "scallop",
                "abalone",
            ],
            Self::Fish => &[
                "생선",
                "어류",
                "고등어",
                "연어",
                "참치",
                "멸치",
                "대구",
                "명태",
                "갈치",
                "꽁치",
                "삼치",
                "광어",
                "fish",
                "salmon",
                "tuna",
                "mackerel",
                "anchovy",
            ],
            Self::Sesame => &[
                "참깨",
                "깨",
                "들깨",
                "참기름",
                "들기름",
                "깨소금",
                "타히니",
                "sesame",
                "tahini",
            ],
        }
    }

    /// Korean display label
    #[must_use]
    pub const fn label_ko(self) -> &'static str {
        match self {
            Self::Dairy => "유제품",
            Self::Egg => "난류",
            Self::Soy => "대두",
            Self::Wheat => "밀",
            Self::Peanut => "땅콩",
            Self::TreeNut => "견과류",
            Self::Shrimp => "새우",
            Self::Crab => "게",
            Self::Shellfish => "조개류",
            Self::Fish => "생선",
            Self::Sesame => "참깨",
        }
    }
}

impl fmt::Display for AllergenGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Compiled classification pattern per group, built once
static GROUP_PATTERNS: LazyLock<Vec<(AllergenGroup, Regex)>> = LazyLock::new(|| {
    AllergenGroup::ALL
        .into_iter()
        .filter_map(|group| {
            let pattern = format!("(?i)(?:{})", group.patterns().join("|"));
            // Patterns are static; a compile failure only drops that group
            Regex::new(&pattern).ok().map(|re| (group, re))
        })
        .collect()
});

/// Lowercase and strip whitespace plus the fixed punctuation set
///
/// Applied to both sides of every comparison so spacing and punctuation
/// differences never cause a miss.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && !STRIP_CHARS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Classify a free-text allergen term into zero or more synonym groups
#[must_use]
pub fn synonym_groups_for(term: &str) -> BTreeSet<AllergenGroup> {
    let normalized = normalize(term);
    if normalized.is_empty() {
        return BTreeSet::new();
    }
    GROUP_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(&normalized))
        .map(|(group, _)| *group)
        .collect()
}

/// Expand a term into the normalized needles used for substring matching
///
/// The normalized term comes first, followed by every synonym of every
/// matched group. Duplicates and needles shorter than two characters are
/// dropped.
#[must_use]
pub fn expand_to_needles(term: &str) -> Vec<String> {
    let groups = synonym_groups_for(term);
    let candidates = std::iter::once(normalize(term)).chain(
        groups
            .iter()
            .flat_map(|group| group.synonyms().iter().map(|s| normalize(s))),
    );

    let mut needles: Vec<String> = Vec::new();
    for candidate in candidates {
        if candidate.chars().count() >= MIN_NEEDLE_CHARS && !needles.contains(&candidate) {
            needles.push(candidate);
        }
    }
    needles
}

/// Collect every piece of text in the analysis that may name an allergen
///
/// Dish name, ingredients, backend-declared allergens and detection labels,
/// trimmed, blanks removed.
#[must_use]
pub fn extract_source_tokens(analysis: &FoodAnalysis) -> Vec<String> {
    analysis
        .dish_name
        .iter()
        .chain(&analysis.ingredients)
        .chain(&analysis.allergens)
        .chain(analysis.detections.iter().map(|d| &d.label))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Return the user allergens that plausibly occur in the analysis
///
/// Hits are the user's original terms, in input order, each at most once.
/// An empty user list returns immediately with no hits.
#[must_use]
pub fn compute_hits<S: AsRef<str>>(user_allergens: &[S], analysis: &FoodAnalysis) -> Vec<String> {
    if user_allergens.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<String> = extract_source_tokens(analysis)
        .iter()
        .map(|token| normalize(token))
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<String> = Vec::new();
    for term in user_allergens.iter().map(AsRef::<str>::as_ref) {
        if hits.iter().any(|hit| hit == term) {
            continue;
        }
        let needles = expand_to_needles(term);
        let found = tokens.iter().any(|token| {
            needles
                .iter()
                .any(|needle| token.contains(needle.as_str()) || needle.contains(token.as_str()))
        });
        if found {
            hits.push(term.to_owned());
        }
    }

    debug!(
        user_allergens = user_allergens.len(),
        tokens = tokens.len(),
        hits = hits.len(),
        "Computed allergen hits"
    );
    hits
}

/// One entry of the allergen picker catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Korean label, stored verbatim on the profile when picked
    pub label: &'static str,
    /// English label
    pub label_en: &'static str,
    /// Synonym groups the label classifies into
    pub groups: BTreeSet<AllergenGroup>,
    /// Korean names of `groups`, in the same order
    pub group_labels: Vec<&'static str>,
}

/// The picker catalog with each label's synonym groups resolved
#[must_use]
pub fn catalog() -> Vec<CatalogEntry> {
    CATALOG
        .iter()
        .map(|&(label, label_en)| {
            let groups = synonym_groups_for(label);
            let group_labels = groups
                .iter()
                .copied()
                .map(AllergenGroup::label_ko)
                .collect();
            CatalogEntry {
                label,
                label_en,
                groups,
                group_labels,
            }
        })
        .collect()
}
