// ABOUTME: Korean guidance sentence catalog for the analysis enricher
// ABOUTME: Templated sentences per guidance field plus the per-field fallback sentences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Guidance sentences.
//!
//! Kept apart from the rules so wording can change without touching
//! thresholds. Numbers are rendered without decimals.

use nutrilens_core::models::{Grade, GuidanceField};

/// Sentence used when a rule block produced nothing for a field
#[must_use]
pub const fn fallback(field: GuidanceField) -> &'static str {
    match field {
        GuidanceField::Pros => "특별히 눈에 띄는 장점은 없지만, 부담 없이 즐기기 좋아요.",
        GuidanceField::Cons => "큰 주의점은 없지만, 양/소스를 조절하면 더 좋아요.",
        GuidanceField::GoalFit => "목표에 맞게 먹는 양을 조절해 보세요.",
        GuidanceField::DietFit => "식단 기준에 맞는지 구성을 한 번 더 확인해 보세요.",
        GuidanceField::HealthImpact => "여러 식품군을 골고루 곁들이면 건강에 더 좋아요.",
        GuidanceField::Reasons => "사진 기반 추정치로 점수를 계산했어요.",
        GuidanceField::Warnings => "알레르기 정보는 사진 기반 추정이에요.",
        GuidanceField::Alternatives => "채소를 곁들이면 더 균형 잡힌 식사가 돼요.",
        GuidanceField::Tips => "밝은 곳에서 음식 전체가 보이게 찍어 주세요.",
    }
}

pub mod pros {
    //! Positive aspects
    /// Protein at or above the high threshold
    #[must_use]
    pub fn protein_rich(protein_g: f64) -> String {
        format!("단백질이 {protein_g:.0}g으로 풍부해요.")
    }
}

pub mod cons {
    //! Negative aspects
    /// Protein present but below the low threshold
    #[must_use]
    pub fn protein_low(protein_g: f64) -> String {
        format!("단백질이 {protein_g:.0}g으로 다소 부족해요.")
    }

    /// Fat at or above the high threshold
    #[must_use]
    pub fn fat_high(fat_g: f64) -> String {
        format!("지방이 {fat_g:.0}g으로 높은 편이에요.")
    }

    /// Carbohydrates at or above the high threshold
    #[must_use]
    pub fn carbs_high(carbs_g: f64) -> String {
        format!("탄수화물이 {carbs_g:.0}g으로 많은 편이에요.")
    }

    /// Sodium above the high threshold
    #[must_use]
    pub fn sodium_high(sodium_mg: f64) -> String {
        format!(
            "나트륨이 {sodium_mg:.0}mg으로 높아요. 국물이나 소스는 줄여 보세요."
        )
    }
}

pub mod goal_fit {
    //! Body goal fit
    /// Weight-loss goal
    #[must_use]
    pub fn diet(name: &str) -> String {
        format!("{name}님의 다이어트 목표에는 양 조절이 가장 중요해요.")
    }

    /// Weight-loss goal with a calorie-heavy meal
    #[must_use]
    pub fn diet_calories_high(calories: f64) -> String {
        format!(
            "열량이 {calories:.0}kcal로 한 끼 기준 높은 편이라, 절반 정도만 드시는 걸 추천해요."
        )
    }

    /// Bulking goal
    #[must_use]
    pub fn bulking(name: &str) -> String {
        format!(
            "{name}님의 벌크업 목표에는 충분한 열량과 단백질이 필요해요."
        )
    }

    /// Bulking goal with too little protein
    #[must_use]
    pub fn bulking_protein_low(protein_g: f64) -> String {
        format!(
            "단백질이 {protein_g:.0}g뿐이라 닭가슴살이나 계란을 곁들이면 좋아요."
        )
    }

    /// Maintenance goal
    #[must_use]
    pub fn maintenance(name: &str) -> String {
        format!(
            "{name}님의 체중 유지 목표에는 평소 식사량에 맞춰 드시면 충분해요."
        )
    }

    /// Any other or missing goal
    #[must_use]
    pub fn general(name: &str) -> String {
        format!("{name}님의 목표에 맞게 양과 구성을 조절해 보세요.")
    }
}

pub mod diet_fit {
    //! Health diet fit
    /// Low-carb diet
    pub const LOW_CARB: &str = "저탄수화물 식단이라면 밥, 면, 빵의 양을 확인해 주세요.";
    /// Low-sodium diet
    pub const LOW_SODIUM: &str = "저염 식단이라면 국물과 소스를 줄이는 것이 좋아요.";
    /// High-protein diet
    pub const HIGH_PROTEIN: &str = "고단백 식단이라면 단백질 반찬을 함께 챙겨 보세요.";
    /// Low-fat diet
    pub const LOW_FAT: &str = "저지방 식단이라면 튀김이나 기름진 재료는 피하는 것이 좋아요.";
    /// Any other or missing diet
    pub const GENERAL: &str = "특별한 식단 제한이 없다면 균형 잡힌 한 끼로 즐기세요.";

    /// Low-carb diet with carbohydrates over the limit
    #[must_use]
    pub fn carbs_over_limit(carbs_g: f64) -> String {
        format!(
            "탄수화물이 {carbs_g:.0}g으로 저탄수 기준을 넘어요. 밥이나 면을 줄여 보세요."
        )
    }

    /// Low-sodium diet with sodium over the limit
    #[must_use]
    pub fn sodium_over_limit(sodium_mg: f64) -> String {
        format!("나트륨이 {sodium_mg:.0}mg으로 저염 기준보다 높아요.")
    }

    /// High-protein diet with protein under target
    #[must_use]
    pub fn protein_under_target(protein_g: f64) -> String {
        format!("단백질이 {protein_g:.0}g으로 고단백 기준에는 못 미쳐요.")
    }

    /// Low-fat diet with fat over the limit
    #[must_use]
    pub fn fat_over_limit(fat_g: f64) -> String {
        format!("지방이 {fat_g:.0}g으로 저지방 기준보다 높아요.")
    }
}

pub mod health_impact {
    //! General health impact
    /// Always-present processed food caveat
    pub const PROCESSED_FOOD: &str =
        "가공식품이나 양념이 많은 음식은 나트륨과 당 함량이 높을 수 있어요.";

    /// Estimated calorie statement
    #[must_use]
    pub fn estimated_calories(calories: f64) -> String {
        format!("이 음식의 추정 열량은 약 {calories:.0}kcal예요.")
    }
}

pub mod warnings {
    //! Allergen warnings
    /// No allergen hits
    pub const PHOTO_ESTIMATE: &str =
        "알레르기 정보는 사진 기반 추정이라 실제 재료와 다를 수 있어요.";

    /// Lists the matched user allergens
    #[must_use]
    pub fn allergen_hits(hits: &[String]) -> String {
        format!(
            "알레르기 주의: {}이(가) 포함되어 있을 수 있어요.",
            hits.join(", ")
        )
    }
}

pub mod alternatives {
    //! Suggested substitutions
    /// Always suggested
    pub const ADD_VEGETABLES: &str = "채소나 식이섬유가 풍부한 반찬을 곁들이면 더 좋아요.";
    /// Low protein
    pub const ADD_PROTEIN: &str = "두부, 계란, 닭가슴살 같은 단백질 반찬을 추가해 보세요.";
    /// High fat
    pub const REDUCE_FAT: &str = "튀김이나 기름진 부분을 줄이고 구이나 찜으로 바꿔 보세요.";
}

pub mod tips {
    //! Photography tips
    /// Framing and lighting
    pub const CENTERED_BRIGHT: &str = "음식이 화면 중앙에 오도록 밝은 곳에서 찍으면 더 정확해요.";
    /// Packaged food label
    pub const NUTRITION_LABEL: &str = "포장 식품이라면 영양성분표가 보이게 함께 찍어 주세요.";
}

pub mod reasons {
    //! Score explanation
    use super::Grade;

    /// Score and grade statement
    #[must_use]
    pub fn score(grade: Grade, score100: u8) -> String {
        format!(
            "100점 만점에 {score100}점, '{}' 등급이에요.",
            grade.label_ko()
        )
    }

    /// Protein at or above the high threshold
    pub const PROTEIN_RICH: &str = "단백질 함량이 높아 점수에 긍정적이에요.";
    /// Protein present but low
    pub const PROTEIN_LOW: &str = "단백질이 적어 포만감이 오래가지 않을 수 있어요.";
    /// High fat
    pub const FAT_HIGH: &str = "지방 함량이 높아 점수에 부담이 됐어요.";
    /// High sodium
    pub const SODIUM_HIGH: &str = "나트륨 함량이 높아 점수에 부담이 됐어요.";
}
