//! Built-in question lists: the generic fallback, the keyword-branch sets and the demo list.

use crate::questions::models::Question;

const BOTTLE_KEYWORDS: &[&str] = &["bottle", "container"];
const APPAREL_KEYWORDS: &[&str] = &["shirt", "apparel", "clothing"];

/// Substituted whenever the LLM cannot produce a usable list.
pub fn fallback_questions() -> Vec<Question> {
    vec![
        Question::text(
            "q_main_materials",
            "What are the main materials used in this product?",
        ),
        Question::text("q_origin", "Where was this product manufactured?"),
        Question::text(
            "q_disposal",
            "How should this product be disposed of or recycled at the end of its life?",
        ),
    ]
}

pub fn bottle_questions() -> Vec<Question> {
    vec![
        Question::text(
            "q_bottle_material",
            "What material is the bottle made of (e.g. PET, glass, aluminium)?",
        ),
        Question::boolean("q_bpa_free", "Is the bottle certified BPA-free?"),
        Question::number(
            "q_recycled_content",
            "What percentage of the bottle is made from recycled material?",
        ),
        Question::boolean(
            "q_refillable",
            "Is the bottle designed to be refilled and reused?",
        ),
    ]
}

pub fn apparel_questions() -> Vec<Question> {
    vec![
        Question::text(
            "q_fabric_composition",
            "What is the fabric composition of this garment (e.g. 100% organic cotton)?",
        ),
        Question::text(
            "q_manufacturing_country",
            "In which country was this garment sewn?",
        ),
        Question::boolean(
            "q_fair_labor_certified",
            "Is the factory certified for fair labor practices?",
        ),
        Question::text(
            "q_dye_process",
            "What dyes or dyeing process were used for this garment?",
        ),
    ]
}

/// Fixed demo list served by the static backend.
pub fn demo_questions() -> Vec<Question> {
    vec![
        Question::text("q1", "What are the main materials used in this product?"),
        Question::boolean("q2", "Is this product recyclable?"),
        Question::text("q3", "Where was this product manufactured?"),
    ]
}

/// Picks the keyword-branch list for a product name. Bottle keywords win over apparel ones.
pub fn questions_for_product_name(product_name: &str) -> Vec<Question> {
    let name = product_name.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

    if mentions(BOTTLE_KEYWORDS) {
        bottle_questions()
    } else if mentions(APPAREL_KEYWORDS) {
        apparel_questions()
    } else {
        fallback_questions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(questions: &[Question]) -> Vec<&str> {
        questions.iter().map(|q| q.id.as_str()).collect()
    }

    #[test]
    fn test_fallback_ids() {
        assert_eq!(
            ids(&fallback_questions()),
            vec!["q_main_materials", "q_origin", "q_disposal"]
        );
    }

    #[test]
    fn test_bottle_keywords() {
        let bottle = bottle_questions();
        assert_eq!(questions_for_product_name("Steel Water BOTTLE"), bottle);
        assert_eq!(questions_for_product_name("Food container"), bottle);
        assert_eq!(bottle.len(), 4);
    }

    #[test]
    fn test_apparel_keywords() {
        let apparel = apparel_questions();
        assert_eq!(questions_for_product_name("Linen Shirt"), apparel);
        assert_eq!(questions_for_product_name("kids clothing set"), apparel);
        assert_eq!(questions_for_product_name("Outdoor apparel"), apparel);
        assert_eq!(apparel.len(), 4);
    }

    #[test]
    fn test_bottle_wins_over_apparel() {
        let questions = questions_for_product_name("Shirt-pocket bottle");
        assert_eq!(questions, bottle_questions());
    }

    #[test]
    fn test_other_names_fall_back() {
        let fallback = fallback_questions();
        assert_eq!(questions_for_product_name("Bamboo toothbrush"), fallback);
        assert_eq!(questions_for_product_name(""), fallback);
    }

    #[test]
    fn test_all_lists_well_formed_with_unique_ids() {
        for list in [
            fallback_questions(),
            bottle_questions(),
            apparel_questions(),
            demo_questions(),
        ] {
            assert!(list.iter().all(Question::is_well_formed));
            let unique: HashSet<_> = list.iter().map(|q| &q.id).collect();
            assert_eq!(unique.len(), list.len());
            for q in &list {
                assert_eq!(
                    q.options.is_some(),
                    q.kind == crate::questions::models::QuestionType::Boolean
                );
            }
        }
    }
}
