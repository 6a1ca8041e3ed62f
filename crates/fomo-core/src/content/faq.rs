use serde::{Deserialize, Serialize};

use super::{require, CollectionResource, ContentValidationError, ReorderEndpoint, Validate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaqPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for FaqDraft {
    fn validate(&self) -> Result<(), ContentValidationError> {
        require("question", &self.question)?;
        require("answer", &self.answer)
    }
}

impl CollectionResource for FaqItem {
    type Draft = FaqDraft;
    type Patch = FaqPatch;

    const NAME: &'static str = "faq";
    const PATH: &'static str = "/faq";
    const REORDER: ReorderEndpoint = ReorderEndpoint::Unsupported;

    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> i64 {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_question_and_answer() {
        let draft = FaqDraft {
            question: "What is FOMO?".into(),
            answer: " ".into(),
            order: 0,
        };
        assert_eq!(
            draft.validate(),
            Err(ContentValidationError::MissingField { field: "answer" })
        );
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let json = serde_json::to_value(FaqPatch::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
