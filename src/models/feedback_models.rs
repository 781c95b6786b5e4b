use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackType {
    Issue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    pub id: i64,
    pub message: String,
    pub feedback_type: FeedbackType,
    pub email: String,
    pub name: String,
}

/// Props handed to the feedback detail page, also embedded as JSON in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPageProps {
    pub feedback_item: FeedbackItem,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn props_serialize_with_page_keys() {
        let props = FeedbackPageProps {
            feedback_item: FeedbackItem {
                id: 1,
                message: "hello".to_string(),
                feedback_type: FeedbackType::Issue,
                email: "someone@example.com".to_string(),
                name: "Someone".to_string(),
            },
        };

        let value = serde_json::to_value(&props).unwrap();
        assert_eq!(
            value,
            json!({
                "feedbackItem": {
                    "id": 1,
                    "message": "hello",
                    "feedbackType": "ISSUE",
                    "email": "someone@example.com",
                    "name": "Someone"
                }
            })
        );
    }
}
