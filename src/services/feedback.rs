use crate::models::feedback_models::{FeedbackItem, FeedbackPageProps, FeedbackType};

/// Loads the props for the feedback detail page.
///
/// The requested id is only logged: every id gets the same demo record.
pub async fn load_feedback_props(id: &str) -> FeedbackPageProps {
    tracing::info!(feedback_id = %id, "loading feedback item");
    FeedbackPageProps {
        feedback_item: FeedbackItem {
            id: 1,
            message: "Hey there I'm a demo message".to_string(),
            feedback_type: FeedbackType::Issue,
            email: "mahmoud@prisma.io".to_string(),
            name: "Mahmoud".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1")]
    #[case("999999")]
    #[case("")]
    #[case("-3")]
    #[case("not-a-number")]
    #[tokio::test]
    async fn every_id_loads_the_demo_record(#[case] id: &str) {
        let props = load_feedback_props(id).await;
        assert_eq!(props, load_feedback_props("1").await);
        assert_eq!(props.feedback_item.id, 1);
        assert_eq!(props.feedback_item.message, "Hey there I'm a demo message");
        assert_eq!(props.feedback_item.feedback_type, FeedbackType::Issue);
        assert_eq!(props.feedback_item.name, "Mahmoud");
        assert_eq!(props.feedback_item.email, "mahmoud@prisma.io");
    }
}
