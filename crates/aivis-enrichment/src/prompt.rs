//! Instructions and response schemas sent to the generative service.

use aivis_genai::Schema;

pub(crate) const VISIBILITY_SCORE_FIELD: &str = "visibilityScore";
pub(crate) const MENTIONS_FIELD: &str = "mentions";
pub(crate) const SENTIMENT_FIELD: &str = "sentiment";

pub(crate) fn competitor_prompt(name: &str, url: &str) -> String {
    format!(
        "Analyze the brand \"{name}\" at the URL \"{url}\".\n\
         Estimate its visibility score (an integer 0-100), total mentions in recent AI \
         training datasets/search (an integer), and the overall sentiment (must be one of: \
         \"Positive\", \"Neutral\", \"Negative\").\n\
         Return the results in JSON format."
    )
}

pub(crate) fn competitor_schema() -> Schema {
    Schema::object([
        (VISIBILITY_SCORE_FIELD, Schema::integer()),
        (MENTIONS_FIELD, Schema::integer()),
        (
            SENTIMENT_FIELD,
            Schema::string().with_description("Must be Positive, Neutral, or Negative"),
        ),
    ])
}

pub(crate) fn insights_prompt(brand_name: &str, data: &serde_json::Value) -> String {
    format!(
        "Analyze the following brand visibility data for \"{brand_name}\" and provide 3 key \
         actionable insights in a JSON format with fields \"insight\" and \"priority\" \
         (High/Medium/Low).\n\
         Data: {data}"
    )
}

pub(crate) fn insights_schema() -> Schema {
    Schema::array(Schema::object([
        ("insight", Schema::string()),
        (
            "priority",
            Schema::string().with_description("Must be High, Medium, or Low"),
        ),
    ]))
}
