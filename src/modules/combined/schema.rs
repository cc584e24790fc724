use serde::Serialize;

use crate::modules::text::schema::TextResponse;
use crate::modules::youtube::schema::Recommendation;

#[derive(Debug, Serialize)]
pub struct CombinedResponse {
    pub text_response: TextResponse,
    pub youtube_recommendations: Vec<Recommendation>,
}
