//! Reply wording

use crate::platform::Platform;
use crate::query::Intent;

pub const OUT_OF_DOMAIN_MESSAGE: &str =
    "Sorry, I can only answer questions related to Segment, mParticle, Lytics, and Zeotap.";

pub const SPECIFY_PLATFORM_MESSAGE: &str =
    "Please specify a platform: Segment, mParticle, Lytics, or Zeotap.";

pub const HOW_TO_ONLY_MESSAGE: &str =
    "I can only help with how-to questions related to Segment, mParticle, Lytics, and Zeotap.";

/// Compose the final reply from the classification and the extracted information
pub fn generate_response(intent: Option<Intent>, platform: Platform, extracted_info: &str) -> String {
    match intent {
        Some(Intent::HowTo) => format!(
            "Here's how to do that in {}:\n\n{extracted_info}",
            platform.display_name()
        ),
        None => HOW_TO_ONLY_MESSAGE.to_string(),
    }
}
