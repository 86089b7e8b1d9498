//! Image interpretation: diagram explanation and draw-and-find.

use super::generate_text;
use crate::encoding::EncodedPayload;
use crate::prompts::{DIAGRAM_PROMPT, DRAW_AND_FIND_PROMPT, IMAGE_FALLBACK};
use artdoc_abstraction::{ContentPart, ModelGateway};

/// Asks the model about `image` with a free-form `prompt`. Prompt first, then image.
pub async fn generate_text_from_image(
    gateway: &dyn ModelGateway,
    model: &str,
    prompt: &str,
    image: &EncodedPayload,
) -> String {
    let parts = [ContentPart::text(prompt), ContentPart::from(image)];

    generate_text(gateway, model, "image", &parts)
        .await
        .unwrap_or_else(|_| IMAGE_FALLBACK.to_string())
}

/// Explains the components and flow of a diagram.
pub async fn interpret_diagram(
    gateway: &dyn ModelGateway,
    model: &str,
    image: &EncodedPayload,
) -> String {
    generate_text_from_image(gateway, model, DIAGRAM_PROMPT, image).await
}

/// Summarizes the region a user marked in red on a document image.
pub async fn find_marked_region(
    gateway: &dyn ModelGateway,
    model: &str,
    image: &EncodedPayload,
) -> String {
    generate_text_from_image(gateway, model, DRAW_AND_FIND_PROMPT, image).await
}
