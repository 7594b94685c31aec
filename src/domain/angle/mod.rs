//! Camera-angle axes and the phrase tables prompts are assembled from.

mod axis;
mod phrase;

pub use axis::Axis;
pub use phrase::{PROMPT_TRIGGER, default_phrase, format_prompt, phrase_for};
