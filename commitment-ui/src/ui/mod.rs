// Pure render functions. Each one:
// 1. Reads a view-model or state (immutable)
// 2. Draws it
// 3. Returns the user's intents for the manager to act on
// No render function talks to the submitter directly.

pub mod complete;
pub mod review;

pub use review::{render_review_step, ReviewIntent};
