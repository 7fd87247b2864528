//! Share message for a finished game.
//!
//! The surrounding app hands this string to its share widget. Rendering and
//! transport are handled there.

use crate::core::board::Score;

/// Format the share message: `"I scored {score} in 2048! {url}"`.
///
/// ```
/// use mini_2048::share::share_message;
///
/// assert_eq!(
///     share_message(36, "https://example.com"),
///     "I scored 36 in 2048! https://example.com"
/// );
/// ```
#[must_use]
pub fn share_message(score: Score, url: &str) -> String {
    format!("I scored {} in 2048! {}", score, url)
}
