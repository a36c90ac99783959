use std::fmt;

use scraper::Html;

/// HTML markup stored by rich text attributes.
///
/// The markup is rendered verbatim, so it has to be safe before it is stored:
/// use [`RichText::sanitized`] for untrusted input and [`RichText::trusted`]
/// only for markup that was cleaned upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(String);

impl RichText {
    pub fn trusted<T: Into<String>>(markup: T) -> Self {
        RichText(markup.into())
    }

    /// Cleans `markup` with ammonia's default allow-list
    pub fn sanitized(markup: &str) -> Self {
        RichText(ammonia::clean(markup))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The text content, with every tag removed.
    ///
    /// Character references are decoded, so `&amp;` comes back as `&`.
    pub fn plain_text(&self) -> String {
        let fragment = Html::parse_fragment(&self.0);
        fragment.root_element().text().collect()
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_strips_tags() {
        let markup = RichText::trusted("<p>Hard <b>cover</b>, <i>295</i> pages</p>");
        assert_eq!(markup.plain_text(), "Hard cover, 295 pages");
    }

    #[test]
    fn plain_text_keeps_text_without_tags() {
        assert_eq!(RichText::trusted("no markup here").plain_text(), "no markup here");
    }

    #[test]
    fn plain_text_decodes_entities() {
        let markup = RichText::trusted("<p>Fish &amp; Chips &lt;3</p>");
        assert_eq!(markup.plain_text(), "Fish & Chips <3");
    }

    #[test]
    fn sanitized_drops_scripts() {
        let markup = RichText::sanitized("<p>Nice</p><script>alert(1)</script>");
        assert_eq!(markup.as_str(), "<p>Nice</p>");
    }

    #[test]
    fn trusted_is_kept_as_is() {
        let raw = "<p onclick=\"x()\">Hi</p>";
        assert_eq!(RichText::trusted(raw).as_str(), raw);
    }
}
