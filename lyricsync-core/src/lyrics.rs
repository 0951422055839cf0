//! Reference lyrics parsing.

/// Ordered sequence of non-empty, trimmed reference lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lyrics {
    lines: Vec<String>,
}

impl Lyrics {
    /// Parse reference text into lines.
    ///
    /// Splits on `\n` and `\r`, trims each line and drops blank ones. Never
    /// fails; empty input yields empty lyrics.
    pub fn parse(content: &str) -> Self {
        let lines = content
            .split(['\n', '\r'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Lyrics {
    /// Build lyrics from already separated lines, applying the same cleanup as [`Lyrics::parse`].
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let lines = iter
            .into_iter()
            .map(Into::into)
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        Self { lines }
    }
}

/// Parse reference text into lines. See [`Lyrics::parse`].
pub fn load_lyrics(content: &str) -> Lyrics {
    Lyrics::parse(content)
}
