/// Lines of a doc comment attached to a declaration or field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
  lines: Vec<String>,
}

impl Documentation {
  /// Splits raw description text into lines. Text is kept verbatim, so a
  /// literal backslash followed by `n` stays on its line.
  #[must_use]
  pub fn from_raw(input: &str) -> Self {
    Self {
      lines: input.lines().map(String::from).collect(),
    }
  }

  #[must_use]
  pub fn from_optional(desc: Option<&str>) -> Self {
    desc.map_or_else(Self::default, Self::from_raw)
  }

  #[must_use]
  pub fn from_lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self {
      lines: lines.into_iter().map(Into::into).collect(),
    }
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  #[must_use]
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  pub fn push(&mut self, line: impl Into<String>) {
    self.lines.push(line.into());
  }
}
