use std::collections::HashSet;

/// Declaration names already handed out during one generation run.
///
/// A registry lives exactly as long as the run that created it; it is never
/// shared between documents.
#[derive(Debug, Default)]
pub struct NameRegistry {
  used: HashSet<String>,
}

impl NameRegistry {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.used.contains(name)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.used.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.used.is_empty()
  }

  /// Registers `candidate`, or the first of `candidate1`, `candidate2`, ...
  /// that is still free, and returns the registered name.
  pub fn claim(&mut self, candidate: &str) -> String {
    let mut name = candidate.to_string();
    let mut counter = 1_usize;
    while self.contains(&name) {
      name = format!("{candidate}{counter}");
      counter += 1;
    }
    self.used.insert(name.clone());
    name
  }
}
