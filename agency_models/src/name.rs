/// A submitter's name, split for personalised communication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    full: String,
    first: String,
    last: String,
}

impl PersonName {
    /// Greeting used when no name could be derived.
    pub const FALLBACK_GREETING: &'static str = "there";

    /// Split a name on whitespace into the first token and the remaining
    /// tokens.
    pub fn new(name: &str) -> Self {
        let full = name.trim();
        let mut tokens = full.split_whitespace();
        let first = tokens.next().unwrap_or_default().to_owned();
        let last = tokens.collect::<Vec<_>>().join(" ");

        Self {
            full: full.to_owned(),
            first,
            last,
        }
    }

    pub fn full(&self) -> &str {
        &self.full
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    /// The first name, or `None` if the name is blank.
    pub fn first_name(&self) -> Option<&str> {
        Some(self.first.as_str()).filter(|x| !x.is_empty())
    }

    /// The last name, or `None` if only a single name was given.
    pub fn last_name(&self) -> Option<&str> {
        Some(self.last.as_str()).filter(|x| !x.is_empty())
    }

    pub fn greeting(&self) -> &str {
        [self.first.as_str(), self.full.as_str()]
            .into_iter()
            .find(|x| !x.is_empty())
            .unwrap_or(Self::FALLBACK_GREETING)
    }
}
