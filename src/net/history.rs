use url::Url;

/// One completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// URL the request was sent to
    pub requested: Url,
    /// URL the response was served from (differs when redirects were followed)
    pub final_url: Url,
    pub status: u16,
}

impl HistoryEntry {
    pub fn was_redirected(&self) -> bool {
        self.requested != self.final_url
    }
}

/// Requests made by a client, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// The most recent entry.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(requested: &str, final_url: &str, status: u16) -> HistoryEntry {
        HistoryEntry {
            requested: requested.parse().unwrap(),
            final_url: final_url.parse().unwrap(),
            status,
        }
    }

    #[test]
    fn current_is_the_latest_entry() {
        let mut history = History::new();
        assert!(history.current().is_none());

        history.push(entry("http://a.test/", "http://a.test/", 200));
        history.push(entry("http://a.test/old", "https://a.test/new", 200));

        assert_eq!(history.len(), 2);
        let current = history.current().unwrap();
        assert_eq!(current.final_url.as_str(), "https://a.test/new");
        assert!(current.was_redirected());
        assert!(!history.entries()[0].was_redirected());
        assert!(!history.is_empty());
    }
}
