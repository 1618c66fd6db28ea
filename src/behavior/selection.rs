//! Single highlighted card shared by every carousel rail.
//!
//! Each selection gets a fresh token. The auto-clear timer carries the token
//! it was scheduled with, and an expiry whose token is no longer current is
//! ignored, so a superseded timer can never clear a newer highlight.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionToken(u64);

#[derive(Debug, PartialEq, Eq)]
pub struct Selected<K> {
    /// Card that lost its highlight, if any.
    pub cleared: Option<K>,
    pub token: SelectionToken,
}

#[derive(Debug)]
pub struct Selection<K> {
    current: Option<(K, SelectionToken)>,
    generation: u64,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self { current: None, generation: 0 }
    }
}

impl<K: Copy + PartialEq> Selection<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<K> {
        self.current.map(|(key, _)| key)
    }

    pub fn select(&mut self, key: K) -> Selected<K> {
        let cleared = self.clear();
        self.generation += 1;
        let token = SelectionToken(self.generation);
        self.current = Some((key, token));
        Selected { cleared, token }
    }

    /// Drops the highlight unconditionally. Any outstanding token goes stale.
    pub fn clear(&mut self) -> Option<K> {
        self.current.take().map(|(key, _)| key)
    }

    /// Auto-clear for `token`. Returns the card to un-highlight, or `None`
    /// when the token was superseded or already cleared.
    pub fn expire(&mut self, token: SelectionToken) -> Option<K> {
        match self.current.map(|(_, current)| current) {
            Some(current) if current == token => self.clear(),
            _ => None,
        }
    }
}
