//! Listings created during the current session, newest first. Each entry gets
//! a key that never changes, so views can keep rendered cards across inserts.

use crate::features::listings::types::Listing;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingFeed {
    entries: Vec<FeedEntry>,
    next_key: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedEntry {
    pub key: u64,
    pub listing: Listing,
}

impl ListingFeed {
    /// Adds a listing at the top and returns its key.
    pub fn push_front(&mut self, listing: Listing) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        self.entries.insert(0, FeedEntry { key, listing });
        key
    }

    pub fn entries(&self) -> &[FeedEntry] {
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
    use super::ListingFeed;
    use crate::features::listings::types::Listing;

    fn listing(title: &str) -> Listing {
        Listing {
            id: None,
            title: title.to_string(),
            description: String::new(),
            price: 10.0,
            image_url: None,
            location: None,
            created_at: None,
            is_sold: false,
        }
    }

    #[test]
    fn newest_listing_comes_first() {
        let mut feed = ListingFeed::default();
        feed.push_front(listing("Desk"));
        feed.push_front(listing("Lamp"));

        let titles: Vec<_> = feed.entries().iter().map(|e| e.listing.title.as_str()).collect();
        assert_eq!(titles, vec!["Lamp", "Desk"]);
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn keys_survive_later_inserts() {
        let mut feed = ListingFeed::default();
        let desk = feed.push_front(listing("Desk"));
        feed.push_front(listing("Lamp"));
        feed.push_front(listing("Desk"));

        let keys: Vec<_> = feed.entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![2, 1, desk]);
        assert_eq!(feed.entries()[2].listing.title, "Desk");
    }

    #[test]
    fn same_title_gets_distinct_keys() {
        let mut feed = ListingFeed::default();
        let first = feed.push_front(listing("Couch"));
        let second = feed.push_front(listing("Couch"));
        assert_ne!(first, second);
    }
}
