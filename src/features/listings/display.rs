//! Display strings for listing cards. Every accessor has a fallback so a card
//! can render from partial data or no listing at all.

use crate::features::listings::types::Listing;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const PLACEHOLDER_IMAGE: &str = "/assets/images/computer.png";

pub struct ListingCardModel<'a> {
    listing: Option<&'a Listing>,
}

impl<'a> ListingCardModel<'a> {
    pub fn new(listing: Option<&'a Listing>) -> Self {
        Self { listing }
    }

    pub fn title(&self) -> &str {
        self.listing
            .map(|listing| listing.title.as_str())
            .filter(|title| !title.is_empty())
            .unwrap_or("Untitled Listing")
    }

    pub fn image_url(&self) -> &str {
        self.listing
            .and_then(|listing| listing.image_url.as_deref())
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn price(&self) -> String {
        match self.listing {
            Some(listing) => format!("${:.2}", listing.price),
            None => "Price Unavailable".to_string(),
        }
    }

    pub fn location(&self) -> &str {
        self.listing
            .and_then(|listing| listing.location.as_deref())
            .filter(|location| !location.is_empty())
            .unwrap_or("Location Unavailable")
    }

    /// Creation date as `Jan 5, 2026`.
    pub fn created_at(&self) -> String {
        self.listing
            .and_then(|listing| listing.created_at.as_deref())
            .and_then(parse_date)
            .map(|date| date.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| "Date Unavailable".to_string())
    }

    pub fn is_sold(&self) -> bool {
        self.listing.is_some_and(|listing| listing.is_sold)
    }
}

/// Accepts RFC 3339 timestamps, naive ISO timestamps and plain dates.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|t| t.date()))
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}
