//! Create-listing form model. Text fields are trimmed on submit; the price is
//! parsed once here so the request never carries an unparsed string.

use crate::features::{
    listings::types::CreateListingRequest,
    validation::{FieldErrors, FieldRules, FormField, Pattern, parse_number},
};

static TITLE: FieldRules = FieldRules::new()
    .required("Title is required.")
    .min_length(2, "Title must be at least 2 characters.")
    .max_length(80, "Title is too long.");

static DESCRIPTION: FieldRules = FieldRules::new()
    .required("Description is required.")
    .min_length(10, "Description must be at least 10 characters.")
    .max_length(1000, "Description is too long.");

static PRICE: FieldRules = FieldRules::new()
    .required("Price is required.")
    .numeric("Price must be a number.")
    .min(0.0, "Price cannot be negative.");

static LOCATION: FieldRules = FieldRules::new()
    .required("Location is required.")
    .min_length(2, "Location must be at least 2 characters.")
    .max_length(120, "Location is too long.");

static IMAGE_URL: FieldRules =
    FieldRules::new().pattern(Pattern::HttpUrl, "Image must be an http(s) link.");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingField {
    Title,
    Description,
    Price,
    Location,
    ImageUrl,
}

impl FormField for ListingField {
    const ALL: &'static [Self] = &[
        ListingField::Title,
        ListingField::Description,
        ListingField::Price,
        ListingField::Location,
        ListingField::ImageUrl,
    ];

    fn rules(self) -> &'static FieldRules {
        match self {
            ListingField::Title => &TITLE,
            ListingField::Description => &DESCRIPTION,
            ListingField::Price => &PRICE,
            ListingField::Location => &LOCATION,
            ListingField::ImageUrl => &IMAGE_URL,
        }
    }

    fn key(self) -> &'static str {
        match self {
            ListingField::Title => "title",
            ListingField::Description => "description",
            ListingField::Price => "price",
            ListingField::Location => "location",
            ListingField::ImageUrl => "image_url",
        }
    }
}

/// Raw create-listing input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: String,
    pub image_url: String,
}

impl ListingForm {
    pub fn value(&self, field: ListingField) -> &str {
        match field {
            ListingField::Title => &self.title,
            ListingField::Description => &self.description,
            ListingField::Price => self.price.trim(),
            ListingField::Location => &self.location,
            ListingField::ImageUrl => self.image_url.trim(),
        }
    }

    pub fn errors(&self) -> FieldErrors<ListingField> {
        FieldErrors::collect(|field| self.value(field))
    }

    pub fn submit(&self) -> Result<CreateListingRequest, FieldErrors<ListingField>> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        let Some(price) = parse_number(&self.price) else {
            return Err(errors);
        };

        let image_url = self.image_url.trim();
        Ok(CreateListingRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
            location: Some(self.location.trim().to_string()),
        })
    }
}
