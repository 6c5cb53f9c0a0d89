//! The cafe form: raw submission shape, syntactic validation, and the
//! form-description object consumed by the form template.
//!
//! Validation is purely syntactic (presence, URL well-formedness, seats in
//! the fixed bucket set). Name uniqueness is NOT checked here; it surfaces
//! only as a store conflict on insert.
//!
//! Checkbox semantics: an empty form pre-checks all four amenity flags, but
//! in an actual submission the absence of a checkbox control means false.

use serde::Deserialize;
use url::Url;

use cafe_registry_core::SeatRange;

use crate::models::{Cafe, CafeDraft};

const REQUIRED: &str = "This field is required.";
const INVALID_URL: &str = "Invalid URL.";
const INVALID_CHOICE: &str = "Not a valid choice.";

/// Raw cafe form submission.
///
/// Every field defaults so a partial submission still deserializes; missing
/// text inputs become empty strings and fail the required check instead of
/// being rejected by the extractor. Checkboxes submit `on` when checked and
/// nothing at all when unchecked, hence `Option<String>`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CafeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub seats: String,
    #[serde(default)]
    pub has_toilet: Option<String>,
    #[serde(default)]
    pub has_wifi: Option<String>,
    #[serde(default)]
    pub has_sockets: Option<String>,
    #[serde(default)]
    pub can_take_calls: Option<String>,
    #[serde(default)]
    pub coffee_price: String,
}

/// Field-level validation messages for a rejected submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeFormErrors {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub coffee_price: Option<String>,
}

impl CafeFormErrors {
    /// True when no field has a message.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.map_url.is_none()
            && self.img_url.is_none()
            && self.location.is_none()
            && self.seats.is_none()
            && self.coffee_price.is_none()
    }
}

impl CafeForm {
    /// Validate the submission into a [`CafeDraft`].
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any required field is missing,
    /// a URL is malformed, or `seats` is not one of the buckets.
    pub fn validate(&self) -> Result<CafeDraft, CafeFormErrors> {
        let mut errors = CafeFormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some(REQUIRED.to_string());
        }

        let map_url = self.map_url.trim();
        errors.map_url = validate_url(map_url);

        let img_url = self.img_url.trim();
        errors.img_url = validate_url(img_url);

        let location = self.location.trim();
        if location.is_empty() {
            errors.location = Some(REQUIRED.to_string());
        }

        let seats = match SeatRange::parse(self.seats.trim()) {
            Ok(seats) => Some(seats),
            Err(_) => {
                errors.seats = Some(if self.seats.trim().is_empty() {
                    REQUIRED.to_string()
                } else {
                    INVALID_CHOICE.to_string()
                });
                None
            }
        };

        let coffee_price = self.coffee_price.trim();
        if coffee_price.is_empty() {
            errors.coffee_price = Some(REQUIRED.to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CafeDraft {
            name: name.to_string(),
            map_url: map_url.to_string(),
            img_url: img_url.to_string(),
            location: location.to_string(),
            // Unreachable fallback: errors.seats is set whenever parse failed
            seats: seats.unwrap_or_default(),
            has_toilet: self.has_toilet.is_some(),
            has_wifi: self.has_wifi.is_some(),
            has_sockets: self.has_sockets.is_some(),
            can_take_calls: self.can_take_calls.is_some(),
            coffee_price: coffee_price.to_string(),
        })
    }
}

fn validate_url(value: &str) -> Option<String> {
    if value.is_empty() {
        Some(REQUIRED.to_string())
    } else if Url::parse(value).is_err() {
        Some(INVALID_URL.to_string())
    } else {
        None
    }
}

// =============================================================================
// Form view (the template's form-description object)
// =============================================================================

/// Input widget of a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    /// Plain text input.
    Text,
    /// Text input validated as a URL.
    Url,
    /// Select over the seating buckets.
    Select,
    /// Amenity checkbox.
    Checkbox { checked: bool },
}

/// One field of the rendered form: widget metadata plus the bound value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub widget: Widget,
    pub error: Option<String>,
}

impl FormField {
    /// True for the checkbox widget.
    #[must_use]
    pub const fn is_checkbox(&self) -> bool {
        matches!(self.widget, Widget::Checkbox { .. })
    }

    /// True for the select widget.
    #[must_use]
    pub const fn is_select(&self) -> bool {
        matches!(self.widget, Widget::Select)
    }

    /// Checkbox state; false for other widgets.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        matches!(self.widget, Widget::Checkbox { checked: true })
    }

    /// Choices of the select widget; empty for other widgets.
    #[must_use]
    pub const fn choices(&self) -> &'static [SeatRange] {
        match self.widget {
            Widget::Select => &SeatRange::ALL,
            _ => &[],
        }
    }
}

/// The declarative form description handed to the form template: the editable
/// fields in display order, each with widget metadata, bound value, and any
/// validation message.
#[derive(Debug, Clone)]
pub struct CafeFormView {
    pub fields: Vec<FormField>,
}

/// Bound values and errors used to assemble a [`CafeFormView`].
struct Bindings {
    name: String,
    map_url: String,
    img_url: String,
    location: String,
    seats: String,
    has_toilet: bool,
    has_wifi: bool,
    has_sockets: bool,
    can_take_calls: bool,
    coffee_price: String,
    errors: CafeFormErrors,
}

impl CafeFormView {
    /// An empty form for the add page. The amenity checkboxes default to
    /// checked on initial rendering.
    #[must_use]
    pub fn empty() -> Self {
        Self::build(Bindings {
            name: String::new(),
            map_url: String::new(),
            img_url: String::new(),
            location: String::new(),
            seats: String::new(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: true,
            can_take_calls: true,
            coffee_price: String::new(),
            errors: CafeFormErrors::default(),
        })
    }

    /// A form pre-filled from a stored cafe, for the update page.
    #[must_use]
    pub fn from_cafe(cafe: &Cafe) -> Self {
        Self::build(Bindings {
            name: cafe.name.clone(),
            map_url: cafe.map_url.clone(),
            img_url: cafe.img_url.clone(),
            location: cafe.location.clone(),
            seats: cafe.seats.to_string(),
            has_toilet: cafe.has_toilet,
            has_wifi: cafe.has_wifi,
            has_sockets: cafe.has_sockets,
            can_take_calls: cafe.can_take_calls,
            coffee_price: cafe.coffee_price.clone().unwrap_or_default(),
            errors: CafeFormErrors::default(),
        })
    }

    /// A re-rendered form for a rejected submission, preserving the
    /// submitted values and attaching the field messages.
    #[must_use]
    pub fn from_submission(form: &CafeForm, errors: CafeFormErrors) -> Self {
        Self::build(Bindings {
            name: form.name.clone(),
            map_url: form.map_url.clone(),
            img_url: form.img_url.clone(),
            location: form.location.clone(),
            seats: form.seats.clone(),
            has_toilet: form.has_toilet.is_some(),
            has_wifi: form.has_wifi.is_some(),
            has_sockets: form.has_sockets.is_some(),
            can_take_calls: form.can_take_calls.is_some(),
            coffee_price: form.coffee_price.clone(),
            errors,
        })
    }

    fn build(b: Bindings) -> Self {
        let text = |name, label, value: String, error: Option<String>| FormField {
            name,
            label,
            value,
            widget: Widget::Text,
            error,
        };
        let url = |name, label, value: String, error: Option<String>| FormField {
            name,
            label,
            value,
            widget: Widget::Url,
            error,
        };
        let checkbox = |name, label, checked| FormField {
            name,
            label,
            value: String::new(),
            widget: Widget::Checkbox { checked },
            error: None,
        };

        Self {
            fields: vec![
                text("name", "Cafe name", b.name, b.errors.name),
                url("map_url", "Location URL", b.map_url, b.errors.map_url),
                text("location", "Cafe Location", b.location, b.errors.location),
                url("img_url", "Image URL", b.img_url, b.errors.img_url),
                FormField {
                    name: "seats",
                    label: "No. of seats",
                    value: b.seats,
                    widget: Widget::Select,
                    error: b.errors.seats,
                },
                checkbox("has_toilet", "Has toilet?", b.has_toilet),
                checkbox("has_wifi", "Has Wifi?", b.has_wifi),
                checkbox("has_sockets", "Has Sockets?", b.has_sockets),
                checkbox("can_take_calls", "Can take calls?", b.can_take_calls),
                text(
                    "coffee_price",
                    "Coffee price",
                    b.coffee_price,
                    b.errors.coffee_price,
                ),
            ],
        }
    }
}
