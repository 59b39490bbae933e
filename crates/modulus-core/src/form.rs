//! The onboarding record and partial updates to it.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Business Category
// ============================================================================

/// Business category offered on the store details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Grocery,
    Restaurant,
    Electronics,
    Fashion,
    Home,
    Other,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Grocery,
            Category::Restaurant,
            Category::Electronics,
            Category::Fashion,
            Category::Home,
            Category::Other,
        ]
    }

    /// Stable identifier, identical to the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Grocery => "grocery",
            Category::Restaurant => "restaurant",
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::Home => "home",
            Category::Other => "other",
        }
    }

    /// Label shown on the category tile.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Grocery => "Grocery",
            Category::Restaurant => "Food",
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Home => "Decor",
            Category::Other => "Other",
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::all().iter().copied().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// Fields
// ============================================================================

/// Names a single field of [`FormData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Phone,
    Otp,
    StoreName,
    Category,
    City,
    Pincode,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Phone => "phone",
            Field::Otp => "otp",
            Field::StoreName => "storeName",
            Field::Category => "category",
            Field::City => "city",
            Field::Pincode => "pincode",
        }
    }
}

// ============================================================================
// Form Data
// ============================================================================

/// Everything the merchant has entered so far. Empty strings and an unset
/// category are valid in-progress values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub phone: String,
    pub otp: String,
    pub store_name: String,
    pub category: Option<Category>,
    pub city: String,
    pub pincode: String,
}

impl FormData {
    /// Shallow merge: returns a new record with the patch applied. Fields the
    /// patch does not mention keep their current value.
    pub fn merged(&self, patch: &FormPatch) -> FormData {
        FormData {
            phone: patch.phone.clone().unwrap_or_else(|| self.phone.clone()),
            otp: patch.otp.clone().unwrap_or_else(|| self.otp.clone()),
            store_name: patch
                .store_name
                .clone()
                .unwrap_or_else(|| self.store_name.clone()),
            category: patch.category.unwrap_or(self.category),
            city: patch.city.clone().unwrap_or_else(|| self.city.clone()),
            pincode: patch
                .pincode
                .clone()
                .unwrap_or_else(|| self.pincode.clone()),
        }
    }

    /// Display value of a field (category renders as its id, or empty).
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::Phone => self.phone.clone(),
            Field::Otp => self.otp.clone(),
            Field::StoreName => self.store_name.clone(),
            Field::Category => self.category.map(|c| c.id().to_string()).unwrap_or_default(),
            Field::City => self.city.clone(),
            Field::Pincode => self.pincode.clone(),
        }
    }
}

// ============================================================================
// Partial Update
// ============================================================================

/// A partial [`FormData`]. `category: Some(None)` clears the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPatch {
    pub phone: Option<String>,
    pub otp: Option<String>,
    pub store_name: Option<String>,
    pub category: Option<Option<Category>>,
    pub city: Option<String>,
    pub pincode: Option<String>,
}

impl FormPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn otp(mut self, otp: impl Into<String>) -> Self {
        self.otp = Some(otp.into());
        self
    }

    pub fn store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = Some(name.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(Some(category));
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn pincode(mut self, pincode: impl Into<String>) -> Self {
        self.pincode = Some(pincode.into());
        self
    }

    pub fn location(self, city: impl Into<String>, pincode: impl Into<String>) -> Self {
        self.city(city).pincode(pincode)
    }

    /// Fields this patch touches, in declaration order.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        if self.phone.is_some() {
            fields.push(Field::Phone);
        }
        if self.otp.is_some() {
            fields.push(Field::Otp);
        }
        if self.store_name.is_some() {
            fields.push(Field::StoreName);
        }
        if self.category.is_some() {
            fields.push(Field::Category);
        }
        if self.city.is_some() {
            fields.push(Field::City);
        }
        if self.pincode.is_some() {
            fields.push(Field::Pincode);
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}
