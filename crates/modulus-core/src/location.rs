use crate::form::FormPatch;

/// City and pincode pair filled by the "Use Current Location" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub pincode: String,
}

impl Location {
    pub fn into_patch(self) -> FormPatch {
        FormPatch::new().location(self.city, self.pincode)
    }
}

/// Source for the merchant's current location.
pub trait LocationProvider {
    fn locate(&self) -> Location;
}

/// Stand-in for geolocation: always answers with the same place.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    location: Location,
}

impl FixedLocation {
    pub fn new(city: impl Into<String>, pincode: impl Into<String>) -> Self {
        Self {
            location: Location {
                city: city.into(),
                pincode: pincode.into(),
            },
        }
    }
}

impl Default for FixedLocation {
    fn default() -> Self {
        Self::new("Mumbai", "400001")
    }
}

impl LocationProvider for FixedLocation {
    fn locate(&self) -> Location {
        log::info!(
            "using fixed location {} {}",
            self.location.city,
            self.location.pincode
        );
        self.location.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormData;

    #[test]
    fn default_fills_mumbai() {
        let data = FormData::default().merged(&FixedLocation::default().locate().into_patch());
        assert_eq!(data.city, "Mumbai");
        assert_eq!(data.pincode, "400001");
    }

    #[test]
    fn fill_replaces_typed_values() {
        let typed = FormData {
            city: "Pune".into(),
            pincode: "411".into(),
            phone: "9876543210".into(),
            ..FormData::default()
        };
        let data = typed.merged(&FixedLocation::new("Delhi", "110001").locate().into_patch());
        assert_eq!(data.city, "Delhi");
        assert_eq!(data.pincode, "110001");
        assert_eq!(data.phone, "9876543210");
    }
}
