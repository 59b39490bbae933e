/// Which widget on the store details step receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFocus {
    Name,
    Category,
}

impl StoreFocus {
    pub fn toggle(self) -> Self {
        match self {
            StoreFocus::Name => StoreFocus::Category,
            StoreFocus::Category => StoreFocus::Name,
        }
    }
}

/// Which widget on the location step receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFocus {
    UseCurrent,
    City,
    Pincode,
}

impl LocationFocus {
    pub fn next(self) -> Self {
        match self {
            LocationFocus::UseCurrent => LocationFocus::City,
            LocationFocus::City => LocationFocus::Pincode,
            LocationFocus::Pincode => LocationFocus::UseCurrent,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LocationFocus::UseCurrent => LocationFocus::Pincode,
            LocationFocus::City => LocationFocus::UseCurrent,
            LocationFocus::Pincode => LocationFocus::City,
        }
    }
}
