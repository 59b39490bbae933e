use crate::form::{Field, FormData, FormPatch};

/// Minimum number of characters in a phone number before a code can be sent.
pub const MIN_PHONE_LEN: usize = 10;
/// Number of characters in the one-time code.
pub const OTP_LEN: usize = 4;

/// Defines the sequence of steps in the onboarding flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepType {
    Welcome,
    Phone,
    Otp,
    StoreDetails,
    Location,
    Success,
}

impl StepType {
    pub fn all() -> &'static [StepType] {
        &[
            StepType::Welcome,
            StepType::Phone,
            StepType::Otp,
            StepType::StoreDetails,
            StepType::Location,
            StepType::Success,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            StepType::Welcome => 0,
            StepType::Phone => 1,
            StepType::Otp => 2,
            StepType::StoreDetails => 3,
            StepType::Location => 4,
            StepType::Success => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<StepType> {
        StepType::all().get(index).copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            StepType::Welcome => "Welcome",
            StepType::Phone => "What's your number?",
            StepType::Otp => "Verify it's you",
            StepType::StoreDetails => "Tell us about your store",
            StepType::Location => "Where are you located?",
            StepType::Success => "You're all set!",
        }
    }

    /// Short label used in the step sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            StepType::Welcome => "Welcome",
            StepType::Phone => "Mobile Number",
            StepType::Otp => "Verify Code",
            StepType::StoreDetails => "Store Details",
            StepType::Location => "Location",
            StepType::Success => "Done!",
        }
    }

    // Flow: Welcome → Phone → OTP → Store Details → Location → Success
    pub fn next(&self) -> Option<StepType> {
        StepType::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Option<StepType> {
        self.index().checked_sub(1).and_then(StepType::from_index)
    }

    pub fn def(&self) -> &'static StepDef {
        &STEPS[self.index()]
    }

    pub fn can_advance(&self, data: &FormData) -> bool {
        let def = self.def();
        !def.is_terminal && (def.can_advance)(data)
    }
}

// ============================================================================
// Step Table
// ============================================================================

/// One row of the step table: which fields a step touches and what must hold
/// before its forward action is enabled.
pub struct StepDef {
    pub step: StepType,
    pub reads: &'static [Field],
    pub writes: &'static [Field],
    pub can_advance: fn(&FormData) -> bool,
    pub allows_retreat: bool,
    pub is_terminal: bool,
}

impl std::fmt::Debug for StepDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDef")
            .field("step", &self.step)
            .field("reads", &self.reads)
            .field("writes", &self.writes)
            .field("allows_retreat", &self.allows_retreat)
            .field("is_terminal", &self.is_terminal)
            .finish_non_exhaustive()
    }
}

impl StepDef {
    /// True when every field touched by `patch` is declared as a write.
    pub fn permits_write(&self, patch: &FormPatch) -> bool {
        patch.fields().iter().all(|f| self.writes.contains(f))
    }
}

pub static STEPS: [StepDef; 6] = [
    StepDef {
        step: StepType::Welcome,
        reads: &[],
        writes: &[],
        can_advance: always,
        allows_retreat: false,
        is_terminal: false,
    },
    StepDef {
        step: StepType::Phone,
        reads: &[Field::Phone],
        writes: &[Field::Phone],
        can_advance: phone_complete,
        allows_retreat: false,
        is_terminal: false,
    },
    StepDef {
        step: StepType::Otp,
        reads: &[Field::Phone, Field::Otp],
        writes: &[Field::Otp],
        can_advance: otp_complete,
        allows_retreat: true,
        is_terminal: false,
    },
    StepDef {
        step: StepType::StoreDetails,
        reads: &[Field::StoreName, Field::Category],
        writes: &[Field::StoreName, Field::Category],
        can_advance: store_complete,
        allows_retreat: false,
        is_terminal: false,
    },
    StepDef {
        step: StepType::Location,
        reads: &[Field::City, Field::Pincode],
        writes: &[Field::City, Field::Pincode],
        can_advance: location_complete,
        allows_retreat: false,
        is_terminal: false,
    },
    StepDef {
        step: StepType::Success,
        reads: &[],
        writes: &[],
        can_advance: never,
        allows_retreat: false,
        is_terminal: true,
    },
];

fn always(_: &FormData) -> bool {
    true
}

fn never(_: &FormData) -> bool {
    false
}

fn phone_complete(data: &FormData) -> bool {
    data.phone.chars().count() >= MIN_PHONE_LEN
}

fn otp_complete(data: &FormData) -> bool {
    data.otp.chars().count() >= OTP_LEN
}

fn store_complete(data: &FormData) -> bool {
    !data.store_name.is_empty() && data.category.is_some()
}

fn location_complete(data: &FormData) -> bool {
    !data.city.is_empty() && !data.pincode.is_empty()
}
