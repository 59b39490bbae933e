//! Modulus Sell onboarding core.
//!
//! Holds the merchant's onboarding record and the six-step linear wizard
//! that gathers it. Rendering lives in `modulus-tui`.

pub mod config;
pub mod form;
pub mod location;
pub mod otp;
pub mod steps;
pub mod wizard;

pub use config::{ConfigError, OnboardConfig};
pub use form::{Category, Field, FormData, FormPatch};
pub use location::{FixedLocation, Location, LocationProvider};
pub use otp::OtpSlots;
pub use steps::{StepDef, StepType, MIN_PHONE_LEN, OTP_LEN, STEPS};
pub use wizard::{Navigation, Progress, TransitionObserver, Wizard};
