use soroban_sdk::{contracterror, contracttype};

/// Contract error codes, grouped in ranges of ten per category.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Configuration
    AlreadyInitialized = 1,
    NotInitialized = 2,
    EmptySchedule = 3,
    NonMonotonicCap = 4,
    NonMonotonicDeadline = 5,
    ZeroPrice = 6,
    InvalidWindow = 7,
    InvalidInstruments = 8,
    InvalidMaxSelling = 9,
    IndexOutOfRange = 10,

    // Eligibility
    ParticipantBlocked = 20,
    BeforeWindow = 21,
    AfterWindow = 22,
    UnsupportedInstrument = 23,
    InvalidAmount = 24,
    ReceiverNotSet = 25,

    // Capacity
    SoldOut = 30,
    AmountTooSmall = 31,
    ArithmeticOverflow = 32,

    // Transfer
    TransferFailed = 40,

    // Authorization
    Unauthorized = 50,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ErrorCategory {
    Config,
    Eligibility,
    Capacity,
    Transfer,
    Authorization,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ErrorInfo {
    pub code: u32,
    pub category: ErrorCategory,
    pub retryable: bool,
}

impl Error {
    pub fn from_code(code: u32) -> Option<Self> {
        let error = match code {
            1 => Error::AlreadyInitialized,
            2 => Error::NotInitialized,
            3 => Error::EmptySchedule,
            4 => Error::NonMonotonicCap,
            5 => Error::NonMonotonicDeadline,
            6 => Error::ZeroPrice,
            7 => Error::InvalidWindow,
            8 => Error::InvalidInstruments,
            9 => Error::InvalidMaxSelling,
            10 => Error::IndexOutOfRange,
            20 => Error::ParticipantBlocked,
            21 => Error::BeforeWindow,
            22 => Error::AfterWindow,
            23 => Error::UnsupportedInstrument,
            24 => Error::InvalidAmount,
            25 => Error::ReceiverNotSet,
            30 => Error::SoldOut,
            31 => Error::AmountTooSmall,
            32 => Error::ArithmeticOverflow,
            40 => Error::TransferFailed,
            50 => Error::Unauthorized,
            _ => return None,
        };
        Some(error)
    }

    pub fn category(&self) -> ErrorCategory {
        match *self as u32 {
            0..=19 => ErrorCategory::Config,
            20..=29 => ErrorCategory::Eligibility,
            30..=39 => ErrorCategory::Capacity,
            40..=49 => ErrorCategory::Transfer,
            _ => ErrorCategory::Authorization,
        }
    }

    /// Eligibility failures clear on their own (window opens, receiver gets
    /// set, blacklist flag is lifted) and a failed transfer leaves nothing
    /// behind, so both may be retried with the same inputs.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Eligibility | ErrorCategory::Transfer
        )
    }

    pub fn info(&self) -> ErrorInfo {
        ErrorInfo {
            code: *self as u32,
            category: self.category(),
            retryable: self.is_retryable(),
        }
    }
}
