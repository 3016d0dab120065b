use crate::errors::Error;
use crate::types::{Amount18, Amount6};

pub const TOKEN_DECIMALS: u32 = 18;

/// One whole unit of the sold asset.
pub const TOKEN_UNIT: Amount18 = 10u128.pow(TOKEN_DECIMALS);

/// Converts a payment into sold-asset units at `unit_price` (the 6-decimal
/// price of one whole unit). Floor division: any remainder below one minimal
/// unit stays with the receiver and is not refunded.
pub fn to_token_amount(paid_amount: Amount6, unit_price: Amount6) -> Result<Amount18, Error> {
    if unit_price == 0 {
        return Err(Error::ZeroPrice);
    }
    paid_amount
        .checked_mul(TOKEN_UNIT)
        .map(|scaled| scaled / unit_price)
        .ok_or(Error::ArithmeticOverflow)
}
