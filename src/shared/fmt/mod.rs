//! Display formatting for amounts shown in the wallet and price views.

pub mod decimal;
pub mod num;
