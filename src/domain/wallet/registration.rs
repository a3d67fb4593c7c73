//! Wallet registration form and submit lifecycle.

use super::wire::RegisterWalletRequest;
use crate::error::{FetchError, ValidationError, GENERIC_FAILURE_MESSAGE};
use crate::router::{Navigator, Route};
use crate::shared::{NetworkName, WalletAddress};

/// Shown when the backend rejects a registration without a usable detail.
pub const REGISTRATION_FAILED_MESSAGE: &str =
    "Failed to register wallet. Make sure the data is valid and the server is running.";

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub address: String,
    pub owner_name: String,
    pub label: String,
    pub network: Option<NetworkName>,
}

impl RegistrationForm {
    /// Check every field and build the request body.
    ///
    /// Fields are checked in form order, so the first blank field is the one
    /// reported.
    pub fn validate(&self) -> Result<RegisterWalletRequest, ValidationError> {
        let address = required("address", &self.address)?;
        let owner_name = required("owner_name", &self.owner_name)?;
        let network = self.network.ok_or(ValidationError::EmptyField("network"))?;
        let label = required("label", &self.label)?;

        Ok(RegisterWalletRequest {
            address: WalletAddress::parse(address)?,
            owner_name: owner_name.to_string(),
            label: label.to_string(),
            network,
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed)
}

/// Registration page state: the form, an in-flight flag and the inline error.
#[derive(Debug, Clone, Default)]
pub struct RegistrationState {
    pub form: RegistrationForm,
    submitting: bool,
    error: Option<String>,
}

impl RegistrationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a submit. Returns the request to send, or `None` if the form is
    /// invalid (the error is kept inline) or a submit is already in flight.
    pub fn begin_submit(&mut self) -> Option<RegisterWalletRequest> {
        if self.submitting {
            return None;
        }
        match self.form.validate() {
            Ok(request) => {
                self.submitting = true;
                self.error = None;
                Some(request)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Finish a submit; on success navigate to the new wallet's page.
    pub fn finish(
        &mut self,
        request: &RegisterWalletRequest,
        result: Result<(), FetchError>,
        navigator: &mut impl Navigator,
    ) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.error = None;
                navigator.navigate_to(Route::Wallet(request.address.clone()));
            }
            Err(err) => {
                let message = if err.message == GENERIC_FAILURE_MESSAGE {
                    REGISTRATION_FAILED_MESSAGE.to_string()
                } else {
                    err.message
                };
                self.error = Some(message);
            }
        }
    }
}
