//! Product and checkout modal state machines.
//!
//! Product modal: `Closed` → `Open(name)` → `Closed`.
//! Checkout modal: `Closed` → `Open` → `Processing` → `Closed`; close
//! requests are ignored while an order is processing.

use crate::error::StorefrontError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CheckoutPhase {
    #[default]
    Closed,
    Open,
    Processing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Product,
    Checkout,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Modals {
    product: Option<String>,
    checkout: CheckoutPhase,
}

impl Modals {
    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    pub fn checkout(&self) -> CheckoutPhase {
        self.checkout
    }

    /// Page scroll stays locked while any modal is visible.
    pub fn any_open(&self) -> bool {
        self.product.is_some() || self.checkout != CheckoutPhase::Closed
    }

    pub(crate) fn show_product(&mut self, name: &str) {
        self.product = Some(name.to_owned());
    }

    pub fn close_product(&mut self) -> bool {
        self.product.take().is_some()
    }

    pub(crate) fn show_checkout(&mut self) -> Result<(), StorefrontError> {
        match self.checkout {
            CheckoutPhase::Processing => Err(StorefrontError::CheckoutInProgress),
            _ => {
                self.checkout = CheckoutPhase::Open;
                Ok(())
            }
        }
    }

    pub fn close_checkout(&mut self) -> bool {
        if self.checkout == CheckoutPhase::Open {
            self.checkout = CheckoutPhase::Closed;
            true
        } else {
            false
        }
    }

    pub(crate) fn begin_processing(&mut self) -> Result<(), StorefrontError> {
        match self.checkout {
            CheckoutPhase::Open => {
                self.checkout = CheckoutPhase::Processing;
                Ok(())
            }
            CheckoutPhase::Processing => Err(StorefrontError::CheckoutInProgress),
            CheckoutPhase::Closed => Err(StorefrontError::CheckoutNotOpen),
        }
    }

    pub(crate) fn finish_processing(&mut self) -> Result<(), StorefrontError> {
        if self.checkout != CheckoutPhase::Processing {
            return Err(StorefrontError::CheckoutNotOpen);
        }
        self.checkout = CheckoutPhase::Closed;
        Ok(())
    }

    /// Escape key: closes the product modal first, then an idle checkout.
    pub fn dismiss_top(&mut self) -> Option<ModalKind> {
        if self.close_product() {
            Some(ModalKind::Product)
        } else if self.close_checkout() {
            Some(ModalKind::Checkout)
        } else {
            None
        }
    }
}
