use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorefrontError {
    #[error("unknown product: {0}")]
    UnknownProduct(String),
    #[error("Your cart is empty")]
    EmptyCart,
    #[error("checkout is already being processed")]
    CheckoutInProgress,
    #[error("checkout is not open")]
    CheckoutNotOpen,
}
