//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod activation;
mod registration;
mod validator;

pub use activation::{ActivationService, Activator};
pub use registration::{Registrar, RegistrationService};
pub use validator::SignUpValidator;
