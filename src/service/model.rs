use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// An absent model is always valid.
pub fn validate_model<T: Validate + ?Sized>(model: Option<&T>) -> Result<()> {
    match model {
        Some(model) => model.validate(),
        None => Ok(()),
    }
}
