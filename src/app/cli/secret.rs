//! Secret command implementation.

use crate::domain::AppError;

pub fn run_secret(bytes: usize) -> Result<(), AppError> {
    let secret = crate::app::api::generate_secret(bytes)?;
    println!("{}", secret.expose());
    Ok(())
}
