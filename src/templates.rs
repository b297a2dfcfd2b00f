//! Tera template set.
//!
//! Templates are compiled into the binary so the server has no runtime
//! dependency on its working directory.

use tera::Tera;

use crate::error::AppError;

const BASE_TEMPLATE: &str = include_str!("../templates/base.html");
const HOME_TEMPLATE: &str = include_str!("../templates/home.html");

/// Initialize the Tera template engine
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", BASE_TEMPLATE),
        ("home.html", HOME_TEMPLATE),
    ])?;
    Ok(tera)
}
