//! Text and password input field.

mod appearance;
mod input_field;
mod value;
mod visual;

pub use appearance::*;
pub use input_field::*;
pub use value::*;
pub use visual::*;
