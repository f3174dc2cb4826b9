pub mod advisor;
pub mod catalog;
pub mod color;
pub mod formula;

pub use crate::domain::model::{FormulaResult, TargetColor, UserHairData};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
