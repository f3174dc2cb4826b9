pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;

pub use adapters::LocalStorage;
pub use app::stores::{HairstyleStore, UserStore};
pub use config::TomlConfig;
pub use self::core::{
    advisor::{FormulaAdvisor, TargetSpec},
    color::{get_target_color, rgb_to_hex},
    formula::generate_diy_formula,
};
pub use domain::model::{FormulaResult, HairTexture, Reflect, TargetColor, Undertone, UserHairData};
pub use utils::error::{Result, ShapeError};
