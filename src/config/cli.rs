use crate::core::advisor::TargetSpec;
use crate::domain::model::{Gender, HairTexture, Rgb, Undertone, UserHairData};
use clap::{ArgGroup, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "shapesense")]
#[command(about = "Hair-dye formula calculator for the ShapeSense app", version)]
pub struct Cli {
    /// Path to the TOML settings file (optional)
    #[arg(short, long, default_value = "shapesense.toml")]
    pub config: String,

    /// Override the storage directory from the settings file
    #[arg(long)]
    pub storage: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the dye target level and reflect of a color
    Target(TargetArgs),
    /// Generate a DIY dye formula for a target color
    Formula(FormulaArgs),
    /// List the built-in hairstyle and hair-color catalogs
    Catalog {
        #[command(subcommand)]
        kind: CatalogCommand,
    },
    /// Log in with a nickname
    Login(LoginArgs),
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Update the profile of the logged-in user
    Profile(ProfileArgs),
    /// Record the face shape of the logged-in user
    FaceShape { shape: String },
    /// Manage favorite hairstyles
    Favorite {
        #[command(subcommand)]
        action: FavoriteCommand,
    },
    /// List or clear the formula history
    History {
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["hex", "rgb"])))]
pub struct TargetArgs {
    /// Hex color such as #9333ea
    pub hex: Option<String>,

    /// Color as r,g,b
    #[arg(long, value_parser = parse_rgb)]
    pub rgb: Option<Rgb>,
}

impl TargetArgs {
    pub fn target_spec(&self) -> TargetSpec {
        match (&self.hex, self.rgb) {
            (_, Some(rgb)) => TargetSpec::Rgb(rgb),
            (Some(hex), None) => TargetSpec::Hex(hex.clone()),
            // clap 的 group 保證至少有一個來源
            (None, None) => TargetSpec::Hex(String::new()),
        }
    }
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["color", "haircolor", "rgb"])))]
pub struct FormulaArgs {
    /// Target hex color
    #[arg(long)]
    pub color: Option<String>,

    /// Target color from the catalog by id
    #[arg(long)]
    pub haircolor: Option<u32>,

    /// Target color as r,g,b
    #[arg(long, value_parser = parse_rgb)]
    pub rgb: Option<Rgb>,

    /// Current hair level (1-10)
    #[arg(long)]
    pub base_level: Option<u8>,

    #[arg(long, value_enum)]
    pub undertone: Option<Undertone>,

    #[arg(long, value_enum)]
    pub texture: Option<HairTexture>,

    /// Do not record this formula in the history
    #[arg(long)]
    pub no_history: bool,
}

impl FormulaArgs {
    pub fn target_spec(&self) -> TargetSpec {
        if let Some(id) = self.haircolor {
            TargetSpec::Catalog(id)
        } else if let Some(rgb) = self.rgb {
            TargetSpec::Rgb(rgb)
        } else {
            TargetSpec::Hex(self.color.clone().unwrap_or_default())
        }
    }

    /// 命令列參數覆蓋設定檔中的預設頭髮數據
    pub fn hair(&self, defaults: UserHairData) -> UserHairData {
        UserHairData {
            base_level: self.base_level.unwrap_or(defaults.base_level),
            undertone: self.undertone.unwrap_or(defaults.undertone),
            hair_texture: self.texture.unwrap_or(defaults.hair_texture),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    Styles,
    Colors,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub nickname: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long, value_enum)]
    pub gender: Option<Gender>,

    /// Session token; a random one is generated when omitted
    #[arg(long)]
    pub token: Option<String>,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub nickname: Option<String>,

    #[arg(long)]
    pub avatar: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long, value_enum)]
    pub gender: Option<Gender>,
}

#[derive(Debug, Subcommand)]
pub enum FavoriteCommand {
    Add { id: u32 },
    Remove { id: u32 },
    List,
}

fn parse_rgb(value: &str) -> Result<Rgb, String> {
    let channels = value
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid channel in '{}': {}", value, e))?;

    match channels.as_slice() {
        [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
        _ => Err(format!("expected r,g,b but got '{}'", value)),
    }
}
