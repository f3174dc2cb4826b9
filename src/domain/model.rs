use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 頭髮底色的主要色調
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Yellow,
    Red,
    Orange,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum HairTexture {
    Normal,
    Damaged,
    Resistant,
}

/// 目標色調：冷 (N) 或 暖 (W)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reflect {
    Cold,
    Warm,
}

impl Reflect {
    /// 染膏型號的色調字尾
    pub fn dye_suffix(self) -> char {
        match self {
            Reflect::Cold => 'N',
            Reflect::Warm => 'W',
        }
    }
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Undertone::Yellow => "yellow",
            Undertone::Red => "red",
            Undertone::Orange => "orange",
            Undertone::Other => "other",
        };
        f.write_str(name)
    }
}

impl fmt::Display for HairTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HairTexture::Normal => "normal",
            HairTexture::Damaged => "damaged",
            HairTexture::Resistant => "resistant",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reflect::Cold => f.write_str("cold"),
            Reflect::Warm => f.write_str("warm"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserHairData {
    pub base_level: u8,
    pub undertone: Undertone,
    pub hair_texture: HairTexture,
}

impl Default for UserHairData {
    fn default() -> Self {
        Self {
            base_level: 5,
            undertone: Undertone::Yellow,
            hair_texture: HairTexture::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetColor {
    pub target_level: u8,
    pub target_reflect: Reflect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// 雙氧乳濃度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Developer {
    SixPercent,
    NinePercent,
    TwelvePercent,
}

impl Developer {
    pub fn label(self) -> &'static str {
        match self {
            Developer::SixPercent => "6% (20Vol)",
            Developer::NinePercent => "9% (30Vol)",
            Developer::TwelvePercent => "12% (40Vol)",
        }
    }
}

/// 對沖底色用的修正色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    Violet,
    Green,
    Blue,
}

impl Modifier {
    pub fn label(self) -> &'static str {
        match self {
            Modifier::Violet => "0/66 (Violet Modifier)",
            Modifier::Green => "0/22 (Green Modifier)",
            Modifier::Blue => "0/88 (Blue Modifier)",
        }
    }

    pub fn grams(self) -> &'static str {
        match self {
            Modifier::Violet | Modifier::Blue => "3g - 5g",
            Modifier::Green => "4g - 6g",
        }
    }
}

/// 配方的結構化結果，`FormulaResult` 由它渲染
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DyePlan {
    pub primary_dye: String,
    pub modifier: Option<Modifier>,
    pub developer: Developer,
    pub ratio: &'static str,
    pub wait_minutes: u32,
    pub dye_grams: u32,
    pub tips: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaResult {
    pub step1: String,
    pub step2: String,
    pub step3: String,
    pub step4: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tips: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hairstyle {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Haircolor {
    pub id: u32,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub nickname: String,
    pub avatar: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub face_shape: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserInfo {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            nickname: nickname.into(),
            avatar: String::new(),
            phone: None,
            gender: None,
            face_shape: None,
            created_at: Utc::now(),
        }
    }
}

/// 部分更新用戶資料，`None` 表示保持原值
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub is_logged_in: bool,
    pub user: Option<UserInfo>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaRecord {
    pub id: String,
    pub target_hex: String,
    pub hair: UserHairData,
    pub target: TargetColor,
    pub result: FormulaResult,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HairstyleState {
    pub favorites: Vec<Hairstyle>,
    pub history: Vec<FormulaRecord>,
}
