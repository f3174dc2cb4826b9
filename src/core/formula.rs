//! Dye formula generation.
//!
//! The plan is derived with the subtractive/neutralizing rules used by
//! colorists: the level difference picks the developer, the target reflect
//! picks the primary dye tone, and an unwanted undertone under a cold target
//! gets a complementary modifier.

use crate::domain::model::{
    Developer, DyePlan, FormulaResult, HairTexture, Modifier, Reflect, TargetColor, Undertone,
    UserHairData,
};

pub const BASE_WAIT_MINUTES: u32 = 30;
pub const TEXTURE_WAIT_ADJUSTMENT: u32 = 5;
pub const TOTAL_DYE_GRAMS: u32 = 60;
pub const MIX_RATIO: &str = "1:1";

const DAMAGED_TIP: &str = "建议加入隔离精华，保护毛鳞片";
const RESISTANT_TIP: &str = "建议提高双氧乳浓度或延长停留时间";

pub fn select_developer(base_level: u8, target_level: u8) -> Developer {
    let level_diff = i16::from(target_level) - i16::from(base_level);
    match level_diff {
        d if d <= 0 => Developer::SixPercent,
        1 | 2 => Developer::NinePercent,
        _ => Developer::TwelvePercent,
    }
}

pub fn select_modifier(undertone: Undertone, reflect: Reflect) -> Option<Modifier> {
    match (undertone, reflect) {
        (Undertone::Yellow, Reflect::Cold) => Some(Modifier::Violet),
        (Undertone::Red, Reflect::Cold) => Some(Modifier::Green),
        (Undertone::Orange, Reflect::Cold) => Some(Modifier::Blue),
        _ => None,
    }
}

fn texture_adjustment(texture: HairTexture) -> (u32, Option<&'static str>) {
    match texture {
        // 受損髮質上色快
        HairTexture::Damaged => (BASE_WAIT_MINUTES - TEXTURE_WAIT_ADJUSTMENT, Some(DAMAGED_TIP)),
        HairTexture::Resistant => (
            BASE_WAIT_MINUTES + TEXTURE_WAIT_ADJUSTMENT,
            Some(RESISTANT_TIP),
        ),
        HairTexture::Normal => (BASE_WAIT_MINUTES, None),
    }
}

pub fn plan_formula(hair: &UserHairData, target: &TargetColor) -> DyePlan {
    let developer = select_developer(hair.base_level, target.target_level);
    let primary_dye = format!(
        "{}{}",
        target.target_level,
        target.target_reflect.dye_suffix()
    );
    let modifier = select_modifier(hair.undertone, target.target_reflect);
    let (wait_minutes, tips) = texture_adjustment(hair.hair_texture);

    DyePlan {
        primary_dye,
        modifier,
        developer,
        ratio: MIX_RATIO,
        wait_minutes,
        dye_grams: TOTAL_DYE_GRAMS,
        tips,
    }
}

impl DyePlan {
    pub fn render(&self) -> FormulaResult {
        // 1:1 調配，雙氧奶用量等於染膏重量
        let developer_ml = self.dye_grams;
        let (modifier_label, modifier_grams) = match self.modifier {
            Some(modifier) => (modifier.label(), modifier.grams()),
            None => ("无", "0g"),
        };

        FormulaResult {
            step1: format!("选取 {} 号染膏 {}g", self.primary_dye, self.dye_grams),
            step2: format!("加入修正色 {} {}", modifier_label, modifier_grams),
            step3: format!(
                "混合 {} 双氧奶 {}ml，比例 {}",
                self.developer.label(),
                developer_ml,
                self.ratio
            ),
            step4: format!("均匀涂抹后停留 {} 分钟", self.wait_minutes),
            tips: self.tips.map(str::to_string),
        }
    }
}

pub fn generate_diy_formula(hair: &UserHairData, target: &TargetColor) -> FormulaResult {
    let plan = plan_formula(hair, target);
    tracing::debug!(
        "Formula plan: dye={}, modifier={:?}, developer={}, wait={}min",
        plan.primary_dye,
        plan.modifier,
        plan.developer.label(),
        plan.wait_minutes
    );
    plan.render()
}
