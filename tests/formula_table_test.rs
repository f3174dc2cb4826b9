use shapesense::domain::model::{HairTexture, Reflect, TargetColor, Undertone, UserHairData};
use shapesense::{generate_diy_formula, get_target_color};

const UNDERTONES: [Undertone; 4] = [
    Undertone::Yellow,
    Undertone::Red,
    Undertone::Orange,
    Undertone::Other,
];
const TEXTURES: [HairTexture; 3] = [
    HairTexture::Normal,
    HairTexture::Damaged,
    HairTexture::Resistant,
];

/// 逐一檢查所有輸入組合的四個步驟
#[test]
fn test_every_input_combination() {
    for base_level in 1..=10u8 {
        for target_level in 1..=10u8 {
            for reflect in [Reflect::Cold, Reflect::Warm] {
                for undertone in UNDERTONES {
                    for hair_texture in TEXTURES {
                        let hair = UserHairData {
                            base_level,
                            undertone,
                            hair_texture,
                        };
                        let target = TargetColor {
                            target_level,
                            target_reflect: reflect,
                        };
                        let result = generate_diy_formula(&hair, &target);

                        let suffix = if reflect == Reflect::Cold { "N" } else { "W" };
                        assert_eq!(
                            result.step1,
                            format!("选取 {}{} 号染膏 60g", target_level, suffix)
                        );

                        let expected_step2 = match (undertone, reflect) {
                            (Undertone::Yellow, Reflect::Cold) => {
                                "加入修正色 0/66 (Violet Modifier) 3g - 5g"
                            }
                            (Undertone::Red, Reflect::Cold) => {
                                "加入修正色 0/22 (Green Modifier) 4g - 6g"
                            }
                            (Undertone::Orange, Reflect::Cold) => {
                                "加入修正色 0/88 (Blue Modifier) 3g - 5g"
                            }
                            _ => "加入修正色 无 0g",
                        };
                        assert_eq!(result.step2, expected_step2);

                        let diff = i16::from(target_level) - i16::from(base_level);
                        let developer = match diff {
                            d if d <= 0 => "6% (20Vol)",
                            1 | 2 => "9% (30Vol)",
                            _ => "12% (40Vol)",
                        };
                        assert_eq!(
                            result.step3,
                            format!("混合 {} 双氧奶 60ml，比例 1:1", developer)
                        );

                        let (wait, has_tip) = match hair_texture {
                            HairTexture::Normal => (30, false),
                            HairTexture::Damaged => (25, true),
                            HairTexture::Resistant => (35, true),
                        };
                        assert_eq!(result.step4, format!("均匀涂抹后停留 {} 分钟", wait));
                        assert_eq!(result.tips.is_some(), has_tip);
                    }
                }
            }
        }
    }
}

#[test]
fn test_target_color_regression_fixtures() {
    let fixtures = [
        ("#9333ea", 6, Reflect::Cold),
        ("#000000", 1, Reflect::Warm),
        ("#ffffff", 10, Reflect::Warm),
        ("#ec4899", 6, Reflect::Cold),
        ("#84cc16", 5, Reflect::Warm),
    ];

    for (hex, level, reflect) in fixtures {
        let target = get_target_color(hex).unwrap();
        assert_eq!(
            (target.target_level, target.target_reflect),
            (level, reflect),
            "fixture {}",
            hex
        );
    }
}

#[test]
fn test_formula_result_json_shape() {
    let result = generate_diy_formula(
        &UserHairData::default(),
        &TargetColor {
            target_level: 5,
            target_reflect: Reflect::Warm,
        },
    );
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["step1"], "选取 5W 号染膏 60g");
    assert!(json.get("tips").is_none());
}
