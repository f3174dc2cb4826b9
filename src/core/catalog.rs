use crate::domain::model::{Haircolor, Hairstyle};
use crate::utils::error::{Result, ShapeError};

const HAIRSTYLES: [(u32, &str); 15] = [
    (1, "齐肩短发"),
    (2, "层次长发"),
    (3, "空气刘海"),
    (4, "波浪卷发"),
    (5, "高马尾"),
    (6, "低丸子头"),
    (7, "法式刘海"),
    (8, "纹理短发"),
    (9, "编发辫"),
    (10, "离子直发"),
    (11, "微卷长发"),
    (12, "齐刘海短发"),
    (13, "公主切"),
    (14, "羊毛卷"),
    (15, "鲻鱼头"),
];

const HAIRCOLORS: [(u32, &str, &str); 15] = [
    (1, "梦境紫", "#9333ea"),
    (2, "深海蓝", "#3b82f6"),
    (3, "幻光粉", "#ec4899"),
    (4, "星辰银", "#d1d5db"),
    (5, "暮光金", "#f59e0b"),
    (6, "珊瑚橙", "#f97316"),
    (7, "薄荷绿", "#14b8a6"),
    (8, "樱花粉", "#f9a8d4"),
    (9, "雾霾蓝", "#93c5fd"),
    (10, "焦糖棕", "#d97706"),
    (11, "玫瑰金", "#f472b6"),
    (12, "橄榄绿", "#84cc16"),
    (13, "薰衣草", "#c4b5fd"),
    (14, "琥珀色", "#f59e0b"),
    (15, "宝石红", "#ef4444"),
];

pub fn all_hairstyles() -> Vec<Hairstyle> {
    HAIRSTYLES
        .iter()
        .map(|&(id, name)| Hairstyle {
            id,
            name: name.to_string(),
        })
        .collect()
}

pub fn all_haircolors() -> Vec<Haircolor> {
    HAIRCOLORS
        .iter()
        .map(|&(id, name, color)| Haircolor {
            id,
            name: name.to_string(),
            color: color.to_string(),
        })
        .collect()
}

pub fn hairstyle_by_id(id: u32) -> Option<Hairstyle> {
    all_hairstyles().into_iter().find(|style| style.id == id)
}

pub fn haircolor_by_id(id: u32) -> Option<Haircolor> {
    all_haircolors().into_iter().find(|color| color.id == id)
}

pub fn require_hairstyle(id: u32) -> Result<Hairstyle> {
    hairstyle_by_id(id).ok_or_else(|| ShapeError::NotFoundError {
        kind: "Hairstyle".to_string(),
        id,
    })
}

pub fn require_haircolor(id: u32) -> Result<Haircolor> {
    haircolor_by_id(id).ok_or_else(|| ShapeError::NotFoundError {
        kind: "Haircolor".to_string(),
        id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::parse_hex;

    #[test]
    fn test_catalog_sizes_and_ids() {
        let styles = all_hairstyles();
        let colors = all_haircolors();
        assert_eq!(styles.len(), 15);
        assert_eq!(colors.len(), 15);
        assert!(styles.iter().enumerate().all(|(i, s)| s.id == i as u32 + 1));
        assert!(colors.iter().enumerate().all(|(i, c)| c.id == i as u32 + 1));
    }

    #[test]
    fn test_every_catalog_color_parses() {
        for color in all_haircolors() {
            assert!(parse_hex(&color.color).is_ok(), "{} is not valid hex", color.color);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(hairstyle_by_id(13).unwrap().name, "公主切");
        assert_eq!(haircolor_by_id(1).unwrap().color, "#9333ea");
        assert!(hairstyle_by_id(0).is_none());
        assert!(haircolor_by_id(16).is_none());
    }

    #[test]
    fn test_require_reports_not_found() {
        match require_haircolor(42) {
            Err(ShapeError::NotFoundError { kind, id }) => {
                assert_eq!(kind, "Haircolor");
                assert_eq!(id, 42);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(require_hairstyle(15).is_ok());
    }
}
