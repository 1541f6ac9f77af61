//! Chinese names for lunar months and days.

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

const DIGITS: [&str; 10] = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Month name with its 月 suffix, e.g. `"腊月"`, `"闰六月"`.
///
/// Months outside 1..=12 wrap.
pub fn month_name(month: u8, leap: bool) -> String {
    let name = MONTH_NAMES[(month as usize + 11) % 12];
    if leap {
        format!("闰{name}月")
    } else {
        format!("{name}月")
    }
}

/// Day name, 初一 through 三十. Days outside 1..=30 are clamped.
pub fn day_name(day: u8) -> String {
    let day = day.clamp(1, 30) as usize;
    match day {
        1..=10 => format!("初{}", if day == 10 { "十" } else { DIGITS[day] }),
        11..=19 => format!("十{}", DIGITS[day - 10]),
        20 => "二十".to_string(),
        21..=29 => format!("廿{}", DIGITS[day - 20]),
        _ => "三十".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months() {
        assert_eq!(month_name(1, false), "正月");
        assert_eq!(month_name(10, false), "十月");
        assert_eq!(month_name(11, false), "冬月");
        assert_eq!(month_name(12, false), "腊月");
        assert_eq!(month_name(6, true), "闰六月");
        assert_eq!(month_name(13, false), "正月");
    }

    #[test]
    fn days() {
        assert_eq!(day_name(1), "初一");
        assert_eq!(day_name(10), "初十");
        assert_eq!(day_name(13), "十三");
        assert_eq!(day_name(20), "二十");
        assert_eq!(day_name(21), "廿一");
        assert_eq!(day_name(29), "廿九");
        assert_eq!(day_name(30), "三十");
        assert_eq!(day_name(0), "初一");
        assert_eq!(day_name(31), "三十");
    }
}
