//! 나이지리아 주별 일사량(GHI)과 월별 보정 계수 테이블.
//! 값은 참고용 평균치이며 프로세스 전체에서 읽기 전용으로 사용한다.

use serde::{Deserialize, Serialize};

/// 지역별 평균 수평면 전일사량.
#[derive(Debug, Clone, Copy)]
pub struct RegionIrradiance {
    pub name: &'static str,
    /// GHI [kWh/m²/day]
    pub ghi_kwh_m2_day: f64,
}

impl RegionIrradiance {
    const fn new(name: &'static str, ghi_kwh_m2_day: f64) -> Self {
        Self {
            name,
            ghi_kwh_m2_day,
        }
    }
}

const REGIONS: [RegionIrradiance; 37] = [
    RegionIrradiance::new("Abia", 4.71),
    RegionIrradiance::new("Adamawa", 5.70),
    RegionIrradiance::new("Akwa Ibom", 4.21),
    RegionIrradiance::new("Anambra", 4.81),
    RegionIrradiance::new("Bauchi", 5.77),
    RegionIrradiance::new("Bayelsa", 4.88),
    RegionIrradiance::new("Benue", 5.19),
    RegionIrradiance::new("Borno", 5.90),
    RegionIrradiance::new("Cross River", 4.74),
    RegionIrradiance::new("Delta", 4.53),
    RegionIrradiance::new("Ebonyi", 5.05),
    RegionIrradiance::new("Edo", 4.66),
    RegionIrradiance::new("Ekiti", 4.94),
    RegionIrradiance::new("Enugu", 4.92),
    RegionIrradiance::new("FCT", 5.45),
    RegionIrradiance::new("Gombe", 5.77),
    RegionIrradiance::new("Imo", 4.71),
    RegionIrradiance::new("Jigawa", 6.16),
    RegionIrradiance::new("Kaduna", 5.64),
    RegionIrradiance::new("Kano", 5.87),
    RegionIrradiance::new("Katsina", 5.94),
    RegionIrradiance::new("Kebbi", 5.62),
    RegionIrradiance::new("Kogi", 5.40),
    RegionIrradiance::new("Kwara", 5.16),
    RegionIrradiance::new("Lagos", 4.74),
    RegionIrradiance::new("Nassarawa", 5.36),
    RegionIrradiance::new("Niger", 5.51),
    RegionIrradiance::new("Ogun", 4.74),
    RegionIrradiance::new("Ondo", 4.66),
    RegionIrradiance::new("Osun", 4.89),
    RegionIrradiance::new("Oyo", 5.11),
    RegionIrradiance::new("Plateau", 5.52),
    RegionIrradiance::new("Rivers", 4.13),
    RegionIrradiance::new("Sokoto", 6.24),
    RegionIrradiance::new("Taraba", 5.53),
    RegionIrradiance::new("Yobe", 6.11),
    RegionIrradiance::new("Zamfara", 6.01),
];

/// 등록된 전체 지역 목록.
pub fn regions() -> &'static [RegionIrradiance] {
    &REGIONS
}

/// 지역 이름으로 항목을 찾는다. 대소문자는 구분하지 않는다.
pub fn find_region(name: &str) -> Option<&'static RegionIrradiance> {
    let name = name.trim();
    REGIONS.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}

/// 지역의 GHI [kWh/m²/day]를 돌려준다.
pub fn irradiance(name: &str) -> Option<f64> {
    find_region(name).map(|r| r.ghi_kwh_m2_day)
}

/// 달력 월.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// 1월부터 12월까지 달력 순서.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// 0부터 시작하는 달력 순번.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// 차트 축 라벨용 약어.
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }

    /// 연평균 대비 계절 보정 계수.
    pub fn factor(self) -> f64 {
        MONTHLY_FACTORS[self.index()]
    }

    /// 평년(365일) 기준 일수.
    pub fn days(self) -> u32 {
        DAYS_IN_MONTH[self.index()]
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const MONTHLY_FACTORS: [f64; 12] = [
    0.95, 0.92, 0.97, 1.05, 1.12, 1.18, 1.20, 1.15, 1.08, 1.03, 0.98, 0.92,
];

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_has_positive_ghi() {
        assert_eq!(regions().len(), 37);
        assert!(regions().iter().all(|r| r.ghi_kwh_m2_day > 0.0));
    }

    #[test]
    fn region_names_are_unique() {
        for (i, a) in regions().iter().enumerate() {
            for b in &regions()[i + 1..] {
                assert!(!a.name.eq_ignore_ascii_case(b.name), "duplicate {}", a.name);
            }
        }
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(irradiance("lagos"), Some(4.74));
        assert_eq!(irradiance("  Akwa Ibom "), Some(4.21));
        assert!(find_region("Atlantis").is_none());
    }

    #[test]
    fn calendar_has_365_days() {
        let total: u32 = Month::ALL.iter().map(|m| m.days()).sum();
        assert_eq!(total, 365);
        assert!(Month::ALL.iter().all(|m| m.factor() > 0.0));
        assert_eq!(Month::ALL[6], Month::July);
        assert_eq!(Month::July.short_name(), "Jul");
    }
}
