//! Static football-culture profiles used to localize recommendation prompts.
//!
//! Read-only after start-up. Ids match the seeded `regions` table.

use crate::recommendations::prompts::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionProfile {
    pub name: &'static str,
    pub culture: &'static str,
    pub popular_teams: &'static str,
}

struct LocalizedProfile {
    region_id: i32,
    zh: RegionProfile,
    en: RegionProfile,
}

const fn profile(
    name: &'static str,
    culture: &'static str,
    popular_teams: &'static str,
) -> RegionProfile {
    RegionProfile {
        name,
        culture,
        popular_teams,
    }
}

const GENERIC_ZH: RegionProfile = profile("未知区域", "足球文化", "本地球队");
const GENERIC_EN: RegionProfile = profile("Unknown Region", "Football culture", "Local teams");

const REGION_PROFILES: &[LocalizedProfile] = &[
    LocalizedProfile {
        region_id: 1,
        zh: profile("中国", "中超联赛、国足、亚洲杯、世界杯热情", "广州恒大、上海上港、北京国安"),
        en: profile(
            "China",
            "Chinese Super League, national team, Asian Cup, World Cup enthusiasm",
            "Guangzhou Evergrande, Shanghai SIPG, Beijing Guoan",
        ),
    },
    LocalizedProfile {
        region_id: 2,
        zh: profile("美国", "MLS、世界杯、欧洲五大联赛关注", "LAFC、西雅图海湾人、亚特兰大联"),
        en: profile(
            "United States",
            "MLS, World Cup, following Europe's top five leagues",
            "LAFC, Seattle Sounders, Atlanta United",
        ),
    },
    LocalizedProfile {
        region_id: 3,
        zh: profile("加拿大", "MLS、世界杯、欧洲联赛", "多伦多FC、温哥华白帽、蒙特利尔冲击"),
        en: profile(
            "Canada",
            "MLS, World Cup, European leagues",
            "Toronto FC, Vancouver Whitecaps, CF Montréal",
        ),
    },
    LocalizedProfile {
        region_id: 4,
        zh: profile("欧洲", "五大联赛、欧冠、欧洲杯、世界杯", "皇马、巴萨、曼联、拜仁、巴黎"),
        en: profile(
            "Europe",
            "Top five leagues, Champions League, European Championship, World Cup",
            "Real Madrid, Barcelona, Manchester United, Bayern Munich, Paris Saint-Germain",
        ),
    },
    LocalizedProfile {
        region_id: 5,
        zh: profile("日本", "J联赛、亚洲杯、世界杯、欧洲联赛关注", "浦和红钻、鹿岛鹿角、川崎前锋"),
        en: profile(
            "Japan",
            "J.League, Asian Cup, World Cup, following European leagues",
            "Urawa Red Diamonds, Kashima Antlers, Kawasaki Frontale",
        ),
    },
    LocalizedProfile {
        region_id: 6,
        zh: profile("韩国", "K联赛、亚洲杯、世界杯、欧洲联赛", "全北现代、蔚山现代、首尔FC"),
        en: profile(
            "South Korea",
            "K League, Asian Cup, World Cup, European leagues",
            "Jeonbuk Hyundai Motors, Ulsan Hyundai, FC Seoul",
        ),
    },
    LocalizedProfile {
        region_id: 7,
        zh: profile("越南", "V联赛、东南亚足球、世界杯、欧洲联赛", "河内FC、胡志明市FC、平阳FC"),
        en: profile(
            "Vietnam",
            "V.League, Southeast Asian football, World Cup, European leagues",
            "Hanoi FC, Ho Chi Minh City FC, Becamex Binh Duong",
        ),
    },
    LocalizedProfile {
        region_id: 8,
        zh: profile("印度尼西亚", "印尼超级联赛、东南亚足球、世界杯", "佩尔西亚雅加达、巴厘联、阿雷马FC"),
        en: profile(
            "Indonesia",
            "Liga 1, Southeast Asian football, World Cup",
            "Persija Jakarta, Bali United, Arema FC",
        ),
    },
    LocalizedProfile {
        region_id: 9,
        zh: profile("泰国", "泰超联赛、东南亚足球、世界杯", "武里南联、曼谷联合、春武里FC"),
        en: profile(
            "Thailand",
            "Thai League 1, Southeast Asian football, World Cup",
            "Buriram United, Bangkok United, Chonburi FC",
        ),
    },
    LocalizedProfile {
        region_id: 10,
        zh: profile("巴西", "巴甲联赛、南美解放者杯、世界杯足球王国", "弗拉门戈、科林蒂安、帕尔梅拉斯"),
        en: profile(
            "Brazil",
            "Brasileirão, Copa Libertadores, the World Cup's football kingdom",
            "Flamengo, Corinthians, Palmeiras",
        ),
    },
    LocalizedProfile {
        region_id: 11,
        zh: profile("阿根廷", "阿甲联赛、南美足球、世界杯、梅西文化", "博卡青年、河床、竞技俱乐部"),
        en: profile(
            "Argentina",
            "Argentine Primera División, South American football, World Cup, Messi culture",
            "Boca Juniors, River Plate, Racing Club",
        ),
    },
    LocalizedProfile {
        region_id: 12,
        zh: profile("墨西哥", "墨超联赛、中北美足球、世界杯", "美洲队、瓜达拉哈拉、蓝十字"),
        en: profile(
            "Mexico",
            "Liga MX, CONCACAF football, World Cup",
            "Club América, Guadalajara, Cruz Azul",
        ),
    },
];

/// Profile for `region_id` in `language`, or the generic placeholder for
/// regions without one.
pub fn region_profile(language: Language, region_id: i32) -> RegionProfile {
    let localized = REGION_PROFILES.iter().find(|p| p.region_id == region_id);
    match (language, localized) {
        (Language::Zh, Some(p)) => p.zh,
        (Language::En, Some(p)) => p.en,
        (Language::Zh, None) => GENERIC_ZH,
        (Language::En, None) => GENERIC_EN,
    }
}
