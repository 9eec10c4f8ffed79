//! Achievement definitions and metadata

/// Unique identifier for each achievement
///
/// Variant order matches `ACHIEVEMENTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AchievementId {
    FirstChallenge,
    PerfectScore,
    Streak3,
    Streak7,
    AllCategories,
    WebMaster,
    SpeedDemon,
    Completionist,
}

impl AchievementId {
    /// String ID as stored in the progress record
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstChallenge => "first-challenge",
            Self::PerfectScore => "perfect-score",
            Self::Streak3 => "streak-3",
            Self::Streak7 => "streak-7",
            Self::AllCategories => "all-categories",
            Self::WebMaster => "web-master",
            Self::SpeedDemon => "speed-demon",
            Self::Completionist => "completionist",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first-challenge" => Some(Self::FirstChallenge),
            "perfect-score" => Some(Self::PerfectScore),
            "streak-3" => Some(Self::Streak3),
            "streak-7" => Some(Self::Streak7),
            "all-categories" => Some(Self::AllCategories),
            "web-master" => Some(Self::WebMaster),
            "speed-demon" => Some(Self::SpeedDemon),
            "completionist" => Some(Self::Completionist),
            _ => None,
        }
    }

    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstChallenge,
            Self::PerfectScore,
            Self::Streak3,
            Self::Streak7,
            Self::AllCategories,
            Self::WebMaster,
            Self::SpeedDemon,
            Self::Completionist,
        ]
    }
}

/// Achievement definition
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl Achievement {
    pub fn get(id: AchievementId) -> &'static Achievement {
        &ACHIEVEMENTS[id as usize]
    }
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::FirstChallenge,
        name: "First Steps",
        description: "Complete your first challenge",
        icon: "🎯",
    },
    Achievement {
        id: AchievementId::PerfectScore,
        name: "Perfect Score",
        description: "Complete at least 3 challenges without a failed result",
        icon: "⭐",
    },
    Achievement {
        id: AchievementId::Streak3,
        name: "On Fire",
        description: "Complete challenges 3 days in a row",
        icon: "🔥",
    },
    Achievement {
        id: AchievementId::Streak7,
        name: "Week Warrior",
        description: "Complete challenges 7 days in a row",
        icon: "🏆",
    },
    Achievement {
        id: AchievementId::AllCategories,
        name: "Explorer",
        description: "Complete a challenge in every category",
        icon: "🗺️",
    },
    Achievement {
        id: AchievementId::WebMaster,
        name: "Web Master",
        description: "Complete every web challenge",
        icon: "🌐",
    },
    Achievement {
        id: AchievementId::SpeedDemon,
        name: "Speed Demon",
        description: "Complete 5 challenges in one day",
        icon: "⚡",
    },
    Achievement {
        id: AchievementId::Completionist,
        name: "Completionist",
        description: "Complete every challenge",
        icon: "👑",
    },
];
