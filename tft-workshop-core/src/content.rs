//! Static site structure and data tables: the fixed set of pages and the
//! meta team-composition stats rendered on the Team Comps page.

/// The fixed set of pages the navigation shell can show. The selected page
/// is transient UI state; it is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Home,
    Basics,
    Economy,
    Positioning,
    TeamComps,
}

impl PageId {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Basics,
        Self::Economy,
        Self::Positioning,
        Self::TeamComps,
    ];

    /// Stable identifier used in discussion storage keys.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Basics => "basics",
            Self::Economy => "economy",
            Self::Positioning => "positioning",
            Self::TeamComps => "comps",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Basics => "Basics",
            Self::Economy => "Economy",
            Self::Positioning => "Positioning",
            Self::TeamComps => "Team Comps",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    S,
    A,
    B,
}

impl Tier {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
        }
    }
}

/// One row of the meta composition table. Stats are kept as display strings;
/// nothing computes over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamComp {
    pub name: &'static str,
    pub play_rate: &'static str,
    pub avg_place: &'static str,
    pub top_four: &'static str,
    pub win_rate: &'static str,
    pub style: &'static str,
    pub tier: Tier,
    pub description: &'static str,
}

/// Top performing compositions, Diamond+ ranked games, patch 15.8.
#[must_use]
pub const fn meta_comps() -> &'static [TeamComp] {
    &META_COMPS
}

const META_COMPS: [TeamComp; 5] = [
    TeamComp {
        name: "Prodigy Malzahar & Rammus",
        play_rate: "0.10",
        avg_place: "3.36",
        top_four: "69.4",
        win_rate: "27.9",
        style: "Level 7 Reroll",
        tier: Tier::S,
        description: "A strong reroll composition focusing on Prodigy synergy. This comp \
            excels in the current meta with high top 4 rates and is best played at level 7.",
    },
    TeamComp {
        name: "Battle Academia Garen & Yuumi",
        play_rate: "0.06",
        avg_place: "3.94",
        top_four: "60.3",
        win_rate: "16.8",
        style: "Level 5 Reroll",
        tier: Tier::A,
        description: "An aggressive early game reroll comp. Stay at level 5 to find your \
            core units quickly and maintain a strong board throughout the game.",
    },
    TeamComp {
        name: "Soul Fighter Samira & Sett",
        play_rate: "0.51",
        avg_place: "4.04",
        top_four: "60.2",
        win_rate: "10.1",
        style: "Fast Level 8",
        tier: Tier::A,
        description: "The most popular composition in the meta. Rush to level 8 to find \
            your 4-cost carries. Consistent and flexible, making it great for climbing.",
    },
    TeamComp {
        name: "Battle Academia Katarina & Rakan",
        play_rate: "0.37",
        avg_place: "4.19",
        top_four: "56.9",
        win_rate: "12.2",
        style: "Level 6 Reroll",
        tier: Tier::B,
        description: "A mid-game focused composition. Reroll at level 6 to find your key \
            units. Strong board presence but requires proper itemization.",
    },
    TeamComp {
        name: "Mighty Mech Akali & Ryze",
        play_rate: "0.21",
        avg_place: "4.20",
        top_four: "57.2",
        win_rate: "11.1",
        style: "Fast Level 8",
        tier: Tier::B,
        description: "A flexible late-game composition utilizing the Mighty Mech trait. \
            Push levels aggressively and pivot based on your items and augments.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        for (i, a) in PageId::ALL.iter().enumerate() {
            for b in &PageId::ALL[i + 1..] {
                assert_ne!(a.slug(), b.slug());
            }
        }
    }

    #[test]
    fn meta_table_has_five_ranked_comps() {
        let comps = meta_comps();
        assert_eq!(comps.len(), 5);
        assert_eq!(comps[0].tier, Tier::S);
        assert!(comps.iter().all(|c| !c.description.is_empty()));
    }
}
