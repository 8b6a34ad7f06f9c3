//! Fixed demo catalog inserted by the bootstrap seeder.

pub(crate) struct CharacterSeed {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

pub(crate) struct ShowSeed {
    pub title: &'static str,
    pub description: &'static str,
    pub year: i32,
    pub characters: &'static [CharacterSeed],
}

pub(crate) struct ChannelSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub shows: &'static [ShowSeed],
}

#[rustfmt::skip]
pub(crate) const DEMO_CATALOG: &[ChannelSeed] = &[
    ChannelSeed {
        name: "Action Network",
        description: "High-octane action series and explosive adventures",
        shows: &[
            ShowSeed {
                title: "Strike Force",
                description: "Elite operatives take on global threats in this high-stakes action series",
                year: 2023,
                characters: &[
                    CharacterSeed { name: "Jack Reeves", role: "Team Leader", description: "Former Navy SEAL with unmatched tactical expertise" },
                    CharacterSeed { name: "Maya Chen", role: "Tech Specialist", description: "Brilliant hacker and cyber warfare expert" },
                    CharacterSeed { name: "Carlos Rivera", role: "Weapons Expert", description: "Master of all firearms and explosives" },
                    CharacterSeed { name: "Sarah Blake", role: "Intelligence Officer", description: "CIA analyst with photographic memory" },
                ],
            },
            ShowSeed {
                title: "Highway Pursuit",
                description: "Fast cars and dangerous chases across the American highway system",
                year: 2024,
                characters: &[],
            },
            ShowSeed {
                title: "Urban Warriors",
                description: "Street fighters defend their neighborhood from organized crime",
                year: 2022,
                characters: &[],
            },
        ],
    },
    ChannelSeed {
        name: "Bright Comedy",
        description: "Laugh-out-loud comedies and sitcoms for every mood",
        shows: &[
            ShowSeed {
                title: "Coffee Shop Chronicles",
                description: "A quirky barista navigates life and love in a Brooklyn café",
                year: 2023,
                characters: &[
                    CharacterSeed { name: "Emma Walsh", role: "Lead Barista", description: "Aspiring artist balancing creativity and rent" },
                    CharacterSeed { name: "Marcus Johnson", role: "Regular Customer", description: "Writer who lives for caffeine and conversation" },
                    CharacterSeed { name: "Zoe Park", role: "Shop Owner", description: "Former corporate executive who left it all for coffee" },
                    CharacterSeed { name: "Tyler Brooks", role: "New Barista", description: "Music student working his way through college" },
                    CharacterSeed { name: "Rachel Green", role: "Customer", description: "Social media influencer and coffee connoisseur" },
                ],
            },
            ShowSeed {
                title: "The Roommate Experiment",
                description: "Four strangers become unlikely friends in a shared apartment",
                year: 2024,
                characters: &[],
            },
            ShowSeed {
                title: "Office Antics",
                description: "Workplace comedy about a dysfunctional marketing team",
                year: 2022,
                characters: &[],
            },
            ShowSeed {
                title: "Family Matters Plus",
                description: "Extended family chaos meets modern life in this heartwarming sitcom",
                year: 2023,
                characters: &[],
            },
        ],
    },
    ChannelSeed {
        name: "Crime Central",
        description: "Gripping crime dramas and detective mysteries",
        shows: &[
            ShowSeed {
                title: "Detective Files",
                description: "Veteran detective solves cold cases with cutting-edge forensics",
                year: 2023,
                characters: &[
                    CharacterSeed { name: "Detective Morgan Hayes", role: "Lead Detective", description: "Veteran investigator haunted by an unsolved case" },
                    CharacterSeed { name: "Dr. Lisa Park", role: "Forensic Specialist", description: "Medical examiner with unconventional methods" },
                    CharacterSeed { name: "Officer James Wilson", role: "Junior Detective", description: "Eager rookie with natural investigative instincts" },
                    CharacterSeed { name: "Captain Sandra Martinez", role: "Police Captain", description: "Tough but fair leader of the homicide division" },
                ],
            },
            ShowSeed {
                title: "City of Shadows",
                description: "Noir-inspired crime drama set in a corrupt metropolis",
                year: 2024,
                characters: &[],
            },
            ShowSeed {
                title: "The Cartel",
                description: "Inside look at the drug trade from both sides of the law",
                year: 2022,
                characters: &[],
            },
        ],
    },
    ChannelSeed {
        name: "Drama District",
        description: "Powerful dramatic series with compelling narratives",
        shows: &[
            ShowSeed {
                title: "Broken Trust",
                description: "A family empire crumbles under the weight of betrayal and secrets",
                year: 2023,
                characters: &[],
            },
            ShowSeed {
                title: "Hospital Hearts",
                description: "Medical drama following the lives of doctors and nurses",
                year: 2024,
                characters: &[],
            },
            ShowSeed {
                title: "The Advocate",
                description: "Passionate lawyer fights for justice in a broken legal system",
                year: 2023,
                characters: &[],
            },
            ShowSeed {
                title: "Coastal Lives",
                description: "Interconnected stories of residents in a small beach town",
                year: 2022,
                characters: &[],
            },
        ],
    },
    ChannelSeed {
        name: "Epic Tales",
        description: "Fantasy epics and legendary storytelling",
        shows: &[
            ShowSeed {
                title: "Kingdom of Ash",
                description: "Dragons, magic, and political intrigue in a medieval fantasy realm",
                year: 2023,
                characters: &[
                    CharacterSeed { name: "Queen Elara Stormborn", role: "Monarch", description: "Dragon rider and rightful heir to the throne" },
                    CharacterSeed { name: "Sir Gareth the Bold", role: "Knight", description: "Loyal warrior sworn to protect the queen" },
                    CharacterSeed { name: "Morgana Blackwood", role: "Sorceress", description: "Mysterious mage with hidden agenda" },
                    CharacterSeed { name: "Prince Daemon", role: "Antagonist", description: "Exiled prince seeking to reclaim his birthright" },
                    CharacterSeed { name: "Finn the Clever", role: "Thief", description: "Street-smart rogue with a heart of gold" },
                    CharacterSeed { name: "Elder Theron", role: "Advisor", description: "Ancient wizard and keeper of forbidden knowledge" },
                ],
            },
            ShowSeed {
                title: "The Sorcerer's Apprentice",
                description: "Young mage discovers their destiny in a world of ancient magic",
                year: 2024,
                characters: &[],
            },
            ShowSeed {
                title: "Legends Reborn",
                description: "Heroes from myth awaken in the modern world",
                year: 2023,
                characters: &[],
            },
        ],
    },
    ChannelSeed {
        name: "Future Vision",
        description: "Science fiction and futuristic adventures",
        shows: &[
            ShowSeed {
                title: "Starship Odyssey",
                description: "Deep space exploration and first contact with alien civilizations",
                year: 2023,
                characters: &[
                    CharacterSeed { name: "Captain Helena Cross", role: "Ship Commander", description: "Fearless leader on humanity's first deep space mission" },
                    CharacterSeed { name: "Dr. Aiden Wu", role: "Chief Science Officer", description: "Xenobiologist fascinated by alien life" },
                    CharacterSeed { name: "Lieutenant Zara Okonkwo", role: "Pilot", description: "Ace pilot with nerves of steel" },
                    CharacterSeed { name: "NOVA", role: "AI", description: "Ship's artificial intelligence with developing consciousness" },
                ],
            },
            ShowSeed {
                title: "Cyber Revolution",
                description: "Hackers fight corporate control in a dystopian future",
                year: 2024,
                characters: &[],
            },
            ShowSeed {
                title: "Time Paradox",
                description: "Time travelers attempt to prevent catastrophic timeline changes",
                year: 2022,
                characters: &[],
            },
        ],
    },
    ChannelSeed {
        name: "Historical Hub",
        description: "Period dramas and historical recreations",
        shows: &[
            ShowSeed {
                title: "Crown and Country",
                description: "Royal intrigue during the Tudor dynasty",
                year: 2023,
                characters: &[],
            },
            ShowSeed {
                title: "Revolutionary Spirits",
                description: "Personal stories from the American Revolution",
                year: 2024,
                characters: &[],
            },
            ShowSeed {
                title: "Silk Road Traders",
                description: "Merchant adventures along the ancient trade routes",
                year: 2023,
                characters: &[],
            },
            ShowSeed {
                title: "Victorian Mysteries",
                description: "Detective work in gaslit London streets",
                year: 2022,
                characters: &[],
            },
        ],
    },
    ChannelSeed {
        name: "Mystery Manor",
        description: "Suspenseful thrillers and whodunit mysteries",
        shows: &[
            ShowSeed {
                title: "The Vanishing",
                description: "Small town residents mysteriously disappear one by one",
                year: 2023,
                characters: &[],
            },
            ShowSeed {
                title: "Midnight Caller",
                description: "Anonymous tips lead a journalist into dangerous territory",
                year: 2024,
                characters: &[],
            },
            ShowSeed {
                title: "The Inheritance",
                description: "Family members gather for a will reading, but secrets emerge",
                year: 2023,
                characters: &[],
            },
        ],
    },
    ChannelSeed {
        name: "Reality Realm",
        description: "Reality shows and documentary series",
        shows: &[
            ShowSeed {
                title: "Extreme Survival",
                description: "Contestants test their limits in harsh wilderness conditions",
                year: 2023,
                characters: &[],
            },
            ShowSeed {
                title: "Chef's Challenge",
                description: "Aspiring chefs compete for culinary supremacy",
                year: 2024,
                characters: &[],
            },
            ShowSeed {
                title: "Home Transformers",
                description: "Design experts renovate homes with stunning results",
                year: 2023,
                characters: &[],
            },
        ],
    },
    ChannelSeed {
        name: "Youth Zone",
        description: "Teen dramas and coming-of-age stories",
        shows: &[
            ShowSeed {
                title: "High School Diaries",
                description: "Teenagers navigate friendships, romance, and identity",
                year: 2023,
                characters: &[
                    CharacterSeed { name: "Alex Martinez", role: "Protagonist", description: "New student trying to find their place" },
                    CharacterSeed { name: "Jordan Kim", role: "Best Friend", description: "Loyal friend with a secret crush" },
                    CharacterSeed { name: "Taylor Reed", role: "Popular Kid", description: "Star athlete hiding vulnerability" },
                    CharacterSeed { name: "Morgan Lee", role: "Outcast", description: "Artistic loner who challenges the status quo" },
                    CharacterSeed { name: "Ms. Rodriguez", role: "Teacher", description: "Understanding counselor who makes a difference" },
                ],
            },
            ShowSeed {
                title: "Summer Camp Secrets",
                description: "First love and self-discovery at a lakeside camp",
                year: 2024,
                characters: &[],
            },
            ShowSeed {
                title: "Band Together",
                description: "Teen musicians chase their dreams of making it big",
                year: 2023,
                characters: &[],
            },
            ShowSeed {
                title: "College Bound",
                description: "Students face the challenges of freshman year",
                year: 2024,
                characters: &[],
            },
        ],
    },
];
