//! Static lookup tables, loaded once into each command set at startup.

/// Game aliases (lowercase) and the guild role each one stands for.
///
/// Order matters: the word-boundary pass takes the first alias that matches.
pub const ALIASES: &[(&str, &str)] = &[
    ("7dtd", "7 Days To Die"),
    ("ark", "ARK"),
    ("aoe", "Age of Empires"),
    ("amongus", "Among Us"),
    ("acnh", "Animal Crossing"),
    ("apex", "Apex Legends"),
    ("assetto", "Assetto Corsa"),
    ("b4b", "Back 4 Blood"),
    ("bf", "Battlefield"),
    ("bg3", "Baldur's Gate 3"),
    ("cod", "Call of Duty"),
    ("cw", "Content Warning"),
    ("dayz", "DayZ"),
    ("dbd", "Dead by Daylight"),
    ("drg", "Deep Rock Galactic"),
    ("demo", "Demonologist"),
    ("d2", "Destiny 2"),
    ("diablo", "Diablo"),
    ("dirt", "DiRT"),
    ("ddv", "Disney Dreamlight Valley"),
    ("dnd", "Dungeons&Dragons"),
    ("d&d", "Dungeons&Dragons"),
    ("dungeons", "Dungeons&Dragons"),
    ("biweekly", "D&D Biweekly Players"),
    ("dragonage", "Dragon Age"),
    ("dyinglight", "Dying Light"),
    ("eldenring", "Elden Ring"),
    ("eso", "Elder Scrolls"),
    ("elite", "Elite Dangerous"),
    ("enshrouded", "Enshrouded"),
    ("eft", "Escape from Tarkov"),
    ("tarkov", "Escape from Tarkov"),
    ("fallout", "Fallout"),
    ("farmingsim", "Farming sim"),
    ("ffxiv", "Final Fantasy XIV"),
    ("descendant", "The First Descendant"),
    ("fivem", "FiveM"),
    ("honor", "For Honor"),
    ("fn", "Fortnite"),
    ("forza", "Forza"),
    ("genshin", "Genshin Impact"),
    ("recon", "Ghost Recon"),
    ("goose", "Goose Goose Duck"),
    ("gta", "Grand Theft Auto V"),
    ("halo", "Halo"),
    ("hll", "Hell Let Loose"),
    ("helldivers", "Helldivers 2"),
    ("hogwarts", "Hogwarts Legacy"),
    ("jackbox", "Jackbox"),
    ("lol", "League of Legends"),
    ("lethal", "Lethal Company"),
    ("lockdown", "Lockdown Protocol"),
    ("lostark", "Lost Ark"),
    ("mtg", "Magic: The Gathering"),
    ("mariokart", "Mario Kart"),
    ("marvel", "Marvel Rivals"),
    ("mc", "Minecraft"),
    ("monsterhunter", "Monster Hunter"),
    ("mk", "Mortal Kombat"),
    ("nms", "No Man's Sky"),
    ("oncehuman", "Once Human"),
    ("ow", "Overwatch"),
    ("ow2", "Overwatch"),
    ("palia", "Palia"),
    ("palworld", "Palworld"),
    ("poe", "Path of Exile"),
    ("pavlov", "Pavlov"),
    ("phasmophobia", "Phasmophobia"),
    ("pubg", "Player Unknown Battlegrounds"),
    ("pokemon", "Pokémon"),
    ("raft", "Raft"),
    ("rainbow", "Rainbow Six"),
    ("r6", "Rainbow Six"),
    ("ron", "Ready Or Not"),
    ("rdo", "Red Dead: Online"),
    ("repo", "R.E.P.O"),
    ("rl", "Rocket League"),
    ("runescape", "RuneScape"),
    ("rust", "Rust"),
    ("satisfactory", "Satisfactory"),
    ("sot", "Sea of Thieves"),
    ("sims", "The Sims"),
    ("sm2", "Space Marines 2"),
    ("sc", "Star Citizen"),
    ("stardew", "Stardew Valley"),
    ("starfield", "Starfield"),
    ("ssb", "Super Smash Bros."),
    ("division", "The Division"),
    ("tinytina", "Tiny Tina's Wonderlands"),
    ("trucksim", "Truck Simulator"),
    ("valheim", "Valheim"),
    ("val", "Valorant"),
    ("warframe", "Warframe"),
    ("warthunder", "War Thunder"),
    ("wot", "World of Tanks"),
    ("wow", "World of Warcraft"),
];

/// Role names allowed to run guidance commands.
pub const ALLOWED_ROLES: &[&str] = &[
    "Game Server Team",
    "Advisors",
    "Wardens",
    "The Brute Squad",
    "Sentinels",
    "Community Manager - Helldivers",
    "Community Manager - Book Club",
    "Community Manager - Call of Duty",
    "Community Manager - D&D",
    "Community Manager - World of Warcraft",
    "Community Manager - Minecraft",
    "Skye",
    "Librarian Raccoon",
    "Zara",
    "BadgerSnacks",
    "Donnie",
    "Captain Sawbones",
    "Captain Soulo",
];

/// Designated channel of each game role with its own channel.
pub const CHANNEL_ROUTES: &[(&str, u64)] = &[
    ("Escape from Tarkov", 1325558852120350863),
    ("Hell Let Loose", 1325565264246603859),
    ("Rainbow Six", 1325558740086161428),
    ("Ready Or Not", 1325558905907970199),
    ("War Thunder", 1325565211884781588),
    ("Magic: The Gathering", 1065493485714686003),
    ("Pokémon", 1065621451417337956),
    ("Table-Top Simulator", 1217529197594021889),
    ("Warhammer 40k", 1217529421863456928),
    ("Diablo", 1123047882669436958),
    ("Path of Exile", 1205575608231530506),
    ("Path of Exile 2", 1310386526093578251),
    ("Elden Ring", 1315179628993839155),
    ("Baldur's Gate 3", 1315180707685073028),
    ("Monster Hunter", 1315178720364859402),
    ("Final Fantasy", 1328766811671498833),
    ("Assetto Corsa", 1315312906178396180),
    ("League of Legends", 1308589894268092476),
    ("Dota 2", 1308590005911814224),
    ("Smite", 1308590072689590374),
    ("Marvel Rivals", 1318214983670042707),
    ("Overwatch", 1318215028494831697),
    ("Phasmophobia", 1328029591062839376),
    ("R.E.P.O", 1351009382154109018),
    ("Wild Rift", 1316230560946982942),
    ("iRacing", 1328799846341148672),
    ("Fortnite", 1316416079333167149),
    ("Forza", 1328799912892170260),
];

/// Client link that opens the server's Channels & Roles page.
pub const CHANNELS_AND_ROLES_LINK: &str = "<id:customize>";

pub const DEFAULT_BASE_LINK: &str = "https://wiki.mulveycreations.com";
pub const BETA_BASE_LINK: &str = "https://wiki.parentsthatga.me";
