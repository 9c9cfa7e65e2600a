//! Built-in roster loaded at startup when seeding is enabled.

/// Seeded in this order, so ids follow list position.
pub const DEFAULT_HERO_NAMES: &[&str] = &[
    "Dr Nice",
    "Narco",
    "Bombasto",
    "Celeritas",
    "Magneta",
    "RubberMan",
    "Dynama",
    "Dr IQ",
    "Magma",
    "Tornado",
    "Vindicate",
    "Ironside",
    "Torpedo",
    "Bionic",
    "Dynamo",
    "Mr. Miraculous",
    "Tornado",
    "Metal Man",
    "Jawbreaker",
    "Barrage",
    "Amplify",
    "Bonfire",
    "Monsoon",
    "Urchin",
    "Firefly",
    "Rubble",
    "Blaze",
    "Hurricane",
    "Slingshot",
    "Storm Surge",
    "Impenetrable",
    "Quicksand",
    "Night Watch",
    "Mastermind",
    "Captain Freedom",
    "Cannonade",
    "Bulletproof",
    "Turbine",
    "Kraken",
    "Granite",
    "Glazier",
    "MechaMan",
    "Fortitude",
    "Cast Iron",
    "Fireball",
    "Polar Bear",
    "Turbulence",
    "Mako",
    "Captain Victory",
    "Flying Falcon",
    "Blackback",
    "Tradewind",
    "Manta Ray",
    "The Rooster",
    "Megalodon",
    "Steamroller",
    "Apex",
    "Leviathan",
    "Onyx",
    "Shadowman",
    "Exodus",
    "Eagle Eye",
    "Laser Sight",
    "Titan",
    "Vigilance",
    "Volcanic Ash",
    "Jackhammer",
    "Bullseye",
    "Tarantula",
    "Shockwave",
    "Barracuda",
    "Night Howler",
    "Chromium",
];
