//! Bundled text adventure catalog.

use std::path::Path;

use crate::infrastructure::ports::GameCatalogPort;

/// Story files shipped with the interpreter, in catalog order.
pub const BUNDLED_GAMES: &[&str] = &[
    "905.z5",
    "acorncourt.z5",
    "advent.z5",
    "adventureland.z5",
    "afflicted.z8",
    "anchor.z8",
    "awaken.z5",
    "balances.z5",
    "ballyhoo.z3",
    "curses.z5",
    "cutthroat.z3",
    "deephome.z5",
    "detective.z5",
    "dragon.z5",
    "enchanter.z3",
    "enter.z5",
    "gold.z5",
    "hhgg.z3",
    "hollywood.z3",
    "huntdark.z5",
    "infidel.z3",
    "inhumane.z5",
    "jewel.z5",
    "karn.z5",
    "lgop.z3",
    "library.z5",
    "loose.z5",
    "lostpig.z8",
    "ludicorp.z5",
    "lurking.z3",
    "moonlit.z5",
    "murdac.z5",
    "night.z5",
    "omniquest.z5",
    "partyfoul.z8",
    "pentari.z5",
    "planetfall.z3",
    "plundered.z3",
    "reverb.z5",
    "seastalker.z3",
    "sherlock.z5",
    "snacktime.z8",
    "sorcerer.z3",
    "spellbrkr.z3",
    "spirit.z5",
    "temple.z5",
    "theatre.z5",
    "trinity.z4",
    "tryst205.z5",
    "weapon.z5",
    "wishbringer.z3",
    "yomomma.z8",
    "zenon.z5",
    "zork1.z5",
    "zork2.z5",
    "zork3.z5",
    "ztuu.z5",
];

/// Strip the story file extension: `zork2.z5` → `zork2`.
pub fn game_stem(file: &str) -> &str {
    Path::new(file)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file)
}

#[derive(Debug, Clone, Default)]
pub struct BundledGameCatalog;

impl BundledGameCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl GameCatalogPort for BundledGameCatalog {
    fn games(&self) -> Vec<String> {
        BUNDLED_GAMES.iter().map(|game| game.to_string()).collect()
    }
}
