//! Pin identity tables for the Orange Pi One.
//!
//! Every pin is reachable by two names: its SoC port label (`PA13`) and its
//! header position (`gpio1p8`). Both resolve to the same [`PinId`], so the
//! simulator keeps one state entry per physical pin.

use serde::Serialize;
use std::fmt;

/// Numeric pin identifier shared by both naming schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PinId(pub u8);

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for PinId {
    fn from(raw: u8) -> Self {
        PinId(raw)
    }
}

/// Immutable name -> id table for one naming scheme.
#[derive(Debug, Clone, Copy)]
pub struct PinTable {
    entries: &'static [(&'static str, u8)],
}

impl PinTable {
    pub const fn new(entries: &'static [(&'static str, u8)]) -> Self {
        Self { entries }
    }

    /// Exact, case-sensitive name lookup.
    pub fn lookup(&self, name: &str) -> Option<PinId> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|&(_, id)| PinId(id))
    }

    pub fn contains(&self, pin: PinId) -> bool {
        self.entries.iter().any(|&(_, id)| id == pin.0)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(name, _)| name)
    }

    pub fn ids(&self) -> impl Iterator<Item = PinId> + '_ {
        self.entries.iter().map(|&(_, id)| PinId(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both naming schemes of one board. The port table wins when a name
/// appears in both.
#[derive(Debug, Clone, Copy)]
pub struct BoardLayout {
    pub name: &'static str,
    pub port: PinTable,
    pub connector: PinTable,
}

impl BoardLayout {
    pub fn is_known(&self, pin: PinId) -> bool {
        self.port.contains(pin) || self.connector.contains(pin)
    }

    pub fn lookup(&self, name: &str) -> Option<PinId> {
        self.port.lookup(name).or_else(|| self.connector.lookup(name))
    }
}

pub const PORT_PINS: &[(&str, u8)] = &[
    ("PA1", 11),
    ("PA0", 13),
    ("PA3", 15),
    ("PC0", 19),
    ("PC1", 21),
    ("PC2", 23),
    ("PA19", 27),
    ("PA7", 29),
    ("PA8", 31),
    ("PA9", 33),
    ("PA10", 35),
    ("PA20", 37),
    ("PA13", 8),
    ("PA14", 10),
    ("PD14", 12),
    ("PC4", 16),
    ("PC7", 18),
    ("PA2", 22),
    ("PC3", 24),
    ("PA21", 26),
    ("PA18", 28),
    ("PG8", 32),
    ("PG9", 36),
    ("PG6", 38),
    ("PG7", 40),
    // System LEDs
    ("POWER_LED", 1),
    ("STATUS_LED", 2),
];

pub const CONNECTOR_PINS: &[(&str, u8)] = &[
    ("gpio1p11", 11),
    ("gpio1p13", 13),
    ("gpio1p15", 15),
    ("gpio1p19", 19),
    ("gpio1p21", 21),
    ("gpio1p23", 23),
    ("gpio1p27", 27),
    ("gpio1p29", 29),
    ("gpio1p31", 31),
    ("gpio1p33", 33),
    ("gpio1p35", 35),
    ("gpio1p37", 37),
    ("gpio1p8", 8),
    ("gpio1p10", 10),
    ("gpio1p12", 12),
    ("gpio1p16", 16),
    ("gpio1p18", 18),
    ("gpio1p22", 22),
    ("gpio1p24", 24),
    ("gpio1p26", 26),
    ("gpio1p28", 28),
    ("gpio1p32", 32),
    ("gpio1p36", 36),
    ("gpio1p38", 38),
    ("gpio1p40", 40),
    // System LEDs
    ("LEDp1", 1),
    ("LEDp2", 2),
];

pub const ORANGE_PI_ONE: BoardLayout = BoardLayout {
    name: "Orange Pi One",
    port: PinTable::new(PORT_PINS),
    connector: PinTable::new(CONNECTOR_PINS),
};
