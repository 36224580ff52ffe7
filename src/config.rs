use crate::ship::ShipClass;

pub const BOARD_ROWS: usize = 10;
pub const BOARD_COLS: usize = 10;
pub const NUM_CLASSES: usize = 4;
pub const FLEET: [ShipClass; NUM_CLASSES] = [
    ShipClass::new("Battleship", 4, 1),
    ShipClass::new("Cruiser", 3, 2),
    ShipClass::new("Destroyer", 2, 3),
    ShipClass::new("Submarine", 1, 3),
];

/// Number of ships in the standard fleet.
pub const NUM_SHIPS: usize = 1 + 2 + 3 + 3;

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 3;

/// Random draws allowed per ship before placement gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Look up a fleet class by name, ignoring ASCII case.
pub fn ship_class(name: &str) -> Option<&'static ShipClass> {
    FLEET.iter().find(|class| class.name().eq_ignore_ascii_case(name))
}
