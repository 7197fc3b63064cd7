// Mass
pub const KG_TO_LB: f64 = 2.2046226218488; // kilograms to pounds-mass
pub const LB_TO_KG: f64 = 1.0 / KG_TO_LB; // pounds-mass to kilograms

// Gravity
pub const GRAVITY_EARTH: f64 = 9.80665; // m/s² at Earth's surface

// Force
pub const NEWTON_TO_LBF: f64 = 0.224808943; // newtons to pounds-force

// Volume
pub const LITER_TO_GALLON: f64 = 0.264172; // liters to US gallons
pub const LITER_TO_FT3: f64 = 0.0353147; // liters to ft³
pub const LITER_TO_M3: f64 = 0.001; // liters to m³

// Power
pub const WATT_TO_BTU_PER_HOUR: f64 = 3.41214163; // watts to BTU/hr
pub const KILOWATT_TO_HORSEPOWER: f64 = 1.34102209; // kilowatts to horsepower
