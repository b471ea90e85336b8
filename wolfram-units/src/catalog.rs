//! Built-in unit table, one slice per physical quantity
//!
//! Each slice lists spelled-out names (singular then plural) followed by
//! symbols and abbreviations. Strings are matched case-sensitively, so `"L"`
//! and `"l"` are distinct entries.

const LENGTH: &[&str] = &[
    "meter", "meters", "foot", "feet", "inch", "inches", "centimeter", "centimeters",
    "kilometer", "kilometers", "mile", "miles", "yard", "yards", "millimeter",
    "millimeters", "micrometer", "micrometers", "nanometer", "nanometers", "picometer",
    "picometers", "nautical_mile", "nautical_miles", "statute_mile", "statute_miles",
    "fathom", "fathoms", "furlong", "furlongs", "chain", "chains", "flight_level",
    "flight_levels",
    // symbols
    "m", "ft", "in", "cm", "km", "mi", "yd", "mm", "μm", "nm", "pm", "nmi", "sm", "ftm",
    "FL",
];

const WEIGHT: &[&str] = &[
    "kilogram", "kilograms", "gram", "grams", "ounce", "ounces", "ton", "tons", "stone",
    "stones", "milligram", "milligrams", "microgram", "micrograms", "metric_ton",
    "metric_tons", "short_ton", "short_tons", "long_ton", "long_tons", "grain", "grains",
    "carat", "carats", "troy_ounce", "troy_ounces",
    // symbols
    "kg", "lb", "oz", "t", "st", "mg", "μg", "tonne",
];

const TEMPERATURE: &[&str] = &[
    "celsius", "fahrenheit", "kelvin", "rankine", "degree_celsius", "degrees_celsius",
    "degree_fahrenheit", "degrees_fahrenheit",
    // symbols
    "K", "R", "°C", "°F", "°K", "°R",
];

const TIME: &[&str] = &[
    "second", "seconds", "minute", "minutes", "hour", "hours", "day", "days", "week",
    "weeks", "month", "months", "year", "years", "millisecond", "milliseconds",
    "microsecond", "microseconds", "nanosecond", "nanoseconds", "decade", "decades",
    "century", "centuries", "millennium", "millennia",
    // symbols
    "s", "min", "h", "d", "w", "mo", "yr", "ms", "μs", "ns",
];

const VOLUME: &[&str] = &[
    "liter", "liters", "gallon", "gallons", "quart", "quarts", "pint", "pints", "cup",
    "cups", "fluid_ounce", "fluid_ounces", "milliliter", "milliliters", "cubic_meter",
    "cubic_meters", "cubic_foot", "cubic_feet", "cubic_inch", "cubic_inches", "barrel",
    "barrels", "imperial_gallon", "imperial_gallons", "us_gallon", "us_gallons",
    "tablespoon", "tablespoons", "teaspoon", "teaspoons", "cubic_centimeter",
    "cubic_centimeters",
    // symbols
    "L", "l", "qt", "pt", "fl_oz", "ml", "m³", "ft³", "in³", "bbl", "tbsp", "tsp", "cc",
    "cm³",
];

const AREA: &[&str] = &[
    "square_meter", "square_meters", "square_foot", "square_feet", "acre", "acres",
    "hectare", "hectares", "square_inch", "square_inches", "square_mile", "square_miles",
    "square_kilometer", "square_kilometers", "square_centimeter", "square_centimeters",
    "square_millimeter", "square_millimeters", "square_yard", "square_yards",
    // symbols
    "m²", "ft²", "ac", "ha", "in²", "mi²", "km²", "cm²", "mm²", "yd²",
];

const PRESSURE: &[&str] = &[
    "pascal", "pascals", "bar", "bars", "atmosphere", "atmospheres", "psi", "torr",
    "torrs", "mmHg", "inHg", "millibar", "millibars", "kilopascal", "kilopascals",
    "megapascal", "megapascals", "hectopascal", "hectopascals",
    // symbols
    "Pa", "atm", "mbar", "kPa", "MPa", "hPa",
];

const ENERGY: &[&str] = &[
    "joule", "joules", "calorie", "calories", "kilowatt_hour", "kilowatt_hours", "btu",
    "btus", "erg", "ergs", "electron_volt", "electron_volts", "kilojoule", "kilojoules",
    "megajoule", "megajoules", "foot_pound", "foot_pounds", "therm", "therms",
    "kilocalorie", "kilocalories",
    // symbols
    "J", "cal", "kWh", "BTU", "eV", "kJ", "MJ", "ft·lb", "kcal",
];

const POWER: &[&str] = &[
    "watt", "watts", "horsepower", "kilowatt", "kilowatts", "btu_per_hour",
    "foot_pound_per_second", "metric_horsepower", "electrical_horsepower", "megawatt",
    "megawatts", "gigawatt", "gigawatts",
    // symbols
    "W", "hp", "kW", "BTU/h", "ft·lb/s", "MW", "GW",
];

const SPEED: &[&str] = &[
    "meter_per_second", "meters_per_second", "kilometer_per_hour", "kilometers_per_hour",
    "mile_per_hour", "miles_per_hour", "knot", "knots", "foot_per_second",
    "feet_per_second", "feet_per_minute", "mach", "speed_of_light", "speed_of_sound",
    // symbols
    "m/s", "km/h", "mph", "kn", "kt", "ft/s", "fps", "fpm", "c",
];

const ANGLE: &[&str] = &[
    "degree", "degrees", "radian", "radians", "gradian", "gradians", "milliradian",
    "milliradians", "arcsecond", "arcseconds", "arcminute", "arcminutes", "turn", "turns",
    "revolution", "revolutions",
    // symbols
    "°", "deg", "rad", "grad", "mrad", "arcsec", "arcmin", "rev",
];

const ELECTRICAL_CURRENT: &[&str] = &[
    "ampere", "amperes", "milliampere", "milliamperes", "microampere", "microamperes",
    "kiloampere", "kiloamperes", "nanoampere", "nanoamperes",
    // symbols
    "A", "mA", "μA", "kA", "nA",
];

const VOLTAGE: &[&str] = &[
    "volt", "volts", "millivolt", "millivolts", "microvolt", "microvolts", "kilovolt",
    "kilovolts", "megavolt", "megavolts",
    // symbols
    "V", "mV", "μV", "kV", "MV",
];

const ELECTRICAL_RESISTANCE: &[&str] = &[
    "ohm", "ohms", "milliohm", "milliohms", "kiloohm", "kiloohms", "megaohm", "megaohms",
    "gigaohm", "gigaohms",
    // symbols
    "Ω", "mΩ", "kΩ", "MΩ", "GΩ",
];

const ELECTRICAL_CAPACITANCE: &[&str] = &[
    "farad", "farads", "microfarad", "microfarads", "nanofarad", "nanofarads", "picofarad",
    "picofarads", "millifarad", "millifarads",
    // symbols
    "F", "μF", "nF", "pF", "mF",
];

const ELECTRICAL_CHARGE: &[&str] = &[
    "coulomb", "coulombs", "millicoulomb", "millicoulombs", "microcoulomb",
    "microcoulombs", "nanocoulomb", "nanocoulombs", "electron_charge",
    // symbols
    "C", "mC", "μC", "nC", "e",
];

const ELECTRICAL_CONDUCTANCE: &[&str] = &[
    "siemens", "millisiemens", "microsiemens", "kilosiemens",
    // symbols
    "S", "mS", "μS", "kS",
];

const ACCELERATION: &[&str] = &[
    "meter_per_second_squared", "meters_per_second_squared", "foot_per_second_squared",
    "feet_per_second_squared", "gal", "galileo", "galileos", "gravity",
    // symbols
    "m/s²", "ft/s²", "g",
];

const FORCE: &[&str] = &[
    "newton", "newtons", "kilonewton", "kilonewtons", "meganewton", "meganewtons", "dyne",
    "dynes", "pound_force", "pounds_force", "kilogram_force", "kilograms_force",
    "ton_force", "tons_force", "ounce_force", "ounces_force",
    // symbols
    "N", "kN", "MN", "dyn", "lbf", "kgf", "tonf", "ozf",
];

const MOMENTUM: &[&str] = &[
    "kilogram_meter_per_second", "kilogram_meters_per_second", "newton_second",
    "newton_seconds", "pound_foot_per_second", "pound_feet_per_second",
    // symbols
    "kg⋅m/s", "N⋅s", "lb⋅ft/s",
];

const ANGULAR_ACCELERATION: &[&str] = &[
    "radian_per_second_squared", "radians_per_second_squared", "degree_per_second_squared",
    "degrees_per_second_squared", "revolution_per_second_squared",
    "revolutions_per_second_squared",
    // symbols
    "rad/s²", "deg/s²", "rev/s²",
];

const MAGNETIC_FLUX: &[&str] = &[
    "weber", "webers", "milliweber", "milliwebers", "microweber", "microwebers", "maxwell",
    "maxwells",
    // symbols
    "Wb", "mWb", "μWb", "Mx",
];

const MAGNETIC_FLUX_DENSITY: &[&str] = &[
    "tesla", "teslas", "millitesla", "milliteslas", "microtesla", "microteslas",
    "nanotesla", "nanoteslas", "gauss", "kilogauss",
    // symbols
    "T", "mT", "μT", "nT", "G", "kG",
];

const INDUCTANCE: &[&str] = &[
    "henry", "henries", "millihenry", "millihenries", "microhenry", "microhenries",
    "nanohenry", "nanohenries", "picohenry", "picohenries",
    // symbols
    "H", "mH", "μH", "nH", "pH",
];

const ELECTRIC_FIELD: &[&str] = &[
    "volt_per_meter", "volts_per_meter", "newton_per_coulomb", "newtons_per_coulomb",
    "kilovolt_per_meter", "kilovolts_per_meter",
    // symbols
    "V/m", "N/C", "kV/m",
];

const RESISTIVITY: &[&str] = &[
    "ohm_meter", "ohm_meters", "microohm_meter", "microohm_meters", "milliohm_meter",
    "milliohm_meters",
    // symbols
    "Ω⋅m", "μΩ⋅m", "mΩ⋅m",
];

const CURRENCY: &[&str] = &[
    "dollar", "dollars", "euro", "euros", "yen", "pound", "pounds", "yuan", "franc",
    "francs", "ruble", "rubles", "rupee", "rupees", "won", "peso", "pesos", "real",
    "reals", "rand", "krona", "kronor", "shekel", "shekels", "dinar", "dinars", "dirham",
    "dirhams",
    // symbols
    "USD", "EUR", "JPY", "GBP", "CNY", "CHF", "RUB", "INR", "KRW", "MXN", "BRL", "ZAR",
    "SEK", "ILS", "JOD", "AED", "$", "€", "¥", "£", "₹", "₽", "₩", "₨", "＄",
];

const SPECIFIC_HEAT: &[&str] = &[
    "joule_per_kilogram_kelvin", "joules_per_kilogram_kelvin", "calorie_per_gram_celsius",
    "calories_per_gram_celsius", "btu_per_pound_fahrenheit", "btus_per_pound_fahrenheit",
    // symbols
    "J/(kg⋅K)", "cal/(g⋅°C)", "BTU/(lb⋅°F)",
];

const THERMAL_CONDUCTIVITY: &[&str] = &[
    "watt_per_meter_kelvin", "watts_per_meter_kelvin",
    "calorie_per_second_centimeter_celsius", "calories_per_second_centimeter_celsius",
    // symbols
    "W/(m⋅K)", "cal/(s⋅cm⋅°C)",
];

const FREQUENCY: &[&str] = &[
    "hertz", "kilohertz", "megahertz", "gigahertz", "terahertz", "cycle_per_second",
    "cycles_per_second",
    // symbols
    "Hz", "kHz", "MHz", "GHz", "THz", "cps",
];

const ANGULAR_VELOCITY: &[&str] = &[
    "radian_per_second", "radians_per_second", "degree_per_second", "degrees_per_second",
    "revolution_per_minute", "revolutions_per_minute", "revolution_per_second",
    "revolutions_per_second",
    // symbols
    "rad/s", "deg/s", "rpm", "rps",
];

const DENSITY: &[&str] = &[
    "kilogram_per_cubic_meter", "kilograms_per_cubic_meter", "gram_per_cubic_centimeter",
    "grams_per_cubic_centimeter", "pound_per_cubic_foot", "pounds_per_cubic_foot",
    "gram_per_milliliter", "grams_per_milliliter", "kilogram_per_liter",
    "kilograms_per_liter", "ounce_per_cubic_inch", "ounces_per_cubic_inch",
    // symbols
    "kg/m³", "g/cm³", "lb/ft³", "g/mL", "kg/L", "oz/in³",
];

const VISCOSITY: &[&str] = &[
    "pascal_second", "pascal_seconds", "poise", "centipoise", "stoke", "stokes",
    "centistoke", "centistokes",
    // symbols
    "Pa⋅s", "P", "cP", "St", "cSt",
];

const TORQUE: &[&str] = &[
    "newton_meter", "newton_meters", "foot_pound_torque", "foot_pounds_torque",
    "inch_pound", "inch_pounds", "kilogram_force_meter", "kilogram_force_meters",
    "dyne_centimeter", "dyne_centimeters",
    // symbols
    "N⋅m", "in⋅lb", "kgf⋅m", "dyn⋅cm",
];

const FLOW_RATE: &[&str] = &[
    "cubic_meter_per_second", "cubic_meters_per_second", "liter_per_minute",
    "liters_per_minute", "gallon_per_minute", "gallons_per_minute",
    "cubic_foot_per_minute", "cubic_feet_per_minute", "barrel_per_day", "barrels_per_day",
    "liter_per_second", "liters_per_second",
    // symbols
    "m³/s", "L/min", "gpm", "cfm", "bbl/day", "L/s",
];

const CONCENTRATION: &[&str] = &[
    "mole_per_liter", "moles_per_liter", "gram_per_liter", "grams_per_liter",
    "milligram_per_liter", "milligrams_per_liter", "part_per_million", "parts_per_million",
    "part_per_billion", "parts_per_billion", "percent", "percent_by_weight",
    "percent_by_volume",
    // symbols
    "mol/L", "M", "g/L", "mg/L", "ppm", "ppb", "%", "wt%", "vol%",
];

const LUMINOUS_INTENSITY: &[&str] = &[
    "candela", "candelas", "lumen", "lumens", "lux", "foot_candle", "foot_candles",
    "candela_per_square_meter", "candela_per_square_foot", "lambert", "lamberts",
    // symbols
    "cd", "lm", "lx", "fc", "cd/m²", "cd/ft²",
];

const RADIOACTIVITY: &[&str] = &[
    "becquerel", "becquerels", "curie", "curies", "millicurie", "millicuries",
    "microcurie", "microcuries", "sievert", "sieverts", "millisievert", "millisieverts",
    "gray", "grays", "rads", "rems", "roentgen", "roentgens",
    // symbols
    "Bq", "Ci", "mCi", "μCi", "Sv", "mSv", "Gy",
];

const SURFACE_TENSION: &[&str] = &[
    "newton_per_meter", "newtons_per_meter", "dyne_per_centimeter", "dynes_per_centimeter",
    "millinewton_per_meter", "millinewtons_per_meter",
    // symbols
    "N/m", "dyn/cm", "mN/m",
];

const MOMENT_OF_INERTIA: &[&str] = &[
    "kilogram_square_meter", "kilogram_square_meters", "gram_square_centimeter",
    "gram_square_centimeters", "pound_square_foot", "pound_square_feet",
    "ounce_square_inch", "ounce_square_inches",
    // symbols
    "kg⋅m²", "g⋅cm²", "lb⋅ft²", "oz⋅in²",
];

/// Every built-in category in registration order.
pub(crate) const BUILTIN: &[(&str, &[&str])] = &[
    ("length", LENGTH),
    ("weight", WEIGHT),
    ("temperature", TEMPERATURE),
    ("time", TIME),
    ("volume", VOLUME),
    ("area", AREA),
    ("pressure", PRESSURE),
    ("energy", ENERGY),
    ("power", POWER),
    ("speed", SPEED),
    ("angle", ANGLE),
    ("electrical_current", ELECTRICAL_CURRENT),
    ("voltage", VOLTAGE),
    ("electrical_resistance", ELECTRICAL_RESISTANCE),
    ("electrical_capacitance", ELECTRICAL_CAPACITANCE),
    ("electrical_charge", ELECTRICAL_CHARGE),
    ("electrical_conductance", ELECTRICAL_CONDUCTANCE),
    ("acceleration", ACCELERATION),
    ("force", FORCE),
    ("momentum", MOMENTUM),
    ("angular_acceleration", ANGULAR_ACCELERATION),
    ("magnetic_flux", MAGNETIC_FLUX),
    ("magnetic_flux_density", MAGNETIC_FLUX_DENSITY),
    ("inductance", INDUCTANCE),
    ("electric_field", ELECTRIC_FIELD),
    ("resistivity", RESISTIVITY),
    ("currency", CURRENCY),
    ("specific_heat", SPECIFIC_HEAT),
    ("thermal_conductivity", THERMAL_CONDUCTIVITY),
    ("frequency", FREQUENCY),
    ("angular_velocity", ANGULAR_VELOCITY),
    ("density", DENSITY),
    ("viscosity", VISCOSITY),
    ("torque", TORQUE),
    ("flow_rate", FLOW_RATE),
    ("concentration", CONCENTRATION),
    ("luminous_intensity", LUMINOUS_INTENSITY),
    ("radioactivity", RADIOACTIVITY),
    ("surface_tension", SURFACE_TENSION),
    ("moment_of_inertia", MOMENT_OF_INERTIA),
];
