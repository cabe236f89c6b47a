/// Smallest day accepted by the validated setters
pub const MIN_DAY: i32 = 1;
/// Largest day accepted by the validated setters (no per-month check)
pub const MAX_DAY: i32 = 31;

/// Smallest month accepted by the validated setters (January)
pub const MIN_MONTH: i32 = 1;
/// Largest month accepted by the validated setters (December)
pub const MAX_MONTH: i32 = 12;

/// Day of the shared default before anyone changes it
pub const INITIAL_DEFAULT_DAY: i32 = 7;
/// Month of the shared default before anyone changes it
pub const INITIAL_DEFAULT_MONTH: i32 = 3;
/// Year of the shared default before anyone changes it
pub const INITIAL_DEFAULT_YEAR: i32 = 2005;

/// Constructor argument meaning "take this field from the default"
pub const UNSET_SENTINEL: i32 = 0;

/// Separator between day, month and year in the text form (`7/3/2005`)
pub const FIELD_SEPARATOR: char = '/';
