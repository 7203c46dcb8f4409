//! Constants for address validation.

/// Maximum length of any single part, in bytes.
///
/// Applies to the local part and the resource part as given, and to the
/// domain part after normalization.
pub const MAX_PART_LENGTH: usize = 1023;

/// Separator between the local part and the domain part.
pub const LOCAL_SEPARATOR: char = '@';

/// Separator between the domain part and the resource part.
pub const RESOURCE_SEPARATOR: char = '/';

/// Characters that may not appear in a local part.
pub const LOCAL_PART_FORBIDDEN_CHARS: [char; 8] = ['"', '&', '\'', '/', ':', '<', '>', '@'];
