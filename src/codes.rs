//! SBML validation error code identifiers
//!
//! Codes are namespaced strings such as `CORE_20906`. The registry that
//! allocates and documents them lives with the validator; this crate treats
//! the code space as opaque and only needs a stable lookup key. The
//! constant modules below name the codes covered by the bundled catalogs.

use std::fmt;
use std::str::FromStr;

use crate::error::MessageError;

/// A namespaced validation error code, e.g. `CORE_20906`.
///
/// Codes are never reused across meanings; stability across SBML releases
/// is an external contract, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorCode {
    namespace: String,
    number: u32,
}

impl ErrorCode {
    /// Create a code from an uppercase namespace and a numeric code.
    pub fn new(namespace: impl Into<String>, number: u32) -> Self {
        Self {
            namespace: namespace.into(),
            number,
        }
    }

    /// Shorthand for a code in the `CORE` namespace.
    pub fn core(number: u32) -> Self {
        Self::new("CORE", number)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{:05}", self.namespace, self.number)
    }
}

impl FromStr for ErrorCode {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, digits) = s
            .rsplit_once('_')
            .ok_or_else(|| MessageError::InvalidCode(s.to_string()))?;
        let valid_namespace = !namespace.is_empty()
            && namespace
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_');
        if !valid_namespace {
            return Err(MessageError::InvalidCode(s.to_string()));
        }
        let number = digits
            .parse()
            .map_err(|_| MessageError::InvalidCode(s.to_string()))?;
        Ok(Self::new(namespace, number))
    }
}

/// Internal and file-handling codes (000xx)
pub mod internal {
    pub const UNKNOWN: u32 = 0;
    pub const OUT_OF_MEMORY: u32 = 1;
    pub const FILE_UNREADABLE: u32 = 2;
    pub const FILE_UNWRITABLE: u32 = 3;
    pub const FILE_OPERATION_ERROR: u32 = 4;
    pub const NETWORK_ACCESS_ERROR: u32 = 5;
}

/// Document structure and identifier syntax (10xxx)
pub mod syntax {
    pub const NOT_UTF8: u32 = 10101;
    pub const UNRECOGNIZED_ELEMENT: u32 = 10102;
    pub const NOT_SCHEMA_CONFORMANT: u32 = 10103;
    pub const APPLY_CI_MUST_BE_FUNCTION: u32 = 10214;
    pub const INVALID_METAID_SYNTAX: u32 = 10309;
    pub const INVALID_ID_SYNTAX: u32 = 10310;
    pub const INVALID_UNIT_ID_SYNTAX: u32 = 10311;
    pub const UNKNOWN_UNIT_REFERENCE: u32 = 10313;
}

/// Compartment consistency rules (205xx)
pub mod compartment {
    pub const ZERO_DIMENSION_SIZE: u32 = 20501;
    pub const ZERO_DIMENSION_UNITS: u32 = 20502;
    pub const ZERO_DIMENSION_CONSTANT: u32 = 20503;
    pub const UNDEFINED_OUTSIDE: u32 = 20504;
    pub const RECURSIVE_OUTSIDE: u32 = 20505;
    pub const ZERO_DIMENSION_NESTING: u32 = 20506;
    pub const INVALID_1D_UNITS: u32 = 20507;
    pub const INVALID_2D_UNITS: u32 = 20508;
    pub const INVALID_3D_UNITS: u32 = 20509;
    pub const UNDEFINED_COMPARTMENT_TYPE: u32 = 20510;
    pub const NO_UNITS_1D: u32 = 20511;
    pub const NO_UNITS_2D: u32 = 20512;
    pub const NO_UNITS_3D: u32 = 20513;
    pub const INVALID_ATTRIBUTE: u32 = 20517;
    pub const NO_DISCERNABLE_UNITS: u32 = 20518;
}

/// Species consistency rules (206xx)
pub mod species {
    pub const UNKNOWN_COMPARTMENT: u32 = 20601;
    pub const BOTH_AMOUNT_AND_CONCENTRATION: u32 = 20609;
    pub const CONSTANT_REACTANT_OR_PRODUCT: u32 = 20611;
    pub const MISSING_COMPARTMENT: u32 = 20614;
    pub const SPATIAL_SIZE_UNITS_REMOVED: u32 = 20615;
    pub const NO_SUBSTANCE_UNITS: u32 = 20616;
    pub const INVALID_CONVERSION_FACTOR: u32 = 20617;
    pub const INVALID_ATTRIBUTE: u32 = 20623;
}

/// Rule and constraint consistency (209xx-210xx)
pub mod rules {
    pub const ASSIGNMENT_TO_CONSTANT: u32 = 20903;
    pub const ASSIGNMENT_CYCLE: u32 = 20906;
    pub const ZERO_DIMENSION_VARIABLE: u32 = 20911;
    pub const CONSTRAINT_NOT_BOOLEAN: u32 = 21001;
    pub const CONSTRAINT_SUBOBJECT_ORDER: u32 = 21002;
}

/// Modeling-practice advisories (80xxx)
pub mod practice {
    pub const MISSING_COMPARTMENT_SIZE: u32 = 80501;
    pub const MISSING_SPECIES_INITIAL: u32 = 80601;
    pub const MISSING_PARAMETER_UNITS: u32 = 80701;
    pub const MISSING_PARAMETER_VALUE: u32 = 80702;
    pub const LOCAL_PARAMETER_SHADOWING: u32 = 81121;
}

/// Unit-consistency caveats (99xxx)
pub mod units {
    pub const UNVERIFIABLE_MATH_UNITS: u32 = 99505;
    pub const UNVERIFIABLE_ENTITY_UNITS: u32 = 99508;
}
