//! Error types for the mhw-params crate.

/// Error type for all fallible operations in the mhw-params crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    /// Returned when a parameter name is not part of the fixed schema.
    #[error("unknown parameter {name:?}")]
    UnknownParameter {
        /// The rejected name, as supplied.
        name: String,
    },

    /// Returned when a value cannot populate the parameter's field at all.
    #[error("parameter {key}: expected {expected}, got {got}")]
    TypeMismatch {
        /// Wire name of the parameter.
        key: &'static str,
        /// Description of the accepted value shape.
        expected: &'static str,
        /// Shape of the supplied value.
        got: &'static str,
    },

    /// Returned when a textual value cannot be parsed into a [`ParamValue`].
    ///
    /// [`ParamValue`]: crate::ParamValue
    #[error("cannot parse parameter value {input:?}")]
    Unparseable {
        /// The text that failed to parse.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_parameter() {
        let e = ParamError::UnknownParameter {
            name: "pctlie".to_string(),
        };
        assert_eq!(e.to_string(), "unknown parameter \"pctlie\"");
    }

    #[test]
    fn display_type_mismatch() {
        let e = ParamError::TypeMismatch {
            key: "pctile",
            expected: "number",
            got: "bool",
        };
        assert_eq!(e.to_string(), "parameter pctile: expected number, got bool");
    }

    #[test]
    fn display_unparseable() {
        let e = ParamError::Unparseable {
            input: "a..b".to_string(),
        };
        assert_eq!(e.to_string(), "cannot parse parameter value \"a..b\"");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ParamError>();
    }
}
