//! Fault descriptor
//!
//! The immutable snapshot of a fault that one resolution call works on.

use crate::fault::Fault;

/// Everything the resolver needs to know about a single fault.
///
/// The lineage starts with the fault's own type name at index 0, followed by
/// its declared ancestors in order. A descriptor never changes during a
/// resolution call; re-deriving the message (after a localization lookup)
/// produces a new descriptor with the same lineage and code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultDescriptor {
    lineage: Vec<String>,
    message: String,
    code: Option<String>,
    params: Vec<String>,
}

impl FaultDescriptor {
    /// Create a descriptor for a bare fault type with no ancestors.
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            lineage: vec![type_name.into()],
            message: message.into(),
            code: None,
            params: Vec::new(),
        }
    }

    /// Append the next, less specific ancestor to the lineage.
    pub fn ancestor(mut self, name: impl Into<String>) -> Self {
        self.lineage.push(name.into());
        self
    }

    /// Attach a business error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach message parameters.
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the message, keeping lineage, code, and params.
    ///
    /// Used after a localized message has been derived from the error code.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Build a descriptor from any [`Fault`].
    pub fn from_fault<F>(fault: &F) -> Self
    where
        F: Fault + ?Sized,
    {
        let ancestors = fault.ancestors();
        let mut lineage = Vec::with_capacity(1 + ancestors.len());
        lineage.push(fault.type_name().to_string());
        lineage.extend(ancestors.iter().map(|name| (*name).to_string()));

        Self {
            lineage,
            message: fault.to_string(),
            code: fault.code().map(str::to_string),
            params: fault.params(),
        }
    }

    /// The most specific type name (lineage index 0).
    pub fn type_name(&self) -> &str {
        &self.lineage[0]
    }

    /// The full chain: own type name first, then ancestors in declared order.
    pub fn lineage(&self) -> &[String] {
        &self.lineage
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct PaymentDeclined;

    impl std::fmt::Display for PaymentDeclined {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "payment declined by issuer")
        }
    }

    impl std::error::Error for PaymentDeclined {}

    impl Fault for PaymentDeclined {
        fn type_name(&self) -> &str {
            "PaymentDeclined"
        }

        fn ancestors(&self) -> &[&str] {
            &["PaymentFault", "Error"]
        }

        fn code(&self) -> Option<&str> {
            Some("PAY_DECLINED")
        }

        fn params(&self) -> Vec<String> {
            vec!["issuer".to_string()]
        }
    }

    #[test]
    fn test_lineage_starts_with_own_type() {
        let descriptor = FaultDescriptor::new("NotFound", "missing")
            .ancestor("ClientFault")
            .ancestor("Error");

        assert_eq!(descriptor.type_name(), "NotFound");
        assert_eq!(descriptor.lineage(), &["NotFound", "ClientFault", "Error"]);
    }

    #[test]
    fn test_from_fault_reads_declared_ancestry() {
        let descriptor = FaultDescriptor::from_fault(&PaymentDeclined);

        assert_eq!(
            descriptor.lineage(),
            &["PaymentDeclined", "PaymentFault", "Error"]
        );
        assert_eq!(descriptor.message(), "payment declined by issuer");
        assert_eq!(descriptor.code(), Some("PAY_DECLINED"));
        assert_eq!(descriptor.params(), &["issuer"]);
    }

    #[test]
    fn test_from_fault_works_through_trait_objects() {
        let fault: &dyn Fault = &PaymentDeclined;
        let descriptor = FaultDescriptor::from_fault(fault);

        assert_eq!(descriptor.type_name(), "PaymentDeclined");
    }

    #[test]
    fn test_with_message_keeps_code_and_lineage() {
        let descriptor = FaultDescriptor::from_fault(&PaymentDeclined)
            .with_message("Zahlung abgelehnt");

        assert_eq!(descriptor.message(), "Zahlung abgelehnt");
        assert_eq!(descriptor.code(), Some("PAY_DECLINED"));
        assert_eq!(
            descriptor.lineage(),
            &["PaymentDeclined", "PaymentFault", "Error"]
        );
    }
}
