/// Wording for reserved floors, optionally naming who holds the reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reservation {
    holder: Option<String>,
}

impl Reservation {
    #[must_use]
    pub fn new(holder: Option<String>) -> Self {
        Self {
            holder: holder.filter(|h| !h.trim().is_empty()),
        }
    }

    #[must_use]
    pub fn holder(&self) -> Option<&str> {
        self.holder.as_deref()
    }

    /// "Reserved" or "Reserved for <holder>".
    #[must_use]
    pub fn label(&self) -> String {
        match &self.holder {
            Some(holder) => format!("Reserved for {holder}"),
            None => "Reserved".to_string(),
        }
    }

    #[must_use]
    pub fn notice(&self) -> String {
        match &self.holder {
            Some(holder) => format!("This floor is reserved for {holder} use"),
            None => "This floor is reserved".to_string(),
        }
    }

    /// Notice shown when a reserved floor is selected on its own.
    #[must_use]
    pub fn allocation_notice(&self) -> String {
        format!(
            "{} and is not available for company allocation.",
            self.notice()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_wording_without_holder() {
        let reservation = Reservation::default();
        assert_eq!(reservation.label(), "Reserved");
        assert_eq!(reservation.notice(), "This floor is reserved");
    }

    #[test]
    fn holder_is_named_in_every_label() {
        let reservation = Reservation::new(Some("IIT-Bombay".to_string()));
        assert_eq!(reservation.label(), "Reserved for IIT-Bombay");
        assert_eq!(
            reservation.allocation_notice(),
            "This floor is reserved for IIT-Bombay use and is not available for company allocation."
        );
    }

    #[test]
    fn blank_holder_is_ignored() {
        assert_eq!(Reservation::new(Some("  ".to_string())).holder(), None);
    }
}
