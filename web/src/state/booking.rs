use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("a service and a time slot must be selected")]
    MissingSelection,

    #[error("the booking is not in a state that allows this action")]
    InvalidPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingPhase {
    #[default]
    Idle,
    AwaitingConfirmation,
    Submitting,
    Confirmed,
}

/// The appointment the visitor is putting together. The phase only moves
/// forward through the confirmation flow when both a service and a time
/// slot have been chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    service_id: Option<String>,
    date: NaiveDate,
    time_slot: Option<String>,
    phase: BookingPhase,
    today: NaiveDate,
}

impl Booking {
    pub fn new(today: NaiveDate) -> Self {
        Booking {
            service_id: None,
            date: today,
            time_slot: None,
            phase: BookingPhase::Idle,
            today,
        }
    }

    pub fn service_id(&self) -> Option<&str> {
        self.service_id.as_deref()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn time_slot(&self) -> Option<&str> {
        self.time_slot.as_deref()
    }

    pub fn phase(&self) -> BookingPhase {
        self.phase
    }

    pub fn select_service(&mut self, id: impl Into<String>) {
        self.service_id = Some(id.into());
    }

    pub fn select_time(&mut self, slot: impl Into<String>) {
        self.time_slot = Some(slot.into());
    }

    /// Dates before today clamp to today.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = date.max(self.today);
    }

    pub fn can_confirm(&self) -> bool {
        self.service_id.is_some() && self.time_slot.is_some()
    }

    /// Open the confirmation dialog. Leaves the phase untouched when the
    /// selection is incomplete so the caller can prompt the visitor.
    pub fn open_confirmation(&mut self) -> Result<(), BookingError> {
        if !self.can_confirm() {
            return Err(BookingError::MissingSelection);
        }
        if self.phase != BookingPhase::Idle {
            return Err(BookingError::InvalidPhase);
        }
        self.phase = BookingPhase::AwaitingConfirmation;
        Ok(())
    }

    /// Dismiss the confirmation dialog without booking.
    pub fn close_confirmation(&mut self) {
        if self.phase == BookingPhase::AwaitingConfirmation {
            self.phase = BookingPhase::Idle;
        }
    }

    /// Kick off the (mocked) submission. The caller owns the timer that
    /// later drives `complete_submit`.
    pub fn begin_submit(&mut self) -> Result<(), BookingError> {
        if self.phase != BookingPhase::AwaitingConfirmation {
            return Err(BookingError::InvalidPhase);
        }
        if !self.can_confirm() {
            return Err(BookingError::MissingSelection);
        }
        self.phase = BookingPhase::Submitting;
        Ok(())
    }

    pub fn complete_submit(&mut self) {
        if self.phase == BookingPhase::Submitting {
            self.phase = BookingPhase::Confirmed;
        }
    }

    /// Called when the celebration overlay has run its course.
    pub fn acknowledge(&mut self) {
        if self.phase == BookingPhase::Confirmed {
            self.phase = BookingPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
    }

    fn ready_booking() -> Booking {
        let mut booking = Booking::new(today());
        booking.select_service("haircut");
        booking.select_time("10:00 AM");
        booking
    }

    #[test]
    fn starts_idle_on_today() {
        let booking = Booking::new(today());

        assert_eq!(booking.phase(), BookingPhase::Idle);
        assert_eq!(booking.date(), today());
        assert!(!booking.can_confirm());
    }

    #[test]
    fn field_updates_do_not_change_phase() {
        let mut booking = Booking::new(today());

        booking.select_service("facial");
        booking.select_time("09:00 AM");
        booking.select_date(today() + chrono::Days::new(2));

        assert_eq!(booking.phase(), BookingPhase::Idle);
    }

    #[test]
    fn past_dates_clamp_to_today() {
        let mut booking = Booking::new(today());

        booking.select_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        assert_eq!(booking.date(), today());
    }

    #[test]
    fn open_confirmation_requires_selection() {
        let mut booking = Booking::new(today());
        booking.select_service("haircut");

        let err = booking.open_confirmation().unwrap_err();

        assert_eq!(err, BookingError::MissingSelection);
        assert_eq!(booking.phase(), BookingPhase::Idle);
    }

    #[test]
    fn full_flow_reaches_confirmed_and_resets() {
        let mut booking = ready_booking();

        booking.open_confirmation().unwrap();
        assert_eq!(booking.phase(), BookingPhase::AwaitingConfirmation);

        booking.begin_submit().unwrap();
        assert_eq!(booking.phase(), BookingPhase::Submitting);

        booking.complete_submit();
        assert_eq!(booking.phase(), BookingPhase::Confirmed);

        booking.acknowledge();
        assert_eq!(booking.phase(), BookingPhase::Idle);
    }

    #[test]
    fn begin_submit_rejected_outside_confirmation() {
        let mut booking = ready_booking();

        let err = booking.begin_submit().unwrap_err();

        assert_eq!(err, BookingError::InvalidPhase);
        assert_eq!(booking.phase(), BookingPhase::Idle);
    }

    #[test]
    fn complete_submit_ignored_unless_submitting() {
        let mut booking = ready_booking();
        booking.open_confirmation().unwrap();

        booking.complete_submit();

        assert_eq!(booking.phase(), BookingPhase::AwaitingConfirmation);
    }

    #[test]
    fn close_confirmation_returns_to_idle() {
        let mut booking = ready_booking();
        booking.open_confirmation().unwrap();

        booking.close_confirmation();

        assert_eq!(booking.phase(), BookingPhase::Idle);
        assert!(booking.can_confirm());
    }
}
