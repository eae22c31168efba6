use super::CrudService;
use crate::domain::model::Reservation;
use crate::domain::repository::{ReservationRepository, Result};
use chrono::NaiveDate;

pub type ReservationService<R> = CrudService<Reservation, R>;

impl<R: ReservationRepository> ReservationService<R> {
    /// Reservations for an academic year strictly before `date` with the given validity.
    pub fn find_reservations_by_date_and_status(
        &self,
        date: NaiveDate,
        valid: bool,
    ) -> Result<Vec<Reservation>> {
        self.repository()
            .find_all_by_academic_year_before_and_valid(date, valid)
    }
}
